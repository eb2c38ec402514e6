use crate::models::{Currency, Dimensions, Footprint, Price, Term};

/// 1234567 -> "1,234,567"
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Full price for the detail header
pub fn full_price(price: &Price) -> String {
    let amount = group_thousands(price.amount);
    match &price.currency {
        Term::Known(Currency::Yer) => format!("{} ريال يمني", amount),
        Term::Known(Currency::Usd) => format!("${} دولار", amount),
        Term::Known(other) => format!("{} {}", amount, other.as_str()),
        Term::Raw(raw) => format!("{} {}", amount, raw),
    }
}

/// Compact price for listing cards; rial prices are shown in thousands
pub fn short_price(price: &Price) -> String {
    match &price.currency {
        Term::Known(Currency::Yer) => format!("{} ألف ريال", (price.amount + 500) / 1000),
        Term::Known(Currency::Usd) => format!("${}", group_thousands(price.amount)),
        Term::Known(other) => format!("{} {}", group_thousands(price.amount), other.as_str()),
        Term::Raw(raw) => format!("{} {}", group_thousands(price.amount), raw),
    }
}

/// Amounts quoted alongside the price (deposit, key money, income)
pub fn rial_amount(amount: u64) -> String {
    format!("{} ريال", group_thousands(amount))
}

/// Drop a trailing ".0" so 4.0 reads as 4
pub fn meters(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

pub fn dimensions(dims: &Dimensions) -> String {
    format!("{}م × {}م", meters(dims.length), meters(dims.width))
}

pub fn footprint(area: &Footprint) -> String {
    match area.height {
        Some(height) => format!(
            "{}م × {}م × {}م ارتفاع",
            meters(area.length),
            meters(area.width),
            meters(height)
        ),
        None => format!("{}م × {}م", meters(area.length), meters(area.width)),
    }
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "نعم"
    } else {
        "لا"
    }
}

pub fn available(value: bool) -> &'static str {
    if value {
        "يوجد"
    } else {
        "لا يوجد"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(5_000_000), "5,000,000");
    }

    #[test]
    fn test_prices() {
        let rial = Price {
            amount: 400_000,
            currency: Currency::Yer.into(),
            negotiable: true,
        };
        assert_eq!(full_price(&rial), "400,000 ريال يمني");
        assert_eq!(short_price(&rial), "400 ألف ريال");

        let dollars = Price {
            amount: 15_000,
            currency: Currency::Usd.into(),
            negotiable: false,
        };
        assert_eq!(full_price(&dollars), "$15,000 دولار");
        assert_eq!(short_price(&dollars), "$15,000");

        let riyal = Price {
            amount: 900,
            currency: Currency::Sar.into(),
            negotiable: false,
        };
        assert_eq!(short_price(&riyal), "900 SAR");
    }

    #[test]
    fn test_unknown_currency_is_shown_as_given() {
        let euros = Price {
            amount: 12_500,
            currency: Term::Raw("EUR".to_string()),
            negotiable: false,
        };
        assert_eq!(full_price(&euros), "12,500 EUR");
        assert_eq!(short_price(&euros), "12,500 EUR");
    }

    #[test]
    fn test_footprint_with_height() {
        let area = Footprint {
            length: 6.0,
            width: 4.0,
            height: Some(3.5),
        };
        assert_eq!(footprint(&area), "6م × 4م × 3.5م ارتفاع");
        assert_eq!(dimensions(&Dimensions::new(3.5, 3.0)), "3.5م × 3م");
    }
}
