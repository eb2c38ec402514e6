pub mod card;
pub mod contact;
pub mod format;
pub mod variants;

pub use card::CardSummary;
pub use contact::ContactCard;

use crate::models::{Dimensions, Footprint, KeyMoneyItem, Labeled, Property, PropertyDetails, Slot, Term};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt;

/// Icon hint for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Building,
    Check,
    Bed,
    Bath,
    Home,
    Users,
    Droplet,
    Zap,
    Compass,
    Sun,
    Clock,
    Maximize,
    Calendar,
    Shield,
    Wifi,
    Car,
    Gauge,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Neutral,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub text: Cow<'static, str>,
    pub tone: BadgeTone,
}

impl Badge {
    pub fn neutral(text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            text: text.into(),
            tone: BadgeTone::Neutral,
        }
    }

    pub fn warning(text: impl Into<Cow<'static, str>>) -> Self {
        Self {
            text: text.into(),
            tone: BadgeTone::Warning,
        }
    }
}

/// One labelled attribute in the details grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailItem {
    pub icon: Icon,
    pub label: &'static str,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Badge>,
}

impl DetailItem {
    pub fn new(icon: Icon, label: &'static str, value: impl Into<String>) -> Self {
        Self {
            icon,
            label,
            value: value.into(),
            badge: None,
        }
    }

    pub fn with_badge(mut self, badge: Badge) -> Self {
        self.badge = Some(badge);
        self
    }
}

/// Conditional blocks shown under the details grid.
/// Each one appears only when the record carries the data behind it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "panel", rename_all = "snake_case")]
pub enum Panel {
    Majlis {
        private_entrance: bool,
        bathroom: bool,
    },
    RoomSizes {
        rooms: Vec<Dimensions>,
        kitchen: Option<Dimensions>,
    },
    Finance {
        deposit: Option<u64>,
        insurance: Option<u64>,
        brokerage: Option<u64>,
        guarantor_required: bool,
    },
    ShopAreas {
        shop: Footprint,
        storage: Option<Dimensions>,
    },
    KeyMoney {
        amount: u64,
        includes: Vec<Term<KeyMoneyItem>>,
        owner_approved: bool,
    },
    MonthlyIncome {
        amount: u64,
    },
    Disputes,
    Yard {
        size: f64,
    },
    Furniture {
        description: String,
    },
    StageImage {
        url: String,
    },
    PestStatus {
        pest_free: bool,
    },
    AvailableSlots {
        slots: Vec<Slot>,
    },
}

impl Panel {
    pub fn title(&self) -> &'static str {
        match self {
            Panel::Majlis { .. } => "تفاصيل المجلس",
            Panel::RoomSizes { .. } => "مساحات الغرف",
            Panel::Finance { .. } => "المتطلبات المالية",
            Panel::ShopAreas { .. } => "المساحات",
            Panel::KeyMoney { .. } => "نقل القدم (خلو الرجل)",
            Panel::MonthlyIncome { .. } => "الدخل الشهري",
            Panel::Disputes => "تنبيه",
            Panel::Yard { .. } => "الحوش (الساحة الخارجية)",
            Panel::Furniture { .. } => "الأثاث",
            Panel::StageImage { .. } => "صورة الكوشة",
            Panel::PestStatus { .. } => "النظافة",
            Panel::AvailableSlots { .. } => "المواعيد المتاحة",
        }
    }

    /// Text lines of the panel body, in display order
    pub fn lines(&self) -> Vec<String> {
        match self {
            Panel::Majlis {
                private_entrance,
                bathroom,
            } => vec![
                format!("مدخل مستقل: {}", format::yes_no(*private_entrance)),
                format!("حمام مستقل: {}", format::yes_no(*bathroom)),
            ],
            Panel::RoomSizes { rooms, kitchen } => {
                let mut lines: Vec<String> = rooms
                    .iter()
                    .enumerate()
                    .map(|(i, room)| format!("غرفة {}: {}", i + 1, format::dimensions(room)))
                    .collect();
                if let Some(kitchen) = kitchen {
                    lines.push(format!("المطبخ: {}", format::dimensions(kitchen)));
                }
                lines
            }
            Panel::Finance {
                deposit,
                insurance,
                brokerage,
                guarantor_required,
            } => {
                let mut lines = Vec::new();
                if let Some(amount) = deposit {
                    lines.push(format!("العربون: {}", format::rial_amount(*amount)));
                }
                if let Some(amount) = insurance {
                    lines.push(format!("التأمين: {}", format::rial_amount(*amount)));
                }
                if let Some(amount) = brokerage {
                    lines.push(format!("السعاية: {}", format::rial_amount(*amount)));
                }
                let guarantor = if *guarantor_required {
                    "مطلوب"
                } else {
                    "غير مطلوب"
                };
                lines.push(format!("ضامن: {}", guarantor));
                lines
            }
            Panel::ShopAreas { shop, storage } => {
                let mut lines = vec![format!("مساحة المحل: {}", format::footprint(shop))];
                if let Some(storage) = storage {
                    lines.push(format!("مساحة المخزن: {}", format::dimensions(storage)));
                }
                lines
            }
            Panel::KeyMoney {
                amount,
                includes,
                owner_approved,
            } => {
                let mut lines = vec![format!("المبلغ: {}", format::rial_amount(*amount))];
                if !includes.is_empty() {
                    lines.push("يشمل:".to_string());
                    lines.extend(includes.iter().map(|item| format!("- {}", item.label())));
                }
                let approval = if *owner_approved {
                    "✅ موافق"
                } else {
                    "❌ غير موافق"
                };
                lines.push(format!("موافقة المالك: {}", approval));
                lines
            }
            Panel::MonthlyIncome { amount } => vec![format::rial_amount(*amount)],
            Panel::Disputes => vec!["⚠️ يوجد نزاعات على العقار".to_string()],
            Panel::Yard { size } => vec![format!("المساحة: {} متر مربع", format::meters(*size))],
            Panel::Furniture { description } => vec![description.clone()],
            Panel::StageImage { url } => vec![url.clone()],
            Panel::PestStatus { pest_free } => {
                let status = if *pest_free {
                    "✅ القاعة خالية من الحشرات"
                } else {
                    "القاعة قد تحتوي على حشرات"
                };
                vec![status.to_string()]
            }
            Panel::AvailableSlots { slots } => slots
                .iter()
                .map(|slot| format!("{}: {} - {}", slot.date, slot.from, slot.to))
                .collect(),
        }
    }
}

/// Title block of the details view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailHeader {
    pub title: String,
    pub type_label: &'static str,
    pub featured: bool,
    pub location: String,
    pub price: String,
    pub negotiable: bool,
}

/// Everything the details dialog shows for one record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailView {
    pub header: DetailHeader,
    pub description: String,
    pub gallery: Vec<String>,
    pub items: Vec<DetailItem>,
    pub panels: Vec<Panel>,
    pub contact: ContactCard,
}

/// Variant-specific part of a details view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    pub items: Vec<DetailItem>,
    pub panels: Vec<Panel>,
}

/// Number of images shown in the details gallery
const GALLERY_SIZE: usize = 3;

/// "district • neighborhood", with the street appended when known
pub fn location_line(property: &Property) -> String {
    let location = &property.location;
    let mut line = format!("{} • {}", location.district.label(), location.neighborhood);
    if let Some(street) = &location.street {
        line.push_str(" • ");
        line.push_str(street);
    }
    line
}

/// Project one record onto its details view
pub fn render(property: &Property) -> DetailView {
    let section = render_details(&property.details);
    DetailView {
        header: DetailHeader {
            title: property.title.clone(),
            type_label: property.property_type().label(),
            featured: property.featured,
            location: location_line(property),
            price: format::full_price(&property.price),
            negotiable: property.price.negotiable,
        },
        description: property.description.clone(),
        gallery: property.images.iter().take(GALLERY_SIZE).cloned().collect(),
        items: section.items,
        panels: section.panels,
        contact: ContactCard::from(&property.contact),
    }
}

/// Select the field set for the record's variant
pub fn render_details(details: &PropertyDetails) -> Section {
    match details {
        PropertyDetails::Apartment(apt) => variants::apartment(apt),
        PropertyDetails::Building(building) => variants::building(building),
        PropertyDetails::Villa(villa) => variants::villa(villa),
        PropertyDetails::Shop(shop) => variants::shop(shop),
        PropertyDetails::Office(office) => variants::office(office),
        PropertyDetails::Hotel(hotel) => variants::hotel(hotel),
        PropertyDetails::WeddingHall(hall) => variants::wedding_hall(hall),
        PropertyDetails::Basement(basement) => variants::basement(basement),
        PropertyDetails::Land(land) => variants::land(land),
        PropertyDetails::Vehicle(vehicle) => variants::vehicle(vehicle),
    }
}

impl fmt::Display for DetailView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let header = &self.header;
        write!(f, "{} [{}]", header.title, header.type_label)?;
        if header.featured {
            write!(f, " ⭐ مميز")?;
        }
        writeln!(f)?;
        writeln!(f, "📍 {}", header.location)?;
        write!(f, "💰 {}", header.price)?;
        if header.negotiable {
            write!(f, " (قابل للتفاوض)")?;
        }
        writeln!(f)?;
        writeln!(f)?;
        writeln!(f, "{}", self.description)?;
        writeln!(f)?;

        for item in &self.items {
            write!(f, "  {}: {}", item.label, item.value)?;
            if let Some(badge) = &item.badge {
                write!(f, " [{}]", badge.text)?;
            }
            writeln!(f)?;
        }

        for panel in &self.panels {
            writeln!(f)?;
            writeln!(f, "  {}:", panel.title())?;
            for line in panel.lines() {
                writeln!(f, "    • {}", line)?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", self.contact)
    }
}
