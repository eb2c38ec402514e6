//! Per-variant field sets for the details view.

use super::format::{available, group_thousands, meters, yes_no};
use super::{Badge, DetailItem, Icon, Panel, Section};
use crate::models::*;

fn shared_badge(shared: bool) -> Badge {
    if shared {
        Badge::warning("مشترك")
    } else {
        Badge::neutral("مستقل")
    }
}

pub fn apartment(apt: &Apartment) -> Section {
    let items = vec![
        DetailItem::new(
            Icon::Building,
            "الدور",
            format!("الدور {} من {}", apt.floor, apt.total_floors),
        ),
        DetailItem::new(Icon::Check, "مصعد", available(apt.has_elevator)),
        DetailItem::new(Icon::Bed, "عدد الغرف", format!("{} غرفة", apt.room_count())),
        DetailItem::new(Icon::Bath, "عدد الحمامات", apt.bathrooms.to_string()),
        DetailItem::new(Icon::Home, "مطبخ", available(apt.kitchen.is_some())),
        DetailItem::new(Icon::Users, "مجلس خارجي", available(apt.majlis.is_some())),
        DetailItem::new(Icon::Droplet, "المياه", apt.water_source.label())
            .with_badge(shared_badge(apt.water_shared)),
        DetailItem::new(Icon::Zap, "الكهرباء", apt.electricity_source.label())
            .with_badge(shared_badge(apt.electricity_shared)),
        DetailItem::new(Icon::Compass, "اتجاه الواجهة", apt.direction.label()),
        DetailItem::new(
            Icon::Sun,
            "دخول الشمس",
            if apt.is_sunny { "مشمسة ☀️" } else { "غير مشمسة" },
        ),
        DetailItem::new(Icon::Home, "مفروشة", yes_no(apt.furnished)),
        DetailItem::new(
            Icon::Building,
            "استخدام تجاري",
            if apt.commercial_use { "مسموح" } else { "غير مسموح" },
        ),
    ];

    let mut panels = Vec::new();
    if let Some(majlis) = &apt.majlis {
        panels.push(Panel::Majlis {
            private_entrance: majlis.has_private_entrance,
            bathroom: majlis.has_bathroom,
        });
    }
    panels.push(Panel::RoomSizes {
        rooms: apt.rooms.clone(),
        kitchen: apt.kitchen.as_ref().and_then(|kitchen| kitchen.size),
    });
    if !apt.financial.is_empty() || apt.requires_guarantor {
        panels.push(Panel::Finance {
            deposit: apt.financial.deposit,
            insurance: apt.financial.insurance,
            brokerage: apt.financial.brokerage,
            guarantor_required: apt.requires_guarantor,
        });
    }

    Section { items, panels }
}

pub fn building(building: &Building) -> Section {
    let items = vec![
        DetailItem::new(Icon::Building, "الحالة", building.condition.label()),
        DetailItem::new(Icon::Calendar, "العمر", building.age.label()),
        DetailItem::new(Icon::Home, "الغرض", building.purpose.label()),
        DetailItem::new(Icon::Building, "عدد الأدوار", format!("{} طابق", building.floors)),
        DetailItem::new(Icon::Home, "عدد الشقق", format!("{} شقة", building.apartments)),
        DetailItem::new(Icon::Check, "بئر ارتوازي", available(building.has_well)),
        DetailItem::new(Icon::Check, "مولد كهرباء", available(building.has_generator)),
        DetailItem::new(Icon::Check, "مسجلة", yes_no(building.registered)),
    ];

    let mut panels = Vec::new();
    if let Some(amount) = building.monthly_income {
        panels.push(Panel::MonthlyIncome { amount });
    }
    if building.has_disputes {
        panels.push(Panel::Disputes);
    }

    Section { items, panels }
}

pub fn villa(villa: &Villa) -> Section {
    let items = vec![
        DetailItem::new(Icon::Building, "الحالة", villa.condition.label()),
        DetailItem::new(Icon::Calendar, "العمر", villa.age.label()),
        DetailItem::new(Icon::Check, "مفروشة", yes_no(villa.furnished)),
        DetailItem::new(Icon::Building, "عدد الطوابق", format!("{} طابق", villa.floors)),
        DetailItem::new(Icon::Bed, "عدد الغرف", format!("{} غرفة", villa.rooms)),
        DetailItem::new(Icon::Bath, "عدد الحمامات", villa.bathrooms.to_string()),
        DetailItem::new(Icon::Check, "ملحق السطح", available(villa.has_roof_annex)),
        DetailItem::new(Icon::Check, "غرفة حراسة", available(villa.has_guard_room)),
        DetailItem::new(Icon::Check, "مسبح", available(villa.has_pool)),
    ];

    let panels = villa
        .yard
        .iter()
        .map(|yard| Panel::Yard { size: yard.size })
        .collect();

    Section { items, panels }
}

pub fn shop(shop: &Shop) -> Section {
    let storage = match &shop.storage {
        Some(storage) => format!("يوجد ({})", storage.kind.label()),
        None => available(false).to_string(),
    };
    let items = vec![
        DetailItem::new(Icon::Building, "نوع الشارع", shop.street_type.label()),
        DetailItem::new(Icon::Home, "عدد الفتحات", format!("{} فتحة", shop.openings)),
        DetailItem::new(Icon::Check, "حمام", available(shop.has_bathroom)),
        DetailItem::new(Icon::Check, "مخزن", storage),
        DetailItem::new(Icon::Home, "حالة المحل", shop.lease.label()),
        DetailItem::new(Icon::Zap, "عداد الكهرباء", shop.electricity_meter.label()),
    ];

    let mut panels = vec![Panel::ShopAreas {
        shop: shop.area,
        storage: shop.storage.as_ref().and_then(|storage| storage.area),
    }];
    if let Some(terms) = shop.lease.key_money() {
        panels.push(Panel::KeyMoney {
            amount: terms.amount,
            includes: terms.includes.clone(),
            owner_approved: terms.owner_approved,
        });
    }

    Section { items, panels }
}

pub fn office(office: &Office) -> Section {
    let items = vec![
        DetailItem::new(Icon::Bed, "عدد الغرف", format!("{} غرفة", office.rooms)),
        DetailItem::new(Icon::Bath, "عدد الحمامات", office.bathrooms.to_string()),
        DetailItem::new(Icon::Building, "الحالة", office.condition.label()),
        DetailItem::new(Icon::Home, "أثاث", available(office.furniture.is_some())),
        DetailItem::new(Icon::Zap, "الكهرباء", office.electricity_source.label()),
        DetailItem::new(Icon::Droplet, "المياه", office.water_source.label()),
    ];

    let panels = office
        .furniture
        .as_ref()
        .and_then(|furniture| furniture.description.clone())
        .map(|description| Panel::Furniture { description })
        .into_iter()
        .collect();

    Section { items, panels }
}

pub fn hotel(hotel: &Hotel) -> Section {
    let mut items = vec![
        DetailItem::new(Icon::Home, "نوع الوحدة", hotel.unit_type.label()),
        DetailItem::new(Icon::Users, "الفئة", hotel.category.label()),
        DetailItem::new(Icon::Bed, "عدد الأسرة", hotel.beds.to_string()),
        DetailItem::new(Icon::Users, "مجلس عربي", available(hotel.has_arabic_majlis)),
    ];
    if let Some(rooms) = hotel.rooms {
        items.push(DetailItem::new(Icon::Bed, "عدد الغرف", format!("{} غرفة", rooms)));
    }
    let bathroom_kind = hotel.bathroom_type.label().to_string();
    items.push(
        DetailItem::new(Icon::Bath, "عدد الحمامات", hotel.bathrooms.to_string()).with_badge(
            if hotel.bathroom_type.known() == Some(&BathroomKind::Shared) {
                Badge::warning(bathroom_kind)
            } else {
                Badge::neutral(bathroom_kind)
            },
        ),
    );
    items.push(DetailItem::new(Icon::Check, "مفروشة", yes_no(hotel.furnished)));

    let mut internet = DetailItem::new(Icon::Wifi, "إنترنت", available(hotel.internet.is_some()));
    if let Some(included) = hotel.internet.as_ref().and_then(|net| net.included) {
        internet = internet.with_badge(if included {
            Badge::neutral("مشمول بالسعر")
        } else {
            Badge::warning("غير مشمول")
        });
    }
    items.push(internet);
    items.push(DetailItem::new(Icon::Droplet, "ماء ساخن", available(hotel.has_hot_water)));

    Section {
        items,
        panels: Vec::new(),
    }
}

pub fn wedding_hall(hall: &WeddingHall) -> Section {
    let items = vec![
        DetailItem::new(Icon::Building, "اسم القاعة", hall.hall_name.clone()),
        DetailItem::new(Icon::Clock, "التوقيت", hall.timing.label()),
        DetailItem::new(Icon::Users, "النوع", hall.gender.label()),
        DetailItem::new(Icon::Users, "السعة", format!("{} شخص", hall.capacity)),
        DetailItem::new(Icon::Home, "النمط", hall.style.label()),
        DetailItem::new(Icon::Maximize, "المساحة", format!("{} متر مربع", meters(hall.area))),
        DetailItem::new(Icon::Check, "كوشة", available(hall.stage.is_some())),
        DetailItem::new(Icon::Check, "صالة طعام", available(hall.has_dining_hall)),
        DetailItem::new(Icon::Bath, "عدد الحمامات", hall.bathrooms.to_string()),
        DetailItem::new(Icon::Check, "مصلى", available(hall.has_prayer_room)),
    ];

    let mut panels = Vec::new();
    if let Some(url) = hall.stage.as_ref().and_then(|stage| stage.image.clone()) {
        panels.push(Panel::StageImage { url });
    }
    panels.push(Panel::PestStatus {
        pest_free: hall.pest_free,
    });
    if !hall.available_slots.is_empty() {
        panels.push(Panel::AvailableSlots {
            slots: hall.available_slots.clone(),
        });
    }

    Section { items, panels }
}

pub fn basement(basement: &Basement) -> Section {
    let items = vec![
        DetailItem::new(Icon::Maximize, "المساحة", super::format::footprint(&basement.area)),
        DetailItem::new(Icon::Bath, "حمام", available(basement.has_bathroom)),
        DetailItem::new(Icon::Check, "تهوية", available(basement.has_ventilation)),
        DetailItem::new(Icon::Shield, "الحماية من السيول", basement.flood_protection.label()),
    ];
    Section {
        items,
        panels: Vec::new(),
    }
}

pub fn land(land: &Land) -> Section {
    let usage = match (land.residential, land.commercial) {
        (true, true) => "سكني وتجاري",
        (true, false) => "سكني",
        (false, true) => "تجاري",
        (false, false) => "غير محدد",
    };
    let items = vec![
        DetailItem::new(Icon::Maximize, "المساحة", format!("{} متر مربع", meters(land.area))),
        DetailItem::new(Icon::Shield, "سور", available(land.has_wall)),
        DetailItem::new(Icon::Droplet, "ماء", available(land.has_water)),
        DetailItem::new(Icon::Zap, "كهرباء", available(land.has_electricity)),
        DetailItem::new(Icon::Home, "الاستخدام", usage),
    ];
    Section {
        items,
        panels: Vec::new(),
    }
}

pub fn vehicle(vehicle: &Vehicle) -> Section {
    let mut items = vec![
        DetailItem::new(Icon::Car, "الماركة", vehicle.make.clone()),
        DetailItem::new(Icon::Car, "الطراز", vehicle.model.clone()),
        DetailItem::new(Icon::Calendar, "سنة الصنع", vehicle.year.to_string()),
        DetailItem::new(Icon::Gauge, "ناقل الحركة", vehicle.transmission.label()),
        DetailItem::new(Icon::Zap, "الوقود", vehicle.fuel.label()),
    ];
    if let Some(km) = vehicle.mileage_km {
        items.push(DetailItem::new(
            Icon::Gauge,
            "المسافة المقطوعة",
            format!("{} كم", group_thousands(u64::from(km))),
        ));
    }
    Section {
        items,
        panels: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample::sample_properties;

    fn details(id: &str) -> PropertyDetails {
        sample_properties()
            .into_iter()
            .find(|p| p.id == id)
            .map(|p| p.details)
            .unwrap()
    }

    fn value<'a>(section: &'a Section, label: &str) -> &'a str {
        section
            .items
            .iter()
            .find(|item| item.label == label)
            .map(|item| item.value.as_str())
            .unwrap()
    }

    #[test]
    fn test_apartment_shared_utilities_get_warning_badge() {
        let PropertyDetails::Apartment(apt) = details("2") else {
            panic!("expected apartment");
        };
        let section = apartment(&apt);
        let water = section.items.iter().find(|i| i.label == "المياه").unwrap();
        assert_eq!(water.value, "حكومي");
        assert_eq!(water.badge, Some(Badge::warning("مشترك")));
        assert_eq!(value(&section, "عدد الغرف"), "3 غرفة");
    }

    #[test]
    fn test_villa_yard_panel() {
        let PropertyDetails::Villa(v) = details("3") else {
            panic!("expected villa");
        };
        let section = villa(&v);
        assert_eq!(section.panels, vec![Panel::Yard { size: 200.0 }]);
        assert_eq!(value(&section, "الحالة"), "مشطبة");
    }

    #[test]
    fn test_shop_storage_and_areas() {
        let PropertyDetails::Shop(s) = details("4") else {
            panic!("expected shop");
        };
        let section = shop(&s);
        assert_eq!(value(&section, "مخزن"), "يوجد (داخلي)");
        let areas = section.panels[0].lines();
        assert_eq!(areas[0], "مساحة المحل: 6م × 4م × 3.5م ارتفاع");
        assert_eq!(areas[1], "مساحة المخزن: 3م × 2م");
    }

    #[test]
    fn test_wedding_hall_panels() {
        let PropertyDetails::WeddingHall(hall) = details("6") else {
            panic!("expected wedding hall");
        };
        let section = wedding_hall(&hall);
        assert_eq!(value(&section, "السعة"), "400 شخص");
        assert!(matches!(section.panels[0], Panel::StageImage { .. }));
        assert_eq!(section.panels[1], Panel::PestStatus { pest_free: true });
        assert_eq!(section.panels[2].lines().len(), 2);
    }

    #[test]
    fn test_office_furniture_description() {
        let PropertyDetails::Office(o) = details("8") else {
            panic!("expected office");
        };
        let section = office(&o);
        assert!(matches!(&section.panels[..], [Panel::Furniture { .. }]));
        assert_eq!(value(&section, "الكهرباء"), "طاقة شمسية");
    }

    #[test]
    fn test_hotel_internet_badge() {
        let PropertyDetails::Hotel(h) = details("11") else {
            panic!("expected hotel");
        };
        let section = hotel(&h);
        let internet = section.items.iter().find(|i| i.label == "إنترنت").unwrap();
        assert_eq!(internet.value, "يوجد");
        assert_eq!(internet.badge, Some(Badge::neutral("مشمول بالسعر")));
        assert_eq!(value(&section, "عدد الغرف"), "2 غرفة");
    }

    fn bathroom_badge(hotel_details: &Hotel) -> Badge {
        hotel(hotel_details)
            .items
            .into_iter()
            .find(|i| i.label == "عدد الحمامات")
            .and_then(|i| i.badge)
            .unwrap()
    }

    #[test]
    fn test_hotel_bathroom_badge_follows_recorded_kind() {
        let PropertyDetails::Hotel(mut h) = details("11") else {
            panic!("expected hotel");
        };
        h.bathroom_type = Term::Known(BathroomKind::Shared);
        assert_eq!(bathroom_badge(&h), Badge::warning("مشترك"));

        h.bathroom_type = Term::Known(BathroomKind::Private);
        assert_eq!(bathroom_badge(&h), Badge::neutral("خاص"));

        h.bathroom_type = Term::Raw("semi-private".to_string());
        assert_eq!(bathroom_badge(&h), Badge::neutral("semi-private"));
    }

    #[test]
    fn test_land_usage() {
        let PropertyDetails::Land(l) = details("13") else {
            panic!("expected land");
        };
        assert_eq!(value(&land(&l), "الاستخدام"), "سكني");
        assert_eq!(value(&land(&l), "المساحة"), "400 متر مربع");
    }

    #[test]
    fn test_vehicle_mileage() {
        let PropertyDetails::Vehicle(v) = details("14") else {
            panic!("expected vehicle");
        };
        let section = vehicle(&v);
        assert_eq!(value(&section, "المسافة المقطوعة"), "180,000 كم");
        assert_eq!(value(&section, "الوقود"), "ديزل");
    }

    #[test]
    fn test_basement_dimensions() {
        let PropertyDetails::Basement(b) = details("12") else {
            panic!("expected basement");
        };
        let section = basement(&b);
        assert_eq!(value(&section, "المساحة"), "12م × 8م × 3م ارتفاع");
        assert_eq!(value(&section, "الحماية من السيول"), "متوسطة");
    }
}
