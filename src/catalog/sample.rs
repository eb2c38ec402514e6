use crate::catalog::traits::ListingRepository;
use crate::models::*;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use tracing::info;

/// The built-in listings shipped with the catalog
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleListings;

impl SampleListings {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ListingRepository for SampleListings {
    async fn listings(&self) -> Result<Vec<Property>> {
        let properties = sample_properties();
        info!("Loaded {} sample listings", properties.len());
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "sample"
    }
}

fn listed_on(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

fn images(urls: &[&str]) -> Vec<String> {
    urls.iter().map(|url| url.to_string()).collect()
}

fn contact(name: &str, phone: &str, role: ContactRole) -> Contact {
    Contact {
        name: name.to_string(),
        phone: phone.to_string(),
        role: role.into(),
    }
}

fn location(district: District, neighborhood: &str, street: Option<&str>) -> Location {
    Location {
        district: district.into(),
        neighborhood: neighborhood.to_string(),
        street: street.map(str::to_string),
    }
}

fn price(amount: u64, currency: Currency, negotiable: bool) -> Price {
    Price {
        amount,
        currency: currency.into(),
        negotiable,
    }
}

/// Build the sample dataset, in display order
pub fn sample_properties() -> Vec<Property> {
    vec![
        Property {
            id: "1".to_string(),
            title: "شقة فاخرة في حدة - 4 غرف مع إطلالة مميزة".to_string(),
            price: price(400_000, Currency::Yer, true),
            location: location(District::Sabeen, "حدة", Some("شارع حدة الرئيسي")),
            description: "شقة واسعة ومشمسة في أرقى أحياء صنعاء، تتميز بالإطلالة الجنوبية المشمسة والتشطيبات الفاخرة. قريبة من جميع الخدمات والأسواق.".to_string(),
            images: images(&[
                "https://images.unsplash.com/photo-1515263487990-61b07816b324",
                "https://images.unsplash.com/photo-1502672260266-1c1ef2d93688",
            ]),
            contact: contact("أحمد محمد", "777123456", ContactRole::Owner),
            featured: true,
            created_at: listed_on(2024, 1, 15),
            details: PropertyDetails::Apartment(Apartment {
                floor: 3,
                total_floors: 5,
                has_elevator: true,
                rooms: vec![
                    Dimensions::new(4.0, 3.5),
                    Dimensions::new(4.0, 3.5),
                    Dimensions::new(3.5, 3.0),
                    Dimensions::new(3.0, 3.0),
                ],
                bathrooms: 2,
                kitchen: Some(Kitchen {
                    size: Some(Dimensions::new(4.0, 2.5)),
                }),
                majlis: Some(Majlis {
                    has_bathroom: true,
                    has_private_entrance: true,
                }),
                water_source: WaterSource::Tank.into(),
                water_shared: false,
                electricity_source: ElectricitySource::Solar.into(),
                electricity_shared: false,
                direction: Direction::South.into(),
                is_sunny: true,
                financial: FinancialTerms {
                    deposit: Some(50_000),
                    insurance: Some(100_000),
                    brokerage: None,
                },
                requires_guarantor: false,
                commercial_use: false,
                furnished: false,
            }),
        },
        Property {
            id: "2".to_string(),
            title: "شقة اقتصادية في شعوب - 3 غرف".to_string(),
            price: price(150_000, Currency::Yer, true),
            location: location(District::Shuub, "شعوب", None),
            description: "شقة مناسبة للعائلات الصغيرة، في منطقة حيوية قريبة من المدارس والأسواق. ماء وكهرباء مستقلة.".to_string(),
            images: images(&[
                "https://images.unsplash.com/photo-1560448204-e02f11c3d0e2",
                "https://images.unsplash.com/photo-1484154218962-a197022b5858",
            ]),
            contact: contact("خالد علي", "773456789", ContactRole::Broker),
            featured: false,
            created_at: listed_on(2024, 1, 20),
            details: PropertyDetails::Apartment(Apartment {
                floor: 2,
                total_floors: 4,
                has_elevator: false,
                rooms: vec![
                    Dimensions::new(3.5, 3.0),
                    Dimensions::new(3.5, 3.0),
                    Dimensions::new(3.0, 2.5),
                ],
                bathrooms: 1,
                kitchen: Some(Kitchen {
                    size: Some(Dimensions::new(3.0, 2.0)),
                }),
                majlis: None,
                water_source: WaterSource::Government.into(),
                water_shared: true,
                electricity_source: ElectricitySource::Government.into(),
                electricity_shared: true,
                direction: Direction::East.into(),
                is_sunny: false,
                financial: FinancialTerms::default(),
                requires_guarantor: true,
                commercial_use: false,
                furnished: false,
            }),
        },
        Property {
            id: "3".to_string(),
            title: "فيلا راقية في الحي السياسي - مفروشة بالكامل".to_string(),
            price: price(5_000, Currency::Usd, false),
            location: location(District::Sabeen, "الحي السياسي", None),
            description: "فيلا فاخرة جديدة مفروشة بأحدث الأثاث، مناسبة للدبلوماسيين والمغتربين. تحتوي على 6 غرف نوم رئيسية وحوش واسع.".to_string(),
            images: images(&[
                "https://images.unsplash.com/photo-1600596542815-ffad4c1539a9",
                "https://images.unsplash.com/photo-1600607687939-ce8a6c25118c",
            ]),
            contact: contact("محمد عبدالله", "777999888", ContactRole::Agent),
            featured: true,
            created_at: listed_on(2024, 1, 10),
            details: PropertyDetails::Villa(Villa {
                condition: FinishCondition::Finished.into(),
                age: Age::New.into(),
                furnished: true,
                floors: 3,
                rooms: 6,
                bathrooms: 4,
                yard: Some(Yard { size: 200.0 }),
                has_roof_annex: true,
                has_guard_room: true,
                has_pool: false,
            }),
        },
        Property {
            id: "4".to_string(),
            title: "محل تجاري في شارع الستين - موقع استراتيجي".to_string(),
            price: price(800_000, Currency::Yer, true),
            location: location(District::Maeen, "شارع الستين", Some("شارع الستين")),
            description: "محل بفتحتين على الشارع الرئيسي، مناسب لجميع الأنشطة التجارية. يوجد مخزن داخلي وحمام.".to_string(),
            images: images(&[
                "https://images.unsplash.com/photo-1441984904996-e0b6ba687e04",
                "https://images.unsplash.com/photo-1528698827591-e19ccd7bc23d",
            ]),
            contact: contact("ياسر حسن", "771234567", ContactRole::Owner),
            featured: true,
            created_at: listed_on(2024, 1, 18),
            details: PropertyDetails::Shop(Shop {
                street_type: StreetType::Main.into(),
                openings: 2,
                has_bathroom: true,
                storage: Some(Storage {
                    kind: StorageKind::Internal.into(),
                    area: Some(Dimensions::new(3.0, 2.0)),
                }),
                area: Footprint {
                    length: 6.0,
                    width: 4.0,
                    height: Some(3.5),
                },
                lease: LeaseCondition::New,
                electricity_meter: MeterType::Separate.into(),
            }),
        },
        Property {
            id: "5".to_string(),
            title: "بقالة للإيجار - نقل قدم 5 مليون".to_string(),
            price: price(300_000, Currency::Yer, true),
            location: location(District::Wahda, "مذبح", None),
            description: "بقالة مجهزة بالكامل في موقع ممتاز، زبائن ثابتين، جاهزة للعمل مباشرة.".to_string(),
            images: images(&[
                "https://images.unsplash.com/photo-1604719312566-8912e9227c6a",
                "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d",
            ]),
            contact: contact("علي سعيد", "774567890", ContactRole::Owner),
            featured: false,
            created_at: listed_on(2024, 1, 22),
            details: PropertyDetails::Shop(Shop {
                street_type: StreetType::Side.into(),
                openings: 1,
                has_bathroom: false,
                storage: Some(Storage {
                    kind: StorageKind::Internal.into(),
                    area: Some(Dimensions::new(2.0, 2.0)),
                }),
                area: Footprint {
                    length: 5.0,
                    width: 3.5,
                    height: None,
                },
                lease: LeaseCondition::KeyMoney(KeyMoney {
                    amount: 5_000_000,
                    includes: vec![
                        KeyMoneyItem::Location.into(),
                        KeyMoneyItem::Decoration.into(),
                        KeyMoneyItem::Inventory.into(),
                    ],
                    owner_approved: true,
                }),
                electricity_meter: MeterType::Separate.into(),
            }),
        },
        Property {
            id: "6".to_string(),
            title: "قاعة الياسمين للمناسبات - للنساء".to_string(),
            price: price(500_000, Currency::Yer, false),
            location: location(District::Sabeen, "حدة", None),
            description: "قاعة فخمة مجهزة بأحدث التقنيات، سعة 400 شخص، كوشة مميزة، مواقف واسعة.".to_string(),
            images: images(&[
                "https://images.unsplash.com/photo-1519167758481-83f29da8c2b6",
                "https://images.unsplash.com/photo-1464366400600-7168b8af9bc3",
            ]),
            contact: contact("فاطمة أحمد", "777888999", ContactRole::Owner),
            featured: true,
            created_at: listed_on(2024, 1, 12),
            details: PropertyDetails::WeddingHall(WeddingHall {
                hall_name: "قاعة الياسمين".to_string(),
                timing: HallTiming::Evening.into(),
                gender: GenderPolicy::Women.into(),
                capacity: 400,
                style: SeatingStyle::WesternTables.into(),
                has_dining_hall: true,
                area: 500.0,
                stage: Some(Stage {
                    image: Some(
                        "https://images.unsplash.com/photo-1511795409834-ef04bbd61622".to_string(),
                    ),
                }),
                bathrooms: 6,
                has_prayer_room: true,
                pest_free: true,
                available_slots: vec![
                    Slot {
                        date: "2024-02-15".to_string(),
                        from: "16:00".to_string(),
                        to: "23:00".to_string(),
                    },
                    Slot {
                        date: "2024-02-20".to_string(),
                        from: "16:00".to_string(),
                        to: "23:00".to_string(),
                    },
                ],
            }),
        },
        Property {
            id: "7".to_string(),
            title: "عمارة استثمارية في الأصبحي - 8 شقق".to_string(),
            price: price(15_000, Currency::Usd, true),
            location: location(District::Sabeen, "الأصبحي", None),
            description: "عمارة حديثة مؤجرة بالكامل، دخل شهري ثابت، موقع ممتاز في منطقة راقية.".to_string(),
            images: images(&[
                "https://images.unsplash.com/photo-1545324418-cc1a3fa10c00",
                "https://images.unsplash.com/photo-1486406146926-c627a92ad1ab",
            ]),
            contact: contact("عبدالرحمن ناصر", "773123456", ContactRole::Owner),
            featured: true,
            created_at: listed_on(2024, 1, 8),
            details: PropertyDetails::Building(Building {
                condition: FinishCondition::Finished.into(),
                age: Age::New.into(),
                purpose: BuildingPurpose::Residential.into(),
                floors: 4,
                apartments: 8,
                has_well: true,
                has_generator: true,
                monthly_income: Some(2_400_000),
                registered: true,
                has_disputes: false,
            }),
        },
        Property {
            id: "8".to_string(),
            title: "مكتب إداري في شارع الزبيري - مفروش".to_string(),
            price: price(350_000, Currency::Yer, true),
            location: location(District::Wahda, "شارع الزبيري", None),
            description: "مكتب راقي مفروش بالكامل، 4 غرف واسعة، مناسب للشركات والمؤسسات.".to_string(),
            images: images(&[
                "https://images.unsplash.com/photo-1497366216548-37526070297c",
                "https://images.unsplash.com/photo-1497366811353-6870744d04b2",
            ]),
            contact: contact("سامي عبده", "775234567", ContactRole::Agent),
            featured: false,
            created_at: listed_on(2024, 1, 25),
            details: PropertyDetails::Office(Office {
                rooms: 4,
                bathrooms: 2,
                condition: OfficeCondition::Used.into(),
                furniture: Some(Furniture {
                    description: Some(
                        "مكاتب خشبية فاخرة، كراسي جلد، أجهزة تكييف في كل غرفة".to_string(),
                    ),
                }),
                electricity_source: ElectricitySource::Solar.into(),
                water_source: WaterSource::Tank.into(),
            }),
        },
        Property {
            id: "9".to_string(),
            title: "شقة مطلة في صنعاء القديمة - طابع تراثي".to_string(),
            price: price(200_000, Currency::Yer, true),
            location: location(District::OldCity, "باب اليمن", None),
            description: "شقة فريدة في منزل برجي تقليدي، قمريات ملونة، إطلالة رائعة على المدينة القديمة.".to_string(),
            images: images(&[
                "https://images.unsplash.com/photo-1512917774080-9991f1c4c750",
                "https://images.unsplash.com/photo-1493809842364-78817add7ffb",
            ]),
            contact: contact("محمد الحداد", "772345678", ContactRole::Owner),
            featured: false,
            created_at: listed_on(2024, 1, 28),
            details: PropertyDetails::Apartment(Apartment {
                floor: 3,
                total_floors: 5,
                has_elevator: false,
                rooms: vec![
                    Dimensions::new(5.0, 4.0),
                    Dimensions::new(4.0, 3.0),
                    Dimensions::new(3.0, 3.0),
                ],
                bathrooms: 1,
                kitchen: Some(Kitchen { size: None }),
                majlis: Some(Majlis {
                    has_bathroom: false,
                    has_private_entrance: false,
                }),
                water_source: WaterSource::WaterTruck.into(),
                water_shared: true,
                electricity_source: ElectricitySource::Government.into(),
                electricity_shared: true,
                direction: Direction::South.into(),
                is_sunny: true,
                financial: FinancialTerms::default(),
                requires_guarantor: false,
                commercial_use: false,
                furnished: false,
            }),
        },
        Property {
            id: "10".to_string(),
            title: "فيلا عظم في بني الحارث".to_string(),
            price: price(8_000_000, Currency::Yer, true),
            location: location(District::BaniAlHarith, "بني الحارث", None),
            description: "فيلا قيد الإنشاء، عظم جاهز للتشطيب، أرض واسعة 400 متر.".to_string(),
            images: images(&[
                "https://images.unsplash.com/photo-1605276374104-dee2a0ed3cd6",
                "https://images.unsplash.com/photo-1613977257363-707ba9348227",
            ]),
            contact: contact("أحمد القاسم", "776543210", ContactRole::Owner),
            featured: false,
            created_at: listed_on(2024, 1, 30),
            details: PropertyDetails::Villa(Villa {
                condition: FinishCondition::Shell.into(),
                age: Age::New.into(),
                furnished: false,
                floors: 2,
                rooms: 5,
                bathrooms: 3,
                yard: Some(Yard { size: 400.0 }),
                has_roof_annex: false,
                has_guard_room: false,
                has_pool: false,
            }),
        },
        Property {
            id: "11".to_string(),
            title: "شقة فندقية مفروشة في التحرير - للعائلات".to_string(),
            price: price(25_000, Currency::Yer, false),
            location: location(District::Tahrir, "ميدان التحرير", None),
            description: "شقة فندقية نظيفة بالقرب من ميدان التحرير، إنترنت وماء ساخن على مدار الساعة.".to_string(),
            images: images(&["https://images.unsplash.com/photo-1566073771259-6a8506099945"]),
            contact: contact("فندق النخيل", "01234567", ContactRole::Agent),
            featured: false,
            created_at: listed_on(2024, 2, 2),
            details: PropertyDetails::Hotel(Hotel {
                unit_type: HotelUnit::Apartment.into(),
                category: HotelCategory::Families.into(),
                beds: 3,
                has_arabic_majlis: true,
                rooms: Some(2),
                bathrooms: 1,
                bathroom_type: BathroomKind::Private.into(),
                furnished: true,
                internet: Some(Internet {
                    included: Some(true),
                }),
                has_hot_water: true,
            }),
        },
        Property {
            id: "12".to_string(),
            title: "بدروم واسع للتخزين في الصافية".to_string(),
            price: price(120_000, Currency::Yer, true),
            location: location(District::Safiya, "الصافية الجنوبية", None),
            description: "بدروم جاف مع تهوية جيدة، مناسب كمستودع أو ورشة.".to_string(),
            images: images(&["https://images.unsplash.com/photo-1558618666-fcd25c85cd64"]),
            contact: contact("صالح مهدي", "770112233", ContactRole::Owner),
            featured: false,
            created_at: listed_on(2024, 2, 4),
            details: PropertyDetails::Basement(Basement {
                area: Footprint {
                    length: 12.0,
                    width: 8.0,
                    height: Some(3.0),
                },
                has_bathroom: true,
                has_ventilation: true,
                flood_protection: FloodProtection::Moderate.into(),
            }),
        },
        Property {
            id: "13".to_string(),
            title: "أرض مسورة في آزال - صالحة للسكن".to_string(),
            price: price(60_000, Currency::Usd, true),
            location: location(District::Azal, "الجراف", None),
            description: "قطعة أرض مسورة بالكامل، ماء وكهرباء واصلة، في حي سكني هادئ.".to_string(),
            images: images(&["https://images.unsplash.com/photo-1500382017468-9049fed747ef"]),
            contact: contact("حسين الشامي", "771998877", ContactRole::Broker),
            featured: true,
            created_at: listed_on(2024, 2, 6),
            details: PropertyDetails::Land(Land {
                area: 400.0,
                has_wall: true,
                has_water: true,
                has_electricity: true,
                residential: true,
                commercial: false,
            }),
        },
        Property {
            id: "14".to_string(),
            title: "باص نقل للإيجار الشهري".to_string(),
            price: price(900, Currency::Sar, true),
            location: location(District::Thawra, "الحصبة", None),
            description: "باص بحالة ممتازة للإيجار الشهري مع إمكانية توفير سائق.".to_string(),
            images: images(&["https://images.unsplash.com/photo-1544620347-c4fd4a3d5957"]),
            contact: contact("مراد سالم", "773665544", ContactRole::Owner),
            featured: false,
            created_at: listed_on(2024, 2, 8),
            details: PropertyDetails::Vehicle(Vehicle {
                make: "Toyota".to_string(),
                model: "Coaster".to_string(),
                year: 2015,
                transmission: Transmission::Manual.into(),
                fuel: FuelType::Diesel.into(),
                mileage_km: Some(180_000),
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_is_valid() {
        let properties = sample_properties();
        assert!(validate_all(&properties).is_ok());
    }

    #[test]
    fn test_every_type_has_a_sample() {
        let types: HashSet<PropertyType> = sample_properties()
            .iter()
            .map(Property::property_type)
            .collect();
        assert_eq!(types.len(), PropertyType::ALL.len());
    }

    #[tokio::test]
    async fn test_repository_returns_dataset_in_order() {
        let repo = SampleListings::new();
        let properties = repo.listings().await.unwrap();
        let ids: Vec<&str> = properties.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids[..3], ["1", "2", "3"]);
        assert_eq!(repo.source_name(), "sample");
    }
}
