use serde::{Deserialize, Serialize};
use std::fmt;

/// Types that have a fixed display label
pub trait Labeled {
    fn label(&self) -> &'static str;
}

/// A vocabulary value that may not be one we know about.
///
/// Records coming from outside (a JSON file, a future backend) can carry
/// values that are not in the enumeration. They are kept as raw text and
/// displayed unchanged instead of failing the whole record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Term<T> {
    Known(T),
    Raw(String),
}

impl<T: Labeled> Term<T> {
    pub fn label(&self) -> &str {
        match self {
            Term::Known(value) => value.label(),
            Term::Raw(raw) => raw,
        }
    }
}

impl<T> Term<T> {
    pub fn known(&self) -> Option<&T> {
        match self {
            Term::Known(value) => Some(value),
            Term::Raw(_) => None,
        }
    }
}

impl<T> From<T> for Term<T> {
    fn from(value: T) -> Self {
        Term::Known(value)
    }
}

impl<T: Labeled> fmt::Display for Term<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Declares a closed vocabulary with its serde spelling and display label.
/// `parseable` vocabularies also get `ALL`, `as_str` and `parse` for
/// values typed on the command line.
macro_rules! vocabulary {
    (
        $(#[$meta:meta])*
        parseable $name:ident { $($variant:ident => $wire:literal, $label:literal;)+ }
    ) => {
        vocabulary! {
            $(#[$meta])*
            $name { $($variant => $wire, $label;)+ }
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The serialized spelling of this value
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                }
            }

            pub fn parse(raw: &str) -> Option<Self> {
                Self::ALL.iter().copied().find(|v| v.as_str() == raw)
            }
        }
    };
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $wire:literal, $label:literal;)+ }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl Labeled for $name {
            fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

vocabulary! {
    /// The administrative districts of the capital, plus a catch-all
    parseable District {
        Azal => "آزال", "آزال";
        Tahrir => "التحرير", "التحرير";
        Thawra => "الثورة", "الثورة";
        Sabeen => "السبعين", "السبعين";
        Safiya => "الصافية", "الصافية";
        Wahda => "الوحدة", "الوحدة";
        BaniAlHarith => "بني الحارث", "بني الحارث";
        Shuub => "شعوب", "شعوب";
        OldCity => "صنعاء القديمة", "صنعاء القديمة";
        Maeen => "معين", "معين";
        Other => "أخرى", "أخرى";
    }
}

impl District {
    /// Number of real districts, not counting `Other`
    pub const COUNT: usize = 10;
}

vocabulary! {
    parseable Currency {
        Yer => "YER", "ريال يمني";
        Usd => "USD", "دولار";
        Sar => "SAR", "ريال سعودي";
    }
}

vocabulary! {
    ContactRole {
        Owner => "owner", "مالك";
        Agent => "agent", "وكيل";
        Broker => "broker", "دلال";
    }
}

vocabulary! {
    WaterSource {
        Government => "government", "حكومي";
        Well => "well", "بئر";
        Tank => "tank", "خزان";
        WaterTruck => "water-truck", "وايتات";
    }
}

vocabulary! {
    ElectricitySource {
        Government => "government", "حكومي";
        Private => "private", "أهلي";
        Solar => "solar", "طاقة شمسية";
    }
}

vocabulary! {
    Direction {
        South => "south", "عدني / جنوبي";
        North => "north", "قبلي / شمالي";
        East => "east", "شرقي";
        West => "west", "غربي";
    }
}

vocabulary! {
    FinishCondition {
        Finished => "finished", "مشطبة";
        Shell => "shell", "عظم";
    }
}

vocabulary! {
    Age {
        New => "new", "جديدة";
        Old => "old", "قديمة";
    }
}

vocabulary! {
    BuildingPurpose {
        Residential => "residential", "سكني";
        School => "school", "مدرسة";
        Office => "office", "مكاتب";
        Medical => "medical", "مركز صحي";
        Mixed => "mixed", "مختلط";
        Other => "other", "أخرى";
    }
}

vocabulary! {
    StreetType {
        Main => "main", "رئيسي";
        Side => "side", "فرعي";
    }
}

vocabulary! {
    StorageKind {
        Internal => "internal", "داخلي";
        External => "external", "خارجي";
    }
}

vocabulary! {
    MeterType {
        Separate => "separate", "عداد مستقل";
        Shared => "shared", "عداد مشترك";
    }
}

vocabulary! {
    /// What a key-money payment buys from the outgoing tenant
    KeyMoneyItem {
        Location => "location", "الموقع";
        Decoration => "decoration", "الديكور والتجهيزات";
        Inventory => "inventory", "البضاعة";
        Goodwill => "goodwill", "الاسم التجاري";
    }
}

vocabulary! {
    OfficeCondition {
        New => "new", "جديد";
        Used => "used", "مستخدم";
    }
}

vocabulary! {
    HotelUnit {
        Room => "room", "غرفة";
        Apartment => "apartment", "شقة فندقية";
    }
}

vocabulary! {
    HotelCategory {
        Couples => "couples", "متزوجين";
        Singles => "singles", "عزاب";
        Families => "families", "عائلات";
    }
}

vocabulary! {
    BathroomKind {
        Private => "private", "خاص";
        Shared => "shared", "مشترك";
    }
}

vocabulary! {
    HallTiming {
        Morning => "morning", "صباحية";
        Evening => "evening", "مسائية";
        Both => "both", "صباحية ومسائية";
    }
}

vocabulary! {
    GenderPolicy {
        Men => "men", "رجال";
        Women => "women", "نساء";
        Both => "both", "مختلطة";
    }
}

vocabulary! {
    SeatingStyle {
        ArabicMajlis => "arabic-majlis", "مجلس عربي";
        WesternTables => "western-tables", "طاولات غربية";
        Mixed => "mixed", "مختلط";
    }
}

vocabulary! {
    FloodProtection {
        Unprotected => "none", "لا توجد";
        Moderate => "moderate", "متوسطة";
        High => "high", "عالية";
    }
}

vocabulary! {
    Transmission {
        Automatic => "automatic", "أوتوماتيك";
        Manual => "manual", "عادي";
    }
}

vocabulary! {
    FuelType {
        Petrol => "petrol", "بترول";
        Diesel => "diesel", "ديزل";
        Hybrid => "hybrid", "هجين";
        Electric => "electric", "كهربائي";
    }
}
