use serde::{Deserialize, Serialize};

use super::vocab::*;

/// Length by width, in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub length: f64,
    pub width: f64,
}

impl Dimensions {
    pub fn new(length: f64, width: f64) -> Self {
        Self { length, width }
    }

    pub fn is_positive(&self) -> bool {
        self.length > 0.0 && self.width > 0.0
    }
}

/// Floor area with an optional ceiling height, in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Footprint {
    pub length: f64,
    pub width: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl Footprint {
    pub fn is_positive(&self) -> bool {
        self.length > 0.0 && self.width > 0.0 && self.height.map_or(true, |h| h > 0.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kitchen {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<Dimensions>,
}

/// A reception room, often with its own entrance and bathroom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Majlis {
    pub has_bathroom: bool,
    pub has_private_entrance: bool,
}

/// Money asked up front on top of the rent, in the listing currency
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FinancialTerms {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insurance: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brokerage: Option<u64>,
}

impl FinancialTerms {
    pub fn is_empty(&self) -> bool {
        self.deposit.is_none() && self.insurance.is_none() && self.brokerage.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apartment {
    pub floor: u32,
    pub total_floors: u32,
    pub has_elevator: bool,
    /// One entry per room, in listing order
    pub rooms: Vec<Dimensions>,
    pub bathrooms: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kitchen: Option<Kitchen>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub majlis: Option<Majlis>,
    pub water_source: Term<WaterSource>,
    pub water_shared: bool,
    pub electricity_source: Term<ElectricitySource>,
    pub electricity_shared: bool,
    pub direction: Term<Direction>,
    pub is_sunny: bool,
    #[serde(default)]
    pub financial: FinancialTerms,
    pub requires_guarantor: bool,
    pub commercial_use: bool,
    pub furnished: bool,
}

impl Apartment {
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Building {
    pub condition: Term<FinishCondition>,
    pub age: Term<Age>,
    pub purpose: Term<BuildingPurpose>,
    pub floors: u32,
    pub apartments: u32,
    pub has_well: bool,
    pub has_generator: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub monthly_income: Option<u64>,
    pub registered: bool,
    pub has_disputes: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Yard {
    /// Square meters
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Villa {
    pub condition: Term<FinishCondition>,
    pub age: Term<Age>,
    pub furnished: bool,
    pub floors: u32,
    pub rooms: u32,
    pub bathrooms: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yard: Option<Yard>,
    pub has_roof_annex: bool,
    pub has_guard_room: bool,
    pub has_pool: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Storage {
    pub kind: Term<StorageKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<Dimensions>,
}

/// Key money (نقل القدم): paid to the outgoing tenant, separate from rent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyMoney {
    pub amount: u64,
    pub includes: Vec<Term<KeyMoneyItem>>,
    pub owner_approved: bool,
}

/// How the shop comes to the new tenant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "condition", rename_all = "kebab-case")]
pub enum LeaseCondition {
    New,
    PreviouslyRented,
    KeyMoney(KeyMoney),
}

impl LeaseCondition {
    pub fn label(&self) -> &'static str {
        match self {
            LeaseCondition::New => "جديد",
            LeaseCondition::PreviouslyRented => "مؤجر سابقاً",
            LeaseCondition::KeyMoney(_) => "نقل قدم",
        }
    }

    pub fn key_money(&self) -> Option<&KeyMoney> {
        match self {
            LeaseCondition::KeyMoney(terms) => Some(terms),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shop {
    pub street_type: Term<StreetType>,
    pub openings: u32,
    pub has_bathroom: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage: Option<Storage>,
    pub area: Footprint,
    pub lease: LeaseCondition,
    pub electricity_meter: Term<MeterType>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Furniture {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Office {
    pub rooms: u32,
    pub bathrooms: u32,
    pub condition: Term<OfficeCondition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub furniture: Option<Furniture>,
    pub electricity_source: Term<ElectricitySource>,
    pub water_source: Term<WaterSource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Internet {
    /// Whether the price covers it; unknown when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub included: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    pub unit_type: Term<HotelUnit>,
    pub category: Term<HotelCategory>,
    pub beds: u32,
    pub has_arabic_majlis: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rooms: Option<u32>,
    pub bathrooms: u32,
    pub bathroom_type: Term<BathroomKind>,
    pub furnished: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internet: Option<Internet>,
    pub has_hot_water: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// A bookable date with its opening hours
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    pub date: String,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeddingHall {
    pub hall_name: String,
    pub timing: Term<HallTiming>,
    pub gender: Term<GenderPolicy>,
    pub capacity: u32,
    pub style: Term<SeatingStyle>,
    pub has_dining_hall: bool,
    /// Square meters
    pub area: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<Stage>,
    pub bathrooms: u32,
    pub has_prayer_room: bool,
    pub pest_free: bool,
    #[serde(default)]
    pub available_slots: Vec<Slot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Basement {
    pub area: Footprint,
    pub has_bathroom: bool,
    pub has_ventilation: bool,
    pub flood_protection: Term<FloodProtection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Land {
    /// Square meters
    pub area: f64,
    pub has_wall: bool,
    pub has_water: bool,
    pub has_electricity: bool,
    pub residential: bool,
    pub commercial: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub make: String,
    pub model: String,
    pub year: u16,
    pub transmission: Term<Transmission>,
    pub fuel: Term<FuelType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mileage_km: Option<u32>,
}
