pub mod variants;
pub mod vocab;

use anyhow::{bail, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

pub use variants::*;
pub use vocab::*;

/// Kind of listing. Always derived from the attached details, never stored apart from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PropertyType {
    Apartment,
    Building,
    Villa,
    Shop,
    Office,
    Hotel,
    WeddingHall,
    Basement,
    Land,
    Vehicle,
}

impl PropertyType {
    pub const ALL: [PropertyType; 10] = [
        PropertyType::Apartment,
        PropertyType::Building,
        PropertyType::Villa,
        PropertyType::Shop,
        PropertyType::Office,
        PropertyType::Hotel,
        PropertyType::WeddingHall,
        PropertyType::Basement,
        PropertyType::Land,
        PropertyType::Vehicle,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::Building => "building",
            PropertyType::Villa => "villa",
            PropertyType::Shop => "shop",
            PropertyType::Office => "office",
            PropertyType::Hotel => "hotel",
            PropertyType::WeddingHall => "wedding-hall",
            PropertyType::Basement => "basement",
            PropertyType::Land => "land",
            PropertyType::Vehicle => "vehicle",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == raw)
    }
}

impl Labeled for PropertyType {
    fn label(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "شقة سكنية",
            PropertyType::Building => "عمارة",
            PropertyType::Villa => "فيلا",
            PropertyType::Shop => "محل تجاري",
            PropertyType::Office => "مكتب",
            PropertyType::Hotel => "فندق",
            PropertyType::WeddingHall => "صالة أعراس",
            PropertyType::Basement => "بدروم",
            PropertyType::Land => "أرض",
            PropertyType::Vehicle => "مركبة",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Asking price in the listing's own currency. No conversion is ever done.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Price {
    pub amount: u64,
    pub currency: Term<Currency>,
    #[serde(default)]
    pub negotiable: bool,
}

/// Location information for a property
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub district: Term<District>,
    pub neighborhood: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub role: Term<ContactRole>,
}

/// The variant-specific part of a listing, tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum PropertyDetails {
    Apartment(Apartment),
    Building(Building),
    Villa(Villa),
    Shop(Shop),
    Office(Office),
    Hotel(Hotel),
    WeddingHall(WeddingHall),
    Basement(Basement),
    Land(Land),
    Vehicle(Vehicle),
}

impl PropertyDetails {
    pub fn property_type(&self) -> PropertyType {
        match self {
            PropertyDetails::Apartment(_) => PropertyType::Apartment,
            PropertyDetails::Building(_) => PropertyType::Building,
            PropertyDetails::Villa(_) => PropertyType::Villa,
            PropertyDetails::Shop(_) => PropertyType::Shop,
            PropertyDetails::Office(_) => PropertyType::Office,
            PropertyDetails::Hotel(_) => PropertyType::Hotel,
            PropertyDetails::WeddingHall(_) => PropertyType::WeddingHall,
            PropertyDetails::Basement(_) => PropertyType::Basement,
            PropertyDetails::Land(_) => PropertyType::Land,
            PropertyDetails::Vehicle(_) => PropertyType::Vehicle,
        }
    }
}

/// Core property data model
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: String,
    pub title: String,
    pub price: Price,
    pub location: Location,
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    pub contact: Contact,
    /// Display hint only: badges and the featured strip, never visibility
    #[serde(default)]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    #[serde(flatten)]
    pub details: PropertyDetails,
}

impl Property {
    pub fn property_type(&self) -> PropertyType {
        self.details.property_type()
    }

    /// Check the shape constraints serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            bail!("listing has an empty id");
        }
        match &self.details {
            PropertyDetails::Apartment(apt) => {
                if apt.total_floors == 0 {
                    bail!("listing {}: floor count must be positive", self.id);
                }
                if apt.rooms.iter().any(|room| !room.is_positive()) {
                    bail!("listing {}: room dimensions must be positive", self.id);
                }
                if let Some(size) = apt.kitchen.as_ref().and_then(|k| k.size) {
                    if !size.is_positive() {
                        bail!("listing {}: kitchen dimensions must be positive", self.id);
                    }
                }
            }
            PropertyDetails::Building(building) => {
                if building.floors == 0 || building.apartments == 0 {
                    bail!("listing {}: floor and apartment counts must be positive", self.id);
                }
            }
            PropertyDetails::Shop(shop) => {
                if !shop.area.is_positive() {
                    bail!("listing {}: shop area must be positive", self.id);
                }
                if let Some(area) = shop.storage.as_ref().and_then(|storage| storage.area) {
                    if !area.is_positive() {
                        bail!("listing {}: storage area must be positive", self.id);
                    }
                }
            }
            PropertyDetails::Basement(basement) => {
                if !basement.area.is_positive() {
                    bail!("listing {}: basement area must be positive", self.id);
                }
            }
            PropertyDetails::Villa(villa) => {
                if villa.yard.as_ref().is_some_and(|yard| yard.size <= 0.0) {
                    bail!("listing {}: yard size must be positive", self.id);
                }
            }
            PropertyDetails::WeddingHall(hall) => {
                if hall.area <= 0.0 {
                    bail!("listing {}: hall area must be positive", self.id);
                }
            }
            PropertyDetails::Land(land) => {
                if land.area <= 0.0 {
                    bail!("listing {}: land area must be positive", self.id);
                }
            }
            PropertyDetails::Office(_) | PropertyDetails::Hotel(_) | PropertyDetails::Vehicle(_) => {}
        }
        Ok(())
    }
}

/// Validate every record and reject duplicate ids
pub fn validate_all(properties: &[Property]) -> Result<()> {
    let mut seen = HashSet::new();
    for property in properties {
        property.validate()?;
        if !seen.insert(property.id.as_str()) {
            bail!("duplicate listing id {}", property.id);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample::sample_properties;

    #[test]
    fn test_type_follows_details() {
        for property in sample_properties() {
            let expected = match &property.details {
                PropertyDetails::Apartment(_) => "apartment",
                PropertyDetails::Building(_) => "building",
                PropertyDetails::Villa(_) => "villa",
                PropertyDetails::Shop(_) => "shop",
                PropertyDetails::Office(_) => "office",
                PropertyDetails::Hotel(_) => "hotel",
                PropertyDetails::WeddingHall(_) => "wedding-hall",
                PropertyDetails::Basement(_) => "basement",
                PropertyDetails::Land(_) => "land",
                PropertyDetails::Vehicle(_) => "vehicle",
            };
            assert_eq!(property.property_type().as_str(), expected);
        }
    }

    #[test]
    fn test_json_carries_type_tag() {
        let property = sample_properties()
            .into_iter()
            .find(|p| p.id == "6")
            .unwrap();
        let value = serde_json::to_value(&property).unwrap();
        assert_eq!(value["type"], "wedding-hall");
        assert_eq!(value["hall_name"], "قاعة الياسمين");

        let back: Property = serde_json::from_value(value).unwrap();
        assert_eq!(back, property);
    }

    #[test]
    fn test_key_money_lives_inside_lease() {
        let property = sample_properties()
            .into_iter()
            .find(|p| p.id == "5")
            .unwrap();
        let value = serde_json::to_value(&property).unwrap();
        assert_eq!(value["lease"]["condition"], "key-money");
        assert_eq!(value["lease"]["amount"], 5_000_000);
    }

    #[test]
    fn test_parse_type() {
        assert_eq!(PropertyType::parse("wedding-hall"), Some(PropertyType::WeddingHall));
        assert_eq!(PropertyType::parse("castle"), None);
        assert_eq!(PropertyType::Vehicle.label(), "مركبة");
    }

    #[test]
    fn test_validate_rejects_bad_rooms() {
        let mut property = sample_properties().remove(0);
        if let PropertyDetails::Apartment(apt) = &mut property.details {
            apt.rooms.push(Dimensions::new(0.0, 3.0));
        }
        assert!(property.validate().is_err());
    }

    fn sample(id: &str) -> Property {
        sample_properties()
            .into_iter()
            .find(|p| p.id == id)
            .unwrap()
    }

    #[test]
    fn test_validate_rejects_empty_storage_area() {
        let mut property = sample("4");
        if let PropertyDetails::Shop(shop) = &mut property.details {
            if let Some(storage) = shop.storage.as_mut() {
                storage.area = Some(Dimensions::new(2.0, 0.0));
            }
        }
        let err = property.validate().unwrap_err();
        assert!(err.to_string().contains("storage area"));
    }

    #[test]
    fn test_validate_rejects_empty_hall_area() {
        let mut property = sample("6");
        if let PropertyDetails::WeddingHall(hall) = &mut property.details {
            hall.area = 0.0;
        }
        let err = property.validate().unwrap_err();
        assert!(err.to_string().contains("hall area"));
    }

    #[test]
    fn test_validate_rejects_zero_counts() {
        let mut building = sample("7");
        if let PropertyDetails::Building(details) = &mut building.details {
            details.apartments = 0;
        }
        assert!(building.validate().is_err());

        let mut apartment = sample("1");
        if let PropertyDetails::Apartment(apt) = &mut apartment.details {
            apt.total_floors = 0;
        }
        assert!(apartment.validate().is_err());
    }

    #[test]
    fn test_validate_all_rejects_duplicate_ids() {
        let mut properties = sample_properties();
        assert!(validate_all(&properties).is_ok());

        let copy = properties[0].clone();
        properties.push(copy);
        let err = validate_all(&properties).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }
}
