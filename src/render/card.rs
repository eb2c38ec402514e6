use super::format;
use crate::models::{Labeled, Property, PropertyDetails};
use serde::Serialize;
use std::fmt;

/// What a listing card in the grid shows
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardSummary {
    pub id: String,
    pub title: String,
    pub type_label: &'static str,
    pub location: String,
    pub price: String,
    pub negotiable: bool,
    pub featured: bool,
    pub image: Option<String>,
    pub rooms: Option<u32>,
    pub bathrooms: Option<u32>,
    pub sunny: bool,
    pub has_monthly_income: bool,
}

fn room_count(details: &PropertyDetails) -> Option<u32> {
    match details {
        PropertyDetails::Apartment(apt) => u32::try_from(apt.room_count()).ok(),
        PropertyDetails::Villa(villa) => Some(villa.rooms),
        PropertyDetails::Office(office) => Some(office.rooms),
        PropertyDetails::Hotel(hotel) => hotel.rooms,
        PropertyDetails::Building(_)
        | PropertyDetails::Shop(_)
        | PropertyDetails::WeddingHall(_)
        | PropertyDetails::Basement(_)
        | PropertyDetails::Land(_)
        | PropertyDetails::Vehicle(_) => None,
    }
}

fn bathroom_count(details: &PropertyDetails) -> Option<u32> {
    match details {
        PropertyDetails::Apartment(apt) => Some(apt.bathrooms),
        PropertyDetails::Villa(villa) => Some(villa.bathrooms),
        PropertyDetails::Office(office) => Some(office.bathrooms),
        PropertyDetails::Hotel(hotel) => Some(hotel.bathrooms),
        PropertyDetails::Building(_)
        | PropertyDetails::Shop(_)
        | PropertyDetails::WeddingHall(_)
        | PropertyDetails::Basement(_)
        | PropertyDetails::Land(_)
        | PropertyDetails::Vehicle(_) => None,
    }
}

impl From<&Property> for CardSummary {
    fn from(property: &Property) -> Self {
        let details = &property.details;
        Self {
            id: property.id.clone(),
            title: property.title.clone(),
            type_label: property.property_type().label(),
            location: format!(
                "{} • {}",
                property.location.district.label(),
                property.location.neighborhood
            ),
            price: format::short_price(&property.price),
            negotiable: property.price.negotiable,
            featured: property.featured,
            image: property.images.first().cloned(),
            // zero counts are not worth a chip
            rooms: room_count(details).filter(|&n| n > 0),
            bathrooms: bathroom_count(details).filter(|&n| n > 0),
            sunny: matches!(details, PropertyDetails::Apartment(apt) if apt.is_sunny),
            has_monthly_income: matches!(
                details,
                PropertyDetails::Building(building) if building.monthly_income.is_some()
            ),
        }
    }
}

impl fmt::Display for CardSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} ({})", self.id, self.title, self.type_label)?;
        if self.featured {
            write!(f, " ⭐")?;
        }
        write!(f, "\n   {} | {}", self.location, self.price)?;
        if self.negotiable {
            write!(f, " قابل للتفاوض")?;
        }
        if let Some(rooms) = self.rooms {
            write!(f, " | {} غرف", rooms)?;
        }
        if let Some(bathrooms) = self.bathrooms {
            write!(f, " | {} حمام", bathrooms)?;
        }
        if self.sunny {
            write!(f, " | ☀️ مشمسة")?;
        }
        if self.has_monthly_income {
            write!(f, " | دخل شهري")?;
        }
        Ok(())
    }
}
