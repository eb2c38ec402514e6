use crate::models::{Currency, District, PropertyType};
use serde::{Deserialize, Serialize};

/// Search parameters for narrowing the catalog.
/// Every field is optional; an absent field does not constrain anything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive text matched against title, description and neighborhood
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_term: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property_type: Option<PropertyType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub district: Option<District>,
    /// Inclusive, in the record's own currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u64>,
    /// Inclusive, in the record's own currency
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u64>,
    /// Restrict to one currency so price bounds compare like with like
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<Currency>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = Some(property_type);
        self
    }

    pub fn with_district(mut self, district: District) -> Self {
        self.district = Some(district);
        self
    }

    pub fn with_price_range(mut self, min: Option<u64>, max: Option<u64>) -> Self {
        self.min_price = min;
        self.max_price = max;
        self
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = Some(currency);
        self
    }

    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.search_term = Some(term.into());
        self
    }

    /// The search term, trimmed and lowercased, or None when blank
    pub fn normalized_term(&self) -> Option<String> {
        self.search_term
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
    }

    /// True when no field would constrain the result
    pub fn is_empty(&self) -> bool {
        self.normalized_term().is_none()
            && self.property_type.is_none()
            && self.district.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.currency.is_none()
    }
}
