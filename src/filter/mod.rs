pub mod criteria;

pub use criteria::FilterCriteria;

use crate::models::{Property, Term};
use serde::Serialize;
use tracing::debug;

impl FilterCriteria {
    /// Whether one record passes every supplied criterion. `term` is the
    /// normalized search term, computed once per filter run.
    fn matches(&self, property: &Property, term: Option<&str>) -> bool {
        if let Some(wanted) = self.property_type {
            if property.property_type() != wanted {
                return false;
            }
        }
        if let Some(wanted) = self.district {
            if property.location.district != Term::Known(wanted) {
                return false;
            }
        }
        if let Some(wanted) = self.currency {
            // Unrecognized currencies never match a requested one
            if property.price.currency.known() != Some(&wanted) {
                return false;
            }
        }
        // Bounds compare raw amounts; mixed currencies are not converted.
        if self.min_price.is_some_and(|min| property.price.amount < min) {
            return false;
        }
        if self.max_price.is_some_and(|max| property.price.amount > max) {
            return false;
        }
        match term {
            Some(term) => {
                property.title.to_lowercase().contains(term)
                    || property.description.to_lowercase().contains(term)
                    || property.location.neighborhood.to_lowercase().contains(term)
            }
            None => true,
        }
    }
}

/// Keep the records that pass every criterion, in their original order
pub fn filter_properties(properties: &[Property], criteria: &FilterCriteria) -> Vec<Property> {
    let term = criteria.normalized_term();
    let matches: Vec<Property> = properties
        .iter()
        .filter(|property| criteria.matches(property, term.as_deref()))
        .cloned()
        .collect();
    debug!(
        "Filter kept {} of {} listings ({:?})",
        matches.len(),
        properties.len(),
        criteria
    );
    matches
}

/// Result of applying criteria, keeping "nothing applied yet" apart from
/// "applied, and nothing matched"
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FilterOutcome {
    Unfiltered,
    Filtered {
        criteria: FilterCriteria,
        matches: Vec<Property>,
    },
}

impl FilterOutcome {
    pub fn apply(properties: &[Property], criteria: FilterCriteria) -> Self {
        let matches = filter_properties(properties, &criteria);
        FilterOutcome::Filtered { criteria, matches }
    }

    pub fn is_filtered(&self) -> bool {
        matches!(self, FilterOutcome::Filtered { .. })
    }

    /// The records to show, falling back to the full collection when unfiltered
    pub fn records<'a>(&'a self, all: &'a [Property]) -> &'a [Property] {
        match self {
            FilterOutcome::Unfiltered => all,
            FilterOutcome::Filtered { matches, .. } => matches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample::sample_properties;
    use crate::models::{Currency, District, PropertyType};

    fn ids(properties: &[Property]) -> Vec<&str> {
        properties.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_is_identity() {
        let properties = sample_properties();
        let result = filter_properties(&properties, &FilterCriteria::default());
        assert_eq!(result, properties);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let properties = sample_properties();
        let criteria = FilterCriteria::new()
            .with_price_range(Some(100_000), Some(600_000))
            .with_search("ة");
        let once = filter_properties(&properties, &criteria);
        let twice = filter_properties(&once, &criteria);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_apartment_min_price_scenario() {
        let properties: Vec<Property> = sample_properties()
            .into_iter()
            .filter(|p| p.id == "1" || p.id == "2")
            .collect();
        let criteria = FilterCriteria::new()
            .with_type(PropertyType::Apartment)
            .with_price_range(Some(200_000), None);
        assert_eq!(ids(&filter_properties(&properties, &criteria)), vec!["1"]);
    }

    #[test]
    fn test_district_keeps_every_type_in_order() {
        let properties = sample_properties();
        let criteria = FilterCriteria::new().with_district(District::Sabeen);
        assert_eq!(
            ids(&filter_properties(&properties, &criteria)),
            vec!["1", "3", "6", "7"]
        );
    }

    #[test]
    fn test_type_filter_is_exact() {
        let properties = sample_properties();
        for property_type in PropertyType::ALL {
            let criteria = FilterCriteria::new().with_type(property_type);
            let result = filter_properties(&properties, &criteria);
            assert!(result.iter().all(|p| p.property_type() == property_type));
            let expected = properties
                .iter()
                .filter(|p| p.property_type() == property_type)
                .count();
            assert_eq!(result.len(), expected);
        }
    }

    #[test]
    fn test_price_bounds_are_inclusive() {
        let properties = sample_properties();
        let criteria = FilterCriteria::new().with_price_range(Some(150_000), Some(400_000));
        let result = filter_properties(&properties, &criteria);
        assert!(result
            .iter()
            .all(|p| (150_000..=400_000).contains(&p.price.amount)));
        assert_eq!(ids(&result), vec!["1", "2", "5", "8", "9"]);
    }

    #[test]
    fn test_inverted_range_is_empty_not_an_error() {
        let properties = sample_properties();
        let criteria = FilterCriteria::new().with_price_range(Some(500_000), Some(100));
        assert!(filter_properties(&properties, &criteria).is_empty());
    }

    #[test]
    fn test_search_ignores_case() {
        let mut properties = sample_properties();
        properties[0].title = "Villa View Apartment".to_string();

        let upper = FilterCriteria::new().with_search("VILLA");
        let lower = FilterCriteria::new().with_search("villa");
        let upper_result = filter_properties(&properties, &upper);
        assert_eq!(upper_result, filter_properties(&properties, &lower));
        assert_eq!(ids(&upper_result), vec!["1"]);
    }

    #[test]
    fn test_search_matches_neighborhood_and_description() {
        let properties = sample_properties();
        let by_neighborhood = FilterCriteria::new().with_search("باب اليمن");
        assert_eq!(ids(&filter_properties(&properties, &by_neighborhood)), vec!["9"]);

        let by_description = FilterCriteria::new().with_search("زبائن ثابتين");
        assert_eq!(ids(&filter_properties(&properties, &by_description)), vec!["5"]);
    }

    #[test]
    fn test_search_composes_with_other_criteria() {
        let properties = sample_properties();
        // "حدة" matches apartment 1 and wedding hall 6
        let criteria = FilterCriteria::new()
            .with_search("حدة")
            .with_type(PropertyType::WeddingHall);
        assert_eq!(ids(&filter_properties(&properties, &criteria)), vec!["6"]);
    }

    #[test]
    fn test_blank_search_is_absent() {
        let criteria = FilterCriteria::new().with_search("   ");
        assert!(criteria.is_empty());
        let properties = sample_properties();
        assert_eq!(filter_properties(&properties, &criteria).len(), properties.len());
    }

    #[test]
    fn test_currency_restricts_price_comparison() {
        let properties = sample_properties();
        let criteria = FilterCriteria::new()
            .with_currency(Currency::Usd)
            .with_price_range(None, Some(10_000));
        assert_eq!(ids(&filter_properties(&properties, &criteria)), vec!["3"]);
    }

    #[test]
    fn test_outcome_distinguishes_empty_from_unfiltered() {
        let properties = sample_properties();
        let unfiltered = FilterOutcome::Unfiltered;
        assert!(!unfiltered.is_filtered());
        assert_eq!(unfiltered.records(&properties).len(), properties.len());

        let nothing = FilterOutcome::apply(&properties, FilterCriteria::new().with_search("zzz"));
        assert!(nothing.is_filtered());
        assert!(nothing.records(&properties).is_empty());
    }
}
