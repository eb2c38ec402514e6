use crate::filter::{FilterCriteria, FilterOutcome};
use crate::models::{District, Property, PropertyType};
use crate::render::{self, DetailView};
use serde::Serialize;
use tracing::{debug, info};

/// Which listing kind the browse tabs are showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tab {
    #[default]
    All,
    Only(PropertyType),
}

impl Tab {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "all" => Some(Tab::All),
            other => PropertyType::parse(other).map(Tab::Only),
        }
    }

    fn admits(&self, property: &Property) -> bool {
        match self {
            Tab::All => true,
            Tab::Only(property_type) => property.property_type() == *property_type,
        }
    }
}

/// Number of featured records shown in the strip
const FEATURED_STRIP_SIZE: usize = 3;

/// Headline numbers above the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub listings: usize,
    pub districts: usize,
    pub featured: usize,
}

/// Transient browsing state over one immutable collection: applied
/// filters, the active tab and the record whose details are open.
pub struct CatalogSession {
    properties: Vec<Property>,
    outcome: FilterOutcome,
    tab: Tab,
    selected: Option<usize>,
}

impl CatalogSession {
    pub fn new(properties: Vec<Property>) -> Self {
        Self {
            properties,
            outcome: FilterOutcome::Unfiltered,
            tab: Tab::All,
            selected: None,
        }
    }

    pub fn outcome(&self) -> &FilterOutcome {
        &self.outcome
    }

    /// Run the filter over the full collection, replacing earlier results.
    /// Criteria that constrain nothing reset to the unfiltered state.
    pub fn apply(&mut self, criteria: FilterCriteria) -> &[Property] {
        if criteria.is_empty() {
            self.reset();
        } else {
            self.outcome = FilterOutcome::apply(&self.properties, criteria);
            info!(
                "🔎 {} listings match",
                self.outcome.records(&self.properties).len()
            );
        }
        self.outcome.records(&self.properties)
    }

    /// Drop all criteria and show everything again
    pub fn reset(&mut self) {
        debug!("Filters reset");
        self.outcome = FilterOutcome::Unfiltered;
    }

    pub fn set_tab(&mut self, tab: Tab) {
        self.tab = tab;
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    /// Current results narrowed to the active tab
    pub fn displayed(&self) -> Vec<&Property> {
        self.outcome
            .records(&self.properties)
            .iter()
            .filter(|property| self.tab.admits(property))
            .collect()
    }

    /// Open the details of a record; unknown ids leave nothing selected
    pub fn open_details(&mut self, id: &str) -> Option<DetailView> {
        self.selected = self.properties.iter().position(|p| p.id == id);
        match self.selected() {
            Some(property) => {
                debug!("Opened details for listing {}", id);
                Some(render::render(property))
            }
            None => {
                debug!("No listing with id {}", id);
                None
            }
        }
    }

    pub fn close_details(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Property> {
        self.selected.and_then(|index| self.properties.get(index))
    }

    /// Featured records in collection order, independent of filters
    pub fn featured(&self) -> Vec<&Property> {
        self.properties.iter().filter(|p| p.featured).collect()
    }

    /// The first few featured records, for the strip above the grid
    pub fn featured_strip(&self) -> Vec<&Property> {
        self.featured().into_iter().take(FEATURED_STRIP_SIZE).collect()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            listings: self.properties.len(),
            districts: District::COUNT,
            featured: self.properties.iter().filter(|p| p.featured).count(),
        }
    }
}
