use crate::models::Property;
use anyhow::Result;
use async_trait::async_trait;

/// Common trait for every place listings can come from.
/// Filtering and rendering only ever see the returned records.
#[async_trait]
pub trait ListingRepository: Send + Sync {
    /// Load the current collection, in its natural order
    async fn listings(&self) -> Result<Vec<Property>>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}
