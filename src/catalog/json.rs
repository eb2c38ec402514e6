use crate::catalog::traits::ListingRepository;
use crate::models::{validate_all, Property};
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Listings stored as a JSON array on disk
pub struct JsonFileListings {
    path: PathBuf,
}

impl JsonFileListings {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ListingRepository for JsonFileListings {
    async fn listings(&self) -> Result<Vec<Property>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read listings from {}", self.path.display()))?;
        debug!("Read {} bytes from {}", raw.len(), self.path.display());

        let properties: Vec<Property> = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse listings in {}", self.path.display()))?;
        validate_all(&properties)
            .with_context(|| format!("Invalid listings in {}", self.path.display()))?;

        info!("Loaded {} listings from {}", properties.len(), self.path.display());
        Ok(properties)
    }

    fn source_name(&self) -> &'static str {
        "json-file"
    }
}

/// Write records as a pretty-printed JSON array
pub async fn save_listings(path: impl AsRef<Path>, properties: &[Property]) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(properties).context("Failed to serialize listings")?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("💾 Saved {} listings to {}", properties.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::sample::sample_properties;
    use crate::filter::{filter_properties, FilterCriteria};
    use crate::models::{Currency, Term};
    use crate::render;

    #[tokio::test]
    async fn test_saved_listings_load_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out").join("listings.json");

        let properties = sample_properties();
        save_listings(&path, &properties).await.unwrap();

        let repo = JsonFileListings::new(&path);
        let loaded = repo.listings().await.unwrap();
        assert_eq!(loaded, properties);
    }

    #[tokio::test]
    async fn test_unknown_vocabulary_is_kept_raw() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listings.json");
        let json = r#"[{
            "id": "x1",
            "type": "office",
            "title": "Office",
            "price": { "amount": 1000, "currency": "USD" },
            "location": { "district": "Nowhere", "neighborhood": "Center" },
            "description": "",
            "contact": { "name": "A", "phone": "1", "role": "owner" },
            "created_at": "2024-01-01T00:00:00Z",
            "rooms": 2,
            "bathrooms": 1,
            "condition": "new",
            "electricity_source": "wind",
            "water_source": "tank"
        }]"#;
        tokio::fs::write(&path, json).await.unwrap();

        let loaded = JsonFileListings::new(&path).listings().await.unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].location.district.label(), "Nowhere");
        assert!(!loaded[0].featured);
    }

    #[tokio::test]
    async fn test_unknown_currency_loads_and_never_matches_a_currency_filter() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listings.json");
        let json = r#"[{
            "id": "e1",
            "type": "office",
            "title": "Office in euros",
            "price": { "amount": 750, "currency": "EUR", "negotiable": true },
            "location": { "district": "التحرير", "neighborhood": "Center" },
            "description": "",
            "contact": { "name": "A", "phone": "1", "role": "agent" },
            "created_at": "2024-01-01T00:00:00Z",
            "rooms": 1,
            "bathrooms": 1,
            "condition": "used",
            "electricity_source": "government",
            "water_source": "government"
        }]"#;
        tokio::fs::write(&path, json).await.unwrap();

        let loaded = JsonFileListings::new(&path).listings().await.unwrap();
        assert_eq!(loaded[0].price.currency, Term::Raw("EUR".to_string()));
        assert_eq!(render::render(&loaded[0]).header.price, "750 EUR");

        let usd_only = FilterCriteria::new().with_currency(Currency::Usd);
        assert!(filter_properties(&loaded, &usd_only).is_empty());
        assert_eq!(filter_properties(&loaded, &FilterCriteria::new()), loaded);
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let repo = JsonFileListings::new(dir.path().join("missing.json"));
        let err = repo.listings().await.unwrap_err();
        assert!(err.to_string().contains("Failed to read listings"));
    }

    #[tokio::test]
    async fn test_duplicate_ids_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("listings.json");
        let mut properties = sample_properties();
        let duplicate = properties[1].clone();
        properties.push(duplicate);
        save_listings(&path, &properties).await.unwrap();

        assert!(JsonFileListings::new(&path).listings().await.is_err());
    }
}
