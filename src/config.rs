use crate::filter::FilterCriteria;
use crate::models::{Currency, District, PropertyType};
use crate::session::Tab;
use anyhow::{anyhow, Result};
use clap::Parser;
use std::path::PathBuf;

/// Command line for the catalog browser
#[derive(Debug, Parser)]
#[command(name = "listing-catalog")]
#[command(about = "Browse, filter and inspect real-estate listings")]
#[command(version)]
pub struct Cli {
    /// JSON file with listings; the built-in sample is used when omitted
    #[arg(long, env = "CATALOG_SOURCE")]
    pub source: Option<PathBuf>,

    /// Listing type (apartment, villa, wedding-hall, ...)
    #[arg(long = "type")]
    pub property_type: Option<String>,

    /// District name, as listed
    #[arg(long)]
    pub district: Option<String>,

    #[arg(long)]
    pub min_price: Option<u64>,

    #[arg(long)]
    pub max_price: Option<u64>,

    /// Only listings priced in this currency (YER, USD, SAR)
    #[arg(long)]
    pub currency: Option<String>,

    /// Text to look for in title, description and neighborhood
    #[arg(short, long)]
    pub search: Option<String>,

    /// Browse tab: "all" or a listing type
    #[arg(long, default_value = "all")]
    pub tab: String,

    /// Show the details of one listing
    #[arg(long)]
    pub details: Option<String>,

    /// List featured listings as well
    #[arg(long)]
    pub featured: bool,

    /// Write the displayed listings to this JSON file
    #[arg(short, long, env = "CATALOG_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Where listings are loaded from
#[derive(Debug, Clone, Default, PartialEq)]
pub enum ListingSource {
    #[default]
    Sample,
    JsonFile(PathBuf),
}

/// Resolved settings for one catalog run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogConfig {
    pub source: ListingSource,
    pub criteria: FilterCriteria,
    pub tab: Tab,
    pub details: Option<String>,
    pub show_featured: bool,
    pub output: Option<PathBuf>,
    pub verbose: bool,
}

impl CatalogConfig {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let property_type = cli
            .property_type
            .as_deref()
            .map(|raw| PropertyType::parse(raw).ok_or_else(|| anyhow!("Unknown listing type: {}", raw)))
            .transpose()?;
        let district = cli
            .district
            .as_deref()
            .map(|raw| District::parse(raw.trim()).ok_or_else(|| anyhow!("Unknown district: {}", raw)))
            .transpose()?;
        let currency = cli
            .currency
            .as_deref()
            .map(|raw| {
                Currency::parse(&raw.to_uppercase()).ok_or_else(|| anyhow!("Unknown currency: {}", raw))
            })
            .transpose()?;
        let tab = Tab::parse(&cli.tab).ok_or_else(|| anyhow!("Unknown tab: {}", cli.tab))?;

        let mut criteria = FilterCriteria::new().with_price_range(cli.min_price, cli.max_price);
        if let Some(property_type) = property_type {
            criteria = criteria.with_type(property_type);
        }
        if let Some(district) = district {
            criteria = criteria.with_district(district);
        }
        if let Some(currency) = currency {
            criteria = criteria.with_currency(currency);
        }
        if let Some(term) = cli.search {
            criteria = criteria.with_search(term);
        }

        Ok(Self {
            source: cli.source.map_or(ListingSource::Sample, ListingSource::JsonFile),
            criteria,
            tab,
            details: cli.details,
            show_featured: cli.featured,
            output: cli.output,
            verbose: cli.verbose,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CatalogConfig> {
        let cli = Cli::try_parse_from(std::iter::once("listing-catalog").chain(args.iter().copied()))?;
        CatalogConfig::from_cli(cli)
    }

    #[test]
    fn test_defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.source, ListingSource::Sample);
        assert!(config.criteria.is_empty());
        assert_eq!(config.tab, Tab::All);
        assert!(config.details.is_none());
    }

    #[test]
    fn test_criteria_from_flags() {
        let config = parse(&[
            "--type",
            "apartment",
            "--district",
            "السبعين",
            "--min-price",
            "200000",
            "--currency",
            "yer",
            "--search",
            "حدة",
            "--tab",
            "villa",
        ])
        .unwrap();
        assert_eq!(config.criteria.property_type, Some(PropertyType::Apartment));
        assert_eq!(config.criteria.district, Some(District::Sabeen));
        assert_eq!(config.criteria.min_price, Some(200_000));
        assert_eq!(config.criteria.currency, Some(Currency::Yer));
        assert_eq!(config.criteria.search_term.as_deref(), Some("حدة"));
        assert_eq!(config.tab, Tab::Only(PropertyType::Villa));
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        let err = parse(&["--type", "castle"]).unwrap_err();
        assert!(err.to_string().contains("castle"));
    }

    #[test]
    fn test_source_path() {
        let config = parse(&["--source", "listings.json"]).unwrap();
        assert_eq!(
            config.source,
            ListingSource::JsonFile(PathBuf::from("listings.json"))
        );
    }
}
