mod catalog;
mod config;
mod filter;
mod models;
mod render;
mod session;

use catalog::{save_listings, JsonFileListings, ListingRepository, SampleListings};
use clap::Parser;
use config::{CatalogConfig, Cli, ListingSource};
use render::CardSummary;
use models::Labeled;
use session::{CatalogSession, Tab};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CatalogConfig::from_cli(Cli::parse())?;

    // Initialize logging
    let filter = if config.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("🏠 Listing Catalog");
    info!("==================");

    let repository: Box<dyn ListingRepository> = match &config.source {
        ListingSource::Sample => Box::new(SampleListings::new()),
        ListingSource::JsonFile(path) => Box::new(JsonFileListings::new(path)),
    };
    info!("Loading listings from {} source", repository.source_name());
    let properties = repository.listings().await?;

    let mut session = CatalogSession::new(properties);
    let stats = session.stats();
    println!(
        "{} عقار متاح | {} مديرية | {} عقار مميز",
        stats.listings, stats.districts, stats.featured
    );
    println!();

    session.apply(config.criteria.clone());
    session.set_tab(config.tab);
    if let Tab::Only(property_type) = session.tab() {
        println!("📂 {}", property_type.label());
    }

    let displayed = session.displayed();
    if displayed.is_empty() {
        if session.outcome().is_filtered() {
            println!("لا توجد عقارات مطابقة لمعايير البحث");
        } else {
            println!("لا توجد عقارات");
        }
    }
    for (i, property) in displayed.iter().enumerate() {
        println!("{}. {}", i + 1, CardSummary::from(*property));
        println!();
    }

    if config.show_featured {
        println!("⭐ العقارات المميزة");
        for property in session.featured_strip() {
            println!("   {}", CardSummary::from(property));
        }
        println!();
    }

    if let Some(path) = &config.output {
        let records: Vec<_> = displayed.into_iter().cloned().collect();
        save_listings(path, &records).await?;
    }

    if let Some(id) = &config.details {
        match session.open_details(id) {
            Some(view) => {
                println!("{}", view);
                session.close_details();
            }
            None => warn!("No listing with id {}", id),
        }
    }

    Ok(())
}
