pub mod json;
pub mod sample;
pub mod traits;

pub use json::{save_listings, JsonFileListings};
pub use sample::SampleListings;
pub use traits::ListingRepository;
