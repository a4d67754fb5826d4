pub mod listing;
pub mod pricing;

pub use listing::{ListingRecord, SpecField};
pub use pricing::estimate_price;
