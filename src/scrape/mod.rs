mod auto_access;
mod extract;
mod fetcher;
mod respect_motors;
mod scraper_error;
mod sites;

pub use fetcher::{Fetcher, HttpFetcher};
pub use scraper_error::ScraperError;
pub use sites::{AuctionSite, SiteProfile};
