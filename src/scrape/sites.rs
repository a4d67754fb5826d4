use crate::domain::ListingRecord;
use crate::scrape::extract::extract_listing;
use crate::scrape::{auto_access, respect_motors, ScraperError};

/// Where and how to read a listing on one auction site.
#[derive(Debug)]
pub struct SiteProfile {
    pub name: &'static str,
    /// Substring that identifies the site in a listing URL.
    pub url_marker: &'static str,
    pub title_selector: &'static str,
    /// Selector for the label/value rows of the spec table.
    pub spec_rows: &'static str,
    /// Substring an image URL must contain to be a vehicle photo.
    pub image_marker: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuctionSite {
    RespectMotors,
    AutoAccess,
}

// Checked in order; the first marker found in the URL decides.
const SITE_MATCHERS: [AuctionSite; 2] = [AuctionSite::RespectMotors, AuctionSite::AutoAccess];

impl AuctionSite {
    pub fn all() -> &'static [AuctionSite] {
        &SITE_MATCHERS
    }

    pub fn from_url(url: &str) -> Result<Self, ScraperError> {
        SITE_MATCHERS
            .iter()
            .copied()
            .find(|site| url.contains(site.profile().url_marker))
            .ok_or(ScraperError::UnsupportedSite)
    }

    pub fn profile(&self) -> &'static SiteProfile {
        match self {
            AuctionSite::RespectMotors => &respect_motors::PROFILE,
            AuctionSite::AutoAccess => &auto_access::PROFILE,
        }
    }

    pub fn name(&self) -> &'static str {
        self.profile().name
    }

    pub fn extract(&self, html: &str) -> Result<ListingRecord, ScraperError> {
        extract_listing(html, self.profile())
    }
}
