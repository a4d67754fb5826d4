use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("Unsupported auction site")]
    UnsupportedSite,
    #[error("Network error: {0}")]
    Network(String),
    #[error("HTTP {status} fetching {url}")]
    Status { status: u16, url: String },
    #[error("HTML parse error: {0}")]
    HtmlParse(String),
}
