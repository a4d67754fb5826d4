// fetcher.rs
use crate::scrape::ScraperError;
use reqwest::blocking::Client;
use std::time::Duration;

const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/121.0 Safari/537.36";

/// Anonymous GETs against the auction sites: listing pages and their images.
pub trait Fetcher: Send + Sync {
    fn fetch_text(&self, url: &str) -> Result<String, ScraperError>;
    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ScraperError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response, ScraperError> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| ScraperError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScraperError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(resp)
    }
}

impl Fetcher for HttpFetcher {
    fn fetch_text(&self, url: &str) -> Result<String, ScraperError> {
        tracing::debug!(url, "fetching listing page");
        self.get(url)?
            .text()
            .map_err(|e| ScraperError::Network(e.to_string()))
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ScraperError> {
        let bytes = self
            .get(url)?
            .bytes()
            .map_err(|e| ScraperError::Network(e.to_string()))?;
        Ok(bytes.to_vec())
    }
}
