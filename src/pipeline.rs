// pipeline.rs
use crate::config::Config;
use crate::describe::{generate_description, GenerationError, OpenAiClient, TextGenerator};
use crate::domain::estimate_price;
use crate::publish::{
    compose_post, resolve_image_url, upload_images, MediaHost, PublishError, WordPressClient,
};
use crate::scrape::{AuctionSite, Fetcher, HttpFetcher, ScraperError};
use serde_json::{json, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Scrape(#[from] ScraperError),
    #[error("Description generation failed: {0}")]
    Generation(#[from] GenerationError),
    #[error("Publishing failed: {0}")]
    Publish(#[from] PublishError),
}

/// Scrape → describe → price → upload → publish, for one URL at a time.
pub struct Pipeline {
    fetcher: Box<dyn Fetcher>,
    generator: Box<dyn TextGenerator>,
    host: Box<dyn MediaHost>,
}

impl Pipeline {
    pub fn new(
        fetcher: Box<dyn Fetcher>,
        generator: Box<dyn TextGenerator>,
        host: Box<dyn MediaHost>,
    ) -> Self {
        Self {
            fetcher,
            generator,
            host,
        }
    }

    pub fn from_config(cfg: &Config) -> Result<Self, PipelineError> {
        let fetcher = HttpFetcher::new(cfg.http_timeout)?;
        let generator = OpenAiClient::new(
            cfg.openai_api_key.clone(),
            cfg.openai_model.clone(),
            cfg.openai_base_url.clone(),
            cfg.http_timeout,
        )?;
        let host = WordPressClient::from_config(cfg)?;

        Ok(Self::new(
            Box::new(fetcher),
            Box::new(generator),
            Box::new(host),
        ))
    }

    /// Run one listing end to end and return the publish response as-is.
    ///
    /// Unsupported URLs fail before anything is fetched.
    pub fn process_url(&self, url: &str) -> Result<Value, PipelineError> {
        let site = AuctionSite::from_url(url)?;
        tracing::info!(url, site = site.name(), "processing listing");

        let html = self.fetcher.fetch_text(url)?;
        let mut listing = site.extract(&html)?;
        tracing::debug!(
            title = %listing.title,
            images = listing.images.len(),
            "listing extracted"
        );

        listing.description = Some(generate_description(self.generator.as_ref(), &listing)?);
        listing.price = Some(estimate_price(&listing));
        tracing::info!(title = %listing.title, price = ?listing.price, "listing priced");

        let image_urls: Vec<String> = listing
            .images
            .iter()
            .map(|src| resolve_image_url(url, src))
            .collect();
        let report = upload_images(self.fetcher.as_ref(), self.host.as_ref(), &image_urls);
        tracing::info!(
            attempted = report.attempted,
            uploaded = report.media_ids.len(),
            skipped = report.skipped(),
            "images uploaded"
        );

        let description = listing.description.as_deref().unwrap_or_default();
        let post = compose_post(&listing.title, description, &report.media_ids);

        Ok(self.host.create_post(&post)?)
    }

    /// One result per input URL, in input order.
    ///
    /// A URL that fails becomes `{"error": ...}` in its slot and the rest of
    /// the batch still runs.
    pub fn process_batch(&self, urls: &[String]) -> Vec<Value> {
        urls.iter()
            .map(|url| match self.process_url(url) {
                Ok(result) => result,
                Err(e) => {
                    match &e {
                        PipelineError::Scrape(ScraperError::UnsupportedSite) => {
                            tracing::warn!(url = %url, "unsupported auction site")
                        }
                        _ => tracing::error!(url = %url, error = %e, "listing failed"),
                    }
                    json!({ "error": e.to_string() })
                }
            })
            .collect()
    }
}
