// src/tests/utils.rs
use crate::describe::{GenerationError, TextGenerator};
use crate::pipeline::Pipeline;
use crate::publish::{MediaHost, MediaId, PostRequest, PublishError};
use crate::scrape::{Fetcher, ScraperError};
use serde_json::json;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

/// Every downstream call the fakes saw, in order.
pub type CallLog = Arc<Mutex<Vec<String>>>;

pub const RESPECT_URL: &str = "https://www.respectmotors.example/stock/1001";
pub const AUTOACCESS_URL: &str = "https://autoaccess.example/lot/5521";

pub const RESPECT_PAGE: &str = r#"
    <h1>2015 Toyota Hilux</h1>
    <img src="/static/logo.png">
    <img src="/vehicles/1001-a.jpg">
    <img src="/vehicles/reject-1001-b.jpg">
    <img src="https://cdn.example/vehicles/1001-c.jpg">
    <table>
      <tr><td>Make</td><td>Toyota</td></tr>
      <tr><td>Fuel</td><td>Diesel</td></tr>
      <tr><td>Grade</td><td>4</td></tr>
    </table>"#;

pub const AUTOACCESS_PAGE: &str = r#"
    <h1>Nissan Note</h1>
    <div class="table-responsive"><table>
      <tr><td>Make</td><td>Nissan</td></tr>
      <tr><td>Fuel Type</td><td>Petrol</td></tr>
    </table></div>"#;

pub struct FakeFetcher {
    pages: HashMap<String, String>,
    log: CallLog,
}

impl Fetcher for FakeFetcher {
    fn fetch_text(&self, url: &str) -> Result<String, ScraperError> {
        self.log.lock().unwrap().push(format!("page {url}"));
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScraperError::Status {
                status: 404,
                url: url.to_string(),
            })
    }

    fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, ScraperError> {
        self.log.lock().unwrap().push(format!("image {url}"));
        Ok(vec![0xFF, 0xD8])
    }
}

pub struct FakeGenerator {
    fail: bool,
    log: CallLog,
}

impl TextGenerator for FakeGenerator {
    fn complete(&self, _system: &str, user: &str) -> Result<String, GenerationError> {
        self.log.lock().unwrap().push("generate".to_string());
        if self.fail {
            return Err(GenerationError::Api {
                status: 429,
                body: "rate limited".into(),
            });
        }
        let make = user
            .lines()
            .find_map(|l| l.strip_prefix("Make: "))
            .unwrap_or("?");
        Ok(format!("  A fine {make}.  \n"))
    }
}

/// Creates media with increasing ids unless the filename starts with "reject";
/// posts echo back what was sent.
pub struct FakeHost {
    next_id: AtomicU64,
    log: CallLog,
}

impl MediaHost for FakeHost {
    fn upload_media(&self, filename: &str, _bytes: Vec<u8>) -> Result<Option<MediaId>, PublishError> {
        self.log.lock().unwrap().push(format!("upload {filename}"));
        if filename.starts_with("reject") {
            return Ok(None);
        }
        Ok(Some(MediaId(self.next_id.fetch_add(1, Ordering::SeqCst))))
    }

    fn create_post(&self, post: &PostRequest) -> Result<serde_json::Value, PublishError> {
        self.log.lock().unwrap().push(format!("post {}", post.title));
        Ok(json!({
            "title": post.title,
            "content": post.content,
            "status": post.status,
            "featured_media": post.featured_media,
        }))
    }
}

pub struct FakeOptions {
    pub pages: Vec<(&'static str, &'static str)>,
    pub fail_generation: bool,
}

impl Default for FakeOptions {
    fn default() -> Self {
        Self {
            pages: vec![(RESPECT_URL, RESPECT_PAGE), (AUTOACCESS_URL, AUTOACCESS_PAGE)],
            fail_generation: false,
        }
    }
}

pub fn fake_pipeline(opts: FakeOptions) -> (Pipeline, CallLog) {
    let log: CallLog = Arc::new(Mutex::new(Vec::new()));

    let fetcher = FakeFetcher {
        pages: opts
            .pages
            .into_iter()
            .map(|(u, p)| (u.to_string(), p.to_string()))
            .collect(),
        log: log.clone(),
    };
    let generator = FakeGenerator {
        fail: opts.fail_generation,
        log: log.clone(),
    };
    let host = FakeHost {
        next_id: AtomicU64::new(100),
        log: log.clone(),
    };

    (
        Pipeline::new(Box::new(fetcher), Box::new(generator), Box::new(host)),
        log,
    )
}
