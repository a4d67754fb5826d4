// publish/uploader.rs
use crate::publish::{MediaHost, MediaId};
use crate::scrape::Fetcher;
use url::Url;

const FALLBACK_FILENAME: &str = "image";

/// Outcome of pushing a listing's images to the media library.
#[derive(Debug, Default, PartialEq)]
pub struct UploadReport {
    pub attempted: usize,
    /// Ids of the uploads that succeeded, in input order.
    pub media_ids: Vec<MediaId>,
}

impl UploadReport {
    pub fn skipped(&self) -> usize {
        self.attempted - self.media_ids.len()
    }
}

/// Absolute URL for an image `src`, resolved against the page it came from.
/// Anything that will not parse is returned as-is.
pub fn resolve_image_url(page_url: &str, src: &str) -> String {
    Url::parse(page_url)
        .and_then(|base| base.join(src))
        .map(String::from)
        .unwrap_or_else(|_| src.to_string())
}

/// Last path segment of the image URL, without any query string.
pub fn filename_for(image_url: &str) -> String {
    let name = match Url::parse(image_url) {
        Ok(url) => url
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .map(str::to_string),
        Err(_) => image_url
            .split(['?', '#'])
            .next()
            .and_then(|path| path.rsplit('/').next())
            .map(str::to_string),
    };

    name.filter(|n| !n.is_empty())
        .unwrap_or_else(|| FALLBACK_FILENAME.to_string())
}

/// Fetch each image and upload it, one at a time, in order.
///
/// A failed fetch, a failed request or a non-created response just drops
/// that image; nothing is retried and nothing is surfaced to the caller
/// beyond the counts in the report.
pub fn upload_images(
    fetcher: &dyn Fetcher,
    host: &dyn MediaHost,
    image_urls: &[String],
) -> UploadReport {
    let mut report = UploadReport::default();

    for url in image_urls {
        report.attempted += 1;

        let bytes = match fetcher.fetch_bytes(url) {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::debug!(url = %url, error = %e, "skipping image, fetch failed");
                continue;
            }
        };

        let filename = filename_for(url);
        match host.upload_media(&filename, bytes) {
            Ok(Some(id)) => report.media_ids.push(id),
            Ok(None) => tracing::debug!(url = %url, "skipping image, upload not created"),
            Err(e) => tracing::debug!(url = %url, error = %e, "skipping image, upload failed"),
        }
    }

    report
}
