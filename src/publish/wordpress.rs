// publish/wordpress.rs
use crate::config::Config;
use crate::publish::{MediaHost, MediaId, PostRequest, PublishError};
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_DISPOSITION;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;

/// WordPress REST API client, authenticated with an application password.
pub struct WordPressClient {
    posts_url: String,
    media_url: String,
    username: String,
    app_password: String,
    client: Client,
}

#[derive(Deserialize)]
struct CreatedMedia {
    id: Option<u64>,
}

impl WordPressClient {
    pub fn new(
        posts_url: String,
        media_url: String,
        username: String,
        app_password: String,
        timeout: Duration,
    ) -> Result<Self, PublishError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PublishError::RequestFailed(e.to_string()))?;

        Ok(Self {
            posts_url,
            media_url,
            username,
            app_password,
            client,
        })
    }

    pub fn from_config(cfg: &Config) -> Result<Self, PublishError> {
        Self::new(
            cfg.wp_api_url.clone(),
            cfg.media_url(),
            cfg.wp_username.clone(),
            cfg.wp_app_password.clone(),
            cfg.http_timeout,
        )
    }
}

/// Best guess at the image type from the file extension.
fn image_mime(filename: &str) -> mime::Mime {
    let ext = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "jpg" | "jpeg" => mime::IMAGE_JPEG,
        "png" => mime::IMAGE_PNG,
        "gif" => mime::IMAGE_GIF,
        "bmp" => mime::IMAGE_BMP,
        "svg" => mime::IMAGE_SVG,
        "webp" => "image/webp".parse().unwrap_or(mime::APPLICATION_OCTET_STREAM),
        _ => mime::APPLICATION_OCTET_STREAM,
    }
}

impl MediaHost for WordPressClient {
    fn upload_media(&self, filename: &str, bytes: Vec<u8>) -> Result<Option<MediaId>, PublishError> {
        let part = Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(image_mime(filename).as_ref())
            .map_err(|e| PublishError::RequestFailed(e.to_string()))?;

        let resp = self
            .client
            .post(&self.media_url)
            .header(CONTENT_DISPOSITION, format!("attachment; filename={filename}"))
            .basic_auth(&self.username, Some(&self.app_password))
            .multipart(Form::new().part("file", part))
            .send()
            .map_err(|e| PublishError::RequestFailed(e.to_string()))?;

        if resp.status() != StatusCode::CREATED {
            tracing::debug!(filename, status = %resp.status(), "media upload not created");
            return Ok(None);
        }

        let created: CreatedMedia = resp
            .json()
            .map_err(|e| PublishError::Decode(e.to_string()))?;

        Ok(created.id.map(MediaId))
    }

    fn create_post(&self, post: &PostRequest) -> Result<serde_json::Value, PublishError> {
        let resp = self
            .client
            .post(&self.posts_url)
            .basic_auth(&self.username, Some(&self.app_password))
            .json(post)
            .send()
            .map_err(|e| PublishError::RequestFailed(e.to_string()))?;

        tracing::info!(status = %resp.status(), title = %post.title, "publish response");

        resp.json().map_err(|e| PublishError::Decode(e.to_string()))
    }
}
