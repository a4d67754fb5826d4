use crate::publish::MediaId;
use serde::Serialize;

pub const DISCLAIMER: &str = "Disclaimer: Auto-generated content.";

/// WordPress' name for the published state.
pub const POST_STATUS: &str = "publish";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostRequest {
    pub title: String,
    pub content: String,
    pub status: &'static str,
    // Serialized as null when nothing uploaded.
    pub featured_media: Option<MediaId>,
}

/// The first uploaded image becomes the featured image; the rest are not referenced.
pub fn compose_post(title: &str, description: &str, media_ids: &[MediaId]) -> PostRequest {
    PostRequest {
        title: title.to_string(),
        content: format!("{description}\n\n{DISCLAIMER}"),
        status: POST_STATUS,
        featured_media: media_ids.first().copied(),
    }
}
