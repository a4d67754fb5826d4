mod publish_error;
mod publisher;
mod uploader;
mod wordpress;

pub use publish_error::PublishError;
pub use publisher::{compose_post, PostRequest};
pub use uploader::{resolve_image_url, upload_images};
pub use wordpress::WordPressClient;

use serde::{Deserialize, Serialize};

/// Handle the media library hands back for an uploaded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaId(pub u64);

/// The content-management backend: a media library and a posts collection.
pub trait MediaHost: Send + Sync {
    /// `Ok(None)` means the host answered but did not create the media item.
    fn upload_media(&self, filename: &str, bytes: Vec<u8>) -> Result<Option<MediaId>, PublishError>;

    /// Returns the host's response body untouched, success or not.
    fn create_post(&self, post: &PostRequest) -> Result<serde_json::Value, PublishError>;
}
