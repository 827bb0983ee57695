//! Fetching gallery data from a static JSON resource
//!
//! The gallery payload is a read-only file served next to the app; there is
//! no write-back and no retry. A failed load leaves the caller's collection
//! untouched and can simply be re-invoked.

use crate::models::ImageRecord;

/// Errors that can occur while loading gallery data
#[derive(Debug)]
pub enum LoadError {
    /// Transport-level failure (resource unreachable, connection dropped)
    Request(reqwest::Error),
    /// Non-success HTTP status
    Status(u16),
    /// Payload did not decode to a list of image records
    Decode(serde_json::Error),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Request(e) => write!(f, "Request error: {}", e),
            LoadError::Status(code) => write!(f, "HTTP error! Status: {}", code),
            LoadError::Decode(e) => write!(f, "Decode error: {}", e),
        }
    }
}

impl std::error::Error for LoadError {}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        LoadError::Request(err)
    }
}

impl From<serde_json::Error> for LoadError {
    fn from(err: serde_json::Error) -> Self {
        LoadError::Decode(err)
    }
}

/// Decode a raw gallery payload into image records
///
/// Split out of the fetch path so malformed-payload handling is testable
/// without a server.
pub fn decode_records(bytes: &[u8]) -> Result<Vec<ImageRecord>, LoadError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Service for fetching the gallery payload
pub struct GalleryLoader {
    source_url: String,
}

impl GalleryLoader {
    /// Create a loader for a fixed source URL
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
        }
    }

    /// Fetch and decode the gallery records
    ///
    /// Returns the parsed sequence on success. Any failure (unreachable
    /// resource, non-success status, malformed payload) surfaces as a
    /// [`LoadError`] for the caller to log and display.
    pub async fn load(&self) -> Result<Vec<ImageRecord>, LoadError> {
        log::debug!("Fetching gallery data from {}", self.source_url);

        let response = reqwest::get(&self.source_url).await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        let records = decode_records(&bytes)?;

        log::info!("Loaded {} gallery records", records.len());
        Ok(records)
    }
}
