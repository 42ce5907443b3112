// Data models for video export into the photo library

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Arguments of a video save call. Field names follow the channel wire
/// format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveVideoRequest {
    pub file_path: String,
}

/// A media item created by a photo library import.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedAsset {
    /// Library-assigned identifier for the new asset
    pub id: String,
    /// Where the asset lives, as reported by the library
    pub location: String,
    /// Unix timestamp of the import
    pub created_at: i64,
    pub size_bytes: u64,
}

/// Error types for video export operations
#[derive(Debug, thiserror::Error)]
pub enum MediaError {
    #[error("{0}")]
    InvalidArgument(String),

    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Save failed: {0}")]
    SaveFailed(String),

    #[error("No photo library on this platform")]
    NotSupported,
}

impl MediaError {
    /// Stable machine-readable code reported to the host alongside the
    /// human-readable message.
    pub fn code(&self) -> &'static str {
        match self {
            MediaError::InvalidArgument(_) => "INVALID_ARGUMENT",
            MediaError::FileNotFound(_) => "FILE_NOT_FOUND",
            MediaError::SaveFailed(_) => "SAVE_FAILED",
            MediaError::NotSupported => "NOT_SUPPORTED",
        }
    }
}

pub type MediaResult<T> = Result<T, MediaError>;

impl From<MediaError> for crate::channel::ChannelError {
    fn from(err: MediaError) -> Self {
        Self::new(err.code(), err.to_string())
    }
}
