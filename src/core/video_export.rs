// Video export - validates a save request and hands the file to the
// photo library for import

use crate::models::media::{MediaError, MediaResult, SaveVideoRequest, SavedAsset};
use crate::platform::PhotoLibrary;
use serde_json::Value;
use std::path::Path;
use std::sync::Arc;

/// Carries a video file from the host's scratch space into the photo
/// library.
///
/// The import copies the media bytes only, so the saved asset does not
/// inherit the source file's embedded metadata.
pub struct VideoExporter {
    library: Arc<dyn PhotoLibrary>,
}

impl VideoExporter {
    pub fn new(library: Arc<dyn PhotoLibrary>) -> Self {
        Self { library }
    }

    /// Validate the call arguments and import the referenced file.
    ///
    /// Checks run in order: argument shape first (no filesystem access
    /// until `filePath` is a string), then file existence, then the
    /// library import. Each failure maps to a stable error code.
    pub async fn save_without_metadata(&self, arguments: &Value) -> MediaResult<SavedAsset> {
        let request: SaveVideoRequest = serde_json::from_value(arguments.clone())
            .map_err(|_| MediaError::InvalidArgument("filePath is required".to_string()))?;

        let path = Path::new(&request.file_path);
        let is_file = tokio::fs::metadata(path)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false);
        if !is_file {
            return Err(MediaError::FileNotFound(path.to_path_buf()));
        }

        self.library.import_video(path).await
    }
}
