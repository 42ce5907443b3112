use crate::models::media::{MediaError, MediaResult, SavedAsset};
use crate::platform::PhotoLibrary;
use async_trait::async_trait;
use std::path::Path;
use tokio::process::Command;
use uuid::Uuid;

/// System photo library on macOS, driven through Photos.app.
///
/// Photos ingests the media bytes and assigns its own asset identity;
/// the source file's name and sidecar metadata are not transferred.
pub struct PhotosAppLibrary;

impl PhotosAppLibrary {
    pub fn new() -> Self {
        Self
    }

    fn import_script(source: &Path) -> String {
        // "skip check duplicates" keeps repeated imports from silently
        // collapsing into one asset
        format!(
            "tell application \"Photos\" to import POSIX file \"{}\" skip check duplicates yes",
            source.display()
        )
    }
}

#[async_trait]
impl PhotoLibrary for PhotosAppLibrary {
    async fn import_video(&self, source: &Path) -> MediaResult<SavedAsset> {
        let size_bytes = tokio::fs::metadata(source)
            .await
            .map(|m| m.len())
            .unwrap_or(0);

        let output = Command::new("osascript")
            .arg("-e")
            .arg(Self::import_script(source))
            .output()
            .await
            .map_err(|e| MediaError::SaveFailed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let message = if stderr.is_empty() {
                "Unknown error".to_string()
            } else {
                stderr
            };
            return Err(MediaError::SaveFailed(message));
        }

        // Photos reports the new media item id on stdout
        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let id = if stdout.is_empty() {
            Uuid::new_v4().to_string()
        } else {
            stdout
        };

        println!("Imported video into Photos library: {}", source.display());

        Ok(SavedAsset {
            id,
            location: "Photos library".to_string(),
            created_at: chrono::Utc::now().timestamp(),
            size_bytes,
        })
    }

    fn describe(&self) -> String {
        "system Photos library".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_script_quotes_posix_path() {
        let script = PhotosAppLibrary::import_script(Path::new("/tmp/clip one.mp4"));
        assert!(script.contains("POSIX file \"/tmp/clip one.mp4\""));
        assert!(script.starts_with("tell application \"Photos\""));
    }

    #[test]
    fn test_describe_names_the_system_library() {
        assert!(PhotosAppLibrary::new().describe().contains("Photos"));
    }
}
