use crate::models::media::{MediaResult, SavedAsset};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;

#[cfg(target_os = "macos")]
mod macos;

pub mod folder_library;

pub use folder_library::FolderPhotoLibrary;

/// Write/import interface onto a managed media store.
///
/// The bridge never reads assets back; importing is the only capability
/// the save operation needs, so it is the whole seam.
#[async_trait]
pub trait PhotoLibrary: Send + Sync {
    /// Import a video file as a new library asset. The source bytes are
    /// copied, never moved; the source file is left untouched.
    async fn import_video(&self, source: &Path) -> MediaResult<SavedAsset>;

    /// Human-readable description of where imported assets go.
    fn describe(&self) -> String;
}

/// Get the photo library for the current platform: the system Photos
/// library on macOS, a managed folder under `library_root` elsewhere.
pub fn system_photo_library(library_root: &Path) -> MediaResult<Arc<dyn PhotoLibrary>> {
    #[cfg(target_os = "macos")]
    {
        let _ = library_root;
        Ok(Arc::new(macos::PhotosAppLibrary::new()))
    }

    #[cfg(not(target_os = "macos"))]
    {
        Ok(Arc::new(FolderPhotoLibrary::new(library_root)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_photo_library_is_available() {
        let root = std::env::temp_dir().join("nuyna_test_platform_library");
        let library = system_photo_library(&root).expect("every platform has a library");
        assert!(!library.describe().is_empty());
        let _ = std::fs::remove_dir_all(&root);
    }
}
