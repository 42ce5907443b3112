// Folder-backed photo library - imports videos into a managed directory
// on platforms without a system photo library

use crate::models::media::{MediaError, MediaResult, SavedAsset};
use crate::platform::PhotoLibrary;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// Photo library backed by a directory on disk.
///
/// Each import copies the source bytes into the library root under a
/// fresh identifier. Only media bytes travel; the source's name and
/// filesystem metadata stay behind.
pub struct FolderPhotoLibrary {
    root: PathBuf,
}

impl FolderPhotoLibrary {
    /// Create a library rooted at `root`, creating the directory if
    /// needed.
    pub fn new(root: impl Into<PathBuf>) -> MediaResult<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)
            .map_err(|e| MediaError::SaveFailed(format!("could not create library root: {}", e)))?;

        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Paths of every asset currently in the library.
    pub fn assets(&self) -> MediaResult<Vec<PathBuf>> {
        let mut assets = Vec::new();
        for entry in std::fs::read_dir(&self.root)
            .map_err(|e| MediaError::SaveFailed(e.to_string()))?
        {
            let entry = entry.map_err(|e| MediaError::SaveFailed(e.to_string()))?;
            if entry.path().is_file() {
                assets.push(entry.path());
            }
        }
        assets.sort();
        Ok(assets)
    }

    fn destination_for(&self, source: &Path, id: &Uuid) -> PathBuf {
        // Keep the container extension so players recognize the file
        match source.extension() {
            Some(ext) => self.root.join(format!("{}.{}", id, ext.to_string_lossy())),
            None => self.root.join(id.to_string()),
        }
    }
}

#[async_trait]
impl PhotoLibrary for FolderPhotoLibrary {
    async fn import_video(&self, source: &Path) -> MediaResult<SavedAsset> {
        let id = Uuid::new_v4();
        let destination = self.destination_for(source, &id);

        let size_bytes = tokio::fs::copy(source, &destination)
            .await
            .map_err(|e| MediaError::SaveFailed(e.to_string()))?;

        println!("Imported video into library: {}", destination.display());

        Ok(SavedAsset {
            id: id.to_string(),
            location: destination.display().to_string(),
            created_at: chrono::Utc::now().timestamp(),
            size_bytes,
        })
    }

    fn describe(&self) -> String {
        format!("folder library at {}", self.root.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_library(tag: &str) -> FolderPhotoLibrary {
        let root = std::env::temp_dir().join(format!("nuyna_test_library_{}", tag));
        let _ = std::fs::remove_dir_all(&root);
        FolderPhotoLibrary::new(&root).expect("failed to create library")
    }

    fn write_source(tag: &str, contents: &[u8]) -> PathBuf {
        let path = std::env::temp_dir().join(format!("nuyna_test_source_{}.mp4", tag));
        std::fs::write(&path, contents).expect("failed to write source file");
        path
    }

    #[tokio::test]
    async fn test_import_copies_without_touching_source() {
        let library = scratch_library("copy");
        let source = write_source("copy", b"fake video bytes");

        let asset = library.import_video(&source).await.expect("import failed");

        // Source survives the import with its contents intact
        assert!(source.exists());
        assert_eq!(std::fs::read(&source).unwrap(), b"fake video bytes");

        // The asset is a real file with the same bytes
        let imported = PathBuf::from(&asset.location);
        assert_eq!(std::fs::read(&imported).unwrap(), b"fake video bytes");
        assert_eq!(asset.size_bytes, 16);

        let _ = std::fs::remove_dir_all(library.root());
        let _ = std::fs::remove_file(&source);
    }

    #[tokio::test]
    async fn test_each_import_creates_exactly_one_asset() {
        let library = scratch_library("count");
        let source = write_source("count", b"clip");

        assert_eq!(library.assets().unwrap().len(), 0);

        library.import_video(&source).await.expect("import failed");
        assert_eq!(library.assets().unwrap().len(), 1);

        library.import_video(&source).await.expect("import failed");
        assert_eq!(library.assets().unwrap().len(), 2);

        let _ = std::fs::remove_dir_all(library.root());
        let _ = std::fs::remove_file(&source);
    }

    #[tokio::test]
    async fn test_import_does_not_reuse_source_name() {
        let library = scratch_library("rename");
        let source = write_source("rename", b"clip");

        let asset = library.import_video(&source).await.expect("import failed");

        let imported = PathBuf::from(&asset.location);
        assert_ne!(imported.file_name(), source.file_name());
        assert_eq!(
            imported.extension().and_then(|e| e.to_str()),
            Some("mp4"),
            "container extension should survive"
        );

        let _ = std::fs::remove_dir_all(library.root());
        let _ = std::fs::remove_file(&source);
    }

    #[tokio::test]
    async fn test_import_of_unreadable_source_is_save_failed() {
        let library = scratch_library("missing");
        let source = std::env::temp_dir().join("nuyna_test_source_never_written.mp4");

        let err = library.import_video(&source).await.unwrap_err();
        assert_eq!(err.code(), "SAVE_FAILED");

        let _ = std::fs::remove_dir_all(library.root());
    }
}
