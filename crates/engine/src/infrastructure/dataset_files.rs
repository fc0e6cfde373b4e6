//! Flat-file cache of the collection dumps, one `<collection>.json` per
//! collection under the data directory.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::infrastructure::ports::{CollectionKind, DatasetSource, StoreError};

pub struct FileDatasetSource {
    dir: PathBuf,
}

impl FileDatasetSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_of(&self, kind: CollectionKind) -> PathBuf {
        self.dir.join(kind.file_name())
    }
}

#[async_trait]
impl DatasetSource for FileDatasetSource {
    async fn read(&self, kind: CollectionKind) -> Result<Vec<u8>, StoreError> {
        let path = self.path_of(kind);
        tokio::fs::read(&path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => StoreError::Missing {
                collection: kind,
                path: path.display().to_string(),
            },
            _ => StoreError::io(kind, e),
        })
    }

    async fn write(&self, kind: CollectionKind, bytes: &[u8]) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| StoreError::io(kind, e))?;

        // Write beside the target first so readers never see a half-written file.
        let path = self.path_of(kind);
        let staging = path.with_extension("json.tmp");
        tokio::fs::write(&staging, bytes)
            .await
            .map_err(|e| StoreError::io(kind, e))?;
        tokio::fs::rename(&staging, &path)
            .await
            .map_err(|e| StoreError::io(kind, e))?;

        tracing::debug!(collection = %kind, path = %path.display(), bytes = bytes.len(), "Wrote collection cache");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_file_is_reported_as_missing() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let source = FileDatasetSource::new(temp_dir.path());

        let err = source.read(CollectionKind::Items).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Missing { collection: CollectionKind::Items, .. }
        ));
    }

    #[tokio::test]
    async fn write_creates_directory_and_replaces_content() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let source = FileDatasetSource::new(temp_dir.path().join("nested"));

        source.write(CollectionKind::Shops, b"[1]").await.unwrap();
        source.write(CollectionKind::Shops, b"[2]").await.unwrap();

        assert_eq!(source.read(CollectionKind::Shops).await.unwrap(), b"[2]");
        assert!(source.dir().join("shops.json").exists());
        assert!(!source.dir().join("shops.json.tmp").exists());
    }
}
