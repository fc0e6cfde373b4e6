//! Disk cache for rendered map previews, one `<map id>.png` per map.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use eordb_domain::MapId;

use crate::infrastructure::ports::{CacheError, PreviewCache};

pub struct FilePreviewCache {
    dir: PathBuf,
}

impl FilePreviewCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_of(&self, map_id: MapId) -> PathBuf {
        self.dir.join(format!("{map_id}.png"))
    }
}

#[async_trait]
impl PreviewCache for FilePreviewCache {
    async fn get(&self, map_id: MapId) -> Result<Option<Vec<u8>>, CacheError> {
        match tokio::fs::read(self.path_of(map_id)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(CacheError::Io(e.to_string())),
        }
    }

    async fn put(&self, map_id: MapId, png: &[u8]) -> Result<(), CacheError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| CacheError::Io(e.to_string()))?;

        // Staged beside the target so a concurrent `get` never reads a partial image.
        let path = self.path_of(map_id);
        let staging = path.with_extension("png.tmp");
        tokio::fs::write(&staging, png)
            .await
            .map_err(|e| CacheError::Io(e.to_string()))?;
        tokio::fs::rename(&staging, &path)
            .await
            .map_err(|e| CacheError::Io(e.to_string()))
    }

    async fn clear(&self) -> Result<usize, CacheError> {
        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(CacheError::Io(e.to_string())),
        };

        let mut removed = 0;
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| CacheError::Io(e.to_string()))?
        {
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "png") {
                tokio::fs::remove_file(&path)
                    .await
                    .map_err(|e| CacheError::Io(e.to_string()))?;
                removed += 1;
            }
        }
        Ok(removed)
    }
}
