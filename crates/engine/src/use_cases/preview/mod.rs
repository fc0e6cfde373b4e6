//! Map preview images.
//!
//! The base preview is rendered once per map and kept in the preview cache
//! until a refresh clears it. The locator variant draws an arrow over the
//! base preview and is rendered on every call.

pub mod raster;

use std::sync::Arc;

use eordb_domain::{Map, MapId};

use crate::infrastructure::ports::{CacheError, PreviewCache, StoreError};
use crate::stores::DatasetStore;

use raster::Projection;

#[derive(Debug, thiserror::Error)]
pub enum PreviewError {
    #[error("Map not found: {0}")]
    MapNotFound(MapId),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),
    #[error("Image encoding failed: {0}")]
    Image(#[from] image::ImageError),
}

pub struct MapPreview {
    store: Arc<DatasetStore>,
    cache: Arc<dyn PreviewCache>,
}

impl MapPreview {
    pub fn new(store: Arc<DatasetStore>, cache: Arc<dyn PreviewCache>) -> Self {
        Self { store, cache }
    }

    /// PNG preview of the whole map.
    pub async fn render(&self, id: MapId) -> Result<Vec<u8>, PreviewError> {
        let map = self.map(id).await?;
        self.base_png(&map).await
    }

    /// PNG preview with a locator arrow at tile `(x, y)`.
    pub async fn render_with_arrow(
        &self,
        id: MapId,
        x: i32,
        y: i32,
    ) -> Result<Vec<u8>, PreviewError> {
        let map = self.map(id).await?;
        let base = self.base_png(&map).await?;

        let mut canvas = raster::decode_png(&base)?;
        raster::draw_arrow(&mut canvas, &Projection::for_map(&map), x, y);
        Ok(raster::encode_png(&canvas)?)
    }

    async fn map(&self, id: MapId) -> Result<Map, PreviewError> {
        let maps = self.store.maps().await?;
        maps.get(&id).cloned().ok_or(PreviewError::MapNotFound(id))
    }

    async fn base_png(&self, map: &Map) -> Result<Vec<u8>, PreviewError> {
        if let Some(cached) = self.cache.get(map.id).await? {
            return Ok(cached);
        }

        let png = raster::encode_png(&raster::render(map))?;
        self.cache.put(map.id, &png).await?;
        tracing::info!(
            map_id = %map.id,
            width = map.width,
            height = map.height,
            bytes = png.len(),
            "Rendered map preview"
        );
        Ok(png)
    }
}
