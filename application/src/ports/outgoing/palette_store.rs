use crate::error::AppResult;
use domain::color::ColorKey;
use domain::library::{PaletteId, PaletteUpdate, SavedPalette};
#[cfg(test)]
use mockall::automock;
use std::sync::Arc;

#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait PaletteStorePort: Send + Sync {
    async fn add(&self, colors: Vec<ColorKey>, name: Option<String>) -> AppResult<SavedPalette>;
    async fn get(&self, id: &PaletteId) -> AppResult<Option<SavedPalette>>;
    async fn update(
        &self,
        id: &PaletteId,
        changes: PaletteUpdate,
    ) -> AppResult<Option<SavedPalette>>;
    async fn delete(&self, id: &PaletteId) -> AppResult<bool>;
    async fn list(&self) -> AppResult<Vec<SavedPalette>>;
    async fn clear(&self) -> AppResult<()>;
    async fn replace_all(&self, palettes: Vec<SavedPalette>) -> AppResult<()>;
}

pub type DynPaletteStorePort = Arc<dyn PaletteStorePort>;
