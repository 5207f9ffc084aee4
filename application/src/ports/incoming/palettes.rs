use crate::error::AppResult;
use domain::color::ColorKey;
use domain::library::{PaletteId, PaletteUpdate, SavedPalette};
use domain::palette::Palette;

#[async_trait::async_trait]
pub trait GeneratePaletteUseCase: Send + Sync {
    /// `encoded_image` is a data URI whose payload after the first comma is
    /// base64 image data.
    async fn generate_palette(&self, encoded_image: &str) -> AppResult<Palette>;
}

#[async_trait::async_trait]
pub trait PaletteLibraryUseCase: Send + Sync {
    async fn save_palette(
        &self,
        colors: Vec<ColorKey>,
        name: Option<String>,
    ) -> AppResult<SavedPalette>;
    async fn get_palette(&self, id: &PaletteId) -> AppResult<SavedPalette>;
    async fn update_palette(
        &self,
        id: &PaletteId,
        changes: PaletteUpdate,
    ) -> AppResult<SavedPalette>;
    async fn delete_palette(&self, id: &PaletteId) -> AppResult<()>;
    async fn list_palettes(&self) -> AppResult<Vec<SavedPalette>>;
    async fn clear_palettes(&self) -> AppResult<()>;
    async fn seed_sample_palettes(&self) -> AppResult<Vec<SavedPalette>>;
}
