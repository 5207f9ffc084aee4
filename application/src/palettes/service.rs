use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use domain::{
    color::ColorKey,
    library::{PaletteId, PaletteUpdate, SavedPalette},
    palette::{Palette, PaletteExtractor},
};

use crate::{
    config::PaletteSettings,
    error::{AppError, AppResult},
    ports::{
        incoming::palettes::{GeneratePaletteUseCase, PaletteLibraryUseCase},
        outgoing::{palette_store::DynPaletteStorePort, timeout::DynDecodeTimeoutPort},
    },
};

use super::{data_uri::decode_payload, samples::random_sample_palettes};

pub struct PaletteServiceDeps {
    pub decode_timeout_port: DynDecodeTimeoutPort,
    pub palette_store: DynPaletteStorePort,
}

pub struct PaletteService {
    settings: Arc<PaletteSettings>,
    decode_timeout_port: DynDecodeTimeoutPort,
    palette_store: DynPaletteStorePort,
    extractor: PaletteExtractor,
}

impl PaletteService {
    pub fn new(settings: &Arc<PaletteSettings>, deps: PaletteServiceDeps) -> Arc<Self> {
        Arc::new(Self {
            settings: Arc::clone(settings),
            decode_timeout_port: deps.decode_timeout_port,
            palette_store: deps.palette_store,
            extractor: PaletteExtractor::new(),
        })
    }
}

#[async_trait::async_trait]
impl GeneratePaletteUseCase for PaletteService {
    #[instrument(skip(self, encoded_image), fields(payload_len = encoded_image.len()))]
    async fn generate_palette(&self, encoded_image: &str) -> AppResult<Palette> {
        if encoded_image.trim().is_empty() {
            return Err(AppError::ImageRequired);
        }

        let encoded = decode_payload(encoded_image)?;
        let image = self
            .decode_timeout_port
            .decode_with_timeout(encoded, self.settings.decode_timeout)
            .await?;

        debug!(
            width = image.width(),
            height = image.height(),
            "Decoded image for palette extraction"
        );

        let palette = self.extractor.extract(image.pixels());
        if palette.is_empty() {
            debug!("No color survived the darkness filter");
        }

        Ok(palette)
    }
}

#[async_trait::async_trait]
impl PaletteLibraryUseCase for PaletteService {
    #[instrument(skip(self, colors))]
    async fn save_palette(
        &self,
        colors: Vec<ColorKey>,
        name: Option<String>,
    ) -> AppResult<SavedPalette> {
        let name = name.unwrap_or_else(|| self.settings.default_palette_name.clone());
        let saved = self.palette_store.add(colors, Some(name)).await?;
        info!(palette_id = %saved.id, colors = saved.colors.len(), "Palette saved");
        Ok(saved)
    }

    async fn get_palette(&self, id: &PaletteId) -> AppResult<SavedPalette> {
        self.palette_store
            .get(id)
            .await?
            .ok_or_else(|| AppError::NotFound {
                message: format!("Palette {id} not found"),
            })
    }

    #[instrument(skip(self, changes))]
    async fn update_palette(
        &self,
        id: &PaletteId,
        changes: PaletteUpdate,
    ) -> AppResult<SavedPalette> {
        self.palette_store
            .update(id, changes)
            .await?
            .ok_or_else(|| AppError::NotFound {
                message: format!("Palette {id} not found"),
            })
    }

    #[instrument(skip(self))]
    async fn delete_palette(&self, id: &PaletteId) -> AppResult<()> {
        if self.palette_store.delete(id).await? {
            info!(palette_id = %id, "Palette deleted");
            Ok(())
        } else {
            Err(AppError::NotFound {
                message: format!("Palette {id} not found"),
            })
        }
    }

    async fn list_palettes(&self) -> AppResult<Vec<SavedPalette>> {
        self.palette_store.list().await
    }

    #[instrument(skip(self))]
    async fn clear_palettes(&self) -> AppResult<()> {
        self.palette_store.clear().await?;
        info!("Palette library cleared");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn seed_sample_palettes(&self) -> AppResult<Vec<SavedPalette>> {
        if !self.settings.allow_sample_seed {
            warn!("Rejected sample seeding, library.allow_sample_seed is off");
            return Err(AppError::Forbidden);
        }

        let samples = random_sample_palettes(&mut rand::rng());
        self.palette_store.replace_all(samples.clone()).await?;
        info!(count = samples.len(), "Palette library replaced with samples");
        Ok(samples)
    }
}
