use std::sync::Arc;
use tracing::info;

use palette_snap_adapters::outgoing::{
    image_rs::raster_decoder_image::{ImageRsDecoderAdapter, ImageRsDecoderConfig},
    palette_store::{
        json_file_store::JsonFilePaletteStoreAdapter, memory_store::InMemoryPaletteStoreAdapter,
    },
    tokio_spawn::decode_timeout_tokio::TokioDecodeTimeoutAdapter,
};
use palette_snap_adapters::shared::app_state::AppState as AdaptersAppState;
use palette_snap_application::{
    config::PaletteSettings,
    error::AppError,
    infrastructure_config::{Config, StoreBackend},
    palettes::service::{PaletteService, PaletteServiceDeps},
    ports::outgoing::{
        image_decoder::ImageDecoderPort, palette_store::PaletteStorePort,
        timeout::DecodeTimeoutPort,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub palette_service: Arc<PaletteService>,
}

impl AppState {
    pub async fn new(config: Config) -> Result<Self, AppError> {
        let config = Arc::new(config);
        let settings = Arc::new(PaletteSettings::from_config(&config));

        let decode_timeout_port = Self::create_decoder(&config);
        let palette_store = Self::create_palette_store(&config).await?;

        let palette_service = PaletteService::new(
            &settings,
            PaletteServiceDeps {
                decode_timeout_port,
                palette_store,
            },
        );

        Ok(Self {
            config,
            palette_service,
        })
    }

    fn create_decoder(config: &Config) -> Arc<dyn DecodeTimeoutPort> {
        let decoder: Arc<dyn ImageDecoderPort> =
            Arc::new(ImageRsDecoderAdapter::new(ImageRsDecoderConfig {
                max_dimension: config.image.max_dimension,
            }));
        Arc::new(TokioDecodeTimeoutAdapter::new(decoder))
    }

    async fn create_palette_store(config: &Config) -> Result<Arc<dyn PaletteStorePort>, AppError> {
        match config.library.backend {
            StoreBackend::Memory => {
                info!("Using in-memory palette library");
                Ok(Arc::new(InMemoryPaletteStoreAdapter::new()))
            }
            StoreBackend::JsonFile => {
                let store = JsonFilePaletteStoreAdapter::open(&config.library.file_path).await?;
                Ok(Arc::new(store))
            }
        }
    }

    pub fn to_adapters_state(&self) -> AdaptersAppState {
        AdaptersAppState::new(
            Arc::clone(&self.config),
            Arc::clone(&self.palette_service) as _,
            Arc::clone(&self.palette_service) as _,
        )
    }
}
