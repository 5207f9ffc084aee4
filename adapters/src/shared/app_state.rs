use std::sync::Arc;

use palette_snap_application::{
    infrastructure_config::Config,
    ports::incoming::palettes::{GeneratePaletteUseCase, PaletteLibraryUseCase},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub generate_palette_use_case: Arc<dyn GeneratePaletteUseCase>,
    pub palette_library_use_case: Arc<dyn PaletteLibraryUseCase>,
}

impl AppState {
    pub fn new(
        config: Arc<Config>,
        generate_palette_use_case: Arc<dyn GeneratePaletteUseCase>,
        palette_library_use_case: Arc<dyn PaletteLibraryUseCase>,
    ) -> Self {
        Self {
            config,
            generate_palette_use_case,
            palette_library_use_case,
        }
    }
}
