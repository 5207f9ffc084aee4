use crate::infrastructure_config::Config;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct PaletteSettings {
    pub decode_timeout: Duration,
    pub default_palette_name: String,
    pub allow_sample_seed: bool,
}

impl PaletteSettings {
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self {
            decode_timeout: config.decode_timeout(),
            default_palette_name: config.library.default_palette_name.clone(),
            allow_sample_seed: config.library.allow_sample_seed,
        }
    }
}
