use serde::{Deserialize, Serialize};
#[cfg(feature = "docs")]
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use domain::color::ColorKey;
use domain::library::PaletteUpdate;
use palette_snap_application::error::{AppError, AppResult};

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[cfg_attr(feature = "docs", schema(
    description = "Photo to analyse, as a data URI whose payload after the first comma is base64 image data",
    example = json!({
        "image": "data:image/png;base64,iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAYAAAAfFcSJAAAADUlEQVR42mP8z8DwHwAFBQIAX8jx0gAAAABJRU5ErkJggg=="
    })
))]
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneratePaletteRequest {
    #[serde(default)]
    pub image: Option<String>,
}

impl GeneratePaletteRequest {
    pub fn require_image(&self) -> AppResult<&str> {
        self.image
            .as_deref()
            .filter(|image| !image.trim().is_empty())
            .ok_or(AppError::ImageRequired)
    }
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[cfg_attr(feature = "docs", schema(
    description = "Palette to add to the library. Without a name the configured default is used.",
    example = json!({
        "colors": ["#D95F43", "#F2C14E", "#5B8E7D"],
        "name": "Harbor at dusk"
    })
))]
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SavePaletteRequest {
    #[validate(
        length(
            min = 1,
            max = 16,
            message = "A palette must have between 1 and 16 colors"
        ),
        custom(
            function = "validate_hex_colors",
            message = "Colors must be written as #RRGGBB"
        )
    )]
    pub colors: Vec<String>,
    #[validate(
        length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"),
        custom(function = "validate_not_blank", message = "Name cannot be blank")
    )]
    pub name: Option<String>,
}

impl SavePaletteRequest {
    pub fn color_keys(&self) -> AppResult<Vec<ColorKey>> {
        parse_colors(&self.colors)
    }
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[cfg_attr(feature = "docs", schema(
    description = "Partial palette change. Omitted fields keep their current value.",
    example = json!({
        "name": "Renamed palette"
    })
))]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdatePaletteRequest {
    #[serde(default)]
    #[validate(
        length(
            min = 1,
            max = 16,
            message = "A palette must have between 1 and 16 colors"
        ),
        custom(
            function = "validate_hex_colors",
            message = "Colors must be written as #RRGGBB"
        )
    )]
    pub colors: Option<Vec<String>>,
    #[serde(default)]
    #[validate(
        length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"),
        custom(function = "validate_not_blank", message = "Name cannot be blank")
    )]
    pub name: Option<String>,
}

impl UpdatePaletteRequest {
    pub fn into_update(self) -> AppResult<PaletteUpdate> {
        let colors = self.colors.as_deref().map(parse_colors).transpose()?;
        Ok(PaletteUpdate {
            colors,
            name: self.name,
        })
    }
}

fn parse_colors(colors: &[String]) -> AppResult<Vec<ColorKey>> {
    colors
        .iter()
        .map(|color| color.parse::<ColorKey>().map_err(AppError::from))
        .collect()
}

fn validate_hex_colors(colors: &[String]) -> Result<(), ValidationError> {
    if colors.iter().all(|color| color.parse::<ColorKey>().is_ok()) {
        Ok(())
    } else {
        Err(ValidationError::new("invalid_hex_color"))
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank"))
    } else {
        Ok(())
    }
}
