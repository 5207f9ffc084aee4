use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
#[cfg(feature = "docs")]
use utoipa::ToSchema;

use domain::library::SavedPalette;
use domain::palette::Palette;

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[cfg_attr(feature = "docs", schema(
    description = "Dominant colors of the image, most frequent first. Holds 3 to 5 entries, or fewer when the image has fewer distinct non-dark colors.",
    example = json!({
        "palette": ["#D95F43", "#F2C14E", "#5B8E7D", "#2E4057", "#EDE6D6"]
    })
))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePaletteResponse {
    pub palette: Vec<String>,
}

impl From<Palette> for GeneratePaletteResponse {
    fn from(palette: Palette) -> Self {
        Self {
            palette: palette.to_hex_strings(),
        }
    }
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[cfg_attr(feature = "docs", schema(
    description = "Palette stored in the library",
    example = json!({
        "id": "1760616000000",
        "colors": ["#D95F43", "#F2C14E", "#5B8E7D"],
        "name": "Name",
        "display_name": "Name",
        "created_at": "2025-10-16T12:00:00Z"
    })
))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteResponse {
    pub id: String,
    pub colors: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub display_name: String,
    #[cfg_attr(feature = "docs", schema(value_type = String, format = DateTime))]
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl From<SavedPalette> for PaletteResponse {
    fn from(palette: SavedPalette) -> Self {
        Self {
            display_name: palette.display_name().to_string(),
            id: palette.id.0,
            colors: palette.colors.iter().map(ToString::to_string).collect(),
            name: palette.name,
            created_at: palette.created_at,
        }
    }
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteListResponse {
    pub palettes: Vec<PaletteResponse>,
}

impl From<Vec<SavedPalette>> for PaletteListResponse {
    fn from(palettes: Vec<SavedPalette>) -> Self {
        Self {
            palettes: palettes.into_iter().map(PaletteResponse::from).collect(),
        }
    }
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[cfg_attr(feature = "docs", schema(
    example = json!({
        "status": "ok",
        "environment": "development",
        "saved_palettes": 4,
        "max_image_dimension": 100
    })
))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub environment: String,
    pub saved_palettes: usize,
    pub max_image_dimension: u32,
}

#[cfg_attr(feature = "docs", derive(ToSchema))]
#[cfg_attr(feature = "docs", schema(
    description = "Error body returned for every failed request",
    example = json!({ "message": "Image is required" })
))]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}
