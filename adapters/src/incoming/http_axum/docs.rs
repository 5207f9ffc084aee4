use crate::incoming::http_axum::{dto, handlers};
use dto::requests::{GeneratePaletteRequest, SavePaletteRequest, UpdatePaletteRequest};
use dto::responses::{
    ErrorResponse, GeneratePaletteResponse, HealthResponse, PaletteListResponse, PaletteResponse,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::generate::generate_palette,
        handlers::library::list_palettes,
        handlers::library::save_palette,
        handlers::library::get_palette,
        handlers::library::update_palette,
        handlers::library::delete_palette,
        handlers::library::clear_palettes,
        handlers::library::seed_sample_palettes,
        handlers::health::health_check,
    ),
    components(
        schemas(
            GeneratePaletteRequest,
            SavePaletteRequest,
            UpdatePaletteRequest,
            GeneratePaletteResponse,
            PaletteResponse,
            PaletteListResponse,
            HealthResponse,
            ErrorResponse,
        )
    ),
    tags(
        (name = "palette", description = "Palette extraction from photos"),
        (name = "library", description = "Saved palette library"),
        (name = "system", description = "Service health"),
    ),
    info(
        title = "Palette Snap API",
        description = "Extracts dominant colors from photos and keeps a library of saved palettes.",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
