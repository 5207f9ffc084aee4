use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{debug, instrument};

use crate::incoming::http_axum::{
    dto::{requests::GeneratePaletteRequest, responses::GeneratePaletteResponse},
    error_mapper::HttpError,
};
#[cfg(feature = "docs")]
use crate::incoming::http_axum::dto::responses::ErrorResponse;
use crate::shared::app_state::AppState;

#[cfg_attr(feature = "docs", utoipa::path(
    post,
    path = "/api/generate-palette",
    request_body = GeneratePaletteRequest,
    responses(
        (status = 200, description = "Palette extracted from the image", body = GeneratePaletteResponse),
        (status = 400, description = "Missing image or malformed JSON body", body = ErrorResponse,
         example = json!({ "message": "Image is required" })),
        (status = 413, description = "Body exceeds server.body_limit_bytes", body = ErrorResponse),
        (status = 500, description = "Image could not be decoded", body = ErrorResponse,
         example = json!({ "message": "Internal server error" }))
    ),
    tag = "palette",
    summary = "Extract a color palette from a photo",
    description = "Decodes the image, shrinks it to fit the configured bounding box, drops near-black pixels and returns the most frequent exact colors."
))]
#[instrument(skip(state, payload))]
pub async fn generate_palette(
    State(state): State<AppState>,
    payload: Result<Json<GeneratePaletteRequest>, JsonRejection>,
) -> Result<Json<GeneratePaletteResponse>, HttpError> {
    let Json(request) = payload?;
    let image = request.require_image()?;

    let palette = state
        .generate_palette_use_case
        .generate_palette(image)
        .await?;

    debug!(colors = palette.len(), "Palette generated");
    Ok(Json(GeneratePaletteResponse::from(palette)))
}
