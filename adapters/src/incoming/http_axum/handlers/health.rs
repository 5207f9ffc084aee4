use axum::{Json, extract::State};

#[cfg(feature = "docs")]
use crate::incoming::http_axum::dto::responses::ErrorResponse;
use crate::incoming::http_axum::{dto::responses::HealthResponse, error_mapper::HttpError};
use crate::shared::app_state::AppState;

#[cfg_attr(feature = "docs", utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is up and the palette library is readable", body = HealthResponse),
        (status = 500, description = "Palette library could not be read", body = ErrorResponse)
    ),
    tag = "system",
    summary = "System health check",
    operation_id = "health_check"
))]
pub async fn health_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, HttpError> {
    let saved_palettes = state.palette_library_use_case.list_palettes().await?.len();

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        environment: state.config.environment.env.clone(),
        saved_palettes,
        max_image_dimension: state.config.image.max_dimension,
    }))
}
