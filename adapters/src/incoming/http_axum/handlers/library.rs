use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::instrument;
use validator::Validate;

use domain::library::PaletteId;
use palette_snap_application::error::AppError;

#[cfg(feature = "docs")]
use crate::incoming::http_axum::dto::responses::ErrorResponse;
use crate::incoming::http_axum::{
    dto::{
        requests::{SavePaletteRequest, UpdatePaletteRequest},
        responses::{PaletteListResponse, PaletteResponse},
    },
    error_mapper::HttpError,
};
use crate::shared::app_state::AppState;

fn validated<T: Validate>(payload: Result<Json<T>, JsonRejection>) -> Result<T, HttpError> {
    let Json(request) = payload?;
    request.validate().map_err(|e| {
        HttpError(AppError::ValidationError {
            message: format!("Validation failed: {}", e),
        })
    })?;
    Ok(request)
}

#[cfg_attr(feature = "docs", utoipa::path(
    get,
    path = "/api/palettes",
    responses(
        (status = 200, description = "Saved palettes in insertion order", body = PaletteListResponse),
        (status = 500, description = "Library could not be read", body = ErrorResponse)
    ),
    tag = "library"
))]
pub async fn list_palettes(
    State(state): State<AppState>,
) -> Result<Json<PaletteListResponse>, HttpError> {
    let palettes = state.palette_library_use_case.list_palettes().await?;
    Ok(Json(PaletteListResponse::from(palettes)))
}

#[cfg_attr(feature = "docs", utoipa::path(
    post,
    path = "/api/palettes",
    request_body = SavePaletteRequest,
    responses(
        (status = 201, description = "Palette saved", body = PaletteResponse),
        (status = 400, description = "Malformed JSON body", body = ErrorResponse),
        (status = 422, description = "Invalid colors or name", body = ErrorResponse),
        (status = 500, description = "Library could not be written", body = ErrorResponse)
    ),
    tag = "library"
))]
#[instrument(skip(state, payload))]
pub async fn save_palette(
    State(state): State<AppState>,
    payload: Result<Json<SavePaletteRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PaletteResponse>), HttpError> {
    let request = validated(payload)?;
    let colors = request.color_keys()?;

    let saved = state
        .palette_library_use_case
        .save_palette(colors, request.name)
        .await?;

    Ok((StatusCode::CREATED, Json(PaletteResponse::from(saved))))
}

#[cfg_attr(feature = "docs", utoipa::path(
    get,
    path = "/api/palettes/{id}",
    params(("id" = String, Path, description = "Palette id")),
    responses(
        (status = 200, description = "Saved palette", body = PaletteResponse),
        (status = 404, description = "Unknown palette", body = ErrorResponse)
    ),
    tag = "library"
))]
pub async fn get_palette(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PaletteResponse>, HttpError> {
    let saved = state
        .palette_library_use_case
        .get_palette(&PaletteId::new(id))
        .await?;

    Ok(Json(PaletteResponse::from(saved)))
}

#[cfg_attr(feature = "docs", utoipa::path(
    patch,
    path = "/api/palettes/{id}",
    params(("id" = String, Path, description = "Palette id")),
    request_body = UpdatePaletteRequest,
    responses(
        (status = 200, description = "Palette updated", body = PaletteResponse),
        (status = 404, description = "Unknown palette", body = ErrorResponse),
        (status = 422, description = "Invalid colors or name", body = ErrorResponse)
    ),
    tag = "library"
))]
#[instrument(skip(state, payload))]
pub async fn update_palette(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePaletteRequest>, JsonRejection>,
) -> Result<Json<PaletteResponse>, HttpError> {
    let changes = validated(payload)?.into_update()?;

    let updated = state
        .palette_library_use_case
        .update_palette(&PaletteId::new(id), changes)
        .await?;

    Ok(Json(PaletteResponse::from(updated)))
}

#[cfg_attr(feature = "docs", utoipa::path(
    delete,
    path = "/api/palettes/{id}",
    params(("id" = String, Path, description = "Palette id")),
    responses(
        (status = 204, description = "Palette deleted"),
        (status = 404, description = "Unknown palette", body = ErrorResponse)
    ),
    tag = "library"
))]
#[instrument(skip(state))]
pub async fn delete_palette(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, HttpError> {
    state
        .palette_library_use_case
        .delete_palette(&PaletteId::new(id))
        .await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg_attr(feature = "docs", utoipa::path(
    delete,
    path = "/api/palettes",
    responses(
        (status = 204, description = "Library emptied"),
        (status = 500, description = "Library could not be written", body = ErrorResponse)
    ),
    tag = "library"
))]
pub async fn clear_palettes(State(state): State<AppState>) -> Result<StatusCode, HttpError> {
    state.palette_library_use_case.clear_palettes().await?;
    Ok(StatusCode::NO_CONTENT)
}

#[cfg_attr(feature = "docs", utoipa::path(
    post,
    path = "/api/palettes/samples",
    responses(
        (status = 200, description = "Library replaced with randomly colored sample palettes", body = PaletteListResponse),
        (status = 403, description = "Sample seeding is disabled", body = ErrorResponse)
    ),
    tag = "library"
))]
pub async fn seed_sample_palettes(
    State(state): State<AppState>,
) -> Result<Json<PaletteListResponse>, HttpError> {
    let samples = state.palette_library_use_case.seed_sample_palettes().await?;
    Ok(Json(PaletteListResponse::from(samples)))
}
