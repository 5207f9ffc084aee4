use axum::{
    Router,
    routing::{get, post},
};
#[cfg(feature = "docs")]
use utoipa::OpenApi;
#[cfg(feature = "docs")]
use utoipa_swagger_ui::SwaggerUi;

#[cfg(feature = "docs")]
use crate::incoming::http_axum::docs::ApiDoc;
use crate::incoming::http_axum::{
    handlers::{
        generate::generate_palette,
        health::health_check,
        library::{
            clear_palettes, delete_palette, get_palette, list_palettes, save_palette,
            seed_sample_palettes, update_palette,
        },
    },
    router_ext::RouterExt,
};
use crate::shared::app_state::AppState;

pub fn build_application_router(state: &AppState) -> Router<AppState> {
    let api_routes = Router::new()
        .route("/api/generate-palette", post(generate_palette))
        .route(
            "/api/palettes",
            get(list_palettes).post(save_palette).delete(clear_palettes),
        )
        .route("/api/palettes/samples", post(seed_sample_palettes))
        .route(
            "/api/palettes/{id}",
            get(get_palette)
                .patch(update_palette)
                .delete(delete_palette),
        )
        .with_body_limit(state.config.server.body_limit_bytes);

    build_core_routes().merge(api_routes).with_request_id()
}

fn build_core_routes() -> Router<AppState> {
    let router = Router::new().route("/health", get(health_check));

    #[cfg(feature = "docs")]
    {
        router.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
    }

    #[cfg(not(feature = "docs"))]
    {
        router
    }
}
