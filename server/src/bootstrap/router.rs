use axum::{
    Router,
    http::{HeaderName, HeaderValue, Method},
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::bootstrap::state::AppState;
use palette_snap_adapters::incoming::http_axum::routes::build_application_router;
use palette_snap_application::infrastructure_config::Config;

const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

pub fn create_router(state: AppState) -> Router {
    let adapters_state = state.to_adapters_state();
    let cors_layer = create_cors_layer(&adapters_state.config);

    build_application_router(&adapters_state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer),
        )
        .with_state(adapters_state)
}

fn create_cors_layer(config: &Config) -> CorsLayer {
    let request_id = HeaderName::from_static("x-request-id");
    let base_cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            request_id.clone(),
        ])
        .expose_headers([request_id]);

    let origin = config
        .server
        .cors_origin
        .as_deref()
        .and_then(|origin| origin.parse::<HeaderValue>().ok())
        .unwrap_or_else(|| HeaderValue::from_static(DEFAULT_CORS_ORIGIN));

    base_cors.allow_origin(origin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode, http::header};
    use palette_snap_application::infrastructure_config::StoreBackend;
    use tower::ServiceExt;

    async fn router_with_origin(cors_origin: Option<&str>) -> Router {
        let mut config = Config::default();
        config.library.backend = StoreBackend::Memory;
        config.server.cors_origin = cors_origin.map(str::to_string);

        create_router(AppState::new(config).await.unwrap())
    }

    fn request_from(origin: &str) -> Request<Body> {
        Request::builder()
            .uri("/health")
            .header(header::ORIGIN, origin)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn configured_origin_is_allowed() {
        let response = router_with_origin(Some("https://palettes.example"))
            .await
            .oneshot(request_from("https://palettes.example"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://palettes.example"
        );
    }

    #[tokio::test]
    async fn localhost_client_is_allowed_by_default() {
        let response = router_with_origin(None)
            .await
            .oneshot(request_from(DEFAULT_CORS_ORIGIN))
            .await
            .unwrap();

        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            DEFAULT_CORS_ORIGIN
        );
    }

    #[tokio::test]
    async fn preflight_allows_patch_and_request_id() {
        let preflight = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/palettes/1")
            .header(header::ORIGIN, DEFAULT_CORS_ORIGIN)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PATCH")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "x-request-id")
            .body(Body::empty())
            .unwrap();

        let response = router_with_origin(None)
            .await
            .oneshot(preflight)
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let allowed_methods = response.headers()[header::ACCESS_CONTROL_ALLOW_METHODS]
            .to_str()
            .unwrap();
        assert!(allowed_methods.contains("PATCH"));
    }
}
