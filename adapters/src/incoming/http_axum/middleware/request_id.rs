use axum::http::HeaderValue;
use axum::{extract::Request, middleware::Next, response::Response};
use tracing::debug;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "X-Request-Id";

/// Reuses the caller's `X-Request-Id` or mints a v4 UUID, and echoes it on
/// the response.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|header| header.to_str().ok())
        .filter(|value| !value.is_empty())
        .map_or_else(|| Uuid::new_v4().to_string(), ToString::to_string);

    let header_value = HeaderValue::from_str(&request_id).ok();

    if let Some(value) = &header_value {
        request
            .headers_mut()
            .insert(REQUEST_ID_HEADER, value.clone());
    }

    debug!(
        request_id = %request_id,
        method = %request.method(),
        path = %request.uri().path(),
        "Handling request"
    );

    let mut response = next.run(request).await;

    if let Some(value) = header_value {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}
