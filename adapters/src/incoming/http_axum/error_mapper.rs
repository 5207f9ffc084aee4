use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{debug, error};

use domain::error::DomainError;
use palette_snap_application::error::AppError;

use crate::incoming::http_axum::dto::responses::ErrorResponse;

const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";

pub struct HttpError(pub AppError);

impl HttpError {
    fn is_client_error(&self) -> bool {
        matches!(
            self.0,
            AppError::ImageRequired
                | AppError::PayloadTooLarge
                | AppError::MalformedRequest { .. }
                | AppError::ValidationError { .. }
                | AppError::Domain(DomainError::InvalidColorFormat(_))
                | AppError::NotFound { .. }
                | AppError::Forbidden
        )
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        if self.is_client_error() {
            debug!("Client error response generated: {}", self.0);
        } else {
            error!("Server error response generated: {}", self.0);
        }

        let (status_code, message) = match &self.0 {
            AppError::ImageRequired => (StatusCode::BAD_REQUEST, self.0.to_string()),

            AppError::PayloadTooLarge => (StatusCode::PAYLOAD_TOO_LARGE, self.0.to_string()),

            AppError::MalformedRequest { .. } => {
                (StatusCode::BAD_REQUEST, "Invalid JSON format".to_string())
            }

            AppError::ValidationError { message } => {
                (StatusCode::UNPROCESSABLE_ENTITY, message.clone())
            }

            AppError::Domain(DomainError::InvalidColorFormat(_)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, self.0.to_string())
            }

            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),

            AppError::Forbidden => (StatusCode::FORBIDDEN, "Forbidden".to_string()),

            AppError::Domain(DomainError::MalformedInput(_))
            | AppError::InvalidImagePayload { .. }
            | AppError::CodecError { .. }
            | AppError::StorageError { .. }
            | AppError::ConfigError { .. }
            | AppError::TaskError { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
            ),
        };

        (status_code, Json(ErrorResponse { message })).into_response()
    }
}

impl From<AppError> for HttpError {
    fn from(app_error: AppError) -> Self {
        HttpError(app_error)
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return HttpError(AppError::PayloadTooLarge);
        }

        HttpError(AppError::MalformedRequest {
            message: rejection.body_text(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(error: AppError) -> StatusCode {
        HttpError(error).into_response().status()
    }

    #[test]
    fn client_errors_keep_their_status() {
        assert_eq!(status_of(AppError::ImageRequired), StatusCode::BAD_REQUEST);
        assert_eq!(
            status_of(AppError::ValidationError {
                message: "name: too long".into()
            }),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            status_of(AppError::NotFound {
                message: "Palette 1 not found".into()
            }),
            StatusCode::NOT_FOUND
        );
        assert_eq!(status_of(AppError::Forbidden), StatusCode::FORBIDDEN);
        assert_eq!(
            status_of(AppError::PayloadTooLarge),
            StatusCode::PAYLOAD_TOO_LARGE
        );
    }

    #[test]
    fn join_failures_are_internal() {
        assert_eq!(
            status_of(AppError::TaskError {
                message: "decoder panicked".into()
            }),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn decode_and_storage_failures_are_internal() {
        for error in [
            AppError::InvalidImagePayload {
                message: "bad base64".into(),
            },
            AppError::CodecError {
                message: "truncated".into(),
            },
            AppError::StorageError {
                message: "disk full".into(),
            },
        ] {
            assert_eq!(status_of(error), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }
}
