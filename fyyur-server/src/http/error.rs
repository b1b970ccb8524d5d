//! API error types with IntoResponse
//!
//! Errors are rendered as HTML error pages with the matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::repos::DbError;
use crate::http::views;
use crate::models::ValidationError;

/// Handler error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Resource not found (404)
    NotFound { resource: &'static str, id: String },

    /// Operation exists in the route table but is not offered (501)
    NotSupported { operation: &'static str },

    /// Database error (500, logged)
    Database(DbError),

    /// Internal error (500, logged)
    Internal { message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::NotSupported { .. } => StatusCode::NOT_IMPLEMENTED,
            Self::Database(_) | Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let page = match &self {
            Self::Validation(e) => views::errors::bad_request(&e.to_string()),
            Self::NotFound { resource, id } => {
                tracing::debug!(resource, id = %id, "Not found");
                views::errors::not_found()
            }
            Self::NotSupported { operation } => views::errors::not_supported(operation),
            Self::Database(e) => {
                // Log the actual error, render a generic page
                tracing::error!("Database error: {}", e);
                views::errors::server_error()
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                views::errors::server_error()
            }
        };

        page.with_status(status).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        match e {
            DbError::NotFound { resource, id } => Self::NotFound { resource, id },
            DbError::NotSupported { operation } => Self::NotSupported { operation },
            _ => Self::Database(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn validation_error_is_400() {
        let err = ApiError::Validation(ValidationError::Empty { field: "name" });
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn not_found_is_404_html() {
        let err = ApiError::NotFound {
            resource: "venue",
            id: "7".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("404"));
    }

    #[tokio::test]
    async fn db_not_supported_maps_to_501() {
        let err: ApiError = DbError::NotSupported {
            operation: "delete venue",
        }
        .into();
        assert_eq!(err.into_response().status(), StatusCode::NOT_IMPLEMENTED);
    }

    #[tokio::test]
    async fn db_not_found_maps_to_404() {
        let err: ApiError = DbError::NotFound {
            resource: "artist",
            id: "1".into(),
        }
        .into();
        assert!(matches!(err, ApiError::NotFound { resource: "artist", .. }));
    }

    #[tokio::test]
    async fn internal_error_hides_message() {
        let err = ApiError::Internal {
            message: "secret detail".into(),
        };
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(!html.contains("secret detail"));
    }
}
