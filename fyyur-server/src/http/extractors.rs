//! Custom Axum extractors

use axum::extract::{Form, FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;

use super::error::ApiError;
use crate::models::{FormFields, ValidationError};

/// Integer record id from the path.
///
/// Anything that isn't a positive integer is treated as a missing page.
pub struct EntityId(pub i32);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| not_found(String::new()))?;

        match raw.parse::<i32>() {
            Ok(id) if id > 0 => Ok(Self(id)),
            _ => Err(not_found(raw)),
        }
    }
}

fn not_found(id: String) -> ApiError {
    ApiError::NotFound {
        resource: "page",
        id,
    }
}

/// Url-encoded request body as ordered key/value pairs
pub struct FormBody(pub FormFields);

impl<S> FromRequest<S> for FormBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(pairs): Form<Vec<(String, String)>> = Form::from_request(req, state)
            .await
            .map_err(|_| {
                ApiError::Validation(ValidationError::InvalidFormat {
                    field: "body",
                    reason: "must be url-encoded",
                })
            })?;

        Ok(Self(FormFields::new(pairs)))
    }
}
