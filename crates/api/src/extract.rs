//! Request extractors whose rejections go through [`AppError`], so malformed
//! bodies and ids get the same JSON error shape as handler failures.

use axum::extract::{FromRequest, FromRequestParts, Path};
use axum::http::request::Parts;
use axum::Json;
use swapi_core::types::DbId;

use crate::error::AppError;

/// JSON request body. Any parse failure becomes a 400.
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

/// The `{id}` path segment. A non-integer segment becomes a 404.
#[derive(Debug, Clone, Copy)]
pub struct EntityId(pub DbId);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<DbId>::from_request_parts(parts, state).await?;
        Ok(Self(id))
    }
}
