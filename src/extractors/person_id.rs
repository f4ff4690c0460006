//! Path identifier extractor. Runs before any body extractor, so a bad id is reported
//! ahead of a bad body.

use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use uuid::Uuid;

use crate::error::AppError;
use crate::service::validation::{parse_id, INVALID_IDENTIFIER};

/// The `:id` path segment, parsed as a UUID. Undecodable or malformed segments are
/// rejected with `400 {"error": "invalid identifier"}`.
#[derive(Clone, Copy, Debug)]
pub struct PersonId(pub Uuid);

#[async_trait]
impl<S> FromRequestParts<S> for PersonId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "path id rejected");
                AppError::BadRequest(INVALID_IDENTIFIER.into())
            })?;
        parse_id(&raw).map(PersonId)
    }
}
