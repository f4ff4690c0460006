//! JSON body extractor that reports every failure as `400 {"error": ...}`.

use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::case::normalize_payload;
use crate::error::AppError;

/// Deserialized JSON object body. Keys are matched case-insensitively and `null` values
/// count as absent. No `Content-Type` requirement.
#[derive(Clone, Debug)]
pub struct Payload<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        let mut value: Value =
            serde_json::from_slice(&bytes).map_err(|e| AppError::BadRequest(e.to_string()))?;
        if !value.is_object() {
            return Err(AppError::BadRequest("body must be a JSON object".into()));
        }
        normalize_payload(&mut value);
        let payload = serde_json::from_value(value).map_err(|e| AppError::BadRequest(e.to_string()))?;
        Ok(Payload(payload))
    }
}
