//! Request extractors that reject with the JSON error envelope.

use axum::async_trait;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::error::AppError;

/// JSON body extractor.
///
/// Malformed JSON or a missing JSON content type is a 400; well-formed JSON
/// with fields of the wrong shape is a 422.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(JsonRejection::JsonDataError(err)) => {
                Err(AppError::Unprocessable(err.body_text()))
            }
            Err(rejection) => Err(AppError::BadRequest(rejection.body_text())),
        }
    }
}

/// Non-negative integer id taken from the single path parameter.
///
/// A segment that is not a non-negative integer does not name any resource,
/// so it answers 404.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceId(pub i64);

#[async_trait]
impl<S> FromRequestParts<S> for ResourceId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::NotFound(rejection.body_text()))?;
        if id < 0 {
            return Err(AppError::NotFound(format!("negative id {}", id)));
        }
        Ok(ResourceId(id))
    }
}

/// Integer field that web clients may send either as a number or as a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum LenientInt {
    Int(i64),
    Text(String),
}

impl LenientInt {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            LenientInt::Int(n) => Some(*n),
            LenientInt::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Resolve to an integer or reject the request naming `field`.
    pub fn require(&self, field: &str) -> Result<i64, AppError> {
        self.as_i64()
            .ok_or_else(|| AppError::Unprocessable(format!("{} must be an integer", field)))
    }
}
