use axum::async_trait;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use tracing::debug;
use validator::{Validate, ValidationErrors};

use crate::error::ApiError;

/// JSON body extractor that rejects with the domain error type.
///
/// Deserialization is strict: request structs deny unknown fields and every
/// required field must be present with the right type. The parsed value is
/// then run through its `validator` rules. Either failure becomes a 400 with
/// the same `{"error": "..."}` body every other failure mode uses.
pub struct ValidJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let detail = rejection.body_text();
                debug!("Rejected request body: {}", detail);
                ApiError::BadRequest(detail)
            })?;

        if let Err(violations) = value.validate() {
            let summary = validation_summary(&violations);
            debug!("Request body failed validation: {}", summary);
            return Err(ApiError::BadRequest(summary));
        }

        Ok(Self(value))
    }
}

/// Flatten field violations into one line, sorted by field name.
fn validation_summary(violations: &ValidationErrors) -> String {
    let mut parts: Vec<String> = violations
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let codes: Vec<&str> = errors.iter().map(|error| error.code.as_ref()).collect();
            format!("{}: {}", field, codes.join(", "))
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
