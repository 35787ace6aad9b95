//! Custom extractors for request validation

use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use validator::Validate;

use crate::types::error::AppError;

/// Custom JSON extractor that validates the payload
///
/// Deserialization failures and `validator` failures both map to the 400
/// responses the clients expect for missing required fields.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: serde::de::DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // First extract JSON
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|err| match err {
                JsonRejection::JsonDataError(_) => {
                    AppError::bad_request("Todos os campos são obrigatórios")
                }
                _ => AppError::bad_request("JSON inválido"),
            })?;

        // Then validate, surfacing the field-level message when one is set
        payload.validate().map_err(|errors| {
            let message = errors
                .field_errors()
                .into_values()
                .flatten()
                .find_map(|err| err.message.as_ref().map(ToString::to_string))
                .unwrap_or_else(|| "Todos os campos são obrigatórios".to_string());

            AppError::bad_request(message)
        })?;

        Ok(Self(payload))
    }
}
