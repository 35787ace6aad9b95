//! Universal error handling for the API
//!
//! Every handler failure funnels into [`AppError`], which renders the
//! `{"error": "..."}` envelope the clients already parse. Storage and
//! image-host failures keep their detail in the logs only.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use restaurant_storage::dining_table::DiningTableStorageError;
use restaurant_storage::order::OrderStorageError;
use restaurant_storage::product::ProductStorageError;
use restaurant_storage::settings::SettingsStorageError;
use restaurant_storage::waiter::WaiterStorageError;
use serde::Serialize;

use crate::image_host::ImageHostError;

/// Generic message for unexpected failures
const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor";

/// API error response envelope
#[derive(Debug, Serialize)]
struct ErrorBody {
    /// Human-readable error message
    error: String,
}

/// Application error type carrying the HTTP status and response message
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    /// Creates a new application error
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    /// 400 with the given message
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// 404 with the given message
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// 500 with the generic message
    #[must_use]
    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error based on status code
        match self.status.as_u16() {
            400..=499 => tracing::warn!("Client error: {} - {}", self.status, self.message),
            500..=599 => tracing::error!("Server error: {} - {}", self.status, self.message),
            _ => {}
        }

        (
            self.status,
            Json(ErrorBody {
                error: self.message,
            }),
        )
            .into_response()
    }
}

impl From<ProductStorageError> for AppError {
    fn from(err: ProductStorageError) -> Self {
        match err {
            ProductStorageError::NotFound => Self::not_found("Produto não encontrado"),
            other => {
                tracing::error!("Product storage error: {other}");
                Self::internal()
            }
        }
    }
}

impl From<WaiterStorageError> for AppError {
    fn from(err: WaiterStorageError) -> Self {
        match err {
            WaiterStorageError::NotFound => Self::not_found("Garçom não encontrado"),
            other => {
                tracing::error!("Waiter storage error: {other}");
                Self::internal()
            }
        }
    }
}

impl From<OrderStorageError> for AppError {
    fn from(err: OrderStorageError) -> Self {
        match err {
            OrderStorageError::NotFound => Self::not_found("Pedido não encontrado"),
            other => {
                tracing::error!("Order storage error: {other}");
                Self::internal()
            }
        }
    }
}

impl From<DiningTableStorageError> for AppError {
    fn from(err: DiningTableStorageError) -> Self {
        match err {
            DiningTableStorageError::NotFound => Self::not_found("Mesa não encontrada"),
            other => {
                tracing::error!("Dining table storage error: {other}");
                Self::internal()
            }
        }
    }
}

impl From<SettingsStorageError> for AppError {
    fn from(err: SettingsStorageError) -> Self {
        tracing::error!("Settings storage error: {err}");
        Self::internal()
    }
}

impl From<ImageHostError> for AppError {
    fn from(err: ImageHostError) -> Self {
        tracing::error!("Image host error: {err}");
        Self::internal()
    }
}

impl From<bcrypt::BcryptError> for AppError {
    fn from(err: bcrypt::BcryptError) -> Self {
        tracing::error!("Password hashing error: {err}");
        Self::internal()
    }
}
