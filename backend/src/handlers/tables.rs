use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::borrow::Cow;

use restaurant_storage::dining_table::DiningTable;
use serde::Deserialize;
use tracing::{info, instrument};
use validator::{Validate, ValidationError};

use crate::{
    state::AppState,
    types::{AppError, ValidatedJson},
};

use super::products::MessageResponse;

#[derive(Debug, Deserialize, Validate)]
pub struct TableRequest {
    /// Table number; the panel sends a string, the customer app a bare number
    #[validate(custom(function = validate_numero))]
    pub numero: serde_json::Value,
    #[validate(length(min = 1, message = "Número e status são campos obrigatórios"))]
    pub status: String,
}

/// Accepts a non-empty string or a number, rejects everything else
fn validate_numero(numero: &serde_json::Value) -> Result<(), ValidationError> {
    let present = match numero {
        serde_json::Value::String(s) => !s.is_empty(),
        serde_json::Value::Number(_) => true,
        _ => false,
    };

    if present {
        Ok(())
    } else {
        Err(ValidationError::new("numero")
            .with_message(Cow::Borrowed("Número e status são campos obrigatórios")))
    }
}

/// Creates a dining table
///
/// The created document is echoed back, ID included.
#[instrument(skip(state, payload))]
pub async fn create_table(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<TableRequest>,
) -> Result<(StatusCode, Json<DiningTable>), AppError> {
    let table = state
        .dining_table_storage
        .create(payload.numero, payload.status)
        .await?;

    info!(table_id = %table.id, "Dining table created");

    Ok((StatusCode::CREATED, Json(table)))
}

/// Lists all dining tables
#[instrument(skip(state))]
pub async fn list_tables(
    State(state): State<AppState>,
) -> Result<Json<Vec<DiningTable>>, AppError> {
    let tables = state.dining_table_storage.list().await?;

    if tables.is_empty() {
        return Err(AppError::not_found("Nenhuma mesa encontrada"));
    }

    Ok(Json(tables))
}

/// Updates the number and status of a dining table
#[instrument(skip(state, payload))]
pub async fn update_table(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<TableRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .dining_table_storage
        .update(&id, payload.numero, payload.status)
        .await?;

    info!(table_id = %id, "Dining table updated");

    Ok(Json(MessageResponse {
        message: "Mesa atualizada com sucesso",
    }))
}

/// Deletes a dining table for good
#[instrument(skip(state))]
pub async fn delete_table(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.dining_table_storage.delete(&id).await?;

    info!(table_id = %id, "Dining table deleted");

    Ok(Json(MessageResponse {
        message: "Mesa deletada com sucesso",
    }))
}
