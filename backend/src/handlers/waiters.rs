use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use restaurant_storage::waiter::{Waiter, WaiterCreateRequest, WaiterUpdate};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use validator::Validate;

use crate::{
    state::AppState,
    types::{AppError, ValidatedJson},
};

use super::products::MessageResponse;

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateWaiterRequest {
    #[validate(length(min = 1))]
    pub waiter_name: String,
    #[validate(length(min = 1))]
    pub waiter_surname: String,
    #[validate(length(min = 1))]
    pub waiter_email: String,
    /// Raw password; only its bcrypt hash is ever stored
    #[validate(length(min = 1))]
    pub waiter_password: String,
    #[validate(length(min = 1))]
    pub waiter_situation: String,
    #[validate(length(min = 1))]
    pub waiter_status: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateWaiterResponse {
    pub waiter_id: String,
    pub message: &'static str,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWaiterRequest {
    #[validate(length(min = 1))]
    pub waiter_name: String,
    #[validate(length(min = 1))]
    pub waiter_surname: String,
    #[validate(length(min = 1))]
    pub waiter_email: String,
    #[validate(length(min = 1))]
    pub waiter_password: String,
    #[validate(length(min = 1))]
    pub waiter_situation: String,
}

#[derive(Debug, Deserialize)]
pub struct ListWaitersQuery {
    pub status: Option<String>,
}

/// Creates a waiter with a bcrypt-hashed password
#[instrument(skip(state, payload))]
pub async fn create_waiter(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateWaiterRequest>,
) -> Result<(StatusCode, Json<CreateWaiterResponse>), AppError> {
    let password_hash = bcrypt::hash(&payload.waiter_password, bcrypt::DEFAULT_COST)?;

    let waiter = state
        .waiter_storage
        .create(WaiterCreateRequest {
            name: payload.waiter_name,
            surname: payload.waiter_surname,
            email: payload.waiter_email,
            password_hash,
            situation: payload.waiter_situation,
            status: payload.waiter_status,
        })
        .await?;

    info!(waiter_id = %waiter.id, "Waiter created");

    Ok((
        StatusCode::CREATED,
        Json(CreateWaiterResponse {
            waiter_id: waiter.id,
            message: "Servidor: Garçom cadastrado com sucesso",
        }),
    ))
}

/// Lists waiters, optionally filtered by status
#[instrument(skip(state))]
pub async fn list_waiters(
    State(state): State<AppState>,
    Query(query): Query<ListWaitersQuery>,
) -> Result<Json<Vec<Waiter>>, AppError> {
    let waiters = state.waiter_storage.list(query.status.as_deref()).await?;
    Ok(Json(waiters))
}

/// Updates an existing waiter, rehashing the submitted password
#[instrument(skip(state, payload))]
pub async fn update_waiter(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateWaiterRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let password_hash = bcrypt::hash(&payload.waiter_password, bcrypt::DEFAULT_COST)?;

    state
        .waiter_storage
        .update(
            &id,
            WaiterUpdate {
                name: payload.waiter_name,
                surname: payload.waiter_surname,
                email: payload.waiter_email,
                password_hash,
                situation: payload.waiter_situation,
            },
        )
        .await?;

    info!(waiter_id = %id, "Waiter updated");

    Ok(Json(MessageResponse {
        message: "Servidor: Garçom atualizado com sucesso",
    }))
}

/// Soft-deletes a waiter
#[instrument(skip(state))]
pub async fn delete_waiter(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.waiter_storage.deactivate(&id).await?;

    info!(waiter_id = %id, "Waiter deactivated");

    Ok(Json(MessageResponse {
        message: "Servidor: Garçom excluído com sucesso",
    }))
}
