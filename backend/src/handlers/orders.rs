use axum::{
    extract::{Path, State},
    Json,
};
use axum_extra::extract::Query;
use restaurant_storage::order::Order;
use serde::Deserialize;
use tracing::{info, instrument};
use validator::Validate;

use crate::{
    state::AppState,
    types::{AppError, ValidatedJson},
};

use super::products::MessageResponse;

/// `status` may appear once or repeatedly; repeated values filter with
/// membership semantics. `axum_extra`'s `Query` collects the repeats.
#[derive(Debug, Deserialize)]
pub struct ListOrdersQuery {
    #[serde(default)]
    pub status: Vec<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateOrderStatusRequest {
    #[validate(length(min = 1))]
    pub status: String,
}

/// Lists orders, optionally filtered by one or more statuses
#[instrument(skip(state))]
pub async fn list_orders(
    State(state): State<AppState>,
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<Vec<Order>>, AppError> {
    let orders = state.order_storage.list(&query.status).await?;

    if orders.is_empty() {
        return Err(AppError::not_found("Nenhum pedido encontrado"));
    }

    Ok(Json(orders))
}

/// Moves an order to a new status
#[instrument(skip(state, payload))]
pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateOrderStatusRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    state
        .order_storage
        .update_status(&id, &payload.status)
        .await?;

    info!(order_id = %id, status = %payload.status, "Order status updated");

    Ok(Json(MessageResponse {
        message: "Status do pedido atualizado com sucesso",
    }))
}
