use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use restaurant_storage::product::{Product, ProductCreateRequest, ProductUpdate};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};
use validator::Validate;

use crate::{
    image_host::DEFAULT_PRODUCT_IMAGE_URI,
    state::AppState,
    types::{AppError, ValidatedJson},
};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    #[validate(length(min = 1))]
    pub product_name: String,
    #[validate(length(min = 1))]
    pub product_description: String,
    #[validate(length(min = 1))]
    pub product_category: String,
    /// Currency string as typed in the panel, e.g. `"R$ 39,90"`
    #[validate(length(min = 1))]
    pub product_value: String,
    /// Base64 image payload, optionally with a data-URI prefix
    pub image_base64: Option<String>,
    #[validate(length(min = 1))]
    pub product_status: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductResponse {
    pub product_id: String,
    pub message: &'static str,
}

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[validate(length(min = 1))]
    pub product_name: String,
    #[validate(length(min = 1))]
    pub product_description: String,
    #[validate(length(min = 1))]
    pub product_category: String,
    #[validate(length(min = 1))]
    pub product_value: String,
    pub image_base64: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateMenuSectionRequest {
    /// Menu-section payload; required, but otherwise opaque to the backend
    pub cardapio: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct ListProductsQuery {
    pub status: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Extracts the numeric value from a currency string
///
/// Everything except digits and the decimal point is dropped before
/// parsing, mirroring what the administration panel sends.
fn parse_currency(raw: &str) -> Result<f64, AppError> {
    let digits: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    digits
        .parse::<f64>()
        .map_err(|_| AppError::bad_request("Valor do produto inválido"))
}

/// Creates a product, uploading its image to the external host first
#[instrument(skip(state, payload))]
pub async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<CreateProductResponse>), AppError> {
    let value = parse_currency(&payload.product_value)?;

    // Products without an upload fall back to the stock image
    let image_uri = match payload.image_base64.as_deref() {
        Some(image_base64) if !image_base64.is_empty() => {
            state.image_host.upload_base64(image_base64).await?
        }
        _ => DEFAULT_PRODUCT_IMAGE_URI.to_string(),
    };

    let product = state
        .product_storage
        .create(ProductCreateRequest {
            name: payload.product_name,
            description: payload.product_description,
            category: payload.product_category,
            value,
            status: payload.product_status,
            image_uri,
        })
        .await?;

    info!(product_id = %product.id, "Product created");

    Ok((
        StatusCode::CREATED,
        Json(CreateProductResponse {
            product_id: product.id,
            message: "Servidor: Produto cadastrado com sucesso",
        }),
    ))
}

/// Lists products, optionally filtered by status
#[instrument(skip(state))]
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<Vec<Product>>, AppError> {
    let products = state.product_storage.list(query.status.as_deref()).await?;
    Ok(Json(products))
}

/// Updates an existing product, re-uploading its image when one is sent
#[instrument(skip(state, payload))]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateProductRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let value = parse_currency(&payload.product_value)?;

    let image_uri = match payload.image_base64.as_deref() {
        Some(image_base64) if !image_base64.is_empty() => {
            Some(state.image_host.upload_base64(image_base64).await?)
        }
        _ => None,
    };

    state
        .product_storage
        .update(
            &id,
            ProductUpdate {
                name: payload.product_name,
                description: payload.product_description,
                category: payload.product_category,
                value,
                image_uri,
            },
        )
        .await?;

    info!(product_id = %id, "Product updated");

    Ok(Json(MessageResponse {
        message: "Servidor: Produto atualizado com sucesso",
    }))
}

/// Rewrites only the menu-section payload of a product
#[instrument(skip(state, payload))]
pub async fn update_product_menu_section(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<UpdateMenuSectionRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let Some(menu_section) = payload.cardapio else {
        return Err(AppError::bad_request(
            "A informação de cardápio é obrigatória",
        ));
    };

    state
        .product_storage
        .set_menu_section(&id, &menu_section)
        .await?;

    info!(product_id = %id, "Product menu section updated");

    Ok(Json(MessageResponse {
        message: "Servidor: Produto atualizado com sucesso",
    }))
}

/// Soft-deletes a product
#[instrument(skip(state))]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError> {
    state.product_storage.deactivate(&id).await?;

    info!(product_id = %id, "Product deactivated");

    Ok(Json(MessageResponse {
        message: "Servidor: Produto excluído com sucesso",
    }))
}
