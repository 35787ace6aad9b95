//! Product storage module for DynamoDB operations
//!
//! Products are the menu items of the restaurant. Deleting a product is a
//! soft delete: the document stays in the table with its status flipped to
//! [`crate::STATUS_INACTIVE`].

mod error;

use std::collections::HashMap;
use std::sync::Arc;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use serde::{Deserialize, Serialize};
use serde_dynamo::{from_item, to_item};
use strum::Display;

pub use error::{ProductStorageError, ProductStorageResult};

use crate::STATUS_INACTIVE;

/// DynamoDB attribute names for the product table
#[derive(Debug, Display)]
#[strum(serialize_all = "camelCase")]
pub enum ProductAttribute {
    /// Primary key - unique product ID (UUID v4)
    Id,
    /// Product name (`nome` in the stored document)
    Nome,
    /// Product description (`descricao`)
    Descricao,
    /// Product category (`categoria`)
    Categoria,
    /// Numeric product value (`valor`)
    Valor,
    /// Product status (`Ativo` / `Inativo`)
    Status,
    /// URL of the hosted product image
    ImageUri,
    /// Optional menu-section payload (`cardapio`)
    Cardapio,
}

/// A product document as stored in DynamoDB
///
/// Attribute names keep the Portuguese document fields the mobile and web
/// clients already read, so a listed product serializes straight into the
/// response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Primary key - unique product ID (UUID v4)
    pub id: String,
    /// Product name
    #[serde(rename = "nome")]
    pub name: String,
    /// Product description
    #[serde(rename = "descricao")]
    pub description: String,
    /// Product category
    #[serde(rename = "categoria")]
    pub category: String,
    /// Numeric product value
    #[serde(rename = "valor")]
    pub value: f64,
    /// Product status (`Ativo` / `Inativo`)
    pub status: String,
    /// URL of the hosted product image
    #[serde(rename = "imageUri")]
    pub image_uri: String,
    /// Optional menu-section payload
    #[serde(rename = "cardapio", skip_serializing_if = "Option::is_none")]
    pub menu_section: Option<serde_json::Value>,
}

/// Request to create a new product document
#[derive(Debug, Clone)]
pub struct ProductCreateRequest {
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Product category
    pub category: String,
    /// Numeric product value
    pub value: f64,
    /// Product status
    pub status: String,
    /// URL of the hosted product image
    pub image_uri: String,
}

/// Fields written by a product update
#[derive(Debug, Clone)]
pub struct ProductUpdate {
    /// Product name
    pub name: String,
    /// Product description
    pub description: String,
    /// Product category
    pub category: String,
    /// Numeric product value
    pub value: f64,
    /// New image URL, written only when a fresh upload happened
    pub image_uri: Option<String>,
}

/// Storage client for product operations
pub struct ProductStorage {
    dynamodb_client: Arc<DynamoDbClient>,
    table_name: String,
}

impl ProductStorage {
    /// Creates a new product storage client
    ///
    /// # Arguments
    ///
    /// * `dynamodb_client` - Pre-configured DynamoDB client
    /// * `table_name` - DynamoDB table name for products
    #[must_use]
    pub const fn new(dynamodb_client: Arc<DynamoDbClient>, table_name: String) -> Self {
        Self {
            dynamodb_client,
            table_name,
        }
    }

    /// Creates a new product document with a generated UUID
    ///
    /// # Errors
    ///
    /// Returns `ProductStorageError` if the DynamoDB put operation fails
    pub async fn create(&self, request: ProductCreateRequest) -> ProductStorageResult<Product> {
        let product = Product {
            id: uuid::Uuid::new_v4().to_string(),
            name: request.name,
            description: request.description,
            category: request.category,
            value: request.value,
            status: request.status,
            image_uri: request.image_uri,
            menu_section: None,
        };

        let item = to_item(&product)
            .map_err(|e| ProductStorageError::SerializationError(e.to_string()))?;

        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await?;

        tracing::debug!("Created product {}", product.id);

        Ok(product)
    }

    /// Lists all products, optionally filtered to a single status
    ///
    /// The scan follows `last_evaluated_key` until the table is exhausted.
    ///
    /// # Errors
    ///
    /// Returns `ProductStorageError` if the DynamoDB scan operation fails
    pub async fn list(&self, status: Option<&str>) -> ProductStorageResult<Vec<Product>> {
        let mut products = Vec::new();
        let mut exclusive_start_key: Option<HashMap<String, AttributeValue>> = None;

        loop {
            let mut scan = self.dynamodb_client.scan().table_name(&self.table_name);

            if let Some(status) = status {
                scan = scan
                    .filter_expression("#status = :status")
                    .expression_attribute_names("#status", ProductAttribute::Status.to_string())
                    .expression_attribute_values(":status", AttributeValue::S(status.to_string()));
            }

            let response = scan.set_exclusive_start_key(exclusive_start_key).send().await?;

            for item in response.items() {
                let product: Product = from_item(item.clone())
                    .map_err(|e| ProductStorageError::SerializationError(e.to_string()))?;
                products.push(product);
            }

            match response.last_evaluated_key() {
                Some(key) => exclusive_start_key = Some(key.clone()),
                None => break,
            }
        }

        Ok(products)
    }

    /// Updates an existing product document
    ///
    /// The image URL is only rewritten when the update carries one.
    ///
    /// # Errors
    ///
    /// Returns `ProductStorageError::NotFound` if no product exists with the
    /// given ID, or another `ProductStorageError` if the DynamoDB update fails
    pub async fn update(&self, id: &str, update: ProductUpdate) -> ProductStorageResult<()> {
        let mut update_expression =
            "SET #nome = :nome, #descricao = :descricao, #categoria = :categoria, #valor = :valor"
                .to_string();

        let mut request = self
            .dynamodb_client
            .update_item()
            .table_name(&self.table_name)
            .key(
                ProductAttribute::Id.to_string(),
                AttributeValue::S(id.to_string()),
            )
            .condition_expression("attribute_exists(#id)")
            .expression_attribute_names("#id", ProductAttribute::Id.to_string())
            .expression_attribute_names("#nome", ProductAttribute::Nome.to_string())
            .expression_attribute_names("#descricao", ProductAttribute::Descricao.to_string())
            .expression_attribute_names("#categoria", ProductAttribute::Categoria.to_string())
            .expression_attribute_names("#valor", ProductAttribute::Valor.to_string())
            .expression_attribute_values(":nome", AttributeValue::S(update.name))
            .expression_attribute_values(":descricao", AttributeValue::S(update.description))
            .expression_attribute_values(":categoria", AttributeValue::S(update.category))
            .expression_attribute_values(":valor", AttributeValue::N(update.value.to_string()));

        if let Some(image_uri) = update.image_uri {
            update_expression.push_str(", #imageUri = :imageUri");
            request = request
                .expression_attribute_names("#imageUri", ProductAttribute::ImageUri.to_string())
                .expression_attribute_values(":imageUri", AttributeValue::S(image_uri));
        }

        request
            .update_expression(update_expression)
            .send()
            .await
            .map_err(|err| {
                if matches!(
                    err,
                    SdkError::ServiceError(ref svc) if svc.err().is_conditional_check_failed_exception()
                ) {
                    ProductStorageError::NotFound
                } else {
                    err.into()
                }
            })?;

        Ok(())
    }

    /// Rewrites only the menu-section payload of a product
    ///
    /// # Errors
    ///
    /// Returns `ProductStorageError::NotFound` if no product exists with the
    /// given ID, or another `ProductStorageError` if the DynamoDB update fails
    pub async fn set_menu_section(
        &self,
        id: &str,
        menu_section: &serde_json::Value,
    ) -> ProductStorageResult<()> {
        let value = serde_dynamo::to_attribute_value(menu_section)
            .map_err(|e| ProductStorageError::SerializationError(e.to_string()))?;

        self.dynamodb_client
            .update_item()
            .table_name(&self.table_name)
            .key(
                ProductAttribute::Id.to_string(),
                AttributeValue::S(id.to_string()),
            )
            .update_expression("SET #cardapio = :cardapio")
            .condition_expression("attribute_exists(#id)")
            .expression_attribute_names("#id", ProductAttribute::Id.to_string())
            .expression_attribute_names("#cardapio", ProductAttribute::Cardapio.to_string())
            .expression_attribute_values(":cardapio", value)
            .send()
            .await
            .map_err(|err| {
                if matches!(
                    err,
                    SdkError::ServiceError(ref svc) if svc.err().is_conditional_check_failed_exception()
                ) {
                    ProductStorageError::NotFound
                } else {
                    err.into()
                }
            })?;

        Ok(())
    }

    /// Soft-deletes a product by setting its status to `Inativo`
    ///
    /// # Errors
    ///
    /// Returns `ProductStorageError::NotFound` if no product exists with the
    /// given ID, or another `ProductStorageError` if the DynamoDB update fails
    pub async fn deactivate(&self, id: &str) -> ProductStorageResult<()> {
        self.dynamodb_client
            .update_item()
            .table_name(&self.table_name)
            .key(
                ProductAttribute::Id.to_string(),
                AttributeValue::S(id.to_string()),
            )
            .update_expression("SET #status = :status")
            .condition_expression("attribute_exists(#id)")
            .expression_attribute_names("#id", ProductAttribute::Id.to_string())
            .expression_attribute_names("#status", ProductAttribute::Status.to_string())
            .expression_attribute_values(":status", AttributeValue::S(STATUS_INACTIVE.to_string()))
            .send()
            .await
            .map_err(|err| {
                if matches!(
                    err,
                    SdkError::ServiceError(ref svc) if svc.err().is_conditional_check_failed_exception()
                ) {
                    ProductStorageError::NotFound
                } else {
                    err.into()
                }
            })?;

        tracing::debug!("Deactivated product {id}");

        Ok(())
    }
}
