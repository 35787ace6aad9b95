//! Waiter storage module for DynamoDB operations
//!
//! Waiters follow the same soft-delete lifecycle as products: removing one
//! flips its status to [`crate::STATUS_INACTIVE`] and the document stays put.

mod error;

use std::collections::HashMap;
use std::sync::Arc;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use serde::{Deserialize, Serialize};
use serde_dynamo::{from_item, to_item};
use strum::Display;

pub use error::{WaiterStorageError, WaiterStorageResult};

use crate::STATUS_INACTIVE;

/// DynamoDB attribute names for the waiter table
#[derive(Debug, Display)]
#[strum(serialize_all = "camelCase")]
pub enum WaiterAttribute {
    /// Primary key - unique waiter ID (UUID v4)
    Id,
    /// First name (`nome`)
    Nome,
    /// Surname (`sobrenome`)
    Sobrenome,
    /// Login email
    Email,
    /// Bcrypt password hash (`senha`)
    Senha,
    /// Work situation (`situacao`)
    Situacao,
    /// Waiter status (`Ativo` / `Inativo`)
    Status,
}

/// A waiter document as stored in DynamoDB
///
/// The `senha` attribute holds a bcrypt hash, never the raw password.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Waiter {
    /// Primary key - unique waiter ID (UUID v4)
    pub id: String,
    /// First name
    #[serde(rename = "nome")]
    pub name: String,
    /// Surname
    #[serde(rename = "sobrenome")]
    pub surname: String,
    /// Login email
    pub email: String,
    /// Bcrypt password hash
    #[serde(rename = "senha")]
    pub password_hash: String,
    /// Work situation
    #[serde(rename = "situacao")]
    pub situation: String,
    /// Waiter status (`Ativo` / `Inativo`)
    pub status: String,
}

/// Request to create a new waiter document
#[derive(Debug, Clone)]
pub struct WaiterCreateRequest {
    /// First name
    pub name: String,
    /// Surname
    pub surname: String,
    /// Login email
    pub email: String,
    /// Bcrypt password hash
    pub password_hash: String,
    /// Work situation
    pub situation: String,
    /// Waiter status
    pub status: String,
}

/// Fields written by a waiter update
#[derive(Debug, Clone)]
pub struct WaiterUpdate {
    /// First name
    pub name: String,
    /// Surname
    pub surname: String,
    /// Login email
    pub email: String,
    /// Bcrypt password hash
    pub password_hash: String,
    /// Work situation
    pub situation: String,
}

/// Storage client for waiter operations
pub struct WaiterStorage {
    dynamodb_client: Arc<DynamoDbClient>,
    table_name: String,
}

impl WaiterStorage {
    /// Creates a new waiter storage client
    ///
    /// # Arguments
    ///
    /// * `dynamodb_client` - Pre-configured DynamoDB client
    /// * `table_name` - DynamoDB table name for waiters
    #[must_use]
    pub const fn new(dynamodb_client: Arc<DynamoDbClient>, table_name: String) -> Self {
        Self {
            dynamodb_client,
            table_name,
        }
    }

    /// Creates a new waiter document with a generated UUID
    ///
    /// # Errors
    ///
    /// Returns `WaiterStorageError` if the DynamoDB put operation fails
    pub async fn create(&self, request: WaiterCreateRequest) -> WaiterStorageResult<Waiter> {
        let waiter = Waiter {
            id: uuid::Uuid::new_v4().to_string(),
            name: request.name,
            surname: request.surname,
            email: request.email,
            password_hash: request.password_hash,
            situation: request.situation,
            status: request.status,
        };

        let item =
            to_item(&waiter).map_err(|e| WaiterStorageError::SerializationError(e.to_string()))?;

        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await?;

        tracing::debug!("Created waiter {}", waiter.id);

        Ok(waiter)
    }

    /// Lists all waiters, optionally filtered to a single status
    ///
    /// # Errors
    ///
    /// Returns `WaiterStorageError` if the DynamoDB scan operation fails
    pub async fn list(&self, status: Option<&str>) -> WaiterStorageResult<Vec<Waiter>> {
        let mut waiters = Vec::new();
        let mut exclusive_start_key: Option<HashMap<String, AttributeValue>> = None;

        loop {
            let mut scan = self.dynamodb_client.scan().table_name(&self.table_name);

            if let Some(status) = status {
                scan = scan
                    .filter_expression("#status = :status")
                    .expression_attribute_names("#status", WaiterAttribute::Status.to_string())
                    .expression_attribute_values(":status", AttributeValue::S(status.to_string()));
            }

            let response = scan.set_exclusive_start_key(exclusive_start_key).send().await?;

            for item in response.items() {
                let waiter: Waiter = from_item(item.clone())
                    .map_err(|e| WaiterStorageError::SerializationError(e.to_string()))?;
                waiters.push(waiter);
            }

            match response.last_evaluated_key() {
                Some(key) => exclusive_start_key = Some(key.clone()),
                None => break,
            }
        }

        Ok(waiters)
    }

    /// Updates an existing waiter document
    ///
    /// # Errors
    ///
    /// Returns `WaiterStorageError::NotFound` if no waiter exists with the
    /// given ID, or another `WaiterStorageError` if the DynamoDB update fails
    pub async fn update(&self, id: &str, update: WaiterUpdate) -> WaiterStorageResult<()> {
        self.dynamodb_client
            .update_item()
            .table_name(&self.table_name)
            .key(
                WaiterAttribute::Id.to_string(),
                AttributeValue::S(id.to_string()),
            )
            .update_expression(
                "SET #nome = :nome, #sobrenome = :sobrenome, #email = :email, \
                 #senha = :senha, #situacao = :situacao",
            )
            .condition_expression("attribute_exists(#id)")
            .expression_attribute_names("#id", WaiterAttribute::Id.to_string())
            .expression_attribute_names("#nome", WaiterAttribute::Nome.to_string())
            .expression_attribute_names("#sobrenome", WaiterAttribute::Sobrenome.to_string())
            .expression_attribute_names("#email", WaiterAttribute::Email.to_string())
            .expression_attribute_names("#senha", WaiterAttribute::Senha.to_string())
            .expression_attribute_names("#situacao", WaiterAttribute::Situacao.to_string())
            .expression_attribute_values(":nome", AttributeValue::S(update.name))
            .expression_attribute_values(":sobrenome", AttributeValue::S(update.surname))
            .expression_attribute_values(":email", AttributeValue::S(update.email))
            .expression_attribute_values(":senha", AttributeValue::S(update.password_hash))
            .expression_attribute_values(":situacao", AttributeValue::S(update.situation))
            .send()
            .await
            .map_err(|err| {
                if matches!(
                    err,
                    SdkError::ServiceError(ref svc) if svc.err().is_conditional_check_failed_exception()
                ) {
                    WaiterStorageError::NotFound
                } else {
                    err.into()
                }
            })?;

        Ok(())
    }

    /// Soft-deletes a waiter by setting its status to `Inativo`
    ///
    /// # Errors
    ///
    /// Returns `WaiterStorageError::NotFound` if no waiter exists with the
    /// given ID, or another `WaiterStorageError` if the DynamoDB update fails
    pub async fn deactivate(&self, id: &str) -> WaiterStorageResult<()> {
        self.dynamodb_client
            .update_item()
            .table_name(&self.table_name)
            .key(
                WaiterAttribute::Id.to_string(),
                AttributeValue::S(id.to_string()),
            )
            .update_expression("SET #status = :status")
            .condition_expression("attribute_exists(#id)")
            .expression_attribute_names("#id", WaiterAttribute::Id.to_string())
            .expression_attribute_names("#status", WaiterAttribute::Status.to_string())
            .expression_attribute_values(":status", AttributeValue::S(STATUS_INACTIVE.to_string()))
            .send()
            .await
            .map_err(|err| {
                if matches!(
                    err,
                    SdkError::ServiceError(ref svc) if svc.err().is_conditional_check_failed_exception()
                ) {
                    WaiterStorageError::NotFound
                } else {
                    err.into()
                }
            })?;

        tracing::debug!("Deactivated waiter {id}");

        Ok(())
    }
}
