//! Dining-table storage module for DynamoDB operations
//!
//! Unlike products and waiters, tables support a true delete: the document
//! is removed from DynamoDB rather than marked inactive.

mod error;

use std::collections::HashMap;
use std::sync::Arc;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use serde::{Deserialize, Serialize};
use serde_dynamo::{from_item, to_item};
use strum::Display;

pub use error::{DiningTableStorageError, DiningTableStorageResult};

/// DynamoDB attribute names for the dining-table table
#[derive(Debug, Display)]
#[strum(serialize_all = "camelCase")]
pub enum DiningTableAttribute {
    /// Primary key - unique table ID (UUID v4)
    Id,
    /// Table number (`numero`)
    Numero,
    /// Table status
    Status,
}

/// A dining-table document as stored in DynamoDB
///
/// The clients send `numero` as either a string or a bare number, so it is
/// stored and echoed back verbatim rather than coerced to one type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiningTable {
    /// Primary key - unique table ID (UUID v4)
    pub id: String,
    /// Table number, string or numeric as the client sent it
    #[serde(rename = "numero")]
    pub number: serde_json::Value,
    /// Table status
    pub status: String,
}

/// Storage client for dining-table operations
pub struct DiningTableStorage {
    dynamodb_client: Arc<DynamoDbClient>,
    table_name: String,
}

impl DiningTableStorage {
    /// Creates a new dining-table storage client
    ///
    /// # Arguments
    ///
    /// * `dynamodb_client` - Pre-configured DynamoDB client
    /// * `table_name` - DynamoDB table name for dining tables
    #[must_use]
    pub const fn new(dynamodb_client: Arc<DynamoDbClient>, table_name: String) -> Self {
        Self {
            dynamodb_client,
            table_name,
        }
    }

    /// Creates a new dining-table document with a generated UUID
    ///
    /// # Errors
    ///
    /// Returns `DiningTableStorageError` if the DynamoDB put operation fails
    pub async fn create(
        &self,
        number: serde_json::Value,
        status: String,
    ) -> DiningTableStorageResult<DiningTable> {
        let table = DiningTable {
            id: uuid::Uuid::new_v4().to_string(),
            number,
            status,
        };

        let item = to_item(&table)
            .map_err(|e| DiningTableStorageError::SerializationError(e.to_string()))?;

        self.dynamodb_client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await?;

        tracing::debug!("Created dining table {}", table.id);

        Ok(table)
    }

    /// Lists all dining tables
    ///
    /// # Errors
    ///
    /// Returns `DiningTableStorageError` if the DynamoDB scan operation fails
    pub async fn list(&self) -> DiningTableStorageResult<Vec<DiningTable>> {
        let mut tables = Vec::new();
        let mut exclusive_start_key: Option<HashMap<String, AttributeValue>> = None;

        loop {
            let response = self
                .dynamodb_client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await?;

            for item in response.items() {
                let table: DiningTable = from_item(item.clone())
                    .map_err(|e| DiningTableStorageError::SerializationError(e.to_string()))?;
                tables.push(table);
            }

            match response.last_evaluated_key() {
                Some(key) => exclusive_start_key = Some(key.clone()),
                None => break,
            }
        }

        Ok(tables)
    }

    /// Updates the number and status of an existing dining table
    ///
    /// # Errors
    ///
    /// Returns `DiningTableStorageError::NotFound` if no table exists with the
    /// given ID, or another `DiningTableStorageError` if the DynamoDB update fails
    pub async fn update(
        &self,
        id: &str,
        number: serde_json::Value,
        status: String,
    ) -> DiningTableStorageResult<()> {
        let number = serde_dynamo::to_attribute_value(&number)
            .map_err(|e| DiningTableStorageError::SerializationError(e.to_string()))?;

        self.dynamodb_client
            .update_item()
            .table_name(&self.table_name)
            .key(
                DiningTableAttribute::Id.to_string(),
                AttributeValue::S(id.to_string()),
            )
            .update_expression("SET #numero = :numero, #status = :status")
            .condition_expression("attribute_exists(#id)")
            .expression_attribute_names("#id", DiningTableAttribute::Id.to_string())
            .expression_attribute_names("#numero", DiningTableAttribute::Numero.to_string())
            .expression_attribute_names("#status", DiningTableAttribute::Status.to_string())
            .expression_attribute_values(":numero", number)
            .expression_attribute_values(":status", AttributeValue::S(status))
            .send()
            .await
            .map_err(|err| {
                if matches!(
                    err,
                    SdkError::ServiceError(ref svc) if svc.err().is_conditional_check_failed_exception()
                ) {
                    DiningTableStorageError::NotFound
                } else {
                    err.into()
                }
            })?;

        Ok(())
    }

    /// Deletes a dining table for good
    ///
    /// # Errors
    ///
    /// Returns `DiningTableStorageError::NotFound` if no table exists with the
    /// given ID, or another `DiningTableStorageError` if the DynamoDB delete fails
    pub async fn delete(&self, id: &str) -> DiningTableStorageResult<()> {
        self.dynamodb_client
            .delete_item()
            .table_name(&self.table_name)
            .key(
                DiningTableAttribute::Id.to_string(),
                AttributeValue::S(id.to_string()),
            )
            .condition_expression("attribute_exists(#id)")
            .expression_attribute_names("#id", DiningTableAttribute::Id.to_string())
            .send()
            .await
            .map_err(|err| {
                if matches!(
                    err,
                    SdkError::ServiceError(ref svc) if svc.err().is_conditional_check_failed_exception()
                ) {
                    DiningTableStorageError::NotFound
                } else {
                    err.into()
                }
            })?;

        tracing::debug!("Deleted dining table {id}");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dining_table_serializes_portuguese_attributes() {
        let table = DiningTable {
            id: "t-1".to_string(),
            number: serde_json::json!("7"),
            status: "Livre".to_string(),
        };

        let json: serde_json::Value = serde_json::to_value(&table).unwrap();
        assert_eq!(json["numero"], "7");
        assert_eq!(json["status"], "Livre");
        assert_eq!(json["id"], "t-1");
    }

    #[test]
    fn test_numeric_numero_round_trips_untouched() {
        let raw = serde_json::json!({ "id": "t-2", "numero": 12, "status": "Livre" });

        let table: DiningTable = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(table.number, serde_json::json!(12));

        let back = serde_json::to_value(&table).unwrap();
        assert_eq!(back, raw);
    }

    #[test]
    fn test_attribute_names_match_document_fields() {
        assert_eq!(DiningTableAttribute::Id.to_string(), "id");
        assert_eq!(DiningTableAttribute::Numero.to_string(), "numero");
        assert_eq!(DiningTableAttribute::Status.to_string(), "status");
    }
}
