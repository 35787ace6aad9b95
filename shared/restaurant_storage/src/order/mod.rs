//! Order storage module for DynamoDB operations
//!
//! Orders are written by the customer-facing app; the backend only lists
//! them and moves their status along. The payload beyond `status` is
//! whatever the client stored, so it rides along untyped.

mod error;

use std::collections::HashMap;
use std::sync::Arc;

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use serde::{Deserialize, Serialize};
use serde_dynamo::from_item;
use strum::Display;

pub use error::{OrderStorageError, OrderStorageResult};

/// DynamoDB attribute names for the order table
#[derive(Debug, Display)]
#[strum(serialize_all = "camelCase")]
pub enum OrderAttribute {
    /// Primary key - unique order ID
    Id,
    /// Order status
    Status,
}

/// An order document as stored in DynamoDB
///
/// Everything except `id` and `status` is carried verbatim in `details`
/// and flattened back into the response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Primary key - unique order ID
    pub id: String,
    /// Order status
    pub status: String,
    /// Arbitrary order payload written by the client
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

/// Storage client for order operations
pub struct OrderStorage {
    dynamodb_client: Arc<DynamoDbClient>,
    table_name: String,
}

impl OrderStorage {
    /// Creates a new order storage client
    ///
    /// # Arguments
    ///
    /// * `dynamodb_client` - Pre-configured DynamoDB client
    /// * `table_name` - DynamoDB table name for orders
    #[must_use]
    pub const fn new(dynamodb_client: Arc<DynamoDbClient>, table_name: String) -> Self {
        Self {
            dynamodb_client,
            table_name,
        }
    }

    /// Lists orders, optionally filtered by status
    ///
    /// A single status filters by equality; several statuses filter by
    /// membership (`IN`). An empty slice scans the whole table.
    ///
    /// # Errors
    ///
    /// Returns `OrderStorageError` if the DynamoDB scan operation fails
    pub async fn list(&self, statuses: &[String]) -> OrderStorageResult<Vec<Order>> {
        let mut orders = Vec::new();
        let mut exclusive_start_key: Option<HashMap<String, AttributeValue>> = None;

        loop {
            let mut scan = self.dynamodb_client.scan().table_name(&self.table_name);

            match statuses {
                [] => {}
                [status] => {
                    scan = scan
                        .filter_expression("#status = :status")
                        .expression_attribute_names("#status", OrderAttribute::Status.to_string())
                        .expression_attribute_values(
                            ":status",
                            AttributeValue::S(status.clone()),
                        );
                }
                statuses => {
                    let placeholders: Vec<String> =
                        (0..statuses.len()).map(|i| format!(":status{i}")).collect();
                    scan = scan
                        .filter_expression(format!("#status IN ({})", placeholders.join(", ")))
                        .expression_attribute_names("#status", OrderAttribute::Status.to_string());
                    for (placeholder, status) in placeholders.iter().zip(statuses) {
                        scan = scan.expression_attribute_values(
                            placeholder,
                            AttributeValue::S(status.clone()),
                        );
                    }
                }
            }

            let response = scan.set_exclusive_start_key(exclusive_start_key).send().await?;

            for item in response.items() {
                let order: Order = from_item(item.clone())
                    .map_err(|e| OrderStorageError::SerializationError(e.to_string()))?;
                orders.push(order);
            }

            match response.last_evaluated_key() {
                Some(key) => exclusive_start_key = Some(key.clone()),
                None => break,
            }
        }

        Ok(orders)
    }

    /// Updates only the status of an existing order
    ///
    /// # Errors
    ///
    /// Returns `OrderStorageError::NotFound` if no order exists with the
    /// given ID, or another `OrderStorageError` if the DynamoDB update fails
    pub async fn update_status(&self, id: &str, status: &str) -> OrderStorageResult<()> {
        self.dynamodb_client
            .update_item()
            .table_name(&self.table_name)
            .key(
                OrderAttribute::Id.to_string(),
                AttributeValue::S(id.to_string()),
            )
            .update_expression("SET #status = :status")
            .condition_expression("attribute_exists(#id)")
            .expression_attribute_names("#id", OrderAttribute::Id.to_string())
            .expression_attribute_names("#status", OrderAttribute::Status.to_string())
            .expression_attribute_values(":status", AttributeValue::S(status.to_string()))
            .send()
            .await
            .map_err(|err| {
                if matches!(
                    err,
                    SdkError::ServiceError(ref svc) if svc.err().is_conditional_check_failed_exception()
                ) {
                    OrderStorageError::NotFound
                } else {
                    err.into()
                }
            })?;

        tracing::debug!("Order {id} moved to status '{status}'");

        Ok(())
    }
}
