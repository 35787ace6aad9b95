//! Error types for order storage operations

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::{scan::ScanError, update_item::UpdateItemError};
use thiserror::Error;

/// Result type for order storage operations
pub type OrderStorageResult<T> = Result<T, OrderStorageError>;

/// Errors that can occur during order storage operations
#[derive(Error, Debug)]
pub enum OrderStorageError {
    /// Failed to scan orders from DynamoDB
    #[error("Failed to scan orders from DynamoDB: {0}")]
    DynamoDbScanError(#[from] SdkError<ScanError>),

    /// Failed to update order in DynamoDB
    #[error("Failed to update order in DynamoDB: {0}")]
    DynamoDbUpdateError(#[from] SdkError<UpdateItemError>),

    /// No order exists with the given ID
    #[error("Order not found")]
    NotFound,

    /// Serialization error for `serde_dynamo`
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
