//! Error types for waiter storage operations

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::{
    put_item::PutItemError, scan::ScanError, update_item::UpdateItemError,
};
use thiserror::Error;

/// Result type for waiter storage operations
pub type WaiterStorageResult<T> = Result<T, WaiterStorageError>;

/// Errors that can occur during waiter storage operations
#[derive(Error, Debug)]
pub enum WaiterStorageError {
    /// Failed to insert waiter into DynamoDB
    #[error("Failed to insert waiter into DynamoDB: {0}")]
    DynamoDbPutError(#[from] SdkError<PutItemError>),

    /// Failed to scan waiters from DynamoDB
    #[error("Failed to scan waiters from DynamoDB: {0}")]
    DynamoDbScanError(#[from] SdkError<ScanError>),

    /// Failed to update waiter in DynamoDB
    #[error("Failed to update waiter in DynamoDB: {0}")]
    DynamoDbUpdateError(#[from] SdkError<UpdateItemError>),

    /// No waiter exists with the given ID
    #[error("Waiter not found")]
    NotFound,

    /// Serialization error for `serde_dynamo`
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
