//! Error types for dining-table storage operations

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::{
    delete_item::DeleteItemError, put_item::PutItemError, scan::ScanError,
    update_item::UpdateItemError,
};
use thiserror::Error;

/// Result type for dining-table storage operations
pub type DiningTableStorageResult<T> = Result<T, DiningTableStorageError>;

/// Errors that can occur during dining-table storage operations
#[derive(Error, Debug)]
pub enum DiningTableStorageError {
    /// Failed to insert dining table into DynamoDB
    #[error("Failed to insert dining table into DynamoDB: {0}")]
    DynamoDbPutError(#[from] SdkError<PutItemError>),

    /// Failed to scan dining tables from DynamoDB
    #[error("Failed to scan dining tables from DynamoDB: {0}")]
    DynamoDbScanError(#[from] SdkError<ScanError>),

    /// Failed to update dining table in DynamoDB
    #[error("Failed to update dining table in DynamoDB: {0}")]
    DynamoDbUpdateError(#[from] SdkError<UpdateItemError>),

    /// Failed to delete dining table from DynamoDB
    #[error("Failed to delete dining table from DynamoDB: {0}")]
    DynamoDbDeleteError(#[from] SdkError<DeleteItemError>),

    /// No dining table exists with the given ID
    #[error("Dining table not found")]
    NotFound,

    /// Serialization error for `serde_dynamo`
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
