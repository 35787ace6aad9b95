//! Error types for product storage operations

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::{
    put_item::PutItemError, scan::ScanError, update_item::UpdateItemError,
};
use thiserror::Error;

/// Result type for product storage operations
pub type ProductStorageResult<T> = Result<T, ProductStorageError>;

/// Errors that can occur during product storage operations
#[derive(Error, Debug)]
pub enum ProductStorageError {
    /// Failed to insert product into DynamoDB
    #[error("Failed to insert product into DynamoDB: {0}")]
    DynamoDbPutError(#[from] SdkError<PutItemError>),

    /// Failed to scan products from DynamoDB
    #[error("Failed to scan products from DynamoDB: {0}")]
    DynamoDbScanError(#[from] SdkError<ScanError>),

    /// Failed to update product in DynamoDB
    #[error("Failed to update product in DynamoDB: {0}")]
    DynamoDbUpdateError(#[from] SdkError<UpdateItemError>),

    /// No product exists with the given ID
    #[error("Product not found")]
    NotFound,

    /// Serialization error for `serde_dynamo`
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
