//! Error types for settings storage operations

use aws_sdk_dynamodb::error::SdkError;
use aws_sdk_dynamodb::operation::{get_item::GetItemError, update_item::UpdateItemError};
use thiserror::Error;

/// Result type for settings storage operations
pub type SettingsStorageResult<T> = Result<T, SettingsStorageError>;

/// Errors that can occur during settings storage operations
#[derive(Error, Debug)]
pub enum SettingsStorageError {
    /// Failed to get settings from DynamoDB
    #[error("Failed to get settings from DynamoDB: {0}")]
    DynamoDbGetError(#[from] SdkError<GetItemError>),

    /// Failed to update settings in DynamoDB
    #[error("Failed to update settings in DynamoDB: {0}")]
    DynamoDbUpdateError(#[from] SdkError<UpdateItemError>),

    /// Serialization error for `serde_dynamo`
    #[error("Serialization error: {0}")]
    SerializationError(String),
}
