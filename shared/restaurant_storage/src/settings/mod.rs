//! Settings storage module for DynamoDB operations
//!
//! The whole restaurant configuration lives in a single document stored
//! under the fixed ID [`SETTINGS_DOCUMENT_ID`]. Saving merges the provided
//! fields into the existing document; fields left out of a save survive.

mod error;

use std::collections::HashMap;
use std::sync::Arc;

use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use serde::{Deserialize, Serialize};
use serde_dynamo::from_item;
use strum::Display;

pub use error::{SettingsStorageError, SettingsStorageResult};

/// Fixed document ID of the singleton settings record
pub const SETTINGS_DOCUMENT_ID: &str = "configuracoesGerais";

/// DynamoDB attribute names for the settings table
#[derive(Debug, Display)]
#[strum(serialize_all = "camelCase")]
pub enum SettingsAttribute {
    /// Primary key - fixed singleton document ID
    Id,
    /// Restaurant display name
    CompanyName,
    /// URL of the hosted company logo
    CompanyLogo,
    /// URL of the hosted login-page image
    LoginPageImage,
    /// URL of the hosted home-page image
    HomePageImage,
    /// Weekend opening hours
    FinalWeekSchedules,
    /// Weekday opening hours
    BusinessDayHours,
    /// Instagram profile link
    LinkInstagram,
    /// Facebook profile link
    LinkFacebook,
    /// WhatsApp contact link
    LinkWhatsApp,
    /// Primary theme color
    PrimaryColor,
    /// Secondary theme color
    SecondaryColor,
}

/// The singleton settings document
///
/// Every field is optional: the document grows as the administration panel
/// saves sections of it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Restaurant display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    /// URL of the hosted company logo
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    /// URL of the hosted login-page image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub login_page_image: Option<String>,
    /// URL of the hosted home-page image
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_page_image: Option<String>,
    /// Weekend opening hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_week_schedules: Option<String>,
    /// Weekday opening hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_day_hours: Option<String>,
    /// Instagram profile link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_instagram: Option<String>,
    /// Facebook profile link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_facebook: Option<String>,
    /// WhatsApp contact link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_whats_app: Option<String>,
    /// Primary theme color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    /// Secondary theme color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary_color: Option<String>,
}

impl Settings {
    /// Pairs every set field with its DynamoDB attribute name
    fn set_fields(&self) -> Vec<(SettingsAttribute, String)> {
        let mut fields = Vec::new();
        let pairs = [
            (SettingsAttribute::CompanyName, &self.company_name),
            (SettingsAttribute::CompanyLogo, &self.company_logo),
            (SettingsAttribute::LoginPageImage, &self.login_page_image),
            (SettingsAttribute::HomePageImage, &self.home_page_image),
            (
                SettingsAttribute::FinalWeekSchedules,
                &self.final_week_schedules,
            ),
            (
                SettingsAttribute::BusinessDayHours,
                &self.business_day_hours,
            ),
            (SettingsAttribute::LinkInstagram, &self.link_instagram),
            (SettingsAttribute::LinkFacebook, &self.link_facebook),
            (SettingsAttribute::LinkWhatsApp, &self.link_whats_app),
            (SettingsAttribute::PrimaryColor, &self.primary_color),
            (SettingsAttribute::SecondaryColor, &self.secondary_color),
        ];

        for (attribute, value) in pairs {
            if let Some(value) = value {
                fields.push((attribute, value.clone()));
            }
        }

        fields
    }
}

/// Storage client for the singleton settings document
pub struct SettingsStorage {
    dynamodb_client: Arc<DynamoDbClient>,
    table_name: String,
}

impl SettingsStorage {
    /// Creates a new settings storage client
    ///
    /// # Arguments
    ///
    /// * `dynamodb_client` - Pre-configured DynamoDB client
    /// * `table_name` - DynamoDB table name for settings
    #[must_use]
    pub const fn new(dynamodb_client: Arc<DynamoDbClient>, table_name: String) -> Self {
        Self {
            dynamodb_client,
            table_name,
        }
    }

    /// Merges the set fields of `settings` into the singleton document
    ///
    /// The update creates the document on first save. Fields that are `None`
    /// are left untouched, mirroring a merge write. An all-`None` save still
    /// writes the bare document key, so a later fetch finds the singleton.
    ///
    /// # Errors
    ///
    /// Returns `SettingsStorageError` if the DynamoDB update operation fails
    pub async fn upsert(&self, settings: &Settings) -> SettingsStorageResult<()> {
        let fields = settings.set_fields();

        let mut request = self
            .dynamodb_client
            .update_item()
            .table_name(&self.table_name)
            .key(
                SettingsAttribute::Id.to_string(),
                AttributeValue::S(SETTINGS_DOCUMENT_ID.to_string()),
            );

        if !fields.is_empty() {
            let mut clauses = Vec::with_capacity(fields.len());

            for (index, (attribute, value)) in fields.into_iter().enumerate() {
                let name_placeholder = format!("#f{index}");
                let value_placeholder = format!(":v{index}");
                clauses.push(format!("{name_placeholder} = {value_placeholder}"));
                request = request
                    .expression_attribute_names(name_placeholder, attribute.to_string())
                    .expression_attribute_values(value_placeholder, AttributeValue::S(value));
            }

            request = request.update_expression(format!("SET {}", clauses.join(", ")));
        }

        request.send().await?;

        tracing::debug!("Settings document saved");

        Ok(())
    }

    /// Fetches the singleton settings document
    ///
    /// # Errors
    ///
    /// Returns `SettingsStorageError` if the DynamoDB get operation fails
    pub async fn get(&self) -> SettingsStorageResult<Option<Settings>> {
        let response = self
            .dynamodb_client
            .get_item()
            .table_name(&self.table_name)
            .key(
                SettingsAttribute::Id.to_string(),
                AttributeValue::S(SETTINGS_DOCUMENT_ID.to_string()),
            )
            .send()
            .await?;

        response
            .item()
            .map(|item: &HashMap<String, AttributeValue>| {
                from_item(item.clone())
                    .map_err(|e| SettingsStorageError::SerializationError(e.to_string()))
            })
            .transpose()
    }
}
