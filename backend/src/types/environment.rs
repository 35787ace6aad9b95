//! Environment configuration for different deployment stages

use std::env;
use std::time::Duration;

use aws_config::{retry::RetryConfig, timeout::TimeoutConfig, BehaviorVersion};

/// Application environment configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment (uses `LocalStack`)
    Development,
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// # Panics
    ///
    /// Panics if `APP_ENV` contains an invalid value
    #[must_use]
    pub fn from_env() -> Self {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Self::Production,
            "staging" => Self::Staging,
            "development" => Self::Development,
            _ => panic!("Invalid environment: {env}"),
        }
    }

    /// Returns the endpoint URL to use for AWS services
    #[must_use]
    pub const fn override_aws_endpoint_url(&self) -> Option<&str> {
        match self {
            // Regular AWS endpoints for production and staging
            Self::Production | Self::Staging => None,
            // LocalStack endpoint for development
            Self::Development => Some("http://localhost:4566"),
        }
    }

    /// AWS configuration with retry and timeout settings
    pub async fn aws_config(&self) -> aws_config::SdkConfig {
        let retry_config = RetryConfig::standard()
            .with_max_attempts(3)
            .with_initial_backoff(Duration::from_millis(50));

        let timeout_config = TimeoutConfig::builder()
            .operation_timeout(Duration::from_secs(30))
            .build();

        let mut config_builder = aws_config::load_defaults(BehaviorVersion::latest())
            .await
            .to_builder()
            .retry_config(retry_config)
            .timeout_config(timeout_config);

        if let Some(endpoint_url) = self.override_aws_endpoint_url() {
            config_builder = config_builder.endpoint_url(endpoint_url);
        }

        config_builder.build()
    }

    /// Returns the DynamoDB table name for products
    #[must_use]
    pub fn products_table_name(&self) -> String {
        self.table_name("PRODUCTS_TABLE_NAME", "orderease-products")
    }

    /// Returns the DynamoDB table name for waiters
    #[must_use]
    pub fn waiters_table_name(&self) -> String {
        self.table_name("WAITERS_TABLE_NAME", "orderease-waiters")
    }

    /// Returns the DynamoDB table name for orders
    #[must_use]
    pub fn orders_table_name(&self) -> String {
        self.table_name("ORDERS_TABLE_NAME", "orderease-orders")
    }

    /// Returns the DynamoDB table name for dining tables
    #[must_use]
    pub fn dining_tables_table_name(&self) -> String {
        self.table_name("TABLES_TABLE_NAME", "orderease-tables")
    }

    /// Returns the DynamoDB table name for the settings singleton
    #[must_use]
    pub fn settings_table_name(&self) -> String {
        self.table_name("SETTINGS_TABLE_NAME", "orderease-settings")
    }

    /// Returns the upload endpoint of the external image host
    #[must_use]
    pub fn image_host_upload_url(&self) -> String {
        env::var("IMAGE_HOST_UPLOAD_URL")
            .unwrap_or_else(|_| "https://api.imgbb.com/1/upload".to_string())
    }

    /// Returns the API key for the external image host
    ///
    /// # Panics
    ///
    /// Panics in production/staging when `IMAGE_HOST_API_KEY` is not set
    #[must_use]
    pub fn image_host_api_key(&self) -> String {
        match self {
            Self::Production | Self::Staging => env::var("IMAGE_HOST_API_KEY")
                .expect("IMAGE_HOST_API_KEY environment variable is not set"),
            Self::Development => {
                env::var("IMAGE_HOST_API_KEY").unwrap_or_else(|_| "test-key".to_string())
            }
        }
    }

    /// Resolves a table name from the environment
    ///
    /// Production and staging require the variable; development falls back
    /// to a local default.
    fn table_name(&self, var: &str, development_default: &str) -> String {
        match self {
            Self::Production | Self::Staging => {
                env::var(var).unwrap_or_else(|_| panic!("{var} environment variable is not set"))
            }
            Self::Development => {
                env::var(var).unwrap_or_else(|_| development_default.to_string())
            }
        }
    }
}
