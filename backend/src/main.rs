use std::sync::Arc;

use aws_sdk_dynamodb::Client as DynamoDbClient;

use backend::image_host::ImageHostClient;
use backend::server;
use backend::state::AppState;
use backend::types::Environment;
use restaurant_storage::dining_table::DiningTableStorage;
use restaurant_storage::order::OrderStorage;
use restaurant_storage::product::ProductStorage;
use restaurant_storage::settings::SettingsStorage;
use restaurant_storage::waiter::WaiterStorage;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    // JSON logs for staging/production, regular format for development
    match environment {
        Environment::Production | Environment::Staging => {
            fmt()
                .json()
                .with_env_filter(EnvFilter::from_default_env())
                .init();
        }
        Environment::Development => {
            fmt().with_env_filter(EnvFilter::from_default_env()).init();
        }
    }

    let dynamodb_client = Arc::new(DynamoDbClient::new(&environment.aws_config().await));

    let state = AppState {
        product_storage: Arc::new(ProductStorage::new(
            dynamodb_client.clone(),
            environment.products_table_name(),
        )),
        waiter_storage: Arc::new(WaiterStorage::new(
            dynamodb_client.clone(),
            environment.waiters_table_name(),
        )),
        order_storage: Arc::new(OrderStorage::new(
            dynamodb_client.clone(),
            environment.orders_table_name(),
        )),
        dining_table_storage: Arc::new(DiningTableStorage::new(
            dynamodb_client.clone(),
            environment.dining_tables_table_name(),
        )),
        settings_storage: Arc::new(SettingsStorage::new(
            dynamodb_client,
            environment.settings_table_name(),
        )),
        image_host: Arc::new(ImageHostClient::new(
            environment.image_host_upload_url(),
            environment.image_host_api_key(),
        )),
    };

    server::start(state).await
}
