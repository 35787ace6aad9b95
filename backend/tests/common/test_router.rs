use std::sync::Arc;

use axum::Router;
use backend::{handlers, image_host::ImageHostClient, state::AppState, types::Environment};
use restaurant_storage::dining_table::DiningTableStorage;
use restaurant_storage::order::OrderStorage;
use restaurant_storage::product::ProductStorage;
use restaurant_storage::settings::SettingsStorage;
use restaurant_storage::waiter::WaiterStorage;

use super::dynamodb_setup::{localstack_client, TestTable};
use super::setup_test_env;

/// Full test setup backed by uniquely named LocalStack tables
///
/// The table guards live as long as the context so the tables are cleaned
/// up once the test drops it.
pub struct TestContext {
    pub router: Router,
    pub client: Arc<aws_sdk_dynamodb::Client>,
    pub orders_table: String,
    _tables: Vec<TestTable>,
}

impl TestContext {
    pub async fn new() -> Self {
        setup_test_env();

        let client = localstack_client().await;

        let products = TestTable::create(client.clone(), "products").await;
        let waiters = TestTable::create(client.clone(), "waiters").await;
        let orders = TestTable::create(client.clone(), "orders").await;
        let tables = TestTable::create(client.clone(), "tables").await;
        let settings = TestTable::create(client.clone(), "settings").await;

        let state = AppState {
            product_storage: Arc::new(ProductStorage::new(client.clone(), products.name.clone())),
            waiter_storage: Arc::new(WaiterStorage::new(client.clone(), waiters.name.clone())),
            order_storage: Arc::new(OrderStorage::new(client.clone(), orders.name.clone())),
            dining_table_storage: Arc::new(DiningTableStorage::new(
                client.clone(),
                tables.name.clone(),
            )),
            settings_storage: Arc::new(SettingsStorage::new(
                client.clone(),
                settings.name.clone(),
            )),
            image_host: Arc::new(offline_image_host()),
        };

        Self {
            router: handlers::routes().with_state(state),
            client,
            orders_table: orders.name.clone(),
            _tables: vec![products, waiters, orders, tables, settings],
        }
    }
}

/// Router whose clients never get exercised
///
/// Good enough for routes that reject the request before any storage or
/// image-host call happens (validation failures, health).
pub async fn offline_router() -> Router {
    setup_test_env();

    let environment = Environment::Development;
    let client = Arc::new(aws_sdk_dynamodb::Client::new(&environment.aws_config().await));

    let state = AppState {
        product_storage: Arc::new(ProductStorage::new(
            client.clone(),
            environment.products_table_name(),
        )),
        waiter_storage: Arc::new(WaiterStorage::new(
            client.clone(),
            environment.waiters_table_name(),
        )),
        order_storage: Arc::new(OrderStorage::new(
            client.clone(),
            environment.orders_table_name(),
        )),
        dining_table_storage: Arc::new(DiningTableStorage::new(
            client.clone(),
            environment.dining_tables_table_name(),
        )),
        settings_storage: Arc::new(SettingsStorage::new(
            client,
            environment.settings_table_name(),
        )),
        image_host: Arc::new(offline_image_host()),
    };

    handlers::routes().with_state(state)
}

/// Image-host client pointed at a dead endpoint; tests never upload
fn offline_image_host() -> ImageHostClient {
    ImageHostClient::new(
        "http://localhost:9/upload".to_string(),
        "test-key".to_string(),
    )
}
