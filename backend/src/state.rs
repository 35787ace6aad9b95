//! Application state management

use std::sync::Arc;

use restaurant_storage::dining_table::DiningTableStorage;
use restaurant_storage::order::OrderStorage;
use restaurant_storage::product::ProductStorage;
use restaurant_storage::settings::SettingsStorage;
use restaurant_storage::waiter::WaiterStorage;

use crate::image_host::ImageHostClient;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Product storage client
    pub product_storage: Arc<ProductStorage>,
    /// Waiter storage client
    pub waiter_storage: Arc<WaiterStorage>,
    /// Order storage client
    pub order_storage: Arc<OrderStorage>,
    /// Dining-table storage client
    pub dining_table_storage: Arc<DiningTableStorage>,
    /// Settings storage client
    pub settings_storage: Arc<SettingsStorage>,
    /// External image-host client
    pub image_host: Arc<ImageHostClient>,
}
