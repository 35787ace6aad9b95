//! HTTP handlers for the restaurant-ordering API
//!
//! Route paths reproduce the contract the mobile and web clients were built
//! against, Portuguese segments included.

use axum::{
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;

mod health;
mod orders;
mod products;
mod settings;
mod tables;
mod waiters;

/// Creates the router with all handler routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::handler))
        // Products
        .route("/api/adicionar-produto", post(products::create_product))
        .route("/api/listar-produtos", get(products::list_products))
        .route("/api/atualizar-produto/{id}", put(products::update_product))
        .route(
            "/api/atualizar-produto-cardapio/{id}",
            put(products::update_product_menu_section),
        )
        .route("/api/excluir-produto/{id}", delete(products::delete_product))
        // Waiters
        .route("/api/adicionar-garcom", post(waiters::create_waiter))
        .route("/api/listar-garcons", get(waiters::list_waiters))
        .route("/api/atualizar-garcom/{id}", put(waiters::update_waiter))
        .route("/api/excluir-garcom/{id}", delete(waiters::delete_waiter))
        // Orders
        .route("/api/obter-pedidos", get(orders::list_orders))
        .route("/api/atualizar-pedido/{id}", put(orders::update_order_status))
        // Dining tables
        .route("/api/adicionar-mesa", post(tables::create_table))
        .route("/api/obter-mesas", get(tables::list_tables))
        .route("/api/atualizar-mesa/{id}", put(tables::update_table))
        .route("/api/deletar-mesa/{id}", delete(tables::delete_table))
        // Settings singleton
        .route("/api/salvar-configuracoes", post(settings::save_settings))
        .route("/api/obter-configuracoes", get(settings::get_settings))
}
