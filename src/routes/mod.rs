//! HTTP route handlers, one module per entity.
//!
//! Handlers validate request shape, call into `db`, and map outcomes to
//! status codes; everything else (CORS, tracing) is layered on in `main`.

pub mod health;
pub mod markets;
pub mod movements;
pub mod products;

pub use health::*;
pub use markets::*;
pub use movements::*;
pub use products::*;

use axum::{routing::get, Router};
use sqlx::SqlitePool;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

/// Builds the full route table over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/mercados", get(list_markets).post(create_market))
        .route(
            "/mercados/{id}",
            get(get_market).put(update_market).delete(delete_market),
        )
        .route("/produtos", get(list_products).post(create_product))
        .route(
            "/movimentacoes",
            get(list_movements).post(create_movement),
        )
        .route("/health", get(health_check))
        .with_state(state)
}
