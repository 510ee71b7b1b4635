//! Market (`mercado`) structs.

use serde::{Deserialize, Serialize};

/// One row of the `mercados` table, also the response shape.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Market {
    pub id: i64,
    pub nome: String,
    pub endereco: String,
}

/// Body of `POST /mercados`.
#[derive(Debug, Deserialize)]
pub struct CreateMarketRequest {
    pub nome: String,
    pub endereco: String,
}

/// Body of `PUT /mercados/{id}` — a full replace, both fields required.
#[derive(Debug, Deserialize)]
pub struct UpdateMarketRequest {
    pub nome: String,
    pub endereco: String,
}
