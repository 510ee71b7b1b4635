//! Product (`produto`) structs.

use serde::{Deserialize, Serialize};

/// One row of the `produtos` table, also the response shape.
///
/// `mercado_id` is not checked against `mercados` anywhere; rows may
/// reference a market that no longer exists.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub nome: String,
    pub descricao: String,
    pub preco: f64,
    pub quantidade: i64,
    pub mercado_id: i64,
}

/// Body of `POST /produtos`.
///
/// Every field is optional at the serde level so the handler can distinguish
/// an absent field (rejected) from a legitimate zero `preco`/`quantidade`
/// (accepted).
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub nome: Option<String>,
    pub descricao: Option<String>,
    pub preco: Option<f64>,
    pub quantidade: Option<i64>,
    pub mercado_id: Option<i64>,
}

/// Query string of `GET /produtos`.
#[derive(Debug, Deserialize)]
pub struct ProductListQuery {
    #[serde(rename = "mercadoId")]
    pub mercado_id: Option<i64>,
}
