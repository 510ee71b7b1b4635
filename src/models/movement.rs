//! Stock movement (`movimentação`) structs.

use serde::{Deserialize, Serialize};

/// One row of the `movimentacoes` table, also the response shape.
///
/// `tipo` ("entrada"/"saída") and `data_movimentacao` are stored verbatim;
/// neither is validated. `produto_id` and `mercado_id` are not checked
/// against their tables.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Movement {
    pub id: i64,
    pub tipo: String,
    pub quantidade: i64,
    pub data_movimentacao: String,
    pub produto_id: i64,
    pub mercado_id: i64,
}

/// Body of `POST /movimentacoes`.
#[derive(Debug, Deserialize)]
pub struct CreateMovementRequest {
    pub tipo: String,
    pub quantidade: i64,
    pub data_movimentacao: String,
    pub produto_id: i64,
    pub mercado_id: i64,
}
