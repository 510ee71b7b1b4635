//! Queries against the `movimentacoes` table.
//!
//! Both operations replace the driver error with a generic message at this
//! boundary; the underlying cause is logged here before being discarded.

use crate::error::AppError;
use crate::models::{CreateMovementRequest, Movement};
use sqlx::SqlitePool;

/// Inserts a movement and returns the store-assigned id.
///
/// `produto_id` and `mercado_id` are stored as given, without any
/// referential check.
pub async fn add_movement(
    pool: &SqlitePool,
    req: &CreateMovementRequest,
) -> Result<i64, AppError> {
    let result = sqlx::query(
        "INSERT INTO movimentacoes (tipo, quantidade, data_movimentacao, produto_id, mercado_id) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&req.tipo)
    .bind(req.quantidade)
    .bind(&req.data_movimentacao)
    .bind(req.produto_id)
    .bind(req.mercado_id)
    .execute(pool)
    .await
    .map_err(|e| {
        tracing::error!("failed to register movement: {}", e);
        AppError::Internal("failed to register movement".to_string())
    })?;

    Ok(result.last_insert_rowid())
}

/// Returns all movements, never filtered.
pub async fn list_movements(pool: &SqlitePool) -> Result<Vec<Movement>, AppError> {
    let movements = sqlx::query_as::<_, Movement>(
        "SELECT id, tipo, quantidade, data_movimentacao, produto_id, mercado_id \
         FROM movimentacoes",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| {
        tracing::error!("failed to list movements: {}", e);
        AppError::Internal("failed to list movements".to_string())
    })?;

    Ok(movements)
}
