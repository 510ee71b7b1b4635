//! Queries against the `mercados` table.

use crate::error::AppError;
use crate::models::{CreateMarketRequest, Market, UpdateMarketRequest};
use sqlx::SqlitePool;

/// Inserts a market and returns the store-assigned id.
pub async fn add_market(pool: &SqlitePool, req: &CreateMarketRequest) -> Result<i64, AppError> {
    let result = sqlx::query("INSERT INTO mercados (nome, endereco) VALUES (?, ?)")
        .bind(&req.nome)
        .bind(&req.endereco)
        .execute(pool)
        .await?;

    Ok(result.last_insert_rowid())
}

/// Returns all markets, in store order.
pub async fn list_markets(pool: &SqlitePool) -> Result<Vec<Market>, AppError> {
    let markets = sqlx::query_as::<_, Market>("SELECT id, nome, endereco FROM mercados")
        .fetch_all(pool)
        .await?;

    Ok(markets)
}

/// Returns the market with the given id, or `None` if there is no such row.
pub async fn get_market(pool: &SqlitePool, id: i64) -> Result<Option<Market>, AppError> {
    let market =
        sqlx::query_as::<_, Market>("SELECT id, nome, endereco FROM mercados WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    Ok(market)
}

/// Updates name and address in one conditional statement.
///
/// Returns whether a row was affected — true even when the new values equal
/// the old ones. A false return means the id does not exist.
pub async fn update_market(
    pool: &SqlitePool,
    id: i64,
    req: &UpdateMarketRequest,
) -> Result<bool, AppError> {
    let result = sqlx::query("UPDATE mercados SET nome = ?, endereco = ? WHERE id = ?")
        .bind(&req.nome)
        .bind(&req.endereco)
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Deletes a market, returning whether a row was removed.
pub async fn delete_market(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM mercados WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
