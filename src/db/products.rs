//! Queries against the `produtos` table.

use crate::error::AppError;
use crate::models::Product;
use sqlx::SqlitePool;

/// Inserts a product and returns the store-assigned id.
///
/// `mercado_id` is stored as given; there is no existence check against
/// `mercados`, so orphaned products are possible.
pub async fn add_product(
    pool: &SqlitePool,
    nome: &str,
    descricao: &str,
    preco: f64,
    quantidade: i64,
    mercado_id: i64,
) -> Result<i64, AppError> {
    let result = sqlx::query(
        "INSERT INTO produtos (nome, descricao, preco, quantidade, mercado_id) \
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(nome)
    .bind(descricao)
    .bind(preco)
    .bind(quantidade)
    .bind(mercado_id)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// Lists products, filtered to one market when `mercado_id` is given.
pub async fn list_products(
    pool: &SqlitePool,
    mercado_id: Option<i64>,
) -> Result<Vec<Product>, AppError> {
    let products = match mercado_id {
        Some(mercado_id) => {
            sqlx::query_as::<_, Product>(
                "SELECT id, nome, descricao, preco, quantidade, mercado_id \
                 FROM produtos WHERE mercado_id = ?",
            )
            .bind(mercado_id)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_as::<_, Product>(
                "SELECT id, nome, descricao, preco, quantidade, mercado_id FROM produtos",
            )
            .fetch_all(pool)
            .await?
        }
    };

    Ok(products)
}
