//! Product route handlers.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | POST | /produtos | `create_product` |
//! | GET | /produtos?mercadoId= | `list_products` |

use crate::{db, error::AppError, models::*, routes::AppState};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};

/// `POST /produtos` — creates a product and echoes it back with its new id.
///
/// Presence is checked field by field so that a `preco` or `quantidade` of 0
/// is accepted; only a missing field is rejected. The `mercado_id` is not
/// checked for existence.
pub async fn create_product(
    State(state): State<AppState>,
    Json(req): Json<CreateProductRequest>,
) -> Result<(StatusCode, Json<Product>), AppError> {
    let (nome, descricao, preco, quantidade, mercado_id) = match (
        req.nome,
        req.descricao,
        req.preco,
        req.quantidade,
        req.mercado_id,
    ) {
        (Some(nome), Some(descricao), Some(preco), Some(quantidade), Some(mercado_id)) => {
            (nome, descricao, preco, quantidade, mercado_id)
        }
        _ => {
            return Err(AppError::BadRequest(
                "nome, descricao, preco, quantidade and mercado_id are required".to_string(),
            ))
        }
    };

    let id = db::add_product(&state.pool, &nome, &descricao, preco, quantidade, mercado_id)
        .await?;
    let product = Product {
        id,
        nome,
        descricao,
        preco,
        quantidade,
        mercado_id,
    };
    Ok((StatusCode::CREATED, Json(product)))
}

/// `GET /produtos?mercadoId=N` — lists the products of one market.
///
/// The `mercadoId` query parameter is mandatory at this endpoint even though
/// the store layer can list across all markets.
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ProductListQuery>,
) -> Result<Json<Vec<Product>>, AppError> {
    let mercado_id = query
        .mercado_id
        .ok_or_else(|| AppError::BadRequest("mercadoId query parameter is required".to_string()))?;

    let products = db::list_products(&state.pool, Some(mercado_id)).await?;
    Ok(Json(products))
}
