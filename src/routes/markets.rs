//! Market route handlers.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | POST | /mercados | `create_market` |
//! | GET | /mercados | `list_markets` |
//! | GET | /mercados/{id} | `get_market` |
//! | PUT | /mercados/{id} | `update_market` |
//! | DELETE | /mercados/{id} | `delete_market` |

use crate::{db, error::AppError, models::*, routes::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

/// `POST /mercados` — creates a market and echoes it back with its new id.
pub async fn create_market(
    State(state): State<AppState>,
    Json(req): Json<CreateMarketRequest>,
) -> Result<(StatusCode, Json<Market>), AppError> {
    let id = db::add_market(&state.pool, &req).await?;
    let market = Market {
        id,
        nome: req.nome,
        endereco: req.endereco,
    };
    Ok((StatusCode::CREATED, Json(market)))
}

/// `GET /mercados` — lists every market.
pub async fn list_markets(
    State(state): State<AppState>,
) -> Result<Json<Vec<Market>>, AppError> {
    let markets = db::list_markets(&state.pool).await?;
    Ok(Json(markets))
}

/// `GET /mercados/{id}` — fetches one market, 404 when absent.
pub async fn get_market(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Market>, AppError> {
    let market = db::get_market(&state.pool, id)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(market))
}

/// `PUT /mercados/{id}` — replaces name and address, returning the updated
/// row.
///
/// The update is one conditional statement: zero rows affected means the id
/// does not exist, so a nonexistent id always maps to 404. The refetch
/// afterwards can only miss if the row was deleted concurrently.
pub async fn update_market(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateMarketRequest>,
) -> Result<Json<Market>, AppError> {
    let updated = db::update_market(&state.pool, id, &req).await?;
    if !updated {
        return Err(AppError::NotFound);
    }

    match db::get_market(&state.pool, id).await? {
        Some(market) => Ok(Json(market)),
        None => Err(AppError::BadRequest(
            "market was updated but could not be read back".to_string(),
        )),
    }
}

/// `DELETE /mercados/{id}` — removes the market, 404 when absent.
///
/// Products and movements referencing the market are left in place; there is
/// no cascade.
pub async fn delete_market(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    let deleted = db::delete_market(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::NotFound);
    }
    Ok(Json(json!({ "message": "Mercado excluído com sucesso" })))
}
