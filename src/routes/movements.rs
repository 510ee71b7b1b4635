//! Stock movement route handlers.
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | POST | /movimentacoes | `create_movement` |
//! | GET | /movimentacoes | `list_movements` |

use crate::{db, error::AppError, models::*, routes::AppState};
use axum::{extract::State, http::StatusCode, Json};

/// `POST /movimentacoes` — registers a movement and echoes it back with its
/// new id. Neither `tipo` nor the referenced ids are validated.
pub async fn create_movement(
    State(state): State<AppState>,
    Json(req): Json<CreateMovementRequest>,
) -> Result<(StatusCode, Json<Movement>), AppError> {
    let id = db::add_movement(&state.pool, &req).await?;
    let movement = Movement {
        id,
        tipo: req.tipo,
        quantidade: req.quantidade,
        data_movimentacao: req.data_movimentacao,
        produto_id: req.produto_id,
        mercado_id: req.mercado_id,
    };
    Ok((StatusCode::CREATED, Json(movement)))
}

/// `GET /movimentacoes` — lists every movement, unfiltered.
pub async fn list_movements(
    State(state): State<AppState>,
) -> Result<Json<Vec<Movement>>, AppError> {
    let movements = db::list_movements(&state.pool).await?;
    Ok(Json(movements))
}
