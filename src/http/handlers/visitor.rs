//! Visitor log endpoints - the gate register.

use crate::{
    core::visitor::{self, NewVisitor},
    entities::visitor::Model as VisitorModel,
    errors::Error,
    http::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// `GET /visitors` - the full visitor log, most recent first.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<VisitorModel>>, Error> {
    let visitors = visitor::get_all_visitors(&state.database).await?;
    Ok(Json(visitors))
}

/// `POST /visitors` - checks a visitor in at the gate.
pub async fn check_in(
    State(state): State<AppState>,
    Json(new): Json<NewVisitor>,
) -> Result<(StatusCode, Json<VisitorModel>), Error> {
    let created = visitor::check_in_visitor(&state.database, new).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `POST /visitors/{id}/checkout` - records the visitor's exit.
pub async fn check_out(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<VisitorModel>, Error> {
    let updated = visitor::check_out_visitor(&state.database, id, None).await?;
    Ok(Json(updated))
}
