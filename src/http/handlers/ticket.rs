//! Maintenance ticket endpoints - list, create, and lifecycle updates.

use crate::{
    core::ticket::{self, NewTicket, TicketUpdate},
    entities::maintenance_ticket::Model as TicketModel,
    errors::Error,
    http::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

/// `GET /tickets` - lists all tickets, newest first.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<TicketModel>>, Error> {
    let tickets = ticket::get_all_tickets(&state.database).await?;
    Ok(Json(tickets))
}

/// `POST /tickets` - opens a ticket against a unit.
pub async fn create(
    State(state): State<AppState>,
    Json(new): Json<NewTicket>,
) -> Result<(StatusCode, Json<TicketModel>), Error> {
    let created = ticket::create_ticket(&state.database, new).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `PATCH /tickets/{id}` - updates status, priority, or assignment.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(body): Json<TicketUpdate>,
) -> Result<Json<TicketModel>, Error> {
    let updated = ticket::update_ticket(&state.database, id, body).await?;
    Ok(Json(updated))
}
