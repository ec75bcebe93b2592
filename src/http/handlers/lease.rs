//! Lease endpoints - list, create, and form prefill.

use crate::{
    core::lease::{self, LeasePrefill, NewLease},
    entities::lease::Model as LeaseModel,
    errors::Error,
    http::AppState,
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;

/// Query parameters for the lease prefill endpoint.
#[derive(Debug, Deserialize)]
pub struct PrefillParams {
    /// Unit to pre-fill rent and deposit from
    pub unit: Option<i64>,
}

/// `GET /leases` - lists all leases.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<LeaseModel>>, Error> {
    let leases = lease::get_all_leases(&state.database).await?;
    Ok(Json(leases))
}

/// `POST /leases` - creates a lease and marks its unit occupied.
pub async fn create(
    State(state): State<AppState>,
    Json(new): Json<NewLease>,
) -> Result<(StatusCode, Json<LeaseModel>), Error> {
    let created = lease::create_lease(&state.database, new).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /leases/new?unit={id}` - pre-filled form values for a unit.
/// Without the `unit` parameter there is nothing to pre-fill.
pub async fn prefill(
    State(state): State<AppState>,
    Query(params): Query<PrefillParams>,
) -> Result<Json<Option<LeasePrefill>>, Error> {
    let prefill = match params.unit {
        Some(unit_id) => Some(lease::prefill_for_unit(&state.database, unit_id).await?),
        None => None,
    };
    Ok(Json(prefill))
}
