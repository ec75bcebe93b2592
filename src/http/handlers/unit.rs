//! Unit endpoints - listing plus two creation paths.
//!
//! Units are normally created under a property
//! (`POST /properties/{id}/units`); the quick-add endpoint accepts the
//! property id in the body instead so the units page can add one directly.

use crate::{
    core::unit::{self, NewUnit},
    entities::unit::Model as UnitModel,
    errors::Error,
    http::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Deserialize;

/// Body for the quick-add endpoint: a unit plus the property it belongs to.
#[derive(Debug, Deserialize)]
pub struct QuickAddUnit {
    /// Property to create the unit under
    pub property_id: i64,
    /// The unit fields themselves
    #[serde(flatten)]
    pub unit: NewUnit,
}

/// `GET /units` - lists all units across properties.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<UnitModel>>, Error> {
    let units = unit::get_all_units(&state.database).await?;
    Ok(Json(units))
}

/// `POST /properties/{id}/units` - creates a unit under a property.
pub async fn create_under_property(
    State(state): State<AppState>,
    Path(property_id): Path<i64>,
    Json(new): Json<NewUnit>,
) -> Result<(StatusCode, Json<UnitModel>), Error> {
    let created = unit::create_unit(&state.database, property_id, new).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `POST /units` - quick-add a unit, naming the property in the body.
pub async fn quick_add(
    State(state): State<AppState>,
    Json(body): Json<QuickAddUnit>,
) -> Result<(StatusCode, Json<UnitModel>), Error> {
    let created = unit::create_unit(&state.database, body.property_id, body.unit).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
