//! Property endpoints - list, create, and detail views.

use crate::{
    core::{property, unit},
    entities::{property::Model as PropertyModel, unit::Model as UnitModel},
    errors::Error,
    http::AppState,
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::Serialize;

/// A property together with its units, for the detail view.
#[derive(Debug, Serialize)]
pub struct PropertyDetail {
    /// The property itself
    pub property: PropertyModel,
    /// All units belonging to it
    pub units: Vec<UnitModel>,
}

/// `GET /properties` - lists all properties.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PropertyModel>>, Error> {
    let properties = property::get_all_properties(&state.database).await?;
    Ok(Json(properties))
}

/// `POST /properties` - creates a property.
pub async fn create(
    State(state): State<AppState>,
    Json(new): Json<property::NewProperty>,
) -> Result<(StatusCode, Json<PropertyModel>), Error> {
    let created = property::create_property(&state.database, new).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /properties/{id}` - the property plus its units.
pub async fn detail(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<PropertyDetail>, Error> {
    let property = property::require_property(&state.database, id).await?;
    let units = unit::get_units_for_property(&state.database, id).await?;
    Ok(Json(PropertyDetail { property, units }))
}
