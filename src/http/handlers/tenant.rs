//! Tenant endpoints - list and create.

use crate::{
    core::tenant::{self, NewTenant},
    entities::tenant::Model as TenantModel,
    errors::Error,
    http::AppState,
};
use axum::{Json, extract::State, http::StatusCode};

/// `GET /tenants` - lists all tenants.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<TenantModel>>, Error> {
    let tenants = tenant::get_all_tenants(&state.database).await?;
    Ok(Json(tenants))
}

/// `POST /tenants` - registers a tenant.
pub async fn create(
    State(state): State<AppState>,
    Json(new): Json<NewTenant>,
) -> Result<(StatusCode, Json<TenantModel>), Error> {
    let created = tenant::create_tenant(&state.database, new).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
