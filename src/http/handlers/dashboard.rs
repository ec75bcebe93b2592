//! Dashboard endpoint - the landing page of the API.

use crate::{
    core::dashboard::{DashboardSnapshot, compute_dashboard},
    errors::Error,
    http::AppState,
};
use axum::{Json, extract::State};

/// `GET /` - computes and returns the dashboard snapshot as of now.
pub async fn show(State(state): State<AppState>) -> Result<Json<DashboardSnapshot>, Error> {
    let snapshot = compute_dashboard(&state.database, chrono::Utc::now()).await?;
    Ok(Json(snapshot))
}
