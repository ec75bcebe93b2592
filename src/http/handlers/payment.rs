//! Payment endpoints - list, create, and form prefill.

use crate::{
    core::payment::{self, NewPayment, PaymentPrefill},
    entities::payment::Model as PaymentModel,
    errors::Error,
    http::AppState,
};
use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::Deserialize;

/// Query parameters for the payment prefill endpoint.
#[derive(Debug, Deserialize)]
pub struct PrefillParams {
    /// Tenant to pre-fill from
    pub tenant: Option<i64>,
}

/// `GET /payments` - lists all payments, newest first.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<PaymentModel>>, Error> {
    let payments = payment::get_all_payments(&state.database).await?;
    Ok(Json(payments))
}

/// `POST /payments` - records a payment.
pub async fn create(
    State(state): State<AppState>,
    Json(new): Json<NewPayment>,
) -> Result<(StatusCode, Json<PaymentModel>), Error> {
    let created = payment::create_payment(&state.database, new).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /payments/new?tenant={id}` - pre-filled form values for a tenant,
/// including the active lease's rent when one exists.
pub async fn prefill(
    State(state): State<AppState>,
    Query(params): Query<PrefillParams>,
) -> Result<Json<Option<PaymentPrefill>>, Error> {
    let prefill = match params.tenant {
        Some(tenant_id) => Some(payment::prefill_for_tenant(&state.database, tenant_id).await?),
        None => None,
    };
    Ok(Json(prefill))
}
