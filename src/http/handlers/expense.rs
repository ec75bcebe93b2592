//! Expense endpoints - list and create.

use crate::{
    core::expense::{self, NewExpense},
    entities::expense::Model as ExpenseModel,
    errors::Error,
    http::AppState,
};
use axum::{Json, extract::State, http::StatusCode};

/// `GET /expenses` - lists all expenses, newest first.
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<ExpenseModel>>, Error> {
    let expenses = expense::get_all_expenses(&state.database).await?;
    Ok(Json(expenses))
}

/// `POST /expenses` - records an expense against a property.
pub async fn create(
    State(state): State<AppState>,
    Json(new): Json<NewExpense>,
) -> Result<(StatusCode, Json<ExpenseModel>), Error> {
    let created = expense::create_expense(&state.database, new).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
