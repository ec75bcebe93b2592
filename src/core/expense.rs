//! Expense business logic - Records costs incurred against properties.

use crate::{
    core::{
        property::{non_empty, require_property},
        unit::validate_amount,
    },
    entities::{Expense, expense},
    errors::Result,
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;

/// Fields accepted when recording an expense.
#[derive(Debug, Clone, Deserialize)]
pub struct NewExpense {
    /// Property the expense was incurred for
    pub property_id: i64,
    /// Expense category (e.g. "Repairs", "Security")
    pub category: String,
    /// Amount spent
    pub amount: f64,
    /// Calendar date the expense was incurred
    pub date: NaiveDate,
    /// Free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Reference to a receipt document
    #[serde(default)]
    pub receipt_file: Option<String>,
}

/// Records a new expense against an existing property.
pub async fn create_expense(db: &DatabaseConnection, new: NewExpense) -> Result<expense::Model> {
    require_property(db, new.property_id).await?;
    let category = non_empty(&new.category, "category")?;
    validate_amount(new.amount)?;

    let model = expense::ActiveModel {
        property_id: Set(new.property_id),
        category: Set(category),
        amount: Set(new.amount),
        date: Set(new.date),
        description: Set(new.description),
        receipt_file: Set(new.receipt_file),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    Ok(result)
}

/// Finds an expense by its unique ID.
pub async fn get_expense_by_id(
    db: &DatabaseConnection,
    expense_id: i64,
) -> Result<Option<expense::Model>> {
    Expense::find_by_id(expense_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all expenses, newest first.
pub async fn get_all_expenses(db: &DatabaseConnection) -> Result<Vec<expense::Model>> {
    Expense::find()
        .order_by_desc(expense::Column::Date)
        .all(db)
        .await
        .map_err(Into::into)
}
