//! Expense entity - A cost incurred against a property.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Expense database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "expenses")]
pub struct Model {
    /// Unique identifier for the expense
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the property the expense was incurred for
    pub property_id: i64,
    /// Expense category (e.g. "Repairs", "Security")
    pub category: String,
    /// Amount spent in shillings
    pub amount: f64,
    /// Calendar date the expense was incurred (no time component)
    pub date: Date,
    /// Free-form description
    pub description: Option<String>,
    /// Reference to a receipt document, stored elsewhere
    pub receipt_file: Option<String>,
}

/// Defines relationships between Expense and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each expense belongs to one property
    #[sea_orm(
        belongs_to = "super::property::Entity",
        from = "Column::PropertyId",
        to = "super::property::Column::Id"
    )]
    Property,
}

impl Related<super::property::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Property.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
