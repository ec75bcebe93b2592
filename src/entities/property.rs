//! Property entity - Represents a managed building or compound.
//!
//! Each property has a name, address, owner, and an active/inactive status.
//! A property owns many units and accrues many expenses.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Property database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "properties")]
pub struct Model {
    /// Unique identifier for the property
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable name of the property (e.g., "Sunrise Court")
    pub name: String,
    /// Physical address
    pub address: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Name of the owner this property is managed for
    pub owner: String,
    /// Whether the property is `active` or `inactive`
    pub status: PropertyStatus,
    /// When the property record was created
    pub created_at: DateTimeUtc,
    /// When the property record was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Property and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One property has many units
    #[sea_orm(has_many = "super::unit::Entity")]
    Units,
    /// One property accrues many expenses
    #[sea_orm(has_many = "super::expense::Entity")]
    Expenses,
}

impl Related<super::unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Units.def()
    }
}

impl Related<super::expense::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Expenses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Property lifecycle status
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "snake_case")]
pub enum PropertyStatus {
    /// Property is under active management
    #[sea_orm(string_value = "active")]
    Active,
    /// Property is retired from management but kept for records
    #[sea_orm(string_value = "inactive")]
    Inactive,
}
