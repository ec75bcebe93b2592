//! Tenant entity - Represents a person renting (or who has rented) a unit.
//!
//! The `id_passport_number` is unique across all tenants and is the
//! real-world identity key. Status moves between `active`, `past`, and
//! `blacklisted` through explicit edits only.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Tenant database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "tenants")]
pub struct Model {
    /// Unique identifier for the tenant
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Tenant's first name
    pub first_name: String,
    /// Tenant's last name
    pub last_name: String,
    /// National ID or passport number, unique across all tenants
    #[sea_orm(unique)]
    pub id_passport_number: String,
    /// Phone number
    pub phone: String,
    /// Email address
    pub email: String,
    /// Emergency contact details, free-form
    pub emergency_contact: Option<String>,
    /// Tenant status: `active`, `past`, or `blacklisted`
    pub status: TenantStatus,
    /// Free-form notes
    pub notes: Option<String>,
    /// Day rent next falls due, if tracked
    pub rent_due_date: Option<Date>,
    /// Running balance carried on the tenant's account
    pub balance: f64,
    /// When the tenant record was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Tenant and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One tenant holds many leases over time
    #[sea_orm(has_many = "super::lease::Entity")]
    Leases,
    /// One tenant makes many payments
    #[sea_orm(has_many = "super::payment::Entity")]
    Payments,
}

impl Related<super::lease::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Leases.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Tenant lifecycle status
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum TenantStatus {
    /// Currently renting
    #[sea_orm(string_value = "active")]
    Active,
    /// No longer renting
    #[sea_orm(string_value = "past")]
    Past,
    /// Barred from renting again
    #[sea_orm(string_value = "blacklisted")]
    Blacklisted,
}
