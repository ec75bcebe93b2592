//! Lease entity - Links one tenant to one unit for a date range.
//!
//! Lease status is never derived from dates: `expiring` and `terminated`
//! are set manually. The only automated effect a lease has is marking its
//! unit occupied at creation time.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lease database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "leases")]
pub struct Model {
    /// Unique identifier for the lease
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the tenant holding the lease
    pub tenant_id: i64,
    /// ID of the unit being leased
    pub unit_id: i64,
    /// First day of the lease
    pub start_date: Date,
    /// Last day of the lease
    pub end_date: Date,
    /// Agreed monthly rent in shillings
    pub monthly_rent: f64,
    /// Deposit held for this lease
    pub deposit_amount: f64,
    /// How often rent is collected (default "Monthly")
    pub payment_frequency: String,
    /// Reference to the signed agreement document, stored elsewhere
    pub agreement_file: Option<String>,
    /// Lease status: `active`, `expiring`, or `terminated`
    pub status: LeaseStatus,
}

/// Defines relationships between Lease and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each lease belongs to one tenant
    #[sea_orm(
        belongs_to = "super::tenant::Entity",
        from = "Column::TenantId",
        to = "super::tenant::Column::Id"
    )]
    Tenant,
    /// Each lease belongs to one unit
    #[sea_orm(
        belongs_to = "super::unit::Entity",
        from = "Column::UnitId",
        to = "super::unit::Column::Id"
    )]
    Unit,
    /// Payments may be recorded against a lease
    #[sea_orm(has_many = "super::payment::Entity")]
    Payments,
}

impl Related<super::tenant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tenant.def()
    }
}

impl Related<super::unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Unit.def()
    }
}

impl Related<super::payment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Payments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Lease lifecycle status
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum LeaseStatus {
    /// Lease is in force
    #[sea_orm(string_value = "active")]
    Active,
    /// Lease is approaching its end date (set manually for display)
    #[sea_orm(string_value = "expiring")]
    Expiring,
    /// Lease has been ended
    #[sea_orm(string_value = "terminated")]
    Terminated,
}
