//! Payment entity - A rent payment received from a tenant.
//!
//! Payments are append-only: once recorded they are never mutated. The
//! `receipt_number` is unique across all payments. The lease reference is
//! optional so ad-hoc payments (e.g. arrears from a closed lease) can
//! still be recorded against the tenant.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Payment database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "payments")]
pub struct Model {
    /// Unique identifier for the payment
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the tenant who paid
    pub tenant_id: i64,
    /// ID of the lease the payment is attributed to, if any
    pub lease_id: Option<i64>,
    /// Amount received in shillings
    pub amount: f64,
    /// When the payment was received
    pub date: DateTimeUtc,
    /// Payment method: `cash`, `bank`, or `mpesa`
    pub method: PaymentMethod,
    /// Receipt number, unique across all payments
    #[sea_orm(unique)]
    pub receipt_number: String,
    /// Free-form notes
    pub notes: Option<String>,
}

/// Defines relationships between Payment and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each payment belongs to one tenant
    #[sea_orm(
        belongs_to = "super::tenant::Entity",
        from = "Column::TenantId",
        to = "super::tenant::Column::Id"
    )]
    Tenant,
    /// A payment may be attributed to a lease
    #[sea_orm(
        belongs_to = "super::lease::Entity",
        from = "Column::LeaseId",
        to = "super::lease::Column::Id"
    )]
    Lease,
}

impl Related<super::tenant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tenant.def()
    }
}

impl Related<super::lease::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lease.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// How a payment was made
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Cash in hand
    #[sea_orm(string_value = "cash")]
    Cash,
    /// Bank transfer
    #[sea_orm(string_value = "bank")]
    Bank,
    /// M-Pesa mobile money
    #[sea_orm(string_value = "mpesa")]
    Mpesa,
}
