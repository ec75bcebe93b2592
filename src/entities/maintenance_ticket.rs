//! Maintenance ticket entity - A reported problem with a unit.
//!
//! Tickets progress through `open`, `in_progress`, `resolved`, `closed`
//! via explicit updates; the dashboard only counts them, it never moves
//! them.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Maintenance ticket database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "maintenance_tickets")]
pub struct Model {
    /// Unique identifier for the ticket
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the unit the ticket is about
    pub unit_id: i64,
    /// ID of the reporting tenant, if a tenant reported it
    pub tenant_id: Option<i64>,
    /// Problem category (e.g. "Plumbing", "Electrical")
    pub category: String,
    /// Description of the problem
    pub description: String,
    /// Priority: `low`, `medium`, `high`, or `emergency`
    pub priority: TicketPriority,
    /// Status: `open`, `in_progress`, `resolved`, or `closed`
    pub status: TicketStatus,
    /// Technician the ticket is assigned to, if any
    pub assigned_technician: Option<String>,
    /// When the ticket was reported
    pub created_at: DateTimeUtc,
    /// When the ticket was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between MaintenanceTicket and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each ticket belongs to one unit
    #[sea_orm(
        belongs_to = "super::unit::Entity",
        from = "Column::UnitId",
        to = "super::unit::Column::Id"
    )]
    Unit,
    /// A ticket may reference the tenant who reported it
    #[sea_orm(
        belongs_to = "super::tenant::Entity",
        from = "Column::TenantId",
        to = "super::tenant::Column::Id"
    )]
    Tenant,
}

impl Related<super::unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Unit.def()
    }
}

impl Related<super::tenant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Tenant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Ticket priority
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(10))")]
#[serde(rename_all = "snake_case")]
pub enum TicketPriority {
    /// Can wait
    #[sea_orm(string_value = "low")]
    Low,
    /// Normal priority
    #[sea_orm(string_value = "medium")]
    Medium,
    /// Needs prompt attention
    #[sea_orm(string_value = "high")]
    High,
    /// Safety or habitability issue
    #[sea_orm(string_value = "emergency")]
    Emergency,
}

/// Ticket progression status
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Reported, not yet picked up
    #[sea_orm(string_value = "open")]
    Open,
    /// Being worked on
    #[sea_orm(string_value = "in_progress")]
    InProgress,
    /// Work finished, awaiting confirmation
    #[sea_orm(string_value = "resolved")]
    Resolved,
    /// Confirmed done
    #[sea_orm(string_value = "closed")]
    Closed,
}
