//! Unit entity - Represents a rentable unit within a property.
//!
//! Each unit belongs to one property and carries its advertised rent and
//! deposit amounts. A unit's status is `vacant` until a lease is created
//! against it, which marks it `occupied`; `maintenance` is set manually.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Unit database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "units")]
pub struct Model {
    /// Unique identifier for the unit
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the property this unit belongs to
    pub property_id: i64,
    /// Unit number or label within the property (e.g., "A-12")
    pub unit_number: String,
    /// Unit type: `1BR`, `2BR`, `studio`, or `commercial`
    pub unit_type: UnitType,
    /// Advertised monthly rent in shillings
    pub rent_amount: f64,
    /// Advertised deposit in shillings
    pub deposit_amount: f64,
    /// Occupancy status: `occupied`, `vacant`, or `maintenance`
    pub status: UnitStatus,
    /// Water meter number, if metered separately
    pub water_meter: Option<String>,
    /// Electricity meter number, if metered separately
    pub electricity_meter: Option<String>,
    /// When the unit record was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between Unit and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each unit belongs to one property
    #[sea_orm(
        belongs_to = "super::property::Entity",
        from = "Column::PropertyId",
        to = "super::property::Column::Id"
    )]
    Property,
    /// One unit has many leases over its lifetime
    #[sea_orm(has_many = "super::lease::Entity")]
    Leases,
    /// One unit has many maintenance tickets
    #[sea_orm(has_many = "super::maintenance_ticket::Entity")]
    MaintenanceTickets,
    /// One unit receives many visitors
    #[sea_orm(has_many = "super::visitor::Entity")]
    Visitors,
}

impl Related<super::property::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Property.def()
    }
}

impl Related<super::lease::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Leases.def()
    }
}

impl Related<super::maintenance_ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::MaintenanceTickets.def()
    }
}

impl Related<super::visitor::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Visitors.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Kind of rentable unit
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
pub enum UnitType {
    /// One-bedroom unit
    #[sea_orm(string_value = "1BR")]
    #[serde(rename = "1BR")]
    OneBedroom,
    /// Two-bedroom unit
    #[sea_orm(string_value = "2BR")]
    #[serde(rename = "2BR")]
    TwoBedroom,
    /// Studio unit
    #[sea_orm(string_value = "studio")]
    #[serde(rename = "studio")]
    Studio,
    /// Commercial space
    #[sea_orm(string_value = "commercial")]
    #[serde(rename = "commercial")]
    Commercial,
}

/// Occupancy status of a unit
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(20))")]
#[serde(rename_all = "snake_case")]
pub enum UnitStatus {
    /// A tenant currently holds the unit
    #[sea_orm(string_value = "occupied")]
    Occupied,
    /// The unit is available to let
    #[sea_orm(string_value = "vacant")]
    Vacant,
    /// The unit is held out of service for repairs
    #[sea_orm(string_value = "maintenance")]
    Maintenance,
}
