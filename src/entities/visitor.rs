//! Visitor entity - A gate log entry for someone visiting a unit.
//!
//! A visitor is "currently present" while `exit_time` is unset.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Visitor database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "visitors")]
pub struct Model {
    /// Unique identifier for the visit
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Visitor's name
    pub name: String,
    /// Visitor's phone number
    pub phone: String,
    /// Visitor's ID number, if recorded at the gate
    pub id_number: Option<String>,
    /// ID of the unit being visited
    pub unit_id: i64,
    /// Vehicle registration, if the visitor drove in
    pub vehicle_plate: Option<String>,
    /// When the visitor entered
    pub entry_time: DateTimeUtc,
    /// When the visitor left; unset while still on the premises
    pub exit_time: Option<DateTimeUtc>,
    /// Guard on duty who logged the entry
    pub security_guard_name: Option<String>,
}

/// Defines relationships between Visitor and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each visit targets one unit
    #[sea_orm(
        belongs_to = "super::unit::Entity",
        from = "Column::UnitId",
        to = "super::unit::Column::Id"
    )]
    Unit,
}

impl Related<super::unit::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Unit.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
