//! Visitor log business logic.
//!
//! A visitor is checked in at the gate and checked out when they leave;
//! an unset exit time means they are still on the premises.

use crate::{
    core::{property::non_empty, unit::require_unit},
    entities::{Visitor, visitor},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;

/// Fields accepted when logging a visitor in.
#[derive(Debug, Clone, Deserialize)]
pub struct NewVisitor {
    /// Visitor's name
    pub name: String,
    /// Visitor's phone number
    pub phone: String,
    /// Visitor's ID number, if taken at the gate
    #[serde(default)]
    pub id_number: Option<String>,
    /// Unit being visited
    pub unit_id: i64,
    /// Vehicle registration, if driving in
    #[serde(default)]
    pub vehicle_plate: Option<String>,
    /// Entry time; defaults to the current instant
    #[serde(default)]
    pub entry_time: Option<DateTime<Utc>>,
    /// Guard on duty
    #[serde(default)]
    pub security_guard_name: Option<String>,
}

/// Logs a visitor in against an existing unit.
pub async fn check_in_visitor(db: &DatabaseConnection, new: NewVisitor) -> Result<visitor::Model> {
    require_unit(db, new.unit_id).await?;
    let name = non_empty(&new.name, "name")?;
    let phone = non_empty(&new.phone, "phone")?;

    let model = visitor::ActiveModel {
        name: Set(name),
        phone: Set(phone),
        id_number: Set(new.id_number),
        unit_id: Set(new.unit_id),
        vehicle_plate: Set(new.vehicle_plate),
        entry_time: Set(new.entry_time.unwrap_or_else(Utc::now)),
        exit_time: Set(None),
        security_guard_name: Set(new.security_guard_name),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    Ok(result)
}

/// Records a visitor's exit. Rejects a second check-out of the same visit.
pub async fn check_out_visitor(
    db: &DatabaseConnection,
    visitor_id: i64,
    exit_time: Option<DateTime<Utc>>,
) -> Result<visitor::Model> {
    let visit = Visitor::find_by_id(visitor_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "visitor",
            id: visitor_id.to_string(),
        })?;

    if visit.exit_time.is_some() {
        return Err(Error::Validation {
            field: "exit_time",
            message: "visitor is already checked out".to_string(),
        });
    }

    let mut active: visitor::ActiveModel = visit.into();
    active.exit_time = Set(Some(exit_time.unwrap_or_else(Utc::now)));
    active.update(db).await.map_err(Into::into)
}

/// Finds a visit record by its unique ID.
pub async fn get_visitor_by_id(
    db: &DatabaseConnection,
    visitor_id: i64,
) -> Result<Option<visitor::Model>> {
    Visitor::find_by_id(visitor_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the full visitor log, most recent entries first.
pub async fn get_all_visitors(db: &DatabaseConnection) -> Result<Vec<visitor::Model>> {
    Visitor::find()
        .order_by_desc(visitor::Column::EntryTime)
        .all(db)
        .await
        .map_err(Into::into)
}
