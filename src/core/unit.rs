//! Unit business logic - Handles all unit-related operations.
//!
//! Units are always created under an existing property. Status changes come
//! either from lease creation (see [`crate::core::lease`]) or a manual edit;
//! nothing here transitions a unit on its own.

use crate::{
    core::property::{non_empty, require_property},
    entities::{Unit, UnitStatus, UnitType, unit},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;

/// Fields accepted when creating a unit.
#[derive(Debug, Clone, Deserialize)]
pub struct NewUnit {
    /// Unit number or label within the property
    pub unit_number: String,
    /// Kind of unit
    pub unit_type: UnitType,
    /// Advertised monthly rent
    pub rent_amount: f64,
    /// Advertised deposit
    pub deposit_amount: f64,
    /// Initial status; defaults to `vacant`
    #[serde(default)]
    pub status: Option<UnitStatus>,
    /// Water meter number
    #[serde(default)]
    pub water_meter: Option<String>,
    /// Electricity meter number
    #[serde(default)]
    pub electricity_meter: Option<String>,
}

/// Creates a new unit under the given property, performing input validation.
///
/// The property must exist, the unit number must be non-empty, and both
/// amounts must be finite and non-negative.
pub async fn create_unit(
    db: &DatabaseConnection,
    property_id: i64,
    new: NewUnit,
) -> Result<unit::Model> {
    require_property(db, property_id).await?;
    let unit_number = non_empty(&new.unit_number, "unit_number")?;
    validate_amount(new.rent_amount)?;
    validate_amount(new.deposit_amount)?;

    let model = unit::ActiveModel {
        property_id: Set(property_id),
        unit_number: Set(unit_number),
        unit_type: Set(new.unit_type),
        rent_amount: Set(new.rent_amount),
        deposit_amount: Set(new.deposit_amount),
        status: Set(new.status.unwrap_or(UnitStatus::Vacant)),
        water_meter: Set(new.water_meter),
        electricity_meter: Set(new.electricity_meter),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    Ok(result)
}

/// Retrieves all units across all properties.
pub async fn get_all_units(db: &DatabaseConnection) -> Result<Vec<unit::Model>> {
    Unit::find()
        .order_by_asc(unit::Column::PropertyId)
        .order_by_asc(unit::Column::UnitNumber)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the units belonging to one property, for the detail view.
pub async fn get_units_for_property(
    db: &DatabaseConnection,
    property_id: i64,
) -> Result<Vec<unit::Model>> {
    Unit::find()
        .filter(unit::Column::PropertyId.eq(property_id))
        .order_by_asc(unit::Column::UnitNumber)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a unit by its unique ID.
pub async fn get_unit_by_id(db: &DatabaseConnection, unit_id: i64) -> Result<Option<unit::Model>> {
    Unit::find_by_id(unit_id).one(db).await.map_err(Into::into)
}

/// Like [`get_unit_by_id`], but a missing row is an error.
pub async fn require_unit<C>(db: &C, unit_id: i64) -> Result<unit::Model>
where
    C: ConnectionTrait,
{
    Unit::find_by_id(unit_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "unit",
            id: unit_id.to_string(),
        })
}

/// Sets a unit's occupancy status.
///
/// Generic over the connection so the lease cascade can call it inside an
/// open transaction.
pub async fn set_unit_status<C>(db: &C, unit_id: i64, status: UnitStatus) -> Result<unit::Model>
where
    C: ConnectionTrait,
{
    let unit = require_unit(db, unit_id).await?;
    let mut active: unit::ActiveModel = unit.into();
    active.status = Set(status);
    active.update(db).await.map_err(Into::into)
}

pub(crate) fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(Error::InvalidAmount { amount });
    }
    Ok(())
}
