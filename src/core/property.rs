//! Property business logic - Handles all property-related operations.
//!
//! Provides functions for creating, retrieving, and listing properties.
//! All functions are async and return Result types for error handling.

use crate::{
    entities::{Property, PropertyStatus, property},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;

/// Fields accepted when creating a property.
#[derive(Debug, Clone, Deserialize)]
pub struct NewProperty {
    /// Property name
    pub name: String,
    /// Physical address
    pub address: String,
    /// Optional free-form description
    #[serde(default)]
    pub description: Option<String>,
    /// Owner the property is managed for
    pub owner: String,
    /// Initial status; defaults to `active`
    #[serde(default)]
    pub status: Option<PropertyStatus>,
}

/// Creates a new property record, performing input validation.
///
/// The name, address, and owner must be non-empty after trimming. The
/// status defaults to `active` when not supplied.
pub async fn create_property(
    db: &DatabaseConnection,
    new: NewProperty,
) -> Result<property::Model> {
    let name = non_empty(&new.name, "name")?;
    let address = non_empty(&new.address, "address")?;
    let owner = non_empty(&new.owner, "owner")?;

    let now = chrono::Utc::now();
    let model = property::ActiveModel {
        name: Set(name),
        address: Set(address),
        description: Set(new.description),
        owner: Set(owner),
        status: Set(new.status.unwrap_or(PropertyStatus::Active)),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    Ok(result)
}

/// Retrieves all properties, newest first.
pub async fn get_all_properties(db: &DatabaseConnection) -> Result<Vec<property::Model>> {
    Property::find()
        .order_by_desc(property::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a property by its unique ID.
pub async fn get_property_by_id(
    db: &DatabaseConnection,
    property_id: i64,
) -> Result<Option<property::Model>> {
    Property::find_by_id(property_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Like [`get_property_by_id`], but a missing row is an error.
/// Used where the caller has no sensible way to proceed without the property.
pub async fn require_property<C>(db: &C, property_id: i64) -> Result<property::Model>
where
    C: ConnectionTrait,
{
    Property::find_by_id(property_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "property",
            id: property_id.to_string(),
        })
}

pub(crate) fn non_empty(value: &str, field: &'static str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation {
            field,
            message: "must not be empty".to_string(),
        });
    }
    Ok(trimmed.to_string())
}
