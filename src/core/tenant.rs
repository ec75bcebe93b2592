//! Tenant business logic - Handles all tenant-related operations.
//!
//! The id/passport number is the real-world identity key and must be unique;
//! duplicates are caught with a pre-insert lookup so they surface as a
//! field-scoped validation error rather than a raw constraint violation.

use crate::{
    core::property::non_empty,
    entities::{Tenant, TenantStatus, tenant},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::Deserialize;

/// Fields accepted when creating a tenant.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTenant {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// National ID or passport number; unique across all tenants
    pub id_passport_number: String,
    /// Phone number
    pub phone: String,
    /// Email address
    pub email: String,
    /// Emergency contact details
    #[serde(default)]
    pub emergency_contact: Option<String>,
    /// Initial status; defaults to `active`
    #[serde(default)]
    pub status: Option<TenantStatus>,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
    /// Day rent next falls due
    #[serde(default)]
    pub rent_due_date: Option<NaiveDate>,
}

/// Creates a new tenant record, performing input validation.
///
/// Names, id/passport number, phone, and email must be non-empty. The
/// id/passport number must not already be registered to another tenant.
/// The running balance starts at zero.
pub async fn create_tenant(db: &DatabaseConnection, new: NewTenant) -> Result<tenant::Model> {
    let first_name = non_empty(&new.first_name, "first_name")?;
    let last_name = non_empty(&new.last_name, "last_name")?;
    let id_passport_number = non_empty(&new.id_passport_number, "id_passport_number")?;
    let phone = non_empty(&new.phone, "phone")?;
    let email = non_empty(&new.email, "email")?;

    if get_tenant_by_passport_number(db, &id_passport_number)
        .await?
        .is_some()
    {
        return Err(Error::Validation {
            field: "id_passport_number",
            message: format!("a tenant with id/passport number {id_passport_number} already exists"),
        });
    }

    let model = tenant::ActiveModel {
        first_name: Set(first_name),
        last_name: Set(last_name),
        id_passport_number: Set(id_passport_number),
        phone: Set(phone),
        email: Set(email),
        emergency_contact: Set(new.emergency_contact),
        status: Set(new.status.unwrap_or(TenantStatus::Active)),
        notes: Set(new.notes),
        rent_due_date: Set(new.rent_due_date),
        balance: Set(0.0),
        created_at: Set(chrono::Utc::now()),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    Ok(result)
}

/// Retrieves all tenants, newest first.
pub async fn get_all_tenants(db: &DatabaseConnection) -> Result<Vec<tenant::Model>> {
    Tenant::find()
        .order_by_desc(tenant::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a tenant by its unique ID.
pub async fn get_tenant_by_id(
    db: &DatabaseConnection,
    tenant_id: i64,
) -> Result<Option<tenant::Model>> {
    Tenant::find_by_id(tenant_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a tenant by id/passport number.
pub async fn get_tenant_by_passport_number(
    db: &DatabaseConnection,
    id_passport_number: &str,
) -> Result<Option<tenant::Model>> {
    Tenant::find()
        .filter(tenant::Column::IdPassportNumber.eq(id_passport_number))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Like [`get_tenant_by_id`], but a missing row is an error.
pub async fn require_tenant<C>(db: &C, tenant_id: i64) -> Result<tenant::Model>
where
    C: ConnectionTrait,
{
    Tenant::find_by_id(tenant_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "tenant",
            id: tenant_id.to_string(),
        })
}
