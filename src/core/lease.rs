//! Lease business logic - Handles lease creation and lookups.
//!
//! Creating a lease is the one place in the system where two writes happen
//! together: the lease row is inserted and the unit is marked occupied.
//! Both run inside a single database transaction so a crash can never leave
//! an active lease against a non-occupied unit.

use crate::{
    core::{
        tenant::require_tenant,
        unit::{require_unit, set_unit_status, validate_amount},
    },
    entities::{Lease, LeaseStatus, UnitStatus, lease, unit},
    errors::{Error, Result},
};
use chrono::NaiveDate;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use serde::{Deserialize, Serialize};

/// Fields accepted when creating a lease.
#[derive(Debug, Clone, Deserialize)]
pub struct NewLease {
    /// Tenant taking the lease
    pub tenant_id: i64,
    /// Unit being leased
    pub unit_id: i64,
    /// First day of the lease
    pub start_date: NaiveDate,
    /// Last day of the lease; must be after `start_date`
    pub end_date: NaiveDate,
    /// Agreed monthly rent
    pub monthly_rent: f64,
    /// Deposit held for this lease
    pub deposit_amount: f64,
    /// Collection cadence; defaults to "Monthly"
    #[serde(default)]
    pub payment_frequency: Option<String>,
    /// Reference to the signed agreement document
    #[serde(default)]
    pub agreement_file: Option<String>,
    /// Initial status; defaults to `active`
    #[serde(default)]
    pub status: Option<LeaseStatus>,
}

/// Pre-filled lease form values for a chosen unit, mirroring the unit's
/// advertised rent and deposit.
#[derive(Debug, Clone, Serialize)]
pub struct LeasePrefill {
    /// The unit the lease would be written against
    pub unit: unit::Model,
    /// Suggested monthly rent (the unit's advertised rent)
    pub monthly_rent: f64,
    /// Suggested deposit (the unit's advertised deposit)
    pub deposit_amount: f64,
}

/// Creates a new lease and marks the leased unit occupied.
///
/// The tenant and unit must both exist, the end date must fall after the
/// start date, and the amounts must be finite and non-negative. The lease
/// insert and the unit status update are committed atomically; the unit is
/// marked occupied regardless of its prior status.
pub async fn create_lease(db: &DatabaseConnection, new: NewLease) -> Result<lease::Model> {
    if new.end_date <= new.start_date {
        return Err(Error::Validation {
            field: "end_date",
            message: format!(
                "end date {} must fall after start date {}",
                new.end_date, new.start_date
            ),
        });
    }
    validate_amount(new.monthly_rent)?;
    validate_amount(new.deposit_amount)?;

    // Use a transaction to ensure atomicity of the insert + unit update
    let txn = db.begin().await?;

    require_tenant(&txn, new.tenant_id).await?;
    require_unit(&txn, new.unit_id).await?;

    let model = lease::ActiveModel {
        tenant_id: Set(new.tenant_id),
        unit_id: Set(new.unit_id),
        start_date: Set(new.start_date),
        end_date: Set(new.end_date),
        monthly_rent: Set(new.monthly_rent),
        deposit_amount: Set(new.deposit_amount),
        payment_frequency: Set(new
            .payment_frequency
            .unwrap_or_else(|| "Monthly".to_string())),
        agreement_file: Set(new.agreement_file),
        status: Set(new.status.unwrap_or(LeaseStatus::Active)),
        ..Default::default()
    };

    let result = model.insert(&txn).await?;

    set_unit_status(&txn, new.unit_id, UnitStatus::Occupied).await?;

    txn.commit().await?;

    Ok(result)
}

/// Retrieves all leases, most recent start date first.
pub async fn get_all_leases(db: &DatabaseConnection) -> Result<Vec<lease::Model>> {
    Lease::find()
        .order_by_desc(lease::Column::StartDate)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a lease by its unique ID.
pub async fn get_lease_by_id(
    db: &DatabaseConnection,
    lease_id: i64,
) -> Result<Option<lease::Model>> {
    Lease::find_by_id(lease_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds the first active lease held by a tenant, if any.
/// Used to pre-fill payment forms with the expected rent amount.
pub async fn get_active_lease_for_tenant(
    db: &DatabaseConnection,
    tenant_id: i64,
) -> Result<Option<lease::Model>> {
    Lease::find()
        .filter(lease::Column::TenantId.eq(tenant_id))
        .filter(lease::Column::Status.eq(LeaseStatus::Active))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Builds the pre-filled lease form values for a unit: the unit itself plus
/// its advertised rent and deposit amounts.
pub async fn prefill_for_unit(db: &DatabaseConnection, unit_id: i64) -> Result<LeasePrefill> {
    let unit = require_unit(db, unit_id).await?;
    let monthly_rent = unit.rent_amount;
    let deposit_amount = unit.deposit_amount;
    Ok(LeasePrefill {
        unit,
        monthly_rent,
        deposit_amount,
    })
}
