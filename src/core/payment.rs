//! Payment business logic - Records rent payments against tenants.
//!
//! Payments are append-only; once recorded they are never edited. The
//! receipt number is the uniqueness key and duplicates are rejected before
//! the insert so the conflict comes back as a field-scoped validation error.

use crate::{
    core::{lease::get_active_lease_for_tenant, property::non_empty, tenant::require_tenant},
    entities::{Lease, Payment, PaymentMethod, lease, payment, tenant},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::{QueryOrder, Set, prelude::*};
use serde::{Deserialize, Serialize};

/// Fields accepted when recording a payment.
#[derive(Debug, Clone, Deserialize)]
pub struct NewPayment {
    /// Tenant who paid
    pub tenant_id: i64,
    /// Lease the payment is attributed to, if any
    #[serde(default)]
    pub lease_id: Option<i64>,
    /// Amount received; must be positive
    pub amount: f64,
    /// When the payment was received; defaults to the current instant
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    /// Payment method
    pub method: PaymentMethod,
    /// Receipt number; unique across all payments
    pub receipt_number: String,
    /// Free-form notes
    #[serde(default)]
    pub notes: Option<String>,
}

/// Pre-filled payment form values for a chosen tenant: the tenant plus
/// their active lease (and its rent as the suggested amount), if one exists.
#[derive(Debug, Clone, Serialize)]
pub struct PaymentPrefill {
    /// The paying tenant
    pub tenant: tenant::Model,
    /// The tenant's active lease, if any
    pub lease: Option<lease::Model>,
    /// Suggested amount (the active lease's monthly rent)
    pub amount: Option<f64>,
}

/// Records a new payment, performing input validation.
///
/// The amount must be finite and strictly positive, the tenant (and lease,
/// when given) must exist, and the receipt number must be unused.
pub async fn create_payment(db: &DatabaseConnection, new: NewPayment) -> Result<payment::Model> {
    if !new.amount.is_finite() || new.amount <= 0.0 {
        return Err(Error::InvalidAmount { amount: new.amount });
    }
    let receipt_number = non_empty(&new.receipt_number, "receipt_number")?;

    require_tenant(db, new.tenant_id).await?;
    if let Some(lease_id) = new.lease_id {
        Lease::find_by_id(lease_id)
            .one(db)
            .await?
            .ok_or_else(|| Error::NotFound {
                entity: "lease",
                id: lease_id.to_string(),
            })?;
    }

    let duplicate = Payment::find()
        .filter(payment::Column::ReceiptNumber.eq(&receipt_number))
        .one(db)
        .await?;
    if duplicate.is_some() {
        return Err(Error::Validation {
            field: "receipt_number",
            message: format!("receipt number {receipt_number} has already been used"),
        });
    }

    let model = payment::ActiveModel {
        tenant_id: Set(new.tenant_id),
        lease_id: Set(new.lease_id),
        amount: Set(new.amount),
        date: Set(new.date.unwrap_or_else(Utc::now)),
        method: Set(new.method),
        receipt_number: Set(receipt_number),
        notes: Set(new.notes),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    Ok(result)
}

/// Retrieves all payments, newest first.
pub async fn get_all_payments(db: &DatabaseConnection) -> Result<Vec<payment::Model>> {
    Payment::find()
        .order_by_desc(payment::Column::Date)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a payment by its unique ID.
pub async fn get_payment_by_id(
    db: &DatabaseConnection,
    payment_id: i64,
) -> Result<Option<payment::Model>> {
    Payment::find_by_id(payment_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Builds the pre-filled payment form values for a tenant. When the tenant
/// holds an active lease its monthly rent becomes the suggested amount.
pub async fn prefill_for_tenant(db: &DatabaseConnection, tenant_id: i64) -> Result<PaymentPrefill> {
    let tenant = require_tenant(db, tenant_id).await?;
    let lease = get_active_lease_for_tenant(db, tenant_id).await?;
    let amount = lease.as_ref().map(|l| l.monthly_rent);
    Ok(PaymentPrefill {
        tenant,
        lease,
        amount,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::{
        create_test_lease, create_test_payment, create_test_property, create_test_tenant,
        create_test_unit, setup_test_db,
    };

    #[tokio::test]
    async fn test_create_payment_rejects_non_positive_amounts() -> Result<()> {
        let db = setup_test_db().await?;
        let tenant = create_test_tenant(&db, "Achieng", "Odhiambo", "ID-100").await?;

        for bad in [0.0, -100.0, f64::NAN] {
            let result = create_payment(
                &db,
                NewPayment {
                    tenant_id: tenant.id,
                    lease_id: None,
                    amount: bad,
                    date: None,
                    method: PaymentMethod::Cash,
                    receipt_number: "RCP-1".to_string(),
                    notes: None,
                },
            )
            .await;
            assert!(matches!(result.unwrap_err(), Error::InvalidAmount { .. }));
        }
        Ok(())
    }

    #[tokio::test]
    async fn test_duplicate_receipt_number_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        let tenant = create_test_tenant(&db, "Achieng", "Odhiambo", "ID-100").await?;

        create_test_payment(&db, tenant.id, 50000.0, "RCP-1").await?;
        let result = create_test_payment(&db, tenant.id, 25000.0, "RCP-1").await;

        assert!(matches!(
            result.unwrap_err(),
            Error::Validation {
                field: "receipt_number",
                ..
            }
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_create_payment_unknown_lease_rejected() -> Result<()> {
        let db = setup_test_db().await?;
        let tenant = create_test_tenant(&db, "Achieng", "Odhiambo", "ID-100").await?;

        let result = create_payment(
            &db,
            NewPayment {
                tenant_id: tenant.id,
                lease_id: Some(77),
                amount: 50000.0,
                date: None,
                method: PaymentMethod::Mpesa,
                receipt_number: "RCP-1".to_string(),
                notes: None,
            },
        )
        .await;

        assert!(matches!(
            result.unwrap_err(),
            Error::NotFound { entity: "lease", .. }
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_get_all_payments_newest_first() -> Result<()> {
        let db = setup_test_db().await?;
        let tenant = create_test_tenant(&db, "Achieng", "Odhiambo", "ID-100").await?;

        create_test_payment(&db, tenant.id, 100.0, "RCP-1").await?;
        create_test_payment(&db, tenant.id, 200.0, "RCP-2").await?;

        let payments = get_all_payments(&db).await?;
        assert_eq!(payments.len(), 2);
        assert!(payments[0].date >= payments[1].date);
        Ok(())
    }

    #[tokio::test]
    async fn test_prefill_for_tenant_with_active_lease() -> Result<()> {
        let db = setup_test_db().await?;
        let property = create_test_property(&db, "Sunrise Court").await?;
        let unit = create_test_unit(&db, property.id, "A-1").await?;
        let tenant = create_test_tenant(&db, "Achieng", "Odhiambo", "ID-100").await?;
        create_test_lease(&db, tenant.id, unit.id, 50000.0).await?;

        let prefill = prefill_for_tenant(&db, tenant.id).await?;
        assert_eq!(prefill.tenant.id, tenant.id);
        assert_eq!(prefill.amount, Some(50000.0));
        assert!(prefill.lease.is_some());
        Ok(())
    }

    #[tokio::test]
    async fn test_prefill_for_tenant_without_lease() -> Result<()> {
        let db = setup_test_db().await?;
        let tenant = create_test_tenant(&db, "Achieng", "Odhiambo", "ID-100").await?;

        let prefill = prefill_for_tenant(&db, tenant.id).await?;
        assert!(prefill.lease.is_none());
        assert!(prefill.amount.is_none());
        Ok(())
    }
}
