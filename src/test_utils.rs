//! Shared test utilities for `RentDesk`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

#![allow(clippy::unwrap_used)]

use crate::{
    core::{expense, lease, payment, property, tenant, ticket, unit, visitor},
    entities,
    entities::{LeaseStatus, PaymentMethod, TicketPriority, TicketStatus, UnitType},
    errors::Result,
};
use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    crate::config::database::init_db("sqlite::memory:").await
}

/// Shorthand for building a `NaiveDate` in test fixtures.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Creates a test property with sensible defaults.
///
/// # Defaults
/// * `address`: "1 Test Road"
/// * `owner`: "Test Owner"
/// * `status`: active
pub async fn create_test_property(
    db: &DatabaseConnection,
    name: &str,
) -> Result<entities::property::Model> {
    property::create_property(
        db,
        property::NewProperty {
            name: name.to_string(),
            address: "1 Test Road".to_string(),
            description: None,
            owner: "Test Owner".to_string(),
            status: None,
        },
    )
    .await
}

/// Creates a test unit under the given property.
///
/// # Defaults
/// * `unit_type`: `1BR`
/// * `rent_amount`: 25000.0
/// * `deposit_amount`: 25000.0
/// * `status`: vacant
pub async fn create_test_unit(
    db: &DatabaseConnection,
    property_id: i64,
    unit_number: &str,
) -> Result<entities::unit::Model> {
    unit::create_unit(
        db,
        property_id,
        unit::NewUnit {
            unit_number: unit_number.to_string(),
            unit_type: UnitType::OneBedroom,
            rent_amount: 25000.0,
            deposit_amount: 25000.0,
            status: None,
            water_meter: None,
            electricity_meter: None,
        },
    )
    .await
}

/// Creates a test tenant with sensible defaults.
///
/// # Defaults
/// * `phone`: "0700-000000"
/// * `email`: derived from the first name
/// * `status`: active
pub async fn create_test_tenant(
    db: &DatabaseConnection,
    first_name: &str,
    last_name: &str,
    id_passport_number: &str,
) -> Result<entities::tenant::Model> {
    tenant::create_tenant(
        db,
        tenant::NewTenant {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            id_passport_number: id_passport_number.to_string(),
            phone: "0700-000000".to_string(),
            email: format!("{}@example.com", first_name.to_lowercase()),
            emergency_contact: None,
            status: None,
            notes: None,
            rent_due_date: None,
        },
    )
    .await
}

/// Creates an active one-year test lease starting 2025-01-01.
pub async fn create_test_lease(
    db: &DatabaseConnection,
    tenant_id: i64,
    unit_id: i64,
    monthly_rent: f64,
) -> Result<entities::lease::Model> {
    create_custom_lease(
        db,
        tenant_id,
        unit_id,
        ymd(2025, 1, 1),
        ymd(2025, 12, 31),
        monthly_rent,
        LeaseStatus::Active,
    )
    .await
}

/// Creates a test lease with custom dates and status.
pub async fn create_custom_lease(
    db: &DatabaseConnection,
    tenant_id: i64,
    unit_id: i64,
    start_date: NaiveDate,
    end_date: NaiveDate,
    monthly_rent: f64,
    status: LeaseStatus,
) -> Result<entities::lease::Model> {
    lease::create_lease(
        db,
        lease::NewLease {
            tenant_id,
            unit_id,
            start_date,
            end_date,
            monthly_rent,
            deposit_amount: monthly_rent,
            payment_frequency: None,
            agreement_file: None,
            status: Some(status),
        },
    )
    .await
}

/// Records a test payment dated now.
///
/// # Defaults
/// * `method`: cash
/// * no lease attribution
pub async fn create_test_payment(
    db: &DatabaseConnection,
    tenant_id: i64,
    amount: f64,
    receipt_number: &str,
) -> Result<entities::payment::Model> {
    create_custom_payment(db, tenant_id, amount, receipt_number, Utc::now()).await
}

/// Records a test payment with an explicit date, for dashboard window tests.
pub async fn create_custom_payment(
    db: &DatabaseConnection,
    tenant_id: i64,
    amount: f64,
    receipt_number: &str,
    date: DateTime<Utc>,
) -> Result<entities::payment::Model> {
    payment::create_payment(
        db,
        payment::NewPayment {
            tenant_id,
            lease_id: None,
            amount,
            date: Some(date),
            method: PaymentMethod::Cash,
            receipt_number: receipt_number.to_string(),
            notes: None,
        },
    )
    .await
}

/// Records a test expense in the "Repairs" category.
pub async fn create_test_expense(
    db: &DatabaseConnection,
    property_id: i64,
    amount: f64,
    date: NaiveDate,
) -> Result<entities::expense::Model> {
    expense::create_expense(
        db,
        expense::NewExpense {
            property_id,
            category: "Repairs".to_string(),
            amount,
            date,
            description: None,
            receipt_file: None,
        },
    )
    .await
}

/// Opens a test ticket with default (medium) priority.
pub async fn create_test_ticket(
    db: &DatabaseConnection,
    unit_id: i64,
) -> Result<entities::maintenance_ticket::Model> {
    ticket::create_ticket(
        db,
        ticket::NewTicket {
            unit_id,
            tenant_id: None,
            category: "Plumbing".to_string(),
            description: "Leaking tap".to_string(),
            priority: None,
        },
    )
    .await
}

/// Opens a test ticket and moves it to the given priority and status.
pub async fn create_custom_ticket(
    db: &DatabaseConnection,
    unit_id: i64,
    priority: TicketPriority,
    status: TicketStatus,
) -> Result<entities::maintenance_ticket::Model> {
    let created = ticket::create_ticket(
        db,
        ticket::NewTicket {
            unit_id,
            tenant_id: None,
            category: "Plumbing".to_string(),
            description: "Leaking tap".to_string(),
            priority: Some(priority),
        },
    )
    .await?;

    if status == TicketStatus::Open {
        return Ok(created);
    }
    ticket::update_ticket(
        db,
        created.id,
        ticket::TicketUpdate {
            status: Some(status),
            priority: None,
            assigned_technician: None,
        },
    )
    .await
}

/// Checks in a test visitor, entry time now.
pub async fn create_test_visitor(
    db: &DatabaseConnection,
    unit_id: i64,
    name: &str,
) -> Result<entities::visitor::Model> {
    visitor::check_in_visitor(
        db,
        visitor::NewVisitor {
            name: name.to_string(),
            phone: "0711-000000".to_string(),
            id_number: None,
            unit_id,
            vehicle_plate: None,
            entry_time: None,
            security_guard_name: None,
        },
    )
    .await
}
