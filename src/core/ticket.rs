//! Maintenance ticket business logic.
//!
//! Tickets are created against a unit (optionally naming the reporting
//! tenant) and progress through their status/priority fields via explicit
//! updates. The dashboard reads them; it never moves them.

use crate::{
    core::{property::non_empty, tenant::require_tenant, unit::require_unit},
    entities::{MaintenanceTicket, TicketPriority, TicketStatus, maintenance_ticket},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, QuerySelect, Set, prelude::*};
use serde::Deserialize;

/// Fields accepted when opening a ticket.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTicket {
    /// Unit the ticket is about
    pub unit_id: i64,
    /// Reporting tenant, if a tenant reported it
    #[serde(default)]
    pub tenant_id: Option<i64>,
    /// Problem category (e.g. "Plumbing")
    pub category: String,
    /// Description of the problem
    pub description: String,
    /// Priority; defaults to `medium`
    #[serde(default)]
    pub priority: Option<TicketPriority>,
}

/// Fields accepted when updating a ticket over its life.
/// Absent fields are left unchanged.
#[derive(Debug, Clone, Deserialize)]
pub struct TicketUpdate {
    /// New status
    #[serde(default)]
    pub status: Option<TicketStatus>,
    /// New priority
    #[serde(default)]
    pub priority: Option<TicketPriority>,
    /// Technician to assign
    #[serde(default)]
    pub assigned_technician: Option<String>,
}

/// Opens a new maintenance ticket against an existing unit.
/// New tickets always start `open`.
pub async fn create_ticket(
    db: &DatabaseConnection,
    new: NewTicket,
) -> Result<maintenance_ticket::Model> {
    require_unit(db, new.unit_id).await?;
    if let Some(tenant_id) = new.tenant_id {
        require_tenant(db, tenant_id).await?;
    }
    let category = non_empty(&new.category, "category")?;
    let description = non_empty(&new.description, "description")?;

    let now = chrono::Utc::now();
    let model = maintenance_ticket::ActiveModel {
        unit_id: Set(new.unit_id),
        tenant_id: Set(new.tenant_id),
        category: Set(category),
        description: Set(description),
        priority: Set(new.priority.unwrap_or(TicketPriority::Medium)),
        status: Set(TicketStatus::Open),
        assigned_technician: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let result = model.insert(db).await?;
    Ok(result)
}

/// Applies a partial update to a ticket and bumps its `updated_at`.
pub async fn update_ticket(
    db: &DatabaseConnection,
    ticket_id: i64,
    update: TicketUpdate,
) -> Result<maintenance_ticket::Model> {
    let ticket = MaintenanceTicket::find_by_id(ticket_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound {
            entity: "maintenance ticket",
            id: ticket_id.to_string(),
        })?;

    let mut active: maintenance_ticket::ActiveModel = ticket.into();
    if let Some(status) = update.status {
        active.status = Set(status);
    }
    if let Some(priority) = update.priority {
        active.priority = Set(priority);
    }
    if let Some(technician) = update.assigned_technician {
        active.assigned_technician = Set(Some(technician));
    }
    active.updated_at = Set(chrono::Utc::now());

    active.update(db).await.map_err(Into::into)
}

/// Finds a ticket by its unique ID.
pub async fn get_ticket_by_id(
    db: &DatabaseConnection,
    ticket_id: i64,
) -> Result<Option<maintenance_ticket::Model>> {
    MaintenanceTicket::find_by_id(ticket_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Retrieves all tickets, newest first.
pub async fn get_all_tickets(db: &DatabaseConnection) -> Result<Vec<maintenance_ticket::Model>> {
    MaintenanceTicket::find()
        .order_by_desc(maintenance_ticket::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the `limit` most recently created tickets, newest first.
pub async fn get_recent_tickets(
    db: &DatabaseConnection,
    limit: u64,
) -> Result<Vec<maintenance_ticket::Model>> {
    MaintenanceTicket::find()
        .order_by_desc(maintenance_ticket::Column::CreatedAt)
        .limit(limit)
        .all(db)
        .await
        .map_err(Into::into)
}
