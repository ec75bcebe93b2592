//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod expense;
pub mod lease;
pub mod maintenance_ticket;
pub mod payment;
pub mod property;
pub mod tenant;
pub mod unit;
pub mod visitor;

// Re-export specific types to avoid conflicts
pub use expense::{Column as ExpenseColumn, Entity as Expense, Model as ExpenseModel};
pub use lease::{
    Column as LeaseColumn, Entity as Lease, LeaseStatus, Model as LeaseModel,
};
pub use maintenance_ticket::{
    Column as MaintenanceTicketColumn, Entity as MaintenanceTicket,
    Model as MaintenanceTicketModel, TicketPriority, TicketStatus,
};
pub use payment::{
    Column as PaymentColumn, Entity as Payment, Model as PaymentModel, PaymentMethod,
};
pub use property::{
    Column as PropertyColumn, Entity as Property, Model as PropertyModel, PropertyStatus,
};
pub use tenant::{Column as TenantColumn, Entity as Tenant, Model as TenantModel, TenantStatus};
pub use unit::{Column as UnitColumn, Entity as Unit, Model as UnitModel, UnitStatus, UnitType};
pub use visitor::{Column as VisitorColumn, Entity as Visitor, Model as VisitorModel};
