//! Request handler implementations, one module per entity type.

/// Dashboard snapshot endpoint
pub mod dashboard;
/// Expense endpoints
pub mod expense;
/// Lease endpoints
pub mod lease;
/// Payment endpoints
pub mod payment;
/// Property endpoints
pub mod property;
/// Tenant endpoints
pub mod tenant;
/// Maintenance ticket endpoints
pub mod ticket;
/// Unit endpoints
pub mod unit;
/// Visitor log endpoints
pub mod visitor;
