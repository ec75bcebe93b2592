//! Core business logic - framework-agnostic record editors and aggregation.
//!
//! Each submodule owns the validated create/list/detail operations for one
//! entity type; `dashboard` is the read-only aggregator that derives summary
//! metrics across the whole store. Nothing in here knows about HTTP.

/// Dashboard aggregation - derived occupancy and financial metrics
pub mod dashboard;
/// Expense record operations
pub mod expense;
/// Lease record operations, including the unit-occupied cascade
pub mod lease;
/// Payment record operations
pub mod payment;
/// Property record operations
pub mod property;
/// Tenant record operations
pub mod tenant;
/// Maintenance ticket operations
pub mod ticket;
/// Unit record operations
pub mod unit;
/// Visitor log operations
pub mod visitor;
