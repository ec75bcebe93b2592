//! Database configuration module for `RentDesk`.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating all necessary tables
//! based on the entity definitions. The module uses `SeaORM`'s `Schema::create_table_from_entity`
//! method to automatically generate SQL statements from the entity models, ensuring that the
//! database schema matches the Rust struct definitions without requiring manual SQL.

use crate::entities::{
    Expense, Lease, MaintenanceTicket, Payment, Property, Tenant, Unit, Visitor,
};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from environment variable or returns default `SQLite` path.
///
/// This function looks for `DATABASE_URL` in the environment and falls back to
/// a default local `SQLite` file if not found.
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://data/rentdesk.sqlite".to_string())
}

/// Establishes a connection to the database at the given URL and ensures the
/// schema exists.
///
/// This is the single entry point `main` uses to bring up the store; tests use
/// an in-memory URL through the same path.
pub async fn init_db(database_url: &str) -> Result<DatabaseConnection> {
    let db = Database::connect(database_url).await?;
    create_tables(&db).await?;
    Ok(db)
}

/// Creates all necessary database tables using `SeaORM`'s schema generation from entity definitions.
///
/// This function uses the `DeriveEntityModel` macros to automatically generate proper SQL
/// statements for table creation, ensuring the database schema matches the Rust struct
/// definitions. Existing tables are left untouched.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let mut statements = vec![
        schema.create_table_from_entity(Property),
        schema.create_table_from_entity(Unit),
        schema.create_table_from_entity(Tenant),
        schema.create_table_from_entity(Lease),
        schema.create_table_from_entity(Payment),
        schema.create_table_from_entity(Expense),
        schema.create_table_from_entity(MaintenanceTicket),
        schema.create_table_from_entity(Visitor),
    ];

    for statement in &mut statements {
        statement.if_not_exists();
        db.execute(builder.build(statement)).await?;
    }

    Ok(())
}
