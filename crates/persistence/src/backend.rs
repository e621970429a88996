// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! `SQLite` connection initialization.
//!
//! Backend-specific code is limited to connection setup, migration
//! execution, and PRAGMA configuration; all queries and mutations go
//! through Diesel DSL in `lib.rs`.

use crate::error::PersistenceError;
use diesel::connection::SimpleConnection;
use diesel::{Connection, RunQueryDsl, SqliteConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// The embedded schema migrations, applied on every connection.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Establishes a connection and brings the schema up to date.
///
/// # Arguments
///
/// * `database_url` - A file path or `file:...?mode=memory&cache=shared` URL
///
/// # Errors
///
/// Returns an error if the connection cannot be established or a migration
/// fails.
pub fn initialize_database(database_url: &str) -> Result<SqliteConnection, PersistenceError> {
    let mut conn: SqliteConnection = SqliteConnection::establish(database_url)?;

    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|e| PersistenceError::MigrationFailed(e.to_string()))?;

    conn.batch_execute("PRAGMA foreign_keys = ON;")
        .map_err(|e| PersistenceError::InitializationError(e.to_string()))?;

    info!(database_url, "Database initialized");
    Ok(conn)
}

/// Enables WAL journaling for better read concurrency on file databases.
///
/// # Errors
///
/// Returns an error if the PRAGMA cannot be applied.
pub fn enable_wal_mode(conn: &mut SqliteConnection) -> Result<(), PersistenceError> {
    conn.batch_execute("PRAGMA journal_mode = WAL;")
        .map_err(|e| PersistenceError::InitializationError(e.to_string()))?;
    Ok(())
}

/// Retrieves the row id assigned by the most recent insert.
///
/// # Errors
///
/// Returns an error if the query fails.
pub fn get_last_insert_rowid(conn: &mut SqliteConnection) -> Result<i64, PersistenceError> {
    diesel::select(diesel::dsl::sql::<diesel::sql_types::BigInt>(
        "last_insert_rowid()",
    ))
    .get_result::<i64>(conn)
    .map_err(Into::into)
}
