//! The category table.
//!
//! Categories only exist in the schema. No endpoint creates or reads them and
//! transactions are free to reference category IDs that do not exist.

use rusqlite::Connection;

/// Create the category table in the database.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS categories (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                type TEXT CHECK(type IN ('income', 'expense')) NOT NULL
                )",
        (),
    )?;

    Ok(())
}
