//! Sets up the application's database schema.

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{Error, category::create_category_table, transaction::create_transaction_table};

/// Create all of the database tables for the application.
///
/// Foreign key enforcement is switched off for `connection`: a transaction's
/// category is only a logical reference and does not need to exist.
///
/// # Errors
/// This function may return a [Error::SqlError] if an SQL related error occurred.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    // This pragma is a no-op inside a transaction, so it must run first.
    connection.execute_batch("PRAGMA foreign_keys = OFF;")?;

    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_category_table(&transaction)?;
    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::initialize;

    fn get_table_names(connection: &Connection) -> Vec<String> {
        connection
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .map(|name| name.unwrap())
            .collect()
    }

    #[test]
    fn creates_tables() {
        let connection = Connection::open_in_memory().unwrap();

        initialize(&connection).expect("Could not initialize database");

        let table_names = get_table_names(&connection);
        assert!(table_names.contains(&"categories".to_owned()));
        assert!(table_names.contains(&"transactions".to_owned()));
    }

    #[test]
    fn initialize_twice_succeeds() {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).expect("Could not initialize database");

        let result = initialize(&connection);

        assert_eq!(result, Ok(()));
    }

    #[test]
    fn foreign_keys_are_not_enforced() {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).expect("Could not initialize database");

        let foreign_keys: bool = connection
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();

        assert!(!foreign_keys);
    }
}
