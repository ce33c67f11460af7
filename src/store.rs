//! The handle to the application's SQLite database.

use std::sync::{Arc, Mutex, PoisonError};

use rusqlite::Connection;

use crate::{Error, db::initialize};

/// An owned handle to the ledger's database.
///
/// The lifecycle is `open -> serve requests -> close`: open a store with
/// [Store::open_in_memory] or [Store::new], hand clones of it to the request
/// handlers via [crate::AppState], and call [Store::close] once the server
/// has stopped.
///
/// All statements run on a single connection guarded by a mutex, so they are
/// executed one at a time.
#[derive(Debug, Clone)]
pub struct Store {
    connection: Arc<Mutex<Connection>>,
}

impl Store {
    /// Create a store from an open connection, creating the tables if needed.
    ///
    /// # Errors
    /// Returns an error if the database cannot be initialized.
    pub fn new(connection: Connection) -> Result<Self, Error> {
        initialize(&connection)?;

        Ok(Self {
            connection: Arc::new(Mutex::new(connection)),
        })
    }

    /// Open a new, empty store in memory.
    ///
    /// # Errors
    /// Returns an error if the database cannot be opened or initialized.
    pub fn open_in_memory() -> Result<Self, Error> {
        let connection = Connection::open_in_memory()?;

        Self::new(connection)
    }

    /// Run `query` against the database and wait for its result.
    ///
    /// The query runs on tokio's blocking thread pool while the caller awaits
    /// the result. Cancellation is not supported: once submitted, `query`
    /// runs to completion even if the returned future is dropped, e.g. when a
    /// client disconnects mid-request. There is no timeout.
    ///
    /// # Errors
    /// Returns the error produced by `query`, or [Error::QueryTaskFailed] if
    /// the blocking task panicked. A panicking query does not make the store
    /// unusable: the next query gets the connection as the panic left it.
    pub async fn run<T, F>(&self, query: F) -> Result<T, Error>
    where
        F: FnOnce(&Connection) -> Result<T, Error> + Send + 'static,
        T: Send + 'static,
    {
        let connection = self.connection.clone();

        tokio::task::spawn_blocking(move || {
            let connection = connection.lock().unwrap_or_else(|poisoned| {
                tracing::warn!("a previous query panicked, reusing the database connection");
                poisoned.into_inner()
            });

            query(&connection)
        })
        .await
        .map_err(|error| {
            tracing::error!("database task failed: {error}");
            Error::QueryTaskFailed(error.to_string())
        })?
    }

    /// Close the database connection.
    ///
    /// If another clone of this store is still alive, e.g. a request that
    /// outlived the shutdown grace period, the connection is left open and
    /// closes when the last clone is dropped.
    ///
    /// # Errors
    /// Returns an error if SQLite fails to close the connection.
    pub fn close(self) -> Result<(), Error> {
        let mutex = match Arc::try_unwrap(self.connection) {
            Ok(mutex) => mutex,
            Err(_) => {
                tracing::warn!("store is still in use, deferring close to the last user");
                return Ok(());
            }
        };

        let connection = mutex.into_inner().unwrap_or_else(PoisonError::into_inner);

        connection
            .close()
            .map_err(|(_connection, error)| Error::from(error))
    }
}
