//! Implements a struct that holds the state of the server.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{Error, expense::ExpenseStore};

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The expenses recorded during this session.
    pub expense_store: Arc<Mutex<ExpenseStore>>,
}

impl AppState {
    /// Create a new [AppState] that owns `expense_store`.
    pub fn new(expense_store: ExpenseStore) -> Self {
        Self {
            expense_store: Arc::new(Mutex::new(expense_store)),
        }
    }

    /// Acquire the lock on the expense store.
    ///
    /// # Errors
    /// Returns [Error::StoreLockError] if the lock is poisoned.
    pub(crate) fn lock_store(&self) -> Result<MutexGuard<'_, ExpenseStore>, Error> {
        self.expense_store
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire expense store lock: {error}"))
            .map_err(|_| Error::StoreLockError)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ExpenseStore::new())
    }
}
