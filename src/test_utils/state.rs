use std::thread;

use crate::AppState;

/// Poison the expense store lock by panicking while holding it.
pub(crate) fn poison_store_lock(state: &AppState) {
    let store = state.expense_store.clone();

    let result = thread::spawn(move || {
        let _guard = store.lock().unwrap();
        panic!("panicking while holding the expense store lock");
    })
    .join();

    assert!(result.is_err());
    assert!(state.expense_store.is_poisoned());
}
