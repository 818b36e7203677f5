//! Expense deletion endpoint.

use axum::{
    extract::{Path, Query, State},
    response::{Html, IntoResponse, Response},
};

use crate::{
    AppState,
    expense::{
        ExpenseId,
        list::{FilterQuery, expense_list_view},
    },
};

/// Delete an expense and respond with the re-rendered expense list.
///
/// Deleting an expense that does not exist, e.g. one that was already
/// deleted in another tab, is not an error. The list is rendered either way
/// so the client ends up showing what is in the store.
pub async fn delete_expense_endpoint(
    Path(expense_id): Path<ExpenseId>,
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Response {
    let mut store = match state.lock_store() {
        Ok(store) => store,
        Err(error) => return error.into_alert_response(),
    };

    match store.remove(expense_id) {
        Some(expense) => tracing::info!(
            "Deleted expense {expense_id}: {:?} {} ({})",
            expense.description,
            expense.amount,
            expense.category
        ),
        None => tracing::debug!("Ignored delete of unknown expense {expense_id}"),
    }

    let filter = query.category_filter();
    // The status code has to be 200 OK or HTMX will not swap in the list.
    Html(expense_list_view(&store.filter(filter), filter).into_string()).into_response()
}
