//! Expense form submission endpoint.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{
    AppState, Error,
    category::CategoryFilter,
    endpoints,
    expense::form::{ExpenseFormData, expense_form_view, validate_expense},
};

/// Handle the expense form submission.
///
/// A valid expense is added to the store and the client is redirected back to
/// the expenses page with the same filter selected, which also clears the
/// form. An invalid submission responds with the form showing the error for
/// each field and the values the user entered.
pub async fn create_expense_endpoint(
    State(state): State<AppState>,
    Form(form): Form<ExpenseFormData>,
) -> Response {
    let new_expense = match validate_expense(&form) {
        Ok(new_expense) => new_expense,
        Err(errors) => {
            tracing::debug!("Rejected expense form: {errors:?}");
            return Html(expense_form_view(&form, &errors).into_string()).into_response();
        }
    };

    let redirect_url = match expenses_view_url(CategoryFilter::from_name(&form.filter)) {
        Ok(url) => url,
        Err(error) => return error.into_alert_response(),
    };

    let mut store = match state.lock_store() {
        Ok(store) => store,
        Err(error) => return error.into_alert_response(),
    };

    let expense = store.add(new_expense);
    tracing::info!(
        "Added expense {}: {:?} {} ({})",
        expense.id,
        expense.description,
        expense.amount,
        expense.category
    );

    (HxRedirect(redirect_url), StatusCode::SEE_OTHER).into_response()
}

/// The URL of the expenses page with `filter` selected.
fn expenses_view_url(filter: CategoryFilter) -> Result<String, Error> {
    match filter {
        CategoryFilter::All => Ok(endpoints::EXPENSES_VIEW.to_owned()),
        CategoryFilter::Only(category) => {
            let query = serde_urlencoded::to_string([("filter", category.name())])
                .map_err(|error| Error::QueryEncodingError(error.to_string()))?;

            Ok(format!("{}?{query}", endpoints::EXPENSES_VIEW))
        }
    }
}
