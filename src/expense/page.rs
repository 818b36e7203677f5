//! Defines the route handler for the expenses page.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    category::CategoryFilter,
    expense::{
        Expense,
        form::{ExpenseFormData, FormErrors, expense_form_view},
        list::{FilterQuery, expense_list_view},
    },
    html::{PAGE_CONTAINER_STYLE, base, dollar_input_styles},
};

/// Render the page with the expense form next to the expense list.
///
/// The list is filtered by the `filter` query parameter, which defaults to
/// showing every expense.
pub async fn get_expenses_page(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Result<Response, Error> {
    let filter = query.category_filter();
    let store = state.lock_store()?;

    let page = expenses_view(&store.filter(filter), filter);

    Ok(Html(page.into_string()).into_response())
}

fn expenses_view(expenses: &[&Expense], filter: CategoryFilter) -> Markup {
    let form = expense_form_view(&ExpenseFormData::default(), &FormErrors::default());
    let list = expense_list_view(expenses, filter);

    let content = html! {
        main class=(PAGE_CONTAINER_STYLE)
        {
            h1 class="text-3xl font-bold tracking-wider text-center" { "Expense Tracker" }

            div class="grid w-full max-w-5xl grid-cols-1 gap-8 mt-16 lg:grid-cols-2"
            {
                div { (form) }
                div { (list) }
            }
        }
    };

    base("Expenses", &[dollar_input_styles()], &content)
}
