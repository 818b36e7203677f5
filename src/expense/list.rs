//! The filterable expense list.

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState,
    category::{CATEGORY_OPTIONS, CategoryFilter},
    endpoints,
    expense::{Expense, total},
    html::{
        BUTTON_DELETE_STYLE, CATEGORY_BADGE_STYLE, FORM_TEXT_INPUT_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, format_currency,
    },
};

/// The CSS selector for the category filter select.
///
/// Requests that change the list include this element so the re-rendered
/// list keeps the selected filter.
pub(crate) const FILTER_SELECTOR: &str = "#category-filter";

/// The query parameters that select which expenses are listed.
#[derive(Debug, Default, Deserialize)]
pub struct FilterQuery {
    /// The name of the selected category, or "All Categories".
    #[serde(default)]
    pub filter: String,
}

impl FilterQuery {
    /// The filter named by the query, defaulting to every category.
    pub fn category_filter(&self) -> CategoryFilter {
        CategoryFilter::from_name(&self.filter)
    }
}

/// Render the expense list for the filter selected in the query string.
///
/// This is what the category filter select swaps in when its value changes.
pub async fn get_expense_list(
    State(state): State<AppState>,
    Query(query): Query<FilterQuery>,
) -> Response {
    let filter = query.category_filter();
    let store = match state.lock_store() {
        Ok(store) => store,
        Err(error) => return error.into_alert_response(),
    };

    let list = expense_list_view(&store.filter(filter), filter);

    Html(list.into_string()).into_response()
}

/// Render the category filter and the table of `expenses`.
///
/// `expenses` should already be filtered by `filter`; the filter is only used
/// to mark the selected option.
pub(crate) fn expense_list_view(expenses: &[&Expense], filter: CategoryFilter) -> Markup {
    let total = total(expenses.iter().copied());

    html! {
        section id="expense-list" class="w-full space-y-4"
        {
            header class="flex justify-between flex-wrap items-end gap-4"
            {
                h2 class="text-xl font-bold" { "Expenses" }

                select
                    id="category-filter"
                    name="filter"
                    aria-label="Filter by category"
                    hx-get=(endpoints::EXPENSE_LIST_VIEW)
                    hx-target="#expense-list"
                    hx-swap="outerHTML"
                    hx-target-error="#alert-container"
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    @for option in CATEGORY_OPTIONS {
                        option
                            value=(option.name)
                            selected[option.name == filter.name()]
                        {
                            (option.name)
                        }
                    }
                }
            }

            table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Actions" }
                    }
                }

                tbody
                {
                    @for expense in expenses {
                        (expense_row(expense))
                    }

                    @if expenses.is_empty() {
                        tr
                        {
                            td
                                colspan="4"
                                class="px-6 py-4 text-center text-gray-500 dark:text-gray-400"
                            {
                                "No expenses to show."
                            }
                        }
                    }
                }

                tfoot
                {
                    tr class="font-semibold text-gray-900 dark:text-white"
                    {
                        th scope="row" class=(TABLE_CELL_STYLE) { "Total" }
                        td id="expense-total" class=(TABLE_CELL_STYLE) { (format_currency(total)) }
                        td {}
                        td {}
                    }
                }
            }
        }
    }
}

fn expense_row(expense: &Expense) -> Markup {
    let delete_url = endpoints::format_endpoint(endpoints::DELETE_EXPENSE, expense.id);
    let confirm_message = format!(
        "Are you sure you want to delete the expense '{}'? This cannot be undone.",
        expense.description
    );

    html! {
        tr class=(TABLE_ROW_STYLE) data-expense-id=(expense.id)
        {
            td class=(TABLE_CELL_STYLE) { (expense.description) }
            td class=(TABLE_CELL_STYLE) { (format_currency(expense.amount)) }
            td class=(TABLE_CELL_STYLE)
            {
                span class=(CATEGORY_BADGE_STYLE) { (expense.category) }
            }
            td class=(TABLE_CELL_STYLE)
            {
                button
                    type="button"
                    hx-delete=(delete_url)
                    hx-include=(FILTER_SELECTOR)
                    hx-confirm=(confirm_message)
                    hx-target="#expense-list"
                    hx-swap="outerHTML"
                    hx-target-error="#alert-container"
                    class=(BUTTON_DELETE_STYLE)
                {
                    "Delete"
                }
            }
        }
    }
}
