//! Expense tracking.
//!
//! This module contains everything related to expenses:
//! - The `Expense` model and the in-memory `ExpenseStore`
//! - Validation of the expense form
//! - View handlers and endpoints for adding, listing, filtering and deleting expenses

mod create_endpoint;
mod delete_endpoint;
mod domain;
mod form;
mod list;
mod page;
mod store;

pub use create_endpoint::create_expense_endpoint;
pub use delete_endpoint::delete_expense_endpoint;
pub use domain::{Expense, ExpenseId, NewExpense};
pub use form::{ExpenseFormData, FormErrors, validate_expense};
pub use list::get_expense_list;
pub use page::get_expenses_page;
pub use store::{ExpenseStore, total};

#[cfg(test)]
pub(crate) use list::test_helpers as list_test_helpers;
