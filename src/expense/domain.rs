//! Core expense domain types.

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// Identifier for an expense, assigned by the [ExpenseStore](super::ExpenseStore).
pub type ExpenseId = i64;

/// An expense that has passed validation but has not been stored yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExpense {
    /// What the money was spent on, at least three characters long.
    pub description: String,
    /// How much was spent, between 1 and 100,000.
    pub amount: f64,
    /// The category the expense is recorded under.
    pub category: Category,
}

/// A stored expense.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// The identifier assigned by the store.
    pub id: ExpenseId,
    /// What the money was spent on.
    pub description: String,
    /// How much was spent.
    pub amount: f64,
    /// The category the expense is recorded under.
    pub category: Category,
}
