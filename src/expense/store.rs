//! The in-memory expense collection.

use crate::{
    category::{Category, CategoryFilter},
    expense::{Expense, ExpenseId, NewExpense},
};

/// An ordered, in-memory collection of expenses.
///
/// Expenses are kept in insertion order. Identifiers come from a counter
/// owned by the store, so an identifier is never handed out twice, even after
/// the expense that held it has been removed.
#[derive(Debug, Clone)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
    next_id: ExpenseId,
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ExpenseStore {
    /// Create an empty store. The first expense added gets the ID 1.
    pub fn new() -> Self {
        Self {
            expenses: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a store holding the three sample expenses the app starts with
    /// in demo mode.
    pub fn with_demo_data() -> Self {
        let mut store = Self::new();

        for _ in 0..3 {
            store.add(NewExpense {
                description: "hello world".to_owned(),
                amount: 100.0,
                category: Category::Utilities,
            });
        }

        store
    }

    /// Append `expense` to the store and return the stored record.
    pub fn add(&mut self, expense: NewExpense) -> &Expense {
        let id = self.next_id;
        self.next_id += 1;

        self.expenses.push(Expense {
            id,
            description: expense.description,
            amount: expense.amount,
            category: expense.category,
        });

        // Just pushed, so the vec cannot be empty.
        &self.expenses[self.expenses.len() - 1]
    }

    /// Remove the expense with the ID `id`.
    ///
    /// Removing an ID that is not in the store does nothing and returns `None`.
    pub fn remove(&mut self, id: ExpenseId) -> Option<Expense> {
        let index = self.expenses.iter().position(|expense| expense.id == id)?;

        Some(self.expenses.remove(index))
    }

    /// The expenses that pass `filter`, in insertion order.
    pub fn filter(&self, filter: CategoryFilter) -> Vec<&Expense> {
        self.expenses
            .iter()
            .filter(|expense| filter.matches(expense.category))
            .collect()
    }

    /// Get the expense with the ID `id`.
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.expenses.iter().find(|expense| expense.id == id)
    }

    /// Every expense in insertion order.
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    /// The number of expenses in the store.
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    /// Whether the store holds no expenses.
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

/// The sum of the amounts of `expenses`.
pub fn total<'a>(expenses: impl IntoIterator<Item = &'a Expense>) -> f64 {
    expenses.into_iter().map(|expense| expense.amount).sum()
}
