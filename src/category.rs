//! The fixed set of expense categories and the category filter.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

/// The name of the filter option that matches every expense.
pub const ALL_CATEGORIES: &str = "All Categories";

/// A category that an expense can be recorded under.
///
/// The "All Categories" filter option is deliberately not a variant: it only
/// makes sense when filtering and an expense can never belong to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Power, water, internet and other bills.
    Utilities,
    /// Food and household supplies.
    Groceries,
    /// Going out, subscriptions and hobbies.
    Entertainment,
}

impl Category {
    /// Every category an expense can be recorded under, in display order.
    pub const ALL: [Category; 3] = [
        Category::Utilities,
        Category::Groceries,
        Category::Entertainment,
    ];

    /// The display name of the category.
    pub fn name(self) -> &'static str {
        match self {
            Category::Utilities => "Utilities",
            Category::Groceries => "Groceries",
            Category::Entertainment => "Entertainment",
        }
    }
}

/// The string did not name one of the expense categories.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("\"{0}\" is not an expense category")]
pub struct InvalidCategory(pub String);

impl FromStr for Category {
    type Err = InvalidCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.name() == s)
            .ok_or_else(|| InvalidCategory(s.to_owned()))
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The category selected in the expense list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every expense.
    #[default]
    All,
    /// Show only the expenses recorded under the given category.
    Only(Category),
}

impl CategoryFilter {
    /// Parse the value of the filter select.
    ///
    /// Anything that is not a category name, including [ALL_CATEGORIES] and
    /// the empty string, selects every expense.
    pub fn from_name(name: &str) -> Self {
        match name.parse() {
            Ok(category) => CategoryFilter::Only(category),
            Err(_) => CategoryFilter::All,
        }
    }

    /// Whether an expense in `category` passes the filter.
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    /// The value of the filter select option for this filter.
    pub fn name(self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(category) => category.name(),
        }
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// An entry in the static category list shown in the filter select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryOption {
    pub id: u8,
    pub name: &'static str,
}

/// The options for the filter select, starting with [ALL_CATEGORIES].
pub const CATEGORY_OPTIONS: [CategoryOption; 4] = [
    CategoryOption {
        id: 1,
        name: ALL_CATEGORIES,
    },
    CategoryOption {
        id: 2,
        name: "Utilities",
    },
    CategoryOption {
        id: 3,
        name: "Groceries",
    },
    CategoryOption {
        id: 4,
        name: "Entertainment",
    },
];
