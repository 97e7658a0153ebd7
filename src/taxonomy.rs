use serde::{Deserialize, Serialize};

use crate::types::CategoryKind;

/// Built-in expense categories, in inference order.
///
/// "Food" precedes "Restaurant" on purpose: an utterance mentioning both
/// ("restaurant food") resolves to Food.
pub const DEFAULT_EXPENSE_CATEGORIES: [&str; 15] = [
    "Food",
    "Restaurant",
    "Groceries",
    "Transport",
    "Rent",
    "Utilities",
    "Airtime",
    "Data",
    "Entertainment",
    "Shopping",
    "Health",
    "Education",
    "Gift",
    "Travel",
    "Subscription",
];

/// Built-in income categories, in inference order.
pub const DEFAULT_INCOME_CATEGORIES: [&str; 7] = [
    "Salary",
    "Freelance",
    "Business",
    "Investment",
    "Allowance",
    "Gift",
    "Refund",
];

/// The two ordered category lists, one per [`CategoryKind`].
///
/// Lists are sequences, not sets: inference scans front to back and stops
/// at the first match, so earlier entries shadow later ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTaxonomy {
    expense: Vec<String>,
    income: Vec<String>,
}

impl Default for CategoryTaxonomy {
    fn default() -> Self {
        Self {
            expense: DEFAULT_EXPENSE_CATEGORIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            income: DEFAULT_INCOME_CATEGORIES
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl CategoryTaxonomy {
    /// Build a taxonomy from custom ordered lists.
    pub fn new(
        expense: impl IntoIterator<Item = impl Into<String>>,
        income: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            expense: expense.into_iter().map(Into::into).collect(),
            income: income.into_iter().map(Into::into).collect(),
        }
    }

    /// The ordered list for one kind.
    pub fn list(&self, kind: CategoryKind) -> &[String] {
        match kind {
            CategoryKind::Expense => &self.expense,
            CategoryKind::Income => &self.income,
        }
    }

    /// True when both lists are empty.
    pub fn is_empty(&self) -> bool {
        self.expense.is_empty() && self.income.is_empty()
    }
}
