use chrono::NaiveDateTime;
use num_traits::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Description used when nothing could be extracted from the utterance.
pub const DEFAULT_DESCRIPTION: &str = "Transaction";

/// Direction of money movement, derived from the classification step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Expense,
    Income,
}

impl CategoryKind {
    /// Category name used when inference finds no taxonomy match.
    pub fn fallback_category(&self) -> &'static str {
        match self {
            CategoryKind::Expense => "Uncategorized",
            CategoryKind::Income => "Income",
        }
    }
}

/// Structured result of parsing one natural-language utterance.
///
/// Every field has a defined fallback, so a value of this type exists for
/// any input, including the empty string. An `amount` of zero means no
/// amount was found; callers should treat such a parse as incomplete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedTransaction {
    pub description: String,
    pub amount: Decimal,
    pub kind: CategoryKind,
    pub category: String,
    /// Resolved to the start of a calendar day; serializes as an ISO-8601
    /// timestamp (`2024-03-15T00:00:00`).
    pub date: NaiveDateTime,
}

impl ParsedTransaction {
    /// True when the amount step found a number in the text.
    pub fn has_amount(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// True when the amount is missing or the description fell back to
    /// [`DEFAULT_DESCRIPTION`]. Callers typically ask the user to confirm
    /// before persisting such a parse.
    pub fn is_low_confidence(&self) -> bool {
        !self.has_amount() || self.description == DEFAULT_DESCRIPTION
    }

    /// Amount as `f64`, for chart-oriented consumers.
    pub fn amount_f64(&self) -> f64 {
        self.amount.to_f64().unwrap_or(0.0)
    }
}
