//! Parse natural-language spending notes into structured transactions.
//!
//! ```rust,ignore
//! use transaction_text_rs::parse;
//!
//! let parsed = parse("Spent ₦5000 on groceries yesterday", clock.now());
//! assert_eq!(parsed.category, "Groceries");
//! ```

mod builder;
mod quick_add;
mod types;

pub mod errors;
pub mod parser;
pub mod stores;
pub mod taxonomy;

pub use builder::ParserBuilder;
pub use parser::{TextParser, parse};
pub use quick_add::{QuickAdd, RecordedTransaction};
pub use taxonomy::{CategoryTaxonomy, DEFAULT_EXPENSE_CATEGORIES, DEFAULT_INCOME_CATEGORIES};
pub use types::{CategoryKind, DEFAULT_DESCRIPTION, ParsedTransaction};
