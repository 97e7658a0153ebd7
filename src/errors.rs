use thiserror::Error;

/// Errors raised while building a [`TextParser`](crate::TextParser).
#[derive(Error, Debug)]
pub enum ParserBuildError {
    /// Both taxonomy lists are empty, so category inference could never
    /// resolve anything but the fallback names.
    #[error("category taxonomy has no entries")]
    EmptyTaxonomy,

    /// The amount pattern assembled from custom currency symbols did not
    /// compile.
    #[error("invalid amount pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Errors surfaced by category and transaction store collaborators.
///
/// The in-memory stores shipped with this crate never fail; these variants
/// exist for application-backed implementations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing service rejected or failed the operation.
    #[error("store backend error: {0}")]
    Backend(String),

    /// A referenced record does not exist in the store.
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },
}

/// Errors from the quick-add flow: parse, ensure category, persist.
#[derive(Error, Debug)]
pub enum QuickAddError {
    /// The parser found no amount, so the transaction would be incomplete.
    /// The offending utterance is carried for the caller's error message.
    #[error("no amount found in \"{text}\"")]
    AmountMissing { text: String },

    /// A collaborator store failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl QuickAddError {
    /// True for the low-confidence rejection, the case worth a user prompt
    /// rather than an error page.
    pub fn is_amount_missing(&self) -> bool {
        matches!(self, Self::AmountMissing { .. })
    }
}

/// Alias for results of the quick-add flow.
pub type QuickAddResult<T> = Result<T, QuickAddError>;
