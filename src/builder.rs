use regex::Regex;

use crate::parser::amount::{DEFAULT_CURRENCY_SYMBOLS, amount_pattern};
use crate::{errors::ParserBuildError, parser::TextParser, taxonomy::CategoryTaxonomy};

/// Fluent configuration for a [`TextParser`].
///
/// Every knob is optional; `build` falls back to the default taxonomy and
/// currency symbols for anything left unset.
#[derive(Default)]
pub struct ParserBuilder {
    taxonomy: Option<CategoryTaxonomy>,
    currency_symbols: Option<Vec<char>>,
}

impl ParserBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the default category taxonomy.
    pub fn taxonomy(mut self, taxonomy: CategoryTaxonomy) -> Self {
        self.taxonomy = Some(taxonomy);
        self
    }

    /// Replace the currency symbols recognized ahead of an amount.
    ///
    /// Symbols only ever widen the match: a bare number is accepted with or
    /// without them.
    pub fn currency_symbols(mut self, symbols: &[char]) -> Self {
        self.currency_symbols = Some(symbols.to_vec());
        self
    }

    pub fn build(self) -> Result<TextParser, ParserBuildError> {
        let taxonomy = self.taxonomy.unwrap_or_default();
        if taxonomy.is_empty() {
            return Err(ParserBuildError::EmptyTaxonomy);
        }

        let symbols = self
            .currency_symbols
            .unwrap_or_else(|| DEFAULT_CURRENCY_SYMBOLS.to_vec());
        let amount_re = Regex::new(&amount_pattern(&symbols))?;

        Ok(TextParser::with_parts(taxonomy, amount_re))
    }
}
