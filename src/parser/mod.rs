//! Natural-language parsing pipeline for spending notes.
//!
//! A parse runs five stages over a single lowercased copy of the
//! utterance: kind classification, amount extraction, description
//! derivation, category inference, and relative-date resolution. Every
//! stage has a fallback, so any input yields a transaction.

pub(crate) mod amount;
pub(crate) mod category;
pub(crate) mod classify;
pub(crate) mod date;
pub(crate) mod description;

use std::sync::LazyLock;

use chrono::NaiveDateTime;
use regex::Regex;
use rust_decimal::Decimal;

use crate::taxonomy::CategoryTaxonomy;
use crate::types::ParsedTransaction;

static DEFAULT_AMOUNT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&amount::amount_pattern(&amount::DEFAULT_CURRENCY_SYMBOLS))
        .expect("default amount pattern compiles")
});

/// Turns free-form spending notes into structured transactions.
///
/// Immutable once built; [`TextParser::parse`] borrows it shared, so one
/// instance can serve many callers concurrently.
#[derive(Debug, Clone)]
pub struct TextParser {
    taxonomy: CategoryTaxonomy,
    amount_re: Regex,
}

impl TextParser {
    /// Parser with the default taxonomy and currency symbols.
    pub fn new() -> Self {
        Self {
            taxonomy: CategoryTaxonomy::default(),
            amount_re: DEFAULT_AMOUNT_RE.clone(),
        }
    }

    pub(crate) fn with_parts(taxonomy: CategoryTaxonomy, amount_re: Regex) -> Self {
        Self {
            taxonomy,
            amount_re,
        }
    }

    /// The category taxonomy consulted during inference.
    pub fn taxonomy(&self) -> &CategoryTaxonomy {
        &self.taxonomy
    }

    /// Parse one utterance against the reference instant `now`.
    ///
    /// Never fails. Stages that find nothing fall back to a zero amount,
    /// the default description, the kind's fallback category name, and the
    /// start of `now`'s day.
    pub fn parse(&self, text: &str, now: NaiveDateTime) -> ParsedTransaction {
        let lower = text.to_lowercase();

        let kind = classify::classify(&lower);
        let amount = amount::extract(&lower, &self.amount_re);
        let description = description::extract(&lower, amount.as_ref().map(|found| found.end));
        let category = category::infer(&self.taxonomy, kind, &lower, &description);
        let date = date::resolve(&lower, now);

        ParsedTransaction {
            description,
            amount: amount.map(|found| found.value).unwrap_or(Decimal::ZERO),
            kind,
            category,
            date,
        }
    }

    /// Parse and convert into a caller-owned record type.
    pub fn parse_into<T>(&self, text: &str, now: NaiveDateTime) -> T
    where
        T: From<ParsedTransaction>,
    {
        self.parse(text, now).into()
    }
}

impl Default for TextParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse one utterance with a default parser.
pub fn parse(text: &str, now: NaiveDateTime) -> ParsedTransaction {
    TextParser::new().parse(text, now)
}
