use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Currency symbols recognized ahead of an amount by default.
pub(crate) const DEFAULT_CURRENCY_SYMBOLS: [char; 2] = ['₦', '$'];

/// Leftmost amount found in an utterance.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AmountMatch {
    pub value: Decimal,
    /// Byte offset one past the matched token, into the lowercased
    /// utterance. Description extraction scans from here.
    pub end: usize,
}

/// Assemble the amount pattern for a set of currency symbols.
///
/// Shape: optional currency symbol, optional whitespace, digits with at
/// most one comma-or-dot separator group. The single separator group is a
/// known limitation: against `1,000,000` the match is `1,000`, so the
/// parsed amount is 1000.
pub(crate) fn amount_pattern(symbols: &[char]) -> String {
    if symbols.is_empty() {
        return r"(?P<num>\d+(?:[.,]\d+)?)".to_string();
    }

    let class: String = symbols
        .iter()
        .map(|sym| regex::escape(&sym.to_string()))
        .collect();
    format!(r"(?:[{class}]\s*)?(?P<num>\d+(?:[.,]\d+)?)")
}

/// Extract the leftmost amount from the lowercased utterance.
///
/// The first comma in the matched number is stripped; a dot is kept as the
/// decimal point.
pub(crate) fn extract(lower: &str, pattern: &Regex) -> Option<AmountMatch> {
    let caps = pattern.captures(lower)?;
    let whole = caps.get(0)?;
    let num = caps.name("num")?;

    let cleaned = num.as_str().replacen(',', "", 1);
    let value = Decimal::from_str(&cleaned).unwrap_or(Decimal::ZERO);

    Some(AmountMatch {
        value,
        end: whole.end(),
    })
}
