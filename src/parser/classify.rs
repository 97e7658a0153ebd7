use crate::types::CategoryKind;

/// Keywords that reclassify an utterance as income.
pub(crate) const INCOME_SIGNALS: [&str; 3] = ["earned", "received", "income"];

/// Classify an utterance as expense or income.
///
/// Expense is the default; any income signal flips it. Matching is plain
/// substring search on the lowercased text, with no word boundaries.
pub(crate) fn classify(lower: &str) -> CategoryKind {
    if INCOME_SIGNALS.iter().any(|signal| lower.contains(signal)) {
        CategoryKind::Income
    } else {
        CategoryKind::Expense
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("spent 5000 on food")]
    #[case("bought airtime for 200")]
    #[case("paid the rent yesterday")]
    #[case("")]
    #[case("gave 1000 to my brother")]
    fn test_defaults_to_expense(#[case] lower: &str) {
        assert_eq!(classify(lower), CategoryKind::Expense);
    }

    #[rstest]
    #[case("earned 20000 from freelance work")]
    #[case("received 250000 as salary")]
    #[case("other income this month 5000")]
    fn test_income_signals(#[case] lower: &str) {
        assert_eq!(classify(lower), CategoryKind::Income);
    }

    #[test]
    fn test_signal_matches_inside_words() {
        // No word boundaries: "unreceived" still carries "received".
        assert_eq!(classify("unreceived invoice 4000"), CategoryKind::Income);
    }
}
