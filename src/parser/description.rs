use crate::types::DEFAULT_DESCRIPTION;

/// Words skipped when scanning for a description word.
const STOP_WORDS: [&str; 12] = [
    "a", "an", "the", "as", "for", "on", "to", "at", "in", "my", "your", "their",
];

/// Keyword buckets that override generic extraction, scanned in order.
/// Category inference reuses them as its second-chance pass.
const BUCKETS: [(&[&str], &str); 3] = [
    (&["salary", "wage", "pay"], "Salary"),
    (&["food", "lunch", "dinner", "breakfast"], "Food"),
    (&["transport", "uber", "taxi", "fare"], "Transport"),
];

/// First bucket whose keywords appear in the lowercased utterance.
pub(crate) fn keyword_bucket(lower: &str) -> Option<&'static str> {
    BUCKETS
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|kw| lower.contains(kw)))
        .map(|(_, name)| *name)
}

/// Derive a description from the lowercased utterance.
///
/// Tried in order, stopping at the first success: the gift shortcut, the
/// words after the first "on" token, the words after the amount match (with
/// an optional "as"-split). A matching keyword bucket then overrides
/// whatever was derived; with nothing left, the generic
/// [`DEFAULT_DESCRIPTION`] applies. The first letter is always capitalized.
pub(crate) fn extract(lower: &str, amount_end: Option<usize>) -> String {
    let derived = gift(lower)
        .or_else(|| words_after_token(lower, "on").and_then(pick_word))
        .or_else(|| amount_end.and_then(|end| after_amount(lower, end)));

    let described = match keyword_bucket(lower) {
        Some(bucket) => bucket.to_string(),
        None => derived.unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
    };

    capitalize(&described)
}

fn gift(lower: &str) -> Option<String> {
    lower.contains("gift").then(|| "Gift".to_string())
}

/// Words following the first whitespace-delimited occurrence of `token`.
fn words_after_token<'a>(
    text: &'a str,
    token: &str,
) -> Option<impl Iterator<Item = &'a str>> {
    let mut words = text.split_whitespace();
    words.by_ref().find(|word| *word == token)?;
    Some(words)
}

/// Scan the text after the amount match; an " as " marker narrows the scan
/// to the words after it.
fn after_amount(lower: &str, end: usize) -> Option<String> {
    let rest = lower.get(end..)?;
    match rest.find(" as ") {
        Some(idx) => pick_word(rest[idx + 4..].split_whitespace()),
        None => pick_word(rest.split_whitespace()),
    }
}

/// First word longer than one character that is not a stop word, stripped
/// of trailing punctuation.
fn pick_word<'a>(words: impl Iterator<Item = &'a str>) -> Option<String> {
    for word in words {
        let word = word.trim_end_matches(|c: char| c.is_ascii_punctuation());
        if word.len() > 1 && !STOP_WORDS.contains(&word) {
            return Some(word.to_string());
        }
    }
    None
}

/// Uppercase the first letter, leaving the rest of the word untouched.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
