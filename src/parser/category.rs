use super::description::keyword_bucket;
use crate::taxonomy::CategoryTaxonomy;
use crate::types::CategoryKind;

/// Infer the category name for an utterance.
///
/// Scans the kind's ordered list front to back; the first category whose
/// lowercased name is a substring of the utterance, or equals the derived
/// description case-insensitively, wins. With no list match, the shared
/// keyword buckets get a second chance before the kind's fallback name.
pub(crate) fn infer(
    taxonomy: &CategoryTaxonomy,
    kind: CategoryKind,
    lower: &str,
    description: &str,
) -> String {
    for name in taxonomy.list(kind) {
        if lower.contains(&name.to_lowercase()) || description.eq_ignore_ascii_case(name) {
            return name.clone();
        }
    }

    match keyword_bucket(lower) {
        Some(bucket) => bucket.to_string(),
        None => kind.fallback_category().to_string(),
    }
}
