use chrono::{Days, Months, NaiveDateTime, NaiveTime};

/// Resolve the transaction date from relative-date keywords.
///
/// Keyword precedence is fixed and first-match-wins: "yesterday", then
/// "today", then "last week", then "last month". The result is always the
/// start of a calendar day; with no keyword, the start of `now`'s day.
/// Month subtraction is calendar-aware (chrono clamps month ends).
pub(crate) fn resolve(lower: &str, now: NaiveDateTime) -> NaiveDateTime {
    let start = now.date().and_time(NaiveTime::MIN);

    if lower.contains("yesterday") {
        start.checked_sub_days(Days::new(1)).unwrap_or(start)
    } else if lower.contains("today") {
        start
    } else if lower.contains("last week") {
        start.checked_sub_days(Days::new(7)).unwrap_or(start)
    } else if lower.contains("last month") {
        start.checked_sub_months(Months::new(1)).unwrap_or(start)
    } else {
        start
    }
}
