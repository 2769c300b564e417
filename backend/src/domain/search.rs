//! Predicates for the conjunctive search filters.
//!
//! Every predicate is skipped (matches) when its input is missing or blank.

use shared::end_of_day_bound;

/// `Some` only for input that actually filters something.
///
/// Whitespace decides emptiness only; the value is returned untouched.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Case-insensitive substring match on the keyword exactly as typed
pub fn matches_keyword(haystack: &str, keyword: Option<&str>) -> bool {
    match non_blank(keyword) {
        Some(keyword) => haystack.to_lowercase().contains(&keyword.to_lowercase()),
        None => true,
    }
}

/// Case-insensitive whole-value match, ignoring surrounding whitespace
pub fn matches_exact(value: &str, expected: Option<&str>) -> bool {
    match non_blank(expected) {
        Some(expected) => value.trim().to_lowercase() == expected.trim().to_lowercase(),
        None => true,
    }
}

/// Inclusive date range over stored timestamps.
///
/// Comparison is lexicographic on "YYYY-MM-DD HH:MM:SS" strings. The end day
/// is widened to "end 23:59:59" so records from that whole day are kept.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DateRange {
    start: Option<String>,
    end_bound: Option<String>,
}

impl DateRange {
    pub fn new(start_date: Option<&str>, end_date: Option<&str>) -> Self {
        Self {
            start: non_blank(start_date).map(|d| d.trim().to_string()),
            end_bound: non_blank(end_date).map(|d| end_of_day_bound(d.trim())),
        }
    }

    pub fn contains(&self, date: &str) -> bool {
        if let Some(start) = &self.start {
            if date < start.as_str() {
                return false;
            }
        }
        if let Some(end_bound) = &self.end_bound {
            if date > end_bound.as_str() {
                return false;
            }
        }
        true
    }
}
