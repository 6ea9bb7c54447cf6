//! Loose date parsing for statement tokens.
//!
//! Continuation-row detection hinges on "does this token look like a date",
//! so the accepted formats live in one place and are pinned by tests. The
//! predicate is deliberately loose: a bare 4-digit number is treated as a
//! year and therefore counts as a date, which matches how upstream rows are
//! classified even though it can misfire on numeric tokens.

use chrono::NaiveDate;

/// Formats accepted for statement date tokens, tried in order.
const DATE_FORMATS: &[&str] = &[
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%Y-%m-%d",
    "%d %b %Y",
    "%d-%b-%Y",
    "%d %B %Y",
];

/// Parse a statement token as a date, if it matches any accepted format.
pub fn parse_loose_date(input: &str) -> Option<NaiveDate> {
    let s = input.trim();
    if s.is_empty() {
        return None;
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, fmt) {
            return Some(date);
        }
    }

    // Bare year, e.g. "2024". Inherited misclassification: numeric tokens of
    // this shape are treated as dates.
    if s.len() == 4 && s.chars().all(|c| c.is_ascii_digit()) {
        let year: i32 = s.parse().ok()?;
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }

    None
}

/// Whether a table token reads as a date. Rows whose first token fails this
/// test are continuation rows.
pub fn is_date_string(input: &str) -> bool {
    parse_loose_date(input).is_some()
}
