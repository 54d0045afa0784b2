//! Typed field values used by the list controller for searching, filtering and sorting.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::cmp::Ordering;

/// Placeholder rendered for absent values.
pub const EMPTY_DISPLAY: &str = "—";

/// A single record field, normalized for comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    /// Epoch milliseconds plus the original string for display.
    Date { millis: i64, raw: String },
    Bool(bool),
    Missing,
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.is_empty() {
            FieldValue::Missing
        } else {
            FieldValue::Text(value)
        }
    }

    pub fn opt_text(value: Option<&str>) -> Self {
        value.map(|v| FieldValue::text(v)).unwrap_or(FieldValue::Missing)
    }

    pub fn number(value: f64) -> Self {
        FieldValue::Number(value)
    }

    pub fn int(value: i64) -> Self {
        FieldValue::Number(value as f64)
    }

    pub fn opt_int(value: Option<i64>) -> Self {
        value.map(FieldValue::int).unwrap_or(FieldValue::Missing)
    }

    pub fn opt_number(value: Option<f64>) -> Self {
        value.map(FieldValue::Number).unwrap_or(FieldValue::Missing)
    }

    /// Parses a date string into epoch millis. Falls back to `Text` when the
    /// format is not recognized so the value is still searchable.
    pub fn date(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return FieldValue::Missing;
        }
        match parse_epoch_millis(trimmed) {
            Some(millis) => FieldValue::Date {
                millis,
                raw: trimmed.to_string(),
            },
            None => FieldValue::Text(trimmed.to_string()),
        }
    }

    pub fn opt_date(value: Option<&str>) -> Self {
        value.map(FieldValue::date).unwrap_or(FieldValue::Missing)
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FieldValue::Missing)
    }

    /// Lowercased string used for substring search and equality filters.
    pub fn search_text(&self) -> String {
        match self {
            FieldValue::Missing => String::new(),
            other => other.display().to_lowercase(),
        }
    }

    /// String as shown in a table cell.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Number(n) => format_number(*n),
            FieldValue::Date { raw, .. } => raw.clone(),
            FieldValue::Bool(b) => b.to_string(),
            FieldValue::Missing => EMPTY_DISPLAY.to_string(),
        }
    }

    fn kind_rank(&self) -> u8 {
        match self {
            FieldValue::Number(_) => 0,
            FieldValue::Date { .. } => 1,
            FieldValue::Bool(_) => 2,
            FieldValue::Text(_) => 3,
            FieldValue::Missing => 4,
        }
    }

    /// Ascending order: numbers numerically, text case-folded, dates by epoch
    /// millis. `Missing` is greater than everything so it lands at the end.
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Date { millis: a, .. }, FieldValue::Date { millis: b, .. }) => a.cmp(b),
            (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            (FieldValue::Missing, FieldValue::Missing) => Ordering::Equal,
            (a, b) => a.kind_rank().cmp(&b.kind_rank()),
        }
    }
}

/// Integers print without a fractional part so `id_ubicacion = 3` matches the "3" filter option.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

pub(crate) fn parse_epoch_millis(value: &str) -> Option<i64> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.timestamp_millis());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt.and_utc().timestamp_millis());
        }
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_numerically_not_lexically() {
        assert_eq!(FieldValue::int(9).compare(&FieldValue::int(10)), Ordering::Less);
        assert_eq!(FieldValue::text("9").compare(&FieldValue::text("10")), Ordering::Greater);
    }

    #[test]
    fn text_comparison_ignores_case() {
        assert_eq!(
            FieldValue::text("amoxicilina").compare(&FieldValue::text("Amoxicilina")),
            Ordering::Equal
        );
        assert_eq!(FieldValue::text("b").compare(&FieldValue::text("A")), Ordering::Greater);
    }

    #[test]
    fn dates_are_parsed_to_epoch_millis() {
        assert_eq!(
            FieldValue::date("1970-01-02"),
            FieldValue::Date { millis: 86_400_000, raw: "1970-01-02".into() }
        );
        let a = FieldValue::date("2024-03-15T14:02:26Z");
        let b = FieldValue::date("2024-03-15T09:00:00");
        assert_eq!(a.compare(&b), Ordering::Greater);
    }

    #[test]
    fn unparsable_date_is_kept_as_text() {
        assert_eq!(FieldValue::date("mañana"), FieldValue::Text("mañana".into()));
        assert!(FieldValue::date("  ").is_missing());
    }

    #[test]
    fn missing_sorts_after_everything() {
        assert_eq!(FieldValue::Missing.compare(&FieldValue::text("z")), Ordering::Greater);
        assert_eq!(FieldValue::int(1).compare(&FieldValue::Missing), Ordering::Less);
    }

    #[test]
    fn display_uses_dash_for_missing_and_integers_without_decimals() {
        assert_eq!(FieldValue::Missing.display(), EMPTY_DISPLAY);
        assert_eq!(FieldValue::int(3).display(), "3");
        assert_eq!(FieldValue::number(2.5).display(), "2.5");
        assert_eq!(FieldValue::Missing.search_text(), "");
    }
}
