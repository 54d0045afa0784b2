//! Search term and categorical filters.

use super::field::FieldValue;
use serde::{Deserialize, Serialize};

/// A row that can be shown in a list view.
pub trait ListRecord: Clone {
    type Id: PartialEq + Clone + std::fmt::Debug;

    fn record_id(&self) -> Self::Id;

    /// Returns the named field. Unknown fields yield `FieldValue::Missing`.
    fn field_value(&self, field: &str) -> FieldValue;
}

/// Selection of a categorical filter. `All` disables the filter.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FilterSelection {
    #[default]
    All,
    Value(String),
}

impl FilterSelection {
    /// Maps the select-box value to a selection; "", "todos" and "todas" mean no filter.
    pub fn from_option(value: &str) -> Self {
        let trimmed = value.trim();
        match trimmed.to_lowercase().as_str() {
            "" | "todos" | "todas" => FilterSelection::All,
            _ => FilterSelection::Value(trimmed.to_string()),
        }
    }

    pub fn as_option(&self) -> String {
        match self {
            FilterSelection::All => String::new(),
            FilterSelection::Value(v) => v.clone(),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FilterSelection::All)
    }

    pub fn accepts(&self, value: &FieldValue) -> bool {
        match self {
            FilterSelection::All => true,
            FilterSelection::Value(expected) => !value.is_missing() && value.display() == *expected,
        }
    }
}

/// Case-insensitive substring match of `term` against any of `fields`.
/// An empty (or blank) term matches everything.
pub fn matches_search<T: ListRecord>(record: &T, fields: &[&str], term: &str) -> bool {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    fields
        .iter()
        .any(|field| record.field_value(field).search_text().contains(&needle))
}

/// Distinct non-missing values of `field`, ordered with the field comparator.
pub fn distinct_values<'a, T, I>(records: I, field: &str) -> Vec<String>
where
    T: ListRecord + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut values: Vec<FieldValue> = records
        .into_iter()
        .map(|r| r.field_value(field))
        .filter(|v| !v.is_missing())
        .collect();
    values.sort_by(|a, b| a.compare(b));
    let mut out: Vec<String> = Vec::with_capacity(values.len());
    for v in values {
        let shown = v.display();
        if !out.contains(&shown) {
            out.push(shown);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinels_map_to_all() {
        assert_eq!(FilterSelection::from_option("TODOS"), FilterSelection::All);
        assert_eq!(FilterSelection::from_option("todas"), FilterSelection::All);
        assert_eq!(FilterSelection::from_option(""), FilterSelection::All);
        assert_eq!(
            FilterSelection::from_option("INSUMO"),
            FilterSelection::Value("INSUMO".into())
        );
    }

    #[test]
    fn value_selection_is_exact_match() {
        let sel = FilterSelection::Value("INSUMO".into());
        assert!(sel.accepts(&FieldValue::text("INSUMO")));
        assert!(!sel.accepts(&FieldValue::text("insumo")));
        assert!(!sel.accepts(&FieldValue::Missing));
        assert!(FilterSelection::All.accepts(&FieldValue::Missing));
    }
}
