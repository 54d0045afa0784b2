use super::query::ListRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == SortDirection::Asc
    }
}

/// The single active sort column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    pub field: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Header click: same column flips direction, another column starts ascending.
    pub fn toggle(&mut self, field: &str) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field.to_string();
            self.direction = SortDirection::Asc;
        }
    }

    pub fn compare<T: ListRecord>(&self, a: &T, b: &T) -> Ordering {
        let cmp = a
            .field_value(&self.field)
            .compare(&b.field_value(&self.field));
        match self.direction {
            SortDirection::Asc => cmp,
            SortDirection::Desc => cmp.reverse(),
        }
    }
}

/// Stable sort: records with equal keys keep their relative order.
pub fn sort_records<T: ListRecord>(records: &mut [T], spec: &SortSpec) {
    records.sort_by(|a, b| spec.compare(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_same_field_flips_direction() {
        let mut spec = SortSpec::asc("nombre");
        spec.toggle("nombre");
        assert_eq!(spec.direction, SortDirection::Desc);
        spec.toggle("nombre");
        assert_eq!(spec.direction, SortDirection::Asc);
    }

    #[test]
    fn toggle_new_field_resets_to_ascending() {
        let mut spec = SortSpec::asc("nombre");
        spec.toggle("nombre");
        spec.toggle("tipo");
        assert_eq!(spec, SortSpec::asc("tipo"));
    }
}
