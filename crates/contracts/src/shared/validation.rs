use thiserror::Error;

/// Client-side form validation failure, one message per offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", join_messages(.fields))]
pub struct ValidationError {
    pub fields: Vec<(&'static str, String)>,
}

impl ValidationError {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.push((field, message.into()));
    }

    pub fn field(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn messages(&self) -> Vec<String> {
        self.fields.iter().map(|(_, m)| m.clone()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// `Ok(())` when nothing was pushed.
    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl Default for ValidationError {
    fn default() -> Self {
        Self::new()
    }
}

fn join_messages(fields: &[(&'static str, String)]) -> String {
    fields
        .iter()
        .map(|(_, m)| m.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Pushes `message` when `value` is blank.
pub fn require(errors: &mut ValidationError, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        errors.push(field, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_messages_per_field() {
        let mut errors = ValidationError::new();
        require(&mut errors, "nombre", "  ", "El nombre es requerido");
        require(&mut errors, "nit", "900123", "El NIT es requerido");
        assert_eq!(errors.field("nombre"), Some("El nombre es requerido"));
        assert_eq!(errors.field("nit"), None);
        assert_eq!(errors.to_string(), "El nombre es requerido");
        assert!(errors.into_result().is_err());
    }
}
