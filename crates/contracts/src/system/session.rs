//! Client-side session stub: the login payload kept in local storage and the
//! header identity derived from it. Nothing here is verified by the server.

use crate::shared::validation::ValidationError;
use serde::{Deserialize, Serialize};

/// Local-storage key holding the JSON user object.
pub const STORAGE_KEY: &str = "user";
/// Role written by the login form.
pub const LOGIN_ROLE: &str = "Administrador";
pub const LOGIN_DELAY_MS: u32 = 1_000;
pub const MIN_PASSWORD_LEN: usize = 6;

/// Payload as stored by the login form (or by older builds that stored more keys).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StoredUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

impl StoredUser {
    pub fn from_login(username: &str) -> Self {
        let name = match username.trim() {
            "" => "Usuario Demo".to_string(),
            u => u.to_string(),
        };
        Self {
            name: Some(name),
            role: Some(LOGIN_ROLE.to_string()),
            ..Default::default()
        }
    }
}

/// Identity shown in the header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub name: String,
    pub role: String,
    pub initials: String,
}

impl Default for SessionUser {
    fn default() -> Self {
        Self {
            name: "Usuario".to_string(),
            role: "Sin rol asignado".to_string(),
            initials: "U".to_string(),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

impl SessionUser {
    pub fn from_stored(stored: Option<&StoredUser>) -> Self {
        let Some(stored) = stored else {
            return Self::default();
        };
        let name = non_blank(&stored.username)
            .or_else(|| non_blank(&stored.name))
            .or_else(|| non_blank(&stored.email))
            .unwrap_or("Usuario")
            .to_string();
        let role = non_blank(&stored.role)
            .unwrap_or("Usuario del sistema")
            .to_string();
        let initials = initials_for(&name);
        Self { name, role, initials }
    }
}

/// "juan.perez@farma.co" -> "JP"; "maria" -> "M".
pub fn initials_for(name: &str) -> String {
    match name.split_once('@') {
        Some((local, _)) => local
            .split(['.', '_', '-'])
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect(),
        None => name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_default(),
    }
}

// ============================================================================
// Login form
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = ValidationError::new();
        if self.username.trim().is_empty() {
            errors.push("username", "El usuario es requerido");
        }
        if self.password.is_empty() {
            errors.push("password", "La contraseña es requerida");
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            errors.push("password", "La contraseña debe tener al menos 6 caracteres");
        }
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nothing_stored_gives_placeholder_identity() {
        let user = SessionUser::from_stored(None);
        assert_eq!(user, SessionUser::default());
        assert_eq!((user.name.as_str(), user.role.as_str(), user.initials.as_str()), ("Usuario", "Sin rol asignado", "U"));
    }

    #[test]
    fn name_falls_back_through_username_name_email() {
        let stored: StoredUser = serde_json::from_str(r#"{"email": "juan.perez@farma.co"}"#).unwrap();
        let user = SessionUser::from_stored(Some(&stored));
        assert_eq!(user.name, "juan.perez@farma.co");
        assert_eq!(user.role, "Usuario del sistema");
        assert_eq!(user.initials, "JP");

        let stored: StoredUser =
            serde_json::from_str(r#"{"username": "maria", "name": "María", "role": "Regente"}"#).unwrap();
        let user = SessionUser::from_stored(Some(&stored));
        assert_eq!((user.name.as_str(), user.initials.as_str()), ("maria", "M"));
        assert_eq!(user.role, "Regente");
    }

    #[test]
    fn email_initials_are_capped_at_two() {
        assert_eq!(initials_for("ana_maria-lopez@x.org"), "AM");
        assert_eq!(initials_for("x@y"), "X");
        assert_eq!(initials_for(""), "");
    }

    #[test]
    fn login_payload_shape() {
        let json = serde_json::to_value(StoredUser::from_login("jrojas")).unwrap();
        assert_eq!(json, serde_json::json!({"name": "jrojas", "role": "Administrador"}));
    }

    #[test]
    fn login_validation_messages() {
        let err = LoginForm::default().validate().unwrap_err();
        assert_eq!(err.field("username"), Some("El usuario es requerido"));
        assert_eq!(err.field("password"), Some("La contraseña es requerida"));

        let short = LoginForm { username: "admin".into(), password: "12345".into() };
        assert_eq!(
            short.validate().unwrap_err().field("password"),
            Some("La contraseña debe tener al menos 6 caracteres")
        );
        assert!(LoginForm { username: "admin".into(), password: "123456".into() }.validate().is_ok());
    }
}
