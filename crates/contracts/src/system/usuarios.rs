use crate::domain::common::numeric_id;
use crate::shared::list_view::{FieldValue, ListConfig, ListRecord, SortSpec};
use serde::{Deserialize, Serialize};

numeric_id!(
    /// Identificador de usuario del sistema
    UsuarioId
);

/// User row from `GET /usuarios/`. Only `id_usuario` and `nombre` are guaranteed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Usuario {
    pub id_usuario: UsuarioId,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub rol: Option<String>,
}

impl Usuario {
    pub fn list_config() -> ListConfig {
        ListConfig::new(&["nombre", "username", "email"], SortSpec::asc("nombre")).with_filters(&["rol"])
    }
}

impl ListRecord for Usuario {
    type Id = UsuarioId;

    fn record_id(&self) -> UsuarioId {
        self.id_usuario
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "id_usuario" => FieldValue::int(self.id_usuario.value()),
            "nombre" => FieldValue::text(self.nombre.as_str()),
            "username" => FieldValue::opt_text(self.username.as_deref()),
            "email" => FieldValue::opt_text(self.email.as_deref()),
            "rol" => FieldValue::opt_text(self.rol.as_deref()),
            _ => FieldValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_row_deserializes() {
        let u: Usuario = serde_json::from_str(r#"{"id_usuario": 1, "nombre": "Ana Gómez"}"#).unwrap();
        assert_eq!(u.id_usuario, UsuarioId(1));
        assert!(u.field_value("email").is_missing());
    }
}
