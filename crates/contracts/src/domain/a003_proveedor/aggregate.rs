use crate::domain::common::numeric_id;
use crate::shared::list_view::{FieldValue, ListConfig, ListRecord, SortSpec};
use crate::shared::validation::ValidationError;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

numeric_id!(
    /// Identificador de proveedor
    ProveedorId
);

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Proveedor {
    pub id_proveedor: ProveedorId,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub nit: String,
    #[serde(default)]
    pub telefono: Option<String>,
}

impl Proveedor {
    pub fn list_config() -> ListConfig {
        ListConfig::new(&["nombre", "nit"], SortSpec::asc("nombre"))
    }

    /// Label for select boxes: "Farmacorp (NIT 900123)".
    pub fn option_label(&self) -> String {
        if self.nit.is_empty() {
            self.nombre.clone()
        } else {
            format!("{} (NIT {})", self.nombre, self.nit)
        }
    }
}

impl ListRecord for Proveedor {
    type Id = ProveedorId;

    fn record_id(&self) -> ProveedorId {
        self.id_proveedor
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "id_proveedor" => FieldValue::int(self.id_proveedor.value()),
            "nombre" => FieldValue::text(self.nombre.as_str()),
            "nit" => FieldValue::text(self.nit.as_str()),
            "telefono" => FieldValue::opt_text(self.telefono.as_deref()),
            _ => FieldValue::Missing,
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

pub const CAMPOS_REQUERIDOS: &str = "Por favor completa todos los campos requeridos";

/// Body of `POST /proveedores/` and `PUT /proveedores/{id}`; doubles as modal state.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProveedorDto {
    pub nombre: String,
    pub nit: String,
    pub telefono: String,
}

impl ProveedorDto {
    pub fn from_proveedor(p: &Proveedor) -> Self {
        Self {
            nombre: p.nombre.clone(),
            nit: p.nit.clone(),
            telefono: p.telefono.clone().unwrap_or_default(),
        }
    }

    /// nombre and nit are required; a single banner message is reported for both.
    pub fn validate(&self) -> Result<ProveedorDto, ValidationError> {
        let mut errors = ValidationError::new();
        if self.nombre.trim().is_empty() || self.nit.trim().is_empty() {
            errors.push("nombre", CAMPOS_REQUERIDOS);
        }
        errors.into_result()?;
        Ok(ProveedorDto {
            nombre: self.nombre.trim().to_string(),
            nit: self.nit.trim().to_string(),
            telefono: self.telefono.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn telefono_is_optional_on_the_wire() {
        let p: Proveedor =
            serde_json::from_str(r#"{"id_proveedor": 2, "nombre": "Farmacorp", "nit": "900123"}"#).unwrap();
        assert!(p.field_value("telefono").is_missing());
        assert_eq!(p.option_label(), "Farmacorp (NIT 900123)");
        assert_eq!(ProveedorDto::from_proveedor(&p).telefono, "");
    }

    #[test]
    fn nombre_and_nit_are_required() {
        let dto = ProveedorDto {
            nombre: "Distribuidora Andina".into(),
            nit: "  ".into(),
            telefono: String::new(),
        };
        assert_eq!(dto.validate().unwrap_err().to_string(), CAMPOS_REQUERIDOS);

        let ok = ProveedorDto { nit: " 811-2 ".into(), ..dto }.validate().unwrap();
        assert_eq!(ok.nit, "811-2");
    }
}
