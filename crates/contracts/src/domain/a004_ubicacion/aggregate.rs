use crate::domain::common::numeric_id;
use crate::shared::list_view::{FieldValue, ListConfig, ListRecord, SortSpec};
use crate::shared::validation::{require, ValidationError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// ============================================================================
// ID Type
// ============================================================================

numeric_id!(
    /// Identificador de ubicación (bodega, farmacia, estante...)
    UbicacionId
);

// ============================================================================
// Record
// ============================================================================

pub const ESTADO_ACTIVO: &str = "activo";
pub const ESTADO_INACTIVO: &str = "inactivo";

fn default_activo() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ubicacion {
    pub id_ubicacion: UbicacionId,
    #[serde(default)]
    pub nombre: String,
    #[serde(default)]
    pub tipo: Option<String>,
    #[serde(default = "default_activo")]
    pub activo: bool,
}

impl Ubicacion {
    pub fn list_config() -> ListConfig {
        ListConfig::new(&["nombre", "tipo"], SortSpec::asc("id_ubicacion")).with_filters(&["tipo", "estado"])
    }

    /// Derived filter key: "activo" or "inactivo".
    pub fn estado(&self) -> &'static str {
        if self.activo {
            ESTADO_ACTIVO
        } else {
            ESTADO_INACTIVO
        }
    }
}

impl ListRecord for Ubicacion {
    type Id = UbicacionId;

    fn record_id(&self) -> UbicacionId {
        self.id_ubicacion
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "id_ubicacion" => FieldValue::int(self.id_ubicacion.value()),
            "nombre" => FieldValue::text(self.nombre.as_str()),
            "tipo" => FieldValue::opt_text(self.tipo.as_deref()),
            "activo" => FieldValue::Bool(self.activo),
            "estado" => FieldValue::text(self.estado()),
            _ => FieldValue::Missing,
        }
    }
}

/// Summary cards on top of the locations page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UbicacionStats {
    pub total: usize,
    pub activos: usize,
    pub inactivos: usize,
    pub tipos: usize,
}

impl UbicacionStats {
    pub fn compute(rows: &[Ubicacion]) -> Self {
        let activos = rows.iter().filter(|u| u.activo).count();
        let tipos: BTreeSet<&str> = rows.iter().filter_map(|u| u.tipo.as_deref()).collect();
        Self {
            total: rows.len(),
            activos,
            inactivos: rows.len() - activos,
            tipos: tipos.len(),
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Body of `POST /ubicaciones/` and `PUT /ubicaciones/{id}`; doubles as modal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UbicacionDto {
    pub nombre: String,
    pub tipo: String,
    pub activo: bool,
}

impl Default for UbicacionDto {
    fn default() -> Self {
        Self {
            nombre: String::new(),
            tipo: String::new(),
            activo: true,
        }
    }
}

impl UbicacionDto {
    pub fn from_ubicacion(u: &Ubicacion) -> Self {
        Self {
            nombre: u.nombre.clone(),
            tipo: u.tipo.clone().unwrap_or_default(),
            activo: u.activo,
        }
    }

    pub fn validate(&self) -> Result<UbicacionDto, ValidationError> {
        let mut errors = ValidationError::new();
        require(&mut errors, "nombre", &self.nombre, "El nombre es requerido");
        require(&mut errors, "tipo", &self.tipo, "El tipo es requerido");
        errors.into_result()?;
        Ok(UbicacionDto {
            nombre: self.nombre.trim().to_string(),
            tipo: self.tipo.trim().to_string(),
            activo: self.activo,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{FilterSelection, ListState};

    fn ubicacion(id: i64, nombre: &str, tipo: Option<&str>, activo: bool) -> Ubicacion {
        Ubicacion {
            id_ubicacion: UbicacionId(id),
            nombre: nombre.into(),
            tipo: tipo.map(Into::into),
            activo,
        }
    }

    fn sample() -> Vec<Ubicacion> {
        vec![
            ubicacion(3, "Bodega central", Some("BODEGA"), true),
            ubicacion(1, "Farmacia piso 1", Some("FARMACIA"), true),
            ubicacion(2, "Bodega norte", Some("BODEGA"), false),
            ubicacion(4, "Sin clasificar", None, true),
        ]
    }

    #[test]
    fn stats_count_activos_and_distinct_tipos() {
        let stats = UbicacionStats::compute(&sample());
        assert_eq!(
            stats,
            UbicacionStats { total: 4, activos: 3, inactivos: 1, tipos: 2 }
        );
    }

    #[test]
    fn estado_filter_uses_derived_field() {
        let mut state = ListState::new(Ubicacion::list_config());
        let ticket = state.begin_load();
        state.finish_load(ticket, Ok(sample()));
        let ids: Vec<_> = state.visible().iter().map(|u| u.id_ubicacion.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);

        state.set_filter("estado", FilterSelection::from_option(ESTADO_INACTIVO));
        assert_eq!(state.visible()[0].nombre, "Bodega norte");

        state.set_filter("estado", FilterSelection::All);
        state.set_filter("tipo", FilterSelection::from_option("BODEGA"));
        assert_eq!(state.page_info().total_count, 2);
        assert_eq!(state.filter_options("tipo"), vec!["BODEGA", "FARMACIA"]);
    }

    #[test]
    fn activo_defaults_to_true() {
        let u: Ubicacion = serde_json::from_str(r#"{"id_ubicacion": 9, "nombre": "Estante A"}"#).unwrap();
        assert!(u.activo);
        assert_eq!(u.estado(), ESTADO_ACTIVO);
        assert!(UbicacionDto::default().validate().is_err());
    }
}
