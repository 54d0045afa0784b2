use crate::domain::a001_item::ItemId;
use crate::domain::a002_lote::LoteId;
use crate::domain::a004_ubicacion::UbicacionId;
use crate::domain::common::numeric_id;
use crate::shared::list_view::{FieldValue, ListConfig, ListRecord, SortSpec};
use serde::{Deserialize, Serialize};

numeric_id!(
    /// Identificador de una fila de existencias
    ExistenciaId
);

/// Stock on hand of one lot at one location (`GET /existencias/`). Read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Existencia {
    pub id_existencia: ExistenciaId,
    #[serde(default)]
    pub id_item: Option<ItemId>,
    #[serde(default)]
    pub item_descripcion: Option<String>,
    #[serde(default)]
    pub id_lote: Option<LoteId>,
    #[serde(default)]
    pub codigo_lote: Option<String>,
    #[serde(default)]
    pub id_ubicacion: Option<UbicacionId>,
    #[serde(default)]
    pub ubicacion_nombre: Option<String>,
    #[serde(default)]
    pub cantidad: f64,
}

impl Existencia {
    pub const SEARCH_FIELDS: [&'static str; 3] = ["item_descripcion", "ubicacion_nombre", "codigo_lote"];

    pub fn list_config() -> ListConfig {
        ListConfig::new(&Self::SEARCH_FIELDS, SortSpec::asc("item_descripcion")).with_filters(&["id_ubicacion"])
    }

    /// "Bodega central (#2)", or the bare id when the name was not joined.
    pub fn ubicacion_label(&self) -> String {
        match (&self.ubicacion_nombre, self.id_ubicacion) {
            (Some(nombre), Some(id)) => format!("{} (#{})", nombre, id),
            (Some(nombre), None) => nombre.clone(),
            (None, Some(id)) => format!("#{}", id),
            (None, None) => crate::shared::list_view::EMPTY_DISPLAY.to_string(),
        }
    }

    pub fn is_agotado(&self) -> bool {
        self.cantidad <= 0.0
    }
}

impl ListRecord for Existencia {
    type Id = ExistenciaId;

    fn record_id(&self) -> ExistenciaId {
        self.id_existencia
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "id_existencia" => FieldValue::int(self.id_existencia.value()),
            "id_item" => FieldValue::opt_int(self.id_item.map(|id| id.value())),
            "item_descripcion" => FieldValue::opt_text(self.item_descripcion.as_deref()),
            "id_lote" => FieldValue::opt_int(self.id_lote.map(|id| id.value())),
            "codigo_lote" => FieldValue::opt_text(self.codigo_lote.as_deref()),
            "id_ubicacion" => FieldValue::opt_int(self.id_ubicacion.map(|id| id.value())),
            "ubicacion_nombre" => FieldValue::opt_text(self.ubicacion_nombre.as_deref()),
            "cantidad" => FieldValue::number(self.cantidad),
            _ => FieldValue::Missing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{FilterSelection, ListState};

    #[test]
    fn filters_by_location_and_sorts_by_cantidad() {
        let rows: Vec<Existencia> = serde_json::from_str(
            r#"[
                {"id_existencia": 1, "item_descripcion": "Gasa", "id_ubicacion": 2, "ubicacion_nombre": "Bodega", "cantidad": 40},
                {"id_existencia": 2, "item_descripcion": "Alcohol", "id_ubicacion": 1, "cantidad": 0},
                {"id_existencia": 3, "item_descripcion": "Jeringa", "id_ubicacion": 2, "cantidad": 9}
            ]"#,
        )
        .unwrap();
        assert!(rows[1].is_agotado());
        assert_eq!(rows[0].ubicacion_label(), "Bodega (#2)");
        assert_eq!(rows[1].ubicacion_label(), "#1");

        let mut state = ListState::new(Existencia::list_config());
        let ticket = state.begin_load();
        state.finish_load(ticket, Ok(rows));
        state.set_filter("id_ubicacion", FilterSelection::from_option("2"));
        state.toggle_sort("cantidad");
        let ids: Vec<_> = state.visible().iter().map(|e| e.id_existencia.value()).collect();
        assert_eq!(ids, vec![3, 1]);
    }
}
