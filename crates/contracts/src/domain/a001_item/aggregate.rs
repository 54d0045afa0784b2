use crate::domain::a004_ubicacion::UbicacionId;
use crate::domain::common::numeric_id;
use crate::shared::list_view::{FieldValue, ListConfig, ListRecord, SortSpec};
use crate::shared::validation::{require, ValidationError};
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

numeric_id!(
    /// Identificador de un ítem del catálogo
    ItemId
);

// ============================================================================
// Tipo de ítem
// ============================================================================

/// Categoría del ítem. Valores desconocidos se conservan tal cual.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ItemTipo {
    Medicamento,
    Insumo,
    Equipo,
    Other(String),
}

impl ItemTipo {
    pub const KNOWN: [ItemTipo; 3] = [ItemTipo::Medicamento, ItemTipo::Insumo, ItemTipo::Equipo];

    pub fn code(&self) -> &str {
        match self {
            ItemTipo::Medicamento => "MEDICAMENTO",
            ItemTipo::Insumo => "INSUMO",
            ItemTipo::Equipo => "EQUIPO",
            ItemTipo::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ItemTipo::Medicamento => "Medicamento",
            ItemTipo::Insumo => "Insumo",
            ItemTipo::Equipo => "Equipo",
            ItemTipo::Other(raw) => raw,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ItemTipo::Medicamento => "💊",
            ItemTipo::Insumo => "📦",
            ItemTipo::Equipo => "🏥",
            ItemTipo::Other(_) => "📋",
        }
    }

    /// Badge color for `thaw::Badge`
    pub fn badge_color(&self) -> &'static str {
        match self {
            ItemTipo::Medicamento => "brand",
            ItemTipo::Insumo => "informative",
            ItemTipo::Equipo => "success",
            ItemTipo::Other(_) => "subtle",
        }
    }
}

impl Default for ItemTipo {
    fn default() -> Self {
        ItemTipo::Medicamento
    }
}

impl From<String> for ItemTipo {
    fn from(value: String) -> Self {
        match value.as_str() {
            "MEDICAMENTO" => ItemTipo::Medicamento,
            "INSUMO" => ItemTipo::Insumo,
            "EQUIPO" => ItemTipo::Equipo,
            _ => ItemTipo::Other(value),
        }
    }
}

impl From<ItemTipo> for String {
    fn from(value: ItemTipo) -> Self {
        value.code().to_string()
    }
}

// ============================================================================
// Record
// ============================================================================

/// Ítem del catálogo tal como lo devuelve `GET /items/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id_item: ItemId,
    #[serde(default)]
    pub codigo: String,
    #[serde(default)]
    pub descripcion: String,
    #[serde(default)]
    pub tipo_item: ItemTipo,
    #[serde(default)]
    pub unidad_medida: Option<String>,
    #[serde(default)]
    pub stock_minimo: Option<f64>,
    #[serde(default)]
    pub id_ubicacion: Option<UbicacionId>,
}

impl Item {
    pub const SEARCH_FIELDS: [&'static str; 3] = ["descripcion", "codigo", "id_item"];
    pub const FILTER_FIELDS: [&'static str; 2] = ["tipo_item", "id_ubicacion"];

    pub fn list_config() -> ListConfig {
        ListConfig::new(&Self::SEARCH_FIELDS, SortSpec::asc("descripcion"))
            .with_filters(&Self::FILTER_FIELDS)
    }

    pub fn ubicacion_label(&self) -> String {
        self.id_ubicacion
            .map(|id| id.to_string())
            .unwrap_or_else(|| "Sin ubicación".to_string())
    }
}

impl ListRecord for Item {
    type Id = ItemId;

    fn record_id(&self) -> ItemId {
        self.id_item
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "id_item" => FieldValue::int(self.id_item.value()),
            "codigo" => FieldValue::text(self.codigo.as_str()),
            "descripcion" => FieldValue::text(self.descripcion.as_str()),
            "tipo_item" => FieldValue::text(self.tipo_item.code()),
            "unidad_medida" => FieldValue::opt_text(self.unidad_medida.as_deref()),
            "stock_minimo" => FieldValue::opt_number(self.stock_minimo),
            "id_ubicacion" => FieldValue::opt_int(self.id_ubicacion.map(|id| id.value())),
            _ => FieldValue::Missing,
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Payload de `POST /items/` y `PUT /items/update-full/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDto {
    pub id_ubicacion: Option<UbicacionId>,
    pub codigo: String,
    pub descripcion: String,
    pub tipo_item: ItemTipo,
    pub unidad_medida: String,
    pub stock_minimo: f64,
}

/// Raw modal inputs. Numbers stay as typed text until validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemForm {
    pub id_ubicacion: String,
    pub codigo: String,
    pub descripcion: String,
    pub tipo_item: String,
    pub unidad_medida: String,
    pub stock_minimo: String,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self {
            id_ubicacion: String::new(),
            codigo: String::new(),
            descripcion: String::new(),
            tipo_item: ItemTipo::Medicamento.code().to_string(),
            unidad_medida: "UND".to_string(),
            stock_minimo: "0".to_string(),
        }
    }
}

impl ItemForm {
    pub fn from_item(item: &Item) -> Self {
        Self {
            id_ubicacion: item.id_ubicacion.map(|id| id.to_string()).unwrap_or_default(),
            codigo: item.codigo.clone(),
            descripcion: item.descripcion.clone(),
            tipo_item: item.tipo_item.code().to_string(),
            unidad_medida: item.unidad_medida.clone().unwrap_or_default(),
            stock_minimo: item
                .stock_minimo
                .map(|v| FieldValue::number(v).display())
                .unwrap_or_else(|| "0".to_string()),
        }
    }

    pub fn validate(&self) -> Result<ItemDto, ValidationError> {
        let mut errors = ValidationError::new();
        require(&mut errors, "codigo", &self.codigo, "El código es requerido");
        require(&mut errors, "descripcion", &self.descripcion, "La descripción es requerida");
        require(&mut errors, "unidad_medida", &self.unidad_medida, "La unidad de medida es requerida");

        let id_ubicacion = match self.id_ubicacion.trim() {
            "" => None,
            raw => match raw.parse::<UbicacionId>() {
                Ok(id) => Some(id),
                Err(_) => {
                    errors.push("id_ubicacion", "La ubicación debe ser un número");
                    None
                }
            },
        };

        let stock_minimo = match self.stock_minimo.trim().parse::<f64>() {
            Ok(v) if v >= 0.0 && v.is_finite() => v,
            _ => {
                errors.push("stock_minimo", "El stock mínimo debe ser un número mayor o igual a 0");
                0.0
            }
        };

        errors.into_result()?;
        Ok(ItemDto {
            id_ubicacion,
            codigo: self.codigo.trim().to_string(),
            descripcion: self.descripcion.trim().to_string(),
            tipo_item: ItemTipo::from(self.tipo_item.trim().to_string()),
            unidad_medida: self.unidad_medida.trim().to_string(),
            stock_minimo,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: i64, descripcion: &str, tipo: &str, ubicacion: Option<i64>) -> Item {
        Item {
            id_item: ItemId(id),
            codigo: format!("IT-{:03}", id),
            descripcion: descripcion.into(),
            tipo_item: ItemTipo::from(tipo.to_string()),
            unidad_medida: Some("UND".into()),
            stock_minimo: Some(5.0),
            id_ubicacion: ubicacion.map(UbicacionId),
        }
    }

    #[test]
    fn deserializes_backend_row_with_missing_fields() {
        let json = r#"{"id_item": 4, "codigo": "AMX-500", "descripcion": "Amoxicilina 500mg", "tipo_item": "MEDICAMENTO"}"#;
        let parsed: Item = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id_item, ItemId(4));
        assert_eq!(parsed.tipo_item, ItemTipo::Medicamento);
        assert_eq!(parsed.id_ubicacion, None);
        assert_eq!(parsed.ubicacion_label(), "Sin ubicación");
        assert!(parsed.field_value("stock_minimo").is_missing());
    }

    #[test]
    fn unknown_tipo_is_preserved() {
        let parsed: Item =
            serde_json::from_str(r#"{"id_item": 1, "tipo_item": "REACTIVO"}"#).unwrap();
        assert_eq!(parsed.tipo_item, ItemTipo::Other("REACTIVO".into()));
        assert_eq!(serde_json::to_value(&parsed.tipo_item).unwrap(), "REACTIVO");
        assert_eq!(parsed.tipo_item.icon(), "📋");
    }

    #[test]
    fn search_covers_descripcion_codigo_and_id() {
        let mut state = crate::shared::list_view::ListState::new(Item::list_config());
        let ticket = state.begin_load();
        state.finish_load(
            ticket,
            Ok(vec![
                item(12, "Gasa estéril", "INSUMO", Some(1)),
                item(3, "Ibuprofeno", "MEDICAMENTO", Some(2)),
            ]),
        );
        state.set_search("it-003");
        assert_eq!(state.visible().len(), 1);
        state.set_search("12");
        assert_eq!(state.visible()[0].id_item, ItemId(12));
        state.set_search("");
        let names: Vec<_> = state.visible().into_iter().map(|i| i.descripcion).collect();
        assert_eq!(names, vec!["Gasa estéril", "Ibuprofeno"]);
        assert_eq!(state.filter_options("id_ubicacion"), vec!["1", "2"]);
    }

    #[test]
    fn form_validation_builds_update_payload() {
        let form = ItemForm {
            id_ubicacion: "3".into(),
            codigo: " PAR-1 ".into(),
            descripcion: "Paracetamol".into(),
            tipo_item: "MEDICAMENTO".into(),
            unidad_medida: "TAB".into(),
            stock_minimo: "20".into(),
        };
        let dto = form.validate().unwrap();
        assert_eq!(dto.id_ubicacion, Some(UbicacionId(3)));
        assert_eq!(dto.codigo, "PAR-1");
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["id_ubicacion"], 3);
        assert_eq!(json["stock_minimo"], 20.0);
        assert_eq!(json["tipo_item"], "MEDICAMENTO");
    }

    #[test]
    fn form_validation_reports_each_field() {
        let form = ItemForm {
            id_ubicacion: "bodega".into(),
            stock_minimo: "-1".into(),
            ..ItemForm::default()
        };
        let err = form.validate().unwrap_err();
        assert!(err.field("codigo").is_some());
        assert!(err.field("descripcion").is_some());
        assert!(err.field("id_ubicacion").is_some());
        assert!(err.field("stock_minimo").is_some());
        assert!(err.field("unidad_medida").is_none());
    }
}
