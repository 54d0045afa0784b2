use crate::domain::a001_item::ItemId;
use crate::domain::a003_proveedor::ProveedorId;
use crate::domain::a004_ubicacion::UbicacionId;
use crate::domain::common::numeric_id;
use crate::shared::date_format::is_before;
use crate::shared::list_view::{FieldValue, ListConfig, ListRecord, SortSpec};
use crate::shared::validation::{require, ValidationError};
use crate::system::usuarios::UsuarioId;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

numeric_id!(
    /// Identificador de un lote de inventario
    LoteId
);

// ============================================================================
// Estado
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LoteEstado {
    Activo,
    Inactivo,
    Other(String),
}

impl LoteEstado {
    pub fn code(&self) -> &str {
        match self {
            LoteEstado::Activo => "ACTIVO",
            LoteEstado::Inactivo => "INACTIVO",
            LoteEstado::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            LoteEstado::Activo => "Activo",
            LoteEstado::Inactivo => "Inactivo",
            LoteEstado::Other(raw) => raw,
        }
    }
}

impl Default for LoteEstado {
    fn default() -> Self {
        LoteEstado::Activo
    }
}

impl From<String> for LoteEstado {
    fn from(value: String) -> Self {
        match value.as_str() {
            "ACTIVO" => LoteEstado::Activo,
            "INACTIVO" => LoteEstado::Inactivo,
            _ => LoteEstado::Other(value),
        }
    }
}

impl From<LoteEstado> for String {
    fn from(value: LoteEstado) -> Self {
        value.code().to_string()
    }
}

// ============================================================================
// Record
// ============================================================================

/// Lote con los nombres de ítem y proveedor ya resueltos por el backend (`GET /lotes`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lote {
    pub id_lote: LoteId,
    #[serde(default)]
    pub codigo_lote: String,
    #[serde(default)]
    pub id_item: Option<ItemId>,
    #[serde(default)]
    pub item_descripcion: Option<String>,
    #[serde(default)]
    pub id_proveedor: Option<ProveedorId>,
    #[serde(default)]
    pub proveedor_nombre: Option<String>,
    #[serde(default)]
    pub fecha_vencimiento: Option<String>,
    #[serde(default)]
    pub costo_unitario: Option<f64>,
    #[serde(default)]
    pub estado: LoteEstado,
}

impl Lote {
    pub const SEARCH_FIELDS: [&'static str; 3] = ["codigo_lote", "item_descripcion", "proveedor_nombre"];

    pub fn list_config() -> ListConfig {
        ListConfig::new(&Self::SEARCH_FIELDS, SortSpec::asc("fecha_vencimiento")).with_filters(&["estado"])
    }

    /// `today` is "YYYY-MM-DD".
    pub fn is_expired(&self, today: &str) -> bool {
        self.fecha_vencimiento
            .as_deref()
            .map(|fecha| is_before(fecha, today))
            .unwrap_or(false)
    }

    pub fn costo_label(&self) -> String {
        match self.costo_unitario {
            Some(costo) => format!("${:.2}", costo),
            None => crate::shared::list_view::EMPTY_DISPLAY.to_string(),
        }
    }
}

impl ListRecord for Lote {
    type Id = LoteId;

    fn record_id(&self) -> LoteId {
        self.id_lote
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "id_lote" => FieldValue::int(self.id_lote.value()),
            "codigo_lote" => FieldValue::text(self.codigo_lote.as_str()),
            "item_descripcion" => FieldValue::opt_text(self.item_descripcion.as_deref()),
            "proveedor_nombre" => FieldValue::opt_text(self.proveedor_nombre.as_deref()),
            "fecha_vencimiento" => FieldValue::opt_date(self.fecha_vencimiento.as_deref()),
            "costo_unitario" => FieldValue::opt_number(self.costo_unitario),
            "estado" => FieldValue::text(self.estado.code()),
            _ => FieldValue::Missing,
        }
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

pub const MOTIVO_INGRESO_INICIAL: &str = "Ingreso inicial de inventario";

/// Payload de `POST /lotes`: crea el ítem, el lote y el movimiento de ingreso en un paso.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateLoteDto {
    pub nombre_item: String,
    pub unidad_medida: String,
    pub stock_minimo: f64,
    pub id_proveedor: ProveedorId,
    pub codigo_lote: String,
    pub fecha_vencimiento: String,
    pub costo_unitario: f64,
    pub id_ubicacion_destino: UbicacionId,
    pub cantidad: f64,
    pub id_usuario: UsuarioId,
    pub motivo: String,
}

/// Payload de `PUT /lotes/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateLoteDto {
    pub fecha_vencimiento: String,
    pub costo_unitario: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoteForm {
    pub nombre_item: String,
    pub unidad_medida: String,
    pub stock_minimo: String,
    pub id_proveedor: String,
    pub codigo_lote: String,
    pub fecha_vencimiento: String,
    pub costo_unitario: String,
    pub id_ubicacion_destino: String,
    pub cantidad: String,
    pub motivo: String,
}

impl Default for LoteForm {
    fn default() -> Self {
        Self {
            nombre_item: String::new(),
            unidad_medida: String::new(),
            stock_minimo: "0".into(),
            id_proveedor: String::new(),
            codigo_lote: String::new(),
            fecha_vencimiento: String::new(),
            costo_unitario: "0".into(),
            id_ubicacion_destino: String::new(),
            cantidad: "0".into(),
            motivo: MOTIVO_INGRESO_INICIAL.into(),
        }
    }
}

fn parse_amount(errors: &mut ValidationError, field: &'static str, raw: &str, message: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => {
            errors.push(field, message);
            0.0
        }
    }
}

fn parse_id<T: std::str::FromStr + Default>(
    errors: &mut ValidationError,
    field: &'static str,
    raw: &str,
    message: &str,
) -> T {
    match raw.trim().parse::<T>() {
        Ok(id) => id,
        Err(_) => {
            errors.push(field, message);
            T::default()
        }
    }
}

fn require_date(errors: &mut ValidationError, raw: &str) {
    if raw.trim().is_empty() {
        errors.push("fecha_vencimiento", "La fecha de vencimiento es requerida");
    } else if chrono::NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").is_err() {
        errors.push("fecha_vencimiento", "La fecha debe tener formato AAAA-MM-DD");
    }
}

impl LoteForm {
    /// `id_usuario` is the acting user recorded on the stock movement.
    pub fn validate(&self, id_usuario: UsuarioId) -> Result<CreateLoteDto, ValidationError> {
        let mut errors = ValidationError::new();
        require(&mut errors, "nombre_item", &self.nombre_item, "El nombre del ítem es requerido");
        require(&mut errors, "unidad_medida", &self.unidad_medida, "La unidad de medida es requerida");
        require(&mut errors, "codigo_lote", &self.codigo_lote, "El código de lote es requerido");
        require_date(&mut errors, &self.fecha_vencimiento);
        let id_proveedor = parse_id(&mut errors, "id_proveedor", &self.id_proveedor, "Selecciona un proveedor");
        let id_ubicacion_destino = parse_id(
            &mut errors,
            "id_ubicacion_destino",
            &self.id_ubicacion_destino,
            "Selecciona la ubicación de destino",
        );
        let stock_minimo = parse_amount(&mut errors, "stock_minimo", &self.stock_minimo, "Stock mínimo inválido");
        let costo_unitario = parse_amount(&mut errors, "costo_unitario", &self.costo_unitario, "Costo unitario inválido");
        let cantidad = parse_amount(&mut errors, "cantidad", &self.cantidad, "Cantidad inválida");

        errors.into_result()?;
        let motivo = match self.motivo.trim() {
            "" => MOTIVO_INGRESO_INICIAL.to_string(),
            m => m.to_string(),
        };
        Ok(CreateLoteDto {
            nombre_item: self.nombre_item.trim().to_string(),
            unidad_medida: self.unidad_medida.trim().to_string(),
            stock_minimo,
            id_proveedor,
            codigo_lote: self.codigo_lote.trim().to_string(),
            fecha_vencimiento: self.fecha_vencimiento.trim().to_string(),
            costo_unitario,
            id_ubicacion_destino,
            cantidad,
            id_usuario,
            motivo,
        })
    }
}

/// Edit modal: only expiry and unit cost are editable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoteEditForm {
    pub fecha_vencimiento: String,
    pub costo_unitario: String,
}

impl LoteEditForm {
    pub fn from_lote(lote: &Lote) -> Self {
        Self {
            fecha_vencimiento: lote
                .fecha_vencimiento
                .as_deref()
                .map(|f| f.split('T').next().unwrap_or(f).to_string())
                .unwrap_or_default(),
            costo_unitario: lote
                .costo_unitario
                .map(|c| FieldValue::number(c).display())
                .unwrap_or_else(|| "0".into()),
        }
    }

    pub fn validate(&self) -> Result<UpdateLoteDto, ValidationError> {
        let mut errors = ValidationError::new();
        require_date(&mut errors, &self.fecha_vencimiento);
        let costo_unitario = parse_amount(&mut errors, "costo_unitario", &self.costo_unitario, "Costo unitario inválido");
        errors.into_result()?;
        Ok(UpdateLoteDto {
            fecha_vencimiento: self.fecha_vencimiento.trim().to_string(),
            costo_unitario,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{FilterSelection, ListState};

    fn lote(id: i64, codigo: &str, item: &str, proveedor: &str, estado: &str) -> Lote {
        Lote {
            id_lote: LoteId(id),
            codigo_lote: codigo.into(),
            id_item: None,
            item_descripcion: Some(item.into()),
            id_proveedor: None,
            proveedor_nombre: Some(proveedor.into()),
            fecha_vencimiento: Some(format!("2025-0{}-01", id)),
            costo_unitario: Some(1.5),
            estado: LoteEstado::from(estado.to_string()),
        }
    }

    #[test]
    fn estado_filter_and_search_combine() {
        let mut state = ListState::new(Lote::list_config());
        let ticket = state.begin_load();
        state.finish_load(
            ticket,
            Ok(vec![
                lote(1, "L-001", "Amoxicilina", "Distribuidora Andina", "ACTIVO"),
                lote(2, "L-002", "Amoxicilina", "Farmacorp", "INACTIVO"),
                lote(3, "L-003", "Jeringa 5ml", "Distribuidora Andina", "ACTIVO"),
            ]),
        );
        state.set_filter("estado", FilterSelection::from_option("ACTIVO"));
        state.set_search("andina");
        let ids: Vec<_> = state.visible().iter().map(|l| l.id_lote.value()).collect();
        assert_eq!(ids, vec![1, 3]);
        state.set_search("amoxi");
        assert_eq!(state.visible().len(), 1);
    }

    #[test]
    fn expiry_is_compared_against_today() {
        let l = lote(1, "L-001", "Amoxicilina", "Andina", "ACTIVO");
        assert!(l.is_expired("2025-06-30"));
        assert!(!l.is_expired("2025-01-01"));
        let mut undated = l.clone();
        undated.fecha_vencimiento = None;
        assert!(!undated.is_expired("2030-01-01"));
    }

    #[test]
    fn create_form_builds_payload_with_default_motivo() {
        let form = LoteForm {
            nombre_item: "Amoxicilina 500mg".into(),
            unidad_medida: "CAJA".into(),
            id_proveedor: "4".into(),
            codigo_lote: "AMX-2025-01".into(),
            fecha_vencimiento: "2026-12-31".into(),
            costo_unitario: "12.5".into(),
            id_ubicacion_destino: "2".into(),
            cantidad: "100".into(),
            motivo: "  ".into(),
            ..LoteForm::default()
        };
        let dto = form.validate(UsuarioId(1)).unwrap();
        assert_eq!(dto.id_proveedor, ProveedorId(4));
        assert_eq!(dto.id_ubicacion_destino, UbicacionId(2));
        assert_eq!(dto.motivo, MOTIVO_INGRESO_INICIAL);
        let json = serde_json::to_value(&dto).unwrap();
        assert_eq!(json["id_usuario"], 1);
        let mut keys: Vec<&str> = json
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "cantidad",
                "codigo_lote",
                "costo_unitario",
                "fecha_vencimiento",
                "id_proveedor",
                "id_ubicacion_destino",
                "id_usuario",
                "motivo",
                "nombre_item",
                "stock_minimo",
                "unidad_medida",
            ]
        );
    }

    #[test]
    fn create_form_rejects_missing_references_and_bad_date() {
        let form = LoteForm {
            fecha_vencimiento: "31/12/2026".into(),
            cantidad: "muchos".into(),
            ..LoteForm::default()
        };
        let err = form.validate(UsuarioId(1)).unwrap_err();
        assert_eq!(err.field("fecha_vencimiento"), Some("La fecha debe tener formato AAAA-MM-DD"));
        assert!(err.field("id_proveedor").is_some());
        assert!(err.field("id_ubicacion_destino").is_some());
        assert!(err.field("cantidad").is_some());
    }

    #[test]
    fn edit_form_round_trips_existing_lote() {
        let mut l = lote(1, "L-001", "Amoxicilina", "Andina", "ACTIVO");
        l.fecha_vencimiento = Some("2026-03-01T00:00:00".into());
        let form = LoteEditForm::from_lote(&l);
        assert_eq!(form.fecha_vencimiento, "2026-03-01");
        assert_eq!(form.costo_unitario, "1.5");
        let dto = form.validate().unwrap();
        assert_eq!(dto.costo_unitario, 1.5);
    }
}
