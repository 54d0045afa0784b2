use crate::domain::a003_proveedor::ProveedorId;
use crate::domain::common::numeric_id;
use crate::shared::csv::CsvExportable;
use crate::shared::date_format::format_date;
use crate::shared::list_view::{FieldValue, ListConfig, ListRecord, SortDirection, SortSpec};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// ID Type
// ============================================================================

numeric_id!(
    /// Identificador de comprobante de entrega
    ComprobanteId
);

// ============================================================================
// Estado / canal
// ============================================================================

/// Canal assumed when the backend omits it.
pub const CANAL_POR_DEFECTO: &str = "PORTAL";

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ComprobanteEstado {
    Pendiente,
    Entregado,
    Other(String),
}

impl ComprobanteEstado {
    pub fn code(&self) -> &str {
        match self {
            ComprobanteEstado::Pendiente => "pendiente",
            ComprobanteEstado::Entregado => "entregado",
            ComprobanteEstado::Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ComprobanteEstado::Entregado => "Entregado",
            _ => "Pendiente",
        }
    }

    pub fn is_entregado(&self) -> bool {
        matches!(self, ComprobanteEstado::Entregado)
    }
}

impl Default for ComprobanteEstado {
    fn default() -> Self {
        ComprobanteEstado::Pendiente
    }
}

impl From<String> for ComprobanteEstado {
    fn from(value: String) -> Self {
        match value.as_str() {
            "" | "pendiente" => ComprobanteEstado::Pendiente,
            "entregado" => ComprobanteEstado::Entregado,
            _ => ComprobanteEstado::Other(value),
        }
    }
}

impl From<ComprobanteEstado> for String {
    fn from(value: ComprobanteEstado) -> Self {
        value.code().to_string()
    }
}

// ============================================================================
// Record
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comprobante {
    pub id_comprobante: ComprobanteId,
    #[serde(default)]
    pub id_movimiento: Option<i64>,
    #[serde(default)]
    pub id_proveedor: Option<ProveedorId>,
    #[serde(default)]
    pub canal: Option<String>,
    #[serde(default)]
    pub estado: ComprobanteEstado,
    #[serde(default)]
    pub fecha: Option<String>,
}

impl Comprobante {
    pub const SEARCH_FIELDS: [&'static str; 3] = ["id_comprobante", "id_movimiento", "id_proveedor"];

    pub fn list_config() -> ListConfig {
        ListConfig::new(
            &Self::SEARCH_FIELDS,
            SortSpec {
                field: "fecha".into(),
                direction: SortDirection::Desc,
            },
        )
        .with_filters(&["estado", "canal"])
    }

    pub fn canal(&self) -> &str {
        match self.canal.as_deref() {
            Some(c) if !c.trim().is_empty() => c,
            _ => CANAL_POR_DEFECTO,
        }
    }

    /// Local effect of `PUT /comprobantes/entregar/{id}`.
    pub fn mark_entregado(&mut self) {
        self.estado = ComprobanteEstado::Entregado;
    }
}

impl ListRecord for Comprobante {
    type Id = ComprobanteId;

    fn record_id(&self) -> ComprobanteId {
        self.id_comprobante
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "id_comprobante" => FieldValue::int(self.id_comprobante.value()),
            "id_movimiento" => FieldValue::opt_int(self.id_movimiento),
            "id_proveedor" => FieldValue::opt_int(self.id_proveedor.map(|id| id.value())),
            "canal" => FieldValue::text(self.canal()),
            "estado" => FieldValue::text(self.estado.code()),
            "fecha" => FieldValue::opt_date(self.fecha.as_deref()),
            _ => FieldValue::Missing,
        }
    }
}

impl CsvExportable for Comprobante {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "ID Movimiento", "ID Proveedor", "Canal", "Estado", "Fecha"]
    }

    fn to_csv_row(&self) -> Vec<String> {
        vec![
            self.id_comprobante.to_string(),
            self.id_movimiento.map(|v| v.to_string()).unwrap_or_default(),
            self.id_proveedor.map(|v| v.to_string()).unwrap_or_default(),
            self.canal().to_string(),
            self.estado.code().to_string(),
            self.fecha.as_deref().map(format_date).unwrap_or_default(),
        ]
    }
}

/// File name of the CSV export, `today` as "YYYY-MM-DD".
pub fn csv_file_name(today: &str) -> String {
    format!("comprobantes-{}.csv", today)
}

// ============================================================================
// Stats
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComprobanteStats {
    pub total: usize,
    pub entregados: usize,
    pub pendientes: usize,
    pub por_canal: BTreeMap<String, usize>,
}

impl ComprobanteStats {
    pub fn compute(rows: &[Comprobante]) -> Self {
        let entregados = rows.iter().filter(|c| c.estado.is_entregado()).count();
        let mut por_canal = BTreeMap::new();
        for c in rows {
            *por_canal.entry(c.canal().to_string()).or_insert(0) += 1;
        }
        Self {
            total: rows.len(),
            entregados,
            pendientes: rows.len() - entregados,
            por_canal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::csv::render_csv;
    use crate::shared::list_view::{FilterSelection, ListState};

    fn rows() -> Vec<Comprobante> {
        serde_json::from_str(
            r#"[
                {"id_comprobante": 1, "id_movimiento": 10, "id_proveedor": 3, "canal": "EMAIL", "estado": "pendiente", "fecha": "2024-03-15T10:00:00"},
                {"id_comprobante": 2, "id_movimiento": 11, "estado": "entregado", "fecha": "2024-03-16T10:00:00"},
                {"id_comprobante": 3, "id_movimiento": 12, "id_proveedor": 3, "canal": null}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn missing_canal_and_estado_fall_back_to_defaults() {
        let rows = rows();
        assert_eq!(rows[1].canal(), CANAL_POR_DEFECTO);
        assert_eq!(rows[2].estado, ComprobanteEstado::Pendiente);
        assert_eq!(rows[2].field_value("canal"), FieldValue::text("PORTAL"));
    }

    #[test]
    fn stats_group_by_effective_canal() {
        let stats = ComprobanteStats::compute(&rows());
        assert_eq!((stats.total, stats.entregados, stats.pendientes), (3, 1, 2));
        assert_eq!(stats.por_canal.get("PORTAL"), Some(&2));
        assert_eq!(stats.por_canal.get("EMAIL"), Some(&1));
    }

    #[test]
    fn marking_delivered_patches_only_that_record() {
        let mut state = ListState::new(Comprobante::list_config());
        let ticket = state.begin_load();
        state.finish_load(ticket, Ok(rows()));
        let before = state.visible();

        assert!(state.patch(&ComprobanteId(1), Comprobante::mark_entregado));

        let after = state.visible();
        assert_eq!(after.len(), before.len());
        for (b, a) in before.iter().zip(after.iter()) {
            assert_eq!(a.id_comprobante, b.id_comprobante);
            if a.id_comprobante == ComprobanteId(1) {
                assert!(a.estado.is_entregado());
                assert_eq!(a.fecha, b.fecha);
                assert_eq!(a.canal, b.canal);
            } else {
                assert_eq!(a, b);
            }
        }
    }

    #[test]
    fn filters_and_search_on_ids() {
        let mut state = ListState::new(Comprobante::list_config());
        let ticket = state.begin_load();
        state.finish_load(ticket, Ok(rows()));
        state.set_filter("canal", FilterSelection::from_option("PORTAL"));
        state.set_filter("estado", FilterSelection::from_option("pendiente"));
        let ids: Vec<_> = state.visible().iter().map(|c| c.id_comprobante.value()).collect();
        assert_eq!(ids, vec![3]);
        state.clear_query();
        state.set_search("11");
        assert_eq!(state.visible()[0].id_comprobante, ComprobanteId(2));
    }

    #[test]
    fn csv_uses_display_defaults() {
        let mut rows = rows();
        rows.truncate(2);
        let csv = render_csv(&rows);
        assert_eq!(
            csv,
            "ID,ID Movimiento,ID Proveedor,Canal,Estado,Fecha\n\
             1,10,3,EMAIL,pendiente,15/03/2024\n\
             2,11,,PORTAL,entregado,16/03/2024"
        );
        assert_eq!(csv_file_name("2024-03-20"), "comprobantes-2024-03-20.csv");
    }
}
