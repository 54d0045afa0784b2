//! Audit trail rows from `GET /auditoria/`.
//!
//! `hash_evento` / `hash_anterior` are carried as opaque strings. The chain is
//! maintained and verified server-side; the client only displays it.

use crate::domain::common::numeric_id;
use crate::shared::list_view::{FieldValue, ListConfig, ListRecord, SortDirection, SortSpec, EMPTY_DISPLAY};
use serde::{Deserialize, Serialize};
use serde_json::Value;

numeric_id!(
    /// Identificador de evento de auditoría
    EventoId
);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    Read,
    Other(String),
}

impl AuditAction {
    pub fn code(&self) -> &str {
        match self {
            AuditAction::Create => "CREATE",
            AuditAction::Update => "UPDATE",
            AuditAction::Delete => "DELETE",
            AuditAction::Read => "READ",
            AuditAction::Other(raw) => raw,
        }
    }

    pub fn badge_color(&self) -> &'static str {
        match self {
            AuditAction::Create => "success",
            AuditAction::Update => "warning",
            AuditAction::Delete => "danger",
            AuditAction::Read => "informative",
            AuditAction::Other(_) => "subtle",
        }
    }
}

impl Default for AuditAction {
    fn default() -> Self {
        AuditAction::Other(String::new())
    }
}

impl From<String> for AuditAction {
    fn from(value: String) -> Self {
        match value.to_uppercase().as_str() {
            "CREATE" | "INSERT" => AuditAction::Create,
            "UPDATE" => AuditAction::Update,
            "DELETE" => AuditAction::Delete,
            "READ" | "SELECT" => AuditAction::Read,
            _ => AuditAction::Other(value),
        }
    }
}

impl From<AuditAction> for String {
    fn from(value: AuditAction) -> Self {
        value.code().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub id_evento: EventoId,
    /// Name or numeric id, depending on the backend version.
    #[serde(default)]
    pub usuario: Option<Value>,
    #[serde(default)]
    pub accion: AuditAction,
    #[serde(default)]
    pub tabla_afectada: Option<String>,
    #[serde(default)]
    pub pk_afectada: Option<Value>,
    /// Older backends send the key here; some send both.
    #[serde(default)]
    pub id_registro: Option<Value>,
    #[serde(default)]
    pub fecha_hora: Option<String>,
    #[serde(default)]
    pub valores_antes: Option<Value>,
    #[serde(default)]
    pub valores_despues: Option<Value>,
    #[serde(default)]
    pub hash_evento: Option<String>,
    #[serde(default)]
    pub hash_anterior: Option<String>,
}

/// Scalar JSON as plain text; objects and arrays compact-encoded.
pub fn json_scalar_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

impl AuditRecord {
    pub fn list_config() -> ListConfig {
        ListConfig::new(
            &["usuario", "tabla_afectada", "accion", "pk_afectada"],
            SortSpec {
                field: "fecha_hora".into(),
                direction: SortDirection::Desc,
            },
        )
        .with_filters(&["accion", "tabla_afectada"])
        .with_page_sizes(&[20, 50, 100], 20)
    }

    pub fn usuario_label(&self) -> String {
        json_scalar_text(self.usuario.as_ref()).unwrap_or_else(|| EMPTY_DISPLAY.to_string())
    }

    /// `pk_afectada` when present, otherwise the legacy `id_registro`.
    pub fn pk(&self) -> Option<&Value> {
        [self.pk_afectada.as_ref(), self.id_registro.as_ref()]
            .into_iter()
            .flatten()
            .find(|v| json_scalar_text(Some(*v)).is_some())
    }

    pub fn pk_label(&self) -> String {
        json_scalar_text(self.pk()).unwrap_or_else(|| EMPTY_DISPLAY.to_string())
    }

    /// Pretty-printed snapshot for the details modal.
    pub fn pretty_values(value: Option<&Value>) -> String {
        match value {
            None | Some(Value::Null) => EMPTY_DISPLAY.to_string(),
            Some(v) => serde_json::to_string_pretty(v).unwrap_or_else(|_| v.to_string()),
        }
    }

    /// Keys whose value differs between `valores_antes` and `valores_despues`.
    pub fn changed_keys(&self) -> Vec<String> {
        let empty = serde_json::Map::new();
        let antes = self.valores_antes.as_ref().and_then(Value::as_object).unwrap_or(&empty);
        let despues = self.valores_despues.as_ref().and_then(Value::as_object).unwrap_or(&empty);
        let mut keys: Vec<String> = antes
            .keys()
            .chain(despues.keys())
            .filter(|k| antes.get(*k) != despues.get(*k))
            .cloned()
            .collect();
        keys.sort();
        keys.dedup();
        keys
    }
}

impl ListRecord for AuditRecord {
    type Id = EventoId;

    fn record_id(&self) -> EventoId {
        self.id_evento
    }

    fn field_value(&self, field: &str) -> FieldValue {
        match field {
            "id_evento" => FieldValue::int(self.id_evento.value()),
            "usuario" => scalar_field(self.usuario.as_ref()),
            "accion" => FieldValue::text(self.accion.code()),
            "tabla_afectada" => FieldValue::opt_text(self.tabla_afectada.as_deref()),
            "pk_afectada" => scalar_field(self.pk()),
            "fecha_hora" => FieldValue::opt_date(self.fecha_hora.as_deref()),
            "hash_evento" => FieldValue::opt_text(self.hash_evento.as_deref()),
            _ => FieldValue::Missing,
        }
    }
}

fn scalar_field(value: Option<&Value>) -> FieldValue {
    match value {
        Some(Value::Number(n)) => n.as_f64().map(FieldValue::number).unwrap_or(FieldValue::Missing),
        other => FieldValue::opt_text(json_scalar_text(other).as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_legacy_id_registro() {
        let legacy: AuditRecord = serde_json::from_str(
            r#"{"id_evento": 5, "usuario": "admin", "accion": "UPDATE", "tabla_afectada": "items", "id_registro": 42, "fecha_hora": "2024-03-15T14:02:26"}"#,
        )
        .unwrap();
        assert_eq!(legacy.pk_label(), "42");
        assert_eq!(legacy.field_value("pk_afectada"), FieldValue::int(42));

        let current: AuditRecord =
            serde_json::from_str(r#"{"id_evento": 6, "usuario": 1, "accion": "create", "pk_afectada": "AMX-500"}"#)
                .unwrap();
        assert_eq!(current.accion, AuditAction::Create);
        assert_eq!(current.pk_label(), "AMX-500");
        assert_eq!(current.usuario_label(), "1");
        assert_eq!(current.hash_evento, None);
    }

    #[test]
    fn rows_with_both_key_fields_decode() {
        let rows: Vec<AuditRecord> = serde_json::from_str(
            r#"[{"id_evento": 1, "accion": "UPDATE", "pk_afectada": "7", "id_registro": 7},
                {"id_evento": 2, "accion": "DELETE", "pk_afectada": null, "id_registro": 9},
                {"id_evento": 3, "accion": "READ"}]"#,
        )
        .unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].pk_label(), "7");
        assert_eq!(rows[0].field_value("pk_afectada"), FieldValue::text("7"));
        assert_eq!(rows[1].pk_label(), "9");
        assert_eq!(rows[1].field_value("pk_afectada"), FieldValue::int(9));
        assert_eq!(rows[2].pk_label(), EMPTY_DISPLAY);
    }

    #[test]
    fn changed_keys_compare_snapshots() {
        let record: AuditRecord = serde_json::from_str(
            r#"{"id_evento": 7, "accion": "UPDATE",
                "valores_antes": {"stock_minimo": 5, "codigo": "A"},
                "valores_despues": {"stock_minimo": 8, "codigo": "A", "descripcion": "Nueva"}}"#,
        )
        .unwrap();
        assert_eq!(record.changed_keys(), vec!["descripcion", "stock_minimo"]);
        assert_eq!(AuditRecord::pretty_values(None), EMPTY_DISPLAY);
    }

    #[test]
    fn unknown_action_is_kept() {
        let action = AuditAction::from("LOGIN".to_string());
        assert_eq!(action.code(), "LOGIN");
        assert_eq!(action.badge_color(), "subtle");
    }
}
