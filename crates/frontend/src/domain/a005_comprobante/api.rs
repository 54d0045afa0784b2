use contracts::domain::a005_comprobante::{Comprobante, ComprobanteId};
use serde_json::json;

use crate::shared::api_utils::{delete, get_json, put, ApiError};

pub async fn fetch_comprobantes() -> Result<Vec<Comprobante>, ApiError> {
    get_json("/comprobantes/").await
}

pub async fn fetch_comprobante(id: ComprobanteId) -> Result<Comprobante, ApiError> {
    get_json(&format!("/comprobantes/{}", id)).await
}

/// The backend expects an empty JSON object as body.
pub async fn marcar_entregado(id: ComprobanteId) -> Result<(), ApiError> {
    put(&format!("/comprobantes/entregar/{}", id), &json!({})).await
}

pub async fn delete_comprobante(id: ComprobanteId) -> Result<(), ApiError> {
    delete(&format!("/comprobantes/{}", id)).await
}
