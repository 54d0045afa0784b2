use contracts::domain::a002_lote::{CreateLoteDto, Lote, LoteId, UpdateLoteDto};

use crate::shared::api_utils::{get_json, post, put, ApiError};

// This collection is served without the trailing slash.
pub async fn fetch_lotes() -> Result<Vec<Lote>, ApiError> {
    get_json("/lotes").await
}

/// Creates item, batch and the initial stock movement in one call.
pub async fn create_lote(dto: &CreateLoteDto) -> Result<(), ApiError> {
    post("/lotes", dto).await
}

pub async fn update_lote(id: LoteId, dto: &UpdateLoteDto) -> Result<(), ApiError> {
    put(&format!("/lotes/{}", id), dto).await
}
