use contracts::domain::a004_ubicacion::{Ubicacion, UbicacionDto, UbicacionId};

use crate::shared::api_utils::{delete, get_json, post, put, ApiError};

pub async fn fetch_ubicaciones() -> Result<Vec<Ubicacion>, ApiError> {
    get_json("/ubicaciones/").await
}

pub async fn create_ubicacion(dto: &UbicacionDto) -> Result<(), ApiError> {
    post("/ubicaciones/", dto).await
}

pub async fn update_ubicacion(id: UbicacionId, dto: &UbicacionDto) -> Result<(), ApiError> {
    put(&format!("/ubicaciones/{}", id), dto).await
}

pub async fn delete_ubicacion(id: UbicacionId) -> Result<(), ApiError> {
    delete(&format!("/ubicaciones/{}", id)).await
}
