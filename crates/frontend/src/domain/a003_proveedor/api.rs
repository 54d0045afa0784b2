use contracts::domain::a003_proveedor::{Proveedor, ProveedorDto, ProveedorId};

use crate::shared::api_utils::{delete, get_json, post, put, ApiError};

pub async fn fetch_proveedores() -> Result<Vec<Proveedor>, ApiError> {
    get_json("/proveedores/").await
}

pub async fn create_proveedor(dto: &ProveedorDto) -> Result<(), ApiError> {
    post("/proveedores/", dto).await
}

pub async fn update_proveedor(id: ProveedorId, dto: &ProveedorDto) -> Result<(), ApiError> {
    put(&format!("/proveedores/{}", id), dto).await
}

pub async fn delete_proveedor(id: ProveedorId) -> Result<(), ApiError> {
    delete(&format!("/proveedores/{}", id)).await
}
