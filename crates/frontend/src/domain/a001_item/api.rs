use contracts::domain::a001_item::{Item, ItemDto, ItemId};

use crate::shared::api_utils::{get_json, post, put, ApiError};

pub async fn fetch_items() -> Result<Vec<Item>, ApiError> {
    get_json("/items/").await
}

pub async fn create_item(dto: &ItemDto) -> Result<(), ApiError> {
    post("/items/", dto).await
}

/// Replaces every editable field of the item.
pub async fn update_item(id: ItemId, dto: &ItemDto) -> Result<(), ApiError> {
    put(&format!("/items/update-full/{}", id), dto).await
}
