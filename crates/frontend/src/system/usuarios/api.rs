use contracts::system::usuarios::Usuario;

use crate::shared::api_utils::{get_json, ApiError};

pub async fn fetch_usuarios() -> Result<Vec<Usuario>, ApiError> {
    get_json("/usuarios/").await
}
