use contracts::domain::a006_existencia::Existencia;

use crate::shared::api_utils::{get_json, ApiError};

pub async fn fetch_existencias() -> Result<Vec<Existencia>, ApiError> {
    get_json("/existencias/").await
}
