use contracts::system::auditoria::AuditRecord;

use crate::shared::api_utils::{get_json, ApiError};

pub async fn fetch_auditoria() -> Result<Vec<AuditRecord>, ApiError> {
    get_json("/auditoria/").await
}
