use contracts::system::session::{StoredUser, STORAGE_KEY};
use web_sys::window;

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Stored login payload. A malformed entry is logged and treated as absent.
pub fn read_user() -> Option<StoredUser> {
    let raw = get_local_storage()?.get_item(STORAGE_KEY).ok()??;
    match serde_json::from_str::<StoredUser>(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            log::warn!("Entrada '{}' inválida en localStorage: {}", STORAGE_KEY, e);
            None
        }
    }
}

pub fn save_user(user: &StoredUser) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage no disponible")?;
    let raw = serde_json::to_string(user).map_err(|e| e.to_string())?;
    storage
        .set_item(STORAGE_KEY, &raw)
        .map_err(|e| format!("No se pudo guardar la sesión: {:?}", e))
}

/// Logout wipes the whole local storage, not only the session key.
pub fn clear_all() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.clear();
    }
}
