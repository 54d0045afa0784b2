use contracts::system::session::{SessionUser, StoredUser, LOGIN_DELAY_MS};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

use super::storage;

/// Identity shown by the shell. Read once from local storage when the shell
/// mounts; later changes to the storage are not observed.
#[derive(Clone, Copy)]
pub struct SessionContext {
    pub user: RwSignal<SessionUser>,
}

/// Called by the shell layout.
pub fn provide_session() -> SessionContext {
    let stored = storage::read_user();
    let ctx = SessionContext {
        user: RwSignal::new(SessionUser::from_stored(stored.as_ref())),
    };
    provide_context(ctx);
    ctx
}

pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in component tree")
}

/// Simulated sign-in: waits, then stores the fabricated user. No credential
/// is checked anywhere.
pub async fn do_login(username: &str) -> Result<StoredUser, String> {
    TimeoutFuture::new(LOGIN_DELAY_MS).await;
    let user = StoredUser::from_login(username);
    storage::save_user(&user)?;
    log::info!("Sesión iniciada: {}", username.trim());
    Ok(user)
}

pub fn do_logout() {
    storage::clear_all();
    log::info!("Sesión cerrada");
}
