use leptos::prelude::*;

/// UI state of the shell itself (not of any page).
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
    pub user_menu_open: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            left_open: RwSignal::new(true),
            user_menu_open: RwSignal::new(false),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|v| *v = !*v);
    }

    pub fn toggle_user_menu(&self) {
        self.user_menu_open.update(|v| *v = !*v);
    }

    pub fn close_user_menu(&self) {
        self.user_menu_open.set(false);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
