//! Top bar: sidebar toggle, today's date, notifications and the user menu.

use crate::layout::global_context::use_app_context;
use crate::shared::date_utils::today_iso;
use crate::shared::icons::{icon, small_icon};
use crate::system::auth::context::{do_logout, use_session};
use contracts::shared::date_format::format_date_long;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let session = use_session();
    let navigate = use_navigate();

    let today = format_date_long(&today_iso());

    let logout = move |_| {
        ctx.close_user_menu();
        do_logout();
        navigate("/login", Default::default());
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Ocultar menú" } else { "Mostrar menú" }
                >
                    {move || if is_sidebar_visible() { icon("chevrons-left") } else { icon("chevrons-right") }}
                </button>
                <span class="top-header__title">"Sistema Integral de Gestión Farmacéutica"</span>
            </div>

            <div class="top-header__actions">
                <span class="top-header__date">{today}</span>

                <button class="top-header__icon-btn" title="Notificaciones">
                    {icon("bell")}
                </button>

                <div class="top-header__user" on:click=move |_| ctx.toggle_user_menu()>
                    <span class="top-header__avatar">{move || session.user.with(|u| u.initials.clone())}</span>
                    <div class="top-header__user-text">
                        <span class="top-header__user-name">{move || session.user.with(|u| u.name.clone())}</span>
                        <span class="top-header__user-role">{move || session.user.with(|u| u.role.clone())}</span>
                    </div>
                    {small_icon("chevron-down")}
                </div>

                <Show when=move || ctx.user_menu_open.get()>
                    <div class="top-header__dropdown">
                        <div class="top-header__dropdown-header">
                            <strong>{move || session.user.with(|u| u.name.clone())}</strong>
                            <span>{move || session.user.with(|u| u.role.clone())}</span>
                        </div>
                        <button class="top-header__dropdown-item" on:click=logout.clone()>
                            {small_icon("logout")}
                            " Cerrar sesión"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
