use contracts::system::session::LoginForm;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::system::auth::context::do_login;

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let username_error = RwSignal::new(Option::<String>::None);
    let password_error = RwSignal::new(Option::<String>::None);
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if is_loading.get_untracked() {
            return;
        }

        let form = LoginForm {
            username: username.get_untracked(),
            password: password.get_untracked(),
        };
        error_message.set(None);
        if let Err(errors) = form.validate() {
            username_error.set(errors.field("username").map(str::to_string));
            password_error.set(errors.field("password").map(str::to_string));
            return;
        }
        username_error.set(None);
        password_error.set(None);
        is_loading.set(true);

        let navigate = navigate.clone();
        spawn_local(async move {
            match do_login(&form.username).await {
                Ok(_) => navigate("/dashboard", Default::default()),
                Err(e) => {
                    log::error!("Error al iniciar sesión: {}", e);
                    error_message.set(Some("No se pudo iniciar sesión. Intenta de nuevo.".to_string()));
                    is_loading.set(false);
                }
            }
        });
    };

    let field_class = |error: RwSignal<Option<String>>| {
        move || {
            if error.get().is_some() {
                "form-group form-group--error"
            } else {
                "form-group"
            }
        }
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <div class="login-box__brand">
                    <span class="login-box__logo">{crate::shared::icons::icon("pill")}</span>
                    <h1>"FarmaGestión"</h1>
                </div>
                <h2>"Sistema Integral de Gestión Farmacéutica"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">{move || error_message.get().unwrap_or_default()}</div>
                </Show>

                <form on:submit=on_submit novalidate=true>
                    <div class=field_class(username_error)>
                        <label for="username">"Usuario"</label>
                        <input
                            type="text"
                            id="username"
                            placeholder="Ingresa tu usuario"
                            prop:value=move || username.get()
                            on:input=move |ev| {
                                username.set(event_target_value(&ev));
                                username_error.set(None);
                            }
                            disabled=move || is_loading.get()
                        />
                        {move || username_error.get().map(|e| view! { <span class="field-error">{e}</span> })}
                    </div>

                    <div class=field_class(password_error)>
                        <label for="password">"Contraseña"</label>
                        <input
                            type="password"
                            id="password"
                            placeholder="Ingresa tu contraseña"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                password_error.set(None);
                            }
                            disabled=move || is_loading.get()
                        />
                        {move || password_error.get().map(|e| view! { <span class="field-error">{e}</span> })}
                    </div>

                    <div class="login-box__links">
                        <A href="/recuperar-contrasena">"¿Olvidaste tu contraseña?"</A>
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Iniciando sesión..." } else { "Iniciar sesión" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
