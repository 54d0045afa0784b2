use leptos::prelude::*;
use leptos_router::components::A;

/// Static page: no e-mail is actually sent.
#[component]
pub fn RecuperarContrasenaPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let submitted = RwSignal::new(false);

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Recuperar contraseña"</h1>
                <p class="login-box__hint">
                    "Ingresa tu correo y te enviaremos un enlace para restablecerla."
                </p>
                <Show
                    when=move || submitted.get()
                    fallback=move || view! {
                        <form on:submit=move |ev: leptos::ev::SubmitEvent| {
                            ev.prevent_default();
                            if !email.get_untracked().trim().is_empty() {
                                submitted.set(true);
                            }
                        }>
                            <div class="form-group">
                                <label for="email">"Correo electrónico"</label>
                                <input
                                    type="email"
                                    id="email"
                                    placeholder="usuario@farmacia.com"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                            </div>
                            <button type="submit" class="btn-primary">
                                {crate::shared::icons::small_icon("mail")}
                                " Enviar enlace"
                            </button>
                        </form>
                    }
                >
                    <div class="alert alert--success">
                        "Si el correo está registrado, recibirás un enlace en unos minutos."
                    </div>
                </Show>
                <div class="login-box__links">
                    <A href="/login">"← Volver al inicio de sesión"</A>
                </div>
            </div>
        </div>
    }
}
