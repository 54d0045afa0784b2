use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404 | Página no encontrada"</h1>
            <A href="/dashboard">"Ir al inicio"</A>
        </div>
    }
}
