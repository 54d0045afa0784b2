use crate::shared::icons::small_icon;
use leptos::prelude::*;
use thaw::*;

/// Loading, error and empty states shared by every list page. Renders nothing
/// once there are rows to show, so it can sit right above the table.
#[component]
pub fn ListStatus(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] error: Signal<Option<String>>,
    /// Rows left after search and filters.
    #[prop(into)]
    visible_count: Signal<usize>,
    /// Rows loaded from the backend.
    #[prop(into)]
    loaded_count: Signal<usize>,
    on_retry: Callback<()>,
    #[prop(optional, into)] empty_message: Option<String>,
) -> impl IntoView {
    let empty_message = empty_message.unwrap_or_else(|| "No hay registros".to_string());

    move || {
        if let Some(message) = error.get() {
            return view! {
                <div class="alert alert--error">
                    {small_icon("alert")}
                    <span>{message}</span>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_retry.run(())
                        disabled=loading
                    >
                        "Reintentar"
                    </Button>
                </div>
            }
            .into_any();
        }
        if loading.get() && loaded_count.get() == 0 {
            return view! {
                <div class="list-status list-status--loading">
                    <Spinner />
                    <span>"Cargando..."</span>
                </div>
            }
            .into_any();
        }
        if visible_count.get() == 0 && !loading.get() {
            let text = if loaded_count.get() == 0 {
                empty_message.clone()
            } else {
                "No se encontraron resultados con los filtros actuales".to_string()
            };
            return view! { <div class="list-status list-status--empty">{text}</div> }.into_any();
        }
        view! { <></> }.into_any()
    }
}
