use contracts::domain::a005_comprobante::{Comprobante, ComprobanteId};
use contracts::shared::date_format::format_datetime;
use contracts::shared::list_view::EMPTY_DISPLAY;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_comprobante::api;
use crate::shared::modal_frame::{ModalFrame, ModalHeader};

/// Read-only view of one receipt, fetched fresh from the server.
#[component]
pub fn ComprobanteDetails(id: ComprobanteId, on_close: Callback<()>) -> impl IntoView {
    let detail = RwSignal::new(Option::<Comprobante>::None);
    let error = RwSignal::new(Option::<String>::None);
    let loading = RwSignal::new(true);

    spawn_local(async move {
        match api::fetch_comprobante(id).await {
            Ok(c) => {
                let _ = detail.try_set(Some(c));
            }
            Err(e) => {
                log::error!("Error al cargar comprobante {}: {}", id, e);
                let _ = error.try_set(Some("Error al cargar los detalles del comprobante".to_string()));
            }
        }
        let _ = loading.try_set(false);
    });

    let row = |label: &'static str, value: String| {
        view! {
            <div class="detail-row">
                <span class="detail-row__label">{label}</span>
                <span class="detail-row__value">{value}</span>
            </div>
        }
    };

    view! {
        <ModalFrame on_close=on_close modal_style="max-width: 520px;">
            <ModalHeader title=format!("Comprobante #{}", id) on_close=on_close />
            <div class="modal__body">
                <Show when=move || loading.get()>
                    <div class="list-status list-status--loading">
                        <Spinner />
                        <span>"Cargando..."</span>
                    </div>
                </Show>
                {move || error.get().map(|msg| view! { <div class="alert alert--error">{msg}</div> })}
                {move || detail.get().map(|c| {
                    let estado_class = if c.estado.is_entregado() { "badge badge--success" } else { "badge badge--warning" };
                    view! {
                        <div class="detail-list">
                            {row("ID", c.id_comprobante.to_string())}
                            {row("ID Movimiento", c.id_movimiento.map(|v| v.to_string()).unwrap_or_else(|| EMPTY_DISPLAY.to_string()))}
                            {row("ID Proveedor", c.id_proveedor.map(|v| v.to_string()).unwrap_or_else(|| EMPTY_DISPLAY.to_string()))}
                            {row("Canal", c.canal().to_string())}
                            <div class="detail-row">
                                <span class="detail-row__label">"Estado"</span>
                                <span class=estado_class>{c.estado.label().to_string()}</span>
                            </div>
                            {row("Fecha", c.fecha.as_deref().map(format_datetime).unwrap_or_else(|| EMPTY_DISPLAY.to_string()))}
                        </div>
                    }
                })}
            </div>
            <div class="modal__footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cerrar"
                </Button>
            </div>
        </ModalFrame>
    }
}
