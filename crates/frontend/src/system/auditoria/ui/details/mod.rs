use contracts::shared::date_format::format_datetime;
use contracts::shared::list_view::EMPTY_DISPLAY;
use contracts::system::auditoria::AuditRecord;
use leptos::prelude::*;
use thaw::*;

use crate::shared::list_utils::badge_color;
use crate::shared::modal_frame::{ModalFrame, ModalHeader};

/// Before/after snapshots of one audit event. The hash chain fields are shown
/// as received; nothing is verified client-side.
#[component]
pub fn AuditDetails(record: AuditRecord, on_close: Callback<()>) -> impl IntoView {
    let changed = record.changed_keys();
    let antes = AuditRecord::pretty_values(record.valores_antes.as_ref());
    let despues = AuditRecord::pretty_values(record.valores_despues.as_ref());
    let hash = |value: &Option<String>| value.clone().unwrap_or_else(|| EMPTY_DISPLAY.to_string());
    let accion_color = badge_color(record.accion.badge_color());
    let accion_code = record.accion.code().to_string();
    let usuario = record.usuario_label();
    let tabla = record.tabla_afectada.clone().unwrap_or_else(|| EMPTY_DISPLAY.to_string());
    let pk = record.pk_label();
    let fecha_hora = record.fecha_hora.as_deref().map(format_datetime).unwrap_or_else(|| EMPTY_DISPLAY.to_string());
    let hash_evento = hash(&record.hash_evento);
    let hash_anterior = hash(&record.hash_anterior);

    view! {
        <ModalFrame on_close=on_close modal_style="max-width: 860px; width: 90vw;">
            <ModalHeader title=format!("Evento #{}", record.id_evento) on_close=on_close />
            <div class="modal__body">
                <div class="detail-list">
                    <div class="detail-row">
                        <span class="detail-row__label">"Acción"</span>
                        <Badge appearance=BadgeAppearance::Tint color=accion_color>
                            {accion_code}
                        </Badge>
                    </div>
                    <div class="detail-row">
                        <span class="detail-row__label">"Usuario"</span>
                        <span class="detail-row__value">{usuario}</span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-row__label">"Tabla"</span>
                        <span class="detail-row__value">{tabla}</span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-row__label">"ID Afectado"</span>
                        <span class="detail-row__value">{pk}</span>
                    </div>
                    <div class="detail-row">
                        <span class="detail-row__label">"Fecha / Hora"</span>
                        <span class="detail-row__value">{fecha_hora}</span>
                    </div>
                </div>

                {(!changed.is_empty()).then(|| view! {
                    <div class="audit-changes">
                        <span class="detail-row__label">"Campos modificados: "</span>
                        {changed
                            .into_iter()
                            .map(|key| view! { <code class="audit-changes__key">{key}</code> })
                            .collect_view()}
                    </div>
                })}

                <div class="audit-diff">
                    <div class="audit-diff__side">
                        <h4>"Valores antes"</h4>
                        <pre class="json-block">{antes}</pre>
                    </div>
                    <div class="audit-diff__side">
                        <h4>"Valores después"</h4>
                        <pre class="json-block">{despues}</pre>
                    </div>
                </div>

                <div class="detail-list detail-list--mono">
                    <div class="detail-row">
                        <span class="detail-row__label">"Hash evento"</span>
                        <code class="detail-row__value">{hash_evento}</code>
                    </div>
                    <div class="detail-row">
                        <span class="detail-row__label">"Hash anterior"</span>
                        <code class="detail-row__value">{hash_anterior}</code>
                    </div>
                </div>
            </div>
            <div class="modal__footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cerrar"
                </Button>
            </div>
        </ModalFrame>
    }
}
