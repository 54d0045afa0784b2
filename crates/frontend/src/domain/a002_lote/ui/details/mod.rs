use contracts::domain::a002_lote::{Lote, LoteEditForm, LoteForm};
use contracts::domain::a003_proveedor::Proveedor;
use contracts::domain::a004_ubicacion::Ubicacion;
use contracts::shared::validation::ValidationError;
use contracts::system::usuarios::UsuarioId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_lote::api;
use crate::domain::a003_proveedor::api::fetch_proveedores;
use crate::domain::a004_ubicacion::api::fetch_ubicaciones;
use crate::shared::modal_frame::{ModalFrame, ModalHeader};

/// The login stub carries no user id, so stock movements are attributed to
/// the seeded administrator.
const USUARIO_REGISTRO: UsuarioId = UsuarioId(1);

fn error_slot(errors: RwSignal<ValidationError>, field: &'static str) -> impl Fn() -> Option<AnyView> {
    move || {
        errors
            .with(|e| e.field(field).map(str::to_string))
            .map(|msg| view! { <span class="field-error">{msg}</span> }.into_any())
    }
}

/// Creates item, batch and initial stock entry in one request.
#[component]
pub fn LoteCreate(on_saved: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let initial = LoteForm::default();
    let nombre_item = RwSignal::new(initial.nombre_item);
    let unidad_medida = RwSignal::new(initial.unidad_medida);
    let stock_minimo = RwSignal::new(initial.stock_minimo);
    let id_proveedor = RwSignal::new(initial.id_proveedor);
    let codigo_lote = RwSignal::new(initial.codigo_lote);
    let fecha_vencimiento = RwSignal::new(initial.fecha_vencimiento);
    let costo_unitario = RwSignal::new(initial.costo_unitario);
    let id_ubicacion_destino = RwSignal::new(initial.id_ubicacion_destino);
    let cantidad = RwSignal::new(initial.cantidad);
    let motivo = RwSignal::new(initial.motivo);
    let errors = RwSignal::new(ValidationError::new());
    let saving = RwSignal::new(false);

    let proveedores = RwSignal::new(Vec::<Proveedor>::new());
    let ubicaciones = RwSignal::new(Vec::<Ubicacion>::new());
    spawn_local(async move {
        match fetch_proveedores().await {
            Ok(rows) => {
                let _ = proveedores.try_set(rows);
            }
            Err(e) => log::warn!("No se pudieron cargar proveedores: {}", e),
        }
        match fetch_ubicaciones().await {
            Ok(rows) => {
                let _ = ubicaciones.try_set(rows.into_iter().filter(|u| u.activo).collect());
            }
            Err(e) => log::warn!("No se pudieron cargar ubicaciones: {}", e),
        }
    });

    let save = move |_| {
        let form = LoteForm {
            nombre_item: nombre_item.get_untracked(),
            unidad_medida: unidad_medida.get_untracked(),
            stock_minimo: stock_minimo.get_untracked(),
            id_proveedor: id_proveedor.get_untracked(),
            codigo_lote: codigo_lote.get_untracked(),
            fecha_vencimiento: fecha_vencimiento.get_untracked(),
            costo_unitario: costo_unitario.get_untracked(),
            id_ubicacion_destino: id_ubicacion_destino.get_untracked(),
            cantidad: cantidad.get_untracked(),
            motivo: motivo.get_untracked(),
        };
        let dto = match form.validate(USUARIO_REGISTRO) {
            Ok(dto) => dto,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(Default::default());
        saving.set(true);
        spawn_local(async move {
            match api::create_lote(&dto).await {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("Error creando lote: {}", e);
                    let mut banner = ValidationError::new();
                    banner.push("form", "Error creando lote. Revisa los campos.");
                    let _ = errors.try_set(banner);
                }
            }
            let _ = saving.try_set(false);
        });
    };

    view! {
        <ModalFrame on_close=on_close modal_style="max-width: 640px;">
            <ModalHeader title="Crear Lote" on_close=on_close />
            <div class="modal__body">
                {error_slot(errors, "form")}
                <h3 class="form-section">"Ítem"</h3>
                <div class="form-group">
                    <Label>"Nombre del ítem *"</Label>
                    <Input value=nombre_item placeholder="Nombre del ítem" />
                    {error_slot(errors, "nombre_item")}
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <Label>"Unidad de medida *"</Label>
                        <Input value=unidad_medida placeholder="Unidad de medida" />
                        {error_slot(errors, "unidad_medida")}
                    </div>
                    <div class="form-group">
                        <Label>"Stock mínimo"</Label>
                        <Input value=stock_minimo placeholder="Stock mínimo" />
                        {error_slot(errors, "stock_minimo")}
                    </div>
                </div>

                <h3 class="form-section">"Lote"</h3>
                <div class="form-row">
                    <div class="form-group">
                        <Label>"Proveedor *"</Label>
                        <select
                            class="form-select"
                            prop:value=move || id_proveedor.get()
                            on:change=move |ev| id_proveedor.set(event_target_value(&ev))
                        >
                            <option value="">"Selecciona un proveedor"</option>
                            {move || proveedores
                                .get()
                                .into_iter()
                                .map(|p| view! { <option value=p.id_proveedor.to_string()>{p.option_label()}</option> })
                                .collect_view()}
                        </select>
                        {error_slot(errors, "id_proveedor")}
                    </div>
                    <div class="form-group">
                        <Label>"Código del lote *"</Label>
                        <Input value=codigo_lote placeholder="Código del lote" />
                        {error_slot(errors, "codigo_lote")}
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <Label>"Fecha de vencimiento *"</Label>
                        <input
                            type="date"
                            class="form-input"
                            prop:value=move || fecha_vencimiento.get()
                            on:input=move |ev| fecha_vencimiento.set(event_target_value(&ev))
                        />
                        {error_slot(errors, "fecha_vencimiento")}
                    </div>
                    <div class="form-group">
                        <Label>"Costo unitario"</Label>
                        <Input value=costo_unitario placeholder="Costo unitario" />
                        {error_slot(errors, "costo_unitario")}
                    </div>
                </div>

                <h3 class="form-section">"Ingreso inicial"</h3>
                <div class="form-row">
                    <div class="form-group">
                        <Label>"Ubicación destino *"</Label>
                        <select
                            class="form-select"
                            prop:value=move || id_ubicacion_destino.get()
                            on:change=move |ev| id_ubicacion_destino.set(event_target_value(&ev))
                        >
                            <option value="">"Selecciona una ubicación"</option>
                            {move || ubicaciones
                                .get()
                                .into_iter()
                                .map(|u| view! { <option value=u.id_ubicacion.to_string()>{u.nombre}</option> })
                                .collect_view()}
                        </select>
                        {error_slot(errors, "id_ubicacion_destino")}
                    </div>
                    <div class="form-group">
                        <Label>"Cantidad"</Label>
                        <Input value=cantidad placeholder="Cantidad" />
                        {error_slot(errors, "cantidad")}
                    </div>
                </div>
                <div class="form-group">
                    <Label>"Motivo"</Label>
                    <Input value=motivo placeholder="Motivo del ingreso" />
                </div>
            </div>
            <div class="modal__footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancelar"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=save
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Guardando..." } else { "Crear" }}
                </Button>
            </div>
        </ModalFrame>
    }
}

/// Only expiry date and unit cost of an existing batch can change.
#[component]
pub fn LoteEdit(lote: Lote, on_saved: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let initial = LoteEditForm::from_lote(&lote);
    let id = lote.id_lote;
    let fecha_vencimiento = RwSignal::new(initial.fecha_vencimiento);
    let costo_unitario = RwSignal::new(initial.costo_unitario);
    let errors = RwSignal::new(ValidationError::new());
    let saving = RwSignal::new(false);

    let save = move |_| {
        let form = LoteEditForm {
            fecha_vencimiento: fecha_vencimiento.get_untracked(),
            costo_unitario: costo_unitario.get_untracked(),
        };
        let dto = match form.validate() {
            Ok(dto) => dto,
            Err(e) => {
                errors.set(e);
                return;
            }
        };
        errors.set(Default::default());
        saving.set(true);
        spawn_local(async move {
            match api::update_lote(id, &dto).await {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("Error actualizando lote {}: {}", id, e);
                    let mut banner = ValidationError::new();
                    banner.push("form", "Error actualizando lote");
                    let _ = errors.try_set(banner);
                }
            }
            let _ = saving.try_set(false);
        });
    };

    view! {
        <ModalFrame on_close=on_close>
            <ModalHeader title=format!("Editar Lote {}", lote.codigo_lote) on_close=on_close />
            <div class="modal__body">
                {error_slot(errors, "form")}
                <div class="form-group">
                    <Label>"Fecha de Vencimiento"</Label>
                    <input
                        type="date"
                        class="form-input"
                        prop:value=move || fecha_vencimiento.get()
                        on:input=move |ev| fecha_vencimiento.set(event_target_value(&ev))
                    />
                    {error_slot(errors, "fecha_vencimiento")}
                </div>
                <div class="form-group">
                    <Label>"Costo Unitario"</Label>
                    <Input value=costo_unitario placeholder="Costo unitario" />
                    {error_slot(errors, "costo_unitario")}
                </div>
            </div>
            <div class="modal__footer">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close.run(())>
                    "Cancelar"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=save
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Guardando..." } else { "Guardar cambios" }}
                </Button>
            </div>
        </ModalFrame>
    }
}
