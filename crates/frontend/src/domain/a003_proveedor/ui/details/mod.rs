use contracts::domain::a003_proveedor::{Proveedor, ProveedorDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_proveedor::api;
use crate::shared::api_utils::ApiError;
use crate::shared::modal_frame::{ModalFrame, ModalHeader};

/// Create (`editing = None`) or edit modal. `on_saved` runs after the backend
/// accepted the change; the list then refetches.
#[component]
pub fn ProveedorDetails(
    editing: Option<Proveedor>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let initial = editing
        .as_ref()
        .map(ProveedorDto::from_proveedor)
        .unwrap_or_default();
    let id = editing.as_ref().map(|p| p.id_proveedor);

    let nombre = RwSignal::new(initial.nombre);
    let nit = RwSignal::new(initial.nit);
    let telefono = RwSignal::new(initial.telefono);
    let error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);

    let save = move |_| {
        let form = ProveedorDto {
            nombre: nombre.get_untracked(),
            nit: nit.get_untracked(),
            telefono: telefono.get_untracked(),
        };
        let dto = match form.validate() {
            Ok(dto) => dto,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        error.set(None);
        saving.set(true);
        spawn_local(async move {
            let result: Result<(), ApiError> = match id {
                Some(id) => api::update_proveedor(id, &dto).await,
                None => api::create_proveedor(&dto).await,
            };
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("Error al guardar proveedor: {}", e);
                    error.set(Some("Error al guardar proveedor".to_string()));
                }
            }
            let _ = saving.try_set(false);
        });
    };

    let title = if id.is_some() { "Editar proveedor" } else { "Nuevo proveedor" };

    view! {
        <ModalFrame on_close=on_close>
            <ModalHeader title=title on_close=on_close />
            <div class="modal__body">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                <div class="form-group">
                    <Label>"Nombre *"</Label>
                    <Input value=nombre placeholder="Nombre del proveedor" />
                </div>
                <div class="form-group">
                    <Label>"NIT *"</Label>
                    <Input value=nit placeholder="Número de identificación tributaria" />
                </div>
                <div class="form-group">
                    <Label>"Teléfono"</Label>
                    <Input value=telefono placeholder="Opcional" />
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
                    {move || if saving.get() { "Guardando..." } else if id.is_some() { "Actualizar" } else { "Guardar" }}
                </Button>
            </div>
        </ModalFrame>
    }
}
