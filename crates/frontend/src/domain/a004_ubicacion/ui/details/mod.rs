use contracts::domain::a004_ubicacion::{Ubicacion, UbicacionDto};
use contracts::shared::validation::ValidationError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_ubicacion::api;
use crate::shared::modal_frame::{ModalFrame, ModalHeader};

#[component]
pub fn UbicacionDetails(
    editing: Option<Ubicacion>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let initial = editing
        .as_ref()
        .map(UbicacionDto::from_ubicacion)
        .unwrap_or_default();
    let id = editing.as_ref().map(|u| u.id_ubicacion);

    let nombre = RwSignal::new(initial.nombre);
    let tipo = RwSignal::new(initial.tipo);
    let activo = RwSignal::new(initial.activo);
    let errors = RwSignal::new(ValidationError::new());
    let saving = RwSignal::new(false);

    let save = move |_| {
        let form = UbicacionDto {
            nombre: nombre.get_untracked(),
            tipo: tipo.get_untracked(),
            activo: activo.get_untracked(),
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
            let result = match id {
                Some(id) => api::update_ubicacion(id, &dto).await,
                None => api::create_ubicacion(&dto).await,
            };
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    log::error!("Error al guardar ubicación: {}", e);
                    let mut banner = ValidationError::new();
                    banner.push("form", "Error al guardar la ubicación. Por favor, intenta de nuevo.");
                    let _ = errors.try_set(banner);
                }
            }
            let _ = saving.try_set(false);
        });
    };

    let field_error = move |field: &'static str| {
        move || {
            errors
                .with(|e| e.field(field).map(str::to_string))
                .map(|msg| view! { <span class="field-error">{msg}</span> })
        }
    };

    view! {
        <ModalFrame on_close=on_close>
            <ModalHeader
                title=if id.is_some() { "Editar ubicación" } else { "Nueva ubicación" }
                on_close=on_close
            />
            <div class="modal__body">
                {move || errors.with(|e| e.field("form").map(str::to_string)).map(|msg| view! {
                    <div class="alert alert--error">{msg}</div>
                })}
                <div class="form-group">
                    <Label>"Nombre *"</Label>
                    <Input value=nombre placeholder="Ej: Almacén Central" />
                    {field_error("nombre")}
                </div>
                <div class="form-group">
                    <Label>"Tipo *"</Label>
                    <Input value=tipo placeholder="Ej: Almacén, Oficina, Bodega" />
                    {field_error("tipo")}
                </div>
                <div class="form-group">
                    <Checkbox checked=activo label="Activo" />
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
                    {move || if saving.get() { "Guardando..." } else if id.is_some() { "Actualizar" } else { "Crear" }}
                </Button>
            </div>
        </ModalFrame>
    }
}
