use contracts::domain::a001_item::{Item, ItemForm, ItemTipo};
use contracts::domain::a004_ubicacion::Ubicacion;
use contracts::shared::validation::ValidationError;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_item::api;
use crate::shared::modal_frame::{ModalFrame, ModalHeader};

/// Create / update-full modal for catalog items.
#[component]
pub fn ItemDetails(
    editing: Option<Item>,
    /// Locations offered in the select; the raw id is still accepted when empty.
    #[prop(into)]
    ubicaciones: Signal<Vec<Ubicacion>>,
    on_saved: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let initial = editing.as_ref().map(ItemForm::from_item).unwrap_or_default();
    let id = editing.as_ref().map(|i| i.id_item);

    let codigo = RwSignal::new(initial.codigo);
    let descripcion = RwSignal::new(initial.descripcion);
    let tipo_item = RwSignal::new(initial.tipo_item);
    let id_ubicacion = RwSignal::new(initial.id_ubicacion);
    let unidad_medida = RwSignal::new(initial.unidad_medida);
    let stock_minimo = RwSignal::new(initial.stock_minimo);
    let errors = RwSignal::new(ValidationError::new());
    let saving = RwSignal::new(false);

    let save = move |_| {
        let form = ItemForm {
            id_ubicacion: id_ubicacion.get_untracked(),
            codigo: codigo.get_untracked(),
            descripcion: descripcion.get_untracked(),
            tipo_item: tipo_item.get_untracked(),
            unidad_medida: unidad_medida.get_untracked(),
            stock_minimo: stock_minimo.get_untracked(),
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
                Some(id) => api::update_item(id, &dto).await,
                None => api::create_item(&dto).await,
            };
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => {
                    let msg = if id.is_some() { "Error actualizando item" } else { "Error creando item" };
                    log::error!("{}: {}", msg, e);
                    let mut banner = ValidationError::new();
                    banner.push("form", msg);
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
                title=if id.is_some() { "Editar item" } else { "Crear nuevo item" }
                on_close=on_close
            />
            <div class="modal__body">
                {move || errors.with(|e| e.field("form").map(str::to_string)).map(|msg| view! {
                    <div class="alert alert--error">{msg}</div>
                })}
                <div class="form-group">
                    <Label>"Código *"</Label>
                    <Input value=codigo placeholder="Código" />
                    {field_error("codigo")}
                </div>
                <div class="form-group">
                    <Label>"Descripción *"</Label>
                    <Input value=descripcion placeholder="Descripción" />
                    {field_error("descripcion")}
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <Label>"Tipo"</Label>
                        <select
                            class="form-select"
                            prop:value=move || tipo_item.get()
                            on:change=move |ev| tipo_item.set(event_target_value(&ev))
                        >
                            {ItemTipo::KNOWN
                                .iter()
                                .map(|t| view! { <option value=t.code().to_string()>{t.label().to_string()}</option> })
                                .collect_view()}
                        </select>
                    </div>
                    <div class="form-group">
                        <Label>"Ubicación"</Label>
                        <select
                            class="form-select"
                            prop:value=move || id_ubicacion.get()
                            on:change=move |ev| id_ubicacion.set(event_target_value(&ev))
                        >
                            <option value="">"Sin ubicación"</option>
                            {move || {
                                let selected = id_ubicacion.get();
                                ubicaciones
                                    .get()
                                    .into_iter()
                                    .map(|u| {
                                        let value = u.id_ubicacion.to_string();
                                        let is_selected = value == selected;
                                        view! { <option value=value selected=is_selected>{u.nombre}</option> }
                                    })
                                    .collect_view()
                            }}
                        </select>
                        {field_error("id_ubicacion")}
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <Label>"Unidad *"</Label>
                        <Input value=unidad_medida placeholder="Unidad" />
                        {field_error("unidad_medida")}
                    </div>
                    <div class="form-group">
                        <Label>"Stock mínimo"</Label>
                        <Input value=stock_minimo placeholder="Stock mínimo" />
                        {field_error("stock_minimo")}
                    </div>
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
                    {move || if saving.get() { "Guardando..." } else if id.is_some() { "Guardar cambios" } else { "Crear" }}
                </Button>
            </div>
        </ModalFrame>
    }
}
