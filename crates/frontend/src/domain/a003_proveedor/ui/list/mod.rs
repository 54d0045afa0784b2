use contracts::domain::a003_proveedor::{Proveedor, ProveedorId};
use contracts::shared::list_view::{MutationStrategy, EMPTY_DISPLAY};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_proveedor::api;
use crate::domain::a003_proveedor::ui::details::ProveedorDetails;
use crate::shared::components::{
    FilterPanel, ListStatus, PageHeader, PaginationControls, SortableHeaderCell, StatCard,
};
use crate::shared::icons::small_icon;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::SearchInput;
use crate::shared::modal_frame::ConfirmDialog;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

const MUTATIONS: MutationStrategy = MutationStrategy::Refetch;

/// Modal state: `Some(None)` creates, `Some(Some(p))` edits.
type Editing = Option<Option<Proveedor>>;

#[component]
pub fn ProveedorList() -> impl IntoView {
    let ctrl = ListController::mount("proveedores", Proveedor::list_config(), api::fetch_proveedores);
    let is_filter_expanded = RwSignal::new(true);
    let editing = RwSignal::new(Editing::None);
    let pending_delete = RwSignal::new(Option::<ProveedorId>::None);
    let deleting = RwSignal::new(false);
    let action_error = RwSignal::new(Option::<String>::None);

    let confirm_delete = move |_| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        deleting.set(true);
        spawn_local(async move {
            match api::delete_proveedor(id).await {
                Ok(()) => {
                    log::info!("Proveedor {} eliminado", id);
                    action_error.set(None);
                    ctrl.after_delete(MUTATIONS, &id);
                }
                Err(e) => {
                    log::error!("Error al eliminar proveedor: {}", e);
                    action_error.set(Some("Error al eliminar proveedor".to_string()));
                }
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    };

    let on_saved = Callback::new(move |_| {
        let edited = editing.get_untracked().flatten().map(|p| p.id_proveedor);
        editing.set(None);
        match edited {
            Some(id) => ctrl.after_update(MUTATIONS, &id, |_| ()),
            None => ctrl.load(),
        }
    });

    let total = Signal::derive(move || Some(ctrl.state.with(|s| s.records().len()) as u64));
    let en_busqueda = Signal::derive(move || Some(ctrl.page_info().total_count as u64));

    view! {
        <PageFrame page_id="a003_proveedor--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <PageHeader
                    title="Proveedores"
                    subtitle="Gestiona y organiza tus proveedores con facilidad".to_string()
                    icon_name="suppliers"
                >
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(None))
                    >
                        {small_icon("plus")}
                        " Agregar Proveedor"
                    </Button>
                </PageHeader>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard label="Total" icon_name="suppliers" value=total subtitle="proveedores registrados".to_string() />
                    <StatCard label="En búsqueda" icon_name="search" value=en_busqueda subtitle="coinciden con el filtro".to_string() />
                </div>

                {move || action_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=Signal::derive(move || usize::from(!ctrl.search().trim().is_empty()))
                    pagination_controls=move || view! {
                        <PaginationControls
                            info=Signal::derive(move || ctrl.page_info())
                            links=Signal::derive(move || ctrl.page_links())
                            on_page_change=Callback::new(move |p| ctrl.set_page(p))
                            on_page_size_change=Callback::new(move |s| ctrl.set_page_size(s))
                            page_size_options=ctrl.page_size_options()
                        />
                    }
                    filter_content=move || view! {
                        <SearchInput
                            value=Signal::derive(move || ctrl.search())
                            on_change=Callback::new(move |v| ctrl.set_search(v))
                            placeholder="Busca por nombre o NIT..."
                        />
                    }
                />

                <ListStatus
                    loading=Signal::derive(move || ctrl.is_loading())
                    error=Signal::derive(move || ctrl.error())
                    visible_count=Signal::derive(move || ctrl.page_info().total_count)
                    loaded_count=Signal::derive(move || ctrl.page_info().loaded_count)
                    on_retry=Callback::new(move |_| ctrl.load())
                    empty_message="Comienza agregando tu primer proveedor"
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="Nombre" sort_field="nombre" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() min_width=200.0 />
                                <SortableHeaderCell label="NIT" sort_field="nit" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() />
                                <SortableHeaderCell label="Teléfono" sort_field="telefono" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() />
                                <TableHeaderCell resizable=false min_width=90.0>"Acciones"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                ctrl.visible()
                                    .into_iter()
                                    .map(|p| {
                                        let id = p.id_proveedor;
                                        let for_edit = p.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>
                                                        <strong>{p.nombre.clone()}</strong>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <span class="badge badge--secondary">{p.nit.clone()}</span>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {p.telefono.clone().unwrap_or_else(|| EMPTY_DISPLAY.to_string())}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <div class="table__actions">
                                                        <button
                                                            class="icon-btn"
                                                            title="Editar"
                                                            on:click=move |_| editing.set(Some(Some(for_edit.clone())))
                                                        >
                                                            {small_icon("edit")}
                                                        </button>
                                                        <button
                                                            class="icon-btn icon-btn--danger"
                                                            title="Eliminar"
                                                            on:click=move |_| pending_delete.set(Some(id))
                                                        >
                                                            {small_icon("trash")}
                                                        </button>
                                                    </div>
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>
                </div>
            </div>

            {move || editing.get().map(|current| view! {
                <ProveedorDetails
                    editing=current
                    on_saved=on_saved
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}

            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Eliminar proveedor"
                    message="¿Estás seguro de que deseas eliminar este proveedor?"
                    confirm_label="Eliminar"
                    danger=true
                    pending=Signal::derive(move || deleting.get())
                    on_confirm=Callback::new(confirm_delete)
                    on_cancel=Callback::new(move |_| pending_delete.set(None))
                />
            </Show>
        </PageFrame>
    }
}
