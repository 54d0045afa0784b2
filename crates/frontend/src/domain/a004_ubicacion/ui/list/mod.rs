use contracts::domain::a004_ubicacion::{Ubicacion, UbicacionId, UbicacionStats, ESTADO_ACTIVO, ESTADO_INACTIVO};
use contracts::shared::list_view::{MutationStrategy, EMPTY_DISPLAY};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a004_ubicacion::api;
use crate::domain::a004_ubicacion::ui::details::UbicacionDetails;
use crate::shared::components::{
    FilterPanel, ListStatus, PageHeader, PaginationControls, SortableHeaderCell, StatCard, StatTone,
};
use crate::shared::icons::small_icon;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::{plain_options, FilterSelect, SearchInput};
use crate::shared::modal_frame::ConfirmDialog;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

const MUTATIONS: MutationStrategy = MutationStrategy::Refetch;

#[component]
pub fn UbicacionList() -> impl IntoView {
    let ctrl = ListController::mount("ubicaciones", Ubicacion::list_config(), api::fetch_ubicaciones);
    let is_filter_expanded = RwSignal::new(true);
    let editing = RwSignal::new(Option::<Option<Ubicacion>>::None);
    let pending_delete = RwSignal::new(Option::<UbicacionId>::None);
    let deleting = RwSignal::new(false);
    let action_error = RwSignal::new(Option::<String>::None);

    let stats = Memo::new(move |_| ctrl.state.with(|s| UbicacionStats::compute(s.records())));

    let confirm_delete = move |_| {
        let Some(id) = pending_delete.get_untracked() else {
            return;
        };
        deleting.set(true);
        spawn_local(async move {
            match api::delete_ubicacion(id).await {
                Ok(()) => {
                    action_error.set(None);
                    ctrl.after_delete(MUTATIONS, &id);
                }
                Err(e) => {
                    log::error!("Error al eliminar ubicación: {}", e);
                    action_error.set(Some(
                        "Error al eliminar la ubicación. Por favor, intenta de nuevo.".to_string(),
                    ));
                }
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    };

    let estado_options = Signal::derive(|| {
        vec![
            (ESTADO_ACTIVO.to_string(), "Activos".to_string()),
            (ESTADO_INACTIVO.to_string(), "Inactivos".to_string()),
        ]
    });

    view! {
        <PageFrame page_id="a004_ubicacion--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <PageHeader
                    title="Ubicaciones"
                    subtitle="Administra las ubicaciones del sistema".to_string()
                    icon_name="locations"
                >
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                        {small_icon("plus")}
                        " Nueva Ubicación"
                    </Button>
                </PageHeader>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard label="Total" icon_name="locations" value=Signal::derive(move || Some(stats.get().total as u64)) />
                    <StatCard label="Activos" icon_name="check" tone=StatTone::Success value=Signal::derive(move || Some(stats.get().activos as u64)) />
                    <StatCard label="Inactivos" icon_name="x" tone=StatTone::Error value=Signal::derive(move || Some(stats.get().inactivos as u64)) />
                    <StatCard label="Tipos" icon_name="inventory" value=Signal::derive(move || Some(stats.get().tipos as u64)) />
                </div>

                {move || action_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <FilterPanel
                    is_expanded=is_filter_expanded
                    active_filters_count=Signal::derive(move || ctrl.active_filters().len() + usize::from(!ctrl.search().trim().is_empty()))
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
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <SearchInput
                                value=Signal::derive(move || ctrl.search())
                                on_change=Callback::new(move |v| ctrl.set_search(v))
                                placeholder="Buscar por nombre o tipo..."
                            />
                            <FilterSelect
                                label="Tipo"
                                all_label="Todos"
                                value=Signal::derive(move || ctrl.filter_value("tipo"))
                                options=Signal::derive(move || plain_options(ctrl.filter_options("tipo")))
                                on_change=Callback::new(move |v: String| ctrl.set_filter("tipo", &v))
                            />
                            <FilterSelect
                                label="Estado"
                                all_label="Todos"
                                value=Signal::derive(move || ctrl.filter_value("estado"))
                                options=estado_options
                                on_change=Callback::new(move |v: String| ctrl.set_filter("estado", &v))
                            />
                        </Flex>
                    }
                />

                <ListStatus
                    loading=Signal::derive(move || ctrl.is_loading())
                    error=Signal::derive(move || ctrl.error())
                    visible_count=Signal::derive(move || ctrl.page_info().total_count)
                    loaded_count=Signal::derive(move || ctrl.page_info().loaded_count)
                    on_retry=Callback::new(move |_| ctrl.load())
                    empty_message="No se encontraron ubicaciones"
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="ID" sort_field="id_ubicacion" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() min_width=60.0 />
                                <SortableHeaderCell label="Nombre" sort_field="nombre" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() min_width=200.0 />
                                <SortableHeaderCell label="Tipo" sort_field="tipo" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() />
                                <SortableHeaderCell label="Estado" sort_field="estado" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() />
                                <TableHeaderCell resizable=false min_width=90.0>"Acciones"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                ctrl.visible()
                                    .into_iter()
                                    .map(|u| {
                                        let id = u.id_ubicacion;
                                        let for_edit = u.clone();
                                        let estado_badge = if u.activo {
                                            view! { <span class="badge badge--success">"Activo"</span> }.into_any()
                                        } else {
                                            view! { <span class="badge badge--danger">"Inactivo"</span> }.into_any()
                                        };
                                        view! {
                                            <TableRow>
                                                <TableCell><TableCellLayout>{id.to_string()}</TableCellLayout></TableCell>
                                                <TableCell>
                                                    <TableCellLayout truncate=true><strong>{u.nombre.clone()}</strong></TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{u.tipo.clone().unwrap_or_else(|| EMPTY_DISPLAY.to_string())}</TableCellLayout>
                                                </TableCell>
                                                <TableCell><TableCellLayout>{estado_badge}</TableCellLayout></TableCell>
                                                <TableCell>
                                                    <div class="table__actions">
                                                        <button class="icon-btn" title="Editar" on:click=move |_| editing.set(Some(Some(for_edit.clone())))>
                                                            {small_icon("edit")}
                                                        </button>
                                                        <button class="icon-btn icon-btn--danger" title="Eliminar" on:click=move |_| pending_delete.set(Some(id))>
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
                <UbicacionDetails
                    editing=current
                    on_saved=Callback::new(move |_| {
                        let edited = editing.get_untracked().flatten().map(|u| u.id_ubicacion);
                        editing.set(None);
                        match edited {
                            Some(id) => ctrl.after_update(MUTATIONS, &id, |_| ()),
                            None => ctrl.load(),
                        }
                    })
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}

            <Show when=move || pending_delete.get().is_some()>
                <ConfirmDialog
                    title="Confirmar eliminación"
                    message="¿Estás seguro de que deseas eliminar esta ubicación? Esta acción no se puede deshacer."
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
