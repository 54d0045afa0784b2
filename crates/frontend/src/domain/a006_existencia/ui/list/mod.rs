use contracts::domain::a006_existencia::Existencia;
use contracts::shared::list_view::{FieldValue, EMPTY_DISPLAY};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a006_existencia::api;
use crate::shared::components::{FilterPanel, ListStatus, PaginationControls, SortableHeaderCell};
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::{FilterSelect, SearchInput};

/// Stock on hand per lot and location. Read-only.
#[component]
pub fn ExistenciaPanel() -> impl IntoView {
    let ctrl = ListController::mount("existencias", Existencia::list_config(), api::fetch_existencias);
    let is_filter_expanded = RwSignal::new(true);

    // Filter values are ids; show the joined name when the rows carry it.
    let ubicacion_options = Signal::derive(move || {
        let rows = ctrl.records();
        ctrl.filter_options("id_ubicacion")
            .into_iter()
            .map(|id| {
                let label = rows
                    .iter()
                    .find(|e| e.id_ubicacion.map(|u| u.to_string()).as_deref() == Some(id.as_str()))
                    .map(Existencia::ubicacion_label)
                    .unwrap_or_else(|| format!("#{}", id));
                (id, label)
            })
            .collect::<Vec<_>>()
    });

    view! {
        <div class="panel">
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
                            placeholder="Buscar por item, ubicación o lote..."
                        />
                        <FilterSelect
                            label="Ubicación"
                            all_label="Todas las ubicaciones"
                            value=Signal::derive(move || ctrl.filter_value("id_ubicacion"))
                            options=ubicacion_options
                            on_change=Callback::new(move |v: String| ctrl.set_filter("id_ubicacion", &v))
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
                empty_message="No hay existencias registradas."
            />

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="Item" sort_field="item_descripcion" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() min_width=220.0 />
                            <SortableHeaderCell label="Lote" sort_field="codigo_lote" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() />
                            <SortableHeaderCell label="Ubicación" sort_field="ubicacion_nombre" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() />
                            <SortableHeaderCell label="Cantidad" sort_field="cantidad" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() align="right" />
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            ctrl.visible()
                                .into_iter()
                                .map(|e| {
                                    let agotado = e.is_agotado();
                                    let item_descripcion = e.item_descripcion.clone().unwrap_or_else(|| EMPTY_DISPLAY.to_string());
                                    let codigo_lote = e.codigo_lote.clone().unwrap_or_else(|| EMPTY_DISPLAY.to_string());
                                    let ubicacion = e.ubicacion_label();
                                    let cantidad = FieldValue::number(e.cantidad).display();
                                    view! {
                                        <TableRow class:table__row--warning=agotado>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {item_descripcion}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{codigo_lote}</TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout truncate=true>{ubicacion}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout attr:style="justify-content: flex-end;">
                                                    {cantidad}
                                                    {agotado.then(|| view! { <span class="badge badge--danger">"Agotado"</span> })}
                                                </TableCellLayout>
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
    }
}
