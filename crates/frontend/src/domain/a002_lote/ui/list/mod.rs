use contracts::domain::a002_lote::{Lote, LoteEstado};
use contracts::shared::date_format::format_date_opt;
use contracts::shared::list_view::{MutationStrategy, EMPTY_DISPLAY};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_lote::api;
use crate::domain::a002_lote::ui::details::{LoteCreate, LoteEdit};
use crate::shared::components::{FilterPanel, ListStatus, PaginationControls, SortableHeaderCell};
use crate::shared::date_utils::today_iso;
use crate::shared::icons::small_icon;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::{FilterSelect, SearchInput};

const MUTATIONS: MutationStrategy = MutationStrategy::Refetch;

#[derive(Clone)]
enum LoteModal {
    Create,
    Edit(Lote),
}

#[component]
pub fn LotePanel() -> impl IntoView {
    let ctrl = ListController::mount("lotes", Lote::list_config(), api::fetch_lotes);
    let is_filter_expanded = RwSignal::new(true);
    let modal = RwSignal::new(Option::<LoteModal>::None);
    let today = today_iso();

    let estado_options = Signal::derive(|| {
        [LoteEstado::Activo, LoteEstado::Inactivo]
            .iter()
            .map(|e| (e.code().to_string(), format!("{}s", e.label())))
            .collect::<Vec<_>>()
    });

    let on_saved = Callback::new(move |_| {
        let edited = match modal.get_untracked() {
            Some(LoteModal::Edit(lote)) => Some(lote.id_lote),
            _ => None,
        };
        modal.set(None);
        match edited {
            Some(id) => ctrl.after_update(MUTATIONS, &id, |_| ()),
            None => ctrl.load(),
        }
    });
    let on_close = Callback::new(move |_| modal.set(None));

    view! {
        <div class="panel">
            <div class="panel__toolbar">
                <Button appearance=ButtonAppearance::Primary on_click=move |_| modal.set(Some(LoteModal::Create))>
                    {small_icon("plus")}
                    " Nuevo Lote"
                </Button>
            </div>

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
                            placeholder="Buscar por nombre, lote, proveedor..."
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
                empty_message="No hay lotes registrados."
            />

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="Lote" sort_field="codigo_lote" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() />
                            <SortableHeaderCell label="Item" sort_field="item_descripcion" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() min_width=200.0 />
                            <SortableHeaderCell label="Proveedor" sort_field="proveedor_nombre" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() />
                            <SortableHeaderCell label="Vencimiento" sort_field="fecha_vencimiento" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() />
                            <SortableHeaderCell label="Costo" sort_field="costo_unitario" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() align="right" />
                            <SortableHeaderCell label="Estado" sort_field="estado" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() />
                            <TableHeaderCell resizable=false min_width=70.0>"Acciones"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            ctrl.visible()
                                .into_iter()
                                .map(|lote| {
                                    let expired = lote.is_expired(&today);
                                    let estado_color = match lote.estado {
                                        LoteEstado::Activo => BadgeColor::Success,
                                        LoteEstado::Inactivo => BadgeColor::Danger,
                                        LoteEstado::Other(_) => BadgeColor::Subtle,
                                    };
                                    let codigo_lote = lote.codigo_lote.clone();
                                    let item_descripcion = lote.item_descripcion.clone().unwrap_or_else(|| EMPTY_DISPLAY.to_string());
                                    let proveedor_nombre = lote.proveedor_nombre.clone().unwrap_or_else(|| EMPTY_DISPLAY.to_string());
                                    let fecha_vencimiento = format_date_opt(lote.fecha_vencimiento.as_deref());
                                    let costo_label = lote.costo_label();
                                    let estado_label = lote.estado.label().to_string();
                                    let for_edit = lote.clone();
                                    view! {
                                        <TableRow class:table__row--expired=expired>
                                            <TableCell><TableCellLayout><code>{codigo_lote}</code></TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {item_descripcion}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {proveedor_nombre}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {fecha_vencimiento}
                                                    {expired.then(|| view! {
                                                        <span class="badge badge--danger" title="Lote vencido">"Vencido"</span>
                                                    })}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout attr:style="justify-content: flex-end;">{costo_label}</TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge appearance=BadgeAppearance::Tint color=estado_color>
                                                        {estado_label}
                                                    </Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <div class="table__actions">
                                                    <button
                                                        class="icon-btn"
                                                        title="Editar"
                                                        on:click=move |_| modal.set(Some(LoteModal::Edit(for_edit.clone())))
                                                    >
                                                        {small_icon("edit")}
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

            {move || modal.get().map(|m| match m {
                LoteModal::Create => view! { <LoteCreate on_saved=on_saved on_close=on_close /> }.into_any(),
                LoteModal::Edit(lote) => view! { <LoteEdit lote=lote on_saved=on_saved on_close=on_close /> }.into_any(),
            })}
        </div>
    }
}
