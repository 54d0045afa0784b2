use contracts::domain::a001_item::{Item, ItemTipo};
use contracts::domain::a004_ubicacion::Ubicacion;
use contracts::shared::list_view::{FieldValue, MutationStrategy, EMPTY_DISPLAY};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_item::api;
use crate::domain::a001_item::ui::details::ItemDetails;
use crate::domain::a004_ubicacion::api::fetch_ubicaciones;
use crate::shared::components::{
    FilterPanel, ListStatus, PageHeader, PaginationControls, SortableHeaderCell,
};
use crate::shared::icons::small_icon;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::{badge_color, FilterSelect, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

const MUTATIONS: MutationStrategy = MutationStrategy::Refetch;

fn ubicacion_name(ubicaciones: &[Ubicacion], item: &Item) -> String {
    item.id_ubicacion
        .and_then(|id| ubicaciones.iter().find(|u| u.id_ubicacion == id))
        .map(|u| u.nombre.clone())
        .unwrap_or_else(|| item.ubicacion_label())
}

/// Items table with search, tipo/ubicación filters and, when `editable`,
/// create and update-full actions. Writes are followed by a full refetch.
#[component]
pub fn ItemPanel(#[prop(optional)] editable: bool) -> impl IntoView {
    let ctrl = ListController::mount("items", Item::list_config(), api::fetch_items);
    let is_filter_expanded = RwSignal::new(true);
    let editing = RwSignal::new(Option::<Option<Item>>::None);
    let ubicaciones = RwSignal::new(Vec::<Ubicacion>::new());

    // Only used for labels; the table still renders raw ids if this fails.
    spawn_local(async move {
        match fetch_ubicaciones().await {
            Ok(rows) => {
                let _ = ubicaciones.try_set(rows);
            }
            Err(e) => log::warn!("Ubicaciones no disponibles para items: {}", e),
        }
    });

    let tipo_options = Signal::derive(move || {
        ctrl.filter_options("tipo_item")
            .into_iter()
            .map(|code| {
                let label = ItemTipo::from(code.clone()).label().to_string();
                (code, label)
            })
            .collect::<Vec<_>>()
    });

    let ubicacion_options = Signal::derive(move || {
        let known = ubicaciones.get();
        ctrl.filter_options("id_ubicacion")
            .into_iter()
            .map(|id| {
                let label = known
                    .iter()
                    .find(|u| u.id_ubicacion.to_string() == id)
                    .map(|u| u.nombre.clone())
                    .unwrap_or_else(|| format!("Ubicación {}", id));
                (id, label)
            })
            .collect::<Vec<_>>()
    });

    view! {
        <div class="panel">
            {editable.then(|| view! {
                <div class="panel__toolbar">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| editing.set(Some(None))>
                        {small_icon("plus")}
                        " Nuevo Item"
                    </Button>
                </div>
            })}

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
                            placeholder="Buscar por código, descripción o ID..."
                        />
                        <FilterSelect
                            label="Tipo"
                            all_label="Todos los tipos"
                            value=Signal::derive(move || ctrl.filter_value("tipo_item"))
                            options=tipo_options
                            on_change=Callback::new(move |v: String| ctrl.set_filter("tipo_item", &v))
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
                empty_message="No hay items registrados."
            />

            <div class="table-wrapper">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <SortableHeaderCell label="ID" sort_field="id_item" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() min_width=60.0 />
                            <SortableHeaderCell label="Código" sort_field="codigo" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() />
                            <SortableHeaderCell label="Descripción" sort_field="descripcion" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() min_width=220.0 />
                            <SortableHeaderCell label="Tipo" sort_field="tipo_item" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() />
                            <SortableHeaderCell label="U. Medida" sort_field="unidad_medida" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() />
                            <SortableHeaderCell label="Stock Mínimo" sort_field="stock_minimo" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() align="right" />
                            <SortableHeaderCell label="Ubicación" sort_field="id_ubicacion" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() />
                            {editable.then(|| view! {
                                <TableHeaderCell resizable=false min_width=70.0>"Acciones"</TableHeaderCell>
                            })}
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            let known = ubicaciones.get();
                            ctrl.visible()
                                .into_iter()
                                .map(|item| {
                                    let ubicacion = ubicacion_name(&known, &item);
                                    let for_edit = item.clone();
                                    let stock = item
                                        .stock_minimo
                                        .map(|v| FieldValue::number(v).display())
                                        .unwrap_or_else(|| EMPTY_DISPLAY.to_string());
                                    view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{item.id_item.to_string()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout><code>{item.codigo.clone()}</code></TableCellLayout></TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true><strong>{item.descripcion.clone()}</strong></TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <Badge appearance=BadgeAppearance::Tint color=badge_color(item.tipo_item.badge_color())>
                                                        {format!("{} {}", item.tipo_item.icon(), item.tipo_item.label())}
                                                    </Badge>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{item.unidad_medida.clone().unwrap_or_else(|| EMPTY_DISPLAY.to_string())}</TableCellLayout>
                                            </TableCell>
                                            <TableCell><TableCellLayout attr:style="justify-content: flex-end;">{stock}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{ubicacion}</TableCellLayout></TableCell>
                                            {editable.then(|| view! {
                                                <TableCell>
                                                    <div class="table__actions">
                                                        <button
                                                            class="icon-btn"
                                                            title="Editar"
                                                            on:click=move |_| editing.set(Some(Some(for_edit.clone())))
                                                        >
                                                            {small_icon("edit")}
                                                        </button>
                                                    </div>
                                                </TableCell>
                                            })}
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
            </div>

            {move || editing.get().map(|current| view! {
                <ItemDetails
                    editing=current
                    ubicaciones=Signal::derive(move || ubicaciones.get())
                    on_saved=Callback::new(move |_| {
                        let edited = editing.get_untracked().flatten().map(|i| i.id_item);
                        editing.set(None);
                        match edited {
                            Some(id) => ctrl.after_update(MUTATIONS, &id, |_| ()),
                            None => ctrl.load(),
                        }
                    })
                    on_close=Callback::new(move |_| editing.set(None))
                />
            })}
        </div>
    }
}

/// Read-only catalog at `/items`.
#[component]
pub fn ItemCatalog() -> impl IntoView {
    view! {
        <PageFrame page_id="a001_item--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <PageHeader
                    title="Items"
                    subtitle="Gestión de todos los ítems registrados en el sistema.".to_string()
                    icon_name="pill"
                />
            </div>
            <div class="page__content">
                <ItemPanel />
            </div>
        </PageFrame>
    }
}
