use contracts::shared::list_view::EMPTY_DISPLAY;
use contracts::system::usuarios::Usuario;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::{FilterPanel, ListStatus, PageHeader, PaginationControls, SortableHeaderCell};
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::{plain_options, FilterSelect, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::usuarios::api;

fn or_dash(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| EMPTY_DISPLAY.to_string())
}

#[component]
pub fn UsuarioList() -> impl IntoView {
    let ctrl = ListController::mount("usuarios", Usuario::list_config(), api::fetch_usuarios);
    let is_filter_expanded = RwSignal::new(true);

    view! {
        <PageFrame page_id="sys_usuarios--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <PageHeader
                    title="Usuarios"
                    count=Signal::derive(move || ctrl.page_info().loaded_count)
                    icon_name="users"
                />
            </div>

            <div class="page__content">
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
                                placeholder="Buscar por nombre, usuario o email..."
                            />
                            <FilterSelect
                                label="Rol"
                                all_label="Todos"
                                value=Signal::derive(move || ctrl.filter_value("rol"))
                                options=Signal::derive(move || plain_options(ctrl.filter_options("rol")))
                                on_change=Callback::new(move |v: String| ctrl.set_filter("rol", &v))
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
                    empty_message="No hay usuarios registrados."
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="ID" sort_field="id_usuario" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() min_width=60.0 />
                                <SortableHeaderCell label="Nombre" sort_field="nombre" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() min_width=200.0 />
                                <SortableHeaderCell label="Usuario" sort_field="username" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() />
                                <SortableHeaderCell label="Email" sort_field="email" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() min_width=200.0 />
                                <SortableHeaderCell label="Rol" sort_field="rol" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() />
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                ctrl.visible()
                                    .into_iter()
                                    .map(|u| view! {
                                        <TableRow>
                                            <TableCell><TableCellLayout>{u.id_usuario.to_string()}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true><strong>{u.nombre.clone()}</strong></TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{or_dash(&u.username)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout truncate=true>{or_dash(&u.email)}</TableCellLayout></TableCell>
                                            <TableCell><TableCellLayout>{or_dash(&u.rol)}</TableCellLayout></TableCell>
                                        </TableRow>
                                    })
                                    .collect_view()
                            }}
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
