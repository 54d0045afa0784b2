use contracts::shared::date_format::format_datetime;
use contracts::shared::list_view::EMPTY_DISPLAY;
use contracts::system::auditoria::{AuditAction, AuditRecord};
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::{
    ActiveFilterChips, FilterPanel, ListStatus, PageHeader, PaginationControls, SortableHeaderCell,
};
use crate::shared::icons::small_icon;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::{badge_color, plain_options, FilterSelect, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use crate::system::auditoria::api;
use crate::system::auditoria::ui::details::AuditDetails;

fn field_label(field: &str) -> &'static str {
    match field {
        "accion" => "Acción",
        "tabla_afectada" => "Tabla",
        _ => "Filtro",
    }
}

#[component]
pub fn AuditoriaList() -> impl IntoView {
    let ctrl = ListController::mount("auditoría", AuditRecord::list_config(), api::fetch_auditoria);
    let is_filter_expanded = RwSignal::new(true);
    let selected = RwSignal::new(Option::<AuditRecord>::None);

    let accion_options = Signal::derive(move || {
        ctrl.filter_options("accion")
            .into_iter()
            .map(|code| {
                let label = match AuditAction::from(code.clone()) {
                    AuditAction::Create => "Creación".to_string(),
                    AuditAction::Update => "Actualización".to_string(),
                    AuditAction::Delete => "Eliminación".to_string(),
                    AuditAction::Read => "Lectura".to_string(),
                    AuditAction::Other(raw) => raw,
                };
                (code, label)
            })
            .collect::<Vec<_>>()
    });

    view! {
        <PageFrame page_id="sys_auditoria--system" category=PAGE_CAT_SYSTEM>
            <div class="page__header">
                <PageHeader
                    title="Historial de Auditoría"
                    subtitle="Registro de cambios realizados en el sistema".to_string()
                    count=Signal::derive(move || ctrl.page_info().loaded_count)
                    icon_name="audit"
                >
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| ctrl.load()>
                        {small_icon("refresh")}
                        " Actualizar"
                    </Button>
                </PageHeader>
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
                                placeholder="Buscar por usuario, tabla, acción o ID..."
                            />
                            <FilterSelect
                                label="Acción"
                                all_label="Todas"
                                value=Signal::derive(move || ctrl.filter_value("accion"))
                                options=accion_options
                                on_change=Callback::new(move |v: String| ctrl.set_filter("accion", &v))
                            />
                            <FilterSelect
                                label="Tabla"
                                all_label="Todas"
                                value=Signal::derive(move || ctrl.filter_value("tabla_afectada"))
                                options=Signal::derive(move || plain_options(ctrl.filter_options("tabla_afectada")))
                                on_change=Callback::new(move |v: String| ctrl.set_filter("tabla_afectada", &v))
                            />
                        </Flex>
                    }
                    filter_tags=move || view! {
                        <ActiveFilterChips
                            search=Signal::derive(move || ctrl.search())
                            filters=Signal::derive(move || ctrl.active_filters())
                            field_label=field_label
                            on_clear_search=Callback::new(move |_| ctrl.set_search(String::new()))
                            on_clear_filter=Callback::new(move |field: String| ctrl.set_filter(&field, ""))
                            on_clear_all=Callback::new(move |_| ctrl.clear_query())
                        />
                    }
                />

                <ListStatus
                    loading=Signal::derive(move || ctrl.is_loading())
                    error=Signal::derive(move || ctrl.error())
                    visible_count=Signal::derive(move || ctrl.page_info().total_count)
                    loaded_count=Signal::derive(move || ctrl.page_info().loaded_count)
                    on_retry=Callback::new(move |_| ctrl.load())
                    empty_message="No hay registros de auditoría."
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="ID" sort_field="id_evento" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() min_width=60.0 />
                                <SortableHeaderCell label="Usuario" sort_field="usuario" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() />
                                <SortableHeaderCell label="Acción" sort_field="accion" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() />
                                <SortableHeaderCell label="Tabla" sort_field="tabla_afectada" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() />
                                <SortableHeaderCell label="ID Afectado" sort_field="pk_afectada" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() />
                                <SortableHeaderCell label="Fecha / Hora" sort_field="fecha_hora" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() min_width=160.0 />
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                ctrl.visible()
                                    .into_iter()
                                    .map(|r| {
                                        let for_details = r.clone();
                                        let id_evento = r.id_evento.to_string();
                                        let usuario = r.usuario_label();
                                        let accion_color = badge_color(r.accion.badge_color());
                                        let accion_code = r.accion.code().to_string();
                                        let tabla = r.tabla_afectada.clone().unwrap_or_else(|| EMPTY_DISPLAY.to_string());
                                        let pk = r.pk_label();
                                        let fecha_hora = r.fecha_hora.as_deref().map(format_datetime).unwrap_or_else(|| EMPTY_DISPLAY.to_string());
                                        view! {
                                            <TableRow
                                                on:dblclick=move |_| selected.set(Some(for_details.clone()))
                                                attr:style="cursor: pointer;"
                                                attr:title="Doble clic para ver el detalle"
                                            >
                                                <TableCell><TableCellLayout>{id_evento}</TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout truncate=true>{usuario}</TableCellLayout></TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        <Badge appearance=BadgeAppearance::Tint color=accion_color>
                                                            {accion_code}
                                                        </Badge>
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>{tabla}</TableCellLayout>
                                                </TableCell>
                                                <TableCell><TableCellLayout>{pk}</TableCellLayout></TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {fecha_hora}
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

            {move || selected.get().map(|record| view! {
                <AuditDetails record=record on_close=Callback::new(move |_| selected.set(None)) />
            })}
        </PageFrame>
    }
}
