use contracts::domain::a005_comprobante::{csv_file_name, Comprobante, ComprobanteId, ComprobanteStats};
use contracts::shared::date_format::format_date_opt;
use contracts::shared::list_view::{MutationStrategy, EMPTY_DISPLAY};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_comprobante::api;
use crate::domain::a005_comprobante::ui::details::ComprobanteDetails;
use crate::shared::components::{
    ActiveFilterChips, FilterPanel, ListStatus, PageHeader, PaginationControls, SortableHeaderCell,
    StatCard, StatTone,
};
use crate::shared::date_utils::today_iso;
use crate::shared::export::export_to_csv;
use crate::shared::icons::small_icon;
use crate::shared::list_controller::ListController;
use crate::shared::list_utils::{plain_options, FilterSelect, SearchInput};
use crate::shared::modal_frame::ConfirmDialog;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

/// Server writes on receipts only touch one row, so the list is patched in place.
const MUTATIONS: MutationStrategy = MutationStrategy::PatchLocal;

#[derive(Clone, Copy, PartialEq)]
enum PendingAction {
    Entregar(ComprobanteId),
    Eliminar(ComprobanteId),
}

fn field_label(field: &str) -> &'static str {
    match field {
        "estado" => "Estado",
        "canal" => "Canal",
        _ => "Filtro",
    }
}

#[component]
pub fn ComprobanteList() -> impl IntoView {
    let ctrl = ListController::mount("comprobantes", Comprobante::list_config(), api::fetch_comprobantes);
    let is_filter_expanded = RwSignal::new(true);
    let viewing = RwSignal::new(Option::<ComprobanteId>::None);
    let pending = RwSignal::new(Option::<PendingAction>::None);
    let working = RwSignal::new(false);
    let action_error = RwSignal::new(Option::<String>::None);

    let stats = Memo::new(move |_| ctrl.state.with(|s| ComprobanteStats::compute(s.records())));

    let confirm = move |_| {
        let Some(action) = pending.get_untracked() else {
            return;
        };
        working.set(true);
        spawn_local(async move {
            let outcome = match action {
                PendingAction::Entregar(id) => api::marcar_entregado(id).await.map(|()| {
                    ctrl.after_update(MUTATIONS, &id, Comprobante::mark_entregado);
                }),
                PendingAction::Eliminar(id) => api::delete_comprobante(id).await.map(|()| {
                    ctrl.after_delete(MUTATIONS, &id);
                }),
            };
            match outcome {
                Ok(()) => {
                    let _ = action_error.try_set(None);
                }
                Err(e) => {
                    let msg = match action {
                        PendingAction::Entregar(_) => "Error al marcar el comprobante como entregado",
                        PendingAction::Eliminar(_) => "Error al eliminar el comprobante",
                    };
                    log::error!("{}: {}", msg, e);
                    let _ = action_error.try_set(Some(msg.to_string()));
                }
            }
            let _ = working.try_set(false);
            let _ = pending.try_set(None);
        });
    };

    let export = move |_| {
        let rows = ctrl.filtered();
        if let Err(e) = export_to_csv(&rows, &csv_file_name(&today_iso())) {
            log::warn!("Exportación cancelada: {}", e);
            action_error.set(Some(e));
        }
    };

    let estado_options = Signal::derive(|| {
        vec![
            ("pendiente".to_string(), "Pendiente".to_string()),
            ("entregado".to_string(), "Entregado".to_string()),
        ]
    });

    view! {
        <PageFrame page_id="a005_comprobante--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <PageHeader
                    title="Comprobantes"
                    subtitle="Gestión de comprobantes de movimientos".to_string()
                    icon_name="receipts"
                >
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=export
                        disabled=Signal::derive(move || ctrl.page_info().total_count == 0)
                    >
                        {small_icon("download")}
                        " Exportar CSV"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| ctrl.load()>
                        {small_icon("refresh")}
                        " Actualizar"
                    </Button>
                </PageHeader>
            </div>

            <div class="page__content">
                <div class="stat-grid">
                    <StatCard label="Total" icon_name="receipts" value=Signal::derive(move || Some(stats.get().total as u64)) />
                    <StatCard label="Entregados" icon_name="check" tone=StatTone::Success value=Signal::derive(move || Some(stats.get().entregados as u64)) />
                    <StatCard label="Pendientes" icon_name="clock" tone=StatTone::Warning value=Signal::derive(move || Some(stats.get().pendientes as u64)) />
                    <StatCard
                        label="Canales"
                        icon_name="mail"
                        value=Signal::derive(move || Some(stats.get().por_canal.len() as u64))
                        subtitle=Signal::derive(move || {
                            let por_canal = stats.get().por_canal;
                            (!por_canal.is_empty()).then(|| {
                                por_canal
                                    .iter()
                                    .map(|(canal, n)| format!("{}: {}", canal, n))
                                    .collect::<Vec<_>>()
                                    .join(" · ")
                            })
                        })
                    />
                </div>

                {move || action_error.get().map(|e| view! {
                    <div class="alert alert--error">
                        <span>{e}</span>
                        <button class="alert__close" title="Cerrar" on:click=move |_| action_error.set(None)>
                            {small_icon("x")}
                        </button>
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
                                placeholder="Buscar por ID de comprobante, movimiento o proveedor..."
                            />
                            <FilterSelect
                                label="Estado"
                                all_label="Todos"
                                value=Signal::derive(move || ctrl.filter_value("estado"))
                                options=estado_options
                                on_change=Callback::new(move |v: String| ctrl.set_filter("estado", &v))
                            />
                            <FilterSelect
                                label="Canal"
                                all_label="Todos"
                                value=Signal::derive(move || ctrl.filter_value("canal"))
                                options=Signal::derive(move || plain_options(ctrl.filter_options("canal")))
                                on_change=Callback::new(move |v: String| ctrl.set_filter("canal", &v))
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
                    empty_message="No hay comprobantes registrados"
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <SortableHeaderCell label="ID" sort_field="id_comprobante" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() min_width=60.0 />
                                <SortableHeaderCell label="Movimiento" sort_field="id_movimiento" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() />
                                <SortableHeaderCell label="Proveedor" sort_field="id_proveedor" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() />
                                <SortableHeaderCell label="Canal" sort_field="canal" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() />
                                <SortableHeaderCell label="Estado" sort_field="estado" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() />
                                <SortableHeaderCell label="Fecha" sort_field="fecha" sort=ctrl.sort_signal() on_sort=ctrl.on_sort() min_width=110.0 />
                                <TableHeaderCell resizable=false min_width=120.0>"Acciones"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || {
                                ctrl.visible()
                                    .into_iter()
                                    .map(|c| {
                                        let id = c.id_comprobante;
                                        let entregado = c.estado.is_entregado();
                                        let estado_class = if entregado { "badge badge--success" } else { "badge badge--warning" };
                                        let movimiento = c.id_movimiento.map(|v| format!("#{}", v)).unwrap_or_else(|| EMPTY_DISPLAY.to_string());
                                        let proveedor = c.id_proveedor.map(|v| v.to_string()).unwrap_or_else(|| EMPTY_DISPLAY.to_string());
                                        let canal = c.canal().to_string();
                                        let estado_label = c.estado.label().to_string();
                                        let fecha = format_date_opt(c.fecha.as_deref());
                                        view! {
                                            <TableRow>
                                                <TableCell><TableCellLayout><strong>{format!("#{}", id)}</strong></TableCellLayout></TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {movimiento}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell>
                                                    <TableCellLayout>
                                                        {proveedor}
                                                    </TableCellLayout>
                                                </TableCell>
                                                <TableCell><TableCellLayout><span class="badge badge--info">{canal}</span></TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout><span class=estado_class>{estado_label}</span></TableCellLayout></TableCell>
                                                <TableCell><TableCellLayout>{fecha}</TableCellLayout></TableCell>
                                                <TableCell>
                                                    <div class="table__actions">
                                                        <button class="icon-btn" title="Ver detalles" on:click=move |_| viewing.set(Some(id))>
                                                            {small_icon("eye")}
                                                        </button>
                                                        <Show when=move || !entregado>
                                                            <button
                                                                class="icon-btn icon-btn--success"
                                                                title="Marcar como entregado"
                                                                on:click=move |_| pending.set(Some(PendingAction::Entregar(id)))
                                                            >
                                                                {small_icon("check")}
                                                            </button>
                                                        </Show>
                                                        <button
                                                            class="icon-btn icon-btn--danger"
                                                            title="Eliminar"
                                                            on:click=move |_| pending.set(Some(PendingAction::Eliminar(id)))
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

            {move || viewing.get().map(|id| view! {
                <ComprobanteDetails id=id on_close=Callback::new(move |_| viewing.set(None)) />
            })}

            {move || pending.get().map(|action| {
                let (title, message, label, danger) = match action {
                    PendingAction::Entregar(_) => (
                        "Confirmar entrega",
                        "¿Marcar este comprobante como entregado?",
                        "Marcar entregado",
                        false,
                    ),
                    PendingAction::Eliminar(_) => (
                        "Confirmar eliminación",
                        "¿Eliminar este comprobante? Esta acción no se puede deshacer.",
                        "Eliminar",
                        true,
                    ),
                };
                view! {
                    <ConfirmDialog
                        title=title
                        message=message
                        confirm_label=label
                        danger=danger
                        pending=Signal::derive(move || working.get())
                        on_confirm=Callback::new(confirm)
                        on_cancel=Callback::new(move |_| pending.set(None))
                    />
                }
            })}
        </PageFrame>
    }
}
