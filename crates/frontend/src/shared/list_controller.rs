//! Reactive wrapper around [`ListState`]: one instance per list page.
//!
//! The controller owns the fetch closure so that "Reintentar" and post-mutation
//! refetches re-issue exactly the same request as the initial load.

use crate::shared::api_utils::ApiError;
use contracts::shared::list_view::{
    FilterSelection, ListConfig, ListRecord, ListState, MutationStrategy, PageInfo, PageLink,
    SortSpec,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

type FetchFuture<T> = Pin<Box<dyn Future<Output = Result<Vec<T>, ApiError>>>>;
type Fetcher<T> = Rc<dyn Fn() -> FetchFuture<T>>;

pub struct ListController<T>
where
    T: ListRecord + Send + Sync + 'static,
{
    pub state: RwSignal<ListState<T>>,
    fetcher: StoredValue<Fetcher<T>, LocalStorage>,
    label: &'static str,
}

impl<T> Clone for ListController<T>
where
    T: ListRecord + Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for ListController<T> where T: ListRecord + Send + Sync + 'static {}

impl<T> ListController<T>
where
    T: ListRecord + Send + Sync + 'static,
{
    /// `label` names the collection in log lines ("items", "lotes"...).
    pub fn new<F, Fut>(label: &'static str, config: ListConfig, fetch: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    {
        let fetcher: Fetcher<T> = Rc::new(move || Box::pin(fetch()) as FetchFuture<T>);
        Self {
            state: RwSignal::new(ListState::new(config)),
            fetcher: StoredValue::new_local(fetcher),
            label,
        }
    }

    /// Creates the controller and schedules the initial load.
    pub fn mount<F, Fut>(label: &'static str, config: ListConfig, fetch: F) -> Self
    where
        F: Fn() -> Fut + 'static,
        Fut: Future<Output = Result<Vec<T>, ApiError>> + 'static,
    {
        let ctrl = Self::new(label, config, fetch);
        Effect::new(move |_| {
            if ctrl.state.with_untracked(|s| s.records().is_empty() && !s.is_loading()) {
                ctrl.load();
            }
        });
        ctrl
    }

    /// Issues the fetch. A response that arrives after a newer request was
    /// started is dropped, and nothing is written once the page is gone.
    pub fn load(&self) {
        let Some(ticket) = self.state.try_update(|s| s.begin_load()) else {
            return;
        };
        let Some(request) = self.fetcher.try_with_value(|fetch| fetch()) else {
            return;
        };
        let state = self.state;
        let label = self.label;
        log::debug!("Cargando {}...", label);
        spawn_local(async move {
            let result = request.await;
            let result = match result {
                Ok(rows) => {
                    log::debug!("{}: {} registros", label, rows.len());
                    Ok(rows)
                }
                Err(e) => {
                    log::error!("Error al obtener {}: {}", label, e);
                    Err(format!("Error al cargar {}. {}", label, e))
                }
            };
            match state.try_update(|s| s.finish_load(ticket, result)) {
                Some(false) => log::debug!("{}: respuesta obsoleta descartada", label),
                None => log::debug!("{}: la vista ya no existe", label),
                Some(true) => {}
            }
        });
    }

    // ---- reactive reads ----

    pub fn visible(&self) -> Vec<T> {
        self.state.with(|s| s.visible())
    }

    pub fn filtered(&self) -> Vec<T> {
        self.state.with(|s| s.filtered())
    }

    pub fn records(&self) -> Vec<T> {
        self.state.with(|s| s.records().to_vec())
    }

    pub fn page_info(&self) -> PageInfo {
        self.state.with(|s| s.page_info())
    }

    pub fn page_links(&self) -> Vec<PageLink> {
        self.state.with(|s| s.page_links())
    }

    pub fn is_loading(&self) -> bool {
        self.state.with(|s| s.is_loading())
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error().map(str::to_string))
    }

    pub fn search(&self) -> String {
        self.state.with(|s| s.search().to_string())
    }

    pub fn sort(&self) -> SortSpec {
        self.state.with(|s| s.sort().clone())
    }

    /// Sort state for `SortableHeaderCell`.
    pub fn sort_signal(&self) -> Signal<SortSpec> {
        let ctrl = *self;
        Signal::derive(move || ctrl.sort())
    }

    pub fn on_sort(&self) -> Callback<String> {
        let ctrl = *self;
        Callback::new(move |field: String| ctrl.toggle_sort(&field))
    }

    pub fn filter_value(&self, field: &str) -> String {
        self.state.with(|s| s.filter(field).as_option())
    }

    pub fn filter_options(&self, field: &str) -> Vec<String> {
        self.state.with(|s| s.filter_options(field))
    }

    pub fn active_filters(&self) -> Vec<(String, String)> {
        self.state.with(|s| s.active_filters())
    }

    pub fn has_active_query(&self) -> bool {
        self.state.with(|s| s.has_active_query())
    }

    pub fn page_size_options(&self) -> Vec<usize> {
        self.state.with_untracked(|s| s.config().page_size_options.clone())
    }

    // ---- query changes ----

    pub fn set_search(&self, term: String) {
        self.state.update(|s| s.set_search(term));
    }

    /// `value` is the raw select-box value; "todos"/"todas"/"" clear the filter.
    pub fn set_filter(&self, field: &str, value: &str) {
        self.state
            .update(|s| s.set_filter(field, FilterSelection::from_option(value)));
    }

    pub fn toggle_sort(&self, field: &str) {
        self.state.update(|s| s.toggle_sort(field));
    }

    pub fn set_page(&self, page: usize) {
        self.state.update(|s| s.set_page(page));
    }

    pub fn set_page_size(&self, size: usize) {
        self.state.update(|s| s.set_page_size(size));
    }

    pub fn clear_query(&self) {
        self.state.update(|s| s.clear_query());
    }

    // ---- after a successful server write ----

    /// Reconciles an update of record `id`. `apply` is only used for
    /// [`MutationStrategy::PatchLocal`]; an id that is not loaded triggers a reload.
    pub fn after_update(&self, strategy: MutationStrategy, id: &T::Id, apply: impl FnOnce(&mut T)) {
        let reload = self
            .state
            .try_update(|s| s.reconcile_update(strategy, id, apply))
            .unwrap_or(false);
        if reload {
            if strategy == MutationStrategy::PatchLocal {
                log::warn!("{}: registro {:?} no encontrado, recargando", self.label, id);
            }
            self.load();
        }
    }

    pub fn after_delete(&self, strategy: MutationStrategy, id: &T::Id) {
        let reload = self
            .state
            .try_update(|s| s.reconcile_delete(strategy, id))
            .unwrap_or(false);
        if reload {
            self.load();
        }
    }
}
