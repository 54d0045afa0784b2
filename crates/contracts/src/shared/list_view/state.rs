//! State of one list page: the loaded collection plus search, filters, sort and paging.

use super::pagination::{clamp_page, page_window, total_pages, PageInfo, PageLink, DEFAULT_PAGE_SIZE_OPTIONS};
use super::query::{distinct_values, matches_search, FilterSelection, ListRecord};
use super::sort::{sort_records, SortSpec};
use std::collections::BTreeMap;

/// Static configuration of a list page.
#[derive(Debug, Clone)]
pub struct ListConfig {
    pub search_fields: Vec<&'static str>,
    pub filter_fields: Vec<&'static str>,
    pub default_sort: SortSpec,
    pub page_size_options: Vec<usize>,
    pub default_page_size: usize,
}

impl ListConfig {
    pub fn new(search_fields: &[&'static str], default_sort: SortSpec) -> Self {
        Self {
            search_fields: search_fields.to_vec(),
            filter_fields: Vec::new(),
            default_sort,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            default_page_size: DEFAULT_PAGE_SIZE_OPTIONS[0],
        }
    }

    pub fn with_filters(mut self, fields: &[&'static str]) -> Self {
        self.filter_fields = fields.to_vec();
        self
    }

    pub fn with_page_sizes(mut self, options: &[usize], default: usize) -> Self {
        self.page_size_options = options.to_vec();
        self.default_page_size = default.max(1);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Identifies one issued fetch. Only the newest ticket may complete a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket(u64);

/// How a page reconciles local state after a successful mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationStrategy {
    /// Fetch the whole collection again.
    Refetch,
    /// Patch or remove the affected record by id.
    PatchLocal,
}

#[derive(Debug, Clone)]
pub struct ListState<T: ListRecord> {
    config: ListConfig,
    records: Vec<T>,
    phase: LoadPhase,
    generation: u64,
    search: String,
    filters: BTreeMap<String, FilterSelection>,
    sort: SortSpec,
    page: usize,
    page_size: usize,
}

impl<T: ListRecord> ListState<T> {
    pub fn new(config: ListConfig) -> Self {
        let sort = config.default_sort.clone();
        let page_size = config.default_page_size;
        Self {
            config,
            records: Vec::new(),
            phase: LoadPhase::Idle,
            generation: 0,
            search: String::new(),
            filters: BTreeMap::new(),
            sort,
            page: 1,
            page_size,
        }
    }

    pub fn config(&self) -> &ListConfig {
        &self.config
    }

    // ---- loading ----

    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        LoadTicket(self.generation)
    }

    /// Applies a fetch result. Returns `false` when a newer request was issued
    /// in the meantime and the result was discarded.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<T>, String>) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        match result {
            Ok(records) => {
                self.records = records;
                self.phase = LoadPhase::Loaded;
                self.reclamp_page();
            }
            Err(message) => {
                self.phase = LoadPhase::Failed(message);
            }
        }
        true
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    pub fn is_loaded(&self) -> bool {
        self.phase == LoadPhase::Loaded
    }

    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            LoadPhase::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    // ---- query ----

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
        self.page = 1;
    }

    pub fn filter(&self, field: &str) -> FilterSelection {
        self.filters.get(field).cloned().unwrap_or_default()
    }

    pub fn set_filter(&mut self, field: &str, selection: FilterSelection) {
        if selection.is_all() {
            self.filters.remove(field);
        } else {
            self.filters.insert(field.to_string(), selection);
        }
        self.page = 1;
    }

    /// True when a search term or any categorical filter is active.
    pub fn has_active_query(&self) -> bool {
        !self.search.trim().is_empty() || !self.filters.is_empty()
    }

    /// Active filters as (field, value) pairs, for the "chips" row.
    pub fn active_filters(&self) -> Vec<(String, String)> {
        self.filters
            .iter()
            .map(|(field, sel)| (field.clone(), sel.as_option()))
            .collect()
    }

    /// Clears search and filters and restores the default sort.
    pub fn clear_query(&mut self) {
        self.search.clear();
        self.filters.clear();
        self.sort = self.config.default_sort.clone();
        self.page = 1;
    }

    pub fn sort(&self) -> &SortSpec {
        &self.sort
    }

    pub fn toggle_sort(&mut self, field: &str) {
        self.sort.toggle(field);
    }

    pub fn filter_options(&self, field: &str) -> Vec<String> {
        distinct_values(&self.records, field)
    }

    // ---- paging ----

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
        self.page = 1;
    }

    pub fn set_page(&mut self, page: usize) {
        let pages = total_pages(self.filtered_count(), self.page_size);
        self.page = clamp_page(page, pages);
    }

    fn reclamp_page(&mut self) {
        let pages = total_pages(self.filtered_count(), self.page_size);
        self.page = clamp_page(self.page, pages);
    }

    pub fn page_info(&self) -> PageInfo {
        PageInfo::new(self.page, self.page_size, self.filtered_count(), self.records.len())
    }

    pub fn page_links(&self) -> Vec<PageLink> {
        let info = self.page_info();
        page_window(info.page, info.total_pages)
    }

    // ---- derived views ----

    fn accepts(&self, record: &T) -> bool {
        matches_search(record, &self.config.search_fields, &self.search)
            && self
                .filters
                .iter()
                .all(|(field, sel)| sel.accepts(&record.field_value(field)))
    }

    fn filtered_count(&self) -> usize {
        self.records.iter().filter(|r| self.accepts(r)).count()
    }

    /// Search + filters + sort over the whole collection.
    pub fn filtered(&self) -> Vec<T> {
        let mut rows: Vec<T> = self
            .records
            .iter()
            .filter(|r| self.accepts(r))
            .cloned()
            .collect();
        sort_records(&mut rows, &self.sort);
        rows
    }

    /// Rows of the current page.
    pub fn visible(&self) -> Vec<T> {
        let rows = self.filtered();
        let info = PageInfo::new(self.page, self.page_size, rows.len(), self.records.len());
        rows[info.start_index..info.end_index].to_vec()
    }

    // ---- local mutations ----

    /// Replaces the record with the same id, or appends it.
    pub fn upsert(&mut self, record: T) {
        let id = record.record_id();
        match self.records.iter_mut().find(|r| r.record_id() == id) {
            Some(slot) => *slot = record,
            None => self.records.push(record),
        }
    }

    /// Updates one record in place. Returns `false` when the id is unknown.
    pub fn patch(&mut self, id: &T::Id, update: impl FnOnce(&mut T)) -> bool {
        match self.records.iter_mut().find(|r| r.record_id() == *id) {
            Some(record) => {
                update(record);
                true
            }
            None => false,
        }
    }

    pub fn remove(&mut self, id: &T::Id) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.record_id() != *id);
        let removed = self.records.len() != before;
        if removed {
            self.reclamp_page();
        }
        removed
    }

    // ---- after a successful server write ----

    /// Applies an update of record `id` according to `strategy`. Returns `true`
    /// when the collection has to be fetched again: always for
    /// [`MutationStrategy::Refetch`], and for a local patch whose id is not loaded.
    pub fn reconcile_update(
        &mut self,
        strategy: MutationStrategy,
        id: &T::Id,
        apply: impl FnOnce(&mut T),
    ) -> bool {
        match strategy {
            MutationStrategy::Refetch => true,
            MutationStrategy::PatchLocal => !self.patch(id, apply),
        }
    }

    /// Same contract as [`ListState::reconcile_update`]. A record already gone
    /// locally needs no reload.
    pub fn reconcile_delete(&mut self, strategy: MutationStrategy, id: &T::Id) -> bool {
        match strategy {
            MutationStrategy::Refetch => true,
            MutationStrategy::PatchLocal => {
                self.remove(id);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::field::FieldValue;
    use super::super::sort::SortDirection;
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: i64,
        nombre: String,
        tipo: String,
        stock: f64,
        estado: String,
    }

    impl ListRecord for Row {
        type Id = i64;

        fn record_id(&self) -> i64 {
            self.id
        }

        fn field_value(&self, field: &str) -> FieldValue {
            match field {
                "id" => FieldValue::int(self.id),
                "nombre" => FieldValue::text(self.nombre.as_str()),
                "tipo" => FieldValue::text(self.tipo.as_str()),
                "stock" => FieldValue::number(self.stock),
                "estado" => FieldValue::text(self.estado.as_str()),
                _ => FieldValue::Missing,
            }
        }
    }

    fn row(id: i64, nombre: &str, tipo: &str, stock: f64) -> Row {
        Row {
            id,
            nombre: nombre.to_string(),
            tipo: tipo.to_string(),
            stock,
            estado: "pendiente".to_string(),
        }
    }

    fn config() -> ListConfig {
        ListConfig::new(&["nombre", "id"], SortSpec::asc("id")).with_filters(&["tipo"])
    }

    fn loaded(rows: Vec<Row>) -> ListState<Row> {
        let mut state = ListState::new(config());
        let ticket = state.begin_load();
        assert!(state.finish_load(ticket, Ok(rows)));
        state
    }

    fn sample() -> Vec<Row> {
        vec![
            row(1, "Paracetamol 500mg", "MEDICAMENTO", 40.0),
            row(2, "Gasas estériles", "INSUMO", 5.0),
            row(3, "Ibuprofeno", "MEDICAMENTO", 12.5),
            row(4, "Tensiómetro", "EQUIPO", 1.0),
            row(5, "Jeringa 5ml", "INSUMO", 300.0),
            row(6, "Amoxicilina", "MEDICAMENTO", 0.0),
        ]
    }

    fn numbered(n: i64) -> Vec<Row> {
        (1..=n)
            .map(|i| {
                let tipo = if i % 8 == 0 { "EQUIPO" } else { "INSUMO" };
                row(i, &format!("item {i:02}"), tipo, i as f64)
            })
            .collect()
    }

    #[test]
    fn search_result_is_subset_containing_term() {
        let mut state = loaded(sample());
        for term in ["PARA", "in", "5", "zzz", ""] {
            state.set_search(term);
            let filtered = state.filtered();
            let needle = term.to_lowercase();
            for r in &filtered {
                assert!(sample().contains(r));
                assert!(
                    r.nombre.to_lowercase().contains(&needle) || r.id.to_string().contains(&needle),
                    "{r:?} does not contain {term}"
                );
            }
        }
        state.set_search("");
        assert_eq!(state.filtered().len(), 6);
    }

    #[test]
    fn categorical_filter_keeps_only_exact_matches() {
        let mut state = loaded(sample());
        state.set_filter("tipo", FilterSelection::from_option("MEDICAMENTO"));
        let filtered = state.filtered();
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|r| r.tipo == "MEDICAMENTO"));

        state.set_filter("tipo", FilterSelection::from_option("TODOS"));
        assert_eq!(state.filtered().len(), 6);
        assert!(!state.has_active_query());
    }

    #[test]
    fn search_and_filters_are_intersected() {
        let mut state = loaded(sample());
        state.set_search("ina");
        state.set_filter("tipo", FilterSelection::Value("MEDICAMENTO".into()));
        let ids: Vec<i64> = state.filtered().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![6]);
        assert_eq!(state.active_filters(), vec![("tipo".to_string(), "MEDICAMENTO".to_string())]);
    }

    #[test]
    fn filter_options_are_distinct_loaded_values() {
        let state = loaded(sample());
        assert_eq!(state.filter_options("tipo"), vec!["EQUIPO", "INSUMO", "MEDICAMENTO"]);
    }

    #[test]
    fn reversing_direction_reverses_order() {
        let mut state = loaded(sample());
        for field in ["nombre", "stock"] {
            state.toggle_sort(field);
            assert_eq!(state.sort().direction, SortDirection::Asc);
            let asc: Vec<i64> = state.filtered().iter().map(|r| r.id).collect();
            state.toggle_sort(field);
            let mut desc: Vec<i64> = state.filtered().iter().map(|r| r.id).collect();
            desc.reverse();
            assert_eq!(asc, desc, "sorting by {field}");
        }
        state.toggle_sort("stock");
        let stocks: Vec<f64> = state.filtered().iter().map(|r| r.stock).collect();
        assert_eq!(stocks, vec![0.0, 1.0, 5.0, 12.5, 40.0, 300.0]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let mut state = loaded(sample());
        state.toggle_sort("tipo");
        let ids: Vec<i64> = state.filtered().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 2, 5, 1, 3, 6]);
    }

    #[test]
    fn page_size_change_recomputes_pages_and_resets_page() {
        let mut state = loaded(numbered(25));
        state.set_page(3);
        assert_eq!(state.page_info().page, 3);

        state.set_page_size(20);
        let info = state.page_info();
        assert_eq!(info.total_pages, 2);
        assert_eq!(info.page, 1);

        state.set_page(99);
        assert_eq!(state.page_info().page, 2);
        state.set_page(0);
        assert_eq!(state.page_info().page, 1);
    }

    #[test]
    fn empty_result_has_zero_pages_and_page_one() {
        let mut state = loaded(numbered(25));
        state.set_search("no existe");
        let info = state.page_info();
        assert_eq!(info.total_pages, 0);
        assert_eq!(info.page, 1);
        assert!(state.visible().is_empty());
    }

    #[test]
    fn twenty_five_items_paged_by_ten_then_filtered() {
        let mut state = loaded(numbered(25));
        assert_eq!(state.page_size(), 10);

        let first: Vec<i64> = state.visible().iter().map(|r| r.id).collect();
        assert_eq!(first, (1..=10).collect::<Vec<_>>());

        state.set_page(3);
        let third: Vec<i64> = state.visible().iter().map(|r| r.id).collect();
        assert_eq!(third, (21..=25).collect::<Vec<_>>());

        state.set_filter("tipo", FilterSelection::Value("EQUIPO".into()));
        let info = state.page_info();
        assert_eq!(info.total_count, 3);
        assert_eq!(info.total_pages, 1);
        assert_eq!(info.page, 1);
        let equipos: Vec<i64> = state.visible().iter().map(|r| r.id).collect();
        assert_eq!(equipos, vec![8, 16, 24]);

        state.set_filter("tipo", FilterSelection::All);
        state.set_search("item 1");
        let info = state.page_info();
        assert_eq!(info.total_count, 10);
        assert_eq!(info.page, 1);

        state.set_search("item 0");
        assert_eq!(state.page_info().total_count, 9);
        state.set_search("item 2");
        let matched: Vec<i64> = state.filtered().iter().map(|r| r.id).collect();
        assert_eq!(matched, vec![20, 21, 22, 23, 24, 25]);
    }

    #[test]
    fn failed_fetch_then_retry_populates_data() {
        let mut state: ListState<Row> = ListState::new(config());
        let first = state.begin_load();
        assert!(state.is_loading());
        assert!(state.finish_load(first, Err("Error al conectar con el servidor".into())));
        assert_eq!(state.error(), Some("Error al conectar con el servidor"));
        assert!(state.records().is_empty());

        let retry = state.begin_load();
        assert!(state.finish_load(retry, Ok(sample())));
        assert_eq!(state.error(), None);
        assert!(state.is_loaded());
        assert_eq!(state.records().len(), 6);
    }

    #[test]
    fn stale_response_does_not_overwrite_newer_one() {
        let mut state: ListState<Row> = ListState::new(config());
        let initial = state.begin_load();
        let reload = state.begin_load();
        assert!(state.finish_load(reload, Ok(sample())));
        assert!(!state.finish_load(initial, Ok(vec![row(99, "viejo", "INSUMO", 1.0)])));
        assert_eq!(state.records().len(), 6);
    }

    #[test]
    fn patching_one_record_leaves_others_untouched() {
        let mut state = loaded(sample());
        let before = state.records().to_vec();
        assert!(state.patch(&3, |r| r.estado = "entregado".into()));

        let after = state.records();
        assert_eq!(after.len(), before.len());
        for (old, new) in before.iter().zip(after) {
            assert_eq!(old.id, new.id);
            if old.id == 3 {
                assert_eq!(new.estado, "entregado");
                assert_eq!(Row { estado: old.estado.clone(), ..new.clone() }, *old);
            } else {
                assert_eq!(old, new);
            }
        }
        assert!(!state.patch(&42, |r| r.estado = "entregado".into()));
    }

    #[test]
    fn remove_and_upsert_by_id() {
        let mut state = loaded(numbered(11));
        state.set_page(2);
        assert!(state.remove(&11));
        assert_eq!(state.page_info().page, 1);
        assert!(!state.remove(&11));

        state.upsert(row(5, "renombrado", "INSUMO", 5.0));
        state.upsert(row(50, "nuevo", "INSUMO", 5.0));
        assert_eq!(state.records().len(), 11);
        assert_eq!(state.records()[4].nombre, "renombrado");
        assert_eq!(state.records()[10].id, 50);
    }

    #[test]
    fn refetch_strategy_leaves_rows_and_asks_for_reload() {
        let mut state = loaded(sample());
        let before = state.records().to_vec();
        assert!(state.reconcile_update(MutationStrategy::Refetch, &3, |r| r.estado = "entregado".into()));
        assert!(state.reconcile_delete(MutationStrategy::Refetch, &3));
        assert_eq!(state.records(), before.as_slice());
    }

    #[test]
    fn local_patch_of_unknown_id_falls_back_to_reload() {
        let mut state = loaded(sample());
        assert!(!state.reconcile_update(MutationStrategy::PatchLocal, &3, |r| r.estado = "entregado".into()));
        assert_eq!(state.records().iter().find(|r| r.id == 3).map(|r| r.estado.as_str()), Some("entregado"));
        assert!(state.reconcile_update(MutationStrategy::PatchLocal, &42, |r| r.estado = "entregado".into()));
    }

    #[test]
    fn local_delete_removes_row_without_reload() {
        let mut state = loaded(sample());
        let count = state.records().len();
        assert!(!state.reconcile_delete(MutationStrategy::PatchLocal, &3));
        assert_eq!(state.records().len(), count - 1);
        assert!(!state.reconcile_delete(MutationStrategy::PatchLocal, &3));
        assert_eq!(state.records().len(), count - 1);
    }

    #[test]
    fn clear_query_restores_defaults() {
        let mut state = loaded(sample());
        state.set_search("x");
        state.set_filter("tipo", FilterSelection::Value("INSUMO".into()));
        state.toggle_sort("nombre");
        state.clear_query();
        assert!(!state.has_active_query());
        assert_eq!(state.sort(), &SortSpec::asc("id"));
    }
}
