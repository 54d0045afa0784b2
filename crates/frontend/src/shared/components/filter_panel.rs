use crate::shared::icons::small_icon;
use leptos::prelude::*;

/// Collapsible panel holding the filter controls. The header always shows the
/// pager and a badge with the number of active filters.
#[component]
pub fn FilterPanel(
    #[prop(into)] is_expanded: RwSignal<bool>,
    #[prop(into)] active_filters_count: Signal<usize>,
    #[prop(into)] pagination_controls: ViewFn,
    #[prop(into)] filter_content: ViewFn,
    /// Active filter chips, rendered under the controls.
    #[prop(optional, into)]
    filter_tags: Option<ViewFn>,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>{small_icon("chevron-down")}</span>
                    <span class="filter-panel__title">"Filtros"</span>
                    <Show when=move || { active_filters_count.get() > 0 }>
                        <span class="badge badge--primary">{move || active_filters_count.get()}</span>
                    </Show>
                </div>
                <div class="filter-panel-header__center">{pagination_controls.run()}</div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {filter_content.run()}
                    {filter_tags.map(|tags| view! { <div class="filter-panel__tags">{tags.run()}</div> })}
                </div>
            </div>
        </div>
    }
}

/// One removable chip.
#[component]
pub fn FilterTag(#[prop(into)] label: String, on_remove: Callback<()>) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <button
                class="filter-tag__remove"
                title="Quitar filtro"
                on:click=move |ev| {
                    ev.stop_propagation();
                    on_remove.run(());
                }
            >
                {small_icon("x")}
            </button>
        </div>
    }
}

/// Chips for the search term and every active filter, plus "Limpiar todo".
/// `field_label` maps a filter field to its human name.
#[component]
pub fn ActiveFilterChips(
    #[prop(into)] search: Signal<String>,
    #[prop(into)] filters: Signal<Vec<(String, String)>>,
    field_label: fn(&str) -> &'static str,
    on_clear_search: Callback<()>,
    on_clear_filter: Callback<String>,
    on_clear_all: Callback<()>,
) -> impl IntoView {
    let has_any = move || !search.get().trim().is_empty() || !filters.get().is_empty();

    view! {
        <Show when=has_any>
            <div class="filter-chips">
                {move || {
                    let term = search.get();
                    (!term.trim().is_empty()).then(|| {
                        view! {
                            <FilterTag
                                label=format!("Búsqueda: {}", term.trim())
                                on_remove=on_clear_search
                            />
                        }
                    })
                }}
                {move || {
                    filters
                        .get()
                        .into_iter()
                        .map(|(field, value)| {
                            let label = format!("{}: {}", field_label(&field), value);
                            view! {
                                <FilterTag
                                    label=label
                                    on_remove=Callback::new(move |_| on_clear_filter.run(field.clone()))
                                />
                            }
                        })
                        .collect_view()
                }}
                <button class="filter-chips__clear" on:click=move |_| on_clear_all.run(())>
                    "Limpiar todo"
                </button>
            </div>
        </Show>
    }
}
