use crate::shared::icons::small_icon;
use contracts::shared::list_view::{PageInfo, PageLink};
use leptos::prelude::*;

/// Pager for list pages. Pages are 1-based; the page-size select resets to page 1
/// through the controller.
#[component]
pub fn PaginationControls(
    #[prop(into)] info: Signal<PageInfo>,
    /// Numbered buttons with gaps, see `page_window`.
    #[prop(into)]
    links: Signal<Vec<PageLink>>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    page_size_options: Vec<usize>,
) -> impl IntoView {
    let fallback_size = page_size_options.first().copied().unwrap_or(10);

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">{move || info.get().range_label()}</span>
            <button
                class="pagination-btn"
                title="Primera página"
                disabled=move || !info.get().has_previous()
                on:click=move |_| on_page_change.run(1)
            >
                {small_icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                title="Página anterior"
                disabled=move || !info.get().has_previous()
                on:click=move |_| on_page_change.run(info.get_untracked().page.saturating_sub(1))
            >
                {small_icon("chevron-left")}
            </button>
            {move || {
                let current = info.get().page;
                links
                    .get()
                    .into_iter()
                    .map(|link| match link {
                        PageLink::Page(n) => view! {
                            <button
                                class=if n == current { "pagination-btn pagination-btn--active" } else { "pagination-btn" }
                                on:click=move |_| on_page_change.run(n)
                            >
                                {n}
                            </button>
                        }
                        .into_any(),
                        PageLink::Gap => view! { <span class="pagination-gap">"…"</span> }.into_any(),
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                title="Página siguiente"
                disabled=move || !info.get().has_next()
                on:click=move |_| on_page_change.run(info.get_untracked().page + 1)
            >
                {small_icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                title="Última página"
                disabled=move || !info.get().has_next()
                on:click=move |_| on_page_change.run(info.get_untracked().total_pages)
            >
                {small_icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                title="Filas por página"
                prop:value=move || info.get().page_size.to_string()
                on:change=move |ev| {
                    let size = event_target_value(&ev).parse().unwrap_or(fallback_size);
                    on_page_size_change.run(size);
                }
            >
                {page_size_options
                    .into_iter()
                    .map(|size| {
                        view! {
                            <option value=size.to_string() selected=move || info.get().page_size == size>
                                {size}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </div>
    }
}
