//! Clickable table header bound to the list controller's sort.
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Nombre"
//!     sort_field="nombre"
//!     sort=Signal::derive(move || ctrl.sort())
//!     on_sort=Callback::new(move |field: String| ctrl.toggle_sort(&field))
//! />
//! ```

use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::list_view::SortSpec;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn SortableHeaderCell(
    #[prop(into)] label: String,
    #[prop(into)] sort_field: String,
    #[prop(into)] sort: Signal<SortSpec>,
    on_sort: Callback<String>,
    #[prop(optional, default = 100.0)] min_width: f64,
    /// "left" or "right" (numeric columns)
    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let field_for_click = sort_field.clone();
    let field_for_class = sort_field.clone();

    let header_style = if align == "right" {
        "cursor: pointer; justify-content: flex-end; padding-right: 12px;"
    } else {
        "cursor: pointer; padding-right: 12px;"
    };

    view! {
        <TableHeaderCell resizable=false min_width=min_width>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| on_sort.run(field_for_click.clone())
            >
                {label}
                <span class=move || sort.with(|s| get_sort_class(s, &field_for_class))>
                    {move || sort.with(|s| get_sort_indicator(s, &sort_field))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
