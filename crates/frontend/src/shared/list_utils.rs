//! Small building blocks shared by every list page: search box, filter select,
//! sort indicators.

use crate::shared::icons::small_icon;
use contracts::shared::list_view::SortSpec;
use leptos::prelude::*;
use thaw::BadgeColor;

/// Search box. Every keystroke is forwarded; filtering is cheap and synchronous.
#[component]
pub fn SearchInput(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Buscar...".to_string()
    } else {
        placeholder
    };

    let is_active = move || !value.get().trim().is_empty();

    view! {
        <div class="search-input">
            <span class="search-input__icon">{small_icon("search")}</span>
            <input
                type="text"
                class=move || if is_active() { "search-input__field search-input__field--active" } else { "search-input__field" }
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=is_active>
                <button
                    class="search-input__clear"
                    title="Limpiar búsqueda"
                    on:click=move |_| on_change.run(String::new())
                >
                    {small_icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// Native select over the distinct values of one column, with an "all" entry first.
#[component]
pub fn FilterSelect(
    #[prop(into)] label: String,
    /// Text of the "no filter" option, e.g. "Todos" or "Todas".
    #[prop(into)]
    all_label: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] options: Signal<Vec<(String, String)>>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="filter-select">
            <label class="filter-select__label">{label}</label>
            <select
                class="filter-select__control"
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                <option value="">{all_label}</option>
                {move || {
                    let selected = value.get();
                    options
                        .get()
                        .into_iter()
                        .map(|(val, text)| {
                            let is_selected = val == selected;
                            view! { <option value=val selected=is_selected>{text}</option> }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

/// Uses the raw value as label for each option.
pub fn plain_options(values: Vec<String>) -> Vec<(String, String)> {
    values.into_iter().map(|v| (v.clone(), v)).collect()
}

/// Maps the color names used by record types ("brand", "success"...) onto
/// [`BadgeColor`]. Unknown names render as `Subtle`.
pub fn badge_color(name: &str) -> BadgeColor {
    match name {
        "brand" => BadgeColor::Brand,
        "informative" => BadgeColor::Informative,
        "success" => BadgeColor::Success,
        "warning" => BadgeColor::Warning,
        "danger" => BadgeColor::Danger,
        "important" => BadgeColor::Important,
        _ => BadgeColor::Subtle,
    }
}

pub fn get_sort_indicator(sort: &SortSpec, field: &str) -> &'static str {
    if sort.field == field {
        if sort.direction.is_ascending() {
            " ▲"
        } else {
            " ▼"
        }
    } else {
        " ⇅"
    }
}

pub fn get_sort_class(sort: &SortSpec, field: &str) -> &'static str {
    if sort.field == field {
        "sort-icon sort-icon--active"
    } else {
        "sort-icon"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::list_view::SortDirection;

    #[test]
    fn indicator_reflects_active_column_and_direction() {
        let mut sort = SortSpec::asc("nombre");
        assert_eq!(get_sort_indicator(&sort, "nombre"), " ▲");
        assert_eq!(get_sort_indicator(&sort, "nit"), " ⇅");
        sort.direction = SortDirection::Desc;
        assert_eq!(get_sort_indicator(&sort, "nombre"), " ▼");
        assert_eq!(get_sort_class(&sort, "nombre"), "sort-icon sort-icon--active");
    }

    #[test]
    fn plain_options_mirror_values() {
        assert_eq!(
            plain_options(vec!["INSUMO".into()]),
            vec![("INSUMO".to_string(), "INSUMO".to_string())]
        );
    }
}
