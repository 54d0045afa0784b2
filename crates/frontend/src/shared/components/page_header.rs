use leptos::prelude::*;

/// Title row of a page; children land in the actions slot on the right.
/// `count` shows the number of loaded records next to the title.
#[component]
pub fn PageHeader(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: MaybeProp<String>,
    #[prop(optional, into)] count: MaybeProp<usize>,
    #[prop(optional)] icon_name: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            {icon_name.map(|name| view! { <span class="page-header__icon">{crate::shared::icons::icon(name)}</span> })}
            <div class="page-header__text">
                <h1 class="page-header__title">
                    {title}
                    {move || count.get().map(|n| view! { <span class="badge badge--primary">{n}</span> })}
                </h1>
                {move || subtitle.get().map(|s| view! { <p class="page-header__subtitle">{s}</p> })}
            </div>
            <div class="page-header__actions">{children.map(|c| c())}</div>
        </div>
    }
}
