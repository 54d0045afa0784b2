use crate::domain::a001_item::ui::list::ItemPanel;
use crate::domain::a002_lote::ui::list::LotePanel;
use crate::domain::a006_existencia::ui::list::ExistenciaPanel;
use crate::shared::components::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use leptos::prelude::*;
use thaw::*;

const TAB_ITEMS: &str = "items";
const TAB_LOTES: &str = "lotes";
const TAB_EXISTENCIAS: &str = "existencias";

/// Items, batches and stock on hand. Each tab mounts its own list, so
/// switching tabs reloads that collection.
#[component]
pub fn InventariosPage() -> impl IntoView {
    let selected_tab = RwSignal::new(TAB_ITEMS.to_string());

    view! {
        <PageFrame page_id="inventarios--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <PageHeader
                    title="Gestión de Inventarios"
                    subtitle="Administra productos, medicamentos y suministros de forma centralizada.".to_string()
                    icon_name="inventory"
                />
                <TabList selected_value=selected_tab>
                    <Tab value=TAB_ITEMS>"Items"</Tab>
                    <Tab value=TAB_LOTES>"Lotes"</Tab>
                    <Tab value=TAB_EXISTENCIAS>"Existencias"</Tab>
                </TabList>
            </div>
            <div class="page__content">
                {move || match selected_tab.get().as_str() {
                    TAB_LOTES => view! { <LotePanel /> }.into_any(),
                    TAB_EXISTENCIAS => view! { <ExistenciaPanel /> }.into_any(),
                    _ => view! { <ItemPanel editable=true /> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}
