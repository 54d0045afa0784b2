//! Sections without backend data yet: a title and a one-line description.

use crate::shared::components::PageHeader;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_STATIC;
use leptos::prelude::*;

#[component]
fn InfoPage(
    page_id: &'static str,
    title: &'static str,
    icon_name: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_STATIC>
            <PageHeader title=title icon_name=icon_name />
            <p class="page__description">{description}</p>
        </PageFrame>
    }
}

#[component]
pub fn PacientesPage() -> impl IntoView {
    view! {
        <InfoPage
            page_id="pacientes--static"
            title="Gestión de Pacientes"
            icon_name="patients"
            description="Aquí podrás registrar, consultar y actualizar la información de los pacientes."
        />
    }
}

#[component]
pub fn OrdenesPage() -> impl IntoView {
    view! {
        <InfoPage
            page_id="ordenes--static"
            title="Gestión de Órdenes"
            icon_name="orders"
            description="Aquí podrás crear, editar y visualizar órdenes médicas."
        />
    }
}

#[component]
pub fn ReportesPage() -> impl IntoView {
    view! {
        <InfoPage
            page_id="reportes--static"
            title="Reportes y Estadísticas"
            icon_name="reports"
            description="Visualiza reportes de pacientes, medicamentos y órdenes generadas."
        />
    }
}
