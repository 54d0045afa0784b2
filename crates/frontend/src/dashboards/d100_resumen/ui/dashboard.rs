use contracts::system::dashboard::DashboardMetrics;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::dashboards::d100_resumen::api;
use crate::shared::components::{PageHeader, StatCard, StatTone};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::system::auth::context::use_session;

#[component]
pub fn ResumenDashboard() -> impl IntoView {
    let session = use_session();
    // Stays at all-None while loading and after a failure, so every card shows "—".
    let metrics = RwSignal::new(DashboardMetrics::default());

    Effect::new(move |_| {
        let role = session.user.with(|u| u.role.clone());
        spawn_local(async move {
            match api::get_metrics(&role).await {
                Ok(m) => {
                    let _ = metrics.try_set(m);
                }
                Err(e) => log::warn!("Métricas del dashboard no disponibles ({}): {}", role, e),
            }
        });
    });

    let card = move |pick: fn(&DashboardMetrics) -> Option<u64>| Signal::derive(move || pick(&metrics.get()));

    view! {
        <PageFrame page_id="d100_resumen--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <PageHeader
                    title="Dashboard Principal"
                    subtitle="Bienvenido a FarmaGestión. Aquí podrás ver un resumen general del sistema y tus estadísticas.".to_string()
                    icon_name="dashboard"
                />
            </div>
            <div class="page__content">
                <div class="stat-grid">
                    <StatCard label="Pacientes" icon_name="patients" value=card(|m| m.pacientes) />
                    <StatCard label="Medicamentos" icon_name="pill" value=card(|m| m.medicamentos) />
                    <StatCard label="Órdenes" icon_name="orders" value=card(|m| m.ordenes) />
                    <StatCard
                        label="Inventario"
                        icon_name="inventory"
                        tone=StatTone::Warning
                        value=card(|m| m.alertas)
                        subtitle="alertas".to_string()
                    />
                </div>
                <section class="dashboard__upcoming">
                    <p>"Gráfico de órdenes mensuales (próximamente)"</p>
                    <p>"Estado de órdenes (próximamente)"</p>
                </section>
            </div>
        </PageFrame>
    }
}
