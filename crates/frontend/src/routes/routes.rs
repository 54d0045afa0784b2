use crate::dashboards::ResumenDashboard;
use crate::domain::a001_item::ui::list::ItemCatalog;
use crate::domain::a003_proveedor::ui::list::ProveedorList;
use crate::domain::a004_ubicacion::ui::list::UbicacionList;
use crate::domain::a005_comprobante::ui::list::ComprobanteList;
use crate::layout::Shell;
use crate::pages::{InventariosPage, OrdenesPage, PacientesPage, ReportesPage};
use crate::system::auditoria::ui::list::AuditoriaList;
use crate::system::pages::login::LoginPage;
use crate::system::pages::not_found::NotFoundPage;
use crate::system::pages::recuperar_contrasena::RecuperarContrasenaPage;
use crate::system::usuarios::ui::list::UsuarioList;
use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Redirect, Route, Router, Routes};
use leptos_router::path;

#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <Shell>
            <Outlet />
        </Shell>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=|| view! { <Redirect path="/login" /> } />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/recuperar-contrasena") view=RecuperarContrasenaPage />
                <ParentRoute path=path!("") view=MainLayout>
                    <Route path=path!("dashboard") view=ResumenDashboard />
                    <Route path=path!("pacientes") view=PacientesPage />
                    <Route path=path!("items") view=ItemCatalog />
                    <Route path=path!("ordenes") view=OrdenesPage />
                    <Route path=path!("reportes") view=ReportesPage />
                    <Route path=path!("inventarios") view=InventariosPage />
                    <Route path=path!("usuarios") view=UsuarioList />
                    <Route path=path!("proveedores") view=ProveedorList />
                    <Route path=path!("ubicaciones") view=UbicacionList />
                    <Route path=path!("auditoria") view=AuditoriaList />
                    <Route path=path!("comprobantes") view=ComprobanteList />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
