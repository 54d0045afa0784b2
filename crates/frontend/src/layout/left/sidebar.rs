//! Navigation sidebar: grouped links to every shell route.

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (path, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "principal",
            label: "Principal",
            icon: "dashboard",
            items: vec![
                ("/dashboard", "Dashboard", "dashboard"),
                ("/pacientes", "Pacientes", "patients"),
                ("/ordenes", "Órdenes", "orders"),
                ("/reportes", "Reportes", "reports"),
            ],
        },
        MenuGroup {
            id: "inventario",
            label: "Inventario",
            icon: "inventory",
            items: vec![
                ("/items", "Items", "pill"),
                ("/inventarios", "Inventarios", "inventory"),
                ("/proveedores", "Proveedores", "suppliers"),
                ("/ubicaciones", "Ubicaciones", "locations"),
                ("/comprobantes", "Comprobantes", "receipts"),
            ],
        },
        MenuGroup {
            id: "administracion",
            label: "Administración",
            icon: "audit",
            items: vec![
                ("/usuarios", "Usuarios", "users"),
                ("/auditoria", "Auditoría", "audit"),
            ],
        },
    ]
}

/// `/items` must not light up for `/items-archivados`, only for itself and sub-paths.
fn is_active_path(current: &str, path: &str) -> bool {
    current == path
        || current
            .strip_prefix(path)
            .map(|rest| rest.starts_with('/'))
            .unwrap_or(false)
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();
    let pathname = location.pathname;
    let expanded_groups = RwSignal::new(
        get_menu_groups()
            .into_iter()
            .map(|g| g.id)
            .collect::<Vec<_>>(),
    );

    view! {
        <nav class="app-sidebar">
            <div class="app-sidebar__brand">
                {icon("pill")}
                <span>"FarmaGestión"</span>
            </div>
            {get_menu_groups()
                .into_iter()
                .map(|group| {
                    let gid = group.id;
                    let is_expanded = move || expanded_groups.get().contains(&gid);
                    view! {
                        <div class="app-sidebar__group">
                            <div
                                class="app-sidebar__item app-sidebar__item--group"
                                on:click=move |_| {
                                    expanded_groups.update(|groups| {
                                        if let Some(pos) = groups.iter().position(|g| *g == gid) {
                                            groups.remove(pos);
                                        } else {
                                            groups.push(gid);
                                        }
                                    });
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div class="app-sidebar__chevron" class:app-sidebar__chevron--expanded=is_expanded>
                                    {icon("chevron-right")}
                                </div>
                            </div>
                            <Show when=is_expanded>
                                <div class="app-sidebar__children">
                                    {group
                                        .items
                                        .clone()
                                        .into_iter()
                                        .map(|(path, label, icon_name)| {
                                            view! {
                                                <A href=path attr:class="app-sidebar__link">
                                                    <div
                                                        class="app-sidebar__item"
                                                        class:app-sidebar__item--active=move || is_active_path(&pathname.get(), path)
                                                    >
                                                        <div class="app-sidebar__item-content">
                                                            {icon(icon_name)}
                                                            <span>{label}</span>
                                                        </div>
                                                    </div>
                                                </A>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_path_matches_exact_route_and_children_only() {
        assert!(is_active_path("/items", "/items"));
        assert!(is_active_path("/items/3", "/items"));
        assert!(!is_active_path("/items-archivados", "/items"));
        assert!(!is_active_path("/dashboard", "/items"));
    }

    #[test]
    fn every_route_appears_once_in_the_menu() {
        let mut paths: Vec<_> = get_menu_groups()
            .into_iter()
            .flat_map(|g| g.items.into_iter().map(|(p, _, _)| p))
            .collect();
        let total = paths.len();
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), total);
        assert_eq!(total, 11);
    }
}
