//! Owner role shell: chain-wide dashboards behind a collapsible rail.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Dueño sees aggregated figures across every branch, including the
//! purchase costs the register screens deliberately hide. All screens are
//! reachable at any time; there is no shift gate on this side.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod audit;
pub mod branches;
pub mod config;
pub mod dashboard;
pub mod inventory;
pub mod personnel;
pub mod reports;

use leptos::prelude::*;

use crate::state::owner::OwnerScreen;
use crate::state::session::Session;

use audit::AuditScreen;
use branches::BranchesScreen;
use config::ConfigScreen;
use dashboard::DashboardScreen;
use inventory::MasterInventoryScreen;
use personnel::PersonnelScreen;
use reports::ReportsScreen;

/// Sidebar entries in display order: screen, label, icon.
pub fn sidebar_items() -> [(OwnerScreen, &'static str, &'static str); 7] {
    [
        (OwnerScreen::Dashboard, "Dashboard Ejecutivo", "📊"),
        (OwnerScreen::Branches, "Monitor de Sucursales", "🏬"),
        (OwnerScreen::Audit, "Auditoría y Cortes", "🛡️"),
        (OwnerScreen::Inventory, "Inventario Maestro", "📦"),
        (OwnerScreen::Personnel, "Personal", "👥"),
        (OwnerScreen::Reports, "Reportes Inteligentes", "📈"),
        (OwnerScreen::Config, "Configuración Global", "⚙️"),
    ]
}

/// Back-office layout for the Dueño role.
#[component]
pub fn OwnerLayout() -> impl IntoView {
    let screen = RwSignal::new(OwnerScreen::default());

    view! {
        <div class="role-layout">
            <OwnerSidebar screen=screen/>
            <main class="role-layout__screen">
                {move || match screen.get() {
                    OwnerScreen::Dashboard => view! { <DashboardScreen/> }.into_any(),
                    OwnerScreen::Branches => view! { <BranchesScreen/> }.into_any(),
                    OwnerScreen::Audit => view! { <AuditScreen/> }.into_any(),
                    OwnerScreen::Inventory => view! { <MasterInventoryScreen/> }.into_any(),
                    OwnerScreen::Personnel => view! { <PersonnelScreen/> }.into_any(),
                    OwnerScreen::Reports => view! { <ReportsScreen/> }.into_any(),
                    OwnerScreen::Config => view! { <ConfigScreen/> }.into_any(),
                }}
            </main>
        </div>
    }
}

#[component]
fn OwnerSidebar(screen: RwSignal<OwnerScreen>) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let expanded = RwSignal::new(false);

    view! {
        <aside class=move || {
            if expanded.get() { "sidebar sidebar--expanded" } else { "sidebar" }
        }>
            <div class="sidebar__header">
                <Show when=move || expanded.get()>
                    <span class="sidebar__title">"Dueño"</span>
                </Show>
                <button
                    class="sidebar__toggle"
                    on:click=move |_| expanded.update(|open| *open = !*open)
                >
                    {move || if expanded.get() { "✕" } else { "☰" }}
                </button>
            </div>
            <nav class="sidebar__items">
                {sidebar_items()
                    .into_iter()
                    .map(|(item, label, icon)| {
                        let item_class = move || {
                            if screen.get() == item {
                                "sidebar__item sidebar__item--active"
                            } else {
                                "sidebar__item"
                            }
                        };
                        view! {
                            <button
                                class=item_class
                                title=label
                                on:click=move |_| {
                                    expanded.set(true);
                                    screen.set(item);
                                }
                            >
                                <span class="sidebar__icon">{icon}</span>
                                <Show when=move || expanded.get()>
                                    <span class="sidebar__label">{label}</span>
                                </Show>
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <button
                class="sidebar__item sidebar__logout"
                title="Cerrar Sesión"
                on:click=move |_| session.update(|s| s.sign_out())
            >
                <span class="sidebar__icon">"🚪"</span>
                <Show when=move || expanded.get()>
                    <span class="sidebar__label">"Cerrar Sesión"</span>
                </Show>
            </button>
        </aside>
    }
}
