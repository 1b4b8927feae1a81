//! SaaS console shell for the platform operator.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod billing;
pub mod dashboard;
pub mod logs;
pub mod plans;
pub mod seeds;
pub mod tenants;

use leptos::prelude::*;

use crate::state::session::Session;
use crate::state::superadmin::SuperAdminScreen;

use billing::BillingScreen;
use dashboard::SaasDashboardScreen;
use logs::SystemLogsScreen;
use plans::PlansScreen;
use seeds::SeedsScreen;
use tenants::TenantsScreen;

/// Sidebar entries in display order: screen, label, icon.
pub fn sidebar_items() -> [(SuperAdminScreen, &'static str, &'static str); 6] {
    [
        (SuperAdminScreen::Dashboard, "SaaS Overview", "📊"),
        (SuperAdminScreen::Tenants, "Gestión de Tenants", "👥"),
        (SuperAdminScreen::Plans, "Planes y Límites", "📦"),
        (SuperAdminScreen::Billing, "Facturación SaaS", "💳"),
        (SuperAdminScreen::Seeds, "Catálogos Base", "⚙️"),
        (SuperAdminScreen::Logs, "Logs del Sistema", "📄"),
    ]
}

/// Console layout for the SuperAdmin role.
#[component]
pub fn SuperAdminLayout() -> impl IntoView {
    let screen = RwSignal::new(SuperAdminScreen::default());

    view! {
        <div class="role-layout">
            <SuperAdminSidebar screen=screen/>
            <main class="role-layout__screen">
                {move || match screen.get() {
                    SuperAdminScreen::Dashboard => view! { <SaasDashboardScreen/> }.into_any(),
                    SuperAdminScreen::Tenants => view! { <TenantsScreen/> }.into_any(),
                    SuperAdminScreen::Plans => view! { <PlansScreen/> }.into_any(),
                    SuperAdminScreen::Billing => view! { <BillingScreen/> }.into_any(),
                    SuperAdminScreen::Seeds => view! { <SeedsScreen/> }.into_any(),
                    SuperAdminScreen::Logs => view! { <SystemLogsScreen/> }.into_any(),
                }}
            </main>
        </div>
    }
}

/// Unlike the store rails, the console sidebar starts expanded and
/// collapses with a chevron.
#[component]
fn SuperAdminSidebar(screen: RwSignal<SuperAdminScreen>) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let expanded = RwSignal::new(true);

    view! {
        <aside class=move || {
            if expanded.get() {
                "sidebar sidebar--admin sidebar--expanded"
            } else {
                "sidebar sidebar--admin"
            }
        }>
            <div class="sidebar__header">
                <span class="sidebar__icon">"👑"</span>
                <Show when=move || expanded.get()>
                    <div>
                        <span class="sidebar__title">"Super Admin"</span>
                        <span class="sidebar__subtitle">"Control Maestro"</span>
                    </div>
                </Show>
                <button
                    class="sidebar__toggle"
                    on:click=move |_| expanded.update(|open| *open = !*open)
                >
                    {move || if expanded.get() { "‹" } else { "›" }}
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
                                on:click=move |_| screen.set(item)
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
