//! POS register shell: sidebar, shift machine, and screen router.
//!
//! SYSTEM CONTEXT
//! ==============
//! The layout owns the register state (current screen + shift phase) and
//! mounts exactly one feature screen at a time. Switching screens swaps
//! the mounted subtree, so screen-local state such as the sale cart never
//! survives navigation.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod cash;
pub mod checkout;
pub mod inventory;
pub mod queries;
pub mod sales;
pub mod shift_start;

use leptos::prelude::*;

use crate::state::pos::{PosScreen, PosState, ShiftPhase};
use crate::state::session::Session;

use cash::CashScreen;
use inventory::InventoryScreen;
use queries::QueriesScreen;
use sales::SalesScreen;
use shift_start::ShiftStartScreen;

/// Sidebar entries in display order: screen, label, icon.
pub fn sidebar_items() -> [(PosScreen, &'static str, &'static str); 4] {
    [
        (PosScreen::Sales, "Punto de Venta", "🛒"),
        (PosScreen::Inventory, "Inventario", "📦"),
        (PosScreen::Cash, "Movimientos de Caja", "💵"),
        (PosScreen::Queries, "Consultas", "🔍"),
    ]
}

/// Register layout for the Encargado role.
#[component]
pub fn PosLayout() -> impl IntoView {
    let pos = RwSignal::new(PosState::default());
    let screen = Memo::new(move |_| pos.get().effective_screen());

    view! {
        <div class="role-layout">
            <PosSidebar pos=pos/>
            <main class="role-layout__screen">
                {move || match screen.get() {
                    PosScreen::ShiftStart => view! { <ShiftStartScreen pos=pos/> }.into_any(),
                    PosScreen::Sales => view! { <SalesScreen/> }.into_any(),
                    PosScreen::Inventory => view! { <InventoryScreen/> }.into_any(),
                    PosScreen::Cash => view! { <CashScreen pos=pos/> }.into_any(),
                    PosScreen::Queries => view! { <QueriesScreen/> }.into_any(),
                }}
            </main>
        </div>
    }
}

/// Collapsible rail. Items needing a shift stay disabled until one opens;
/// picking any enabled item also expands the rail.
#[component]
fn PosSidebar(pos: RwSignal<PosState>) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let expanded = RwSignal::new(false);

    view! {
        <aside class=move || {
            if expanded.get() { "sidebar sidebar--expanded" } else { "sidebar" }
        }>
            <div class="sidebar__header">
                <Show when=move || expanded.get()>
                    <span class="sidebar__title">"POS"</span>
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
                    .map(|(screen, label, icon)| {
                        let enabled = move || {
                            !screen.needs_shift() || pos.get().shift == ShiftPhase::Active
                        };
                        let item_class = move || {
                            let mut class = String::from("sidebar__item");
                            if pos.get().screen == screen {
                                class.push_str(" sidebar__item--active");
                            }
                            if !enabled() {
                                class.push_str(" sidebar__item--disabled");
                            }
                            class
                        };
                        view! {
                            <button
                                class=item_class
                                disabled=move || !enabled()
                                title=label
                                on:click=move |_| {
                                    if enabled() {
                                        expanded.set(true);
                                        pos.update(|p| p.select_screen(screen));
                                    }
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
