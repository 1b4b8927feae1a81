//! Consultas screen: price lookups and network-wide stock checks.
//!
//! Read-only tooling for the cashier. Nothing here touches the cart or
//! the shift, so the sidebar leaves it enabled even before a shift is
//! open.

use leptos::prelude::*;

use crate::util::money::format_money;

#[cfg(test)]
#[path = "queries_test.rs"]
mod queries_test;

/// Stock for the lookup product across the chain, per branch.
const NETWORK_STOCK: [(&str, u32); 3] = [
    ("Sucursal Norte", 8),
    ("Sucursal Centro", 2),
    ("Sucursal Sur", 5),
];

fn network_total() -> u32 {
    NETWORK_STOCK.iter().map(|(_, stock)| stock).sum()
}

/// Resolves a price-check query to `(name, price, sku)`.
///
/// Blank queries resolve to nothing so the result card stays hidden
/// until the cashier actually types something.
fn price_result(query: &str) -> Option<(&'static str, f64, &'static str)> {
    if query.trim().is_empty() {
        None
    } else {
        Some(("Botas Cuadra Avestruz", 3499.99, "BOT-002"))
    }
}

#[component]
pub fn QueriesScreen() -> impl IntoView {
    let price_query = RwSignal::new(String::new());

    view! {
        <div class="queries">
            <header class="screen-header">
                <h1>"Consultas"</h1>
                <p>"Precios, existencias y movimientos del día"</p>
            </header>

            <div class="queries__grid">
                <section class="queries__card">
                    <h2>"🏷️ Verificador de Precios"</h2>
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Escanea o escribe un código..."
                        prop:value=move || price_query.get()
                        on:input=move |ev| price_query.set(event_target_value(&ev))
                    />
                    {move || {
                        price_result(&price_query.get()).map(|(name, price, sku)| {
                            view! {
                                <div class="queries__result">
                                    <span class="queries__result-name">{name}</span>
                                    <span class="queries__result-price">
                                        {format_money(price)}
                                    </span>
                                    <span class="queries__result-sku">{format!("SKU: {sku}")}</span>
                                </div>
                            }
                        })
                    }}
                </section>

                <section class="queries__card">
                    <h2>"🏬 Existencias en Red"</h2>
                    <ul class="queries__branches">
                        {NETWORK_STOCK
                            .iter()
                            .map(|(branch, stock)| {
                                view! {
                                    <li class="queries__branch">
                                        <span>{*branch}</span>
                                        <span class="queries__stock">
                                            {format!("{stock} pzas")}
                                        </span>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                    <div class="queries__network-total">
                        <span>"Total en red"</span>
                        <span>{format!("{} pzas", network_total())}</span>
                    </div>
                </section>
            </div>

            <div class="queries__actions">
                <button class="action-card">
                    <span class="action-card__icon">"📈"</span>
                    <span class="action-card__title">"Ventas del Día"</span>
                </button>
                <button class="action-card">
                    <span class="action-card__icon">"📋"</span>
                    <span class="action-card__title">"Apartados"</span>
                </button>
                <button class="action-card">
                    <span class="action-card__icon">"↩️"</span>
                    <span class="action-card__title">"Devoluciones"</span>
                </button>
            </div>
        </div>
    }
}
