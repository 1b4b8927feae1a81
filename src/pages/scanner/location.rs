//! Location finder: where a product lives in the warehouse.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

use crate::state::scanner::ScannerState;
use crate::util::search::any_field_matches;

/// A product with its physical slot in the warehouse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoredProduct {
    pub name: &'static str,
    pub sku: &'static str,
    pub warehouse: &'static str,
    pub aisle: &'static str,
    pub shelf: &'static str,
    pub stock: u32,
}

pub const WAREHOUSE_STOCK: [StoredProduct; 4] = [
    StoredProduct {
        name: "Botas Cuadra Avestruz",
        sku: "BOT-001",
        warehouse: "Bodega Principal",
        aisle: "Pasillo 3",
        shelf: "Repisa B",
        stock: 5,
    },
    StoredProduct {
        name: "Botas Vaqueras Clásicas",
        sku: "BOT-002",
        warehouse: "Bodega Principal",
        aisle: "Pasillo 3",
        shelf: "Repisa C",
        stock: 8,
    },
    StoredProduct {
        name: "Sombrero Texana Premium",
        sku: "SOM-001",
        warehouse: "Bodega Principal",
        aisle: "Pasillo 1",
        shelf: "Repisa A",
        stock: 12,
    },
    StoredProduct {
        name: "Cinturón Piel de Res",
        sku: "CIN-001",
        warehouse: "Bodega Principal",
        aisle: "Pasillo 2",
        shelf: "Repisa D",
        stock: 18,
    },
];

/// Name/SKU search over the warehouse map. A blank query finds nothing,
/// matching the disabled search button.
pub fn find_locations(query: &str) -> Vec<StoredProduct> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    WAREHOUSE_STOCK
        .into_iter()
        .filter(|product| any_field_matches(&[product.name, product.sku], query))
        .collect()
}

#[component]
pub fn LocationFinderScreen(state: RwSignal<ScannerState>) -> impl IntoView {
    let query = RwSignal::new(String::new());
    let last_query = RwSignal::new(String::new());
    // None until the first search completes.
    let results = RwSignal::new(None::<Vec<StoredProduct>>);
    let searching = RwSignal::new(false);

    let search = move || {
        let raw = query.get();
        if searching.get() || raw.trim().is_empty() {
            return;
        }
        searching.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(500)).await;
            last_query.set(raw.clone());
            results.set(Some(find_locations(&raw)));
            searching.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            last_query.set(raw.clone());
            results.set(Some(find_locations(&raw)));
            searching.set(false);
        }
    };

    view! {
        <div class="scanner-screen">
            <header class="scanner-header">
                <button
                    class="scanner-header__back"
                    on:click=move |_| state.update(ScannerState::go_back)
                >
                    "←"
                </button>
                <h1>"📍 Buscador de Ubicación"</h1>
                <p>"Encuentra productos en la bodega"</p>
            </header>

            <div class="scanner-search">
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Buscar por nombre o SKU..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Enter" {
                            search();
                        }
                    }
                />
                <button
                    class="btn btn--primary"
                    disabled=move || searching.get() || query.with(|q| q.trim().is_empty())
                    on:click=move |_| search()
                >
                    "Buscar"
                </button>
            </div>

            <div class="scanner-screen__body">
                {move || {
                    if searching.get() {
                        return view! {
                            <p class="scanner-screen__empty">"Buscando..."</p>
                        }
                        .into_any();
                    }
                    match results.get() {
                        None => view! {
                            <div class="scanner-screen__empty">
                                <h3>"Busca un producto"</h3>
                                <p>
                                    "Ingresa el nombre o código del producto que necesitas \
                                     encontrar en la bodega"
                                </p>
                            </div>
                        }
                        .into_any(),
                        Some(found) if found.is_empty() => view! {
                            <div class="scanner-screen__empty">
                                <h3>"No se encontraron resultados"</h3>
                                <p>
                                    {format!(
                                        "No hay productos que coincidan con \"{}\"",
                                        last_query.get(),
                                    )}
                                </p>
                            </div>
                        }
                        .into_any(),
                        Some(found) => view! {
                            <div class="location-list">
                                {found
                                    .into_iter()
                                    .map(|product| {
                                        view! {
                                            <div class="location-card">
                                                <div class="location-card__head">
                                                    <div>
                                                        <h4>{product.name}</h4>
                                                        <span class="badge badge--info">
                                                            {product.sku}
                                                        </span>
                                                    </div>
                                                    <span class="badge badge--ok">
                                                        {format!("{} unidades", product.stock)}
                                                    </span>
                                                </div>
                                                <div class="location-card__slot">
                                                    <p>"📍 Ubicación Física:"</p>
                                                    <ul>
                                                        <li>
                                                            <strong>"Bodega: "</strong>
                                                            {product.warehouse}
                                                        </li>
                                                        <li>
                                                            <strong>"Pasillo: "</strong>
                                                            {product.aisle}
                                                        </li>
                                                        <li>
                                                            <strong>"Repisa: "</strong>
                                                            {product.shelf}
                                                        </li>
                                                    </ul>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                        .into_any(),
                    }
                }}
            </div>

            <aside class="panel panel--note">
                <p>
                    "💡 Tip: Si el sistema maneja ubicaciones físicas, puedes encontrar \
                     rápidamente dónde está guardado cada producto sin tener que buscarlo \
                     manualmente."
                </p>
            </aside>
        </div>
    }
}
