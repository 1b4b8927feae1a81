//! Inventory scanner: count products into an audit list without a PC.

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use leptos::prelude::*;

use crate::state::scanner::ScannerState;

use super::{pick_scan, random_roll, ScanHit};

/// Demo audit session name.
pub const AUDIT_NAME: &str = "Estante A";

/// One counted line of the audit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CountedItem {
    pub barcode: &'static str,
    pub name: &'static str,
    pub sku: &'static str,
    pub quantity: u32,
}

/// Folds a confirmed count into the list. Repeated scans of the same
/// product merge into one line; zero counts are dropped.
pub fn add_count(items: &mut Vec<CountedItem>, hit: ScanHit, quantity: u32) -> bool {
    if quantity == 0 {
        return false;
    }
    if let Some(line) = items.iter_mut().find(|item| item.barcode == hit.barcode) {
        line.quantity += quantity;
    } else {
        items.push(CountedItem {
            barcode: hit.barcode,
            name: hit.name,
            sku: hit.sku,
            quantity,
        });
    }
    true
}

/// Guard for the count-entry confirm button.
pub fn can_confirm_count(raw: &str) -> bool {
    raw.trim().parse::<u32>().is_ok_and(|qty| qty > 0)
}

#[component]
pub fn InventoryScannerScreen(state: RwSignal<ScannerState>) -> impl IntoView {
    let items = RwSignal::new(Vec::<CountedItem>::new());
    let current = RwSignal::new(None::<ScanHit>);
    let quantity = RwSignal::new(String::new());
    let scanning = RwSignal::new(false);
    let show_list = RwSignal::new(false);

    let scan = move |_| {
        if scanning.get() {
            return;
        }
        scanning.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(800)).await;
            current.set(Some(pick_scan(random_roll())));
            scanning.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            current.set(Some(pick_scan(random_roll())));
            scanning.set(false);
        }
    };

    let confirm_count = move |_| {
        let raw = quantity.get();
        let Ok(qty) = raw.trim().parse::<u32>() else {
            return;
        };
        let Some(hit) = current.get_untracked() else {
            return;
        };
        items.update(|list| {
            add_count(list, hit, qty);
        });
        current.set(None);
        quantity.set(String::new());
    };

    let finish = move |_| {
        let folio = uuid::Uuid::new_v4();
        #[cfg(feature = "hydrate")]
        log::info!("auditoría guardada: folio {folio}");
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = folio;
        }
        state.update(ScannerState::go_back);
    };

    view! {
        <Show
            when=move || show_list.get()
            fallback=move || {
                view! {
                    <div class="scanner-screen scanner-screen--dark">
                        <header class="scanner-header scanner-header--overlay">
                            <button
                                class="scanner-header__back"
                                on:click=move |_| state.update(ScannerState::go_back)
                            >
                                "←"
                            </button>
                            <h1>"📊 Escáner de Inventario"</h1>
                            <button
                                class="scanner-header__list"
                                on:click=move |_| show_list.set(true)
                            >
                                "☰"
                                <Show when=move || !items.with(Vec::is_empty)>
                                    <span class="scanner-header__count">
                                        {move || items.with(Vec::len)}
                                    </span>
                                </Show>
                            </button>
                        </header>
                        <p class="scanner-screen__meta">
                            {format!("Auditoría: {AUDIT_NAME}")}
                        </p>

                        {move || match current.get() {
                            Some(hit) => view! {
                                <div class="scan-result">
                                    <div class="scan-result__head">
                                        <div>
                                            <h3>{hit.name}</h3>
                                            <p>{format!("SKU: {}", hit.sku)}</p>
                                        </div>
                                        <span class="scan-result__check">"✓"</span>
                                    </div>
                                    <label class="dialog__label">
                                        "Cantidad Contada:"
                                        <input
                                            class="dialog__input scan-result__qty"
                                            type="number"
                                            placeholder="0"
                                            autofocus
                                            prop:value=move || quantity.get()
                                            on:input=move |ev| quantity.set(event_target_value(&ev))
                                        />
                                    </label>
                                    <div class="dialog__actions">
                                        <button
                                            class="btn btn--ghost"
                                            on:click=move |_| {
                                                current.set(None);
                                                quantity.set(String::new());
                                            }
                                        >
                                            "Cancelar"
                                        </button>
                                        <button
                                            class="btn btn--primary"
                                            disabled=move || !can_confirm_count(&quantity.get())
                                            on:click=confirm_count
                                        >
                                            "Siguiente"
                                        </button>
                                    </div>
                                </div>
                            }
                            .into_any(),
                            None => view! {
                                <div class="scanner-screen__body scanner-screen__body--center">
                                    <div class="scan-frame">
                                        <Show when=move || scanning.get()>
                                            <span class="scan-frame__line"></span>
                                        </Show>
                                    </div>
                                    <p class="scan-frame__title">"Apunta al código de barras"</p>
                                    <p class="scan-frame__hint">
                                        "Escucharás un \"beep\" al detectar el código"
                                    </p>
                                    <button
                                        class="btn btn--primary"
                                        disabled=move || scanning.get()
                                        on:click=scan
                                    >
                                        {move || {
                                            if scanning.get() {
                                                "Escaneando..."
                                            } else {
                                                "Simular Escaneo"
                                            }
                                        }}
                                    </button>
                                </div>
                            }
                            .into_any(),
                        }}
                    </div>
                }
            }
        >
            <div class="scanner-screen">
                <header class="scanner-header">
                    <button
                        class="scanner-header__back"
                        on:click=move |_| show_list.set(false)
                    >
                        "←"
                    </button>
                    <h1>"Productos Contados"</h1>
                    <div class="scanner-header__status">
                        <span>{format!("Auditoría: {AUDIT_NAME}")}</span>
                        <span class="badge badge--info">
                            {move || format!("{} items", items.with(Vec::len))}
                        </span>
                    </div>
                </header>

                <div class="scanner-screen__body">
                    {move || {
                        let list = items.get();
                        if list.is_empty() {
                            view! {
                                <p class="scanner-screen__empty">
                                    "No hay productos escaneados aún"
                                </p>
                            }
                            .into_any()
                        } else {
                            view! {
                                <div class="counted-list">
                                    {list
                                        .into_iter()
                                        .map(|item| {
                                            view! {
                                                <div class="counted-item">
                                                    <div>
                                                        <h4>{item.name}</h4>
                                                        <p>{format!("SKU: {}", item.sku)}</p>
                                                    </div>
                                                    <span class="badge badge--ok">
                                                        {format!("Cantidad: {}", item.quantity)}
                                                    </span>
                                                </div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            }
                            .into_any()
                        }
                    }}
                </div>

                <div class="scanner-screen__actions">
                    <button class="btn btn--primary" on:click=move |_| show_list.set(false)>
                        "Continuar Escaneando"
                    </button>
                    <Show when=move || !items.with(Vec::is_empty)>
                        <button class="btn btn--ghost" on:click=finish>
                            "Finalizar Auditoría"
                        </button>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
