//! Inventory capture screen: register new products or look up existing
//! ones. Saving is simulated; nothing leaves the screen.

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

use leptos::prelude::*;

use crate::util::money::parse_amount;

/// Category select options: value, label.
pub const CATEGORIES: [(&str, &str); 5] = [
    ("sombreros", "Sombreros"),
    ("botas", "Botas"),
    ("accesorios", "Accesorios"),
    ("cinturones", "Cinturones"),
    ("hebillas", "Hebillas"),
];

/// Size run captured for sized categories.
pub const SIZE_RUN: [u32; 8] = [25, 26, 27, 28, 29, 30, 31, 32];

/// Only footwear and hats capture a per-size breakdown.
pub fn uses_size_run(category: &str) -> bool {
    matches!(category, "botas" | "sombreros")
}

/// Guard for the save button.
pub fn can_save_product(name: &str, price: &str) -> bool {
    !name.trim().is_empty() && parse_amount(price).is_ok()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum CaptureMode {
    #[default]
    New,
    Existing,
}

/// Inventory screen for the register.
#[component]
pub fn InventoryScreen() -> impl IntoView {
    let mode = RwSignal::new(CaptureMode::New);

    view! {
        <div class="inventory">
            <header class="screen-header">
                <h1>"Inventario"</h1>
                <p class="screen-header__subtitle">"Alta y consulta de productos de la sucursal"</p>
            </header>
            <div class="inventory__mode">
                <button
                    class=move || {
                        if mode.get() == CaptureMode::New { "chip chip--active" } else { "chip" }
                    }
                    on:click=move |_| mode.set(CaptureMode::New)
                >
                    "Producto Nuevo"
                </button>
                <button
                    class=move || {
                        if mode.get() == CaptureMode::Existing {
                            "chip chip--active"
                        } else {
                            "chip"
                        }
                    }
                    on:click=move |_| mode.set(CaptureMode::Existing)
                >
                    "Producto Existente"
                </button>
            </div>
            {move || match mode.get() {
                CaptureMode::New => view! { <NewProductForm/> }.into_any(),
                CaptureMode::Existing => view! { <ExistingProductSearch/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn NewProductForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let sku = RwSignal::new(String::new());
    let category = RwSignal::new("sombreros".to_owned());
    let cost = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let plain_stock = RwSignal::new(String::new());
    let size_counts = RwSignal::new(vec![String::new(); SIZE_RUN.len()]);
    let print_labels = RwSignal::new(true);
    let busy = RwSignal::new(false);
    let saved = RwSignal::new(false);

    let reset = move || {
        name.set(String::new());
        sku.set(String::new());
        cost.set(String::new());
        price.set(String::new());
        plain_stock.set(String::new());
        size_counts.set(vec![String::new(); SIZE_RUN.len()]);
    };

    let save = move |_| {
        if busy.get() || !can_save_product(&name.get(), &price.get()) {
            return;
        }
        busy.set(true);
        saved.set(false);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(800)).await;
            busy.set(false);
            saved.set(true);
            reset();
        });
        #[cfg(not(feature = "hydrate"))]
        {
            busy.set(false);
            saved.set(true);
            reset();
        }
    };

    view! {
        <div class="inventory__form">
            <label class="dialog__label">
                "Nombre del Producto"
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Ej: Bota Rodeo Piel"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="dialog__label">
                "SKU"
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Ej: BOT-007"
                    prop:value=move || sku.get()
                    on:input=move |ev| sku.set(event_target_value(&ev))
                />
            </label>
            <label class="dialog__label">
                "Categoría"
                <select
                    class="dialog__input"
                    prop:value=move || category.get()
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    {CATEGORIES
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <div class="inventory__prices">
                <label class="dialog__label">
                    "Costo"
                    <input
                        class="dialog__input"
                        type="number"
                        placeholder="0.00"
                        prop:value=move || cost.get()
                        on:input=move |ev| cost.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Precio de Venta"
                    <input
                        class="dialog__input"
                        type="number"
                        placeholder="0.00"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                </label>
            </div>

            <Show
                when=move || uses_size_run(&category.get())
                fallback=move || {
                    view! {
                        <label class="dialog__label">
                            "Stock Inicial"
                            <input
                                class="dialog__input"
                                type="number"
                                placeholder="0"
                                prop:value=move || plain_stock.get()
                                on:input=move |ev| plain_stock.set(event_target_value(&ev))
                            />
                        </label>
                    }
                }
            >
                <div class="inventory__sizes">
                    <span class="inventory__sizes-title">"Stock por Talla"</span>
                    <div class="inventory__sizes-grid">
                        {SIZE_RUN
                            .into_iter()
                            .enumerate()
                            .map(|(index, size)| {
                                view! {
                                    <label class="inventory__size">
                                        {format!("{size}")}
                                        <input
                                            type="number"
                                            placeholder="0"
                                            prop:value=move || {
                                                size_counts.get().get(index).cloned().unwrap_or_default()
                                            }
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                size_counts
                                                    .update(|counts| {
                                                        if let Some(slot) = counts.get_mut(index) {
                                                            *slot = value;
                                                        }
                                                    });
                                            }
                                        />
                                    </label>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>
            </Show>

            <label class="inventory__labels">
                <input
                    type="checkbox"
                    prop:checked=move || print_labels.get()
                    on:change=move |ev| print_labels.set(event_target_checked(&ev))
                />
                "Imprimir etiquetas de código de barras"
            </label>

            <button
                class="btn btn--primary"
                disabled=move || busy.get() || !can_save_product(&name.get(), &price.get())
                on:click=save
            >
                {move || if busy.get() { "Guardando..." } else { "Guardar Producto" }}
            </button>
            <Show when=move || saved.get()>
                <p class="inventory__saved">"Producto guardado"</p>
            </Show>
        </div>
    }
}

#[component]
fn ExistingProductSearch() -> impl IntoView {
    let query = RwSignal::new(String::new());

    view! {
        <div class="inventory__existing">
            <input
                class="dialog__input"
                type="text"
                placeholder="Buscar por nombre o SKU..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <div class="inventory__existing-hint">
                <p>"Busca un producto para editar su información"</p>
            </div>
        </div>
    }
}
