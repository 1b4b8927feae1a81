//! Sales screen: catalog grid, cart panel, and checkout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The cart signal is created here, scoped to this screen's mount.
//! Navigating away or closing the shift unmounts the screen and discards
//! the in-progress sale; nothing is saved anywhere.

#[cfg(test)]
#[path = "sales_test.rs"]
mod sales_test;

use leptos::prelude::*;

use crate::state::cart::{Cart, SaleType};
use crate::state::catalog::{
    CategoryFilter, Product, StockLevel, demo_products, filter_products, stock_level,
};
use crate::util::money::format_money;

use super::checkout::CheckoutDialog;

pub const DEMO_CUSTOMERS: [&str; 4] =
    ["Cliente General", "María García", "Juan Pérez", "Ana López"];

/// Cart line label for a chosen size.
pub fn variant_label(size: u32) -> String {
    format!("Talla {size}")
}

/// Header counter: "1 producto" / "3 productos".
pub fn line_count_label(lines: usize) -> String {
    if lines == 1 {
        "1 producto".to_owned()
    } else {
        format!("{lines} productos")
    }
}

/// Badge class for a stock figure.
pub fn stock_badge_class(stock: u32) -> &'static str {
    match stock_level(stock) {
        StockLevel::Healthy => "badge badge--ok",
        StockLevel::Low => "badge badge--warn",
        StockLevel::Out => "badge badge--danger",
    }
}

/// Register sales screen for an active shift.
#[component]
pub fn SalesScreen() -> impl IntoView {
    let cart = RwSignal::new(Cart::default());
    let products = demo_products();
    let query = RwSignal::new(String::new());
    let category = RwSignal::new(CategoryFilter::All);
    let variant_picker = RwSignal::new(None::<Product>);
    let show_checkout = RwSignal::new(false);

    let on_checkout = Callback::new(move |()| {
        if !cart.get().is_empty() {
            show_checkout.set(true);
        }
    });
    let on_checkout_cancel = Callback::new(move |()| show_checkout.set(false));
    let on_checkout_complete = Callback::new(move |()| {
        cart.update(Cart::clear);
        show_checkout.set(false);
    });
    let on_picker_close = Callback::new(move |()| variant_picker.set(None));

    let grid = move || {
        let query = query.get();
        let category = category.get();
        filter_products(&products, &query, category)
            .into_iter()
            .cloned()
            .map(|product| {
                view! { <ProductCard product=product cart=cart variant_picker=variant_picker/> }
            })
            .collect::<Vec<_>>()
    };

    let no_results = {
        let products = demo_products();
        move || filter_products(&products, &query.get(), category.get()).is_empty()
    };

    view! {
        <div class="sales">
            <div class="sales__main">
                <SalesHeader query=query/>
                <div class="sales__chips">
                    {CategoryFilter::ALL
                        .into_iter()
                        .map(|chip| {
                            view! {
                                <button
                                    class=move || {
                                        if category.get() == chip {
                                            "chip chip--active"
                                        } else {
                                            "chip"
                                        }
                                    }
                                    on:click=move |_| category.set(chip)
                                >
                                    {chip.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="sales__grid">{grid}</div>
                <Show when=no_results>
                    <div class="sales__empty">
                        <p>"No se encontraron productos"</p>
                        <p class="sales__empty-hint">"Intenta con otra búsqueda o categoría"</p>
                    </div>
                </Show>
            </div>
            <CartPanel cart=cart on_checkout=on_checkout/>

            <Show when=move || variant_picker.get().is_some()>
                {move || {
                    variant_picker
                        .get()
                        .map(|product| {
                            view! {
                                <VariantDialog
                                    product=product
                                    cart=cart
                                    on_close=on_picker_close
                                />
                            }
                        })
                }}
            </Show>
            <Show when=move || show_checkout.get()>
                <CheckoutDialog
                    cart=cart
                    on_cancel=on_checkout_cancel
                    on_complete=on_checkout_complete
                />
            </Show>
        </div>
    }
}

/// Search bar with the scanner / price-check stubs and the online badge.
#[component]
fn SalesHeader(query: RwSignal<String>) -> impl IntoView {
    let show_scanner = RwSignal::new(false);
    let show_price_check = RwSignal::new(false);

    view! {
        <header class="sales-header">
            <input
                class="sales-header__search"
                type="text"
                placeholder="Buscar por nombre, SKU o etiqueta..."
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
            <button class="btn" on:click=move |_| show_scanner.set(true)>
                "Escáner"
            </button>
            <button class="btn" on:click=move |_| show_price_check.set(true)>
                "Verificar Precio"
            </button>
            <span class="sales-header__status">
                <span class="status-dot status-dot--online"></span>
                "En línea"
            </span>

            <Show when=move || show_scanner.get()>
                <div class="dialog-backdrop" on:click=move |_| show_scanner.set(false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Escáner de Código de Barras"</h2>
                        <p class="dialog__message">
                            "Apunta la pistola lectora a un código de barras para agregarlo a la venta."
                        </p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| show_scanner.set(false)>
                                "Cancelar"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
            <Show when=move || show_price_check.get()>
                <div class="dialog-backdrop" on:click=move |_| show_price_check.set(false)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Verificar Precio"</h2>
                        <p class="dialog__message">
                            "Escanea un producto para consultar su precio sin agregarlo a la venta."
                        </p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| show_price_check.set(false)>
                                "Cerrar"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </header>
    }
}

/// One catalog tile. Variant products open the size picker, the rest go
/// straight into the cart.
#[component]
fn ProductCard(
    product: Product,
    cart: RwSignal<Cart>,
    variant_picker: RwSignal<Option<Product>>,
) -> impl IntoView {
    let has_variants = product.has_variants();
    let badge_class = stock_badge_class(product.stock);
    let stock_text = format!("Stock: {}", product.stock);
    let name = product.name.clone();
    let sku = product.sku.clone();
    let price = product.price;

    let on_click = move |_| {
        if has_variants {
            variant_picker.set(Some(product.clone()));
        } else {
            cart.update(|c| c.add(&product, None));
        }
    };

    view! {
        <button class="product-card" on:click=on_click>
            <span class="product-card__name">{name}</span>
            <span class="product-card__sku">{sku}</span>
            <span class="product-card__price">{format_money(price)}</span>
            <span class="product-card__badges">
                <span class=badge_class>{stock_text}</span>
                <Show when=move || has_variants>
                    <span class="badge badge--info">"Tallas disponibles"</span>
                </Show>
            </span>
        </button>
    }
}

/// Size picker for variant products. Sold-out sizes stay disabled.
#[component]
fn VariantDialog(product: Product, cart: RwSignal<Cart>, on_close: Callback<()>) -> impl IntoView {
    let name = product.name.clone();
    let variants = product.variants.clone();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Seleccionar Talla"</h2>
                <p class="dialog__message">{name}</p>
                <p class="dialog__hint">"Selecciona una talla:"</p>
                <div class="variant-grid">
                    {variants
                        .into_iter()
                        .map(|variant| {
                            let product = product.clone();
                            let size = variant.size;
                            let out = variant.stock == 0;
                            let availability = if out {
                                "Agotado".to_owned()
                            } else {
                                format!("{} disponibles", variant.stock)
                            };
                            view! {
                                <button
                                    class="variant-grid__option"
                                    disabled=out
                                    on:click=move |_| {
                                        cart.update(|c| c.add(&product, Some(variant_label(size))));
                                        on_close.run(());
                                    }
                                >
                                    <span>{variant_label(size)}</span>
                                    <span class="variant-grid__stock">{availability}</span>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancelar"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Right-hand cart panel with customer, discount, lines, and totals.
#[component]
fn CartPanel(cart: RwSignal<Cart>, on_checkout: Callback<()>) -> impl IntoView {
    let show_customer = RwSignal::new(false);
    let show_discount = RwSignal::new(false);
    let on_customer_close = Callback::new(move |()| show_customer.set(false));
    let on_discount_close = Callback::new(move |()| show_discount.set(false));

    let lines = move || {
        cart.get()
            .items
            .into_iter()
            .map(|item| {
                let dec = {
                    let id = item.product_id.clone();
                    let variant = item.variant.clone();
                    move |_| cart.update(|c| c.step_quantity(&id, variant.as_deref(), false))
                };
                let inc = {
                    let id = item.product_id.clone();
                    let variant = item.variant.clone();
                    move |_| cart.update(|c| c.step_quantity(&id, variant.as_deref(), true))
                };
                let drop = {
                    let id = item.product_id.clone();
                    let variant = item.variant.clone();
                    move |_| cart.update(|c| c.remove(&id, variant.as_deref()))
                };
                view! {
                    <div class="cart-line">
                        <div class="cart-line__info">
                            <span class="cart-line__name">{item.name.clone()}</span>
                            {item
                                .variant
                                .clone()
                                .map(|v| view! { <span class="cart-line__variant">{v}</span> })}
                            <span class="cart-line__price">{format_money(item.price)}</span>
                        </div>
                        <div class="cart-line__controls">
                            <button class="btn btn--small" on:click=dec>"−"</button>
                            <span class="cart-line__quantity">{item.quantity}</span>
                            <button class="btn btn--small" on:click=inc>"+"</button>
                            <button class="btn btn--small btn--danger" on:click=drop>"✕"</button>
                        </div>
                        <span class="cart-line__subtotal">
                            {format!("Subtotal: {}", format_money(item.line_subtotal()))}
                        </span>
                    </div>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <aside class="cart-panel">
            <header class="cart-panel__header">
                <h2>"Carrito de Venta"</h2>
                <span class="cart-panel__count">
                    {move || line_count_label(cart.get().items.len())}
                </span>
            </header>

            <button class="cart-panel__customer" on:click=move |_| show_customer.set(true)>
                <span>"Cliente"</span>
                <span class="cart-panel__customer-name">{move || cart.get().customer}</span>
            </button>

            <div class="cart-panel__sale-type">
                {[SaleType::Normal, SaleType::Layaway]
                    .into_iter()
                    .map(|sale_type| {
                        view! {
                            <button
                                class=move || {
                                    if cart.get().sale_type == sale_type {
                                        "chip chip--active"
                                    } else {
                                        "chip"
                                    }
                                }
                                on:click=move |_| cart.update(|c| c.sale_type = sale_type)
                            >
                                {sale_type.label()}
                            </button>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <Show
                when=move || !cart.get().is_empty()
                fallback=|| {
                    view! {
                        <div class="cart-panel__empty">
                            <p>"El carrito está vacío"</p>
                            <p class="cart-panel__empty-hint">
                                "Selecciona productos para comenzar"
                            </p>
                        </div>
                    }
                }
            >
                <div class="cart-panel__lines">{lines}</div>
            </Show>

            <div class="cart-panel__totals">
                <div class="totals__row">
                    <span>"Subtotal"</span>
                    <span>{move || format_money(cart.get().subtotal())}</span>
                </div>
                <div class="totals__row">
                    <span>
                        {move || format!("Descuento ({:.0}%)", cart.get().discount_percent)}
                    </span>
                    <span>{move || format!("-{}", format_money(cart.get().discount_amount()))}</span>
                </div>
                <div class="totals__row">
                    <span>"IVA (16%)"</span>
                    <span>{move || format_money(cart.get().tax_amount())}</span>
                </div>
                <div class="totals__row totals__row--total">
                    <span>"Total"</span>
                    <span>{move || format_money(cart.get().total())}</span>
                </div>
            </div>

            <div class="cart-panel__actions">
                <button class="btn" on:click=move |_| show_discount.set(true)>
                    "Descuento"
                </button>
                <button class="btn">"Guardar"</button>
                <button
                    class="btn btn--primary cart-panel__charge"
                    disabled=move || cart.get().is_empty()
                    on:click=move |_| on_checkout.run(())
                >
                    "COBRAR"
                </button>
            </div>
            <button
                class="btn btn--ghost cart-panel__clear"
                on:click=move |_| cart.update(Cart::clear)
            >
                "Limpiar Carrito"
            </button>

            <Show when=move || show_customer.get()>
                <CustomerDialog cart=cart on_close=on_customer_close/>
            </Show>
            <Show when=move || show_discount.get()>
                <DiscountDialog cart=cart on_close=on_discount_close/>
            </Show>
        </aside>
    }
}

/// Customer picker over the fixed demo roster.
#[component]
fn CustomerDialog(cart: RwSignal<Cart>, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Seleccionar Cliente"</h2>
                <div class="customer-list">
                    {DEMO_CUSTOMERS
                        .into_iter()
                        .map(|customer| {
                            view! {
                                <button
                                    class=move || {
                                        if cart.get().customer == customer {
                                            "customer-list__row customer-list__row--active"
                                        } else {
                                            "customer-list__row"
                                        }
                                    }
                                    on:click=move |_| {
                                        cart.update(|c| c.customer = customer.to_owned())
                                    }
                                >
                                    {customer}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <button class="btn btn--ghost">"+ Crear Nuevo Cliente"</button>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                        "Confirmar"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Global discount dialog; the cart clamps whatever is applied.
#[component]
fn DiscountDialog(cart: RwSignal<Cart>, on_close: Callback<()>) -> impl IntoView {
    let value = RwSignal::new(String::new());

    let apply = Callback::new(move |()| {
        let percent = value.get().trim().parse::<f64>().unwrap_or(0.0);
        cart.update(|c| c.set_discount(percent));
        on_close.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Aplicar Descuento Global"</h2>
                <label class="dialog__label">
                    "Porcentaje (0-100)"
                    <input
                        class="dialog__input"
                        type="number"
                        min="0"
                        max="100"
                        placeholder="0"
                        prop:value=move || value.get()
                        on:input=move |ev| value.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                apply.run(());
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancelar"
                    </button>
                    <button class="btn btn--primary" on:click=move |_| apply.run(())>
                        "Aplicar"
                    </button>
                </div>
            </div>
        </div>
    }
}
