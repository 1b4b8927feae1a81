//! Master inventory: chain-wide catalog with costs, margins, and valuation.
//!
//! Costs live only on this side of the app. Register screens show prices
//! and stock but never what the merchandise cost the business.

use leptos::prelude::*;

use crate::util::money::format_money;
use crate::util::search::any_field_matches;

#[cfg(test)]
#[path = "inventory_test.rs"]
mod inventory_test;

/// Branch columns for the per-store stock breakdown, in display order.
pub const BRANCH_NAMES: [&str; 4] = [
    "Sucursal Norte",
    "Sucursal Centro",
    "Sucursal Sur",
    "Sucursal Este",
];

const BRANCH_TAGS: [&str; 4] = ["N", "C", "S", "E"];

#[derive(Clone)]
pub struct MasterProduct {
    pub sku: &'static str,
    pub name: &'static str,
    pub cost: f64,
    pub price: f64,
    /// Units on hand per branch, same order as [`BRANCH_NAMES`].
    pub stock: [u32; 4],
}

impl MasterProduct {
    pub fn total_stock(&self) -> u32 {
        self.stock.iter().sum()
    }

    /// Markup over cost, as a percentage.
    pub fn margin_percent(&self) -> f64 {
        if self.cost <= 0.0 {
            0.0
        } else {
            (self.price - self.cost) / self.cost * 100.0
        }
    }
}

fn demo_master_products() -> Vec<MasterProduct> {
    vec![
        MasterProduct {
            sku: "SOM-001",
            name: "Sombrero Texana Premium",
            cost: 650.0,
            price: 1_299.99,
            stock: [15, 18, 8, 7],
        },
        MasterProduct {
            sku: "BOT-002",
            name: "Botas Cuadra Avestruz",
            cost: 2_100.0,
            price: 3_499.99,
            stock: [8, 6, 5, 4],
        },
        MasterProduct {
            sku: "CIN-003",
            name: "Cinturón Piel de Res",
            cost: 250.0,
            price: 599.99,
            stock: [25, 32, 18, 12],
        },
        MasterProduct {
            sku: "SOM-004",
            name: "Sombrero Vaquero Clásico",
            cost: 450.0,
            price: 899.99,
            stock: [20, 25, 12, 8],
        },
        MasterProduct {
            sku: "BOT-005",
            name: "Botas Vaqueras Clásicas",
            cost: 1_300.0,
            price: 2_199.99,
            stock: [12, 10, 7, 5],
        },
    ]
}

/// Purchase value of everything on hand.
fn inventory_value(products: &[MasterProduct]) -> f64 {
    products
        .iter()
        .map(|p| p.cost * f64::from(p.total_stock()))
        .sum()
}

/// Sale value if every unit sold at list price.
fn retail_value(products: &[MasterProduct]) -> f64 {
    products
        .iter()
        .map(|p| p.price * f64::from(p.total_stock()))
        .sum()
}

fn total_items(products: &[MasterProduct]) -> u32 {
    products.iter().map(MasterProduct::total_stock).sum()
}

/// Moves `qty` units between branch columns. Rejects no-op moves and
/// anything the source branch cannot cover.
pub fn transfer_stock(stock: &mut [u32; 4], from: usize, to: usize, qty: u32) -> bool {
    if from == to || qty == 0 || from >= stock.len() || to >= stock.len() {
        return false;
    }
    if stock[from] < qty {
        return false;
    }
    stock[from] -= qty;
    stock[to] += qty;
    true
}

/// Applies a signed correction to one branch column. Subtractions that
/// would go below zero are rejected rather than clamped.
pub fn adjust_stock(stock: &mut [u32; 4], branch: usize, add: bool, qty: u32) -> bool {
    if qty == 0 || branch >= stock.len() {
        return false;
    }
    if add {
        stock[branch] += qty;
        true
    } else if stock[branch] >= qty {
        stock[branch] -= qty;
        true
    } else {
        false
    }
}

#[component]
pub fn MasterInventoryScreen() -> impl IntoView {
    let products = RwSignal::new(demo_master_products());
    let query = RwSignal::new(String::new());
    let transfer_for: RwSignal<Option<usize>> = RwSignal::new(None);
    let adjust_for: RwSignal<Option<usize>> = RwSignal::new(None);

    let investment = Memo::new(move |_| products.with(|list| inventory_value(list)));
    let retail = Memo::new(move |_| products.with(|list| retail_value(list)));
    let items = Memo::new(move |_| products.with(|list| total_items(list)));
    let product_count = Memo::new(move |_| products.with(Vec::len));

    view! {
        <div class="master-inventory">
            <header class="screen-header screen-header--split">
                <div>
                    <h1>"📦 Inventario Maestro"</h1>
                    <p>"Gestión completa de productos y valuación"</p>
                </div>
                <button class="btn btn--primary">"+ Nuevo Producto"</button>
            </header>

            <div class="stat-grid">
                <div class="stat">
                    <span class="stat__label">"Inversión Total"</span>
                    <span class="stat__value">{move || format_money(investment.get())}</span>
                    <span class="stat__hint">"Valor de compra del inventario"</span>
                </div>
                <div class="stat">
                    <span class="stat__label">"Valor de Venta"</span>
                    <span class="stat__value stat__value--ok">
                        {move || format_money(retail.get())}
                    </span>
                    <span class="stat__hint">"Si se vendiera todo el stock"</span>
                </div>
                <div class="stat">
                    <span class="stat__label">"Utilidad Potencial"</span>
                    <span class="stat__value stat__value--ok">
                        {move || format_money(retail.get() - investment.get())}
                    </span>
                    <span class="stat__hint">"Ganancia si se vende todo"</span>
                </div>
                <div class="stat">
                    <span class="stat__label">"Total Items"</span>
                    <span class="stat__value">{move || items.get().to_string()}</span>
                    <span class="stat__hint">
                        {move || format!("{} productos únicos", product_count.get())}
                    </span>
                </div>
            </div>

            <section class="panel">
                <div class="panel__header">
                    <h2>"Catálogo Maestro"</h2>
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Buscar producto..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </div>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"SKU"</th>
                            <th>"Producto"</th>
                            <th>"Costo"</th>
                            <th>"Precio Venta"</th>
                            <th>"Margen %"</th>
                            <th>"Stock Total"</th>
                            <th>"Distribución"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let filter = query.get();
                            products
                                .get()
                                .into_iter()
                                .enumerate()
                                .filter(|(_, p)| any_field_matches(&[p.name, p.sku], &filter))
                                .map(|(index, product)| {
                                    view! {
                                        <tr>
                                            <td>
                                                <span class="badge badge--info">{product.sku}</span>
                                            </td>
                                            <td>{product.name}</td>
                                            <td class="table__cell--warn">
                                                {format_money(product.cost)}
                                            </td>
                                            <td class="table__cell--ok">
                                                {format_money(product.price)}
                                            </td>
                                            <td>
                                                <span class="badge badge--ok">
                                                    {format!("{:.1}%", product.margin_percent())}
                                                </span>
                                            </td>
                                            <td>{product.total_stock().to_string()}</td>
                                            <td>
                                                <div class="table__chips">
                                                    {BRANCH_TAGS
                                                        .iter()
                                                        .zip(product.stock)
                                                        .map(|(tag, units)| {
                                                            view! {
                                                                <span class="chip chip--small">
                                                                    {format!("{tag}:{units}")}
                                                                </span>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </div>
                                            </td>
                                            <td>
                                                <button
                                                    class="btn btn--ghost btn--small"
                                                    title="Traspaso"
                                                    on:click=move |_| {
                                                        transfer_for.set(Some(index));
                                                    }
                                                >
                                                    "⇄"
                                                </button>
                                                <button
                                                    class="btn btn--ghost btn--small"
                                                    title="Ajuste"
                                                    on:click=move |_| adjust_for.set(Some(index))
                                                >
                                                    "✏️"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </section>

            <aside class="panel panel--note">
                <h2>"Reporte de Valuación"</h2>
                <p>
                    "Este módulo muestra información financiera crítica del inventario, \
                     incluyendo costos de compra que NO son visibles para empleados de \
                     punto de venta. Úsalo para tomar decisiones de compra y detectar \
                     productos con bajo margen."
                </p>
            </aside>

            {move || {
                transfer_for.get().map(|index| {
                    view! {
                        <TransferDialog
                            products=products
                            index=index
                            on_close=Callback::new(move |()| transfer_for.set(None))
                        />
                    }
                })
            }}
            {move || {
                adjust_for.get().map(|index| {
                    view! {
                        <AdjustmentDialog
                            products=products
                            index=index
                            on_close=Callback::new(move |()| adjust_for.set(None))
                        />
                    }
                })
            }}
        </div>
    }
}

/// Moves units of one product between branches.
#[component]
fn TransferDialog(
    products: RwSignal<Vec<MasterProduct>>,
    index: usize,
    on_close: Callback<()>,
) -> impl IntoView {
    let from = RwSignal::new(0usize);
    let to = RwSignal::new(1usize);
    let qty = RwSignal::new(String::new());

    let header = products.with_untracked(|list| {
        list.get(index)
            .map(|p| (p.name, p.sku))
            .unwrap_or(("", ""))
    });

    let parsed_qty = move || qty.get().trim().parse::<u32>().unwrap_or(0);
    let available = move || {
        products.with(|list| {
            list.get(index)
                .and_then(|p| p.stock.get(from.get()).copied())
                .unwrap_or(0)
        })
    };
    let can_transfer = move || {
        let units = parsed_qty();
        units > 0 && from.get() != to.get() && units <= available()
    };

    let confirm = move |_| {
        let units = parsed_qty();
        let (src, dst) = (from.get(), to.get());
        products.update(|list| {
            if let Some(product) = list.get_mut(index) {
                transfer_stock(&mut product.stock, src, dst, units);
            }
        });
        on_close.run(());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h2>"Traspaso de Inventario"</h2>
                <div class="dialog__note">
                    <p>{header.0}</p>
                    <p class="dialog__hint">{format!("SKU: {}", header.1)}</p>
                </div>
                <div class="dialog__columns">
                    <label class="dialog__field">
                        <span class="dialog__label">"Origen"</span>
                        <select
                            class="dialog__input"
                            on:change=move |ev| {
                                from.set(event_target_value(&ev).parse().unwrap_or(0));
                            }
                            prop:value=move || from.get().to_string()
                        >
                            {BRANCH_NAMES
                                .iter()
                                .enumerate()
                                .map(|(i, name)| {
                                    let label = move || {
                                        products.with(|list| {
                                            let units = list
                                                .get(index)
                                                .and_then(|p| p.stock.get(i).copied())
                                                .unwrap_or(0);
                                            format!("{name} ({units})")
                                        })
                                    };
                                    view! { <option value=i.to_string()>{label}</option> }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="dialog__field">
                        <span class="dialog__label">"Destino"</span>
                        <select
                            class="dialog__input"
                            on:change=move |ev| {
                                to.set(event_target_value(&ev).parse().unwrap_or(0));
                            }
                            prop:value=move || to.get().to_string()
                        >
                            {BRANCH_NAMES
                                .iter()
                                .enumerate()
                                .map(|(i, name)| {
                                    view! { <option value=i.to_string()>{*name}</option> }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                </div>
                <label class="dialog__field">
                    <span class="dialog__label">"Cantidad a Transferir"</span>
                    <input
                        class="dialog__input"
                        type="number"
                        min="1"
                        placeholder="0"
                        prop:value=move || qty.get()
                        on:input=move |ev| qty.set(event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn btn--ghost" on:click=move |_| on_close.run(())>
                        "Cancelar"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || !can_transfer()
                        on:click=confirm
                    >
                        "Realizar Traspaso"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Signed stock correction with a mandatory reason.
#[component]
fn AdjustmentDialog(
    products: RwSignal<Vec<MasterProduct>>,
    index: usize,
    on_close: Callback<()>,
) -> impl IntoView {
    let branch = RwSignal::new(0usize);
    let adding = RwSignal::new(true);
    let qty = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());

    let header = products.with_untracked(|list| {
        list.get(index)
            .map(|p| (p.name, p.total_stock()))
            .unwrap_or(("", 0))
    });

    let parsed_qty = move || qty.get().trim().parse::<u32>().unwrap_or(0);
    let can_apply = move || {
        let units = parsed_qty();
        if units == 0 || reason.get().trim().is_empty() {
            return false;
        }
        adding.get()
            || products.with(|list| {
                list.get(index)
                    .and_then(|p| p.stock.get(branch.get()).copied())
                    .unwrap_or(0)
                    >= units
            })
    };

    let apply = move |_| {
        let units = parsed_qty();
        let (target, add) = (branch.get(), adding.get());
        products.update(|list| {
            if let Some(product) = list.get_mut(index) {
                adjust_stock(&mut product.stock, target, add, units);
            }
        });
        on_close.run(());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h2>"Ajuste de Inventario"</h2>
                <div class="dialog__note">
                    <p>{header.0}</p>
                    <p class="dialog__hint">
                        {format!("Stock actual: {} unidades", header.1)}
                    </p>
                </div>
                <div class="dialog__warning">
                    <p>
                        "Advertencia: Los ajustes de inventario afectan las estadísticas \
                         de negocio. Úsalos solo para corregir errores o dar de baja \
                         mercancía."
                    </p>
                </div>
                <label class="dialog__field">
                    <span class="dialog__label">"Sucursal"</span>
                    <select
                        class="dialog__input"
                        on:change=move |ev| {
                            branch.set(event_target_value(&ev).parse().unwrap_or(0));
                        }
                        prop:value=move || branch.get().to_string()
                    >
                        {BRANCH_NAMES
                            .iter()
                            .enumerate()
                            .map(|(i, name)| {
                                view! { <option value=i.to_string()>{*name}</option> }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__field">
                    <span class="dialog__label">"Tipo de Ajuste"</span>
                    <select
                        class="dialog__input"
                        on:change=move |ev| adding.set(event_target_value(&ev) == "add")
                        prop:value=move || if adding.get() { "add" } else { "subtract" }
                    >
                        <option value="add">"Suma (+)"</option>
                        <option value="subtract">"Resta (-)"</option>
                    </select>
                </label>
                <label class="dialog__field">
                    <span class="dialog__label">"Cantidad"</span>
                    <input
                        class="dialog__input"
                        type="number"
                        min="1"
                        placeholder="0"
                        prop:value=move || qty.get()
                        on:input=move |ev| qty.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__field">
                    <span class="dialog__label">"Motivo (Obligatorio)"</span>
                    <textarea
                        class="dialog__input"
                        rows="3"
                        placeholder="Ej: Merma por daño, robo detectado, regalo a cliente, error de conteo..."
                        prop:value=move || reason.get()
                        on:input=move |ev| reason.set(event_target_value(&ev))
                    ></textarea>
                </label>
                <div class="dialog__actions">
                    <button class="btn btn--ghost" on:click=move |_| on_close.run(())>
                        "Cancelar"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || !can_apply()
                        on:click=apply
                    >
                        "Aplicar Ajuste"
                    </button>
                </div>
            </div>
        </div>
    }
}
