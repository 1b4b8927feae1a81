//! Business-intelligence reports: rankings, dead stock, and sales mix.

use leptos::prelude::*;

use crate::util::money::format_money;

#[cfg(test)]
#[path = "reports_test.rs"]
mod reports_test;

/// Reporting window selector, wider-grained than the dashboard's.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReportRange {
    Week,
    #[default]
    Month,
    Quarter,
    Year,
}

impl ReportRange {
    pub const ALL: [ReportRange; 4] = [
        ReportRange::Week,
        ReportRange::Month,
        ReportRange::Quarter,
        ReportRange::Year,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ReportRange::Week => "Esta Semana",
            ReportRange::Month => "Este Mes",
            ReportRange::Quarter => "Este Trimestre",
            ReportRange::Year => "Este Año",
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            ReportRange::Week => "week",
            ReportRange::Month => "month",
            ReportRange::Quarter => "quarter",
            ReportRange::Year => "year",
        }
    }

    pub fn from_value(value: &str) -> ReportRange {
        ReportRange::ALL
            .into_iter()
            .find(|range| range.value() == value)
            .unwrap_or_default()
    }
}

pub struct BestSeller {
    pub product: &'static str,
    pub category: &'static str,
    pub units_sold: u32,
    pub revenue: f64,
    pub profit: f64,
}

fn best_sellers() -> [BestSeller; 5] {
    [
        BestSeller {
            product: "Botas Cuadra Avestruz",
            category: "Botas",
            units_sold: 87,
            revenue: 304_499.13,
            profit: 121_799.13,
        },
        BestSeller {
            product: "Sombrero Texana Premium",
            category: "Sombreros",
            units_sold: 156,
            revenue: 202_798.44,
            profit: 101_398.44,
        },
        BestSeller {
            product: "Cinturón Piel de Res",
            category: "Accesorios",
            units_sold: 243,
            revenue: 145_797.57,
            profit: 84_997.57,
        },
        BestSeller {
            product: "Botas Vaqueras Clásicas",
            category: "Botas",
            units_sold: 65,
            revenue: 142_999.35,
            profit: 58_499.35,
        },
        BestSeller {
            product: "Sombrero Vaquero Clásico",
            category: "Sombreros",
            units_sold: 98,
            revenue: 88_199.02,
            profit: 44_099.02,
        },
    ]
}

/// Podium emoji for the first three places, plain numbers after.
fn rank_marker(rank: usize) -> String {
    match rank {
        1 => "🥇".to_owned(),
        2 => "🥈".to_owned(),
        3 => "🥉".to_owned(),
        other => other.to_string(),
    }
}

pub struct DeadItem {
    pub product: &'static str,
    pub days_stagnant: u32,
    pub stock: u32,
    pub invested: f64,
    pub last_sale: &'static str,
}

fn dead_stock() -> [DeadItem; 4] {
    [
        DeadItem {
            product: "Hebilla Plata Antigua",
            days_stagnant: 127,
            stock: 34,
            invested: 8_500.0,
            last_sale: "14 Sep 2024",
        },
        DeadItem {
            product: "Sombrero Ala Ancha XL",
            days_stagnant: 98,
            stock: 12,
            invested: 7_800.0,
            last_sale: "12 Oct 2024",
        },
        DeadItem {
            product: "Botas Exóticas Cocodrilo",
            days_stagnant: 86,
            stock: 5,
            invested: 12_500.0,
            last_sale: "26 Oct 2024",
        },
        DeadItem {
            product: "Cinturón Decorado Premium",
            days_stagnant: 73,
            stock: 18,
            invested: 5_400.0,
            last_sale: "08 Nov 2024",
        },
    ]
}

fn dead_stock_value(items: &[DeadItem]) -> f64 {
    items.iter().map(|i| i.invested).sum()
}

pub struct CategorySlice {
    pub name: &'static str,
    pub percent: u32,
    pub revenue: f64,
}

fn category_mix() -> [CategorySlice; 5] {
    [
        CategorySlice { name: "Botas", percent: 42, revenue: 485_000.0 },
        CategorySlice { name: "Sombreros", percent: 28, revenue: 320_000.0 },
        CategorySlice { name: "Accesorios", percent: 18, revenue: 205_000.0 },
        CategorySlice { name: "Cinturones", percent: 8, revenue: 92_000.0 },
        CategorySlice { name: "Otros", percent: 4, revenue: 45_000.0 },
    ]
}

fn category_revenue(slices: &[CategorySlice]) -> f64 {
    slices.iter().map(|s| s.revenue).sum()
}

pub struct PaymentSlice {
    pub method: &'static str,
    pub amount: f64,
    pub percent: u32,
}

fn payment_mix() -> [PaymentSlice; 4] {
    [
        PaymentSlice { method: "Efectivo", amount: 458_200.0, percent: 42 },
        PaymentSlice { method: "Tarjeta Débito", amount: 382_500.0, percent: 35 },
        PaymentSlice { method: "Tarjeta Crédito", amount: 197_800.0, percent: 18 },
        PaymentSlice { method: "Transferencia", amount: 54_500.0, percent: 5 },
    ]
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum ReportTab {
    #[default]
    BestSellers,
    DeadStock,
    Categories,
    Payments,
}

#[component]
pub fn ReportsScreen() -> impl IntoView {
    let range = RwSignal::new(ReportRange::default());
    let tab = RwSignal::new(ReportTab::default());

    let top = best_sellers();
    let dead = dead_stock();
    let categories = category_mix();
    let payments = payment_mix();

    let top_name = top[0].product;
    let top_units = top[0].units_sold;
    let dead_count = dead.len();
    let dead_value = dead_stock_value(&dead);
    let revenue = category_revenue(&categories);
    let category_count = categories.len();
    let preferred = payments[0].method;
    let preferred_pct = payments[0].percent;

    let tab_class = move |own: ReportTab| {
        if tab.get() == own { "tab tab--active" } else { "tab" }
    };

    view! {
        <div class="reports">
            <header class="screen-header screen-header--split">
                <div>
                    <h1>"📈 Reportes Inteligentes"</h1>
                    <p>"Business Intelligence y análisis de datos"</p>
                </div>
                <select
                    class="dialog__input"
                    on:change=move |ev| {
                        range.set(ReportRange::from_value(&event_target_value(&ev)));
                    }
                    prop:value=move || range.get().value()
                >
                    {ReportRange::ALL
                        .into_iter()
                        .map(|r| view! { <option value=r.value()>{r.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </header>

            <div class="stat-grid">
                <div class="stat">
                    <span class="stat__label">"Top Product"</span>
                    <span class="stat__value stat__value--small">{top_name}</span>
                    <span class="stat__hint">
                        {format!("{top_units} unidades vendidas")}
                    </span>
                </div>
                <div class="stat">
                    <span class="stat__label">"Ventas por Categoría"</span>
                    <span class="stat__value">{category_count.to_string()}</span>
                    <span class="stat__hint">{format!("{} total", format_money(revenue))}</span>
                </div>
                <div class="stat">
                    <span class="stat__label">"Stock Muerto"</span>
                    <span class="stat__value stat__value--warn">{dead_count.to_string()}</span>
                    <span class="stat__hint">
                        {format!("{} invertidos", format_money(dead_value))}
                    </span>
                </div>
                <div class="stat">
                    <span class="stat__label">"Pago Preferido"</span>
                    <span class="stat__value stat__value--small">{preferred}</span>
                    <span class="stat__hint">{format!("{preferred_pct}% del total")}</span>
                </div>
            </div>

            <section class="panel">
                <div class="tabs">
                    <button class=move || tab_class(ReportTab::BestSellers)
                        on:click=move |_| tab.set(ReportTab::BestSellers)>
                        "Top Productos"
                    </button>
                    <button class=move || tab_class(ReportTab::DeadStock)
                        on:click=move |_| tab.set(ReportTab::DeadStock)>
                        "Stock Muerto"
                    </button>
                    <button class=move || tab_class(ReportTab::Categories)
                        on:click=move |_| tab.set(ReportTab::Categories)>
                        "Por Categoría"
                    </button>
                    <button class=move || tab_class(ReportTab::Payments)
                        on:click=move |_| tab.set(ReportTab::Payments)>
                        "Métodos de Pago"
                    </button>
                </div>

                {move || match tab.get() {
                    ReportTab::BestSellers => view! {
                        <div>
                            <h2>"Productos Más Vendidos"</h2>
                            <p class="panel__hint">
                                "Ranking de productos por cantidad vendida y ingresos generados"
                            </p>
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Rank"</th>
                                        <th>"Producto"</th>
                                        <th>"Categoría"</th>
                                        <th>"Unidades"</th>
                                        <th>"Ingresos"</th>
                                        <th>"Utilidad"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {best_sellers()
                                        .into_iter()
                                        .enumerate()
                                        .map(|(i, item)| {
                                            view! {
                                                <tr>
                                                    <td class="table__rank">
                                                        {rank_marker(i + 1)}
                                                    </td>
                                                    <td>{item.product}</td>
                                                    <td>
                                                        <span class="badge badge--info">
                                                            {item.category}
                                                        </span>
                                                    </td>
                                                    <td>{item.units_sold.to_string()}</td>
                                                    <td class="table__cell--ok">
                                                        {format_money(item.revenue)}
                                                    </td>
                                                    <td class="table__cell--ok">
                                                        {format_money(item.profit)}
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </tbody>
                            </table>
                        </div>
                    }
                    .into_any(),
                    ReportTab::DeadStock => view! {
                        <div>
                            <div class="panel__warning">
                                <h2>"⚠️ Productos sin movimiento"</h2>
                                <p>
                                    "Estos productos no se han vendido en los últimos 90+ \
                                     días. Considera aplicar descuentos o promociones para \
                                     recuperar la inversión."
                                </p>
                            </div>
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Producto"</th>
                                        <th>"Días Estancado"</th>
                                        <th>"Stock"</th>
                                        <th>"Valor Invertido"</th>
                                        <th>"Última Venta"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {dead_stock()
                                        .into_iter()
                                        .map(|item| {
                                            view! {
                                                <tr class="table__row--flagged">
                                                    <td>{item.product}</td>
                                                    <td>
                                                        <span class="badge badge--danger">
                                                            {format!(
                                                                "{} días",
                                                                item.days_stagnant,
                                                            )}
                                                        </span>
                                                    </td>
                                                    <td>{item.stock.to_string()}</td>
                                                    <td class="table__cell--warn">
                                                        {format_money(item.invested)}
                                                    </td>
                                                    <td class="table__cell--muted">
                                                        {item.last_sale}
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </tbody>
                            </table>
                            <div class="totals__row totals__row--total">
                                <span>"Total Invertido en Stock Muerto:"</span>
                                <span class="table__cell--warn">
                                    {format_money(dead_stock_value(&dead_stock()))}
                                </span>
                            </div>
                        </div>
                    }
                    .into_any(),
                    ReportTab::Categories => view! {
                        <div>
                            <h2>"Ventas por Categoría"</h2>
                            <p class="panel__hint">
                                "Distribución de ingresos por categoría de producto"
                            </p>
                            <div class="mix-grid">
                                {category_mix()
                                    .into_iter()
                                    .map(|slice| {
                                        view! {
                                            <div class="mix-card">
                                                <span class="mix-card__name">{slice.name}</span>
                                                <span class="mix-card__percent">
                                                    {format!("{}%", slice.percent)}
                                                </span>
                                                <div class="mix-card__bar">
                                                    <div
                                                        class="mix-card__fill"
                                                        style:width=format!("{}%", slice.percent)
                                                    ></div>
                                                </div>
                                                <span class="mix-card__amount">
                                                    {format_money(slice.revenue)}
                                                </span>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </div>
                    }
                    .into_any(),
                    ReportTab::Payments => view! {
                        <div>
                            <h2>"Análisis de Métodos de Pago"</h2>
                            <p class="panel__hint">
                                "Distribución de ventas por forma de pago - Vital para \
                                 planeación fiscal"
                            </p>
                            <div class="mix-grid">
                                {payment_mix()
                                    .into_iter()
                                    .map(|slice| {
                                        view! {
                                            <div class="mix-card">
                                                <span class="mix-card__name">{slice.method}</span>
                                                <span class="mix-card__percent">
                                                    {format_money(slice.amount)}
                                                </span>
                                                <div class="mix-card__bar">
                                                    <div
                                                        class="mix-card__fill"
                                                        style:width=format!("{}%", slice.percent)
                                                    ></div>
                                                </div>
                                                <span class="mix-card__amount">
                                                    {format!("{}% del total", slice.percent)}
                                                </span>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                            <aside class="panel panel--note">
                                <h2>"💡 Insight Fiscal"</h2>
                                <p>
                                    "El 42% de tus ventas son en efectivo. Asegúrate de \
                                     declarar correctamente estos ingresos para evitar \
                                     problemas con el SAT. Las ventas con tarjeta quedan \
                                     automáticamente registradas."
                                </p>
                            </aside>
                        </div>
                    }
                    .into_any(),
                }}
            </section>
        </div>
    }
}
