//! Live branch monitor: connection status, drawers, and staff per store.

use leptos::prelude::*;

use crate::util::money::format_money;

#[cfg(test)]
#[path = "branches_test.rs"]
mod branches_test;

pub struct Branch {
    pub name: &'static str,
    pub online: bool,
    /// Theoretical drawer balance reported by the register.
    pub cash_drawer: f64,
    pub last_activity: &'static str,
    pub staff: &'static [&'static str],
    pub today_sales: f64,
    pub transactions: u32,
}

fn demo_branches() -> [Branch; 4] {
    [
        Branch {
            name: "Sucursal Norte",
            online: true,
            cash_drawer: 3_600.0,
            last_activity: "Hace 2 min: Venta de Cartera",
            staff: &["María García", "Juan Pérez"],
            today_sales: 12_450.0,
            transactions: 87,
        },
        Branch {
            name: "Sucursal Centro",
            online: true,
            cash_drawer: 4_250.5,
            last_activity: "Hace 1 min: Venta de Botas",
            staff: &["Ana López"],
            today_sales: 18_920.0,
            transactions: 132,
        },
        Branch {
            name: "Sucursal Sur",
            online: false,
            cash_drawer: 2_890.0,
            last_activity: "Hace 18 min: Venta de Sombrero",
            staff: &["Carlos Rodríguez"],
            today_sales: 9_340.0,
            transactions: 65,
        },
        Branch {
            name: "Sucursal Este",
            online: true,
            cash_drawer: 5_120.0,
            last_activity: "Hace 30 seg: Venta de Cinturón",
            staff: &["Laura Martínez", "Pedro Santos"],
            today_sales: 15_780.0,
            transactions: 98,
        },
    ]
}

fn network_sales(branches: &[Branch]) -> f64 {
    branches.iter().map(|b| b.today_sales).sum()
}

fn network_transactions(branches: &[Branch]) -> u32 {
    branches.iter().map(|b| b.transactions).sum()
}

fn online_count(branches: &[Branch]) -> usize {
    branches.iter().filter(|b| b.online).count()
}

fn active_staff_count(branches: &[Branch]) -> usize {
    branches.iter().map(|b| b.staff.len()).sum()
}

#[component]
pub fn BranchesScreen() -> impl IntoView {
    let branches = demo_branches();
    let online = online_count(&branches);
    let sales = network_sales(&branches);
    let transactions = network_transactions(&branches);
    let staff = active_staff_count(&branches);

    view! {
        <div class="branches">
            <header class="screen-header">
                <h1>"🏬 Monitor de Sucursales"</h1>
                <p>"Vista en vivo de todas las tiendas"</p>
            </header>

            <div class="stat-grid">
                <div class="stat">
                    <span class="stat__label">"Sucursales Activas"</span>
                    <span class="stat__value">{format!("{online}/{}", branches.len())}</span>
                </div>
                <div class="stat">
                    <span class="stat__label">"Ventas Totales Hoy"</span>
                    <span class="stat__value">{format_money(sales)}</span>
                </div>
                <div class="stat">
                    <span class="stat__label">"Transacciones"</span>
                    <span class="stat__value">{transactions.to_string()}</span>
                </div>
                <div class="stat">
                    <span class="stat__label">"Personal Activo"</span>
                    <span class="stat__value">{staff.to_string()}</span>
                </div>
            </div>

            <div class="branches__grid">
                {branches
                    .into_iter()
                    .map(|branch| {
                        let card_class = if branch.online {
                            "branch-card"
                        } else {
                            "branch-card branch-card--offline"
                        };
                        let status_class = if branch.online {
                            "branch-card__status branch-card__status--online"
                        } else {
                            "branch-card__status branch-card__status--offline"
                        };
                        view! {
                            <article class=card_class>
                                <div class="branch-card__header">
                                    <div>
                                        <h2>{branch.name}</h2>
                                        <span class=status_class>
                                            {if branch.online { "En línea" } else { "Sin conexión" }}
                                        </span>
                                    </div>
                                    <span class=if branch.online {
                                        "badge badge--ok"
                                    } else {
                                        "badge badge--warn"
                                    }>
                                        {if branch.online { "Operando" } else { "Offline" }}
                                    </span>
                                </div>
                                <div class="branch-card__drawer">
                                    <span>"Caja Actual (Teórico)"</span>
                                    <span class="branch-card__drawer-amount">
                                        {format_money(branch.cash_drawer)}
                                    </span>
                                </div>
                                <div class="branch-card__stats">
                                    <div>
                                        <span class="branch-card__stat-label">"Ventas Hoy"</span>
                                        <span class="branch-card__sales">
                                            {format_money(branch.today_sales)}
                                        </span>
                                    </div>
                                    <div>
                                        <span class="branch-card__stat-label">"Transacciones"</span>
                                        <span>{branch.transactions.to_string()}</span>
                                    </div>
                                </div>
                                <div class="branch-card__activity">
                                    <span class="branch-card__stat-label">"Última Actividad"</span>
                                    <p>{branch.last_activity}</p>
                                </div>
                                <div class="branch-card__staff">
                                    <span class="branch-card__stat-label">"Personal Activo"</span>
                                    <div class="branch-card__staff-list">
                                        {branch
                                            .staff
                                            .iter()
                                            .map(|name| {
                                                view! { <span class="chip">{*name}</span> }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                </div>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <aside class="panel panel--note">
                <h2>"Monitoreo en Tiempo Real"</h2>
                <p>
                    "Esta vista se actualiza automáticamente cada 30 segundos. Las \
                     sucursales sin conexión continúan operando en modo offline y \
                     sincronizarán sus datos cuando se restablezca la conexión a Internet."
                </p>
            </aside>
        </div>
    }
}
