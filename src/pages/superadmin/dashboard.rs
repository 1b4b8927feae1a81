//! Platform health dashboard: MRR growth, infrastructure gauges, and the
//! tenant activity feed.

use leptos::prelude::*;

use crate::util::money::format_money;

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KpiTone {
    Up,
    Alert,
    Muted,
}

impl KpiTone {
    fn class(self) -> &'static str {
        match self {
            KpiTone::Up => "stat__note stat__note--up",
            KpiTone::Alert => "stat__note stat__note--alert",
            KpiTone::Muted => "stat__note",
        }
    }
}

pub struct SaasKpi {
    pub label: &'static str,
    pub value: String,
    pub note: &'static str,
    pub tone: KpiTone,
}

fn demo_kpis() -> [SaasKpi; 4] {
    [
        SaasKpi {
            label: "MRR (Ingreso Mensual)",
            value: format_money(42_000.0),
            note: "+20% vs mes anterior",
            tone: KpiTone::Up,
        },
        SaasKpi {
            label: "Tenants Activos",
            value: "23".to_owned(),
            note: "8 nuevos este mes",
            tone: KpiTone::Up,
        },
        SaasKpi {
            label: "Tenants Morosos",
            value: "3".to_owned(),
            note: "Requieren atención",
            tone: KpiTone::Alert,
        },
        SaasKpi {
            label: "Total Sucursales",
            value: "67".to_owned(),
            note: "Puntos de venta operando",
            tone: KpiTone::Muted,
        },
    ]
}

/// Recurring revenue and signups for one month.
pub struct MrrPoint {
    pub month: &'static str,
    pub mrr: f64,
    pub new_tenants: u32,
}

pub fn mrr_series() -> [MrrPoint; 6] {
    let points = [
        ("Jun", 15_000.0, 3),
        ("Jul", 18_500.0, 5),
        ("Ago", 22_000.0, 4),
        ("Sep", 28_500.0, 7),
        ("Oct", 35_000.0, 6),
        ("Nov", 42_000.0, 8),
    ];
    points.map(|(month, mrr, new_tenants)| MrrPoint {
        month,
        mrr,
        new_tenants,
    })
}

fn mrr_peak(points: &[MrrPoint]) -> f64 {
    points.iter().map(|p| p.mrr).fold(0.0, f64::max)
}

fn signup_peak(points: &[MrrPoint]) -> f64 {
    points
        .iter()
        .map(|p| f64::from(p.new_tenants))
        .fold(0.0, f64::max)
}

/// CSS height for one chart column, as a percentage of the peak.
fn bar_height(value: f64, peak: f64) -> String {
    if peak <= 0.0 {
        "0%".to_owned()
    } else {
        format!("{:.0}%", value / peak * 100.0)
    }
}

/// Health bucket for one infrastructure gauge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServerLevel {
    Normal,
    Warning,
    Critical,
}

impl ServerLevel {
    fn fill_class(self) -> &'static str {
        match self {
            ServerLevel::Normal => "meter__fill meter__fill--ok",
            ServerLevel::Warning => "meter__fill meter__fill--warn",
            ServerLevel::Critical => "meter__fill meter__fill--critical",
        }
    }
}

pub fn server_level(percent: u32) -> ServerLevel {
    if percent >= 90 {
        ServerLevel::Critical
    } else if percent >= 75 {
        ServerLevel::Warning
    } else {
        ServerLevel::Normal
    }
}

pub struct ServerStat {
    pub label: &'static str,
    pub percent: u32,
}

fn server_stats() -> [ServerStat; 3] {
    [
        ServerStat {
            label: "CPU",
            percent: 45,
        },
        ServerStat {
            label: "RAM",
            percent: 62,
        },
        ServerStat {
            label: "Base de Datos",
            percent: 78,
        },
    ]
}

pub struct TenantActivity {
    pub tenant: &'static str,
    pub action: &'static str,
    pub amount: Option<f64>,
    pub time: &'static str,
}

fn recent_activity() -> [TenantActivity; 4] {
    [
        TenantActivity {
            tenant: "Boutique La Elegante",
            action: "Pago recibido",
            amount: Some(1_200.0),
            time: "Hace 2 horas",
        },
        TenantActivity {
            tenant: "Zapatería Premium",
            action: "Nueva sucursal creada",
            amount: None,
            time: "Hace 5 horas",
        },
        TenantActivity {
            tenant: "Moda Total",
            action: "Plan actualizado a Pro",
            amount: Some(2_500.0),
            time: "Hace 1 día",
        },
        TenantActivity {
            tenant: "Estilo Urbano",
            action: "Pago recibido",
            amount: Some(800.0),
            time: "Hace 1 día",
        },
    ]
}

#[component]
pub fn SaasDashboardScreen() -> impl IntoView {
    let points = mrr_series();
    let peak = mrr_peak(&points);
    let signups = signup_peak(&points);

    view! {
        <div class="dashboard">
            <header class="screen-header">
                <h1>"Dashboard Maestro SaaS"</h1>
                <p>"Monitor de salud de tu negocio de software"</p>
            </header>

            <div class="stat-grid">
                {demo_kpis()
                    .into_iter()
                    .map(|kpi| {
                        view! {
                            <div class="stat">
                                <span class="stat__label">{kpi.label}</span>
                                <span class="stat__value">{kpi.value}</span>
                                <span class=kpi.tone.class()>{kpi.note}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <section class="panel">
                <h2>"Crecimiento de MRR"</h2>
                <p class="panel__hint">"Evolución de ingresos recurrentes"</p>
                <div class="chart__legend">
                    <span class="chart__key chart__key--today">"MRR ($)"</span>
                    <span class="chart__key chart__key--yesterday">"Nuevos Clientes"</span>
                </div>
                <div class="chart">
                    {points
                        .into_iter()
                        .map(|point| {
                            let revenue = bar_height(point.mrr, peak);
                            let signup = bar_height(f64::from(point.new_tenants), signups);
                            view! {
                                <div class="chart__group">
                                    <div class="chart__bars">
                                        <div
                                            class="chart__bar chart__bar--today"
                                            style:height=revenue
                                            title=format_money(point.mrr)
                                        ></div>
                                        <div
                                            class="chart__bar chart__bar--yesterday"
                                            style:height=signup
                                            title=format!("{} nuevos", point.new_tenants)
                                        ></div>
                                    </div>
                                    <span class="chart__hour">{point.month}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <div class="panel-row">
                <section class="panel">
                    <h2>"Estado del Sistema"</h2>
                    <p class="panel__hint">"Monitoreo de infraestructura"</p>
                    <div class="meter-list">
                        {server_stats()
                            .into_iter()
                            .map(|stat| {
                                let level = server_level(stat.percent);
                                view! {
                                    <div class="meter">
                                        <div class="meter__top">
                                            <span class="meter__label">{stat.label}</span>
                                            <span class="meter__value">
                                                {format!("{}%", stat.percent)}
                                            </span>
                                        </div>
                                        <div class="meter__track">
                                            <div
                                                class=level.fill_class()
                                                style:width=format!("{}%", stat.percent)
                                            ></div>
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <div class="note note--ok">
                        <span class="note__title">"Sistema Operativo"</span>
                        <p>"Latencia promedio: 45ms • Uptime: 99.8%"</p>
                    </div>
                </section>

                <section class="panel">
                    <h2>"Actividad Reciente"</h2>
                    <p class="panel__hint">"Últimas acciones en la plataforma"</p>
                    <div class="activity-list">
                        {recent_activity()
                            .into_iter()
                            .map(|entry| {
                                view! {
                                    <div class="activity">
                                        <div class="activity__body">
                                            <span class="activity__tenant">{entry.tenant}</span>
                                            <span class="activity__action">{entry.action}</span>
                                        </div>
                                        <div class="activity__meta">
                                            {entry
                                                .amount
                                                .map(|amount| {
                                                    view! {
                                                        <span class="activity__amount">
                                                            {format_money(amount)}
                                                        </span>
                                                    }
                                                })}
                                            <span class="activity__time">{entry.time}</span>
                                        </div>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </section>
            </div>
        </div>
    }
}
