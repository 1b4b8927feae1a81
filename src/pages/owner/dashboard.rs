//! Executive dashboard: headline KPIs, hourly trend, and the alert feed.

use leptos::prelude::*;

use crate::util::money::format_money;

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// Reporting window for the KPI filters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DateRange {
    #[default]
    Today,
    Yesterday,
    Week,
    Month,
    Custom,
}

impl DateRange {
    pub const ALL: [DateRange; 5] = [
        DateRange::Today,
        DateRange::Yesterday,
        DateRange::Week,
        DateRange::Month,
        DateRange::Custom,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DateRange::Today => "Hoy",
            DateRange::Yesterday => "Ayer",
            DateRange::Week => "Esta Semana",
            DateRange::Month => "Este Mes",
            DateRange::Custom => "Rango Personalizado",
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            DateRange::Today => "today",
            DateRange::Yesterday => "yesterday",
            DateRange::Week => "week",
            DateRange::Month => "month",
            DateRange::Custom => "custom",
        }
    }

    pub fn from_value(value: &str) -> DateRange {
        DateRange::ALL
            .into_iter()
            .find(|range| range.value() == value)
            .unwrap_or_default()
    }
}

/// Branch selector for the KPI filters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BranchFilter {
    #[default]
    All,
    North,
    Center,
    South,
    East,
}

impl BranchFilter {
    pub const ALL: [BranchFilter; 5] = [
        BranchFilter::All,
        BranchFilter::North,
        BranchFilter::Center,
        BranchFilter::South,
        BranchFilter::East,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BranchFilter::All => "Todas las Sucursales",
            BranchFilter::North => "Sucursal Norte",
            BranchFilter::Center => "Sucursal Centro",
            BranchFilter::South => "Sucursal Sur",
            BranchFilter::East => "Sucursal Este",
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            BranchFilter::All => "all",
            BranchFilter::North => "north",
            BranchFilter::Center => "center",
            BranchFilter::South => "south",
            BranchFilter::East => "east",
        }
    }

    pub fn from_value(value: &str) -> BranchFilter {
        BranchFilter::ALL
            .into_iter()
            .find(|branch| branch.value() == value)
            .unwrap_or_default()
    }
}

pub struct Kpi {
    pub label: &'static str,
    pub value: String,
    pub change: &'static str,
    pub up: bool,
}

fn demo_kpis() -> [Kpi; 4] {
    [
        Kpi {
            label: "Venta Bruta",
            value: format_money(48_250.0),
            change: "+12.5%",
            up: true,
        },
        Kpi {
            label: "Utilidad Neta",
            value: format_money(18_340.0),
            change: "+8.2%",
            up: true,
        },
        Kpi {
            label: "Ticket Promedio",
            value: format_money(1_245.5),
            change: "-3.1%",
            up: false,
        },
        Kpi {
            label: "Transacciones",
            value: "387".to_owned(),
            change: "+15.8%",
            up: true,
        },
    ]
}

/// Accumulated sales at each hour, today against yesterday.
pub struct HourPoint {
    pub hour: &'static str,
    pub today: f64,
    pub yesterday: f64,
}

fn hourly_trend() -> [HourPoint; 10] {
    let points = [
        ("9:00", 1_200.0, 980.0),
        ("10:00", 2_400.0, 2_100.0),
        ("11:00", 3_600.0, 3_200.0),
        ("12:00", 5_200.0, 4_800.0),
        ("13:00", 7_100.0, 6_500.0),
        ("14:00", 9_800.0, 8_900.0),
        ("15:00", 12_400.0, 11_200.0),
        ("16:00", 15_800.0, 14_100.0),
        ("17:00", 18_900.0, 17_300.0),
        ("18:00", 22_400.0, 20_500.0),
    ];
    points.map(|(hour, today, yesterday)| HourPoint {
        hour,
        today,
        yesterday,
    })
}

/// Highest value across both series, used to scale the chart columns.
fn trend_peak(points: &[HourPoint]) -> f64 {
    points
        .iter()
        .flat_map(|p| [p.today, p.yesterday])
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

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Critical,
    Warning,
    Info,
}

impl AlertKind {
    pub fn label(self) -> &'static str {
        match self {
            AlertKind::Critical => "Crítico",
            AlertKind::Warning => "Advertencia",
            AlertKind::Info => "Info",
        }
    }

    fn class(self) -> &'static str {
        match self {
            AlertKind::Critical => "alert alert--critical",
            AlertKind::Warning => "alert alert--warning",
            AlertKind::Info => "alert alert--info",
        }
    }

    fn badge_class(self) -> &'static str {
        match self {
            AlertKind::Critical => "badge badge--danger",
            AlertKind::Warning => "badge badge--warn",
            AlertKind::Info => "badge badge--info",
        }
    }
}

pub struct BusinessAlert {
    pub kind: AlertKind,
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub time: &'static str,
}

fn demo_alerts() -> [BusinessAlert; 3] {
    [
        BusinessAlert {
            kind: AlertKind::Critical,
            icon: "⚠️",
            title: "Faltante de caja en Sucursal Norte",
            description: "Diferencia de -$200.00 en corte de turno",
            time: "Hace 15 min",
        },
        BusinessAlert {
            kind: AlertKind::Warning,
            icon: "🛒",
            title: "Intento de cancelación de venta grande",
            description: "Venta de $5,200 - Sucursal Sur",
            time: "Hace 32 min",
        },
        BusinessAlert {
            kind: AlertKind::Info,
            icon: "🏬",
            title: "Stock crítico de Bota Avestruz",
            description: "Solo quedan 3 unidades en total",
            time: "Hace 1 hora",
        },
    ]
}

#[component]
pub fn DashboardScreen() -> impl IntoView {
    let range = RwSignal::new(DateRange::default());
    let branch = RwSignal::new(BranchFilter::default());
    let points = hourly_trend();
    let peak = trend_peak(&points);

    view! {
        <div class="dashboard">
            <header class="screen-header screen-header--split">
                <div>
                    <h1>"Dashboard Ejecutivo"</h1>
                    <p>"Termómetro del negocio en tiempo real"</p>
                </div>
                <div class="screen-header__filters">
                    <select
                        class="dialog__input"
                        on:change=move |ev| {
                            range.set(DateRange::from_value(&event_target_value(&ev)));
                        }
                        prop:value=move || range.get().value()
                    >
                        {DateRange::ALL
                            .into_iter()
                            .map(|r| view! { <option value=r.value()>{r.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                    <select
                        class="dialog__input"
                        on:change=move |ev| {
                            branch.set(BranchFilter::from_value(&event_target_value(&ev)));
                        }
                        prop:value=move || branch.get().value()
                    >
                        {BranchFilter::ALL
                            .into_iter()
                            .map(|b| view! { <option value=b.value()>{b.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
            </header>

            <div class="stat-grid">
                {demo_kpis()
                    .into_iter()
                    .map(|kpi| {
                        let trend_class = if kpi.up {
                            "stat__trend stat__trend--up"
                        } else {
                            "stat__trend stat__trend--down"
                        };
                        let arrow = if kpi.up { "↑" } else { "↓" };
                        view! {
                            <div class="stat">
                                <div class="stat__top">
                                    <span class="stat__label">{kpi.label}</span>
                                    <span class=trend_class>
                                        {format!("{arrow} {}", kpi.change)}
                                    </span>
                                </div>
                                <span class="stat__value">{kpi.value}</span>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <section class="panel">
                <h2>"Tendencia de Ventas"</h2>
                <p class="panel__hint">"Comparación hora por hora: Hoy vs. Ayer"</p>
                <div class="chart__legend">
                    <span class="chart__key chart__key--today">"Hoy"</span>
                    <span class="chart__key chart__key--yesterday">"Ayer"</span>
                </div>
                <div class="chart">
                    {points
                        .into_iter()
                        .map(|point| {
                            let today = bar_height(point.today, peak);
                            let yesterday = bar_height(point.yesterday, peak);
                            view! {
                                <div class="chart__group">
                                    <div class="chart__bars">
                                        <div
                                            class="chart__bar chart__bar--today"
                                            style:height=today
                                            title=format_money(point.today)
                                        ></div>
                                        <div
                                            class="chart__bar chart__bar--yesterday"
                                            style:height=yesterday
                                            title=format_money(point.yesterday)
                                        ></div>
                                    </div>
                                    <span class="chart__hour">{point.hour}</span>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="panel">
                <div class="panel__header">
                    <div>
                        <h2>"Centro de Notificaciones"</h2>
                        <p class="panel__hint">"Alertas de seguridad y eventos importantes"</p>
                    </div>
                    <button class="btn btn--ghost btn--small">"Ver Todas"</button>
                </div>
                <div class="alert-list">
                    {demo_alerts()
                        .into_iter()
                        .map(|alert| {
                            view! {
                                <div class=alert.kind.class()>
                                    <span class="alert__icon">{alert.icon}</span>
                                    <div class="alert__body">
                                        <div class="alert__top">
                                            <span class="alert__title">{alert.title}</span>
                                            <span class=alert.kind.badge_class()>
                                                {alert.kind.label()}
                                            </span>
                                        </div>
                                        <p class="alert__description">{alert.description}</p>
                                        <span class="alert__time">{alert.time}</span>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>
        </div>
    }
}
