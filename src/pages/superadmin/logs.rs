//! Platform-wide audit trail: every sensitive action any tenant user took,
//! filterable and exportable.

use leptos::prelude::*;
use serde::Serialize;

use crate::util::search::any_field_matches;

use super::billing::BILLING_TENANTS;

#[cfg(test)]
#[path = "logs_test.rs"]
mod logs_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    pub const ALL: [Severity; 3] = [Severity::Info, Severity::Warning, Severity::Critical];

    pub fn label(self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Advertencia",
            Severity::Critical => "Crítico",
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Critical => "critical",
        }
    }

    /// Parses the filter dropdown; "all" and anything unknown mean no filter.
    pub fn from_value(value: &str) -> Option<Severity> {
        Severity::ALL.into_iter().find(|s| s.value() == value)
    }

    fn badge_class(self) -> &'static str {
        match self {
            Severity::Info => "badge badge--info",
            Severity::Warning => "badge badge--warn",
            Severity::Critical => "badge badge--danger",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub id: &'static str,
    pub timestamp: &'static str,
    pub tenant_id: &'static str,
    pub tenant_name: &'static str,
    pub user_id: &'static str,
    pub user_name: &'static str,
    pub action: &'static str,
    pub details: &'static str,
    pub ip: &'static str,
    pub severity: Severity,
}

fn demo_logs() -> [LogEntry; 6] {
    [
        LogEntry {
            id: "L001",
            timestamp: "2024-12-12 15:30:45",
            tenant_id: "T003",
            tenant_name: "Moda Total",
            user_id: "U005",
            user_name: "Juan Pérez",
            action: "DELETE_BRANCH",
            details: "Eliminó la sucursal 'Sucursal Norte'",
            ip: "192.168.1.45",
            severity: Severity::Critical,
        },
        LogEntry {
            id: "L002",
            timestamp: "2024-12-12 14:22:13",
            tenant_id: "T001",
            tenant_name: "Boutique La Elegante",
            user_id: "U002",
            user_name: "María González",
            action: "CREATE_USER",
            details: "Creó nuevo usuario 'Carlos Vendedor'",
            ip: "192.168.1.120",
            severity: Severity::Info,
        },
        LogEntry {
            id: "L003",
            timestamp: "2024-12-12 13:15:30",
            tenant_id: "T002",
            tenant_name: "Zapatería Premium",
            user_id: "U008",
            user_name: "Ana Torres",
            action: "INVENTORY_ADJUSTMENT",
            details: "Ajustó inventario: -50 unidades sin motivo",
            ip: "192.168.1.88",
            severity: Severity::Warning,
        },
        LogEntry {
            id: "L004",
            timestamp: "2024-12-12 12:45:20",
            tenant_id: "T001",
            tenant_name: "Boutique La Elegante",
            user_id: "U002",
            user_name: "María González",
            action: "UPDATE_PRICES",
            details: "Actualizó precios de 25 productos",
            ip: "192.168.1.120",
            severity: Severity::Info,
        },
        LogEntry {
            id: "L005",
            timestamp: "2024-12-12 11:30:15",
            tenant_id: "T004",
            tenant_name: "Estilo Urbano",
            user_id: "U012",
            user_name: "Luis Ramírez",
            action: "FAILED_LOGIN",
            details: "Intentos de login fallidos: 5 veces",
            ip: "203.45.67.89",
            severity: Severity::Warning,
        },
        LogEntry {
            id: "L006",
            timestamp: "2024-12-12 10:15:08",
            tenant_id: "T003",
            tenant_name: "Moda Total",
            user_id: "U005",
            user_name: "Juan Pérez",
            action: "DELETE_PRODUCT",
            details: "Eliminó producto 'Botas Premium' del catálogo",
            ip: "192.168.1.45",
            severity: Severity::Critical,
        },
    ]
}

/// Color bucket for the action column. Independent of the stored severity:
/// UPDATE_PRICES logs as Info but the action itself is flagged as risky.
pub fn action_severity(action: &str) -> Severity {
    const CRITICAL: [&str; 3] = ["DELETE_BRANCH", "DELETE_PRODUCT", "DELETE_USER"];
    const WARNING: [&str; 3] = ["INVENTORY_ADJUSTMENT", "FAILED_LOGIN", "UPDATE_PRICES"];
    if CRITICAL.contains(&action) {
        Severity::Critical
    } else if WARNING.contains(&action) {
        Severity::Warning
    } else {
        Severity::Info
    }
}

fn action_badge_class(action: &str) -> &'static str {
    match action_severity(action) {
        Severity::Critical => "badge badge--danger",
        Severity::Warning => "badge badge--warn",
        Severity::Info => "badge badge--muted",
    }
}

pub fn filter_logs(
    logs: &[LogEntry],
    query: &str,
    severity: Option<Severity>,
    tenant: Option<&str>,
) -> Vec<LogEntry> {
    logs.iter()
        .filter(|log| {
            any_field_matches(
                &[log.tenant_name, log.user_name, log.action, log.details],
                query,
            ) && severity.is_none_or(|wanted| log.severity == wanted)
                && tenant.is_none_or(|wanted| log.tenant_id == wanted)
        })
        .cloned()
        .collect()
}

pub fn count_by_severity(logs: &[LogEntry], severity: Severity) -> usize {
    logs.iter().filter(|log| log.severity == severity).count()
}

/// Pretty JSON of the filtered rows, as handed to the download.
pub fn build_export(logs: &[LogEntry]) -> String {
    serde_json::to_string_pretty(logs).unwrap_or_default()
}

#[component]
pub fn SystemLogsScreen() -> impl IntoView {
    let query = RwSignal::new(String::new());
    let severity_filter = RwSignal::new("all".to_owned());
    let tenant_filter = RwSignal::new("all".to_owned());
    let exporting = RwSignal::new(false);

    let filtered = Memo::new(move |_| {
        let severity = Severity::from_value(&severity_filter.get());
        let tenant_value = tenant_filter.get();
        let tenant = (tenant_value != "all").then_some(tenant_value);
        filter_logs(&demo_logs(), &query.get(), severity, tenant.as_deref())
    });

    let logs = demo_logs();
    let info_count = count_by_severity(&logs, Severity::Info);
    let warning_count = count_by_severity(&logs, Severity::Warning);
    let critical_count = count_by_severity(&logs, Severity::Critical);

    let export = move |_| {
        if exporting.get() {
            return;
        }
        exporting.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(800)).await;
            let payload = build_export(&filtered.get_untracked());
            log::info!("logs exportados: {} bytes", payload.len());
            exporting.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        exporting.set(false);
    };

    view! {
        <div class="logs">
            <header class="screen-header screen-header--split">
                <div>
                    <h1>"🛡️ Logs del Sistema"</h1>
                    <p>"Bitácora global de seguridad y auditoría"</p>
                </div>
                <button class="btn btn--ghost" disabled=move || exporting.get() on:click=export>
                    {move || if exporting.get() { "Exportando..." } else { "Exportar Logs" }}
                </button>
            </header>

            <section class="panel">
                <div class="filter-row">
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Buscar en logs..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                    <select
                        class="dialog__input"
                        on:change=move |ev| severity_filter.set(event_target_value(&ev))
                        prop:value=move || severity_filter.get()
                    >
                        <option value="all">"Todas las severidades"</option>
                        <option value="info">"Info"</option>
                        <option value="warning">"Advertencias"</option>
                        <option value="critical">"Críticos"</option>
                    </select>
                    <select
                        class="dialog__input"
                        on:change=move |ev| tenant_filter.set(event_target_value(&ev))
                        prop:value=move || tenant_filter.get()
                    >
                        <option value="all">"Todos los clientes"</option>
                        {BILLING_TENANTS
                            .into_iter()
                            .map(|(id, name)| view! { <option value=id>{name}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </div>
            </section>

            <div class="stat-grid stat-grid--three">
                <div class="stat stat--info">
                    <span class="stat__label">"Registros Info"</span>
                    <span class="stat__value">{info_count.to_string()}</span>
                </div>
                <div class="stat stat--warn">
                    <span class="stat__label">"Advertencias"</span>
                    <span class="stat__value">{warning_count.to_string()}</span>
                </div>
                <div class="stat stat--danger">
                    <span class="stat__label">"Eventos Críticos"</span>
                    <span class="stat__value">{critical_count.to_string()}</span>
                </div>
            </div>

            <section class="panel">
                <h2>{move || format!("Bitácora de Eventos ({})", filtered.get().len())}</h2>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Timestamp"</th>
                            <th>"Severidad"</th>
                            <th>"Cliente"</th>
                            <th>"Usuario"</th>
                            <th>"Acción"</th>
                            <th>"Detalles"</th>
                            <th>"IP"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            filtered
                                .get()
                                .into_iter()
                                .map(|log| {
                                    view! {
                                        <tr>
                                            <td class="table__cell--muted">{log.timestamp}</td>
                                            <td>
                                                <span class=log.severity.badge_class()>
                                                    {log.severity.label()}
                                                </span>
                                            </td>
                                            <td>
                                                <div class="table__stack">
                                                    <span>{log.tenant_name}</span>
                                                    <span class="table__cell--muted">
                                                        {log.tenant_id}
                                                    </span>
                                                </div>
                                            </td>
                                            <td>
                                                <div class="table__stack">
                                                    <span>{log.user_name}</span>
                                                    <span class="table__cell--muted">
                                                        {log.user_id}
                                                    </span>
                                                </div>
                                            </td>
                                            <td>
                                                <span class=action_badge_class(log.action)>
                                                    {log.action}
                                                </span>
                                            </td>
                                            <td>{log.details}</td>
                                            <td class="table__cell--muted">{log.ip}</td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </section>

            <aside class="panel panel--note">
                <h2>"Defensa Legal y Auditoría"</h2>
                <p>
                    <strong>"Caso de uso: "</strong>
                    "Cliente dice \"El sistema borró todos mis datos de la Sucursal Norte\""
                </p>
                <p>
                    <strong>"Solución: "</strong>
                    "Buscas en los logs y encuentras que el usuario \"Juan Pérez\" \
                     eliminó la sucursal el 12/12/2024 a las 15:30 desde la IP \
                     192.168.1.45. Puedes demostrar que fue una acción humana, no un \
                     error del sistema."
                </p>
            </aside>
        </div>
    }
}
