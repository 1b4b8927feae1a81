//! Subscription receivables: payment history, dunning, and manual capture.

use leptos::prelude::*;

use crate::util::money::{format_money, parse_amount};

#[cfg(test)]
#[path = "billing_test.rs"]
mod billing_test;

/// Tenant ids and names offered by the manual payment form.
pub const BILLING_TENANTS: [(&str, &str); 4] = [
    ("T001", "Boutique La Elegante"),
    ("T002", "Zapatería Premium"),
    ("T003", "Moda Total"),
    ("T004", "Estilo Urbano"),
];

pub fn billing_tenant(id: &str) -> Option<(&'static str, &'static str)> {
    BILLING_TENANTS.into_iter().find(|(tid, _)| *tid == id)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Pending,
    Overdue,
}

impl PaymentStatus {
    pub fn label(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Pagado",
            PaymentStatus::Pending => "Pendiente",
            PaymentStatus::Overdue => "Vencido",
        }
    }

    fn badge_class(self) -> &'static str {
        match self {
            PaymentStatus::Paid => "badge badge--ok",
            PaymentStatus::Pending => "badge badge--warn",
            PaymentStatus::Overdue => "badge badge--danger",
        }
    }
}

#[derive(Clone)]
pub struct Payment {
    pub id: String,
    pub tenant_id: &'static str,
    pub tenant_name: &'static str,
    pub amount: f64,
    pub period: String,
    pub status: PaymentStatus,
    pub paid_date: Option<&'static str>,
    pub due_date: &'static str,
    pub method: Option<&'static str>,
}

fn demo_payments() -> Vec<Payment> {
    vec![
        Payment {
            id: "P001".to_owned(),
            tenant_id: "T001",
            tenant_name: "Boutique La Elegante",
            amount: 1_999.0,
            period: "Diciembre 2024".to_owned(),
            status: PaymentStatus::Paid,
            paid_date: Some("2024-12-01"),
            due_date: "2024-12-05",
            method: Some("Tarjeta"),
        },
        Payment {
            id: "P002".to_owned(),
            tenant_id: "T002",
            tenant_name: "Zapatería Premium",
            amount: 799.0,
            period: "Diciembre 2024".to_owned(),
            status: PaymentStatus::Paid,
            paid_date: Some("2024-12-03"),
            due_date: "2024-12-05",
            method: Some("Transferencia"),
        },
        Payment {
            id: "P003".to_owned(),
            tenant_id: "T003",
            tenant_name: "Moda Total",
            amount: 4_999.0,
            period: "Noviembre 2024".to_owned(),
            status: PaymentStatus::Overdue,
            paid_date: None,
            due_date: "2024-11-28",
            method: None,
        },
        Payment {
            id: "P004".to_owned(),
            tenant_id: "T004",
            tenant_name: "Estilo Urbano",
            amount: 1_999.0,
            period: "Diciembre 2024".to_owned(),
            status: PaymentStatus::Pending,
            paid_date: None,
            due_date: "2024-12-15",
            method: None,
        },
    ]
}

pub fn total_by_status(payments: &[Payment], status: PaymentStatus) -> f64 {
    payments
        .iter()
        .filter(|p| p.status == status)
        .map(|p| p.amount)
        .sum()
}

/// Sequential id for a manually captured payment.
pub fn next_payment_id(count: usize) -> String {
    format!("P{:03}", count + 1)
}

/// Maps the method dropdown value to the label stored on the payment row.
pub fn payment_method_label(value: &str) -> &'static str {
    match value {
        "transfer" => "Transferencia",
        "cash" => "Efectivo",
        "check" => "Cheque",
        _ => "Otro",
    }
}

pub fn can_register_payment(tenant: &str, amount: &str) -> bool {
    !tenant.trim().is_empty() && parse_amount(amount).is_ok()
}

/// Class and text for a table cell whose value may be absent.
pub fn dash_cell(value: Option<&'static str>) -> (&'static str, &'static str) {
    match value {
        Some(text) => ("", text),
        None => ("table__cell--muted", "-"),
    }
}

pub struct UpcomingPayment {
    pub tenant: &'static str,
    pub amount: f64,
    pub days_left: u32,
}

fn upcoming_payments() -> [UpcomingPayment; 3] {
    [
        UpcomingPayment {
            tenant: "Boutique Norte",
            amount: 1_999.0,
            days_left: 2,
        },
        UpcomingPayment {
            tenant: "Zapatería Central",
            amount: 799.0,
            days_left: 3,
        },
        UpcomingPayment {
            tenant: "Moda Express",
            amount: 4_999.0,
            days_left: 5,
        },
    ]
}

#[component]
pub fn BillingScreen() -> impl IntoView {
    let payments = RwSignal::new(demo_payments());
    let show_manual = RwSignal::new(false);

    let paid = Memo::new(move |_| {
        payments.with(|list| total_by_status(list, PaymentStatus::Paid))
    });
    let pending = Memo::new(move |_| {
        payments.with(|list| total_by_status(list, PaymentStatus::Pending))
    });
    let overdue = Memo::new(move |_| {
        payments.with(|list| total_by_status(list, PaymentStatus::Overdue))
    });

    view! {
        <div class="billing">
            <header class="screen-header screen-header--split">
                <div>
                    <h1>"Facturación del Software"</h1>
                    <p>"Cuentas por cobrar de suscripciones"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| show_manual.set(true)>
                    "+ Registrar Pago Manual"
                </button>
            </header>

            <div class="stat-grid stat-grid--three">
                <div class="stat stat--ok">
                    <span class="stat__label">"Pagos Recibidos"</span>
                    <span class="stat__value">{move || format_money(paid.get())}</span>
                    <span class="stat__hint">"Este mes"</span>
                </div>
                <div class="stat stat--warn">
                    <span class="stat__label">"Pagos Pendientes"</span>
                    <span class="stat__value">{move || format_money(pending.get())}</span>
                    <span class="stat__hint">"Por cobrar"</span>
                </div>
                <div class="stat stat--danger">
                    <span class="stat__label">"Pagos Vencidos"</span>
                    <span class="stat__value">{move || format_money(overdue.get())}</span>
                    <span class="stat__hint">"Requieren acción"</span>
                </div>
            </div>

            <section class="panel">
                <h2>"Vencimientos Próximos (5 días)"</h2>
                <p class="panel__hint">
                    "Clientes que deben pagar pronto - para enviar recordatorios"
                </p>
                <div class="due-list">
                    {upcoming_payments()
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <div class="due-card">
                                    <div>
                                        <h4>{entry.tenant}</h4>
                                        <p class="due-card__days">
                                            {format!("Vence en {} días", entry.days_left)}
                                        </p>
                                    </div>
                                    <div class="due-card__side">
                                        <span class="due-card__amount">
                                            {format_money(entry.amount)}
                                        </span>
                                        <button
                                            class="btn btn--ghost btn--small"
                                            on:click=move |_| {
                                                #[cfg(feature = "hydrate")]
                                                log::info!(
                                                    "recordatorio enviado a {}",
                                                    entry.tenant
                                                );
                                            }
                                        >
                                            "Enviar Recordatorio"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <section class="panel">
                <h2>"Historial de Pagos"</h2>
                <p class="panel__hint">"Registro completo de mensualidades"</p>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Cliente"</th>
                            <th>"Periodo"</th>
                            <th>"Monto"</th>
                            <th>"Vencimiento"</th>
                            <th>"Fecha de Pago"</th>
                            <th>"Método"</th>
                            <th>"Estado"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            payments
                                .get()
                                .into_iter()
                                .map(|payment| {
                                    let (paid_class, paid_text) = dash_cell(payment.paid_date);
                                    let (method_class, method_text) = dash_cell(payment.method);
                                    view! {
                                        <tr>
                                            <td>{payment.id.clone()}</td>
                                            <td>{payment.tenant_name}</td>
                                            <td>{payment.period.clone()}</td>
                                            <td>{format_money(payment.amount)}</td>
                                            <td>{payment.due_date}</td>
                                            <td class=paid_class>{paid_text}</td>
                                            <td class=method_class>{method_text}</td>
                                            <td>
                                                <span class=payment.status.badge_class()>
                                                    {payment.status.label()}
                                                </span>
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
                <h2>"Reactivación Automática"</h2>
                <p>
                    "Al registrar un pago manual, el sistema reactiva automáticamente \
                     el servicio del cliente suspendido. No es necesario hacer un \
                     segundo paso."
                </p>
            </aside>

            <Show when=move || show_manual.get()>
                <ManualPaymentDialog
                    payments=payments
                    on_close=Callback::new(move |()| show_manual.set(false))
                />
            </Show>
        </div>
    }
}

#[component]
fn ManualPaymentDialog(payments: RwSignal<Vec<Payment>>, on_close: Callback<()>) -> impl IntoView {
    let tenant = RwSignal::new(String::new());
    let amount = RwSignal::new(String::new());
    let method = RwSignal::new("transfer".to_owned());
    let period = RwSignal::new(String::new());

    let register = move |_| {
        let Ok(paid_amount) = parse_amount(&amount.get()) else {
            return;
        };
        let Some((tenant_id, tenant_name)) = billing_tenant(&tenant.get()) else {
            return;
        };
        let raw_period = period.get().trim().to_owned();
        let paid_period = if raw_period.is_empty() {
            "Diciembre 2024".to_owned()
        } else {
            raw_period
        };
        let payment_id = payments.with_untracked(|list| next_payment_id(list.len()));
        #[cfg(feature = "hydrate")]
        log::info!("pago registrado: {payment_id} de {tenant_id} (servicio reactivado)");
        payments.update(|list| {
            list.push(Payment {
                id: payment_id,
                tenant_id,
                tenant_name,
                amount: paid_amount,
                period: paid_period,
                status: PaymentStatus::Paid,
                paid_date: Some("2024-12-12"),
                due_date: "2024-12-12",
                method: Some(payment_method_label(&method.get())),
            });
        });
        on_close.run(());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h2>"Registro Manual de Pago"</h2>
                <p class="dialog__hint">"Para pagos en efectivo o transferencia directa"</p>
                <label class="dialog__field">
                    <span class="dialog__label">"Cliente"</span>
                    <select
                        class="dialog__input"
                        on:change=move |ev| tenant.set(event_target_value(&ev))
                        prop:value=move || tenant.get()
                    >
                        <option value="">"Seleccionar cliente..."</option>
                        {BILLING_TENANTS
                            .into_iter()
                            .map(|(id, name)| view! { <option value=id>{name}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__field">
                    <span class="dialog__label">"Monto Pagado ($)"</span>
                    <input
                        class="dialog__input"
                        type="number"
                        placeholder="1999.00"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__field">
                    <span class="dialog__label">"Método de Pago"</span>
                    <select
                        class="dialog__input"
                        on:change=move |ev| method.set(event_target_value(&ev))
                        prop:value=move || method.get()
                    >
                        <option value="transfer">"Transferencia Bancaria"</option>
                        <option value="cash">"Efectivo"</option>
                        <option value="check">"Cheque"</option>
                        <option value="other">"Otro"</option>
                    </select>
                </label>
                <label class="dialog__field">
                    <span class="dialog__label">"Periodo"</span>
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Ej: Diciembre 2024"
                        prop:value=move || period.get()
                        on:input=move |ev| period.set(event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button
                        class="btn btn--primary"
                        disabled=move || !can_register_payment(&tenant.get(), &amount.get())
                        on:click=register
                    >
                        "Registrar Pago"
                    </button>
                    <button class="btn btn--ghost" on:click=move |_| on_close.run(())>
                        "Cancelar"
                    </button>
                </div>
            </div>
        </div>
    }
}
