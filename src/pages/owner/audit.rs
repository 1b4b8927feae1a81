//! Audit module: blind-count results and drawer withdrawals per branch.
//!
//! DESIGN
//! ======
//! A cut's verdict is derived from the declared-vs-expected difference
//! instead of being stored alongside it, so the table can never show a
//! badge that disagrees with its own numbers.

use leptos::prelude::*;

use crate::util::money::format_money;

#[cfg(test)]
#[path = "audit_test.rs"]
mod audit_test;

/// Verdict for a single register cut.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CutLevel {
    Perfect,
    Minor,
    Critical,
}

impl CutLevel {
    pub fn label(self) -> &'static str {
        match self {
            CutLevel::Perfect => "Perfecto",
            CutLevel::Minor => "Diferencia Menor",
            CutLevel::Critical => "Faltante Grave",
        }
    }

    fn badge_class(self) -> &'static str {
        match self {
            CutLevel::Perfect => "badge badge--ok",
            CutLevel::Minor => "badge badge--warn",
            CutLevel::Critical => "badge badge--danger",
        }
    }

    fn cell_class(self) -> &'static str {
        match self {
            CutLevel::Perfect => "table__cell--ok",
            CutLevel::Minor => "table__cell--warn",
            CutLevel::Critical => "table__cell--danger",
        }
    }
}

/// Shortfalls beyond this amount stop counting as honest miscounts.
const CRITICAL_SHORTFALL: f64 = -50.0;

pub fn cut_level(difference: f64) -> CutLevel {
    if difference.abs() < f64::EPSILON {
        CutLevel::Perfect
    } else if difference > CRITICAL_SHORTFALL {
        CutLevel::Minor
    } else {
        CutLevel::Critical
    }
}

#[derive(Clone)]
pub struct CashCut {
    pub date: &'static str,
    pub time: &'static str,
    pub branch: &'static str,
    pub employee: &'static str,
    pub expected: f64,
    pub declared: f64,
}

impl CashCut {
    pub fn difference(&self) -> f64 {
        self.declared - self.expected
    }

    pub fn level(&self) -> CutLevel {
        cut_level(self.difference())
    }
}

fn demo_cuts() -> Vec<CashCut> {
    vec![
        CashCut {
            date: "2025-12-11",
            time: "22:30",
            branch: "Sucursal Norte",
            employee: "María García",
            expected: 5_000.0,
            declared: 5_000.0,
        },
        CashCut {
            date: "2025-12-11",
            time: "21:45",
            branch: "Sucursal Centro",
            employee: "Ana López",
            expected: 6_500.0,
            declared: 6_480.0,
        },
        CashCut {
            date: "2025-12-11",
            time: "20:15",
            branch: "Sucursal Sur",
            employee: "Carlos Rodríguez",
            expected: 4_200.0,
            declared: 4_000.0,
        },
        CashCut {
            date: "2025-12-10",
            time: "22:00",
            branch: "Sucursal Este",
            employee: "Laura Martínez",
            expected: 7_800.0,
            declared: 7_850.0,
        },
        CashCut {
            date: "2025-12-10",
            time: "21:30",
            branch: "Sucursal Norte",
            employee: "Juan Pérez",
            expected: 5_500.0,
            declared: 5_500.0,
        },
    ]
}

#[derive(Clone)]
pub struct Expense {
    pub date: &'static str,
    pub time: &'static str,
    pub branch: &'static str,
    pub employee: &'static str,
    pub amount: f64,
    pub reason: &'static str,
    pub has_evidence: bool,
}

fn demo_expenses() -> Vec<Expense> {
    vec![
        Expense {
            date: "2025-12-11",
            time: "14:30",
            branch: "Sucursal Norte",
            employee: "María García",
            amount: 150.0,
            reason: "Compra de material de limpieza",
            has_evidence: true,
        },
        Expense {
            date: "2025-12-11",
            time: "12:15",
            branch: "Sucursal Centro",
            employee: "Ana López",
            amount: 85.0,
            reason: "Pago a proveedor de agua",
            has_evidence: true,
        },
        Expense {
            date: "2025-12-11",
            time: "10:45",
            branch: "Sucursal Sur",
            employee: "Carlos Rodríguez",
            amount: 200.0,
            reason: "Compra urgente para la tienda",
            has_evidence: false,
        },
        Expense {
            date: "2025-12-10",
            time: "16:20",
            branch: "Sucursal Este",
            employee: "Laura Martínez",
            amount: 320.0,
            reason: "Reparación de equipo",
            has_evidence: true,
        },
    ]
}

fn total_discrepancy(cuts: &[CashCut]) -> f64 {
    cuts.iter().map(CashCut::difference).sum()
}

fn total_expenses(expenses: &[Expense]) -> f64 {
    expenses.iter().map(|e| e.amount).sum()
}

fn without_evidence(expenses: &[Expense]) -> usize {
    expenses.iter().filter(|e| !e.has_evidence).count()
}

fn perfect_count(cuts: &[CashCut]) -> usize {
    cuts.iter().filter(|c| c.level() == CutLevel::Perfect).count()
}

/// Formats a cut difference with an explicit sign, `+$0.00` included.
fn signed_difference(difference: f64) -> String {
    if difference >= 0.0 {
        format!("+{}", format_money(difference))
    } else {
        format_money(difference)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum AuditTab {
    #[default]
    Cuts,
    Expenses,
}

#[component]
pub fn AuditScreen() -> impl IntoView {
    let tab = RwSignal::new(AuditTab::default());
    let selected_cut: RwSignal<Option<CashCut>> = RwSignal::new(None);
    let selected_expense: RwSignal<Option<Expense>> = RwSignal::new(None);

    let cuts = demo_cuts();
    let expenses = demo_expenses();
    let perfect = perfect_count(&cuts);
    let discrepancy = total_discrepancy(&cuts);
    let spent = total_expenses(&expenses);
    let missing = without_evidence(&expenses);

    let tab_class = move |own: AuditTab| {
        if tab.get() == own { "tab tab--active" } else { "tab" }
    };

    view! {
        <div class="audit">
            <header class="screen-header">
                <h1>"🛡️ Auditoría y Cortes"</h1>
                <p>"Detección de inconsistencias y verificación de gastos"</p>
            </header>

            <div class="stat-grid">
                <div class="stat">
                    <span class="stat__label">"Cortes Perfectos"</span>
                    <span class="stat__value stat__value--ok">{perfect.to_string()}</span>
                </div>
                <div class="stat">
                    <span class="stat__label">"Discrepancia Total"</span>
                    <span class="stat__value stat__value--danger">
                        {format_money(discrepancy.abs())}
                    </span>
                </div>
                <div class="stat">
                    <span class="stat__label">"Gastos Registrados"</span>
                    <span class="stat__value">{format_money(spent)}</span>
                </div>
                <div class="stat stat--alert">
                    <span class="stat__label">"Sin Evidencia"</span>
                    <span class="stat__value stat__value--danger">{missing.to_string()}</span>
                </div>
            </div>

            <section class="panel">
                <div class="tabs">
                    <button class=move || tab_class(AuditTab::Cuts)
                        on:click=move |_| tab.set(AuditTab::Cuts)>
                        "Historial de Cortes"
                    </button>
                    <button class=move || tab_class(AuditTab::Expenses)
                        on:click=move |_| tab.set(AuditTab::Expenses)>
                        "Gastos y Retiros"
                    </button>
                </div>

                {move || match tab.get() {
                    AuditTab::Cuts => view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Fecha/Hora"</th>
                                    <th>"Sucursal"</th>
                                    <th>"Empleado"</th>
                                    <th>"Esperado"</th>
                                    <th>"Declarado"</th>
                                    <th>"Diferencia"</th>
                                    <th>"Estado"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {demo_cuts()
                                    .into_iter()
                                    .map(|cut| {
                                        let level = cut.level();
                                        let detail = cut.clone();
                                        view! {
                                            <tr>
                                                <td>
                                                    {format!("{} {}", cut.date, cut.time)}
                                                </td>
                                                <td>{cut.branch}</td>
                                                <td>{cut.employee}</td>
                                                <td>{format_money(cut.expected)}</td>
                                                <td>{format_money(cut.declared)}</td>
                                                <td class=level.cell_class()>
                                                    {signed_difference(cut.difference())}
                                                </td>
                                                <td>
                                                    <span class=level.badge_class()>
                                                        {level.label()}
                                                    </span>
                                                </td>
                                                <td>
                                                    <button
                                                        class="btn btn--ghost btn--small"
                                                        on:click=move |_| {
                                                            selected_cut.set(Some(detail.clone()));
                                                        }
                                                    >
                                                        "👁"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                    .into_any(),
                    AuditTab::Expenses => view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Fecha/Hora"</th>
                                    <th>"Sucursal"</th>
                                    <th>"Empleado"</th>
                                    <th>"Monto"</th>
                                    <th>"Motivo"</th>
                                    <th>"Evidencia"</th>
                                    <th></th>
                                </tr>
                            </thead>
                            <tbody>
                                {demo_expenses()
                                    .into_iter()
                                    .map(|expense| {
                                        let row_class = if expense.has_evidence {
                                            ""
                                        } else {
                                            "table__row--flagged"
                                        };
                                        let (badge_class, badge_label) = if expense.has_evidence {
                                            ("badge badge--ok", "Adjunto")
                                        } else {
                                            ("badge badge--danger", "Sin foto")
                                        };
                                        let detail = expense.clone();
                                        view! {
                                            <tr class=row_class>
                                                <td>
                                                    {format!("{} {}", expense.date, expense.time)}
                                                </td>
                                                <td>{expense.branch}</td>
                                                <td>{expense.employee}</td>
                                                <td>{format_money(expense.amount)}</td>
                                                <td>{expense.reason}</td>
                                                <td>
                                                    <span class=badge_class>{badge_label}</span>
                                                </td>
                                                <td>
                                                    <button
                                                        class="btn btn--ghost btn--small"
                                                        on:click=move |_| {
                                                            selected_expense
                                                                .set(Some(detail.clone()));
                                                        }
                                                    >
                                                        "👁"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                    .into_any(),
                }}
            </section>

            {move || {
                selected_cut.get().map(|cut| {
                    view! {
                        <CutDetailDialog
                            cut=cut
                            on_close=Callback::new(move |()| selected_cut.set(None))
                        />
                    }
                })
            }}
            {move || {
                selected_expense.get().map(|expense| {
                    view! {
                        <ExpenseDetailDialog
                            expense=expense
                            on_close=Callback::new(move |()| selected_expense.set(None))
                        />
                    }
                })
            }}
        </div>
    }
}

#[component]
fn CutDetailDialog(
    cut: CashCut,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let level = cut.level();

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h2>"Detalle del Corte de Caja"</h2>
                <div class="dialog__facts">
                    <div>
                        <span class="dialog__label">"Fecha"</span>
                        <p>{format!("{} {}", cut.date, cut.time)}</p>
                    </div>
                    <div>
                        <span class="dialog__label">"Sucursal"</span>
                        <p>{cut.branch}</p>
                    </div>
                    <div>
                        <span class="dialog__label">"Empleado"</span>
                        <p>{cut.employee}</p>
                    </div>
                    <div>
                        <span class="dialog__label">"Estado"</span>
                        <p>
                            <span class=level.badge_class()>{level.label()}</span>
                        </p>
                    </div>
                </div>
                <div class="totals">
                    <div class="totals__row">
                        <span>"Monto Esperado (Sistema):"</span>
                        <span>{format_money(cut.expected)}</span>
                    </div>
                    <div class="totals__row">
                        <span>"Declarado por Cajero:"</span>
                        <span>{format_money(cut.declared)}</span>
                    </div>
                    <div class="totals__row totals__row--total">
                        <span>"Diferencia:"</span>
                        <span class=level.cell_class()>
                            {signed_difference(cut.difference())}
                        </span>
                    </div>
                </div>
                <div class="dialog__actions">
                    <button class="btn btn--ghost" on:click=move |_| on_close.run(())>
                        "Cerrar"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ExpenseDetailDialog(
    expense: Expense,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h2>"Detalle del Gasto"</h2>
                <div class="dialog__facts">
                    <div>
                        <span class="dialog__label">"Fecha"</span>
                        <p>{format!("{} {}", expense.date, expense.time)}</p>
                    </div>
                    <div>
                        <span class="dialog__label">"Sucursal"</span>
                        <p>{expense.branch}</p>
                    </div>
                    <div>
                        <span class="dialog__label">"Empleado"</span>
                        <p>{expense.employee}</p>
                    </div>
                    <div>
                        <span class="dialog__label">"Monto"</span>
                        <p class="dialog__amount">{format_money(expense.amount)}</p>
                    </div>
                </div>
                <div>
                    <span class="dialog__label">"Motivo"</span>
                    <p class="dialog__note">{expense.reason}</p>
                </div>
                <div>
                    <span class="dialog__label">"Evidencia"</span>
                    {if expense.has_evidence {
                        view! {
                            <div class="evidence evidence--attached">
                                <span class="evidence__icon">"📷"</span>
                                <p>"Comprobante adjunto"</p>
                            </div>
                        }
                        .into_any()
                    } else {
                        view! {
                            <div class="evidence evidence--missing">
                                <p>"⚠️ Este gasto NO tiene evidencia adjunta"</p>
                                <p class="evidence__hint">
                                    "Contacta al empleado para obtener el comprobante"
                                </p>
                            </div>
                        }
                        .into_any()
                    }}
                </div>
                <div class="dialog__actions">
                    <button class="btn btn--ghost" on:click=move |_| on_close.run(())>
                        "Cerrar"
                    </button>
                </div>
            </div>
        </div>
    }
}
