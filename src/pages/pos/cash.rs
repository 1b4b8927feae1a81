//! Cash-movement screen: withdrawals and the blind closing count.
//!
//! SYSTEM CONTEXT
//! ==============
//! The close-shift dialog here drives the shift machine's only backward
//! transition; confirming it drops the whole register back onto the
//! opening form.

#[cfg(test)]
#[path = "cash_test.rs"]
mod cash_test;

use leptos::prelude::*;

use crate::state::pos::PosState;
use crate::util::money::{format_money, parse_amount};

/// Coin denominations counted in the closing dialog, in pesos.
pub const COINS: [u32; 4] = [1, 2, 5, 10];
/// Bill denominations counted in the closing dialog, in pesos.
pub const BILLS: [u32; 5] = [20, 50, 100, 200, 500];

/// Fixed demo figures for the running shift.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShiftSummary {
    pub opening: f64,
    pub cash_sales: f64,
    pub withdrawals: f64,
}

impl ShiftSummary {
    pub fn expected_in_drawer(&self) -> f64 {
        self.opening + self.cash_sales - self.withdrawals
    }
}

pub fn demo_shift_summary() -> ShiftSummary {
    ShiftSummary { opening: 500.0, cash_sales: 3250.0, withdrawals: 150.0 }
}

/// Parse denomination count inputs, treating blanks and garbage as zero.
pub fn parse_counts(raw: &[String]) -> Vec<u32> {
    raw.iter()
        .map(|value| value.trim().parse().unwrap_or(0))
        .collect()
}

/// Total physically counted: denomination sums plus bank vouchers.
pub fn counted_total(coin_counts: &[u32], bill_counts: &[u32], vouchers: f64) -> f64 {
    let coins: u32 = COINS.iter().zip(coin_counts).map(|(d, c)| d * c).sum();
    let bills: u32 = BILLS.iter().zip(bill_counts).map(|(d, c)| d * c).sum();
    f64::from(coins + bills) + vouchers
}

/// Guard for registering a withdrawal: a positive amount, a reason, and
/// captured evidence.
pub fn can_register_withdrawal(amount: &str, reason: &str, evidence: bool) -> bool {
    parse_amount(amount).is_ok_and(|value| value > 0.0) && !reason.trim().is_empty() && evidence
}

/// Cash drawer screen with the withdrawal and blind-close dialogs.
#[component]
pub fn CashScreen(pos: RwSignal<PosState>) -> impl IntoView {
    let show_withdrawal = RwSignal::new(false);
    let show_close = RwSignal::new(false);
    let on_withdrawal_close = Callback::new(move |()| show_withdrawal.set(false));
    let on_close_cancel = Callback::new(move |()| show_close.set(false));

    let summary = demo_shift_summary();

    view! {
        <div class="cash">
            <header class="screen-header">
                <h1>"Movimientos de Caja"</h1>
                <p class="screen-header__subtitle">"Retiros, gastos y corte del turno"</p>
            </header>

            <div class="cash__actions">
                <button class="action-card" on:click=move |_| show_withdrawal.set(true)>
                    <span class="action-card__icon">"💸"</span>
                    <span class="action-card__title">"Retiro / Gasto"</span>
                    <span class="action-card__hint">"Registra salidas de efectivo con evidencia"</span>
                </button>
                <button class="action-card action-card--danger" on:click=move |_| show_close.set(true)>
                    <span class="action-card__icon">"🧾"</span>
                    <span class="action-card__title">"Corte de Caja"</span>
                    <span class="action-card__hint">"Conteo ciego y cierre del turno"</span>
                </button>
            </div>

            <div class="cash__summary">
                <h3>"Turno en Curso"</h3>
                <div class="totals__row">
                    <span>"Fondo Inicial"</span>
                    <span>{format_money(summary.opening)}</span>
                </div>
                <div class="totals__row">
                    <span>"Ventas (Efectivo)"</span>
                    <span>{format_money(summary.cash_sales)}</span>
                </div>
                <div class="totals__row">
                    <span>"Retiros"</span>
                    <span>{format!("-{}", format_money(summary.withdrawals))}</span>
                </div>
                <div class="totals__row totals__row--total">
                    <span>"Esperado en Caja"</span>
                    <span>{format_money(summary.expected_in_drawer())}</span>
                </div>
            </div>

            <Show when=move || show_withdrawal.get()>
                <WithdrawalDialog on_close=on_withdrawal_close/>
            </Show>
            <Show when=move || show_close.get()>
                <CloseShiftDialog pos=pos on_cancel=on_close_cancel/>
            </Show>
        </div>
    }
}

/// Withdrawal dialog; registering is simulated but fully validated.
#[component]
fn WithdrawalDialog(on_close: Callback<()>) -> impl IntoView {
    let amount = RwSignal::new(String::new());
    let reason = RwSignal::new(String::new());
    let evidence = RwSignal::new(false);

    let register = move |_| {
        if !can_register_withdrawal(&amount.get(), &reason.get(), evidence.get()) {
            return;
        }
        #[cfg(feature = "hydrate")]
        log::info!("retiro registrado: {}", amount.get());
        on_close.run(());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Registrar Retiro / Gasto"</h2>
                <label class="dialog__label">
                    "Monto a Retirar"
                    <input
                        class="dialog__input"
                        type="number"
                        placeholder="0.00"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Motivo"
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Ej: Compra de comida, pago a proveedor..."
                        prop:value=move || reason.get()
                        on:input=move |ev| reason.set(event_target_value(&ev))
                    />
                </label>
                <div class="dialog__label">
                    "Evidencia (Obligatorio)"
                    <button
                        class=move || {
                            if evidence.get() { "btn btn--ok" } else { "btn" }
                        }
                        on:click=move |_| evidence.set(true)
                    >
                        {move || {
                            if evidence.get() {
                                "Evidencia capturada"
                            } else {
                                "Tomar Foto del Ticket/Comprobante"
                            }
                        }}
                    </button>
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancelar"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || {
                            !can_register_withdrawal(&amount.get(), &reason.get(), evidence.get())
                        }
                        on:click=register
                    >
                        "Registrar Retiro"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Blind closing count. The counted total is computed live from the
/// denomination counts; the expected figure is never shown here.
#[component]
fn CloseShiftDialog(pos: RwSignal<PosState>, on_cancel: Callback<()>) -> impl IntoView {
    let coin_counts = RwSignal::new(vec![String::new(); COINS.len()]);
    let bill_counts = RwSignal::new(vec![String::new(); BILLS.len()]);
    let vouchers = RwSignal::new(String::new());
    let notes = RwSignal::new(String::new());

    let total = move || {
        counted_total(
            &parse_counts(&coin_counts.get()),
            &parse_counts(&bill_counts.get()),
            parse_amount(&vouchers.get()).unwrap_or(0.0),
        )
    };

    let close_shift = move |_| {
        #[cfg(feature = "hydrate")]
        log::info!("turno cerrado: contado {}", format_money(total()));
        pos.update(PosState::close_shift);
    };

    let denomination_row = move |label: String, counts: RwSignal<Vec<String>>, index: usize| {
        view! {
            <label class="close-count__denomination">
                {label}
                <input
                    type="number"
                    placeholder="0"
                    prop:value=move || counts.get().get(index).cloned().unwrap_or_default()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        counts
                            .update(|list| {
                                if let Some(slot) = list.get_mut(index) {
                                    *slot = value;
                                }
                            });
                    }
                />
            </label>
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>"Corte de Caja Ciego"</h2>
                <p class="dialog__message">
                    "Cuenta el efectivo físico. El sistema comparará contra el monto esperado al cerrar."
                </p>

                <div class="close-count">
                    <div class="close-count__group">
                        <h3>"Monedas"</h3>
                        {COINS
                            .into_iter()
                            .enumerate()
                            .map(|(index, denomination)| {
                                denomination_row(format!("${denomination}"), coin_counts, index)
                            })
                            .collect::<Vec<_>>()}
                    </div>
                    <div class="close-count__group">
                        <h3>"Billetes"</h3>
                        {BILLS
                            .into_iter()
                            .enumerate()
                            .map(|(index, denomination)| {
                                denomination_row(format!("${denomination}"), bill_counts, index)
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </div>

                <label class="dialog__label">
                    "Monto en Vouchers (Terminal Bancaria)"
                    <input
                        class="dialog__input"
                        type="number"
                        placeholder="0.00"
                        prop:value=move || vouchers.get()
                        on:input=move |ev| vouchers.set(event_target_value(&ev))
                    />
                </label>

                <div class="totals__row totals__row--total">
                    <span>"Total Contado:"</span>
                    <span>{move || format_money(total())}</span>
                </div>

                <label class="dialog__label">
                    "Notas del Corte"
                    <textarea
                        class="dialog__input"
                        placeholder="Observaciones del turno (opcional)"
                        prop:value=move || notes.get()
                        on:input=move |ev| notes.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                    <button class="btn btn--danger" on:click=close_shift>
                        "Cerrar Turno e Imprimir"
                    </button>
                </div>
            </div>
        </div>
    }
}
