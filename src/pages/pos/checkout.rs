//! Checkout dialog: payment selection, change calculator, ticket options.
//!
//! The dialog reads the cart's discount-aware totals; all numeric rules
//! live in [`crate::state::checkout`].

use leptos::prelude::*;

use crate::state::cart::Cart;
use crate::state::checkout::{CheckoutForm, PaymentMethod};
use crate::util::money::format_money;

/// Payment dialog. Completing runs the caller's callback, which clears
/// the cart and closes the dialog.
#[component]
pub fn CheckoutDialog(
    cart: RwSignal<Cart>,
    on_cancel: Callback<()>,
    on_complete: Callback<()>,
) -> impl IntoView {
    let form = RwSignal::new(CheckoutForm::default());
    let totals = Memo::new(move |_| cart.get().totals());

    let complete = move |_| {
        let total = totals.get().total;
        if !form.get().can_complete(total) {
            return;
        }
        let folio = uuid::Uuid::new_v4();
        #[cfg(feature = "hydrate")]
        log::info!("venta completada: folio {folio}");
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = folio;
        }
        on_complete.run(());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>"Finalizar Venta"</h2>

                <div class="checkout__summary">
                    <h3>"Resumen de Venta"</h3>
                    <div class="totals__row">
                        <span>"Subtotal"</span>
                        <span>{move || format_money(totals.get().subtotal)}</span>
                    </div>
                    <Show when={move || totals.get().discount_amount > 0.0}>
                        <div class="totals__row totals__row--discount">
                            <span>"Descuento"</span>
                            <span>
                                {move || format!("-{}", format_money(totals.get().discount_amount))}
                            </span>
                        </div>
                    </Show>
                    <div class="totals__row">
                        <span>"IVA (16%)"</span>
                        <span>{move || format_money(totals.get().tax_amount)}</span>
                    </div>
                    <div class="totals__row totals__row--total">
                        <span>"Total a Cobrar:"</span>
                        <span>{move || format_money(totals.get().total)}</span>
                    </div>
                </div>

                <div class="checkout__methods">
                    {PaymentMethod::ALL
                        .into_iter()
                        .map(|method| {
                            view! {
                                <button
                                    class=move || {
                                        if form.get().method == method && !form.get().mixed {
                                            "method-btn method-btn--active"
                                        } else {
                                            "method-btn"
                                        }
                                    }
                                    on:click=move |_| form.update(|f| f.select_method(method))
                                >
                                    {method.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <label class="checkout__mixed">
                    <input
                        type="checkbox"
                        prop:checked=move || form.get().mixed
                        on:change=move |ev| form.update(|f| f.set_mixed(event_target_checked(&ev)))
                    />
                    "Pago Mixto (Efectivo + Tarjeta)"
                </label>

                <Show when=move || form.get().wants_cash()>
                    <div class="checkout__calculator">
                        <h3>"Calculadora de Cambio"</h3>
                        <Show when=move || form.get().mixed>
                            <label class="dialog__label">
                                "Monto en Tarjeta"
                                <input
                                    class="dialog__input"
                                    type="number"
                                    placeholder="0.00"
                                    prop:value=move || form.get().card_amount
                                    on:input=move |ev| {
                                        form.update(|f| f.card_amount = event_target_value(&ev))
                                    }
                                />
                            </label>
                        </Show>
                        <label class="dialog__label">
                            "Efectivo Recibido"
                            <input
                                class="dialog__input"
                                type="number"
                                placeholder="0.00"
                                autofocus
                                prop:value=move || form.get().cash_received
                                on:input=move |ev| {
                                    form.update(|f| f.cash_received = event_target_value(&ev))
                                }
                            />
                        </label>
                        <Show when=move || !form.get().cash_received.is_empty()>
                            <div class="checkout__change">
                                <span>"Cambio a Devolver"</span>
                                <span class="checkout__change-amount">
                                    {move || format_money(form.get().change_due(totals.get().total))}
                                </span>
                                {move || {
                                    form.get()
                                        .shortfall(totals.get().total)
                                        .map(|missing| {
                                            view! {
                                                <span class="checkout__shortfall">
                                                    {format!("Falta: {}", format_money(missing))}
                                                </span>
                                            }
                                        })
                                }}
                            </div>
                        </Show>
                    </div>
                </Show>

                <div class="checkout__tickets">
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || form.get().print_ticket
                            on:change=move |ev| {
                                form.update(|f| f.print_ticket = event_target_checked(&ev))
                            }
                        />
                        "Imprimir Ticket"
                    </label>
                    <label>
                        <input
                            type="checkbox"
                            prop:checked=move || form.get().send_whatsapp
                            on:change=move |ev| {
                                form.update(|f| f.send_whatsapp = event_target_checked(&ev))
                            }
                        />
                        "Enviar por WhatsApp"
                    </label>
                </div>

                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancelar"
                    </button>
                    <button
                        class="btn btn--primary"
                        disabled=move || !form.get().can_complete(totals.get().total)
                        on:click=complete
                    >
                        "Finalizar Venta"
                    </button>
                </div>
            </div>
        </div>
    }
}
