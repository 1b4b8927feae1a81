//! Shift-opening form shown before the register unlocks.

#[cfg(test)]
#[path = "shift_start_test.rs"]
mod shift_start_test;

use leptos::prelude::*;

use crate::state::pos::PosState;
use crate::util::money::parse_amount;

pub const CASHIERS: [&str; 4] =
    ["María García", "Juan Pérez", "Ana López", "Carlos Rodríguez"];
pub const BRANCH_NAME: &str = "Sucursal Norte";

/// Guard for the submit button: a cashier and a valid opening amount.
pub fn can_open_shift(cashier: &str, opening_cash: &str) -> bool {
    !cashier.trim().is_empty() && parse_amount(opening_cash).is_ok()
}

/// Today's date for the header, localized in the browser.
fn current_date_label() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(
            js_sys::Date::new_0().to_locale_date_string("es-MX", &wasm_bindgen::JsValue::UNDEFINED),
        )
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}

/// Cash-drawer opening form. Submitting drives the shift machine's only
/// forward transition and lands on the sales screen.
#[component]
pub fn ShiftStartScreen(pos: RwSignal<PosState>) -> impl IntoView {
    let cashier = RwSignal::new(String::new());
    let opening_cash = RwSignal::new(String::new());

    let submit = move |_| {
        pos.update(|p| {
            p.open_shift(&cashier.get(), &opening_cash.get());
        });
    };

    view! {
        <div class="shift-start">
            <div class="shift-start__card">
                <div class="shift-start__icon">"🕐"</div>
                <h1>"Apertura de Caja"</h1>
                <p class="shift-start__subtitle">"Inicia tu turno de trabajo"</p>

                <div class="shift-start__meta">
                    <div class="shift-start__meta-row">
                        <span>"Fecha"</span>
                        <span>{current_date_label()}</span>
                    </div>
                    <div class="shift-start__meta-row">
                        <span>"Conectado a"</span>
                        <span>{BRANCH_NAME}</span>
                    </div>
                </div>

                <label class="dialog__label">
                    "Seleccionar Usuario"
                    <select
                        class="dialog__input"
                        prop:value=move || cashier.get()
                        on:change=move |ev| cashier.set(event_target_value(&ev))
                    >
                        <option value="">"¿Quién está iniciando sesión?"</option>
                        {CASHIERS
                            .into_iter()
                            .map(|name| view! { <option value=name>{name}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>

                <label class="dialog__label">
                    "Fondo de Caja Inicial"
                    <input
                        class="dialog__input"
                        type="number"
                        placeholder="0.00"
                        prop:value=move || opening_cash.get()
                        on:input=move |ev| opening_cash.set(event_target_value(&ev))
                    />
                </label>
                <p class="shift-start__hint">
                    "Cuenta el efectivo físico del cajón antes de declararlo"
                </p>

                <button
                    class="btn btn--primary shift-start__submit"
                    disabled=move || !can_open_shift(&cashier.get(), &opening_cash.get())
                    on:click=submit
                >
                    "Abrir Caja e Iniciar Turno"
                </button>

                <div class="shift-start__notice">
                    "Importante: el fondo declarado se compara contra el conteo del corte al cerrar el turno."
                </div>
            </div>
        </div>
    }
}
