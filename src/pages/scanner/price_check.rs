//! Price checker: scan a product and show its price customer-facing.

use leptos::prelude::*;

use crate::state::scanner::ScannerState;
use crate::util::money::format_money;

use super::{pick_scan, random_roll, ScanHit};

#[component]
pub fn PriceCheckerScreen(state: RwSignal<ScannerState>) -> impl IntoView {
    let result = RwSignal::new(None::<ScanHit>);
    let scanning = RwSignal::new(false);

    let scan = move |_| {
        if scanning.get() {
            return;
        }
        scanning.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(800)).await;
            result.set(Some(pick_scan(random_roll())));
            scanning.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            result.set(Some(pick_scan(random_roll())));
            scanning.set(false);
        }
    };

    view! {
        <div class="scanner-screen scanner-screen--dark">
            <header class="scanner-header scanner-header--overlay">
                <button
                    class="scanner-header__back"
                    on:click=move |_| state.update(ScannerState::go_back)
                >
                    "←"
                </button>
                <h1>"🏷️ Verificador de Precios"</h1>
            </header>

            {move || match result.get() {
                Some(hit) => view! {
                    <div class="price-card" on:click=move |_| result.set(None)>
                        <span class="badge badge--info">{hit.sku}</span>
                        <h2>{hit.name}</h2>
                        <p class="price-card__amount">{format_money(hit.price)}</p>
                        <p class="price-card__caption">"Precio de venta"</p>
                        <div class="price-card__variants">
                            <p>"Disponible en:"</p>
                            <div class="chips">
                                {hit
                                    .variants
                                    .iter()
                                    .map(|variant| {
                                        view! { <span class="chip chip--small">{*variant}</span> }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </div>
                        <p class="price-card__dismiss">"Toca en cualquier lugar para cerrar"</p>
                    </div>
                }
                .into_any(),
                None => view! {
                    <div class="scanner-screen__body scanner-screen__body--center">
                        <div class="scan-frame">
                            <Show when=move || scanning.get()>
                                <span class="scan-frame__line"></span>
                            </Show>
                        </div>
                        <p class="scan-frame__title">"Apunta al código de barras"</p>
                        <p class="scan-frame__hint">"Se mostrará el precio en pantalla grande"</p>
                        <button
                            class="btn btn--primary"
                            disabled=move || scanning.get()
                            on:click=scan
                        >
                            {move || {
                                if scanning.get() { "Escaneando..." } else { "Simular Escaneo" }
                            }}
                        </button>
                        <p class="scanner-screen__tip">
                            "💡 Tip: Muestra la pantalla al cliente para que vea el precio"
                        </p>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
