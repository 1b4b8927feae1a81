//! Product photo capture. No mode navigates here today; the route stays
//! wired so the register's product-capture flow can hand off to it.

use leptos::prelude::*;

use crate::state::scanner::ScannerState;

#[component]
pub fn ProductPhotoScreen(state: RwSignal<ScannerState>) -> impl IntoView {
    let flash_on = RwSignal::new(false);
    let front_facing = RwSignal::new(false);
    let captured = RwSignal::new(false);

    let take_photo = move |_| {
        if captured.get() {
            return;
        }
        captured.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(1500)).await;
            captured.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        captured.set(false);
    };

    view! {
        <div class="scanner-screen scanner-screen--dark">
            <header class="scanner-header scanner-header--overlay">
                <button
                    class="scanner-header__back"
                    on:click=move |_| state.update(ScannerState::go_back)
                >
                    "✕"
                </button>
                <span class="badge badge--danger">"● Alta de Producto"</span>
            </header>

            <div class="camera-view">
                <Show
                    when=move || captured.get()
                    fallback=move || {
                        view! {
                            <span class="camera-view__icon">"📷"</span>
                            <p>"Vista de Cámara"</p>
                            <p class="scan-frame__hint">
                                {move || {
                                    if front_facing.get() {
                                        "Cámara Frontal"
                                    } else {
                                        "Cámara Trasera"
                                    }
                                }}
                            </p>
                        }
                    }
                >
                    <span class="scanner-success__check">"✓"</span>
                </Show>
            </div>

            <div class="scanner-screen__actions">
                <p class="scan-frame__title">"📦 Captura las fotos del producto"</p>
                <p class="scan-frame__hint">"Toma varias fotos desde diferentes ángulos"</p>

                <div class="camera-controls">
                    <button
                        class=move || {
                            if flash_on.get() {
                                "camera-controls__toggle camera-controls__toggle--on"
                            } else {
                                "camera-controls__toggle"
                            }
                        }
                        on:click=move |_| flash_on.update(|on| *on = !*on)
                    >
                        <span>"🔦"</span>
                        "Linterna"
                    </button>
                    <button class="camera-controls__shutter" on:click=take_photo>
                        "FOTO"
                    </button>
                    <button
                        class="camera-controls__toggle"
                        on:click=move |_| front_facing.update(|front| *front = !*front)
                    >
                        <span>"🔄"</span>
                        "Girar"
                    </button>
                </div>

                <p class="camera-controls__counter">
                    "Fotos capturadas: "
                    <span class="badge badge--ok">"3"</span>
                </p>
            </div>
        </div>
    }
}
