//! Link screen: QR pairing with the register, plus a manual login that
//! exposes the satellite tools without a link.

use leptos::prelude::*;

use crate::state::scanner::{ScannerMode, ScannerState};
use crate::state::session::Session;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum LinkView {
    #[default]
    Main,
    Qr,
    Login,
}

/// Entry screen of the scanner app.
#[component]
pub fn LinkScreen(state: RwSignal<ScannerState>) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let subview = RwSignal::new(LinkView::default());

    view! {
        {move || match subview.get() {
            LinkView::Main => view! {
                <div class="scanner-screen">
                    <header class="scanner-header">
                        <span class="scanner-header__icon">"📱"</span>
                        <div>
                            <h1>"App Escáner"</h1>
                            <p>"Herramienta móvil"</p>
                        </div>
                    </header>

                    <div class="scanner-screen__body scanner-screen__body--center">
                        <button
                            class="scanner-qr-launch"
                            on:click=move |_| subview.set(LinkView::Qr)
                        >
                            <span class="scanner-qr-launch__icon">"📷"</span>
                            <h2>"Escanear QR"</h2>
                            <p>"Vincularse con PC de caja"</p>
                        </button>
                        <button
                            class="scanner-link__alt"
                            on:click=move |_| subview.set(LinkView::Login)
                        >
                            "Iniciar sesión con usuario y contraseña"
                        </button>
                    </div>

                    <footer class="scanner-footer">
                        <span class="scanner-footer__dot"></span>
                        <span>"Modo satélite - Sin conexión"</span>
                    </footer>
                    <button
                        class="btn btn--ghost"
                        on:click=move |_| session.update(|s| s.sign_out())
                    >
                        "← Volver al Login Principal"
                    </button>
                </div>
            }
            .into_any(),
            LinkView::Qr => view! {
                <div class="scanner-screen scanner-screen--dark">
                    <div class="scanner-screen__body scanner-screen__body--center">
                        <div class="scan-frame">
                            <span class="scan-frame__line"></span>
                        </div>
                        <p class="scan-frame__title">"Escanea el código QR de la PC"</p>
                        <p class="scan-frame__hint">
                            "El código aparece en la pantalla de alta de productos"
                        </p>
                    </div>
                    <div class="scanner-screen__actions">
                        <button
                            class="btn btn--primary"
                            on:click=move |_| state.update(ScannerState::link)
                        >
                            "Simular Vinculación"
                        </button>
                        <button
                            class="btn btn--ghost"
                            on:click=move |_| subview.set(LinkView::Main)
                        >
                            "← Cancelar"
                        </button>
                    </div>
                </div>
            }
            .into_any(),
            LinkView::Login => view! {
                <div class="scanner-screen">
                    <header class="scanner-header">
                        <button
                            class="scanner-header__back"
                            on:click=move |_| subview.set(LinkView::Main)
                        >
                            "←"
                        </button>
                        <div>
                            <h1>"Iniciar Sesión"</h1>
                            <p>"Acceso independiente a herramientas"</p>
                        </div>
                    </header>

                    <div class="scanner-screen__body">
                        <label class="dialog__label">
                            "Usuario"
                            <input
                                class="dialog__input"
                                type="text"
                                placeholder="Tu nombre de usuario"
                            />
                        </label>
                        <label class="dialog__label">
                            "Contraseña"
                            <input class="dialog__input" type="password" placeholder="••••••••"/>
                        </label>
                        <button
                            class="btn btn--primary"
                            on:click=move |_| state.update(ScannerState::link)
                        >
                            "Iniciar Sesión"
                        </button>

                        <p class="scanner-link__quick-title">"O accede directamente a:"</p>
                        <div class="scanner-link__quick">
                            <QuickTool state=state tool=ScannerMode::Inventory icon="📦" label="Inventario"/>
                            <QuickTool state=state tool=ScannerMode::Price icon="💳" label="Precios"/>
                            <QuickTool state=state tool=ScannerMode::Evidence icon="📸" label="Evidencias"/>
                            <QuickTool state=state tool=ScannerMode::Location icon="📍" label="Ubicación"/>
                        </div>
                    </div>

                    <button
                        class="btn btn--ghost"
                        on:click=move |_| session.update(|s| s.sign_out())
                    >
                        "Volver al Login Principal"
                    </button>
                </div>
            }
            .into_any(),
        }}
    }
}

/// Quick-access card that jumps straight into a tool without linking.
#[component]
fn QuickTool(
    state: RwSignal<ScannerState>,
    tool: ScannerMode,
    icon: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <button
            class="scanner-link__quick-item"
            on:click=move |_| state.update(|s| s.open_tool(tool))
        >
            <span class="scanner-link__quick-icon">{icon}</span>
            <span>{label}</span>
        </button>
    }
}
