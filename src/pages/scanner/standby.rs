//! Standby home shown while linked to a register.

#[cfg(test)]
#[path = "standby_test.rs"]
mod standby_test;

use leptos::prelude::*;

use crate::state::scanner::{ScannerMode, ScannerState};

/// Tools offered from the standby screen: mode, icon, title, description.
pub fn standby_tools() -> [(ScannerMode, &'static str, &'static str, &'static str); 4] {
    [
        (
            ScannerMode::Inventory,
            "📊",
            "Escáner de Inventario",
            "Auditoría rápida sin PC",
        ),
        (
            ScannerMode::Price,
            "🏷️",
            "Verificador de Precios",
            "Consulta rápida para clientes",
        ),
        (
            ScannerMode::Evidence,
            "📸",
            "Cámara de Evidencias",
            "Justificar gastos o daños",
        ),
        (
            ScannerMode::Location,
            "📍",
            "Buscador de Ubicación",
            "Encuentra productos en bodega",
        ),
    ]
}

#[component]
pub fn StandbyScreen(state: RwSignal<ScannerState>) -> impl IntoView {
    view! {
        <div class="scanner-screen">
            <header class="scanner-header">
                <div class="scanner-header__status">
                    <span class="scanner-footer__dot"></span>
                    <span>"Vinculado"</span>
                    <button
                        class="btn btn--ghost btn--small"
                        on:click=move |_| state.update(ScannerState::disconnect)
                    >
                        "Desconectar"
                    </button>
                </div>
                <h1>"🎯 En Espera"</h1>
                <p>"Caja 1 - Sucursal Norte"</p>
            </header>

            <div class="scanner-screen__body">
                <p class="scanner-tools__title">"Herramientas disponibles:"</p>
                <div class="scanner-tools">
                    {standby_tools()
                        .into_iter()
                        .map(|(tool, icon, title, description)| {
                            view! {
                                <button
                                    class="scanner-tool"
                                    on:click=move |_| state.update(|s| s.open_tool(tool))
                                >
                                    <span class="scanner-tool__icon">{icon}</span>
                                    <h3>{title}</h3>
                                    <p>{description}</p>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </div>
    }
}
