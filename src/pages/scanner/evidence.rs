//! Evidence camera: typed photo reports for expenses, damage, and
//! deliveries.

#[cfg(test)]
#[path = "evidence_test.rs"]
mod evidence_test;

use leptos::prelude::*;

use crate::state::scanner::ScannerState;

/// What a photo report is justifying.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EvidenceType {
    Expense,
    Damaged,
    Delivery,
}

impl EvidenceType {
    pub const ALL: [Self; 3] = [Self::Expense, Self::Damaged, Self::Delivery];

    pub fn title(self) -> &'static str {
        match self {
            Self::Expense => "Ticket de Gasto",
            Self::Damaged => "Mercancía Dañada",
            Self::Delivery => "Recepción de Paquete",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Expense => "Comprobar salida de efectivo",
            Self::Damaged => "Justificar una merma",
            Self::Delivery => "Probar estado de llegada",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Expense => "🧾",
            Self::Damaged => "⚠️",
            Self::Delivery => "📦",
        }
    }

    /// Example text for the note field, per report type.
    pub fn note_placeholder(self) -> &'static str {
        match self {
            Self::Expense => "Ej: Se compraron productos de limpieza",
            Self::Damaged => "Ej: Llegó rota la hebilla durante el envío",
            Self::Delivery => "Ej: Paquete llegó en buen estado, sin daños",
        }
    }
}

/// A report needs a non-blank note before it can be sent.
pub fn can_upload(note: &str) -> bool {
    !note.trim().is_empty()
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum Phase {
    #[default]
    Pick,
    Camera,
    Note,
    Done,
}

#[component]
pub fn EvidenceCameraScreen(state: RwSignal<ScannerState>) -> impl IntoView {
    let phase = RwSignal::new(Phase::default());
    // Only read after a type card sets it.
    let kind = RwSignal::new(EvidenceType::Expense);
    let note = RwSignal::new(String::new());
    let uploading = RwSignal::new(false);

    let upload = move |_| {
        if uploading.get() || !can_upload(&note.get()) {
            return;
        }
        uploading.set(true);
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            gloo_timers::future::sleep(std::time::Duration::from_millis(1500)).await;
            uploading.set(false);
            phase.set(Phase::Done);
            gloo_timers::future::sleep(std::time::Duration::from_millis(2000)).await;
            state.update(ScannerState::go_back);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            uploading.set(false);
            phase.set(Phase::Done);
            state.update(ScannerState::go_back);
        }
    };

    view! {
        {move || match phase.get() {
            Phase::Pick => view! {
                <div class="scanner-screen">
                    <header class="scanner-header">
                        <button
                            class="scanner-header__back"
                            on:click=move |_| state.update(ScannerState::go_back)
                        >
                            "←"
                        </button>
                        <h1>"📸 Cámara de Evidencias"</h1>
                        <p>"Selecciona el tipo de evidencia a registrar"</p>
                    </header>
                    <div class="scanner-screen__body">
                        <div class="scanner-tools">
                            {EvidenceType::ALL
                                .into_iter()
                                .map(|option| {
                                    view! {
                                        <button
                                            class="scanner-tool scanner-tool--row"
                                            on:click=move |_| {
                                                kind.set(option);
                                                phase.set(Phase::Camera);
                                            }
                                        >
                                            <span class="scanner-tool__icon">{option.icon()}</span>
                                            <div>
                                                <h3>{option.title()}</h3>
                                                <p>{option.description()}</p>
                                            </div>
                                        </button>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                        <aside class="panel panel--note">
                            <p>
                                "📋 Importante: Toda evidencia fotográfica queda registrada \
                                 con fecha, hora y usuario. Asegúrate de capturar imágenes \
                                 claras y legibles."
                            </p>
                        </aside>
                    </div>
                </div>
            }
            .into_any(),
            Phase::Camera => view! {
                <div class="scanner-screen scanner-screen--dark">
                    <header class="scanner-header scanner-header--overlay">
                        <button
                            class="scanner-header__back"
                            on:click=move |_| phase.set(Phase::Pick)
                        >
                            "←"
                        </button>
                        <span class="badge badge--info">{move || kind.get().title()}</span>
                    </header>
                    <div class="camera-view">
                        <span class="camera-view__icon">"📷"</span>
                        <p>"Vista de Cámara"</p>
                    </div>
                    <div class="scanner-screen__actions">
                        <p class="scan-frame__title">"Toma una foto clara del documento"</p>
                        <p class="scan-frame__hint">"Asegúrate de que se vea legible"</p>
                        <button class="btn btn--primary" on:click=move |_| phase.set(Phase::Note)>
                            "📷 Tomar Foto"
                        </button>
                    </div>
                </div>
            }
            .into_any(),
            Phase::Note => view! {
                <div class="scanner-screen">
                    <header class="scanner-header">
                        <button
                            class="scanner-header__back"
                            on:click=move |_| phase.set(Phase::Camera)
                        >
                            "←"
                        </button>
                        <h1>"Completar Reporte"</h1>
                    </header>
                    <div class="scanner-screen__body">
                        <div class="photo-preview">
                            <span class="camera-view__icon">"📷"</span>
                            <span class="badge badge--ok">"✓ Capturada"</span>
                        </div>
                        <div class="evidence-banner">
                            <span class="scanner-tool__icon">{move || kind.get().icon()}</span>
                            <div>
                                <h4>{move || kind.get().title()}</h4>
                                <p>{move || kind.get().description()}</p>
                            </div>
                        </div>
                        <label class="dialog__label">
                            "Nota / Descripción"
                            <textarea
                                class="dialog__input"
                                rows="5"
                                placeholder=move || kind.get().note_placeholder()
                                prop:value=move || note.get()
                                on:input=move |ev| note.set(event_target_value(&ev))
                            ></textarea>
                        </label>
                        <p class="dialog__hint">"Describe el motivo o contexto de esta evidencia"</p>
                    </div>
                    <div class="scanner-screen__actions">
                        <button
                            class="btn btn--primary"
                            disabled=move || uploading.get() || !can_upload(&note.get())
                            on:click=upload
                        >
                            {move || {
                                if uploading.get() { "Subiendo..." } else { "⬆️ Subir Reporte" }
                            }}
                        </button>
                        <button
                            class="btn btn--ghost"
                            disabled=move || uploading.get()
                            on:click=move |_| phase.set(Phase::Camera)
                        >
                            "Tomar Otra Foto"
                        </button>
                    </div>
                </div>
            }
            .into_any(),
            Phase::Done => view! {
                <div class="scanner-screen scanner-screen--success">
                    <span class="scanner-success__check">"✓"</span>
                    <h2>"¡Reporte Enviado!"</h2>
                    <p>"La evidencia se ha guardado correctamente"</p>
                </div>
            }
            .into_any(),
        }}
    }
}
