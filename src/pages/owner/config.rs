//! Global configuration: master catalogs, promotions, and company data.

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

use crate::util::chips::{add_entry, remove_entry};

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Targets a promotion can apply to, as shown in the selector.
pub const PROMO_SCOPES: [&str; 4] = [
    "Toda la tienda",
    "Solo Botas",
    "Solo Sombreros",
    "Solo Accesorios",
];

fn demo_brands() -> Vec<String> {
    ["Cuadra", "Laredo", "Resistol", "Stetson"]
        .map(str::to_owned)
        .to_vec()
}

fn demo_colors() -> Vec<String> {
    ["Negro", "Café", "Beige", "Gris"].map(str::to_owned).to_vec()
}

fn demo_sizes() -> Vec<String> {
    ["25", "26", "27", "28", "29", "30"].map(str::to_owned).to_vec()
}

/// One promotion rule, storewide or scoped to a category.
#[derive(Clone)]
pub struct Promo {
    pub name: String,
    pub detail: String,
    pub validity: String,
    pub active: bool,
}

fn demo_promos() -> Vec<Promo> {
    vec![
        Promo {
            name: "Fin de Año".to_owned(),
            detail: "10% de descuento en toda la tienda".to_owned(),
            validity: "Válido: 01 Dic - 31 Dic 2025".to_owned(),
            active: true,
        },
        Promo {
            name: "Black Friday".to_owned(),
            detail: "20% de descuento en Botas".to_owned(),
            validity: "Válido: 24 Nov - 26 Nov 2025".to_owned(),
            active: false,
        },
    ]
}

/// Builds the one-line summary shown on a promotion card.
fn promo_detail(percent: u32, scope: &str) -> String {
    let target = scope.strip_prefix("Solo ").unwrap_or("toda la tienda");
    format!("{percent}% de descuento en {target}")
}

fn promo_validity(start: &str, end: &str) -> String {
    if start.trim().is_empty() || end.trim().is_empty() {
        "Vigencia por definir".to_owned()
    } else {
        format!("Válido: {start} - {end}")
    }
}

fn can_create_promo(name: &str, percent: &str) -> bool {
    !name.trim().is_empty()
        && percent
            .trim()
            .parse::<u32>()
            .is_ok_and(|p| (1..=100).contains(&p))
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum ConfigTab {
    #[default]
    Catalogs,
    Discounts,
    Company,
}

#[component]
pub fn ConfigScreen() -> impl IntoView {
    let tab = RwSignal::new(ConfigTab::default());

    // Catalog and promo state lives here so switching tabs keeps edits.
    let brands = RwSignal::new(demo_brands());
    let colors = RwSignal::new(demo_colors());
    let sizes = RwSignal::new(demo_sizes());
    let promos = RwSignal::new(demo_promos());

    let tab_class = move |own: ConfigTab| {
        if tab.get() == own { "tab tab--active" } else { "tab" }
    };

    view! {
        <div class="config">
            <header class="screen-header">
                <h1>"⚙️ Configuración Global"</h1>
                <p>"Ajustes del sistema y catálogos maestros"</p>
            </header>

            <section class="panel">
                <div class="tabs">
                    <button class=move || tab_class(ConfigTab::Catalogs)
                        on:click=move |_| tab.set(ConfigTab::Catalogs)>
                        "Catálogos"
                    </button>
                    <button class=move || tab_class(ConfigTab::Discounts)
                        on:click=move |_| tab.set(ConfigTab::Discounts)>
                        "Descuentos"
                    </button>
                    <button class=move || tab_class(ConfigTab::Company)
                        on:click=move |_| tab.set(ConfigTab::Company)>
                        "Datos de Empresa"
                    </button>
                </div>

                {move || match tab.get() {
                    ConfigTab::Catalogs => view! {
                        <div>
                            <h2>"Gestión de Catálogos"</h2>
                            <p class="panel__hint">
                                "Administra las listas desplegables que aparecen en el sistema"
                            </p>
                            <CatalogSection
                                label="Marcas"
                                placeholder="Ej: Justin"
                                empty_message="No hay marcas registradas"
                                entries=brands
                            />
                            <CatalogSection
                                label="Colores"
                                placeholder="Ej: Blanco"
                                empty_message="No hay colores registrados"
                                entries=colors
                            />
                            <CatalogSection
                                label="Tallas"
                                placeholder="Ej: 31"
                                empty_message="No hay tallas registradas"
                                entries=sizes
                            />
                            <aside class="panel panel--note">
                                <p>
                                    "💡 Tip: Mantén estos catálogos limpios eliminando \
                                     opciones que ya no uses. Esto facilitará el trabajo de \
                                     tus empleados al dar de alta productos."
                                </p>
                            </aside>
                        </div>
                    }
                    .into_any(),
                    ConfigTab::Discounts => view! { <DiscountsTab promos=promos/> }.into_any(),
                    ConfigTab::Company => view! { <CompanyTab/> }.into_any(),
                }}
            </section>
        </div>
    }
}

/// Chip list with an inline add row. Clicking a chip removes it.
#[component]
fn CatalogSection(
    label: &'static str,
    placeholder: &'static str,
    empty_message: &'static str,
    entries: RwSignal<Vec<String>>,
) -> impl IntoView {
    let draft = RwSignal::new(String::new());

    let commit = move || {
        let raw = draft.get();
        let mut added = false;
        entries.update(|list| added = add_entry(list, &raw));
        if added {
            draft.set(String::new());
        }
    };

    view! {
        <div class="catalog-section">
            <div class="catalog-section__header">
                <span class="dialog__label">{label}</span>
                <div class="catalog-section__add">
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder=placeholder
                        prop:value=move || draft.get()
                        on:input=move |ev| draft.set(event_target_value(&ev))
                        on:keydown=move |ev: KeyboardEvent| {
                            if ev.key() == "Enter" {
                                commit();
                            }
                        }
                    />
                    <button class="btn btn--small" on:click=move |_| commit()>
                        "+ Agregar"
                    </button>
                </div>
            </div>
            <div class="catalog-section__chips">
                {move || {
                    let list = entries.get();
                    if list.is_empty() {
                        view! { <p class="catalog-section__empty">{empty_message}</p> }
                            .into_any()
                    } else {
                        view! {
                            <div class="chips">
                                {list
                                    .into_iter()
                                    .enumerate()
                                    .map(|(index, entry)| {
                                        view! {
                                            <button
                                                class="chip chip--removable"
                                                title="Eliminar"
                                                on:click=move |_| {
                                                    entries.update(|list| {
                                                        remove_entry(list, index);
                                                    });
                                                }
                                            >
                                                {entry}
                                                " ×"
                                            </button>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                        .into_any()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn DiscountsTab(promos: RwSignal<Vec<Promo>>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let percent = RwSignal::new(String::new());
    let start = RwSignal::new(String::new());
    let end = RwSignal::new(String::new());
    let scope = RwSignal::new(PROMO_SCOPES[0].to_owned());

    let create = move |_| {
        let Ok(pct) = percent.get().trim().parse::<u32>() else {
            return;
        };
        promos.update(|list| {
            list.insert(
                0,
                Promo {
                    name: name.get().trim().to_owned(),
                    detail: promo_detail(pct, &scope.get()),
                    validity: promo_validity(&start.get(), &end.get()),
                    active: true,
                },
            );
        });
        name.set(String::new());
        percent.set(String::new());
        start.set(String::new());
        end.set(String::new());
    };

    view! {
        <div>
            <h2>"Reglas de Descuento"</h2>
            <p class="panel__hint">
                "Configura promociones automáticas que se aplican en todo el sistema"
            </p>

            <div class="promo-list">
                {move || {
                    promos
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, promo)| {
                            let card_class = if promo.active {
                                "promo promo--active"
                            } else {
                                "promo promo--done"
                            };
                            let title = if promo.active {
                                format!("Promoción Activa: {}", promo.name)
                            } else {
                                promo.name.clone()
                            };
                            view! {
                                <div class=card_class>
                                    <div class="promo__header">
                                        <div>
                                            <h3>{title}</h3>
                                            <p>{promo.detail.clone()}</p>
                                        </div>
                                        <span class=if promo.active {
                                            "badge badge--ok"
                                        } else {
                                            "badge badge--info"
                                        }>
                                            {if promo.active { "Activa" } else { "Finalizada" }}
                                        </span>
                                    </div>
                                    <span class="promo__validity">{promo.validity.clone()}</span>
                                    <Show when=move || {
                                        promos.with(|list| {
                                            list.get(index).is_some_and(|p| p.active)
                                        })
                                    }>
                                        <div class="promo__actions">
                                            <button class="btn btn--ghost btn--small">
                                                "Editar"
                                            </button>
                                            <button
                                                class="btn btn--danger btn--small"
                                                on:click=move |_| {
                                                    promos.update(|list| {
                                                        if let Some(p) = list.get_mut(index) {
                                                            p.active = false;
                                                        }
                                                    });
                                                }
                                            >
                                                "Desactivar"
                                            </button>
                                        </div>
                                    </Show>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <div class="promo-form">
                <h3>"Crear Nueva Promoción"</h3>
                <div class="dialog__columns">
                    <label class="dialog__field">
                        <span class="dialog__label">"Nombre de la Promoción"</span>
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Ej: Navidad 2025"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__field">
                        <span class="dialog__label">"Descuento (%)"</span>
                        <input
                            class="dialog__input"
                            type="number"
                            min="0"
                            max="100"
                            placeholder="15"
                            prop:value=move || percent.get()
                            on:input=move |ev| percent.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <div class="dialog__columns">
                    <label class="dialog__field">
                        <span class="dialog__label">"Fecha Inicio"</span>
                        <input
                            class="dialog__input"
                            type="date"
                            prop:value=move || start.get()
                            on:input=move |ev| start.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__field">
                        <span class="dialog__label">"Fecha Fin"</span>
                        <input
                            class="dialog__input"
                            type="date"
                            prop:value=move || end.get()
                            on:input=move |ev| end.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="dialog__field">
                    <span class="dialog__label">"Aplicar a"</span>
                    <select
                        class="dialog__input"
                        on:change=move |ev| scope.set(event_target_value(&ev))
                        prop:value=move || scope.get()
                    >
                        {PROMO_SCOPES
                            .iter()
                            .map(|s| view! { <option value=*s>{*s}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <button
                    class="btn btn--primary"
                    disabled=move || !can_create_promo(&name.get(), &percent.get())
                    on:click=create
                >
                    "Crear Promoción"
                </button>
            </div>
        </div>
    }
}

#[component]
fn CompanyTab() -> impl IntoView {
    let saved = RwSignal::new(false);

    view! {
        <div>
            <h2>"Datos de la Empresa"</h2>
            <p class="panel__hint">"Información que aparece en tickets y documentos"</p>

            <div class="dialog__field">
                <span class="dialog__label">"Logotipo para Ticket"</span>
                <div class="upload-box">
                    <span class="upload-box__icon">"🖼️"</span>
                    <p>"Arrastra tu logo aquí o haz clic para seleccionar"</p>
                    <button class="btn btn--ghost btn--small">"Seleccionar Imagen"</button>
                    <p class="dialog__hint">"Formato recomendado: PNG, 300x300px"</p>
                </div>
            </div>

            <div class="dialog__columns">
                <label class="dialog__field">
                    <span class="dialog__label">"Nombre de la Empresa"</span>
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Mi Tienda Vaquera S.A. de C.V."
                    />
                </label>
                <label class="dialog__field">
                    <span class="dialog__label">"RFC"</span>
                    <input class="dialog__input" type="text" placeholder="ABC123456XYZ"/>
                </label>
            </div>
            <label class="dialog__field">
                <span class="dialog__label">"Dirección Fiscal"</span>
                <input
                    class="dialog__input"
                    type="text"
                    placeholder="Calle Principal #123, Colonia Centro"
                />
            </label>
            <div class="dialog__columns">
                <label class="dialog__field">
                    <span class="dialog__label">"Teléfono"</span>
                    <input class="dialog__input" type="tel" placeholder="(123) 456-7890"/>
                </label>
                <label class="dialog__field">
                    <span class="dialog__label">"Email"</span>
                    <input class="dialog__input" type="email" placeholder="contacto@mitienda.com"/>
                </label>
            </div>
            <label class="dialog__field">
                <span class="dialog__label">"Mensaje al Pie del Ticket"</span>
                <textarea
                    class="dialog__input"
                    rows="3"
                    placeholder="¡Gracias por su compra! Visítenos en nuestras 4 sucursales."
                ></textarea>
                <span class="dialog__hint">
                    "Este mensaje aparecerá en todos los tickets impresos"
                </span>
            </label>

            <div class="fiscal-box">
                <h3>"Configuración Fiscal"</h3>
                <div class="dialog__columns">
                    <label class="dialog__field">
                        <span class="dialog__label">"IVA (%)"</span>
                        <input class="dialog__input" type="number" step="0.1" value="16"/>
                    </label>
                    <label class="dialog__field">
                        <span class="dialog__label">"Régimen Fiscal"</span>
                        <select class="dialog__input">
                            <option>"Régimen General"</option>
                            <option>"Régimen Simplificado de Confianza"</option>
                            <option>"Actividad Empresarial"</option>
                        </select>
                    </label>
                </div>
            </div>

            <Show when=move || saved.get()>
                <p class="form-flash">"Configuración guardada"</p>
            </Show>
            <div class="dialog__actions">
                <button class="btn btn--ghost" on:click=move |_| saved.set(false)>
                    "Cancelar Cambios"
                </button>
                <button class="btn btn--primary" on:click=move |_| saved.set(true)>
                    "Guardar Configuración"
                </button>
            </div>
        </div>
    }
}
