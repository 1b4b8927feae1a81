//! Seed catalogs preloaded into every new tenant account.

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::util::chips::{add_entry, remove_entry};

#[cfg(test)]
#[path = "seeds_test.rs"]
mod seeds_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedCatalog {
    Categories,
    Materials,
    Colors,
    Sizes,
}

impl SeedCatalog {
    pub const ALL: [SeedCatalog; 4] = [
        SeedCatalog::Categories,
        SeedCatalog::Materials,
        SeedCatalog::Colors,
        SeedCatalog::Sizes,
    ];

    pub fn title(self) -> &'static str {
        match self {
            SeedCatalog::Categories => "Categorías de Productos",
            SeedCatalog::Materials => "Materiales",
            SeedCatalog::Colors => "Colores",
            SeedCatalog::Sizes => "Tallas",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            SeedCatalog::Categories => "Tipos de productos (Botas, Cinturones, etc.)",
            SeedCatalog::Materials => "Tipos de material (Piel, Sintético, etc.)",
            SeedCatalog::Colors => "Colores disponibles",
            SeedCatalog::Sizes => "Tallas estándar",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SeedCatalog::Categories => "🏷️",
            SeedCatalog::Materials => "📦",
            SeedCatalog::Colors => "🎨",
            SeedCatalog::Sizes => "📏",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            SeedCatalog::Categories => "Ej: Chamarras",
            SeedCatalog::Materials => "Ej: Mezclilla",
            SeedCatalog::Colors => "Ej: Morado",
            SeedCatalog::Sizes => "Ej: 31",
        }
    }

    pub fn add_label(self) -> &'static str {
        match self {
            SeedCatalog::Categories => "Agregar Categoría",
            SeedCatalog::Materials => "Agregar Material",
            SeedCatalog::Colors => "Agregar Color",
            SeedCatalog::Sizes => "Agregar Talla",
        }
    }
}

fn seed_categories() -> Vec<String> {
    ["Botas", "Zapatos", "Cinturones", "Sombreros", "Carteras", "Accesorios"]
        .map(str::to_owned)
        .to_vec()
}

fn seed_materials() -> Vec<String> {
    [
        "Piel Genuina",
        "Piel Sintética",
        "Ante",
        "Piel de Avestruz",
        "Piel de Cocodrilo",
        "Lona",
        "Tela",
    ]
    .map(str::to_owned)
    .to_vec()
}

fn seed_colors() -> Vec<String> {
    ["Negro", "Café", "Blanco", "Beige", "Rojo", "Azul", "Verde", "Gris"]
        .map(str::to_owned)
        .to_vec()
}

fn seed_sizes() -> Vec<String> {
    ["22", "23", "24", "25", "26", "27", "28", "29", "30"]
        .map(str::to_owned)
        .to_vec()
}

/// First catalog entry, or the fallback when the list was emptied out.
pub fn preview_value(list: &[String], fallback: &str) -> String {
    list.first()
        .cloned()
        .unwrap_or_else(|| fallback.to_owned())
}

#[component]
pub fn SeedsScreen() -> impl IntoView {
    let categories = RwSignal::new(seed_categories());
    let materials = RwSignal::new(seed_materials());
    let colors = RwSignal::new(seed_colors());
    let sizes = RwSignal::new(seed_sizes());

    let adding: RwSignal<Option<SeedCatalog>> = RwSignal::new(None);
    let pending_delete: RwSignal<Option<(SeedCatalog, usize)>> = RwSignal::new(None);
    let saved = RwSignal::new(false);

    let signal_for = move |catalog: SeedCatalog| match catalog {
        SeedCatalog::Categories => categories,
        SeedCatalog::Materials => materials,
        SeedCatalog::Colors => colors,
        SeedCatalog::Sizes => sizes,
    };

    view! {
        <div class="seeds">
            <header class="screen-header screen-header--split">
                <div>
                    <h1>"Configuración de Semillas"</h1>
                    <p>"Catálogos maestros pre-cargados para nuevos clientes"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| saved.set(true)>
                    "Guardar Cambios"
                </button>
            </header>

            <Show when=move || saved.get()>
                <p class="form-flash">
                    "Catálogos base guardados. Se aplicarán a todos los nuevos \
                     clientes que crees."
                </p>
            </Show>

            <aside class="panel panel--note">
                <h2>"¿Para qué sirven las Semillas?"</h2>
                <p>
                    "Cuando creas un nuevo cliente, puedes optar por cargar estos \
                     catálogos base para que no entregues el sistema vacío. Les \
                     ahorras tiempo de configuración inicial."
                </p>
                <p>
                    "Cada cliente podrá después editar, agregar o eliminar estos \
                     valores según sus necesidades."
                </p>
            </aside>

            <div class="seed-grid">
                {SeedCatalog::ALL
                    .into_iter()
                    .map(|catalog| {
                        view! {
                            <SeedCatalogPanel
                                catalog=catalog
                                entries=signal_for(catalog)
                                adding=adding
                                pending_delete=pending_delete
                            />
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>

            <section class="panel">
                <h2>"Vista Previa de Implementación"</h2>
                <p class="panel__hint">
                    "Cómo se verán estos catálogos en el sistema del cliente"
                </p>
                <div class="seed-preview">
                    <h4>"Al dar de alta un producto, el cliente verá:"</h4>
                    <div class="seed-preview__grid">
                        <div>
                            <span class="seed-preview__label">"Categoría"</span>
                            <div class="seed-preview__box">
                                {move || preview_value(&categories.get(), "Botas")}
                            </div>
                        </div>
                        <div>
                            <span class="seed-preview__label">"Material"</span>
                            <div class="seed-preview__box">
                                {move || preview_value(&materials.get(), "Piel Genuina")}
                            </div>
                        </div>
                        <div>
                            <span class="seed-preview__label">"Color"</span>
                            <div class="seed-preview__box">
                                {move || preview_value(&colors.get(), "Negro")}
                            </div>
                        </div>
                        <div>
                            <span class="seed-preview__label">"Talla"</span>
                            <div class="seed-preview__box">
                                {move || preview_value(&sizes.get(), "25")}
                            </div>
                        </div>
                    </div>
                    <p class="seed-preview__footnote">
                        "✓ El cliente podrá editar estos valores o agregar más según su inventario"
                    </p>
                </div>
            </section>

            {move || {
                adding.get().map(|catalog| {
                    view! {
                        <AddSeedDialog
                            catalog=catalog
                            entries=signal_for(catalog)
                            on_close=Callback::new(move |()| adding.set(None))
                        />
                    }
                })
            }}

            {move || {
                pending_delete.get().map(|(catalog, index)| {
                    view! {
                        <ConfirmDialog
                            title="Eliminar Elemento"
                            message="¿Eliminar este elemento del catálogo base?".to_owned()
                            confirm_label="Eliminar"
                            on_confirm=Callback::new(move |()| {
                                signal_for(catalog).update(|list| {
                                    remove_entry(list, index);
                                });
                                pending_delete.set(None);
                            })
                            on_cancel=Callback::new(move |()| pending_delete.set(None))
                        />
                    }
                })
            }}
        </div>
    }
}

#[component]
fn SeedCatalogPanel(
    catalog: SeedCatalog,
    entries: RwSignal<Vec<String>>,
    adding: RwSignal<Option<SeedCatalog>>,
    pending_delete: RwSignal<Option<(SeedCatalog, usize)>>,
) -> impl IntoView {
    view! {
        <section class="panel seed-catalog">
            <div class="seed-catalog__header">
                <span class="seed-catalog__icon">{catalog.icon()}</span>
                <div>
                    <h3>{catalog.title()}</h3>
                    <p class="panel__hint">{catalog.description()}</p>
                </div>
                <span class="badge badge--muted">
                    {move || format!("{} items", entries.with(Vec::len))}
                </span>
            </div>
            <div class="seed-catalog__list">
                {move || {
                    entries
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, value)| {
                            view! {
                                <div class="seed-catalog__row">
                                    <span>{value}</span>
                                    <button
                                        class="btn btn--ghost btn--small btn--danger-ghost"
                                        title="Eliminar"
                                        on:click=move |_| {
                                            pending_delete.set(Some((catalog, index)));
                                        }
                                    >
                                        "🗑"
                                    </button>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <button
                class="btn btn--ghost seed-catalog__add"
                on:click=move |_| adding.set(Some(catalog))
            >
                {format!("+ {}", catalog.add_label())}
            </button>
        </section>
    }
}

#[component]
fn AddSeedDialog(
    catalog: SeedCatalog,
    entries: RwSignal<Vec<String>>,
    on_close: Callback<()>,
) -> impl IntoView {
    let value = RwSignal::new(String::new());

    let commit = move || {
        let raw = value.get();
        if raw.trim().is_empty() {
            return;
        }
        entries.update(|list| {
            add_entry(list, &raw);
        });
        on_close.run(());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h2>{format!("Agregar a {}", catalog.title())}</h2>
                <p class="dialog__hint">"Nuevo elemento del catálogo base"</p>
                <label class="dialog__field">
                    <span class="dialog__label">"Valor"</span>
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder=catalog.placeholder()
                        prop:value=move || value.get()
                        on:input=move |ev| value.set(event_target_value(&ev))
                        on:keydown=move |ev: KeyboardEvent| {
                            if ev.key() == "Enter" {
                                commit();
                            }
                        }
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| commit()>
                        "Agregar"
                    </button>
                    <button class="btn btn--ghost" on:click=move |_| on_close.run(())>
                        "Cancelar"
                    </button>
                </div>
            </div>
        </div>
    }
}
