//! Subscription plan editor: pricing, limits, and feature switches.

use leptos::prelude::*;

use crate::util::money::{format_money, parse_amount};

#[cfg(test)]
#[path = "plans_test.rs"]
mod plans_test;

/// Sentinel limit rendered as "Ilimitado".
pub const UNLIMITED: u32 = 999;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanFeature {
    Billing,
    OwnerApp,
    Api,
    MultiCurrency,
    Analytics,
    WhiteLabel,
}

impl PlanFeature {
    pub const ALL: [PlanFeature; 6] = [
        PlanFeature::Billing,
        PlanFeature::OwnerApp,
        PlanFeature::Api,
        PlanFeature::MultiCurrency,
        PlanFeature::Analytics,
        PlanFeature::WhiteLabel,
    ];

    /// Slot in a plan's feature array.
    pub fn index(self) -> usize {
        match self {
            PlanFeature::Billing => 0,
            PlanFeature::OwnerApp => 1,
            PlanFeature::Api => 2,
            PlanFeature::MultiCurrency => 3,
            PlanFeature::Analytics => 4,
            PlanFeature::WhiteLabel => 5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PlanFeature::Billing => "Facturación Electrónica",
            PlanFeature::OwnerApp => "App de Dueño",
            PlanFeature::Api => "API Externa",
            PlanFeature::MultiCurrency => "Multi-Moneda",
            PlanFeature::Analytics => "Analytics Avanzado",
            PlanFeature::WhiteLabel => "White Label",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PlanFeature::Billing => "Generación de facturas CFDI",
            PlanFeature::OwnerApp => "Dashboard ejecutivo móvil",
            PlanFeature::Api => "Integración con sistemas externos",
            PlanFeature::MultiCurrency => "Soporte para múltiples divisas",
            PlanFeature::Analytics => "Reportes de BI",
            PlanFeature::WhiteLabel => "Personalización de marca",
        }
    }
}

#[derive(Clone)]
pub struct Plan {
    pub name: String,
    pub price: f64,
    pub max_branches: u32,
    pub max_users: u32,
    pub features: [bool; 6],
}

impl Plan {
    pub fn has(&self, feature: PlanFeature) -> bool {
        self.features[feature.index()]
    }

    pub fn toggle(&mut self, feature: PlanFeature) {
        let slot = feature.index();
        self.features[slot] = !self.features[slot];
    }
}

fn demo_plans() -> Vec<Plan> {
    vec![
        Plan {
            name: "Emprendedor".to_owned(),
            price: 799.0,
            max_branches: 1,
            max_users: 1,
            features: [false; 6],
        },
        Plan {
            name: "Empresario".to_owned(),
            price: 1_999.0,
            max_branches: 5,
            max_users: 10,
            features: [true, true, false, true, true, false],
        },
        Plan {
            name: "Enterprise".to_owned(),
            price: 4_999.0,
            max_branches: UNLIMITED,
            max_users: UNLIMITED,
            features: [true; 6],
        },
    ]
}

pub fn limit_label(limit: u32) -> String {
    if limit == UNLIMITED {
        "Ilimitado".to_owned()
    } else {
        limit.to_string()
    }
}

pub fn can_create_plan(name: &str, price: &str) -> bool {
    !name.trim().is_empty() && parse_amount(price).is_ok()
}

#[component]
pub fn PlansScreen() -> impl IntoView {
    let plans = RwSignal::new(demo_plans());
    let show_new = RwSignal::new(false);
    let editing: RwSignal<Option<usize>> = RwSignal::new(None);

    view! {
        <div class="plans">
            <header class="screen-header screen-header--split">
                <div>
                    <h1>"Gestor de Planes y Límites"</h1>
                    <p>"Define qué vendes y qué incluye cada plan"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| show_new.set(true)>
                    "+ Crear Plan"
                </button>
            </header>

            <div class="plan-grid">
                {move || {
                    plans
                        .get()
                        .into_iter()
                        .enumerate()
                        .map(|(index, plan)| {
                            view! {
                                <article class="plan-card">
                                    <div class="plan-card__head">
                                        <div class="plan-card__title">
                                            <h3>{plan.name.clone()}</h3>
                                            <button
                                                class="btn btn--ghost btn--small"
                                                title="Editar plan"
                                                on:click=move |_| editing.set(Some(index))
                                            >
                                                "✏️"
                                            </button>
                                        </div>
                                        <span class="plan-card__price">
                                            {format_money(plan.price)}
                                        </span>
                                        <span class="plan-card__period">"por mes"</span>
                                    </div>
                                    <div class="plan-card__limits">
                                        <div class="plan-card__limit">
                                            <span>"Sucursales"</span>
                                            <span class="badge badge--muted">
                                                {limit_label(plan.max_branches)}
                                            </span>
                                        </div>
                                        <div class="plan-card__limit">
                                            <span>"Usuarios"</span>
                                            <span class="badge badge--muted">
                                                {limit_label(plan.max_users)}
                                            </span>
                                        </div>
                                    </div>
                                    <h4 class="plan-card__subtitle">"Funcionalidades:"</h4>
                                    <div class="plan-card__features">
                                        {PlanFeature::ALL
                                            .into_iter()
                                            .map(|feature| {
                                                let enabled = plan.has(feature);
                                                let (mark_class, mark) = if enabled {
                                                    ("feature-row__mark feature-row__mark--on", "✓")
                                                } else {
                                                    ("feature-row__mark", "✗")
                                                };
                                                view! {
                                                    <div class="feature-row">
                                                        <span class=mark_class>{mark}</span>
                                                        <span class="feature-row__name">
                                                            {feature.name()}
                                                        </span>
                                                        <label class="switch">
                                                            <input
                                                                type="checkbox"
                                                                prop:checked=enabled
                                                                on:change=move |_| {
                                                                    plans.update(|list| {
                                                                        if let Some(p) = list
                                                                            .get_mut(index)
                                                                        {
                                                                            p.toggle(feature);
                                                                        }
                                                                    });
                                                                }
                                                            />
                                                            <span class="switch__slider"></span>
                                                        </label>
                                                    </div>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </div>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>

            <section class="panel">
                <h2>"Control de Features (Interruptores)"</h2>
                <p class="panel__hint">"Gestiona qué funcionalidades incluye cada plan"</p>
                <div class="feature-list">
                    {PlanFeature::ALL
                        .into_iter()
                        .map(|feature| {
                            view! {
                                <div class="feature-card">
                                    <div class="feature-card__head">
                                        <div>
                                            <h4>{feature.name()}</h4>
                                            <p class="feature-card__description">
                                                {feature.description()}
                                            </p>
                                        </div>
                                        <span class="feature-card__icon">"📦"</span>
                                    </div>
                                    <div class="feature-card__plans">
                                        <span class="feature-card__included">"Incluido en:"</span>
                                        {move || {
                                            plans
                                                .get()
                                                .into_iter()
                                                .filter(|plan| plan.has(feature))
                                                .map(|plan| {
                                                    view! {
                                                        <span class="chip chip--small">
                                                            {plan.name.clone()}
                                                        </span>
                                                    }
                                                })
                                                .collect::<Vec<_>>()
                                        }}
                                    </div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </section>

            <aside class="panel panel--note">
                <h2>"Sistema de Límites Dinámicos"</h2>
                <p>
                    "Los límites se aplican automáticamente. Si un cliente en plan \
                     \"Básico\" intenta crear una segunda sucursal, el sistema le \
                     bloqueará la acción y le sugerirá actualizar a un plan superior."
                </p>
            </aside>

            <Show when=move || show_new.get()>
                <NewPlanDialog
                    plans=plans
                    on_close=Callback::new(move |()| show_new.set(false))
                />
            </Show>

            {move || {
                editing.get().map(|index| {
                    view! {
                        <EditPlanDialog
                            plans=plans
                            index=index
                            on_close=Callback::new(move |()| editing.set(None))
                        />
                    }
                })
            }}
        </div>
    }
}

#[component]
fn NewPlanDialog(plans: RwSignal<Vec<Plan>>, on_close: Callback<()>) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let price = RwSignal::new(String::new());
    let branches = RwSignal::new(String::new());
    let users = RwSignal::new(String::new());

    let create = move |_| {
        let plan_name = name.get().trim().to_owned();
        let Ok(monthly) = parse_amount(&price.get()) else {
            return;
        };
        if plan_name.is_empty() {
            return;
        }
        plans.update(|list| {
            list.push(Plan {
                name: plan_name,
                price: monthly,
                max_branches: branches.get().trim().parse().unwrap_or(1),
                max_users: users.get().trim().parse().unwrap_or(1),
                features: [false; 6],
            });
        });
        on_close.run(());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=|ev| ev.stop_propagation()>
                <h2>"Crear Nuevo Plan"</h2>
                <p class="dialog__hint">"Define características y límites del plan"</p>
                <div class="dialog__columns">
                    <label class="dialog__field">
                        <span class="dialog__label">"Nombre del Plan"</span>
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Ej: Pro Plus"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__field">
                        <span class="dialog__label">"Precio Mensual ($)"</span>
                        <input
                            class="dialog__input"
                            type="number"
                            placeholder="2999"
                            prop:value=move || price.get()
                            on:input=move |ev| price.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <div class="dialog__columns">
                    <label class="dialog__field">
                        <span class="dialog__label">"Límite de Sucursales"</span>
                        <input
                            class="dialog__input"
                            type="number"
                            placeholder="10"
                            prop:value=move || branches.get()
                            on:input=move |ev| branches.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__field">
                        <span class="dialog__label">"Límite de Usuarios"</span>
                        <input
                            class="dialog__input"
                            type="number"
                            placeholder="20"
                            prop:value=move || users.get()
                            on:input=move |ev| users.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <div class="dialog__actions">
                    <button
                        class="btn btn--primary"
                        disabled=move || !can_create_plan(&name.get(), &price.get())
                        on:click=create
                    >
                        "Crear Plan"
                    </button>
                    <button class="btn btn--ghost" on:click=move |_| on_close.run(())>
                        "Cancelar"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Adjusts price and limits of an existing plan. Feature switches live on
/// the card itself.
#[component]
fn EditPlanDialog(
    plans: RwSignal<Vec<Plan>>,
    index: usize,
    on_close: Callback<()>,
) -> impl IntoView {
    let snapshot = plans
        .with_untracked(|list| list.get(index).cloned())
        .unwrap_or_else(|| Plan {
            name: String::new(),
            price: 0.0,
            max_branches: 1,
            max_users: 1,
            features: [false; 6],
        });

    let title = format!("Editar Plan: {}", snapshot.name);
    let price = RwSignal::new(snapshot.price.to_string());
    let branches = RwSignal::new(snapshot.max_branches.to_string());
    let users = RwSignal::new(snapshot.max_users.to_string());

    let save = move |_| {
        plans.update(|list| {
            if let Some(plan) = list.get_mut(index) {
                plan.price = parse_amount(&price.get()).unwrap_or(plan.price);
                plan.max_branches = branches.get().trim().parse().unwrap_or(plan.max_branches);
                plan.max_users = users.get().trim().parse().unwrap_or(plan.max_users);
            }
        });
        on_close.run(());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <label class="dialog__field">
                    <span class="dialog__label">"Precio Mensual ($)"</span>
                    <input
                        class="dialog__input"
                        type="number"
                        prop:value=move || price.get()
                        on:input=move |ev| price.set(event_target_value(&ev))
                    />
                </label>
                <div class="dialog__columns">
                    <label class="dialog__field">
                        <span class="dialog__label">"Límite de Sucursales"</span>
                        <input
                            class="dialog__input"
                            type="number"
                            prop:value=move || branches.get()
                            on:input=move |ev| branches.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__field">
                        <span class="dialog__label">"Límite de Usuarios"</span>
                        <input
                            class="dialog__input"
                            type="number"
                            prop:value=move || users.get()
                            on:input=move |ev| users.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <span class="dialog__hint">"Usa 999 para un límite ilimitado"</span>
                <div class="dialog__actions">
                    <button class="btn btn--ghost" on:click=move |_| on_close.run(())>
                        "Cancelar"
                    </button>
                    <button class="btn btn--primary" on:click=save>
                        "Guardar Cambios"
                    </button>
                </div>
            </div>
        </div>
    }
}
