//! Tenant onboarding and lifecycle: create accounts, suspend service,
//! impersonate owners.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::util::search::any_field_matches;

#[cfg(test)]
#[path = "tenants_test.rs"]
mod tenants_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PlanTier {
    #[default]
    Basic,
    Pro,
    Enterprise,
}

impl PlanTier {
    pub const ALL: [PlanTier; 3] = [PlanTier::Basic, PlanTier::Pro, PlanTier::Enterprise];

    pub fn label(self) -> &'static str {
        match self {
            PlanTier::Basic => "Básico",
            PlanTier::Pro => "Pro",
            PlanTier::Enterprise => "Enterprise",
        }
    }

    pub fn value(self) -> &'static str {
        match self {
            PlanTier::Basic => "basic",
            PlanTier::Pro => "pro",
            PlanTier::Enterprise => "enterprise",
        }
    }

    /// Label for the assignment dropdown, limits included.
    pub fn option_label(self) -> &'static str {
        match self {
            PlanTier::Basic => "Básico - 1 sucursal, 1 usuario",
            PlanTier::Pro => "Pro - 5 sucursales, 10 usuarios",
            PlanTier::Enterprise => "Enterprise - Ilimitado",
        }
    }

    pub fn from_value(value: &str) -> PlanTier {
        PlanTier::ALL
            .into_iter()
            .find(|tier| tier.value() == value)
            .unwrap_or_default()
    }

    fn badge_class(self) -> &'static str {
        match self {
            PlanTier::Basic => "badge badge--muted",
            PlanTier::Pro => "badge badge--accent",
            PlanTier::Enterprise => "badge badge--info",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TenantStatus {
    Active,
    Suspended,
    Trial,
}

impl TenantStatus {
    pub fn label(self) -> &'static str {
        match self {
            TenantStatus::Active => "🟢 Activo",
            TenantStatus::Suspended => "🔴 Suspendido",
            TenantStatus::Trial => "🟡 Prueba",
        }
    }

    fn badge_class(self) -> &'static str {
        match self {
            TenantStatus::Active => "badge badge--ok",
            TenantStatus::Suspended => "badge badge--danger",
            TenantStatus::Trial => "badge badge--warn",
        }
    }
}

#[derive(Clone)]
pub struct Tenant {
    pub id: String,
    pub business_name: String,
    pub owner_name: String,
    pub email: String,
    pub phone: String,
    pub plan: PlanTier,
    pub status: TenantStatus,
    pub next_payment: String,
    pub branches: u32,
}

fn demo_tenants() -> Vec<Tenant> {
    vec![
        Tenant {
            id: "T001".to_owned(),
            business_name: "Boutique La Elegante".to_owned(),
            owner_name: "María González".to_owned(),
            email: "maria@elegante.com".to_owned(),
            phone: "555-0101".to_owned(),
            plan: PlanTier::Pro,
            status: TenantStatus::Active,
            next_payment: "2024-12-20".to_owned(),
            branches: 3,
        },
        Tenant {
            id: "T002".to_owned(),
            business_name: "Zapatería Premium".to_owned(),
            owner_name: "Carlos Ramírez".to_owned(),
            email: "carlos@zapatos.com".to_owned(),
            phone: "555-0102".to_owned(),
            plan: PlanTier::Basic,
            status: TenantStatus::Active,
            next_payment: "2024-12-15".to_owned(),
            branches: 1,
        },
        Tenant {
            id: "T003".to_owned(),
            business_name: "Moda Total".to_owned(),
            owner_name: "Ana Martínez".to_owned(),
            email: "ana@modatotal.com".to_owned(),
            phone: "555-0103".to_owned(),
            plan: PlanTier::Enterprise,
            status: TenantStatus::Suspended,
            next_payment: "2024-11-28".to_owned(),
            branches: 5,
        },
        Tenant {
            id: "T004".to_owned(),
            business_name: "Estilo Urbano".to_owned(),
            owner_name: "Luis Torres".to_owned(),
            email: "luis@estilourbano.com".to_owned(),
            phone: "555-0104".to_owned(),
            plan: PlanTier::Pro,
            status: TenantStatus::Trial,
            next_payment: "2024-12-25".to_owned(),
            branches: 2,
        },
    ]
}

/// The search box matches business name, owner, or tenant id.
pub fn tenant_matches(tenant: &Tenant, query: &str) -> bool {
    any_field_matches(
        &[
            tenant.business_name.as_str(),
            tenant.owner_name.as_str(),
            tenant.id.as_str(),
        ],
        query,
    )
}

/// Sequential id for a newly onboarded tenant.
pub fn next_tenant_id(count: usize) -> String {
    format!("T{:03}", count + 1)
}

pub fn can_create_tenant(business: &str, owner: &str) -> bool {
    !business.trim().is_empty() && !owner.trim().is_empty()
}

#[component]
pub fn TenantsScreen() -> impl IntoView {
    let tenants = RwSignal::new(demo_tenants());
    let query = RwSignal::new(String::new());
    let show_new = RwSignal::new(false);
    let pending_impersonate: RwSignal<Option<usize>> = RwSignal::new(None);
    let pending_suspend: RwSignal<Option<usize>> = RwSignal::new(None);
    let detail: RwSignal<Option<usize>> = RwSignal::new(None);

    let shown = Memo::new(move |_| {
        let filter = query.get();
        tenants.with(|list| list.iter().filter(|t| tenant_matches(t, &filter)).count())
    });

    view! {
        <div class="tenants">
            <header class="screen-header screen-header--split">
                <div>
                    <h1>"Fábrica de Clientes"</h1>
                    <p>"Gestión de Tenants y Onboarding"</p>
                </div>
                <button class="btn btn--primary" on:click=move |_| show_new.set(true)>
                    "+ Nuevo Tenant"
                </button>
            </header>

            <section class="panel">
                <div class="panel__header">
                    <h2>{move || format!("Lista de Clientes ({})", shown.get())}</h2>
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Buscar por nombre de empresa, dueño o ID..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </div>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"ID"</th>
                            <th>"Negocio"</th>
                            <th>"Dueño"</th>
                            <th>"Contacto"</th>
                            <th>"Plan"</th>
                            <th>"Estado"</th>
                            <th>"Sucursales"</th>
                            <th>"Próximo Pago"</th>
                            <th>"Acciones"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let filter = query.get();
                            tenants
                                .get()
                                .into_iter()
                                .enumerate()
                                .filter(|(_, t)| tenant_matches(t, &filter))
                                .map(|(index, tenant)| {
                                    let lifecycle = if tenant.status == TenantStatus::Active {
                                        view! {
                                            <button
                                                class="btn btn--ghost btn--small btn--danger-ghost"
                                                on:click=move |_| {
                                                    pending_suspend.set(Some(index));
                                                }
                                            >
                                                "Suspender"
                                            </button>
                                        }
                                            .into_any()
                                    } else {
                                        view! {
                                            <button
                                                class="btn btn--ghost btn--small btn--ok-ghost"
                                                on:click=move |_| {
                                                    tenants.update(|list| {
                                                        if let Some(t) = list.get_mut(index) {
                                                            t.status = TenantStatus::Active;
                                                        }
                                                    });
                                                }
                                            >
                                                "Reactivar"
                                            </button>
                                        }
                                            .into_any()
                                    };
                                    view! {
                                        <tr>
                                            <td>{tenant.id.clone()}</td>
                                            <td>{tenant.business_name.clone()}</td>
                                            <td>{tenant.owner_name.clone()}</td>
                                            <td>
                                                <div class="table__stack">
                                                    <span>{tenant.email.clone()}</span>
                                                    <span class="table__cell--muted">
                                                        {tenant.phone.clone()}
                                                    </span>
                                                </div>
                                            </td>
                                            <td>
                                                <span class=tenant.plan.badge_class()>
                                                    {tenant.plan.label()}
                                                </span>
                                            </td>
                                            <td>
                                                <span class=tenant.status.badge_class()>
                                                    {tenant.status.label()}
                                                </span>
                                            </td>
                                            <td>{tenant.branches.to_string()}</td>
                                            <td>{tenant.next_payment.clone()}</td>
                                            <td>
                                                <div class="table__buttons">
                                                    <button
                                                        class="btn btn--ghost btn--small"
                                                        on:click=move |_| {
                                                            pending_impersonate.set(Some(index));
                                                        }
                                                    >
                                                        "Impersonate"
                                                    </button>
                                                    {lifecycle}
                                                    <button
                                                        class="btn btn--ghost btn--small"
                                                        title="Ver detalle"
                                                        on:click=move |_| detail.set(Some(index))
                                                    >
                                                        "👁"
                                                    </button>
                                                </div>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </section>

            <aside class="panel panel--note">
                <h2>"Kill Switch de Servicios"</h2>
                <p>
                    "Al suspender un tenant, su acceso a la plataforma se bloquea \
                     inmediatamente. Verán un mensaje solicitando contactar soporte \
                     para regularizar pagos."
                </p>
            </aside>

            {move || {
                pending_impersonate.get().and_then(|index| {
                    tenants
                        .with(|list| {
                            list.get(index)
                                .map(|t| (t.business_name.clone(), t.owner_name.clone()))
                        })
                        .map(|(business, owner)| {
                            view! {
                                <ConfirmDialog
                                    title="Entrar como Dueño"
                                    message=format!(
                                        "¿Entrar a la cuenta de {business} como {owner}?"
                                    )
                                    confirm_label="Entrar"
                                    on_confirm=Callback::new(move |()| {
                                        #[cfg(feature = "hydrate")]
                                        log::info!(
                                            "impersonate: entrando como dueño de {business}"
                                        );
                                        pending_impersonate.set(None);
                                    })
                                    on_cancel=Callback::new(move |()| {
                                        pending_impersonate.set(None);
                                    })
                                />
                            }
                        })
                })
            }}

            {move || {
                pending_suspend.get().and_then(|index| {
                    tenants
                        .with(|list| list.get(index).map(|t| t.business_name.clone()))
                        .map(|business| {
                            view! {
                                <ConfirmDialog
                                    title="Suspender Servicio"
                                    message=format!("¿Suspender servicio para {business}?")
                                    confirm_label="Suspender"
                                    on_confirm=Callback::new(move |()| {
                                        tenants.update(|list| {
                                            if let Some(t) = list.get_mut(index) {
                                                t.status = TenantStatus::Suspended;
                                            }
                                        });
                                        #[cfg(feature = "hydrate")]
                                        log::info!("servicio suspendido para {business}");
                                        pending_suspend.set(None);
                                    })
                                    on_cancel=Callback::new(move |()| pending_suspend.set(None))
                                />
                            }
                        })
                })
            }}

            {move || {
                detail.get().map(|index| {
                    view! {
                        <TenantDetailDialog
                            tenants=tenants
                            index=index
                            on_close=Callback::new(move |()| detail.set(None))
                        />
                    }
                })
            }}

            <Show when=move || show_new.get()>
                <NewTenantDialog
                    tenants=tenants
                    on_close=Callback::new(move |()| show_new.set(false))
                />
            </Show>
        </div>
    }
}

/// Read-only snapshot of one tenant account.
#[component]
fn TenantDetailDialog(
    tenants: RwSignal<Vec<Tenant>>,
    index: usize,
    on_close: Callback<()>,
) -> impl IntoView {
    let tenant = tenants.with_untracked(|list| list.get(index).cloned());

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                {tenant
                    .map(|tenant| {
                        let rows = [
                            ("ID", tenant.id),
                            ("Dueño", tenant.owner_name),
                            ("Email", tenant.email),
                            ("Teléfono", tenant.phone),
                            ("Plan", tenant.plan.label().to_owned()),
                            ("Estado", tenant.status.label().to_owned()),
                            ("Sucursales", tenant.branches.to_string()),
                            ("Próximo Pago", tenant.next_payment),
                        ];
                        view! {
                            <h2>{tenant.business_name}</h2>
                            <div class="detail-list">
                                {rows
                                    .into_iter()
                                    .map(|(label, value)| {
                                        view! {
                                            <div class="detail-list__row">
                                                <span class="detail-list__label">{label}</span>
                                                <span>{value}</span>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                    })}
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                        "Cerrar"
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn NewTenantDialog(tenants: RwSignal<Vec<Tenant>>, on_close: Callback<()>) -> impl IntoView {
    let business = RwSignal::new(String::new());
    let owner = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let plan = RwSignal::new(PlanTier::Basic);
    let load_catalog = RwSignal::new(false);

    let create = move |_| {
        let business_name = business.get().trim().to_owned();
        let owner_name = owner.get().trim().to_owned();
        if !can_create_tenant(&business_name, &owner_name) {
            return;
        }
        let id = tenants.with_untracked(|list| next_tenant_id(list.len()));
        #[cfg(feature = "hydrate")]
        log::info!(
            "cuenta creada: {id} para {business_name} (catálogo base: {})",
            if load_catalog.get() { "sí" } else { "no" }
        );
        tenants.update(|list| {
            list.push(Tenant {
                id,
                business_name,
                owner_name,
                email: email.get().trim().to_owned(),
                phone: phone.get().trim().to_owned(),
                plan: plan.get(),
                status: TenantStatus::Trial,
                next_payment: "2025-01-01".to_owned(),
                branches: 1,
            });
        });
        on_close.run(());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=|ev| ev.stop_propagation()>
                <h2>"Alta de Nuevo Cliente"</h2>
                <p class="dialog__hint">"Crear cuenta maestra para un nuevo dueño"</p>
                <div class="dialog__columns">
                    <label class="dialog__field">
                        <span class="dialog__label">"Nombre de la Empresa"</span>
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Ej: Boutique La Elegante"
                            prop:value=move || business.get()
                            on:input=move |ev| business.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__field">
                        <span class="dialog__label">"Nombre del Dueño"</span>
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="Ej: María González"
                            prop:value=move || owner.get()
                            on:input=move |ev| owner.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <div class="dialog__columns">
                    <label class="dialog__field">
                        <span class="dialog__label">"Email"</span>
                        <input
                            class="dialog__input"
                            type="email"
                            placeholder="correo@empresa.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__field">
                        <span class="dialog__label">"Teléfono"</span>
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="555-1234"
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                    </label>
                </div>
                <label class="dialog__field">
                    <span class="dialog__label">"Plan Asignado"</span>
                    <select
                        class="dialog__input"
                        on:change=move |ev| {
                            plan.set(PlanTier::from_value(&event_target_value(&ev)));
                        }
                        prop:value=move || plan.get().value()
                    >
                        {PlanTier::ALL
                            .into_iter()
                            .map(|tier| {
                                view! {
                                    <option value=tier.value()>{tier.option_label()}</option>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <div class="dialog__field">
                    <span class="dialog__label">"Configuración Inicial"</span>
                    <label class="dialog__check">
                        <input
                            type="checkbox"
                            prop:checked=move || load_catalog.get()
                            on:change=move |ev| load_catalog.set(event_target_checked(&ev))
                        />
                        <span>"Cargar catálogo predefinido de ropa y calzado"</span>
                    </label>
                </div>
                <div class="dialog__actions">
                    <button
                        class="btn btn--primary"
                        disabled=move || !can_create_tenant(&business.get(), &owner.get())
                        on:click=create
                    >
                        "Crear Cuenta"
                    </button>
                    <button class="btn btn--ghost" on:click=move |_| on_close.run(())>
                        "Cancelar"
                    </button>
                </div>
            </div>
        </div>
    }
}
