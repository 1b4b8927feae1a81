//! Personnel management: roster, permissions, and commissions.

use leptos::prelude::*;

use crate::util::search::matches_query;

#[cfg(test)]
#[path = "personnel_test.rs"]
mod personnel_test;

/// Branches an employee can be assigned to, warehouse included.
pub const STAFF_BRANCHES: [&str; 5] = [
    "Sucursal Norte",
    "Sucursal Centro",
    "Sucursal Sur",
    "Sucursal Este",
    "Bodega Principal",
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StaffRole {
    Encargado,
    Cajero,
    Bodeguero,
}

impl StaffRole {
    pub const ALL: [StaffRole; 3] = [
        StaffRole::Encargado,
        StaffRole::Cajero,
        StaffRole::Bodeguero,
    ];

    pub fn label(self) -> &'static str {
        match self {
            StaffRole::Encargado => "Encargado",
            StaffRole::Cajero => "Cajero",
            StaffRole::Bodeguero => "Bodeguero",
        }
    }

    pub fn from_label(label: &str) -> StaffRole {
        StaffRole::ALL
            .into_iter()
            .find(|role| role.label() == label)
            .unwrap_or(StaffRole::Cajero)
    }

    fn badge_class(self) -> &'static str {
        match self {
            StaffRole::Encargado => "badge badge--ok",
            StaffRole::Cajero => "badge badge--info",
            StaffRole::Bodeguero => "badge badge--warn",
        }
    }
}

/// Per-employee security switches, granted by the owner.
#[derive(Clone, Copy, Default)]
pub struct Permissions {
    pub discounts: bool,
    pub view_other_branches: bool,
    pub cancel_sales: bool,
}

#[derive(Clone)]
pub struct Employee {
    pub name: String,
    pub role: StaffRole,
    pub branch: String,
    pub active: bool,
    pub permissions: Permissions,
    /// Percent of each sale the employee earns.
    pub commission: f64,
    pub last_login: &'static str,
}

fn demo_employees() -> Vec<Employee> {
    vec![
        Employee {
            name: "María García".to_owned(),
            role: StaffRole::Encargado,
            branch: "Sucursal Norte".to_owned(),
            active: true,
            permissions: Permissions {
                discounts: true,
                view_other_branches: true,
                cancel_sales: true,
            },
            commission: 2.5,
            last_login: "Hace 2 horas",
        },
        Employee {
            name: "Juan Pérez".to_owned(),
            role: StaffRole::Cajero,
            branch: "Sucursal Norte".to_owned(),
            active: true,
            permissions: Permissions::default(),
            commission: 1.5,
            last_login: "Hace 5 horas",
        },
        Employee {
            name: "Ana López".to_owned(),
            role: StaffRole::Encargado,
            branch: "Sucursal Centro".to_owned(),
            active: true,
            permissions: Permissions {
                discounts: true,
                view_other_branches: true,
                cancel_sales: true,
            },
            commission: 2.5,
            last_login: "Hace 1 hora",
        },
        Employee {
            name: "Carlos Rodríguez".to_owned(),
            role: StaffRole::Cajero,
            branch: "Sucursal Sur".to_owned(),
            active: true,
            permissions: Permissions::default(),
            commission: 1.5,
            last_login: "Hace 3 horas",
        },
        Employee {
            name: "Laura Martínez".to_owned(),
            role: StaffRole::Encargado,
            branch: "Sucursal Este".to_owned(),
            active: true,
            permissions: Permissions {
                discounts: true,
                view_other_branches: true,
                cancel_sales: true,
            },
            commission: 2.5,
            last_login: "Hace 30 min",
        },
        Employee {
            name: "Pedro Santos".to_owned(),
            role: StaffRole::Bodeguero,
            branch: "Bodega Principal".to_owned(),
            active: false,
            permissions: Permissions {
                discounts: false,
                view_other_branches: true,
                cancel_sales: false,
            },
            commission: 0.0,
            last_login: "Hace 2 días",
        },
    ]
}

fn active_count(employees: &[Employee]) -> usize {
    employees.iter().filter(|e| e.active).count()
}

fn manager_count(employees: &[Employee]) -> usize {
    employees
        .iter()
        .filter(|e| e.role == StaffRole::Encargado)
        .count()
}

// Roster sizes stay far below anything f64 cannot represent exactly.
#[allow(clippy::cast_precision_loss)]
fn average_commission(employees: &[Employee]) -> f64 {
    if employees.is_empty() {
        0.0
    } else {
        let total: f64 = employees.iter().map(|e| e.commission).sum();
        total / employees.len() as f64
    }
}

fn commission_label(commission: f64) -> String {
    if commission > 0.0 {
        format!("{commission}%")
    } else {
        "N/A".to_owned()
    }
}

#[component]
pub fn PersonnelScreen() -> impl IntoView {
    let employees = RwSignal::new(demo_employees());
    let query = RwSignal::new(String::new());
    let editing: RwSignal<Option<usize>> = RwSignal::new(None);

    let active = Memo::new(move |_| employees.with(|list| active_count(list)));
    let total = Memo::new(move |_| employees.with(Vec::len));
    let managers = Memo::new(move |_| employees.with(|list| manager_count(list)));
    let avg = Memo::new(move |_| employees.with(|list| average_commission(list)));

    view! {
        <div class="personnel">
            <header class="screen-header screen-header--split">
                <div>
                    <h1>"👥 Gestión de Personal"</h1>
                    <p>"Control de acceso y permisos de usuarios"</p>
                </div>
                <button class="btn btn--primary">"+ Nuevo Usuario"</button>
            </header>

            <div class="stat-grid">
                <div class="stat">
                    <span class="stat__label">"Empleados Activos"</span>
                    <span class="stat__value">{move || active.get().to_string()}</span>
                </div>
                <div class="stat">
                    <span class="stat__label">"Total Usuarios"</span>
                    <span class="stat__value">{move || total.get().to_string()}</span>
                </div>
                <div class="stat">
                    <span class="stat__label">"Encargados"</span>
                    <span class="stat__value">{move || managers.get().to_string()}</span>
                </div>
                <div class="stat">
                    <span class="stat__label">"Comisión Promedio"</span>
                    <span class="stat__value">{move || format!("{:.1}%", avg.get())}</span>
                </div>
            </div>

            <section class="panel">
                <div class="panel__header">
                    <h2>"Directorio de Empleados"</h2>
                    <input
                        class="dialog__input"
                        type="text"
                        placeholder="Buscar empleado..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </div>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Nombre"</th>
                            <th>"Rol"</th>
                            <th>"Sucursal"</th>
                            <th>"Permisos"</th>
                            <th>"Comisión"</th>
                            <th>"Última Sesión"</th>
                            <th>"Estado"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let filter = query.get();
                            employees
                                .get()
                                .into_iter()
                                .enumerate()
                                .filter(|(_, e)| matches_query(&e.name, &filter))
                                .map(|(index, employee)| {
                                    let perms = employee.permissions;
                                    let grants = [
                                        (perms.discounts, "Descuentos"),
                                        (perms.cancel_sales, "Cancelar"),
                                        (perms.view_other_branches, "Multi-sucursal"),
                                    ];
                                    view! {
                                        <tr>
                                            <td>{employee.name.clone()}</td>
                                            <td>
                                                <span class=employee.role.badge_class()>
                                                    {employee.role.label()}
                                                </span>
                                            </td>
                                            <td>{employee.branch.clone()}</td>
                                            <td>
                                                <div class="table__chips">
                                                    {grants
                                                        .into_iter()
                                                        .filter(|(granted, _)| *granted)
                                                        .map(|(_, label)| {
                                                            view! {
                                                                <span class="chip chip--small">
                                                                    {label}
                                                                </span>
                                                            }
                                                        })
                                                        .collect::<Vec<_>>()}
                                                </div>
                                            </td>
                                            <td>{commission_label(employee.commission)}</td>
                                            <td class="table__cell--muted">
                                                {employee.last_login}
                                            </td>
                                            <td>
                                                <span class=if employee.active {
                                                    "badge badge--ok"
                                                } else {
                                                    "badge badge--warn"
                                                }>
                                                    {if employee.active {
                                                        "Activo"
                                                    } else {
                                                        "Inactivo"
                                                    }}
                                                </span>
                                            </td>
                                            <td>
                                                <button
                                                    class="btn btn--ghost btn--small"
                                                    title="Editar"
                                                    on:click=move |_| editing.set(Some(index))
                                                >
                                                    "✏️"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>
            </section>

            {move || {
                editing.get().map(|index| {
                    view! {
                        <EditEmployeeDialog
                            employees=employees
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
fn EditEmployeeDialog(
    employees: RwSignal<Vec<Employee>>,
    index: usize,
    on_close: Callback<()>,
) -> impl IntoView {
    let snapshot = employees
        .with_untracked(|list| list.get(index).cloned())
        .unwrap_or_else(|| Employee {
            name: String::new(),
            role: StaffRole::Cajero,
            branch: STAFF_BRANCHES[0].to_owned(),
            active: true,
            permissions: Permissions::default(),
            commission: 0.0,
            last_login: "",
        });

    let name = RwSignal::new(snapshot.name);
    let branch = RwSignal::new(snapshot.branch);
    let role = RwSignal::new(snapshot.role);
    let discounts = RwSignal::new(snapshot.permissions.discounts);
    let other_branches = RwSignal::new(snapshot.permissions.view_other_branches);
    let cancel_sales = RwSignal::new(snapshot.permissions.cancel_sales);
    let commission = RwSignal::new(snapshot.commission.to_string());
    let active = RwSignal::new(snapshot.active);

    let save = move |_| {
        employees.update(|list| {
            if let Some(employee) = list.get_mut(index) {
                let trimmed = name.get().trim().to_owned();
                if !trimmed.is_empty() {
                    employee.name = trimmed;
                }
                employee.branch = branch.get();
                employee.role = role.get();
                employee.permissions = Permissions {
                    discounts: discounts.get(),
                    view_other_branches: other_branches.get(),
                    cancel_sales: cancel_sales.get(),
                };
                employee.commission = commission
                    .get()
                    .trim()
                    .parse()
                    .unwrap_or(employee.commission)
                    .clamp(0.0, 100.0);
                employee.active = active.get();
            }
        });
        on_close.run(());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=|ev| ev.stop_propagation()>
                <h2>"Editar Usuario"</h2>
                <div class="dialog__columns">
                    <label class="dialog__field">
                        <span class="dialog__label">"Nombre Completo"</span>
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__field">
                        <span class="dialog__label">"Sucursal Asignada"</span>
                        <select
                            class="dialog__input"
                            on:change=move |ev| branch.set(event_target_value(&ev))
                            prop:value=move || branch.get()
                        >
                            {STAFF_BRANCHES
                                .iter()
                                .map(|b| view! { <option value=*b>{*b}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                </div>
                <label class="dialog__field">
                    <span class="dialog__label">"Asignar Rol"</span>
                    <select
                        class="dialog__input"
                        on:change=move |ev| {
                            role.set(StaffRole::from_label(&event_target_value(&ev)));
                        }
                        prop:value=move || role.get().label()
                    >
                        {StaffRole::ALL
                            .into_iter()
                            .map(|r| view! { <option value=r.label()>{r.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <div class="dialog__field">
                    <span class="dialog__label">"Permisos de Seguridad"</span>
                    <div class="dialog__checks">
                        <label class="dialog__check">
                            <input
                                type="checkbox"
                                prop:checked=move || discounts.get()
                                on:change=move |ev| discounts.set(event_target_checked(&ev))
                            />
                            <span>
                                "¿Puede hacer descuentos?"
                                <small>"Permitir aplicar descuentos a ventas"</small>
                            </span>
                        </label>
                        <label class="dialog__check">
                            <input
                                type="checkbox"
                                prop:checked=move || other_branches.get()
                                on:change=move |ev| {
                                    other_branches.set(event_target_checked(&ev));
                                }
                            />
                            <span>
                                "¿Puede ver existencias de otras tiendas?"
                                <small>"Ver inventario de todas las sucursales"</small>
                            </span>
                        </label>
                        <label class="dialog__check">
                            <input
                                type="checkbox"
                                prop:checked=move || cancel_sales.get()
                                on:change=move |ev| cancel_sales.set(event_target_checked(&ev))
                            />
                            <span>
                                "¿Puede cancelar ventas?"
                                <small>"Anular transacciones ya registradas"</small>
                            </span>
                        </label>
                    </div>
                </div>
                <label class="dialog__field">
                    <span class="dialog__label">"Comisión por Venta (%)"</span>
                    <input
                        class="dialog__input"
                        type="number"
                        step="0.1"
                        min="0"
                        max="100"
                        prop:value=move || commission.get()
                        on:input=move |ev| commission.set(event_target_value(&ev))
                    />
                    <span class="dialog__hint">
                        "Porcentaje que gana el empleado por cada venta realizada"
                    </span>
                </label>
                <label class="dialog__field">
                    <span class="dialog__label">"Estado del Usuario"</span>
                    <select
                        class="dialog__input"
                        on:change=move |ev| active.set(event_target_value(&ev) == "active")
                        prop:value=move || if active.get() { "active" } else { "inactive" }
                    >
                        <option value="active">"Activo"</option>
                        <option value="inactive">"Inactivo"</option>
                    </select>
                </label>
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
