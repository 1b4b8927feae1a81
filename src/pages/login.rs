//! Role-selection screen, the app's only "authentication".

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::state::session::{Role, Session};

/// The four profile cards, in display order.
pub fn role_cards() -> [(Role, &'static str, &'static str, &'static str); 4] {
    [
        (Role::SuperAdmin, "👑", "Super Admin", "Control maestro del SaaS"),
        (Role::Dueno, "📊", "Dueño", "Acceso total al sistema"),
        (Role::Encargado, "🛒", "Encargado", "Punto de venta e inventario"),
        (Role::Escaner, "📱", "Escáner", "Verificación de precios"),
    ]
}

/// Login page. Picking a card signs the role in with no credential
/// check and mounts that role's layout.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-card__icon">"🏪"</div>
                <h1>"Sistema de Punto de Venta"</h1>
                <p class="login-card__subtitle">"Selecciona tu perfil para continuar"</p>
                <div class="login-card__roles">
                    {role_cards()
                        .into_iter()
                        .map(|(role, icon, title, description)| {
                            view! {
                                <button
                                    class="role-card"
                                    on:click=move |_| session.update(|s| s.sign_in(role))
                                >
                                    <span class="role-card__icon">{icon}</span>
                                    <span class="role-card__title">{title}</span>
                                    <span class="role-card__description">{description}</span>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
                <p class="login-card__footer">"Sistema POS v1.0"</p>
            </div>
        </div>
    }
}
