//! Root application component: HTML shell, session context, role gate.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::pages::{
    login::LoginPage, owner::OwnerLayout, pos::PosLayout, scanner::ScannerLayout,
    superadmin::SuperAdminLayout,
};
use crate::state::session::{Role, Session};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared session signal and mounts whichever role layout is
/// signed in. The whole app lives on a single route; signing in or out
/// swaps the entire subtree rather than navigating.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/mostrador.css"/>
        <Title text="Sistema POS"/>

        <Router>
            <Routes fallback=|| view! { <UnderConstruction/> }>
                <Route path=StaticSegment("") view=RoleGate/>
            </Routes>
        </Router>
    }
}

/// Mounts the layout for the signed-in role, or the login screen.
///
/// Switching roles (or signing out) unmounts the previous layout and all
/// screen state under it.
#[component]
fn RoleGate() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();

    move || match session.get().role {
        None => view! { <LoginPage/> }.into_any(),
        Some(Role::SuperAdmin) => view! { <SuperAdminLayout/> }.into_any(),
        Some(Role::Dueno) => view! { <OwnerLayout/> }.into_any(),
        Some(Role::Encargado) => view! { <PosLayout/> }.into_any(),
        Some(Role::Escaner) => view! { <ScannerLayout/> }.into_any(),
    }
}

/// Fallback for URLs outside the single-page shell.
#[component]
fn UnderConstruction() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();

    let back_to_login = move |_| {
        session.update(|s| s.sign_out());
        navigate("/", NavigateOptions::default());
    };

    view! {
        <div class="construction">
            <div class="construction__card">
                <h1>"Área en Desarrollo"</h1>
                <p>"Esta sección está en construcción."</p>
                <button class="btn btn--primary" on:click=back_to_login>
                    "Volver al Login"
                </button>
            </div>
        </div>
    }
}
