//! Console chrome: top bar with the user menu and the navigation rail.

use leptos::prelude::*;

use crate::net::types::User;
use crate::routes::{paths, permissions, roles};
use crate::state::auth::AuthState;

/// Wraps every protected screen. The rail mirrors the route policy but is
/// cosmetic; the guard is what actually enforces access.
#[component]
pub fn ConsoleLayout(children: Children) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let display_name =
        move || auth.with(|s| s.user.as_ref().map(User::display_name).unwrap_or_default());
    let is_student = move || auth.with(|s| s.role_name() == Some(roles::ESTUDIANTE));

    let on_logout = move |_| {
        auth.update(AuthState::apply_logout_started);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                auth.update(AuthState::apply_logout);
                navigate(paths::LOGIN, leptos_router::NavigateOptions::default());
            });
        }
    };

    view! {
        <div class="console">
            <header class="console__topbar">
                <span class="console__title">"Sistema Universitario"</span>
                <div class="console__user">
                    <a href=paths::PROFILE class="console__profile">{display_name}</a>
                    <button class="btn" on:click=on_logout>"Cerrar sesión"</button>
                </div>
            </header>
            <div class="console__body">
                <nav class="console__nav">
                    <Show when=move || !is_student()>
                        <a href=paths::DASHBOARD>"Dashboard"</a>
                    </Show>
                    <Show when=move || {
                        auth.with(|s| s.has_permission(permissions::USERS_VIEW)) && !is_student()
                    }>
                        <a href=paths::USERS>"Usuarios"</a>
                    </Show>
                    <Show when=move || {
                        auth.with(|s| s.has_permission(permissions::COURSES_VIEW)) || is_student()
                    }>
                        <a href=paths::COURSES>"Cursos"</a>
                    </Show>
                    <Show when=move || {
                        auth.with(|s| s.has_permission(permissions::ENROLLMENTS_VIEW))
                            && !is_student()
                    }>
                        <a href=paths::STUDENTS>"Estudiantes"</a>
                    </Show>
                    <a href=paths::DOCUMENTS>"Documentos"</a>
                </nav>
                <main class="console__content">{children()}</main>
            </div>
        </div>
    }
}
