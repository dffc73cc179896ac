//! Role-based landing redirect for `/`.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::routes;
use crate::state::auth::AuthState;

/// Sends the signed-in user to their landing page: estudiantes to the
/// course list, everyone else to the dashboard. The guard has already
/// ensured the user is authenticated.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    move || {
        let target = auth
            .with(|s| s.role_name().map(routes::home_for_role))
            .unwrap_or(routes::paths::DASHBOARD);
        view! { <Redirect path=target/> }
    }
}
