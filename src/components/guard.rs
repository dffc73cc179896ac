//! Route guard evaluating the authorization table per navigation.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::components::loading::LoadingScreen;
use crate::routes::{self, RouteRequirement};
use crate::state::auth::AuthState;

/// Outcome of evaluating a requirement against the current auth state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Session restore still running; render a placeholder, not a
    /// redirect.
    Loading,
    /// Not signed in; go to login carrying the requested path.
    ToLogin { from: String },
    /// Signed in but not allowed here.
    ToUnauthorized,
    Allow,
}

/// First-match-wins authorization decision. Pure; the component wires it
/// to the router.
pub fn decide(state: &AuthState, requirement: &RouteRequirement, path: &str) -> Decision {
    if state.is_initializing() {
        return Decision::Loading;
    }
    if !state.is_authenticated() {
        return Decision::ToLogin {
            from: path.to_owned(),
        };
    }
    if let Some(permission) = requirement.permission {
        if !state.has_permission(permission) {
            return Decision::ToUnauthorized;
        }
    }
    if !requirement.roles.is_empty() {
        let held = state
            .role_name()
            .is_some_and(|role| requirement.roles.contains(&role));
        if !held {
            return Decision::ToUnauthorized;
        }
    }
    Decision::Allow
}

/// Percent-encode the characters that would break `from` as a query value.
pub fn encode_from(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    for ch in path.chars() {
        match ch {
            '%' => out.push_str("%25"),
            '&' => out.push_str("%26"),
            '?' => out.push_str("%3F"),
            '#' => out.push_str("%23"),
            _ => out.push(ch),
        }
    }
    out
}

/// Wraps a protected page. Re-evaluates from the current `AuthState`
/// snapshot on every navigation and on every auth change; performs no I/O.
#[component]
pub fn RouteGuard(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();

    move || {
        let path = location.pathname.get();
        let requirement = routes::requirement_for(&path).unwrap_or_default();
        match auth.with(|state| decide(state, &requirement, &path)) {
            Decision::Loading => view! { <LoadingScreen/> }.into_any(),
            Decision::ToLogin { from } => {
                let target = format!("{}?from={}", routes::paths::LOGIN, encode_from(&from));
                view! { <Redirect path=target/> }.into_any()
            }
            Decision::ToUnauthorized => {
                view! { <Redirect path=routes::paths::UNAUTHORIZED/> }.into_any()
            }
            Decision::Allow => children().into_any(),
        }
    }
}
