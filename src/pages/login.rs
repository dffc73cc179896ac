//! Login page: credential form, inline errors, return-target handling.

use leptos::prelude::*;

use crate::net::api;
use crate::state::auth::{AuthPhase, AuthState};

/// Username/password form. Submit is disabled while a login is in flight;
/// success navigates to the `from` query target when present, else to `/`
/// for the role redirect.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    #[cfg(feature = "hydrate")]
    let query = leptos_router::hooks::use_query_map();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let busy = move || auth.with(|s| s.phase == AuthPhase::Authenticating);
    let error = move || auth.with(|s| s.error.clone());

    let submit = Callback::new(move |()| {
        let user = username.get();
        let pass = password.get();
        if let Err(err) = api::validate_credentials(&user, &pass) {
            auth.update(|s| s.apply_login_failure(err.to_string()));
            return;
        }
        auth.update(AuthState::apply_login_started);
        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            // Only same-origin paths are honored as return targets.
            let target = query
                .with_untracked(|q| q.get("from"))
                .filter(|from| from.starts_with('/'))
                .unwrap_or_else(|| crate::routes::paths::HOME.to_owned());
            leptos::task::spawn_local(async move {
                match api::login(&user, &pass).await {
                    Ok(profile) => {
                        auth.update(|s| s.apply_login_success(profile));
                        navigate(
                            &target,
                            leptos_router::NavigateOptions {
                                replace: true,
                                ..Default::default()
                            },
                        );
                    }
                    Err(err) => auth.update(|s| s.apply_login_failure(err.to_string())),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (user, pass);
        }
    });

    view! {
        <div class="login-page">
            <form
                class="login-card"
                on:submit=move |ev| {
                    ev.prevent_default();
                    submit.run(());
                }
            >
                <h1>"Sistema Universitario"</h1>
                <Show when=move || error().is_some()>
                    <p class="login-card__error">{move || error().unwrap_or_default()}</p>
                </Show>
                <label class="login-card__label">
                    "Usuario"
                    <input
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-card__label">
                    "Contraseña"
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" prop:disabled=busy>
                    {move || if busy() { "Ingresando..." } else { "Ingresar" }}
                </button>
            </form>
        </div>
    }
}
