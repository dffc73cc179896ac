//! Read-only profile screen for the signed-in user.

use leptos::prelude::*;

use crate::state::auth::AuthState;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="profile-page">
            <h1>"Mi Perfil"</h1>
            {move || {
                auth.with(|s| s.user.clone())
                    .map(|user| {
                        view! {
                            <dl class="profile-page__fields">
                                <dt>"Nombre"</dt>
                                <dd>{user.display_name()}</dd>
                                <dt>"Usuario"</dt>
                                <dd>{user.username.clone()}</dd>
                                <dt>"Email"</dt>
                                <dd>{user.email.clone()}</dd>
                                <dt>"Rol"</dt>
                                <dd>{user.role.name.clone()}</dd>
                                <dt>"Último acceso"</dt>
                                <dd>
                                    {user.last_access.clone().unwrap_or_else(|| "-".to_owned())}
                                </dd>
                            </dl>
                        }
                    })
            }}
        </div>
    }
}
