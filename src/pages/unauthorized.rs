//! Screen shown when the guard denies an authenticated user.

use leptos::prelude::*;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="message-page">
            <h1>"Acceso denegado"</h1>
            <p>"No tiene permisos para acceder a esta página."</p>
            <a href="/">"Volver al inicio"</a>
        </div>
    }
}
