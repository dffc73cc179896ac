//! Fallback for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="message-page">
            <h1>"Página no encontrada"</h1>
            <a href="/">"Volver al inicio"</a>
        </div>
    }
}
