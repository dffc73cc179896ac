//! Full-page loading placeholder.

use leptos::prelude::*;

/// Shown while the cached session is being restored.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    view! {
        <div class="loading-screen">
            <p>"Cargando..."</p>
        </div>
    }
}
