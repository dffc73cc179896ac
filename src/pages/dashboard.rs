//! Dashboard with aggregate count cards.

use leptos::prelude::*;

use crate::net::resources;

/// Count cards for users, courses, enrollments, and documents. A failed
/// count renders as a dash instead of blocking the page.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let stats = LocalResource::new(|| resources::fetch_dashboard_stats());

    let card = |label: &'static str, value: Option<usize>| {
        view! {
            <div class="stat-card">
                <span class="stat-card__label">{label}</span>
                <span class="stat-card__value">
                    {value.map_or_else(|| "-".to_owned(), |v| v.to_string())}
                </span>
            </div>
        }
    };

    view! {
        <div class="dashboard-page">
            <h1>"Dashboard"</h1>
            <Suspense fallback=move || view! { <p>"Cargando..."</p> }>
                {move || {
                    stats
                        .get()
                        .map(|s| {
                            view! {
                                <div class="dashboard-page__cards">
                                    {card("Usuarios", s.users)}
                                    {card("Cursos", s.courses)}
                                    {card("Inscripciones", s.enrollments)}
                                    {card("Documentos", s.documents)}
                                </div>
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
