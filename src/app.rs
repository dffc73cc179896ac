//! Root application component: context, routing, session bootstrap.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::guard::RouteGuard;
use crate::components::layout::ConsoleLayout;
use crate::pages::{
    courses::CoursesPage, dashboard::DashboardPage, documents::DocumentsPage, home::HomePage,
    login::LoginPage, not_found::NotFoundPage, profile::ProfilePage, students::StudentsPage,
    unauthorized::UnauthorizedPage, users::UsersPage,
};
use crate::state::auth::AuthState;

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
/// Provides the auth context, restores the cached session, installs the
/// session-invalidated listener, and declares all routes.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    init_session(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/campus-console.css"/>
        <Title text="Sistema Universitario"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                <Route
                    path=StaticSegment("")
                    view=|| view! { <RouteGuard><HomePage/></RouteGuard> }
                />
                <Route
                    path=StaticSegment("dashboard")
                    view=|| {
                        view! {
                            <RouteGuard>
                                <ConsoleLayout>
                                    <DashboardPage/>
                                </ConsoleLayout>
                            </RouteGuard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("profile")
                    view=|| {
                        view! {
                            <RouteGuard>
                                <ConsoleLayout>
                                    <ProfilePage/>
                                </ConsoleLayout>
                            </RouteGuard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("users")
                    view=|| {
                        view! {
                            <RouteGuard>
                                <ConsoleLayout>
                                    <UsersPage/>
                                </ConsoleLayout>
                            </RouteGuard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("courses")
                    view=|| {
                        view! {
                            <RouteGuard>
                                <ConsoleLayout>
                                    <CoursesPage/>
                                </ConsoleLayout>
                            </RouteGuard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("students")
                    view=|| {
                        view! {
                            <RouteGuard>
                                <ConsoleLayout>
                                    <StudentsPage/>
                                </ConsoleLayout>
                            </RouteGuard>
                        }
                    }
                />
                <Route
                    path=StaticSegment("documents")
                    view=|| {
                        view! {
                            <RouteGuard>
                                <ConsoleLayout>
                                    <DocumentsPage/>
                                </ConsoleLayout>
                            </RouteGuard>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}

/// Restore the cached session and start the invalidation listener.
///
/// The listener goes in first so a 401 from the startup refresh is already
/// caught. A token without a readable cached profile is treated as no
/// session at all, keeping token and user paired.
fn init_session(auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        use futures::StreamExt;

        use crate::net::api;
        use crate::util::session;

        let mut invalidated = api::install_session_listener();
        leptos::task::spawn_local(async move {
            while invalidated.next().await.is_some() {
                leptos::logging::warn!("session rejected by server, signing out");
                session::clear();
                auth.update(AuthState::apply_forced_logout);
            }
        });

        if api::has_cached_token() {
            match session::read_user() {
                Some(cached) => {
                    auth.update(|s| s.apply_restore(cached));
                    let started_epoch = auth.with_untracked(|s| s.epoch);
                    leptos::task::spawn_local(async move {
                        match api::fetch_current_user().await {
                            Ok(fresh) => auth.update(|s| s.apply_refresh(fresh, started_epoch)),
                            Err(err) => {
                                leptos::logging::warn!("profile refresh failed: {err}");
                            }
                        }
                    });
                }
                None => {
                    session::clear();
                    auth.update(AuthState::apply_no_session);
                }
            }
        } else {
            auth.update(AuthState::apply_no_session);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = auth;
    }
}
