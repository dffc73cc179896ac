use super::*;

use crate::net::types::{Role, User};
use crate::routes::{permissions, roles};

fn user(role: &str, perms: &[&str]) -> User {
    User {
        id: 3,
        username: "mgarcia".to_owned(),
        role: Role {
            id: 2,
            name: role.to_owned(),
        },
        permissions: perms.iter().map(|p| (*p).to_owned()).collect(),
        ..User::default()
    }
}

fn signed_in(role: &str, perms: &[&str]) -> AuthState {
    let mut state = AuthState::default();
    state.apply_restore(user(role, perms));
    state
}

fn requirement(permission: Option<&'static str>, allowed: &'static [&'static str]) -> RouteRequirement {
    RouteRequirement {
        permission,
        roles: allowed,
    }
}

// =============================================================
// Decision order
// =============================================================

#[test]
fn initializing_renders_loading_not_a_redirect() {
    let state = AuthState::default();
    let req = requirement(Some(permissions::USERS_VIEW), &[]);
    assert_eq!(decide(&state, &req, "/users"), Decision::Loading);
}

#[test]
fn anonymous_goes_to_login_with_the_requested_path() {
    let mut state = AuthState::default();
    state.apply_no_session();
    let decision = decide(&state, &RouteRequirement::default(), "/dashboard");
    assert_eq!(
        decision,
        Decision::ToLogin {
            from: "/dashboard".to_owned()
        }
    );
}

#[test]
fn authenticating_still_goes_to_login() {
    let mut state = AuthState::default();
    state.apply_no_session();
    state.apply_login_started();
    let decision = decide(&state, &RouteRequirement::default(), "/profile");
    assert!(matches!(decision, Decision::ToLogin { .. }));
}

#[test]
fn missing_permission_goes_to_unauthorized() {
    let state = signed_in(roles::ADMINISTRATIVO, &[permissions::COURSES_VIEW]);
    let req = requirement(Some(permissions::USERS_VIEW), &[]);
    assert_eq!(decide(&state, &req, "/users"), Decision::ToUnauthorized);
}

#[test]
fn student_with_course_permission_cannot_open_users() {
    // Authenticated but unauthorized: unauthorized screen, never the
    // login form.
    let state = signed_in(roles::ESTUDIANTE, &[permissions::COURSES_VIEW]);
    let req = requirement(Some(permissions::USERS_VIEW), &[]);
    assert_eq!(decide(&state, &req, "/users"), Decision::ToUnauthorized);
}

#[test]
fn role_set_excludes_roles_outside_it() {
    let state = signed_in(roles::ESTUDIANTE, &[]);
    let req = requirement(None, &[roles::ADMIN, roles::PROFESOR]);
    assert_eq!(decide(&state, &req, "/dashboard"), Decision::ToUnauthorized);
}

#[test]
fn role_set_admits_listed_roles() {
    let state = signed_in(roles::PROFESOR, &[]);
    let req = requirement(None, &[roles::ADMIN, roles::PROFESOR]);
    assert_eq!(decide(&state, &req, "/dashboard"), Decision::Allow);
}

#[test]
fn open_requirement_admits_any_authenticated_user() {
    let state = signed_in(roles::ESTUDIANTE, &[]);
    assert_eq!(
        decide(&state, &RouteRequirement::default(), "/documents"),
        Decision::Allow
    );
}

#[test]
fn permission_and_role_must_both_hold() {
    let state = signed_in(roles::ADMIN, &[permissions::USERS_VIEW]);
    let req = requirement(Some(permissions::USERS_VIEW), &[roles::PROFESOR]);
    assert_eq!(decide(&state, &req, "/users"), Decision::ToUnauthorized);
}

// =============================================================
// Return-target encoding
// =============================================================

#[test]
fn plain_paths_pass_through() {
    assert_eq!(encode_from("/dashboard"), "/dashboard");
}

#[test]
fn query_breaking_characters_are_encoded() {
    assert_eq!(encode_from("/users?page=2"), "/users%3Fpage=2");
    assert_eq!(encode_from("/a&b"), "/a%26b");
    assert_eq!(encode_from("/a#b"), "/a%23b");
    assert_eq!(encode_from("/a%b"), "/a%25b");
}
