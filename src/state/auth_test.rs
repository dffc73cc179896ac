use super::*;

use crate::net::types::Role;

fn sample_user(role: &str, permissions: &[&str]) -> User {
    User {
        id: 7,
        username: "jperez".to_owned(),
        first_name: "Juan".to_owned(),
        last_name: "Pérez".to_owned(),
        email: "jperez@campus.edu".to_owned(),
        role: Role {
            id: 1,
            name: role.to_owned(),
        },
        permissions: permissions.iter().map(|p| (*p).to_owned()).collect(),
        last_access: None,
    }
}

fn authenticated(role: &str, permissions: &[&str]) -> AuthState {
    let mut state = AuthState::default();
    state.apply_restore(sample_user(role, permissions));
    state
}

// =============================================================
// Startup
// =============================================================

#[test]
fn default_is_initializing() {
    let state = AuthState::default();
    assert_eq!(state.phase, AuthPhase::Initializing);
    assert!(state.user.is_none());
    assert_eq!(state.epoch, 0);
}

#[test]
fn no_session_goes_anonymous() {
    let mut state = AuthState::default();
    state.apply_no_session();
    assert_eq!(state.phase, AuthPhase::Anonymous);
    assert!(state.user.is_none());
}

#[test]
fn restore_is_optimistically_authenticated() {
    let state = authenticated("admin", &[]);
    assert!(state.is_authenticated());
    assert_eq!(state.user.as_ref().map(|u| u.id), Some(7));
}

// =============================================================
// Profile refresh and the session epoch
// =============================================================

#[test]
fn refresh_replaces_profile_when_epoch_matches() {
    let mut state = authenticated("admin", &[]);
    let started = state.epoch;

    let mut fresh = sample_user("admin", &["usuarios.ver"]);
    fresh.first_name = "Juana".to_owned();
    state.apply_refresh(fresh, started);

    assert_eq!(state.user.as_ref().map(|u| u.first_name.as_str()), Some("Juana"));
    assert!(state.has_permission("usuarios.ver"));
}

#[test]
fn refresh_discarded_after_logout() {
    let mut state = authenticated("admin", &[]);
    let started = state.epoch;

    state.apply_logout();
    state.apply_refresh(sample_user("admin", &[]), started);

    assert_eq!(state.phase, AuthPhase::Anonymous);
    assert!(state.user.is_none());
}

#[test]
fn refresh_discarded_when_session_was_replaced() {
    let mut state = authenticated("admin", &[]);
    let started = state.epoch;

    state.apply_logout();
    state.apply_login_started();
    state.apply_login_success(sample_user("profesor", &[]));

    state.apply_refresh(sample_user("admin", &[]), started);

    assert_eq!(state.role_name(), Some("profesor"));
}

// =============================================================
// Login
// =============================================================

#[test]
fn login_started_is_authenticating_and_clears_error() {
    let mut state = AuthState::default();
    state.apply_no_session();
    state.apply_login_failure("Credenciales inválidas".to_owned());

    state.apply_login_started();

    assert_eq!(state.phase, AuthPhase::Authenticating);
    assert!(state.error.is_none());
}

#[test]
fn login_success_bumps_epoch() {
    let mut state = AuthState::default();
    state.apply_no_session();
    let before = state.epoch;

    state.apply_login_started();
    state.apply_login_success(sample_user("admin", &[]));

    assert!(state.is_authenticated());
    assert_eq!(state.epoch, before + 1);
}

#[test]
fn login_failure_stays_anonymous_with_error() {
    let mut state = AuthState::default();
    state.apply_no_session();
    state.apply_login_started();

    state.apply_login_failure("Credenciales inválidas".to_owned());

    assert_eq!(state.phase, AuthPhase::Anonymous);
    assert!(state.user.is_none());
    assert_eq!(state.error.as_deref(), Some("Credenciales inválidas"));
}

// =============================================================
// Logout
// =============================================================

#[test]
fn logout_clears_user_and_bumps_epoch() {
    let mut state = authenticated("admin", &[]);
    let before = state.epoch;

    state.apply_logout_started();
    assert_eq!(state.phase, AuthPhase::LoggingOut);

    state.apply_logout();
    assert_eq!(state.phase, AuthPhase::Anonymous);
    assert!(state.user.is_none());
    assert_eq!(state.epoch, before + 1);
}

#[test]
fn forced_logout_behaves_like_logout() {
    let mut state = authenticated("estudiante", &[]);
    let before = state.epoch;

    state.apply_forced_logout();

    assert_eq!(state.phase, AuthPhase::Anonymous);
    assert!(state.user.is_none());
    assert_eq!(state.epoch, before + 1);
}

// =============================================================
// Derived checks
// =============================================================

#[test]
fn has_permission_true_only_for_held_string() {
    let state = authenticated("admin", &["usuarios.ver", "cursos.ver"]);
    assert!(state.has_permission("usuarios.ver"));
    assert!(!state.has_permission("inscripciones.ver"));
}

#[test]
fn has_permission_fails_closed_while_initializing() {
    let state = AuthState {
        user: Some(sample_user("admin", &["usuarios.ver"])),
        ..AuthState::default()
    };
    assert_eq!(state.phase, AuthPhase::Initializing);
    assert!(!state.has_permission("usuarios.ver"));
}

#[test]
fn has_permission_fails_closed_while_logging_out() {
    let mut state = authenticated("admin", &["usuarios.ver"]);
    state.apply_logout_started();
    assert!(!state.has_permission("usuarios.ver"));
}

#[test]
fn role_name_only_when_authenticated() {
    let mut state = authenticated("estudiante", &[]);
    assert_eq!(state.role_name(), Some("estudiante"));

    state.apply_logout_started();
    assert_eq!(state.role_name(), None);
}
