#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Lifecycle phase of the session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    /// Startup: the cached session has not been inspected yet.
    #[default]
    Initializing,
    /// No session; the login form is the only way forward.
    Anonymous,
    /// A login request is in flight.
    Authenticating,
    /// Signed in with a (possibly cached) profile.
    Authenticated,
    /// A logout request is in flight.
    LoggingOut,
}

/// Authentication state shared via context as `RwSignal<AuthState>`.
///
/// All transitions are pure methods so the machine is testable without a
/// browser; `app.rs` and the pages own the side effects (storage, network,
/// navigation) around them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub phase: AuthPhase,
    pub user: Option<User>,
    /// Last login error, surfaced inline by the login form.
    pub error: Option<String>,
    /// Bumped on every login and logout; async work started under an older
    /// epoch is discarded when it resolves.
    pub epoch: u64,
}

impl AuthState {
    pub fn is_initializing(&self) -> bool {
        self.phase == AuthPhase::Initializing
    }

    pub fn is_authenticated(&self) -> bool {
        self.phase == AuthPhase::Authenticated
    }

    /// Role name of the signed-in user; `None` in every other phase.
    pub fn role_name(&self) -> Option<&str> {
        if self.phase != AuthPhase::Authenticated {
            return None;
        }
        self.user.as_ref().map(|u| u.role.name.as_str())
    }

    /// Fail-closed permission check: only an `Authenticated` user holding
    /// the permission string passes. Every other phase, including
    /// `Initializing`, answers `false`.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.phase == AuthPhase::Authenticated
            && self
                .user
                .as_ref()
                .is_some_and(|u| u.has_permission(permission))
    }

    /// Startup found no cached token.
    pub fn apply_no_session(&mut self) {
        self.phase = AuthPhase::Anonymous;
        self.user = None;
        self.error = None;
    }

    /// Startup found a cached session: authenticated optimistically while
    /// the profile refresh runs.
    pub fn apply_restore(&mut self, cached: User) {
        self.phase = AuthPhase::Authenticated;
        self.user = Some(cached);
        self.error = None;
    }

    /// Replace the profile with a fresh copy, unless the session has moved
    /// on since the refresh started.
    pub fn apply_refresh(&mut self, fresh: User, started_epoch: u64) {
        if self.epoch != started_epoch || self.phase != AuthPhase::Authenticated {
            return;
        }
        self.user = Some(fresh);
    }

    pub fn apply_login_started(&mut self) {
        self.phase = AuthPhase::Authenticating;
        self.error = None;
    }

    pub fn apply_login_success(&mut self, user: User) {
        self.phase = AuthPhase::Authenticated;
        self.user = Some(user);
        self.error = None;
        self.epoch += 1;
    }

    pub fn apply_login_failure(&mut self, message: String) {
        self.phase = AuthPhase::Anonymous;
        self.user = None;
        self.error = Some(message);
    }

    pub fn apply_logout_started(&mut self) {
        self.phase = AuthPhase::LoggingOut;
    }

    /// Logout completion; never fails.
    pub fn apply_logout(&mut self) {
        self.phase = AuthPhase::Anonymous;
        self.user = None;
        self.error = None;
        self.epoch += 1;
    }

    /// The backend rejected the session (401/403 on any authenticated
    /// call).
    pub fn apply_forced_logout(&mut self) {
        self.apply_logout();
    }
}
