//! Auth gateway and request plumbing for the campus backend.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`, with the bearer token
//! read from the session store as each request is built. Server-side (SSR):
//! stubs returning `ApiError::Network` since the console only talks to the
//! backend from the browser.
//!
//! ERROR HANDLING
//! ==============
//! A 401/403 on any authenticated call pushes `SessionInvalidated` onto the
//! channel installed at mount before the error reaches the caller; the app
//! listener owns the cleanup and navigation. Login failures never touch
//! that channel: a rejected password is not an expired session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::User;
#[cfg(feature = "hydrate")]
use super::types::{LoginRequest, LoginResponse};
use crate::util::session;

/// Backend base path, overridable at compile time.
pub const API_BASE: &str = match option_env!("CAMPUS_API_URL") {
    Some(base) => base,
    None => "/api",
};

/// Error produced by the gateway and the entity clients.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Input rejected before any network round-trip.
    #[error("{0}")]
    Validation(String),
    /// The backend answered with a non-success status.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The request never produced a response.
    #[error("Error de conexión: {0}")]
    Network(String),
}

impl ApiError {
    /// Whether this error came from a 401 or 403 response.
    pub fn is_auth_failure(&self) -> bool {
        matches!(
            self,
            ApiError::Server {
                status: 401 | 403,
                ..
            }
        )
    }
}

/// Marker event emitted when the backend rejects the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionInvalidated;

/// Reject empty credentials before any network call.
///
/// # Errors
///
/// `ApiError::Validation` with the form message when either field is blank.
pub fn validate_credentials(username: &str, password: &str) -> Result<(), ApiError> {
    if username.trim().is_empty() || password.trim().is_empty() {
        return Err(ApiError::Validation(
            "Por favor ingrese usuario y contraseña".to_owned(),
        ));
    }
    Ok(())
}

/// Extract the backend's `{message}` from an error body, falling back to a
/// generic message when the body is absent or unparsable.
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(serde_json::Value::as_str)
                .map(str::to_owned)
        })
        .unwrap_or_else(|| "Error en el servidor".to_owned())
}

#[cfg(feature = "hydrate")]
thread_local! {
    static INVALIDATED_TX: std::cell::RefCell<
        Option<futures::channel::mpsc::UnboundedSender<SessionInvalidated>>,
    > = const { std::cell::RefCell::new(None) };
}

/// Install the session-invalidated channel and return its receiving end.
/// Called once at app mount; a previously installed sender is replaced.
#[cfg(feature = "hydrate")]
pub fn install_session_listener() -> futures::channel::mpsc::UnboundedReceiver<SessionInvalidated> {
    let (tx, rx) = futures::channel::mpsc::unbounded();
    INVALIDATED_TX.with(|cell| {
        *cell.borrow_mut() = Some(tx);
    });
    rx
}

#[cfg(feature = "hydrate")]
fn notify_session_invalidated() {
    INVALIDATED_TX.with(|cell| {
        if let Some(tx) = cell.borrow().as_ref() {
            let _ = tx.unbounded_send(SessionInvalidated);
        }
    });
}

#[cfg(feature = "hydrate")]
fn bearer() -> Option<String> {
    session::read_token().map(|token| format!("Bearer {token}"))
}

/// Convert a non-success response into `ApiError::Server`, notifying the
/// invalidation channel on 401/403.
#[cfg(feature = "hydrate")]
async fn check(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    if status == 401 || status == 403 {
        notify_session_invalidated();
    }
    Err(ApiError::Server {
        status,
        message: error_message(&body),
    })
}

/// GET an authenticated JSON resource.
///
/// # Errors
///
/// `Network` on transport failure, `Server` on a non-success status.
pub async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::get(&format!("{API_BASE}{path}"));
        if let Some(auth) = bearer() {
            req = req.header("Authorization", &auth);
        }
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = check(resp).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// POST an authenticated JSON body.
///
/// # Errors
///
/// `Network` on transport failure, `Server` on a non-success status.
pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::post(&format!("{API_BASE}{path}"));
        if let Some(auth) = bearer() {
            req = req.header("Authorization", &auth);
        }
        let resp = req
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = check(resp).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// PUT an authenticated JSON body.
///
/// # Errors
///
/// `Network` on transport failure, `Server` on a non-success status.
pub async fn put_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::put(&format!("{API_BASE}{path}"));
        if let Some(auth) = bearer() {
            req = req.header("Authorization", &auth);
        }
        let resp = req
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let resp = check(resp).await?;
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (path, body);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// DELETE an authenticated resource, discarding any response body.
///
/// # Errors
///
/// `Network` on transport failure, `Server` on a non-success status.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::delete(&format!("{API_BASE}{path}"));
        if let Some(auth) = bearer() {
            req = req.header("Authorization", &auth);
        }
        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check(resp).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = path;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Authenticate against the backend and persist the session.
///
/// A 401 here is a rejected password, not an expired session, so login
/// bypasses the invalidation channel entirely.
///
/// # Errors
///
/// `Validation` for empty input, `Server` with the backend's message on
/// rejection, `Network` on transport failure. Nothing is persisted on any
/// error path.
pub async fn login(username: &str, password: &str) -> Result<User, ApiError> {
    validate_credentials(username, password)?;
    #[cfg(feature = "hydrate")]
    {
        let body = LoginRequest {
            username: username.trim(),
            password,
        };
        let resp = gloo_net::http::Request::post(&format!("{API_BASE}/auth/login"))
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ApiError::Server {
                status,
                message: error_message(&body),
            });
        }
        let payload: LoginResponse = resp
            .json()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        session::save(&payload.token, &payload.user);
        Ok(payload.user)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Best-effort server-side logout. The local session is cleared
/// unconditionally afterwards; failures are logged and swallowed.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::post(&format!("{API_BASE}/auth/logout"));
        if let Some(auth) = bearer() {
            req = req.header("Authorization", &auth);
        }
        match req.send().await {
            Ok(resp) if !resp.ok() => {
                leptos::logging::warn!("logout rejected by server: {}", resp.status());
            }
            Err(err) => {
                leptos::logging::warn!("logout request failed: {err}");
            }
            Ok(_) => {}
        }
    }
    session::clear();
}

/// Refresh the current profile from `/users/me`, updating the cached copy.
///
/// # Errors
///
/// Propagates the gateway error; the cached profile is untouched on
/// failure.
pub async fn fetch_current_user() -> Result<User, ApiError> {
    let user: User = get_json("/users/me").await?;
    session::save_user(&user);
    Ok(user)
}

/// Whether the session store currently holds a token.
pub fn has_cached_token() -> bool {
    session::read_token().is_some()
}
