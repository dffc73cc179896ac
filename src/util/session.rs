//! localStorage persistence for the session token and cached profile.
//!
//! Token and user are written and removed together so no reader ever sees
//! one without the other. A corrupt cached blob reads as absent. Requires a
//! browser environment; under SSR reads return `None` and writes are
//! no-ops.

use crate::net::types::User;

#[cfg(feature = "hydrate")]
const TOKEN_KEY: &str = "campus_token";
#[cfg(feature = "hydrate")]
const USER_KEY: &str = "campus_user";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Persist the session. The profile is serialized first; if that fails
/// nothing is written, preserving the token-and-user-together invariant.
pub fn save(token: &str, user: &User) {
    #[cfg(feature = "hydrate")]
    {
        let Ok(blob) = serde_json::to_string(user) else {
            return;
        };
        if let Some(storage) = storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
            let _ = storage.set_item(USER_KEY, &blob);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user);
    }
}

/// Overwrite only the cached profile; used by the startup refresh.
pub fn save_user(user: &User) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            if let Ok(blob) = serde_json::to_string(user) {
                let _ = storage.set_item(USER_KEY, &blob);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
    }
}

/// Remove both keys; idempotent.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}

/// Read the stored bearer token.
pub fn read_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        storage()?.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Read the cached profile. Corrupt JSON reads as absent.
pub fn read_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let blob = storage()?.get_item(USER_KEY).ok().flatten()?;
        serde_json::from_str(&blob).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
