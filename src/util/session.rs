//! Browser localStorage persistence for the auth session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session survives reloads as two keyed entries: the bearer token and
//! the serialized user record. Absence of either entry on startup means
//! unauthenticated. All storage access is hydrate-only; on the server every
//! read returns `None` and every write is a no-op.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// localStorage key holding the bearer token.
pub const TOKEN_KEY: &str = "prestalink_token";
/// localStorage key holding the serialized user record.
pub const USER_KEY: &str = "prestalink_user";

/// Serialize a user record for storage.
pub fn encode_user(user: &User) -> Option<String> {
    serde_json::to_string(user).ok()
}

/// Deserialize a stored user record. Returns `None` on stale/corrupt data.
pub fn decode_user(raw: &str) -> Option<User> {
    serde_json::from_str(raw).ok()
}

/// Read the persisted bearer token.
pub fn load_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Read the persisted user record.
pub fn load_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        let raw = storage.get_item(USER_KEY).ok().flatten()?;
        decode_user(&raw)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Persist both session entries.
pub fn save_session(token: &str, user: &User) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        let _ = storage.set_item(TOKEN_KEY, token);
        if let Some(raw) = encode_user(user) {
            let _ = storage.set_item(USER_KEY, &raw);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (token, user);
    }
}

/// Re-persist the user record only (token unchanged).
pub fn save_user(user: &User) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) else {
            return;
        };
        if let Some(raw) = encode_user(user) {
            let _ = storage.set_item(USER_KEY, &raw);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user;
    }
}

/// Remove both session entries.
pub fn clear_session() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
    }
}
