//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single `RwSignal<AuthState>` is provided via context at the app root;
//! route guards and identity-aware components read it, and the operations
//! here are the only writers. Every state change that must survive reload
//! goes through `util::session` in the same call.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::types::User;
use crate::util::session;

/// Authentication state tracking the session user, token, and whether the
/// initial storage hydrate has completed.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl AuthState {
    /// Build state from the two persisted entries. Absence of either means
    /// unauthenticated.
    #[must_use]
    pub fn from_session(token: Option<String>, user: Option<User>) -> Self {
        match (token, user) {
            (Some(token), Some(user)) => Self {
                user: Some(user),
                token: Some(token),
                loading: false,
            },
            _ => Self::default(),
        }
    }

    /// Whether a session user is present.
    #[must_use]
    pub fn authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// The session user's role, defaulting to `"user"`.
    #[must_use]
    pub fn role(&self) -> &str {
        self.user.as_ref().map_or("user", |u| u.role.as_str())
    }
}

/// Whether a route guard should redirect to `/login`.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && state.user.is_none()
}

/// Dashboard route for a role string.
pub fn dashboard_path(role: &str) -> &'static str {
    match role {
        "admin" => "/dashboard/admin",
        "prestataire" => "/dashboard/provider",
        _ => "/dashboard/user",
    }
}

/// Populate `auth` from the persisted session entries.
pub fn hydrate_session(auth: RwSignal<AuthState>) {
    let state = AuthState::from_session(session::load_token(), session::load_user());
    auth.set(state);
}

/// Record a fresh login: set state and persist both entries.
pub fn establish(auth: RwSignal<AuthState>, token: String, user: User) {
    session::save_session(&token, &user);
    auth.set(AuthState {
        user: Some(user),
        token: Some(token),
        loading: false,
    });
}

/// Replace the session user record (e.g. after a server-side role change)
/// and re-persist it.
pub fn update_user(auth: RwSignal<AuthState>, user: User) {
    session::save_user(&user);
    auth.update(|state| state.user = Some(user));
}

/// Clear the session: storage entries and in-memory state.
pub fn sign_out(auth: RwSignal<AuthState>) {
    session::clear_session();
    auth.set(AuthState::default());
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });
}
