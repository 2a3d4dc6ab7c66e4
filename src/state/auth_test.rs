use super::*;

fn make_user(role: &str) -> User {
    User {
        id: "u-1".to_owned(),
        name: "Alice".to_owned(),
        email: "alice@example.com".to_owned(),
        role: role.to_owned(),
        avatar_url: None,
    }
}

// =============================================================
// AuthState::from_session
// =============================================================

#[test]
fn session_with_both_entries_is_authenticated() {
    let state = AuthState::from_session(Some("tok".to_owned()), Some(make_user("user")));
    assert!(state.authenticated());
    assert_eq!(state.token.as_deref(), Some("tok"));
}

#[test]
fn missing_token_means_unauthenticated() {
    let state = AuthState::from_session(None, Some(make_user("user")));
    assert!(!state.authenticated());
    assert!(state.token.is_none());
}

#[test]
fn missing_user_means_unauthenticated() {
    let state = AuthState::from_session(Some("tok".to_owned()), None);
    assert!(!state.authenticated());
}

#[test]
fn role_defaults_to_user_without_session() {
    assert_eq!(AuthState::default().role(), "user");
}

#[test]
fn role_reads_session_user() {
    let state = AuthState::from_session(Some("tok".to_owned()), Some(make_user("prestataire")));
    assert_eq!(state.role(), "prestataire");
}

// =============================================================
// Redirect guard
// =============================================================

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState {
        user: None,
        token: None,
        loading: false,
    };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState {
        user: None,
        token: None,
        loading: true,
    };
    assert!(!should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState {
        user: Some(make_user("user")),
        token: Some("tok".to_owned()),
        loading: false,
    };
    assert!(!should_redirect_unauth(&state));
}

// =============================================================
// Role destinations
// =============================================================

#[test]
fn admin_routes_to_admin_dashboard() {
    assert_eq!(dashboard_path("admin"), "/dashboard/admin");
}

#[test]
fn prestataire_routes_to_provider_dashboard() {
    assert_eq!(dashboard_path("prestataire"), "/dashboard/provider");
}

#[test]
fn unknown_roles_route_to_user_dashboard() {
    assert_eq!(dashboard_path("user"), "/dashboard/user");
    assert_eq!(dashboard_path("moderator"), "/dashboard/user");
}
