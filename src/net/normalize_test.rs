use super::*;

fn domain_list_json() -> Value {
    serde_json::json!([
        {"id": "d-1", "name": "Plomberie"},
        {"id": "d-2", "name": "Jardinage"}
    ])
}

fn user_json() -> Value {
    serde_json::json!({
        "id": "u-1",
        "name": "Alice",
        "email": "alice@example.com",
        "role": "user",
        "avatar_url": null
    })
}

// =============================================================
// normalize_domains
// =============================================================

#[test]
fn domains_accepts_bare_array() {
    let domains = normalize_domains(&domain_list_json());
    assert_eq!(domains.len(), 2);
    assert_eq!(domains[0].name, "Plomberie");
}

#[test]
fn domains_accepts_domaines_envelope() {
    let raw = serde_json::json!({"domaines": domain_list_json()});
    assert_eq!(normalize_domains(&raw).len(), 2);
}

#[test]
fn domains_accepts_data_envelope() {
    let raw = serde_json::json!({"data": domain_list_json()});
    assert_eq!(normalize_domains(&raw).len(), 2);
}

#[test]
fn domains_fails_closed_on_unknown_envelope() {
    let raw = serde_json::json!({"items": domain_list_json()});
    assert!(normalize_domains(&raw).is_empty());
}

#[test]
fn domains_fails_closed_on_malformed_entries() {
    let raw = serde_json::json!([{"id": "d-1"}]);
    assert!(normalize_domains(&raw).is_empty());
}

#[test]
fn domains_fails_closed_on_scalar() {
    assert!(normalize_domains(&serde_json::json!(42)).is_empty());
}

// =============================================================
// normalize_profile
// =============================================================

#[test]
fn profile_accepts_bare_user_object() {
    let user = normalize_profile(&user_json()).unwrap();
    assert_eq!(user.id, "u-1");
    assert_eq!(user.role, "user");
}

#[test]
fn profile_accepts_user_envelope() {
    let raw = serde_json::json!({"user": user_json()});
    let user = normalize_profile(&raw).unwrap();
    assert_eq!(user.name, "Alice");
}

#[test]
fn profile_fails_closed_on_unknown_shape() {
    let raw = serde_json::json!({"profile": user_json()});
    assert!(normalize_profile(&raw).is_none());
}

#[test]
fn profile_fails_closed_on_scalar() {
    assert!(normalize_profile(&serde_json::json!("nope")).is_none());
}
