use super::*;

// =============================================================
// Endpoint builders
// =============================================================

#[test]
fn url_prefixes_api_base() {
    assert_eq!(url("/posts"), "https://api.prestalink.app/posts");
}

#[test]
fn like_endpoint_formats_expected_path() {
    assert_eq!(like_endpoint("p-9"), "/posts/p-9/like");
}

#[test]
fn comments_endpoint_formats_expected_path() {
    assert_eq!(comments_endpoint("p-9"), "/posts/p-9/comments");
}

#[test]
fn reply_endpoint_targets_comment_id() {
    assert_eq!(reply_endpoint("c-4"), "/comments/c-4/reply");
}

#[test]
fn report_endpoint_formats_expected_path() {
    assert_eq!(report_endpoint("p-9"), "/posts/p-9/report");
}

#[test]
fn reviews_endpoint_formats_expected_path() {
    assert_eq!(reviews_endpoint("pr-2"), "/prestataires/pr-2/reviews");
}

#[test]
fn provider_create_endpoint_targets_user_id() {
    assert_eq!(provider_create_endpoint("u-7"), "/prestataire/create/u-7");
}

// =============================================================
// Payload builders
// =============================================================

#[test]
fn content_payload_uses_wire_field_name() {
    assert_eq!(content_payload("hello"), serde_json::json!({"contenu": "hello"}));
}

#[test]
fn report_payload_uses_wire_field_name() {
    assert_eq!(report_payload("spam"), serde_json::json!({"raison": "spam"}));
}

#[test]
fn review_payload_carries_note_and_comment() {
    assert_eq!(
        review_payload(4, "great work"),
        serde_json::json!({"note": 4, "comment": "great work"})
    );
}

#[test]
fn login_payload_carries_credentials() {
    assert_eq!(
        login_payload("a@b.c", "secret"),
        serde_json::json!({"email": "a@b.c", "password": "secret"})
    );
}

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("tok123"), "Bearer tok123");
}

// =============================================================
// ApiError
// =============================================================

#[test]
fn conflict_status_is_conflict() {
    assert!(ApiError::Status(STATUS_CONFLICT).is_conflict());
}

#[test]
fn other_errors_are_not_conflict() {
    assert!(!ApiError::Status(500).is_conflict());
    assert!(!ApiError::Network("offline".to_owned()).is_conflict());
    assert!(!ApiError::Rejected.is_conflict());
}

#[test]
fn server_error_displays_raw_message() {
    let err = ApiError::Server("profil deja existant".to_owned());
    assert_eq!(err.to_string(), "profil deja existant");
}
