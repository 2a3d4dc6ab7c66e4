use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_author() -> UserSummary {
    UserSummary {
        id: "u-1".to_owned(),
        name: "Alice".to_owned(),
        avatar_url: None,
    }
}

// =============================================================
// Post serde
// =============================================================

#[test]
fn post_deserializes_without_images_field() {
    let raw = serde_json::json!({
        "id": "p-1",
        "author": {"id": "u-1", "name": "Alice", "avatar_url": null},
        "content": "hello",
        "like_count": 3,
        "liked": false,
        "comment_count": 0,
        "created_at": 1_700_000_000_000_i64,
        "user_id": null
    });
    let post: Post = serde_json::from_value(raw).unwrap();
    assert!(post.images.is_empty());
    assert_eq!(post.like_count, 3);
}

#[test]
fn post_round_trips_with_images() {
    let post = Post {
        id: "p-1".to_owned(),
        author: make_author(),
        content: "hello".to_owned(),
        images: vec!["a.jpg".to_owned(), "b.jpg".to_owned()],
        like_count: 1,
        liked: true,
        comment_count: 2,
        created_at: 1_700_000_000_000,
        user_id: Some("u-1".to_owned()),
    };
    let raw = serde_json::to_value(&post).unwrap();
    assert_eq!(serde_json::from_value::<Post>(raw).unwrap(), post);
}

// =============================================================
// Comment serde
// =============================================================

#[test]
fn comment_deserializes_without_replies_field() {
    let raw = serde_json::json!({
        "id": "c-1",
        "post_id": "p-1",
        "author": {"id": "u-1", "name": "Alice", "avatar_url": null},
        "content": "nice",
        "created_at": 1_700_000_000_000_i64
    });
    let comment: Comment = serde_json::from_value(raw).unwrap();
    assert!(comment.replies.is_empty());
}

// =============================================================
// ProviderCreateRequest serde
// =============================================================

#[test]
fn provider_request_serializes_absent_domaines_as_null() {
    let req = ProviderCreateRequest {
        description: "Plumbing".to_owned(),
        disponibilite: "weekdays".to_owned(),
        tarif_horaire: 35.0,
        order: 1,
        domaines: None,
    };
    let raw = serde_json::to_value(&req).unwrap();
    assert!(raw.get("domaines").unwrap().is_null());
}

#[test]
fn provider_request_serializes_domain_pairs() {
    let req = ProviderCreateRequest {
        description: "Plumbing".to_owned(),
        disponibilite: "weekdays".to_owned(),
        tarif_horaire: 35.0,
        order: 1,
        domaines: Some(vec![DomainChoice {
            domaine_id: "d-1".to_owned(),
            niveau: "expert".to_owned(),
        }]),
    };
    let raw = serde_json::to_value(&req).unwrap();
    assert_eq!(
        raw.get("domaines").unwrap(),
        &serde_json::json!([{"domaine_id": "d-1", "niveau": "expert"}])
    );
}

// =============================================================
// Envelopes
// =============================================================

#[test]
fn comment_list_response_defaults_missing_comments() {
    let raw = serde_json::json!({"status": true});
    let resp: CommentListResponse = serde_json::from_value(raw).unwrap();
    assert!(resp.status);
    assert!(resp.comments.is_empty());
}

#[test]
fn provider_create_response_tolerates_missing_message() {
    let raw = serde_json::json!({"status": false});
    let resp: ProviderCreateResponse = serde_json::from_value(raw).unwrap();
    assert!(!resp.status);
    assert!(resp.message.is_none());
}
