//! Wire DTOs for the marketplace REST API.
//!
//! DESIGN
//! ======
//! These types mirror the server's JSON payloads so serde round-trips stay
//! lossless. Field names the server speaks in French (`contenu`, `raison`,
//! `domaines`, ...) are kept verbatim on the wire structs; everything the
//! server may omit is `Option` or `#[serde(default)]`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Author identity nested on posts, comments, and replies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Avatar image URL, if available.
    pub avatar_url: Option<String>,
}

/// The session user as returned by `GET /profile` and `POST /login`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Account role (`"user"`, `"prestataire"`, `"admin"`).
    pub role: String,
    /// Avatar image URL, if available.
    pub avatar_url: Option<String>,
}

/// One feed post.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique post identifier.
    pub id: String,
    /// Post author.
    pub author: UserSummary,
    /// Textual content.
    pub content: String,
    /// Attached image URLs, in display order.
    #[serde(default)]
    pub images: Vec<String>,
    /// Total like count.
    pub like_count: i64,
    /// Whether the current user has liked this post.
    pub liked: bool,
    /// Total comment count (including replies is a server decision).
    pub comment_count: i64,
    /// Creation timestamp in milliseconds since the Unix epoch.
    pub created_at: i64,
    /// Owning user for profile navigation, when distinct from `author.id`.
    pub user_id: Option<String>,
}

/// A comment on a post, with its nested replies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier.
    pub id: String,
    /// Post this comment belongs to.
    pub post_id: String,
    /// Comment author.
    pub author: UserSummary,
    /// Textual content.
    pub content: String,
    /// Creation timestamp in milliseconds since the Unix epoch.
    pub created_at: i64,
    /// Replies in submission order.
    #[serde(default)]
    pub replies: Vec<Reply>,
}

/// A reply to a comment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reply {
    /// Unique reply identifier.
    pub id: String,
    /// Comment this reply belongs to.
    pub comment_id: String,
    /// Reply author.
    pub author: UserSummary,
    /// Textual content.
    pub content: String,
    /// Creation timestamp in milliseconds since the Unix epoch.
    pub created_at: i64,
}

/// A provider service domain from the `GET /domain` catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    /// Unique domain identifier.
    pub id: String,
    /// Display name.
    pub name: String,
}

/// One (domain, expertise level) pair in the provider creation payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DomainChoice {
    /// Selected domain identifier.
    pub domaine_id: String,
    /// Expertise level wire string (`debutant`, `intermediaire`, `expert`).
    pub niveau: String,
}

/// Body of `POST /prestataire/create/{userId}`.
///
/// `domaines` stays `None` (serialized as JSON `null`) when no complete
/// domain row was entered; the server treats `null` as "not provided",
/// which is distinct from an empty list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ProviderCreateRequest {
    /// Provider bio / service description.
    pub description: String,
    /// Availability free text (days, hours).
    pub disponibilite: String,
    /// Hourly rate.
    pub tarif_horaire: f64,
    /// Display ordering weight on marketplace listings.
    pub order: i64,
    /// Selected service domains, or `null` when none were completed.
    pub domaines: Option<Vec<DomainChoice>>,
}

/// Envelope of `GET /posts/{id}/comments`.
#[derive(Clone, Debug, Deserialize)]
pub struct CommentListResponse {
    pub status: bool,
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// Envelope of `POST /posts/{id}/comments`.
#[derive(Clone, Debug, Deserialize)]
pub struct CommentCreateResponse {
    pub status: bool,
    pub comment: Comment,
}

/// Envelope of `POST /comments/{id}/reply`.
#[derive(Clone, Debug, Deserialize)]
pub struct ReplyCreateResponse {
    pub status: bool,
    pub reply: Reply,
}

/// Envelope of status-only mutations (`like`, `report`, `reviews`).
#[derive(Clone, Debug, Deserialize)]
pub struct StatusResponse {
    pub status: bool,
}

/// Envelope of `POST /prestataire/create/{userId}`.
#[derive(Clone, Debug, Deserialize)]
pub struct ProviderCreateResponse {
    pub status: bool,
    /// Optional human-readable outcome message.
    pub message: Option<String>,
}

/// Envelope of `POST /login`.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    /// Bearer token for subsequent requests.
    pub token: String,
    /// The authenticated user.
    pub user: User,
}
