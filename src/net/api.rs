//! REST API client for the marketplace backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` with bearer-token
//! injection from the persisted session. Server-side (SSR): stubs returning
//! `None`/error since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Read paths (`fetch_*`) return `Option` and degrade to empty UI on
//! failure. Write paths return `Result<_, ApiError>` because callers react
//! differently per error (silent like rollback, inline form message,
//! duplicate-report conflict). No call retries, backs off, or times out
//! beyond the browser defaults.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Comment, Domain, LoginResponse, Post, ProviderCreateRequest, ProviderCreateResponse, Reply, User};

/// Base URL of the remote API.
pub const API_BASE: &str = "https://api.prestalink.app";

/// HTTP status returned for a duplicate report.
pub const STATUS_CONFLICT: u16 = 409;

/// Error from a write-path API call.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success HTTP status.
    #[error("unexpected status: {0}")]
    Status(u16),
    /// The response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// The server answered with an explicit human-readable message.
    #[error("{0}")]
    Server(String),
    /// The server answered 200 but flagged the operation as failed.
    #[error("server rejected the request")]
    Rejected,
}

impl ApiError {
    /// Whether this error is the duplicate-report conflict.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Status(STATUS_CONFLICT))
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn url(path: &str) -> String {
    format!("{API_BASE}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn like_endpoint(post_id: &str) -> String {
    format!("/posts/{post_id}/like")
}

#[cfg(any(test, feature = "hydrate"))]
fn comments_endpoint(post_id: &str) -> String {
    format!("/posts/{post_id}/comments")
}

#[cfg(any(test, feature = "hydrate"))]
fn reply_endpoint(comment_id: &str) -> String {
    format!("/comments/{comment_id}/reply")
}

#[cfg(any(test, feature = "hydrate"))]
fn report_endpoint(post_id: &str) -> String {
    format!("/posts/{post_id}/report")
}

#[cfg(any(test, feature = "hydrate"))]
fn reviews_endpoint(provider_id: &str) -> String {
    format!("/prestataires/{provider_id}/reviews")
}

#[cfg(any(test, feature = "hydrate"))]
fn provider_create_endpoint(user_id: &str) -> String {
    format!("/prestataire/create/{user_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn content_payload(content: &str) -> serde_json::Value {
    serde_json::json!({ "contenu": content })
}

#[cfg(any(test, feature = "hydrate"))]
fn report_payload(reason: &str) -> serde_json::Value {
    serde_json::json!({ "raison": reason })
}

#[cfg(any(test, feature = "hydrate"))]
fn review_payload(note: u8, comment: &str) -> serde_json::Value {
    serde_json::json!({ "note": note, "comment": comment })
}

#[cfg(any(test, feature = "hydrate"))]
fn login_payload(email: &str, password: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "password": password })
}

/// Attach the persisted session token as a bearer header, if present.
#[cfg(feature = "hydrate")]
fn authorized(req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::session::load_token() {
        Some(token) => req.header("Authorization", &bearer_header(&token)),
        None => req,
    }
}

/// POST a JSON payload and return the raw response.
#[cfg(feature = "hydrate")]
async fn post_json(path: &str, payload: &serde_json::Value) -> Result<gloo_net::http::Response, ApiError> {
    authorized(gloo_net::http::Request::post(&url(path)))
        .json(payload)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Toggle the current user's like on a post. No body either way; the
/// caller has already applied the optimistic flip and rolls back on `Err`.
pub async fn toggle_like(post_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::post(&url(&like_endpoint(post_id))))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if resp.ok() {
            Ok(())
        } else {
            Err(ApiError::Status(resp.status()))
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = post_id;
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the marketplace feed. Returns `None` on any failure.
pub async fn fetch_posts() -> Option<Vec<Post>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::get(&url("/posts")))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Post>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch a post's full comment list (with nested replies).
/// Returns `None` on any failure.
pub async fn fetch_comments(post_id: &str) -> Option<Vec<Comment>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::get(&url(&comments_endpoint(post_id))))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let body: super::types::CommentListResponse = resp.json().await.ok()?;
        body.status.then_some(body.comments)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = post_id;
        None
    }
}

/// Create a comment on a post and return the stored comment.
pub async fn create_comment(post_id: &str, content: &str) -> Result<Comment, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json(&comments_endpoint(post_id), &content_payload(content)).await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body: super::types::CommentCreateResponse =
            resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        if body.status { Ok(body.comment) } else { Err(ApiError::Rejected) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (post_id, content);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Create a reply under a comment and return the stored reply.
pub async fn create_reply(comment_id: &str, content: &str) -> Result<Reply, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json(&reply_endpoint(comment_id), &content_payload(content)).await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body: super::types::ReplyCreateResponse =
            resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        if body.status { Ok(body.reply) } else { Err(ApiError::Rejected) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (comment_id, content);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Report a post. A 409 response surfaces as `ApiError::Status(409)` so the
/// caller can show the duplicate-report message.
pub async fn report_post(post_id: &str, reason: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json(&report_endpoint(post_id), &report_payload(reason)).await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body: super::types::StatusResponse =
            resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        if body.status { Ok(()) } else { Err(ApiError::Rejected) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (post_id, reason);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Submit a provider review (note 1..=5 plus comment text).
pub async fn create_review(provider_id: &str, note: u8, comment: &str) -> Result<(), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json(&reviews_endpoint(provider_id), &review_payload(note, comment)).await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        let body: super::types::StatusResponse =
            resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))?;
        if body.status { Ok(()) } else { Err(ApiError::Rejected) }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (provider_id, note, comment);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the provider-domain catalog. Tolerates the known envelope shapes
/// and fails closed to an empty list.
pub async fn fetch_domains() -> Vec<Domain> {
    #[cfg(feature = "hydrate")]
    {
        let Ok(resp) = authorized(gloo_net::http::Request::get(&url("/domain"))).send().await else {
            return Vec::new();
        };
        if !resp.ok() {
            return Vec::new();
        }
        match resp.json::<serde_json::Value>().await {
            Ok(value) => super::normalize::normalize_domains(&value),
            Err(_) => Vec::new(),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Vec::new()
    }
}

/// Create the provider profile for `user_id`.
///
/// # Errors
///
/// `ApiError::Server` carries a server-supplied message when the failure
/// body includes one; other failures map to `Status`/`Network`/`Decode`.
pub async fn create_provider(
    user_id: &str,
    request: &ProviderCreateRequest,
) -> Result<ProviderCreateResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::to_value(request).map_err(|e| ApiError::Decode(e.to_string()))?;
        let resp = post_json(&provider_create_endpoint(user_id), &payload).await?;
        let status = resp.status();
        let body = resp.json::<ProviderCreateResponse>().await;
        if let Ok(body) = body {
            if body.status {
                return Ok(body);
            }
            return Err(match body.message {
                Some(message) => ApiError::Server(message),
                None => ApiError::Status(status),
            });
        }
        Err(ApiError::Status(status))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, request);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}

/// Fetch the current user's profile. Tolerates the known envelope shapes;
/// returns `None` if not authenticated or on any failure.
pub async fn fetch_profile() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = authorized(gloo_net::http::Request::get(&url("/profile")))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        let value = resp.json::<serde_json::Value>().await.ok()?;
        super::normalize::normalize_profile(&value)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Exchange credentials for a session token and user record.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = post_json("/login", &login_payload(email, password)).await?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.json::<LoginResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
