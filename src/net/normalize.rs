//! Defensive normalization of loosely-enveloped API responses.
//!
//! DESIGN
//! ======
//! The domain catalog and the profile endpoint have shipped under more than
//! one envelope shape. Each normalizer maps every known shape onto the
//! canonical DTO and fails closed (empty / `None`) on anything it does not
//! recognize, so a server-side envelope change degrades to an empty UI
//! instead of a decode error propagating into components.

#[cfg(test)]
#[path = "normalize_test.rs"]
mod normalize_test;

use serde_json::Value;

use super::types::{Domain, User};

/// Normalize a `GET /domain` response.
///
/// Tolerated shapes: a bare array, `{"domaines": [...]}`, `{"data": [...]}`.
pub fn normalize_domains(value: &Value) -> Vec<Domain> {
    let list = if value.is_array() {
        value
    } else if let Some(inner) = value.get("domaines") {
        inner
    } else if let Some(inner) = value.get("data") {
        inner
    } else {
        return Vec::new();
    };
    serde_json::from_value(list.clone()).unwrap_or_default()
}

/// Normalize a `GET /profile` response.
///
/// Tolerated shapes: a bare user object, `{"user": {...}}`.
pub fn normalize_profile(value: &Value) -> Option<User> {
    let obj = value.get("user").unwrap_or(value);
    serde_json::from_value(obj.clone()).ok()
}
