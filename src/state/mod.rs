//! Shared client-side state models.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `post`, `provider_form`) so individual
//! components can depend on small focused models. Transition logic lives on
//! the plain structs here, signal-free, so every interaction rule is
//! unit-testable; components wrap these structs in `RwSignal`s.

pub mod auth;
pub mod post;
pub mod provider_form;
