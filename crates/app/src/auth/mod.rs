//! Authentication
//!
//! Thin typed surface over the backend's auth plane. Session *state* (the
//! signed-in user, observers) lives in [`crate::session`]; this module only
//! moves credentials and tokens.

mod api;
mod errors;
mod rest;

pub use api::*;
pub use errors::AuthError;
pub use rest::RestAuthApi;
