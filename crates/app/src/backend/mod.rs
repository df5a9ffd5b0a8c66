//! Backend Collaborator
//!
//! Typed HTTP wiring for the hosted persistence/authentication service. The
//! data plane is row-oriented (`{base}/rest/v1/{table}`), the auth plane is
//! `{base}/auth/v1/...`; both speak JSON.

mod client;
mod error;
mod query;

pub use client::{BackendClient, BackendConfig};
pub use error::BackendError;
pub(crate) use query::TableQuery;
