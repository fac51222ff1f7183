//! Remote Collaborator Bindings
//!
//! HTTP bindings to the hosted data store, the auth provider, and the
//! email-delivery service, organized by domain. The core treats every
//! remote failure uniformly; callers log the detail and surface a static
//! message.

mod collection;
pub mod email;
pub mod session;
pub mod store;

pub use collection::{Articles, Collection, Projects, Services};

use crate::auth;
use crate::config;

/// A failed remote call. The variant matters only for logging; callers
/// collapse everything into one "operation failed" notification.
#[derive(Debug, Clone)]
pub enum ApiError {
    /// Request never completed (network, CORS, abort).
    Transport(String),
    /// The collaborator rejected the request.
    Status(u16, String),
    /// A row-targeted write matched nothing.
    NotFound(String),
    /// Response body did not decode into the expected shape.
    Decode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport error: {msg}"),
            ApiError::Status(code, body) => write!(f, "rejected with status {code}: {body}"),
            ApiError::NotFound(id) => write!(f, "no row with id {id}"),
            ApiError::Decode(msg) => write!(f, "unexpected response shape: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

pub(crate) fn http() -> reqwest::Client {
    reqwest::Client::new()
}

/// Store requests carry the anon key plus the session token when one exists,
/// so row-level security sees the admin identity on writes.
pub(crate) fn store_headers(req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    let bearer = auth::stored_token().unwrap_or_else(|| config::SUPABASE_ANON_KEY.to_string());
    req.header("apikey", config::SUPABASE_ANON_KEY)
        .header("Authorization", format!("Bearer {bearer}"))
}

/// Turn a non-2xx response into an error, keeping the body for diagnostics.
pub(crate) async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::Status(status.as_u16(), body))
}
