//! Abstract HTTP transport consumed by the user-account client.
//!
//! The core never talks to the network itself. Infrastructure provides a
//! reqwest-backed implementation and tests provide a scripted one.

use crate::error::Result;
use serde_json::Value;

/// Minimal request/response transport for the user-account API.
///
/// Implementations must map every failure (unreachable host, non-2xx status,
/// body that is not JSON) to an `Err`. Callers treat all of them the same way.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
    /// Issues a `GET` for `path` (relative to the API base URL).
    async fn get(&self, path: &str) -> Result<Value>;

    /// Issues a `POST` for `path` with a JSON body.
    async fn post(&self, path: &str, body: Value) -> Result<Value>;
}
