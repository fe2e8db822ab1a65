//! Typed client for the user-account API.

use super::model::{
    Ack, NicknameCheckRequest, NicknameCheckResponse, NicknameRequest, ProfileEnvelope,
    ProfileUpdate, UserRecord,
};
use crate::error::{PlacepickError, Result};
use crate::transport::Transport;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Endpoint paths, relative to the API base URL.
pub mod paths {
    pub const CHECK_NICKNAME: &str = "/api/users/check/nickname";
    pub const NICKNAME: &str = "/api/users/nickname";
    pub const USERS: &str = "/api/users";
}

/// Client for the four user-account endpoints.
///
/// Every method performs exactly one round-trip. A body the client cannot
/// decode, or a `success: false` acknowledgement, is returned as an error so
/// callers only have to distinguish `Ok` from `Err`.
#[derive(Clone)]
pub struct UserAccountClient {
    transport: Arc<dyn Transport>,
}

impl UserAccountClient {
    pub fn new(transport: Arc<dyn Transport>) -> Self {
        Self { transport }
    }

    /// Asks the server whether `nickname` is already taken.
    ///
    /// Returns `true` when the nickname is a duplicate.
    pub async fn check_nickname(&self, nickname: &str) -> Result<bool> {
        let body = to_body(&NicknameCheckRequest {
            nickname: nickname.to_string(),
        })?;
        let value = self.transport.post(paths::CHECK_NICKNAME, body).await?;
        let verdict: NicknameCheckResponse = from_body(value)?;
        Ok(verdict.is_duplicate)
    }

    /// Registers `nickname` as the current user's nickname.
    pub async fn register_nickname(&self, nickname: &str) -> Result<()> {
        let body = to_body(&NicknameRequest {
            nickname: nickname.to_string(),
        })?;
        let value = self.transport.post(paths::NICKNAME, body).await?;
        expect_success(from_body(value)?, paths::NICKNAME)
    }

    /// Fetches the current user's profile.
    pub async fn fetch_profile(&self) -> Result<UserRecord> {
        let value = self.transport.get(paths::USERS).await?;
        let envelope: ProfileEnvelope = from_body(value)?;
        match envelope {
            ProfileEnvelope {
                success: true,
                response: Some(record),
            } => Ok(record),
            ProfileEnvelope { success: true, .. } => Err(PlacepickError::json(
                "profile response is missing the `response` field",
            )),
            ProfileEnvelope { success: false, .. } => {
                Err(PlacepickError::rejected(format!("GET {}", paths::USERS)))
            }
        }
    }

    /// Saves nickname, email and both preference sets in one request.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> Result<()> {
        let value = self.transport.post(paths::USERS, to_body(update)?).await?;
        expect_success(from_body(value)?, paths::USERS)
    }
}

impl std::fmt::Debug for UserAccountClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserAccountClient").finish_non_exhaustive()
    }
}

fn to_body<T: Serialize>(body: &T) -> Result<Value> {
    Ok(serde_json::to_value(body)?)
}

fn from_body<T: DeserializeOwned>(value: Value) -> Result<T> {
    Ok(serde_json::from_value(value)?)
}

fn expect_success(ack: Ack, path: &str) -> Result<()> {
    if ack.success {
        Ok(())
    } else {
        Err(PlacepickError::rejected(format!("POST {}", path)))
    }
}
