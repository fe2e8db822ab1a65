//! Wire models for the user-account API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/users/check/nickname`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NicknameCheckRequest {
    pub nickname: String,
}

/// Verdict returned by the duplicate check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NicknameCheckResponse {
    pub is_duplicate: bool,
}

/// Body of `POST /api/users/nickname`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NicknameRequest {
    pub nickname: String,
}

/// Generic `{success}` acknowledgement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ack {
    pub success: bool,
}

/// Response of `GET /api/users`.
///
/// `response` is absent on some failure payloads, hence the `Option`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileEnvelope {
    pub success: bool,
    #[serde(default)]
    pub response: Option<UserRecord>,
}

/// Server-side user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub nickname: String,
    pub google_email: String,
    #[serde(default)]
    pub moods: Vec<NamedItem>,
    #[serde(default)]
    pub spots: Vec<NamedItem>,
}

/// A catalog entry as the server stores it. Only the name is displayed;
/// any other fields the server sends are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedItem {
    pub name: String,
}

impl UserRecord {
    /// Display names of the user's places, in server order.
    pub fn place_names(&self) -> Vec<String> {
        self.spots.iter().map(|spot| spot.name.clone()).collect()
    }

    /// Display names of the user's moods, in server order.
    pub fn mood_names(&self) -> Vec<String> {
        self.moods.iter().map(|mood| mood.name.clone()).collect()
    }
}

/// Body of `POST /api/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub nickname: String,
    pub email: String,
    pub places: Vec<String>,
    pub moods: Vec<String>,
}
