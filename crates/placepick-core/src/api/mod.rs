//! User-account API contract.
//!
//! # Module Structure
//!
//! - `model`: Request/response bodies exchanged with `/api/users*`
//! - `client`: Typed client over an abstract [`Transport`](crate::transport::Transport)

mod client;
mod model;

pub use client::{UserAccountClient, paths};
pub use model::{
    Ack, NamedItem, NicknameCheckRequest, NicknameCheckResponse, NicknameRequest, ProfileEnvelope,
    ProfileUpdate, UserRecord,
};
