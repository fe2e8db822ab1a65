//! Nickname registration domain.
//!
//! # Module Structure
//!
//! - `rules`: Length and alphabet rules, feedback statuses
//! - `state`: Validation state machine and request tickets

mod rules;
mod state;

pub use rules::{
    DuplicateStatus, MAX_NICKNAME_CHARS, RuleStatus, is_content_valid, is_length_valid,
};
pub use state::{NicknameState, RevisionTicket};
