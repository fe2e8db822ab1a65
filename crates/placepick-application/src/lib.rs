//! Application layer for Placepick.
//!
//! Use cases that drive the core state machines: they capture request
//! tickets, perform the round-trips, apply or suppress the responses and
//! publish user notices. No error escapes these use cases; every call
//! returns an outcome the screen can render.

mod state_cell;

pub mod nickname_registration;
pub mod profile_editor;

pub use nickname_registration::{CheckOutcome, NextStep, NicknameRegistration, SubmitOutcome};
pub use profile_editor::{LoadOutcome, ProfileEditor, SaveOutcome};
