//! Profile preference editing domain.
//!
//! # Module Structure
//!
//! - `modal`: Visibility of the per-catalog picker modals
//! - `state`: Fetched-vs-local profile state, load and save lifecycles

mod modal;
mod state;

pub use modal::{ModalAction, ModalVisibility};
pub use state::{LoadState, LoadTicket, ProfilePreferences, SaveRejection, SaveState};
