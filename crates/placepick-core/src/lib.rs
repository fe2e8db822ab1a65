//! Domain core of the Placepick client.
//!
//! Pure state machines for nickname registration and profile preference
//! editing, plus the user-account API contract they are driven by.

pub mod api;
pub mod catalog;
pub mod error;
pub mod freshness;
pub mod nickname;
pub mod notice;
pub mod preference;
pub mod transport;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

// Re-export common types
pub use error::{PlacepickError, Result};
pub use freshness::Freshness;
pub use notice::{Notice, NoticeKind, NoticeSink};
pub use transport::Transport;
