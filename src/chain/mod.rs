//! Chain building and matching
//!
//! The `Session` is the selection state machine; `find_match` decides when the
//! two chains have met.

mod matcher;
mod session;

pub use matcher::find_match;
pub use session::{LINK_SEPARATOR, MAX_END_REDRAWS, MEETING_SEPARATOR, MatchResult, Session};
