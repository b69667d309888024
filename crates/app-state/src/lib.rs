//! Application state management for StayFinder
//!
//! This crate holds the session store (the single writer over the
//! persisted authentication state), the navigation gate derived from it,
//! and the reusable screen load-state.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod gate;
pub mod load;
pub mod session;

pub use gate::GatePhase;
pub use load::LoadState;
pub use session::{Credentials, SessionSnapshot, SessionStore};
