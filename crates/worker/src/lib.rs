//! Task spawning and request-token primitives.
//!
//! Store fetches run as detached tasks that report back over a channel. Each
//! task carries a [`RequestToken`] so the owner can both stop it early and
//! recognise its result as stale once a newer request has been issued.

mod class;
mod spawn;
mod token;

pub use class::TaskClass;
pub use spawn::spawn;
pub use token::{RequestToken, TokenSlot};
