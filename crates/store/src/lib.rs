//! Incremental read-through store for the keyword hub API.
//!
//! [`Store`] is the entry point. The building blocks it composes are public
//! so consumers can read them directly:
//!
//! * [`PagedCache`]: offset-keyed pages with the "full page means maybe more"
//!   end-of-data heuristic.
//! * [`SearchSession`]: a paged cache keyed by a mutable term whose stale
//!   responses are discarded.
//! * [`Selection`] and [`LoadingFlags`]: derived UI state.
//! * [`Route`]: deep links the store can be driven from.

mod detail;
mod event;
mod paged;
mod route;
mod search;
mod selection;
mod store;

pub use detail::{DetailRequest, DetailView};
pub use event::{Failure, LoadingFlags, Operation, StoreEvent};
pub use paged::{PageOutcome, PageRequest, PagedCache};
pub use route::{Route, RouteError};
pub use search::{SearchRequest, SearchSession};
pub use selection::Selection;
pub use store::Store;
