//! Store facade over the keyword hub gateway.
//!
//! # Purpose
//!
//! * Owns every piece of client state: version info, the paged collection
//!   listing, the search session, the detail view and navigation selection.
//! * Turns UI intents into gateway fetches and merges their results.
//! * Publishes a [`StoreEvent`](crate::StoreEvent) for every committed mutation.
//!
//! # Mental model
//!
//! * [`Store`] is a single-owner state machine. Rendering code reads through
//!   accessors and never mutates state directly.
//! * Each logical resource (version, collections, search, detail) has at most
//!   one current request, identified by a generation from its token slot.
//! * Fetches run as detached tasks. They hold no store state and report one
//!   `StoreMsg` each over an unbounded channel.
//! * The owner applies messages in receive order, which need not match issue
//!   order. Freshness checks make that order irrelevant.
//!
//! # Key types
//!
//! | Type | Meaning | Constraints | Constructed / mutated in |
//! |---|---|---|---|
//! | [`Store`] | Facade and authoritative state | Must only mutate through `&mut self` | `core.rs` |
//! | `StoreMsg` | Fetch task completion | Must carry the request it answers | `msg.rs` |
//! | `Fetched` | Task outcome | `Cancelled` only for superseded requests | `Store::dispatch` |
//! | [`PagedCache`](crate::PagedCache) | Offset-keyed listing | Must stay contiguous from offset 0 | `fetch_collections`, `apply` |
//! | [`SearchSession`](crate::SearchSession) | Term-keyed paged results | Must drop responses for any other term | `set_search_term`, `apply` |
//! | [`LoadingFlags`](crate::LoadingFlags) | Busy flags | Derived from pending token slots | `Store::loading` |
//!
//! # Invariants
//!
//! * Must ignore completions whose generation (and, for search, term) is no
//!   longer current.
//! * Must clear the previous detail and focused keyword when a detail fetch
//!   begins, and set focus only when that fetch's detail is applied.
//! * Must leave cached data untouched when a fetch fails.
//! * Must clear every busy flag when its request settles, success or failure.
//! * Must emit an event for every committed mutation.
//!
//! # Data flow
//!
//! 1. Caller invokes an operation such as `set_search_term`.
//! 2. The owning component forms a request and issues a fresh token,
//!    cancelling the previous one.
//! 3. `dispatch` spawns the gateway call under that token.
//! 4. The task sends `StoreMsg` with the original request attached.
//! 5. `pump`, `settle` or `next_change` hands it to `apply`, which checks
//!    freshness, merges or records the failure, and emits events.
//!
//! # Concurrency & ordering
//!
//! * Supersession cancels the old token, so its task stops waiting on the
//!   network and reports `Cancelled`. The apply-time generation check is
//!   authoritative; cancellation only saves work.
//! * Across resources there is no ordering; a slow detail fetch never blocks
//!   the listing.
//!
//! # Failure modes & recovery
//!
//! * Gateway failure: busy flag clears, cache unchanged, a
//!   [`Failure`](crate::Failure) is recorded for the operation until it is
//!   started again. No automatic retry.
//! * Stale completion: dropped silently, logged at trace.
//! * Store dropped with fetches in flight: their sends fail and are ignored.

mod apply;
mod core;
mod msg;

pub use self::core::Store;
