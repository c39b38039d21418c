//! Offset-keyed incremental page cache.
//!
//! Records are keyed by their absolute position in the server's ordering, not
//! by entity id. A page fetched for `[skip, skip + limit)` writes record `i`
//! at offset `skip + i`, overwriting whatever was there, so re-delivery of a
//! range can neither duplicate entries nor disturb order. Offsets stay
//! contiguous from 0: a page may start anywhere up to the current length but
//! never past it.
//!
//! `has_more` is the "full page means maybe more" heuristic: true iff the most
//! recently merged page was exactly as long as requested. An exact final page
//! costs one extra empty fetch; a short page ends pagination.

use std::collections::BTreeMap;

use rfhub_gateway::PageRange;
use rfhub_worker::{RequestToken, TokenSlot};

/// One outstanding page fetch.
#[derive(Debug, Clone)]
pub struct PageRequest {
	pub range: PageRange,
	token: RequestToken,
}

impl PageRequest {
	pub fn token(&self) -> &RequestToken {
		&self.token
	}

	pub const fn generation(&self) -> u64 {
		self.token.generation()
	}
}

/// Result of merging a page response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
	/// Records were written; `has_more` is the recomputed flag.
	Merged { received: usize, has_more: bool },
	/// The request belongs to a superseded generation; nothing changed.
	Stale,
}

#[derive(Debug)]
pub struct PagedCache<T> {
	entries: BTreeMap<usize, T>,
	page_size: usize,
	has_more: bool,
	pages_received: usize,
	slot: TokenSlot,
}

impl<T> PagedCache<T> {
	pub fn new(page_size: usize) -> Self {
		Self {
			entries: BTreeMap::new(),
			page_size: page_size.max(1),
			has_more: false,
			pages_received: 0,
			slot: TokenSlot::new(),
		}
	}

	pub const fn page_size(&self) -> usize {
		self.page_size
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	pub const fn has_more(&self) -> bool {
		self.has_more
	}

	/// True while a page of the current generation is outstanding.
	pub const fn is_loading(&self) -> bool {
		self.slot.is_pending()
	}

	/// Number of pages merged since construction or the last reset.
	pub const fn pages_received(&self) -> usize {
		self.pages_received
	}

	pub const fn generation(&self) -> u64 {
		self.slot.generation()
	}

	pub fn get(&self, offset: usize) -> Option<&T> {
		self.entries.get(&offset)
	}

	/// Entries in ascending offset order, which is server delivery order.
	pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> {
		self.entries.iter().map(|(offset, record)| (*offset, record))
	}

	pub fn values(&self) -> impl Iterator<Item = &T> {
		self.entries.values()
	}

	/// Count for headers: `"140"`, or `"100+"` while more may exist.
	pub fn count_label(&self) -> String {
		if self.has_more {
			format!("{}+", self.len())
		} else {
			self.len().to_string()
		}
	}

	/// Forms the request for the page after the current end.
	///
	/// `None` while a page is outstanding, or once a short page has ended
	/// pagination.
	pub fn begin_next_page(&mut self) -> Option<PageRequest> {
		if self.is_loading() || (self.pages_received > 0 && !self.has_more) {
			return None;
		}
		self.issue(PageRange::new(self.len(), self.page_size))
	}

	/// Forms a request for an explicit window.
	///
	/// `None` while a page is outstanding, for an empty window, or when `skip`
	/// would leave a gap past the current end.
	pub fn begin_page(&mut self, skip: usize, limit: usize) -> Option<PageRequest> {
		if self.is_loading() || limit == 0 || skip > self.len() {
			return None;
		}
		self.issue(PageRange::new(skip, limit))
	}

	fn issue(&mut self, range: PageRange) -> Option<PageRequest> {
		let token = self.slot.issue();
		Some(PageRequest { range, token })
	}

	/// Writes a page response at its offsets.
	pub fn merge(&mut self, request: &PageRequest, records: Vec<T>) -> PageOutcome {
		if !self.slot.settle(request.generation()) {
			return PageOutcome::Stale;
		}
		let received = records.len();
		for (i, record) in records.into_iter().enumerate() {
			self.entries.insert(request.range.skip + i, record);
		}
		self.has_more = received == request.range.limit;
		self.pages_received += 1;
		PageOutcome::Merged {
			received,
			has_more: self.has_more,
		}
	}

	/// Settles a failed request, leaving entries untouched.
	///
	/// Returns false when the request was already stale.
	pub fn abandon(&mut self, request: &PageRequest) -> bool {
		self.slot.settle(request.generation())
	}

	/// Drops all entries and supersedes any outstanding request.
	pub fn reset(&mut self) {
		self.entries.clear();
		self.has_more = false;
		self.pages_received = 0;
		self.slot.invalidate();
	}
}
