//! Search-as-you-type session.
//!
//! A [`PagedCache`] keyed by a mutable term. Every request records the term it
//! was formed for; a response is applied only while that term is still current
//! and its generation has not been superseded. Changing the term resets the
//! cache, which cancels and invalidates whatever was in flight for the old one.

use rfhub_model::SearchQuery;

use crate::paged::{PageOutcome, PageRequest, PagedCache};

/// One outstanding search page, tagged with the term it was issued for.
#[derive(Debug, Clone)]
pub struct SearchRequest {
	pub term: String,
	pub page: PageRequest,
}

#[derive(Debug)]
pub struct SearchSession<T> {
	term: String,
	results: PagedCache<T>,
}

impl<T> SearchSession<T> {
	pub fn new(page_size: usize) -> Self {
		Self {
			term: String::new(),
			results: PagedCache::new(page_size),
		}
	}

	/// Current term as last set; blank input is stored as the empty string.
	pub fn term(&self) -> &str {
		&self.term
	}

	/// True when the current term would issue no search.
	pub fn is_idle(&self) -> bool {
		self.term.trim().is_empty()
	}

	/// How the server will interpret the current term.
	pub fn query(&self) -> SearchQuery {
		SearchQuery::parse(&self.term)
	}

	pub fn results(&self) -> &PagedCache<T> {
		&self.results
	}

	pub const fn has_more(&self) -> bool {
		self.results.has_more()
	}

	pub const fn is_loading(&self) -> bool {
		self.results.is_loading()
	}

	/// Switches to `term` and forms its first page request.
	///
	/// A blank term is stored as `""` and clears results synchronously without
	/// forming a request. Repeating
	/// the current term while it is loaded or loading is a no-op.
	pub fn set_term(&mut self, term: &str) -> Option<SearchRequest> {
		if term.trim().is_empty() {
			self.term.clear();
			self.results.reset();
			return None;
		}
		if term == self.term && (self.results.is_loading() || self.results.pages_received() > 0) {
			return None;
		}

		self.results.reset();
		self.term = term.to_string();
		self.request_page()
	}

	/// Forms the next page request for the current term.
	pub fn load_more(&mut self) -> Option<SearchRequest> {
		if self.is_idle() {
			return None;
		}
		self.request_page()
	}

	fn request_page(&mut self) -> Option<SearchRequest> {
		let page = self.results.begin_next_page()?;
		Some(SearchRequest {
			term: self.term.clone(),
			page,
		})
	}

	/// Applies a response if it still belongs to the current term.
	pub fn merge(&mut self, request: &SearchRequest, records: Vec<T>) -> PageOutcome {
		if request.term != self.term {
			return PageOutcome::Stale;
		}
		self.results.merge(&request.page, records)
	}

	/// Settles a failed request. Returns false when it was already stale.
	pub fn abandon(&mut self, request: &SearchRequest) -> bool {
		request.term == self.term && self.results.abandon(&request.page)
	}
}
