use rfhub_model::{CollectionDetail, CollectionId, KeywordId};
use rfhub_worker::{RequestToken, TokenSlot};

/// One outstanding detail fetch and the keyword to focus once it lands.
#[derive(Debug, Clone)]
pub struct DetailRequest {
	pub id: CollectionId,
	pub focus: Option<KeywordId>,
	token: RequestToken,
}

impl DetailRequest {
	pub fn token(&self) -> &RequestToken {
		&self.token
	}

	pub const fn generation(&self) -> u64 {
		self.token.generation()
	}
}

/// The collection shown in the detail view.
///
/// Starting a fetch drops the previous detail at once, so nothing stale is
/// visible under the new id while it loads.
#[derive(Debug, Default)]
pub struct DetailView {
	requested: Option<CollectionId>,
	detail: Option<CollectionDetail>,
	slot: TokenSlot,
}

impl DetailView {
	/// Loaded detail, present only once the latest request has completed.
	pub fn detail(&self) -> Option<&CollectionDetail> {
		self.detail.as_ref()
	}

	/// Id of the most recently requested collection.
	pub const fn requested(&self) -> Option<CollectionId> {
		self.requested
	}

	pub const fn is_loading(&self) -> bool {
		self.slot.is_pending()
	}

	/// Supersedes any in-flight fetch and forms a request for `id`.
	pub fn begin(&mut self, id: CollectionId, focus: Option<KeywordId>) -> DetailRequest {
		self.detail = None;
		self.requested = Some(id);
		DetailRequest {
			id,
			focus,
			token: self.slot.issue(),
		}
	}

	/// Installs the fetched detail. Returns false for a superseded request.
	pub fn complete(&mut self, request: &DetailRequest, detail: CollectionDetail) -> bool {
		if !self.slot.settle(request.generation()) {
			return false;
		}
		self.detail = Some(detail);
		true
	}

	/// Settles a failed request, leaving the view empty.
	pub fn abandon(&mut self, request: &DetailRequest) -> bool {
		self.slot.settle(request.generation())
	}
}

#[cfg(test)]
mod tests {
	use rfhub_model::CollectionSummary;

	use super::*;

	fn detail(id: u64) -> CollectionDetail {
		CollectionDetail::assemble(CollectionSummary::new(id, format!("Collection {id}")), Vec::new())
	}

	#[test]
	fn begin_clears_previous_detail() {
		let mut view = DetailView::default();
		let first = view.begin(CollectionId(1), None);
		assert!(view.complete(&first, detail(1)));
		assert_eq!(view.detail().map(CollectionDetail::id), Some(CollectionId(1)));

		view.begin(CollectionId(2), Some(KeywordId(9)));
		assert!(view.detail().is_none());
		assert_eq!(view.requested(), Some(CollectionId(2)));
		assert!(view.is_loading());
	}

	#[test]
	fn superseded_detail_is_ignored() {
		let mut view = DetailView::default();
		let old = view.begin(CollectionId(1), None);
		let new = view.begin(CollectionId(2), None);

		assert!(old.token().is_cancelled());
		assert!(!view.complete(&old, detail(1)));
		assert!(view.detail().is_none());
		assert!(view.complete(&new, detail(2)));
		assert_eq!(view.detail().map(CollectionDetail::id), Some(CollectionId(2)));
	}

	#[test]
	fn abandon_settles_without_detail() {
		let mut view = DetailView::default();
		let request = view.begin(CollectionId(4), None);
		assert!(view.abandon(&request));
		assert!(!view.is_loading());
		assert!(view.detail().is_none());
	}
}
