use super::core::Store;
use super::msg::{Fetched, StoreMsg};
use crate::event::{Operation, StoreEvent};
use crate::paged::PageOutcome;

impl Store {
	/// Applies one fetch completion. Returns whether observable state changed.
	///
	/// Every branch checks freshness first; a superseded completion is dropped
	/// without touching state.
	pub(super) fn apply(&mut self, msg: StoreMsg) -> bool {
		let operation = msg.operation();
		let changed = match msg {
			StoreMsg::Version { generation, result } => match result {
				Fetched::Done(Ok(version)) => {
					if !self.version_slot.settle(generation) {
						return stale(operation);
					}
					tracing::debug!(title = %version.title, version = %version.version, "store.version.applied");
					self.version = Some(version);
					self.emit(StoreEvent::VersionChanged);
					true
				}
				Fetched::Done(Err(error)) => {
					if !self.version_slot.settle(generation) {
						return stale(operation);
					}
					self.record_failure(operation, &error);
					true
				}
				Fetched::Cancelled => self.version_slot.settle(generation),
			},
			StoreMsg::Collections { request, result } => match result {
				Fetched::Done(Ok(records)) => match self.collections.merge(&request, records) {
					PageOutcome::Merged { received, has_more } => {
						tracing::debug!(skip = request.range.skip, received, has_more, "store.collections.merged");
						self.emit(StoreEvent::CollectionsChanged);
						true
					}
					PageOutcome::Stale => return stale(operation),
				},
				Fetched::Done(Err(error)) => {
					if !self.collections.abandon(&request) {
						return stale(operation);
					}
					self.record_failure(operation, &error);
					true
				}
				Fetched::Cancelled => self.collections.abandon(&request),
			},
			StoreMsg::Search { request, result } => match result {
				Fetched::Done(Ok(records)) => match self.search.merge(&request, records) {
					PageOutcome::Merged { received, has_more } => {
						tracing::debug!(term = %request.term, skip = request.page.range.skip, received, has_more, "store.search.merged");
						self.emit(StoreEvent::SearchChanged);
						true
					}
					PageOutcome::Stale => return stale(operation),
				},
				Fetched::Done(Err(error)) => {
					if !self.search.abandon(&request) {
						return stale(operation);
					}
					self.record_failure(operation, &error);
					true
				}
				Fetched::Cancelled => self.search.abandon(&request),
			},
			StoreMsg::Detail { request, result } => match result {
				Fetched::Done(Ok(detail)) => {
					if !self.detail.complete(&request, detail) {
						return stale(operation);
					}
					tracing::debug!(collection = %request.id, "store.detail.applied");
					self.emit(StoreEvent::DetailChanged);
					if request.focus.is_some() {
						self.selection.focus(request.focus);
						self.emit(StoreEvent::SelectionChanged);
					}
					true
				}
				Fetched::Done(Err(error)) => {
					if !self.detail.abandon(&request) {
						return stale(operation);
					}
					self.record_failure(operation, &error);
					true
				}
				Fetched::Cancelled => self.detail.abandon(&request),
			},
		};
		self.sync_loading();
		changed
	}
}

fn stale(operation: Operation) -> bool {
	tracing::trace!(operation = %operation, "store.apply.stale");
	false
}
