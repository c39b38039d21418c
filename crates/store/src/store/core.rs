use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;

use rfhub_config::{Config, PagingConfig};
use rfhub_gateway::{Gateway, GatewayError, HttpGateway};
use rfhub_model::{CollectionDetail, CollectionId, CollectionOrder, CollectionSummary, KeywordId, SearchKeyword, VersionInfo};
use rfhub_worker::{RequestToken, TaskClass, TokenSlot};
use tokio::sync::{broadcast, mpsc};

use super::msg::{Fetched, StoreMsg};
use crate::detail::{DetailRequest, DetailView};
use crate::event::{Failure, LoadingFlags, Operation, StoreEvent};
use crate::paged::{PageRequest, PagedCache};
use crate::route::Route;
use crate::search::{SearchRequest, SearchSession};
use crate::selection::Selection;

const EVENT_CAPACITY: usize = 256;

/// Read-through store over the keyword hub API.
///
/// Single owner: every mutation goes through `&mut self`. Fetches run as
/// detached tasks and report back over a channel; nothing changes until the
/// owner calls [`Store::pump`], [`Store::settle`] or [`Store::next_change`].
pub struct Store {
	gateway: Arc<dyn Gateway>,
	paging: PagingConfig,
	pub(super) version: Option<VersionInfo>,
	pub(super) version_slot: TokenSlot,
	order: Option<CollectionOrder>,
	pub(super) collections: PagedCache<CollectionSummary>,
	pub(super) search: SearchSession<SearchKeyword>,
	pub(super) detail: DetailView,
	pub(super) selection: Selection,
	failures: HashMap<Operation, Failure>,
	loading: LoadingFlags,
	in_flight: usize,
	msg_tx: mpsc::UnboundedSender<StoreMsg>,
	msg_rx: mpsc::UnboundedReceiver<StoreMsg>,
	events: broadcast::Sender<StoreEvent>,
}

impl Store {
	/// Builds the store and immediately requests the version info and the
	/// first collection page.
	pub fn new(gateway: Arc<dyn Gateway>, paging: PagingConfig) -> Self {
		let (msg_tx, msg_rx) = mpsc::unbounded_channel();
		let (events, _) = broadcast::channel(EVENT_CAPACITY);
		let mut store = Self {
			gateway,
			paging,
			version: None,
			version_slot: TokenSlot::new(),
			order: None,
			collections: PagedCache::new(paging.page_size),
			search: SearchSession::new(paging.page_size),
			detail: DetailView::default(),
			selection: Selection::default(),
			failures: HashMap::new(),
			loading: LoadingFlags::default(),
			in_flight: 0,
			msg_tx,
			msg_rx,
			events,
		};
		store.get_version_info();
		store.load_more_collections();
		store
	}

	/// Store backed by [`HttpGateway`] for `config.api`.
	pub fn from_config(config: &Config) -> Result<Self, GatewayError> {
		let gateway = HttpGateway::new(&config.api)?;
		Ok(Self::new(Arc::new(gateway), config.paging))
	}

	pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
		self.events.subscribe()
	}

	pub const fn paging(&self) -> PagingConfig {
		self.paging
	}

	pub fn version(&self) -> Option<&VersionInfo> {
		self.version.as_ref()
	}

	pub fn collections(&self) -> &PagedCache<CollectionSummary> {
		&self.collections
	}

	pub const fn collection_order(&self) -> Option<CollectionOrder> {
		self.order
	}

	pub fn search(&self) -> &SearchSession<SearchKeyword> {
		&self.search
	}

	pub fn search_term(&self) -> &str {
		self.search.term()
	}

	/// Loaded detail for the most recently requested collection.
	pub fn collection_detail(&self) -> Option<&CollectionDetail> {
		self.detail.detail()
	}

	pub const fn requested_collection(&self) -> Option<CollectionId> {
		self.detail.requested()
	}

	pub const fn selection(&self) -> Selection {
		self.selection
	}

	pub const fn expanded_collection(&self) -> Option<CollectionId> {
		self.selection.expanded()
	}

	pub const fn focused_keyword(&self) -> Option<KeywordId> {
		self.selection.focused()
	}

	pub const fn loading(&self) -> LoadingFlags {
		LoadingFlags {
			version: self.version_slot.is_pending(),
			collections: self.collections.is_loading(),
			search: self.search.is_loading(),
			collection_detail: self.detail.is_loading(),
		}
	}

	pub fn failure(&self, operation: Operation) -> Option<&Failure> {
		self.failures.get(&operation)
	}

	/// Fetch tasks whose completion has not been applied yet, including
	/// superseded ones.
	pub const fn in_flight(&self) -> usize {
		self.in_flight
	}

	/// Requests the version info once. No-op while pending or once known.
	pub fn get_version_info(&mut self) -> bool {
		if self.version.is_some() || self.version_slot.is_pending() {
			return false;
		}
		let token = self.version_slot.issue();
		let generation = token.generation();
		self.clear_failure(Operation::Version);

		let gateway = Arc::clone(&self.gateway);
		self.dispatch(TaskClass::Background, "store.version", token, async move { gateway.version().await }, move |result| {
			StoreMsg::Version { generation, result }
		});
		self.sync_loading();
		true
	}

	/// Requests `[skip, skip + limit)` of the collection listing.
	///
	/// Rejected while a page is outstanding or when `skip` is past the
	/// entries already cached.
	pub fn get_collections(&mut self, skip: usize, limit: usize) -> bool {
		let Some(request) = self.collections.begin_page(skip, limit) else {
			tracing::trace!(skip, limit, "store.collections.rejected");
			return false;
		};
		self.fetch_collections(request);
		true
	}

	/// Requests the page after the cached end, unless a short page ended the
	/// listing or a page is already outstanding.
	pub fn load_more_collections(&mut self) -> bool {
		let Some(request) = self.collections.begin_next_page() else {
			return false;
		};
		self.fetch_collections(request);
		true
	}

	/// Re-sorts the listing server-side. Drops cached pages and refetches from
	/// offset 0. Returns false when the order is unchanged.
	pub fn set_collection_order(&mut self, order: Option<CollectionOrder>) -> bool {
		if self.order == order {
			return false;
		}
		tracing::debug!(order = ?order.map(|order| order.to_string()), "store.collections.order");
		self.order = order;
		self.collections.reset();
		self.emit(StoreEvent::CollectionsChanged);
		self.load_more_collections();
		true
	}

	pub fn get_collection_detail(&mut self, id: CollectionId) -> bool {
		self.fetch_detail(id, None)
	}

	/// Like [`Store::get_collection_detail`], focusing `keyword` once the
	/// detail has been applied.
	pub fn get_collection_detail_with_keyword_focused(&mut self, id: CollectionId, keyword: KeywordId) -> bool {
		self.fetch_detail(id, Some(keyword))
	}

	/// Replaces the search term. A blank term clears results without a request.
	pub fn set_search_term(&mut self, term: &str) -> bool {
		match self.search.set_term(term) {
			Some(request) => {
				self.emit(StoreEvent::SearchChanged);
				self.fetch_search(request);
				true
			}
			None => {
				if self.search.is_idle() {
					self.clear_failure(Operation::Search);
					self.emit(StoreEvent::SearchChanged);
					self.sync_loading();
				}
				false
			}
		}
	}

	pub fn load_more_search_results(&mut self) -> bool {
		let Some(request) = self.search.load_more() else {
			return false;
		};
		self.fetch_search(request);
		true
	}

	pub fn toggle_expanded_collection(&mut self, id: CollectionId) {
		self.selection.toggle_expanded(id);
		self.emit(StoreEvent::SelectionChanged);
	}

	/// Drives the store from a deep link. Returns whether a request was issued.
	pub fn navigate(&mut self, route: &Route) -> bool {
		tracing::debug!(route = %route, "store.navigate");
		match route {
			Route::Collections => {
				self.set_search_term("");
				self.collections.pages_received() == 0 && self.load_more_collections()
			}
			Route::Search { query } => self.set_search_term(query),
			Route::Collection(id) => self.get_collection_detail(*id),
			Route::Keyword { collection, keyword } => self.get_collection_detail_with_keyword_focused(*collection, *keyword),
		}
	}

	/// Applies every completion already received. Returns whether any state
	/// changed.
	pub fn pump(&mut self) -> bool {
		let mut changed = false;
		while let Ok(msg) = self.msg_rx.try_recv() {
			changed |= self.receive(msg);
		}
		changed
	}

	/// Waits until every dispatched fetch has reported and been applied.
	pub async fn settle(&mut self) {
		while self.in_flight > 0 {
			let Some(msg) = self.msg_rx.recv().await else {
				break;
			};
			self.receive(msg);
		}
	}

	/// Waits for the next completion that changes state.
	///
	/// Returns false once nothing is in flight.
	pub async fn next_change(&mut self) -> bool {
		while self.in_flight > 0 {
			let Some(msg) = self.msg_rx.recv().await else {
				break;
			};
			if self.receive(msg) {
				return true;
			}
		}
		false
	}

	fn receive(&mut self, msg: StoreMsg) -> bool {
		self.in_flight = self.in_flight.saturating_sub(1);
		self.apply(msg)
	}

	fn fetch_collections(&mut self, request: PageRequest) {
		self.clear_failure(Operation::Collections);
		tracing::debug!(skip = request.range.skip, limit = request.range.limit, "store.collections.fetch");

		let gateway = Arc::clone(&self.gateway);
		let (range, order) = (request.range, self.order);
		let token = request.token().clone();
		self.dispatch(
			TaskClass::Background,
			"store.collections",
			token,
			async move { gateway.collections(range, order).await },
			move |result| StoreMsg::Collections { request, result },
		);
		self.sync_loading();
	}

	fn fetch_search(&mut self, request: SearchRequest) {
		self.clear_failure(Operation::Search);
		tracing::debug!(term = %request.term, skip = request.page.range.skip, "store.search.fetch");

		let gateway = Arc::clone(&self.gateway);
		let (pattern, range) = (request.term.clone(), request.page.range);
		let token = request.page.token().clone();
		self.dispatch(
			TaskClass::Interactive,
			"store.search",
			token,
			async move { gateway.search_keywords(&pattern, range).await },
			move |result| StoreMsg::Search { request, result },
		);
		self.sync_loading();
	}

	fn fetch_detail(&mut self, id: CollectionId, focus: Option<KeywordId>) -> bool {
		let request: DetailRequest = self.detail.begin(id, focus);
		self.selection.clear_focus();
		self.selection.expand(id);
		self.clear_failure(Operation::CollectionDetail);
		self.emit(StoreEvent::DetailChanged);
		self.emit(StoreEvent::SelectionChanged);
		tracing::debug!(collection = %id, focus = ?focus.map(KeywordId::get), "store.detail.fetch");

		let gateway = Arc::clone(&self.gateway);
		let keyword_limit = self.paging.detail_keyword_limit;
		let token = request.token().clone();
		self.dispatch(
			TaskClass::Interactive,
			"store.detail",
			token,
			async move { gateway.collection_detail(id, keyword_limit).await },
			move |result| StoreMsg::Detail { request, result },
		);
		self.sync_loading();
		true
	}

	/// Spawns `fut` under `token`; the task reports exactly one message.
	fn dispatch<T, F, W>(&mut self, class: TaskClass, name: &'static str, token: RequestToken, fut: F, wrap: W)
	where
		T: Send + 'static,
		F: Future<Output = rfhub_gateway::Result<T>> + Send + 'static,
		W: FnOnce(Fetched<T>) -> StoreMsg + Send + 'static,
	{
		self.in_flight += 1;
		let tx = self.msg_tx.clone();
		rfhub_worker::spawn(class, name, async move {
			let result = match token.run(fut).await {
				Some(result) => Fetched::Done(result),
				None => Fetched::Cancelled,
			};
			// The store may already be gone.
			let _ = tx.send(wrap(result));
		});
	}

	pub(super) fn emit(&self, event: StoreEvent) {
		tracing::trace!(event = ?event, "store.event");
		let _ = self.events.send(event);
	}

	pub(super) fn sync_loading(&mut self) {
		let loading = self.loading();
		if loading != self.loading {
			self.loading = loading;
			self.emit(StoreEvent::LoadingChanged(loading));
		}
	}

	pub(super) fn record_failure(&mut self, operation: Operation, error: &GatewayError) {
		tracing::warn!(operation = %operation, kind = ?error.kind(), error = %error, "store.fetch.failed");
		self.failures.insert(operation, Failure::new(operation, error));
		self.emit(StoreEvent::Failed(operation));
	}

	fn clear_failure(&mut self, operation: Operation) {
		if self.failures.remove(&operation).is_some() {
			self.emit(StoreEvent::FailureCleared(operation));
		}
	}

	#[cfg(test)]
	pub(crate) fn inject(&mut self, msg: StoreMsg) -> bool {
		self.apply(msg)
	}
}
