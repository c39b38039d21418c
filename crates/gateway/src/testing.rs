//! Scripted in-memory gateway.
//!
//! Serves a fixed corpus, records every call, and lets a test hold responses
//! back or make endpoints fail so arrival order and failure paths can be
//! driven deterministically.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use rfhub_model::{CollectionId, CollectionOrder, CollectionRef, CollectionSummary, Keyword, SearchKeyword, VersionInfo};
use tokio::sync::Semaphore;

use crate::{Gateway, GatewayError, PageRange, Result};

/// Logical endpoint, used to target failures and holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
	Version,
	Collections,
	Collection,
	CollectionKeywords,
	SearchKeywords,
}

/// One recorded gateway call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
	Version,
	Collections { page: PageRange, order: Option<CollectionOrder> },
	Collection(CollectionId),
	CollectionKeywords { id: CollectionId, limit: usize },
	Search { pattern: String, page: PageRange },
}

/// Selects which calls a hold gate blocks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Hold {
	/// Every call to the endpoint.
	Endpoint(Endpoint),
	/// Search calls for exactly this pattern.
	Search(String),
	/// By-id and keyword-listing calls for this collection.
	Collection(CollectionId),
}

struct Script {
	version: VersionInfo,
	collections: Vec<CollectionSummary>,
	keywords: HashMap<CollectionId, Vec<Keyword>>,
	search: HashMap<String, Vec<SearchKeyword>>,
	failures: HashMap<Endpoint, GatewayError>,
	holds: HashMap<Hold, Arc<Semaphore>>,
	calls: Vec<Call>,
}

pub struct ScriptedGateway {
	script: Mutex<Script>,
}

impl Default for ScriptedGateway {
	fn default() -> Self {
		Self::new()
	}
}

impl Call {
	pub const fn endpoint(&self) -> Endpoint {
		match self {
			Self::Version => Endpoint::Version,
			Self::Collections { .. } => Endpoint::Collections,
			Self::Collection(_) => Endpoint::Collection,
			Self::CollectionKeywords { .. } => Endpoint::CollectionKeywords,
			Self::Search { .. } => Endpoint::SearchKeywords,
		}
	}

	fn holds(&self) -> Vec<Hold> {
		let mut holds = vec![Hold::Endpoint(self.endpoint())];
		match self {
			Self::Collection(id) | Self::CollectionKeywords { id, .. } => holds.push(Hold::Collection(*id)),
			Self::Search { pattern, .. } => holds.push(Hold::Search(pattern.clone())),
			Self::Version | Self::Collections { .. } => {}
		}
		holds
	}
}

impl ScriptedGateway {
	pub fn new() -> Self {
		Self {
			script: Mutex::new(Script {
				version: VersionInfo {
					title: "rfhub2".to_string(),
					version: "0.0.0-test".to_string(),
				},
				collections: Vec::new(),
				keywords: HashMap::new(),
				search: HashMap::new(),
				failures: HashMap::new(),
				holds: HashMap::new(),
				calls: Vec::new(),
			}),
		}
	}

	/// Corpus of `count` summaries with ids `1..=count`, named `Collection {id}`.
	pub fn with_collections(self, count: usize) -> Self {
		self.set_collections((1..=count as u64).map(|id| CollectionSummary::new(id, format!("Collection {id}"))).collect());
		self
	}

	pub fn set_version(&self, version: VersionInfo) {
		self.script.lock().version = version;
	}

	pub fn set_collections(&self, collections: Vec<CollectionSummary>) {
		self.script.lock().collections = collections;
	}

	pub fn set_keywords(&self, id: CollectionId, keywords: Vec<Keyword>) {
		self.script.lock().keywords.insert(id, keywords);
	}

	/// Full result list for `pattern`; pages are sliced from it.
	pub fn set_search_results(&self, pattern: &str, results: Vec<SearchKeyword>) {
		self.script.lock().search.insert(pattern.to_string(), results);
	}

	/// `count` hits for `pattern` named `{pattern} {n}`, all in collection 1.
	pub fn set_search_hits(&self, pattern: &str, count: usize) {
		let collection = CollectionRef {
			id: CollectionId(1),
			name: "Collection 1".to_string(),
		};
		let hits = (0..count as u64)
			.map(|n| SearchKeyword::new(n + 1, format!("{pattern} {n}"), collection.clone()))
			.collect();
		self.set_search_results(pattern, hits);
	}

	/// Makes every later call to `endpoint` fail with `error` until [`Self::recover`].
	pub fn fail(&self, endpoint: Endpoint, error: GatewayError) {
		self.script.lock().failures.insert(endpoint, error);
	}

	pub fn recover(&self, endpoint: Endpoint) {
		self.script.lock().failures.remove(&endpoint);
	}

	/// Blocks matching calls (already waiting or later) until [`Self::release`].
	pub fn hold(&self, hold: Hold) {
		self.script.lock().holds.entry(hold).or_insert_with(|| Arc::new(Semaphore::new(0)));
	}

	pub fn release(&self, hold: &Hold) {
		if let Some(gate) = self.script.lock().holds.remove(hold) {
			gate.close();
		}
	}

	pub fn calls(&self) -> Vec<Call> {
		self.script.lock().calls.clone()
	}

	pub fn call_count(&self, endpoint: Endpoint) -> usize {
		self.script.lock().calls.iter().filter(|call| call.endpoint() == endpoint).count()
	}

	async fn enter(&self, call: Call) -> Result<()> {
		let gates: Vec<Arc<Semaphore>> = {
			let mut script = self.script.lock();
			script.calls.push(call.clone());
			call.holds().iter().filter_map(|hold| script.holds.get(hold).cloned()).collect()
		};
		for gate in gates {
			// Closing the semaphore is the release signal.
			let _ = gate.acquire().await;
		}
		match self.script.lock().failures.get(&call.endpoint()) {
			Some(error) => Err(error.clone()),
			None => Ok(()),
		}
	}
}

fn page_of<T: Clone>(items: &[T], page: PageRange) -> Vec<T> {
	let start = page.skip.min(items.len());
	let end = page.end().min(items.len());
	items[start..end].to_vec()
}

#[async_trait::async_trait]
impl Gateway for ScriptedGateway {
	async fn version(&self) -> Result<VersionInfo> {
		self.enter(Call::Version).await?;
		Ok(self.script.lock().version.clone())
	}

	async fn collections(&self, page: PageRange, order: Option<CollectionOrder>) -> Result<Vec<CollectionSummary>> {
		self.enter(Call::Collections { page, order }).await?;
		let script = self.script.lock();
		let mut items = script.collections.clone();
		if order.is_some_and(|order| order.descending) {
			items.reverse();
		}
		Ok(page_of(&items, page))
	}

	async fn collection(&self, id: CollectionId) -> Result<CollectionSummary> {
		self.enter(Call::Collection(id)).await?;
		self.script
			.lock()
			.collections
			.iter()
			.find(|summary| summary.id() == id)
			.cloned()
			.ok_or_else(|| GatewayError::Status {
				url: format!("/api/v1/collections/stats/{id}/"),
				status: 404,
			})
	}

	async fn collection_keywords(&self, id: CollectionId, limit: usize) -> Result<Vec<Keyword>> {
		self.enter(Call::CollectionKeywords { id, limit }).await?;
		let script = self.script.lock();
		let keywords = script.keywords.get(&id).map(Vec::as_slice).unwrap_or_default();
		Ok(page_of(keywords, PageRange::new(0, limit)))
	}

	async fn search_keywords(&self, pattern: &str, page: PageRange) -> Result<Vec<SearchKeyword>> {
		self.enter(Call::Search {
			pattern: pattern.to_string(),
			page,
		})
		.await?;
		let script = self.script.lock();
		let results = script.search.get(pattern).map(Vec::as_slice).unwrap_or_default();
		Ok(page_of(results, page))
	}
}
