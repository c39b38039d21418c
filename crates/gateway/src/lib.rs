//! Remote gateway for the keyword hub JSON API.
//!
//! A thin async function set: one method per logical endpoint, each issuing a
//! GET and decoding JSON into entity model records. Failures surface as
//! [`GatewayError`]; nothing here retries or caches.
//!
//! | Method | Path |
//! |---|---|
//! | [`Gateway::collections`] | `/api/v1/collections/stats/?skip=&limit=[&order=]` |
//! | [`Gateway::collection`] | `/api/v1/collections/stats/{id}/` |
//! | [`Gateway::collection_keywords`] | `/api/v1/keywords/stats/?collection_id=&limit=` |
//! | [`Gateway::search_keywords`] | `/api/v1/keywords/search/?pattern=&skip=&limit=` |
//! | [`Gateway::version`] | `/api/v1/version/` |

mod endpoints;
mod error;
mod http;
#[cfg(feature = "testing")]
pub mod testing;

use rfhub_model::{CollectionDetail, CollectionId, CollectionOrder, CollectionSummary, Keyword, SearchKeyword, VersionInfo};

pub use endpoints::Endpoints;
pub use error::{FailureKind, GatewayError, Result};
pub use http::HttpGateway;

/// Zero-based `skip` / `limit` window of a paged listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRange {
	pub skip: usize,
	pub limit: usize,
}

impl PageRange {
	pub const fn new(skip: usize, limit: usize) -> Self {
		Self { skip, limit }
	}

	/// First offset past this window.
	pub const fn end(self) -> usize {
		self.skip.saturating_add(self.limit)
	}
}

/// Read-only access to the remote API.
#[async_trait::async_trait]
pub trait Gateway: Send + Sync {
	async fn version(&self) -> Result<VersionInfo>;

	async fn collections(&self, page: PageRange, order: Option<CollectionOrder>) -> Result<Vec<CollectionSummary>>;

	async fn collection(&self, id: CollectionId) -> Result<CollectionSummary>;

	async fn collection_keywords(&self, id: CollectionId, limit: usize) -> Result<Vec<Keyword>>;

	async fn search_keywords(&self, pattern: &str, page: PageRange) -> Result<Vec<SearchKeyword>>;

	/// Fetches the by-id summary and keyword listing concurrently and
	/// assembles the detail shape. Fails if either request fails.
	async fn collection_detail(&self, id: CollectionId, keyword_limit: usize) -> Result<CollectionDetail> {
		let (summary, keywords) = tokio::try_join!(self.collection(id), self.collection_keywords(id, keyword_limit))?;
		if keywords.len() >= keyword_limit {
			tracing::warn!(collection = %id, keyword_limit, "keyword listing may be truncated");
		}
		Ok(CollectionDetail::assemble(summary, keywords))
	}
}
