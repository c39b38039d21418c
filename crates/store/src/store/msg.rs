use rfhub_gateway::Result;
use rfhub_model::{CollectionDetail, CollectionSummary, SearchKeyword, VersionInfo};

use crate::detail::DetailRequest;
use crate::event::Operation;
use crate::paged::PageRequest;
use crate::search::SearchRequest;

/// What a fetch task observed.
#[derive(Debug)]
pub(crate) enum Fetched<T> {
	Done(Result<T>),
	/// The token was cancelled before the gateway answered.
	Cancelled,
}

/// Completion sent by a fetch task. Each task sends exactly one.
#[derive(Debug)]
pub(crate) enum StoreMsg {
	Version { generation: u64, result: Fetched<VersionInfo> },
	Collections { request: PageRequest, result: Fetched<Vec<CollectionSummary>> },
	Search { request: SearchRequest, result: Fetched<Vec<SearchKeyword>> },
	Detail { request: DetailRequest, result: Fetched<CollectionDetail> },
}

impl StoreMsg {
	pub(crate) const fn operation(&self) -> Operation {
		match self {
			Self::Version { .. } => Operation::Version,
			Self::Collections { .. } => Operation::Collections,
			Self::Search { .. } => Operation::Search,
			Self::Detail { .. } => Operation::CollectionDetail,
		}
	}
}
