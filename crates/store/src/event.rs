use std::fmt;

use rfhub_gateway::{FailureKind, GatewayError};

/// Logical resources the store fetches, one outstanding request each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
	Version,
	Collections,
	Search,
	CollectionDetail,
}

impl Operation {
	pub const ALL: [Self; 4] = [Self::Version, Self::Collections, Self::Search, Self::CollectionDetail];

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Version => "version",
			Self::Collections => "collections",
			Self::Search => "search",
			Self::CollectionDetail => "collection_detail",
		}
	}
}

impl fmt::Display for Operation {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Busy flag per operation, true strictly while its current request is out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadingFlags {
	pub version: bool,
	pub collections: bool,
	pub search: bool,
	pub collection_detail: bool,
}

impl LoadingFlags {
	pub const fn get(self, operation: Operation) -> bool {
		match operation {
			Operation::Version => self.version,
			Operation::Collections => self.collections,
			Operation::Search => self.search,
			Operation::CollectionDetail => self.collection_detail,
		}
	}

	pub const fn any(self) -> bool {
		self.version || self.collections || self.search || self.collection_detail
	}
}

/// Last failure of an operation, kept until that operation is started again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
	pub operation: Operation,
	pub kind: FailureKind,
	pub message: String,
}

impl Failure {
	pub fn new(operation: Operation, error: &GatewayError) -> Self {
		Self {
			operation,
			kind: error.kind(),
			message: error.to_string(),
		}
	}
}

impl fmt::Display for Failure {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} failed: {}", self.operation, self.message)
	}
}

/// Committed store mutation. Receivers re-read the store on each event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
	VersionChanged,
	CollectionsChanged,
	SearchChanged,
	DetailChanged,
	SelectionChanged,
	LoadingChanged(LoadingFlags),
	Failed(Operation),
	FailureCleared(Operation),
}
