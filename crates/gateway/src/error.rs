use thiserror::Error;

/// Failure taxonomy exposed to consumers of store failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FailureKind {
	/// The request could not be completed.
	Network,
	/// The response body did not match the expected shape.
	Decode,
}

/// Errors surfaced by gateway operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
	/// Connection, transport or protocol failure.
	#[error("request to {url} failed: {message}")]
	Network { url: String, message: String },

	/// No response within the configured timeout.
	#[error("request to {url} timed out")]
	Timeout { url: String },

	/// Server answered with a non-success status.
	#[error("{url} returned HTTP {status}")]
	Status { url: String, status: u16 },

	/// Body was not valid JSON of the expected shape.
	#[error("unexpected response body from {url}: {message}")]
	Decode { url: String, message: String },

	/// A request URL could not be built from the configured base.
	#[error("invalid request url: {0}")]
	InvalidUrl(String),
}

impl GatewayError {
	pub const fn kind(&self) -> FailureKind {
		match self {
			Self::Decode { .. } => FailureKind::Decode,
			Self::Network { .. } | Self::Timeout { .. } | Self::Status { .. } | Self::InvalidUrl(_) => FailureKind::Network,
		}
	}
}

/// Result type for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;
