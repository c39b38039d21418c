use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Column the server sorts collection listings by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
	Name,
	Type,
	Version,
	KeywordCount,
	TimesUsed,
}

/// Server-side ordering for collection listings.
///
/// Wire form is the `order` query value, `-` prefixed when descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CollectionOrder {
	pub key: SortKey,
	pub descending: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort column: {0:?}")]
pub struct ParseOrderError(String);

impl SortKey {
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Name => "name",
			Self::Type => "type",
			Self::Version => "version",
			Self::KeywordCount => "keyword_count",
			Self::TimesUsed => "times_used",
		}
	}
}

impl CollectionOrder {
	pub const fn ascending(key: SortKey) -> Self {
		Self { key, descending: false }
	}

	pub const fn descending(key: SortKey) -> Self {
		Self { key, descending: true }
	}

	/// Same column, opposite direction.
	pub const fn reversed(self) -> Self {
		Self {
			key: self.key,
			descending: !self.descending,
		}
	}
}

impl fmt::Display for CollectionOrder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.descending {
			f.write_str("-")?;
		}
		f.write_str(self.key.as_str())
	}
}

impl FromStr for SortKey {
	type Err = ParseOrderError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"name" => Ok(Self::Name),
			"type" => Ok(Self::Type),
			"version" => Ok(Self::Version),
			"keyword_count" | "keywords" => Ok(Self::KeywordCount),
			"times_used" => Ok(Self::TimesUsed),
			other => Err(ParseOrderError(other.to_string())),
		}
	}
}

impl FromStr for CollectionOrder {
	type Err = ParseOrderError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let s = s.trim();
		match s.strip_prefix('-') {
			Some(key) => Ok(Self::descending(key.parse()?)),
			None => Ok(Self::ascending(s.parse()?)),
		}
	}
}
