use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when an id segment is not a non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} id: {raw:?}")]
pub struct ParseIdError {
	kind: &'static str,
	raw: String,
}

macro_rules! entity_id {
	($(#[$meta:meta])* $name:ident, $kind:literal) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
		#[serde(transparent)]
		pub struct $name(pub u64);

		impl $name {
			pub const fn get(self) -> u64 {
				self.0
			}
		}

		impl fmt::Display for $name {
			fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
				self.0.fmt(f)
			}
		}

		impl FromStr for $name {
			type Err = ParseIdError;

			fn from_str(s: &str) -> Result<Self, Self::Err> {
				s.parse::<u64>().map(Self).map_err(|_| ParseIdError {
					kind: $kind,
					raw: s.to_string(),
				})
			}
		}

		impl From<u64> for $name {
			fn from(value: u64) -> Self {
				Self(value)
			}
		}
	};
}

entity_id!(
	/// Server-assigned collection (library / resource file) id.
	CollectionId,
	"collection"
);
entity_id!(
	/// Server-assigned keyword id.
	KeywordId,
	"keyword"
);

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn ids_parse_and_display() {
		let id: CollectionId = "42".parse().unwrap();
		assert_eq!(id, CollectionId(42));
		assert_eq!(id.to_string(), "42");
	}

	#[test]
	fn negative_or_text_ids_are_rejected() {
		let err = "-1".parse::<KeywordId>().unwrap_err();
		assert_eq!(err.to_string(), "invalid keyword id: \"-1\"");
		assert!("abc".parse::<CollectionId>().is_err());
	}
}
