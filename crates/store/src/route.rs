//! Deep-link routes the store can be driven from.
//!
//! | Path | Route |
//! |---|---|
//! | `/` | [`Route::Collections`] |
//! | `/search/?q={term}` | [`Route::Search`] |
//! | `/keywords/{id}/` | [`Route::Collection`] |
//! | `/keywords/{id}/{keyword_id}` | [`Route::Keyword`] |
//!
//! Trailing slashes are optional when parsing. The search term is
//! form-urlencoded.

use std::fmt;
use std::str::FromStr;

use rfhub_model::{CollectionId, KeywordId, ParseIdError};
use thiserror::Error;
use url::form_urlencoded;

const SEARCH_PARAM: &str = "q";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
	Collections,
	Search { query: String },
	Collection(CollectionId),
	Keyword { collection: CollectionId, keyword: KeywordId },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
	#[error("unknown route: {0:?}")]
	Unknown(String),
	#[error(transparent)]
	InvalidId(#[from] ParseIdError),
}

impl Route {
	pub fn parse(raw: &str) -> Result<Self, RouteError> {
		let (path, query) = raw.split_once('?').unwrap_or((raw, ""));
		if !path.starts_with('/') {
			return Err(RouteError::Unknown(raw.to_string()));
		}

		let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();
		match segments.as_slice() {
			[] => Ok(Self::Collections),
			["search"] => {
				let query = form_urlencoded::parse(query.as_bytes())
					.find(|(key, _)| key == SEARCH_PARAM)
					.map(|(_, value)| value.into_owned())
					.unwrap_or_default();
				Ok(Self::Search { query })
			}
			["keywords", id] => Ok(Self::Collection(id.parse()?)),
			["keywords", id, keyword] => Ok(Self::Keyword {
				collection: id.parse()?,
				keyword: keyword.parse()?,
			}),
			_ => Err(RouteError::Unknown(raw.to_string())),
		}
	}
}

impl FromStr for Route {
	type Err = RouteError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

impl fmt::Display for Route {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Collections => f.write_str("/"),
			Self::Search { query } => {
				let encoded = form_urlencoded::Serializer::new(String::new()).append_pair(SEARCH_PARAM, query).finish();
				write!(f, "/search/?{encoded}")
			}
			Self::Collection(id) => write!(f, "/keywords/{id}/"),
			Self::Keyword { collection, keyword } => write!(f, "/keywords/{collection}/{keyword}"),
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("/", Route::Collections)]
	#[case("/search/?q=open+browser", Route::Search { query: "open browser".to_string() })]
	#[case("/search?q=name%3Aclick%20in%3A%20selenium", Route::Search { query: "name:click in: selenium".to_string() })]
	#[case("/search/", Route::Search { query: String::new() })]
	#[case("/keywords/5/", Route::Collection(CollectionId(5)))]
	#[case("/keywords/5", Route::Collection(CollectionId(5)))]
	#[case("/keywords/5/42", Route::Keyword { collection: CollectionId(5), keyword: KeywordId(42) })]
	#[case("/keywords/5/42/", Route::Keyword { collection: CollectionId(5), keyword: KeywordId(42) })]
	fn parses_routes(#[case] raw: &str, #[case] expected: Route) {
		assert_eq!(Route::parse(raw), Ok(expected));
	}

	#[rstest]
	#[case("keywords/5/")]
	#[case("/collections/")]
	#[case("/keywords/5/42/7")]
	fn rejects_unknown_paths(#[case] raw: &str) {
		assert!(matches!(Route::parse(raw), Err(RouteError::Unknown(_))));
	}

	#[test]
	fn rejects_non_numeric_ids() {
		assert!(matches!(Route::parse("/keywords/abc/"), Err(RouteError::InvalidId(_))));
	}

	#[rstest]
	#[case(Route::Collections, "/")]
	#[case(Route::Search { query: "log in: builtin".to_string() }, "/search/?q=log+in%3A+builtin")]
	#[case(Route::Collection(CollectionId(3)), "/keywords/3/")]
	#[case(Route::Keyword { collection: CollectionId(3), keyword: KeywordId(8) }, "/keywords/3/8")]
	fn renders_paths(#[case] route: Route, #[case] expected: &str) {
		assert_eq!(route.to_string(), expected);
		assert_eq!(Route::parse(expected), Ok(route));
	}
}
