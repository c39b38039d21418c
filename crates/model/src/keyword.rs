use serde::{Deserialize, Serialize};

use crate::de::null_as_default;
use crate::{CollectionId, KeywordId};

/// Keyword as listed inside a collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
	pub id: KeywordId,
	pub name: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub doc: String,
	#[serde(default)]
	pub args: Option<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub arg_string: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub synopsis: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub html_doc: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub tags: Vec<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub times_used: Option<u64>,
	/// Average execution time reported by the statistics importer.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub avg_elapsed: Option<f64>,
}

/// Minimal collection reference embedded in search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionRef {
	pub id: CollectionId,
	pub name: String,
}

/// Keyword as returned by the search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchKeyword {
	pub id: KeywordId,
	pub name: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub doc: String,
	#[serde(default)]
	pub args: Option<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub arg_string: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub synopsis: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub html_doc: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub tags: Vec<String>,
	pub collection: CollectionRef,
}

impl Keyword {
	/// Builds a keyword with only identity fields populated.
	pub fn new(id: impl Into<KeywordId>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			doc: String::new(),
			args: None,
			arg_string: String::new(),
			synopsis: String::new(),
			html_doc: String::new(),
			tags: Vec::new(),
			times_used: None,
			avg_elapsed: None,
		}
	}
}

impl SearchKeyword {
	/// Builds a search hit with only identity fields populated.
	pub fn new(id: impl Into<KeywordId>, name: impl Into<String>, collection: CollectionRef) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			doc: String::new(),
			args: None,
			arg_string: String::new(),
			synopsis: String::new(),
			html_doc: String::new(),
			tags: Vec::new(),
			collection,
		}
	}
}
