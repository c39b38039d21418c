use serde::{Deserialize, Serialize};

use crate::de::null_as_default;
use crate::{CollectionId, Keyword};

/// Fields shared by every collection shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionInfo {
	pub id: CollectionId,
	pub name: String,
	/// Library kind as reported by the server (`library`, `resource`).
	#[serde(rename = "type", default, deserialize_with = "null_as_default")]
	pub kind: String,
	#[serde(default)]
	pub version: Option<String>,
	#[serde(default)]
	pub scope: Option<String>,
	#[serde(default)]
	pub path: Option<String>,
	#[serde(default, deserialize_with = "null_as_default")]
	pub doc: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub synopsis: String,
	#[serde(default, deserialize_with = "null_as_default")]
	pub html_doc: String,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub times_used: Option<u64>,
}

/// Listing / by-id shape. `keywords` may be sparse or empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionSummary {
	#[serde(flatten)]
	pub info: CollectionInfo,
	#[serde(default, deserialize_with = "null_as_default")]
	pub keywords: Vec<Keyword>,
}

/// Detail shape: summary fields plus the collection's complete keyword listing.
///
/// Only produced by [`CollectionDetail::assemble`], never decoded directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionDetail {
	#[serde(flatten)]
	pub info: CollectionInfo,
	pub keywords: Vec<Keyword>,
}

impl CollectionInfo {
	pub fn new(id: impl Into<CollectionId>, name: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			name: name.into(),
			kind: String::new(),
			version: None,
			scope: None,
			path: None,
			doc: String::new(),
			synopsis: String::new(),
			html_doc: String::new(),
			times_used: None,
		}
	}
}

impl CollectionSummary {
	pub fn new(id: impl Into<CollectionId>, name: impl Into<String>) -> Self {
		Self {
			info: CollectionInfo::new(id, name),
			keywords: Vec::new(),
		}
	}

	pub fn id(&self) -> CollectionId {
		self.info.id
	}
}

impl CollectionDetail {
	/// Combines a by-id summary with its keyword listing.
	///
	/// Any keywords embedded in the summary are discarded in favor of the listing.
	pub fn assemble(summary: CollectionSummary, keywords: Vec<Keyword>) -> Self {
		Self {
			info: summary.info,
			keywords,
		}
	}

	pub fn id(&self) -> CollectionId {
		self.info.id
	}

	pub fn keyword(&self, id: crate::KeywordId) -> Option<&Keyword> {
		self.keywords.iter().find(|kw| kw.id == id)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::KeywordId;

	#[test]
	fn summary_decodes_type_and_nullable_fields() {
		let raw = r#"{
			"id": 1,
			"name": "BuiltIn",
			"type": "library",
			"version": "3.1.2",
			"scope": "global",
			"path": null,
			"synopsis": "Standard library",
			"html_doc": "<p>Standard library</p>",
			"times_used": 301,
			"keywords": [{"id": 10, "name": "Log"}]
		}"#;
		let summary: CollectionSummary = serde_json::from_str(raw).unwrap();
		assert_eq!(summary.id(), CollectionId(1));
		assert_eq!(summary.info.kind, "library");
		assert_eq!(summary.info.version.as_deref(), Some("3.1.2"));
		assert_eq!(summary.info.path, None);
		assert_eq!(summary.keywords.len(), 1);
	}

	#[test]
	fn summary_accepts_null_text_fields() {
		let raw = r#"{
			"id": 1,
			"name": "First collection",
			"type": null,
			"version": null,
			"scope": null,
			"named_args": null,
			"path": null,
			"doc": null,
			"doc_format": null,
			"synopsis": null,
			"html_doc": null,
			"keywords": [
				{"id": 1, "name": "Test setup", "doc": "Prepare test environment", "args": null},
				{"id": 3, "name": "Teardown", "doc": null, "args": null, "arg_string": null}
			]
		}"#;
		let summary: CollectionSummary = serde_json::from_str(raw).unwrap();
		assert_eq!(summary.info.kind, "");
		assert_eq!(summary.info.doc, "");
		assert_eq!(summary.info.synopsis, "");
		assert_eq!(summary.info.html_doc, "");
		assert_eq!(summary.keywords.len(), 2);
		assert_eq!(summary.keywords[1].doc, "");
		assert_eq!(summary.keywords[1].args, None);
	}

	#[test]
	fn listing_page_with_undocumented_library_decodes() {
		let raw = r#"[
			{"id": 2, "name": "Second collection", "type": "Robot", "version": null, "doc": null, "doc_format": null, "keywords": []},
			{"id": 3, "name": "Third", "type": "Library", "version": null, "doc": "Docs", "keywords": null}
		]"#;
		let page: Vec<CollectionSummary> = serde_json::from_str(raw).unwrap();
		assert_eq!(page.iter().map(CollectionSummary::id).collect::<Vec<_>>(), vec![CollectionId(2), CollectionId(3)]);
		assert_eq!(page[1].info.doc, "Docs");
		assert!(page[1].keywords.is_empty());
	}

	#[test]
	fn summary_without_keywords_is_valid() {
		let summary: CollectionSummary = serde_json::from_str(r#"{"id": 2, "name": "Collections", "type": "library"}"#).unwrap();
		assert!(summary.keywords.is_empty());
		assert_eq!(summary.info.times_used, None);
	}

	#[test]
	fn assemble_replaces_sparse_keywords() {
		let mut summary = CollectionSummary::new(5, "SeleniumLibrary");
		summary.keywords.push(Keyword::new(1, "stale"));
		let listing = vec![Keyword::new(41, "Open Browser"), Keyword::new(42, "Click Element")];

		let detail = CollectionDetail::assemble(summary, listing.clone());
		assert_eq!(detail.id(), CollectionId(5));
		assert_eq!(detail.keywords, listing);
		assert_eq!(detail.keyword(KeywordId(42)).map(|kw| kw.name.as_str()), Some("Click Element"));
		assert!(detail.keyword(KeywordId(1)).is_none());
	}
}
