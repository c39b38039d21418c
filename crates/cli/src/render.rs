//! Plain-text views over store state.

use std::fmt::Write;

use rfhub_model::{CollectionDetail, CollectionSummary, KeywordId, SearchKeyword, VersionInfo};
use rfhub_store::{PagedCache, SearchSession};

pub fn version(info: &VersionInfo) -> String {
	format!("{} {}\n", info.title, info.version)
}

pub fn collections(listing: &PagedCache<CollectionSummary>) -> String {
	let mut out = format!("Collections ({})\n", listing.count_label());
	for summary in listing.values() {
		let info = &summary.info;
		let _ = writeln!(
			out,
			"{:>6}  {:<32} {:<10} {}",
			info.id,
			info.name,
			info.kind,
			info.version.as_deref().unwrap_or("-")
		);
	}
	out
}

pub fn search(session: &SearchSession<SearchKeyword>) -> String {
	let results = session.results();
	if results.is_empty() {
		return "No keywords found\n".to_string();
	}

	let mut out = format!("Found {} keywords matching \"{}\"\n", results.count_label(), session.term());
	if let Some(collection) = session.query().collection {
		let _ = writeln!(out, "in collection: {collection}");
	}
	for hit in results.values() {
		let _ = writeln!(out, "{:>6}  {:<40} {}", hit.id, hit.name, hit.collection.name);
	}
	out
}

/// Collection header and keyword listing; `focus` is marked with `>`.
pub fn detail(detail: &CollectionDetail, focus: Option<KeywordId>) -> String {
	let info = &detail.info;
	let mut out = match &info.version {
		Some(version) => format!("{} {version}\n", info.name),
		None => format!("{}\n", info.name),
	};
	if !info.synopsis.is_empty() {
		let _ = writeln!(out, "{}", info.synopsis);
	}
	let _ = writeln!(out, "{} keywords", detail.keywords.len());
	for keyword in &detail.keywords {
		let marker = if Some(keyword.id) == focus { '>' } else { ' ' };
		if keyword.arg_string.is_empty() {
			let _ = writeln!(out, "{marker} {}", keyword.name);
		} else {
			let _ = writeln!(out, "{marker} {} ({})", keyword.name, keyword.arg_string);
		}
	}
	out
}
