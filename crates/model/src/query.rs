const IN_TOKEN: &str = " in:";
const NAME_TOKEN: &str = "name:";
const TAG_TOKEN: &str = "tags:";
const WILDCARD: &str = "*";

/// Client-side view of the server's keyword search grammar.
///
/// The raw term is what gets sent; this only describes how the server will
/// interpret it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
	pub pattern: String,
	pub collection: Option<String>,
	pub use_doc: bool,
	pub use_tags: bool,
}

impl Default for SearchQuery {
	fn default() -> Self {
		Self {
			pattern: WILDCARD.to_string(),
			collection: None,
			use_doc: true,
			use_tags: false,
		}
	}
}

impl SearchQuery {
	pub fn parse(raw: &str) -> Self {
		if raw.is_empty() || raw == WILDCARD {
			return Self::default();
		}

		let mut pattern = raw.trim().to_lowercase();
		let mut collection = None;
		let mut use_doc = true;
		let mut use_tags = false;

		if let Some(rest) = pattern.strip_prefix(NAME_TOKEN) {
			pattern = rest.trim().to_string();
			use_doc = false;
		}
		if let Some((query, name)) = pattern.split_once(IN_TOKEN)
			&& !name.is_empty()
		{
			collection = Some(name.trim().to_string());
			pattern = query.trim().to_string();
		}
		if let Some((_, tag)) = pattern.split_once(TAG_TOKEN) {
			pattern = tag.trim().to_string();
			use_doc = false;
			use_tags = true;
		}

		Self {
			pattern,
			collection,
			use_doc,
			use_tags,
		}
	}
}
