use rfhub_model::{CollectionId, KeywordId};

/// Navigation highlight state. No I/O.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
	expanded: Option<CollectionId>,
	focused: Option<KeywordId>,
}

impl Selection {
	/// Collection open in the navigation list, if any.
	pub const fn expanded(&self) -> Option<CollectionId> {
		self.expanded
	}

	/// Keyword the detail view should scroll to, if any.
	pub const fn focused(&self) -> Option<KeywordId> {
		self.focused
	}

	/// Collapses `id` when it is open, otherwise opens it in place of any other.
	pub fn toggle_expanded(&mut self, id: CollectionId) {
		self.expanded = match self.expanded {
			Some(open) if open == id => None,
			_ => Some(id),
		};
	}

	pub fn expand(&mut self, id: CollectionId) {
		self.expanded = Some(id);
	}

	pub fn focus(&mut self, id: Option<KeywordId>) {
		self.focused = id;
	}

	pub fn clear_focus(&mut self) {
		self.focused = None;
	}
}
