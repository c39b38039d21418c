/// Execution classes used for fetch scheduling and observability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskClass {
	/// Fetches a user is actively waiting on (detail views, search-as-you-type).
	Interactive,
	/// Fetches that fill caches ahead of need (startup, infinite-scroll pages).
	Background,
}

impl TaskClass {
	pub(crate) const fn as_str(self) -> &'static str {
		match self {
			Self::Interactive => "interactive",
			Self::Background => "background",
		}
	}
}
