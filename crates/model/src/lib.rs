//! Entity model for the keyword hub client.
//!
//! Plain records with no behavior beyond construction and parsing. Wire field
//! names are the API's snake_case names.
//!
//! Collections come in two shapes that are kept as distinct types:
//!
//! * [`CollectionSummary`]: listing and by-id shape, keywords sparse or absent.
//! * [`CollectionDetail`]: summary fields plus the complete keyword listing.
//!
//! Keywords likewise: [`Keyword`] is the nested listing shape and
//! [`SearchKeyword`] carries an embedded [`CollectionRef`].

mod collection;
mod de;
mod ids;
mod keyword;
mod order;
mod query;

use serde::{Deserialize, Serialize};

pub use collection::{CollectionDetail, CollectionInfo, CollectionSummary};
pub use ids::{CollectionId, KeywordId, ParseIdError};
pub use keyword::{CollectionRef, Keyword, SearchKeyword};
pub use order::{CollectionOrder, ParseOrderError, SortKey};
pub use query::SearchQuery;

/// Server identification, fetched once per process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionInfo {
	pub title: String,
	pub version: String,
}
