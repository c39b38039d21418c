use rfhub_model::{CollectionId, CollectionOrder};
use url::Url;

use crate::{GatewayError, PageRange, Result};

/// Builds request URLs for the logical API endpoints under one base URL.
///
/// The base may carry a path prefix (`http://host/hub`); endpoint paths are
/// appended below it.
#[derive(Debug, Clone)]
pub struct Endpoints {
	base: Url,
}

impl Endpoints {
	pub fn new(base_url: &str) -> Result<Self> {
		let mut base = Url::parse(base_url).map_err(|e| GatewayError::InvalidUrl(format!("{base_url}: {e}")))?;
		if base.cannot_be_a_base() {
			return Err(GatewayError::InvalidUrl(format!("{base_url}: cannot be a base")));
		}
		if !base.path().ends_with('/') {
			let path = format!("{}/", base.path());
			base.set_path(&path);
		}
		base.set_query(None);
		Ok(Self { base })
	}

	pub fn base(&self) -> &Url {
		&self.base
	}

	pub fn version(&self) -> Result<Url> {
		self.path("api/v1/version/")
	}

	pub fn collections(&self, page: PageRange, order: Option<CollectionOrder>) -> Result<Url> {
		let mut url = self.path("api/v1/collections/stats/")?;
		{
			let mut query = url.query_pairs_mut();
			query.append_pair("skip", &page.skip.to_string());
			query.append_pair("limit", &page.limit.to_string());
			if let Some(order) = order {
				query.append_pair("order", &order.to_string());
			}
		}
		Ok(url)
	}

	pub fn collection(&self, id: CollectionId) -> Result<Url> {
		self.path(&format!("api/v1/collections/stats/{id}/"))
	}

	pub fn collection_keywords(&self, id: CollectionId, limit: usize) -> Result<Url> {
		let mut url = self.path("api/v1/keywords/stats/")?;
		url.query_pairs_mut()
			.append_pair("collection_id", &id.to_string())
			.append_pair("limit", &limit.to_string());
		Ok(url)
	}

	pub fn search_keywords(&self, pattern: &str, page: PageRange) -> Result<Url> {
		let mut url = self.path("api/v1/keywords/search/")?;
		url.query_pairs_mut()
			.append_pair("pattern", pattern)
			.append_pair("skip", &page.skip.to_string())
			.append_pair("limit", &page.limit.to_string());
		Ok(url)
	}

	fn path(&self, relative: &str) -> Result<Url> {
		self.base.join(relative).map_err(|e| GatewayError::InvalidUrl(format!("{relative}: {e}")))
	}
}
