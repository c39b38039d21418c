use std::time::Instant;

use rfhub_config::ApiConfig;
use rfhub_model::{CollectionId, CollectionOrder, CollectionSummary, Keyword, SearchKeyword, VersionInfo};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{Endpoints, Gateway, GatewayError, PageRange, Result};

/// `reqwest`-backed gateway issuing JSON GET requests.
#[derive(Debug, Clone)]
pub struct HttpGateway {
	client: reqwest::Client,
	endpoints: Endpoints,
}

impl HttpGateway {
	/// Builds a gateway for `config.base_url`, applying the configured timeout
	/// to every request.
	pub fn new(config: &ApiConfig) -> Result<Self> {
		let endpoints = Endpoints::new(&config.base_url)?;
		let mut builder = reqwest::Client::builder();
		if let Some(timeout) = config.timeout() {
			builder = builder.timeout(timeout);
		}
		let client = builder.build().map_err(|e| GatewayError::Network {
			url: config.base_url.clone(),
			message: e.to_string(),
		})?;
		Ok(Self { client, endpoints })
	}

	pub fn endpoints(&self) -> &Endpoints {
		&self.endpoints
	}

	async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T> {
		let started = Instant::now();
		tracing::debug!(url = %url, "gateway.get");

		let response = self.client.get(url.clone()).send().await.map_err(|e| transport_error(&url, &e))?;
		let status = response.status();
		if !status.is_success() {
			tracing::debug!(url = %url, status = status.as_u16(), "gateway.get.status");
			return Err(GatewayError::Status {
				url: url.to_string(),
				status: status.as_u16(),
			});
		}

		let body = response.bytes().await.map_err(|e| transport_error(&url, &e))?;
		let value = serde_json::from_slice(&body).map_err(|e| GatewayError::Decode {
			url: url.to_string(),
			message: e.to_string(),
		})?;
		tracing::trace!(url = %url, bytes = body.len(), elapsed_ms = started.elapsed().as_millis() as u64, "gateway.get.done");
		Ok(value)
	}
}

fn transport_error(url: &Url, error: &reqwest::Error) -> GatewayError {
	if error.is_timeout() {
		GatewayError::Timeout { url: url.to_string() }
	} else {
		GatewayError::Network {
			url: url.to_string(),
			message: error.to_string(),
		}
	}
}

#[async_trait::async_trait]
impl Gateway for HttpGateway {
	async fn version(&self) -> Result<VersionInfo> {
		self.get_json(self.endpoints.version()?).await
	}

	async fn collections(&self, page: PageRange, order: Option<CollectionOrder>) -> Result<Vec<CollectionSummary>> {
		self.get_json(self.endpoints.collections(page, order)?).await
	}

	async fn collection(&self, id: CollectionId) -> Result<CollectionSummary> {
		self.get_json(self.endpoints.collection(id)?).await
	}

	async fn collection_keywords(&self, id: CollectionId, limit: usize) -> Result<Vec<Keyword>> {
		self.get_json(self.endpoints.collection_keywords(id, limit)?).await
	}

	async fn search_keywords(&self, pattern: &str, page: PageRange) -> Result<Vec<SearchKeyword>> {
		self.get_json(self.endpoints.search_keywords(pattern, page)?).await
	}
}
