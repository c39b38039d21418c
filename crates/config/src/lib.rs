//! Configuration for the keyword hub client.
//!
//! Configuration is written in TOML. Every field has a default, so an absent
//! or empty file yields [`Config::default`]:
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"
//! timeout_ms = 10000   # 0 disables the per-request timeout
//!
//! [paging]
//! page_size = 100
//! detail_keyword_limit = 1000
//! ```
//!
//! # Configuration Files
//!
//! Looked up at `$XDG_CONFIG_HOME/rfhub/config.toml` (or the platform
//! equivalent). `RFHUB_API_URL` overrides `api.base_url` after the file is read.

pub mod error;

use std::path::{Path, PathBuf};
use std::time::Duration;

pub use error::{ConfigError, Result};
use serde::Deserialize;

/// Page size used for every paged listing unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: usize = 100;
/// Keyword listing limit used when assembling a collection detail.
pub const DEFAULT_DETAIL_KEYWORD_LIMIT: usize = 1000;
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "RFHUB_API_URL";

/// Parsed configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	pub api: ApiConfig,
	pub paging: PagingConfig,
}

/// Remote API location and request bounds.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
	pub base_url: String,
	pub timeout_ms: u64,
}

/// Page sizes for incremental listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PagingConfig {
	pub page_size: usize,
	pub detail_keyword_limit: usize,
}

impl Default for ApiConfig {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_API_URL.to_string(),
			timeout_ms: DEFAULT_TIMEOUT_MS,
		}
	}
}

impl ApiConfig {
	/// Per-request timeout, `None` when disabled.
	pub fn timeout(&self) -> Option<Duration> {
		(self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
	}
}

impl Default for PagingConfig {
	fn default() -> Self {
		Self {
			page_size: DEFAULT_PAGE_SIZE,
			detail_keyword_limit: DEFAULT_DETAIL_KEYWORD_LIMIT,
		}
	}
}

impl Config {
	/// Parse and validate a TOML string.
	pub fn parse(input: &str) -> Result<Self> {
		let config: Config = toml::from_str(input)?;
		config.validate()?;
		Ok(config)
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Default config file location, if the platform has a config directory.
	pub fn default_path() -> Option<PathBuf> {
		dirs::config_dir().map(|dir| dir.join("rfhub").join("config.toml"))
	}

	/// Loads `path`, or the default location when `path` is `None`, then
	/// applies environment overrides.
	///
	/// A missing default file is not an error; a missing explicit file is.
	pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
		let mut config = match path {
			Some(path) => Self::load(path)?,
			None => match Self::default_path() {
				Some(path) if path.is_file() => Self::load(&path)?,
				_ => Self::default(),
			},
		};
		config.apply_env_from(|key| std::env::var(key).ok());
		config.validate()?;
		Ok(config)
	}

	/// Applies overrides looked up through `lookup` (normally the process env).
	pub fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
		if let Some(url) = lookup(API_URL_ENV).filter(|url| !url.trim().is_empty()) {
			tracing::debug!(url = %url, "config.api_url_from_env");
			self.api.base_url = url;
		}
	}

	pub fn validate(&self) -> Result<()> {
		url::Url::parse(&self.api.base_url).map_err(|error| ConfigError::InvalidUrl {
			url: self.api.base_url.clone(),
			error,
		})?;
		if self.paging.page_size == 0 {
			return Err(ConfigError::InvalidValue {
				field: "paging.page_size",
				reason: "must be greater than zero",
			});
		}
		if self.paging.detail_keyword_limit == 0 {
			return Err(ConfigError::InvalidValue {
				field: "paging.detail_keyword_limit",
				reason: "must be greater than zero",
			});
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn empty_input_yields_defaults() {
		let config = Config::parse("").unwrap();
		assert_eq!(config, Config::default());
		assert_eq!(config.paging.page_size, 100);
		assert_eq!(config.api.timeout(), Some(Duration::from_secs(10)));
	}

	#[test]
	fn partial_sections_keep_remaining_defaults() {
		let config = Config::parse("[api]\nbase_url = \"https://hub.example.org\"\n[paging]\npage_size = 25\n").unwrap();
		assert_eq!(config.api.base_url, "https://hub.example.org");
		assert_eq!(config.api.timeout_ms, DEFAULT_TIMEOUT_MS);
		assert_eq!(config.paging.page_size, 25);
		assert_eq!(config.paging.detail_keyword_limit, DEFAULT_DETAIL_KEYWORD_LIMIT);
	}

	#[test]
	fn zero_timeout_disables_it() {
		let config = Config::parse("[api]\ntimeout_ms = 0\n").unwrap();
		assert_eq!(config.api.timeout(), None);
	}

	#[test]
	fn rejects_zero_page_size() {
		let err = Config::parse("[paging]\npage_size = 0\n").unwrap_err();
		assert!(matches!(err, ConfigError::InvalidValue { field: "paging.page_size", .. }));
	}

	#[test]
	fn rejects_bad_url_and_unknown_keys() {
		assert!(matches!(Config::parse("[api]\nbase_url = \"not a url\"\n"), Err(ConfigError::InvalidUrl { .. })));
		assert!(matches!(Config::parse("[api]\nbogus = 1\n"), Err(ConfigError::Toml(_))));
	}

	#[test]
	fn env_override_replaces_base_url() {
		let mut config = Config::default();
		config.apply_env_from(|key| (key == API_URL_ENV).then(|| "http://10.0.0.5:8000".to_string()));
		assert_eq!(config.api.base_url, "http://10.0.0.5:8000");

		config.apply_env_from(|_| Some("   ".to_string()));
		assert_eq!(config.api.base_url, "http://10.0.0.5:8000");
	}

	#[test]
	fn load_reads_file_and_reports_missing_path() {
		let dir = tempfile::tempdir().expect("must create tempdir");
		let path = dir.path().join("config.toml");
		std::fs::write(&path, "[paging]\ndetail_keyword_limit = 50\n").expect("must write config");

		let config = Config::load(&path).unwrap();
		assert_eq!(config.paging.detail_keyword_limit, 50);

		let missing = Config::load(dir.path().join("absent.toml")).unwrap_err();
		assert!(matches!(missing, ConfigError::Io { .. }));
		assert!(Config::load_or_default(Some(&dir.path().join("absent.toml"))).is_err());
	}
}
