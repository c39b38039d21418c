//! CLI schema and config resolution for the rfhub binary.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use rfhub_config::Config;
use rfhub_model::{CollectionId, CollectionOrder, KeywordId};
use rfhub_store::Route;

#[derive(Parser, Debug)]
#[command(name = "rfhub")]
#[command(about = "Browse a keyword hub from the terminal")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// API base url, overriding the config file and RFHUB_API_URL
	#[arg(long, global = true, value_name = "URL")]
	pub api_url: Option<String>,

	/// Config file (defaults to the user config dir)
	#[arg(long, short = 'c', global = true, value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Verbose logging
	#[arg(long, short, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
	/// Print the server title and version
	Version,
	/// List collections
	Collections {
		/// Keep loading pages until the listing ends
		#[arg(long)]
		all: bool,
		/// Sort column, `-` prefixed for descending (e.g. -times_used)
		#[arg(long, value_name = "KEY", allow_hyphen_values = true)]
		order: Option<CollectionOrder>,
	},
	/// Show a collection and its keywords
	Show {
		/// Collection id
		id: CollectionId,
		/// Keyword to mark in the listing
		#[arg(long, short = 'k', value_name = "ID")]
		keyword: Option<KeywordId>,
	},
	/// Search keywords
	Search {
		/// Search pattern, sent verbatim (supports `name:`, `tags:`, ` in: <collection>`)
		pattern: String,
		/// Result pages to load
		#[arg(long, default_value_t = 1, value_name = "N")]
		pages: usize,
	},
	/// Open a deep link such as `/keywords/5/42` or `/search/?q=log`
	Open {
		/// Route path
		route: Route,
	},
}

impl Cli {
	/// Resolves config: file, then `RFHUB_API_URL`, then `--api-url`.
	pub fn resolve_config(&self) -> anyhow::Result<Config> {
		let mut config = Config::load_or_default(self.config.as_deref()).context("failed to load config")?;
		if let Some(url) = &self.api_url {
			config.api.base_url = url.clone();
		}
		config.validate().context("invalid --api-url")?;
		Ok(config)
	}
}

#[cfg(test)]
mod tests;
