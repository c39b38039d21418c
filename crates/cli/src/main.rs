//! rfhub binary.
//!
//! One-shot terminal views over a keyword hub: builds a store from config,
//! drives it for a single subcommand, and prints the result.

mod cli;
mod render;
mod run;

use clap::Parser;
use cli::Cli;
use rfhub_store::Store;

/// Log filter override, same syntax as `RUST_LOG`.
const LOG_ENV: &str = "RFHUB_LOG";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let config = cli.resolve_config()?;
	tracing::debug!(api_url = %config.api.base_url, page_size = config.paging.page_size, "rfhub.start");

	let mut store = Store::from_config(&config)?;
	let mut stdout = std::io::stdout().lock();
	run::run(&cli.command, &mut store, &mut stdout).await
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("rfhub_store=debug,rfhub_gateway=debug,rfhub_config=debug,info")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(true)
		.init();
}
