use std::io::Write;

use clap::CommandFactory;
use pretty_assertions::assert_eq;
use rfhub_model::SortKey;

use super::*;

fn parse(args: &[&str]) -> Cli {
	Cli::try_parse_from(std::iter::once("rfhub").chain(args.iter().copied())).expect("args must parse")
}

#[test]
fn schema_is_consistent() {
	Cli::command().debug_assert();
}

#[test]
fn parse_collections_with_descending_order() {
	let cli = parse(&["collections", "--all", "--order", "-times_used"]);
	assert_eq!(
		cli.command,
		Command::Collections {
			all: true,
			order: Some(CollectionOrder::descending(SortKey::TimesUsed)),
		}
	);
}

#[test]
fn parse_show_with_keyword() {
	let cli = parse(&["show", "5", "-k", "42"]);
	assert_eq!(
		cli.command,
		Command::Show {
			id: CollectionId(5),
			keyword: Some(KeywordId(42)),
		}
	);
}

#[test]
fn parse_search_defaults_to_one_page() {
	let cli = parse(&["search", "name:open in: selenium"]);
	assert_eq!(
		cli.command,
		Command::Search {
			pattern: "name:open in: selenium".to_string(),
			pages: 1,
		}
	);
}

#[test]
fn parse_open_route() {
	let cli = parse(&["open", "/keywords/3/8"]);
	assert_eq!(
		cli.command,
		Command::Open {
			route: Route::Keyword {
				collection: CollectionId(3),
				keyword: KeywordId(8),
			},
		}
	);
}

#[test]
fn global_flags_follow_subcommand() {
	let cli = parse(&["version", "--api-url", "http://hub.test:9000", "-v"]);
	assert_eq!(cli.api_url.as_deref(), Some("http://hub.test:9000"));
	assert!(cli.verbose);
}

#[test]
fn rejects_bad_ids_and_routes() {
	assert!(Cli::try_parse_from(["rfhub", "show", "five"]).is_err());
	assert!(Cli::try_parse_from(["rfhub", "open", "/nowhere"]).is_err());
	assert!(Cli::try_parse_from(["rfhub", "collections", "--order", "size"]).is_err());
}

#[test]
fn api_url_flag_overrides_config_file() {
	let mut file = tempfile::NamedTempFile::new().expect("must create temp file");
	writeln!(file, "[api]\nbase_url = \"http://from-file:8000\"\n\n[paging]\npage_size = 25").expect("must write config");

	let path = file.path().to_str().expect("temp path must be utf-8");
	let config = parse(&["-c", path, "version"]).resolve_config().unwrap();
	assert_eq!(config.paging.page_size, 25);

	let config = parse(&["-c", path, "--api-url", "http://flag:1", "version"]).resolve_config().unwrap();
	assert_eq!(config.api.base_url, "http://flag:1");
	assert_eq!(config.paging.page_size, 25);
}

#[test]
fn invalid_api_url_flag_is_rejected() {
	let file = tempfile::NamedTempFile::new().expect("must create temp file");
	let path = file.path().to_str().expect("temp path must be utf-8");
	assert!(parse(&["-c", path, "--api-url", "not a url", "version"]).resolve_config().is_err());
}
