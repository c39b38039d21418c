use std::io::Write;

use anyhow::bail;
use rfhub_store::{Operation, Route, Store};

use crate::cli::Command;
use crate::render;

/// Drives `store` for one subcommand and writes the rendered view to `out`.
pub async fn run(command: &Command, store: &mut Store, out: &mut impl Write) -> anyhow::Result<()> {
	match command {
		Command::Version => {
			store.settle().await;
			check(store, Operation::Version)?;
			if let Some(info) = store.version() {
				out.write_all(render::version(info).as_bytes())?;
			}
		}
		Command::Collections { all, order } => {
			if order.is_some() {
				store.set_collection_order(*order);
			}
			store.settle().await;
			while *all && store.load_more_collections() {
				store.settle().await;
			}
			check(store, Operation::Collections)?;
			out.write_all(render::collections(store.collections()).as_bytes())?;
		}
		Command::Show { id, keyword } => {
			let route = match keyword {
				Some(keyword) => Route::Keyword {
					collection: *id,
					keyword: *keyword,
				},
				None => Route::Collection(*id),
			};
			open(&route, store, out).await?;
		}
		Command::Search { pattern, pages } => {
			store.set_search_term(pattern);
			store.settle().await;
			for _ in 1..*pages {
				if !store.load_more_search_results() {
					break;
				}
				store.settle().await;
			}
			check(store, Operation::Search)?;
			out.write_all(render::search(store.search()).as_bytes())?;
		}
		Command::Open { route } => open(route, store, out).await?,
	}
	Ok(())
}

async fn open(route: &Route, store: &mut Store, out: &mut impl Write) -> anyhow::Result<()> {
	store.navigate(route);
	store.settle().await;
	let view = match route {
		Route::Collections => {
			check(store, Operation::Collections)?;
			render::collections(store.collections())
		}
		Route::Search { .. } => {
			check(store, Operation::Search)?;
			render::search(store.search())
		}
		Route::Collection(_) | Route::Keyword { .. } => {
			check(store, Operation::CollectionDetail)?;
			match store.collection_detail() {
				Some(detail) => render::detail(detail, store.focused_keyword()),
				None => String::new(),
			}
		}
	};
	out.write_all(view.as_bytes())?;
	Ok(())
}

fn check(store: &Store, operation: Operation) -> anyhow::Result<()> {
	if let Some(failure) = store.failure(operation) {
		bail!("{failure}");
	}
	Ok(())
}
