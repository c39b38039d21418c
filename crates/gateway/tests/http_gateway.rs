//! `HttpGateway` against a local axum server serving JSON fixtures.

use std::collections::HashMap;
use std::time::Duration;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use pretty_assertions::assert_eq;
use rfhub_config::ApiConfig;
use rfhub_gateway::{FailureKind, Gateway, GatewayError, HttpGateway, PageRange};
use rfhub_model::{CollectionId, CollectionOrder, KeywordId, SortKey};
use serde_json::{Value, json};

async fn serve(router: Router) -> String {
	let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("must bind listener");
	let addr = listener.local_addr().expect("must have local addr");
	tokio::spawn(async move {
		axum::serve(listener, router).await.expect("server must run");
	});
	format!("http://{addr}")
}

fn gateway(base_url: String, timeout_ms: u64) -> HttpGateway {
	HttpGateway::new(&ApiConfig { base_url, timeout_ms }).expect("must build gateway")
}

fn hub_router() -> Router {
	Router::new()
		.route("/api/v1/version/", get(|| async { Json(json!({"title": "rfhub2", "version": "2.0.1"})) }))
		.route(
			"/api/v1/collections/stats/",
			get(|Query(params): Query<HashMap<String, String>>| async move {
				let skip: u64 = params["skip"].parse().unwrap();
				let limit: u64 = params["limit"].parse().unwrap();
				let order = params.get("order").cloned().unwrap_or_default();
				let total = 140u64;
				let items: Vec<Value> = (skip..(skip + limit).min(total))
					.map(|i| {
						let kind = if i % 7 == 0 { Value::Null } else { json!("library") };
						json!({
							"id": i + 1,
							"name": format!("lib{i}{order}"),
							"type": kind,
							"version": null,
							"scope": null,
							"named_args": null,
							"path": null,
							"doc": null,
							"doc_format": null,
							"keywords": []
						})
					})
					.collect();
				Json(Value::Array(items))
			}),
		)
		.route(
			"/api/v1/collections/stats/{id}/",
			get(|Path(id): Path<u64>| async move {
				if id == 404 {
					return Err(StatusCode::NOT_FOUND);
				}
				Ok(Json(json!({
					"id": id,
					"name": "SeleniumLibrary",
					"type": "library",
					"version": "4.0",
					"scope": "global",
					"path": "/libs/selenium",
					"doc": null,
					"doc_format": null,
					"synopsis": "Web testing",
					"html_doc": "<p>Web testing</p>",
					"times_used": 9
				})))
			}),
		)
		.route(
			"/api/v1/keywords/stats/",
			get(|Query(params): Query<HashMap<String, String>>| async move {
				let collection_id = params["collection_id"].clone();
				Json(json!([
					{"id": 41, "name": format!("Open Browser {collection_id}"), "arg_string": "url", "times_used": 3, "avg_elapsed": 0.25},
					{"id": 42, "name": "Click Element", "doc": null, "args": null, "arg_string": "locator"}
				]))
			}),
		)
		.route(
			"/api/v1/keywords/search/",
			get(|Query(params): Query<HashMap<String, String>>| async move {
				let pattern = params["pattern"].clone();
				let skip: u64 = params["skip"].parse().unwrap();
				Json(json!([
					{"id": skip + 1, "name": pattern, "doc": null, "args": null, "collection": {"id": 5, "name": "SeleniumLibrary"}}
				]))
			}),
		)
}

#[tokio::test]
async fn fetches_version_info() {
	let gateway = gateway(serve(hub_router()).await, 2_000);
	let version = gateway.version().await.unwrap();
	assert_eq!(version.title, "rfhub2");
	assert_eq!(version.version, "2.0.1");
}

#[tokio::test]
async fn pages_collections_with_order() {
	let gateway = gateway(serve(hub_router()).await, 2_000);

	let first = gateway.collections(PageRange::new(0, 100), None).await.unwrap();
	assert_eq!(first.len(), 100);
	assert_eq!(first[0].id(), CollectionId(1));
	assert_eq!(first[0].info.kind, "", "null type reads as empty");
	assert_eq!(first[1].info.kind, "library");
	assert_eq!(first[1].info.doc, "");

	let second = gateway
		.collections(PageRange::new(100, 100), Some(CollectionOrder::descending(SortKey::Name)))
		.await
		.unwrap();
	assert_eq!(second.len(), 40);
	assert_eq!(second[0].info.name, "lib100-name");
	assert_eq!(second[39].id(), CollectionId(140));
}

#[tokio::test]
async fn assembles_collection_detail() {
	let gateway = gateway(serve(hub_router()).await, 2_000);
	let detail = gateway.collection_detail(CollectionId(5), 1000).await.unwrap();

	assert_eq!(detail.id(), CollectionId(5));
	assert_eq!(detail.info.path.as_deref(), Some("/libs/selenium"));
	assert_eq!(detail.keywords.len(), 2);
	assert_eq!(detail.keywords[0].name, "Open Browser 5");
	assert_eq!(detail.keywords[0].avg_elapsed, Some(0.25));
	assert_eq!(detail.keywords[1].id, KeywordId(42));
	assert_eq!(detail.keywords[1].doc, "");
	assert_eq!(detail.info.doc, "");
}

#[tokio::test]
async fn search_sends_pattern_verbatim() {
	let gateway = gateway(serve(hub_router()).await, 2_000);
	let hits = gateway.search_keywords("name:open in: selenium", PageRange::new(100, 100)).await.unwrap();

	assert_eq!(hits.len(), 1);
	assert_eq!(hits[0].name, "name:open in: selenium");
	assert_eq!(hits[0].id, KeywordId(101));
	assert_eq!(hits[0].collection.name, "SeleniumLibrary");
	assert_eq!(hits[0].doc, "");
}

#[tokio::test]
async fn non_success_status_is_a_network_failure() {
	let gateway = gateway(serve(hub_router()).await, 2_000);
	let err = gateway.collection(CollectionId(404)).await.unwrap_err();

	assert!(matches!(err, GatewayError::Status { status: 404, .. }));
	assert_eq!(err.kind(), FailureKind::Network);
}

#[tokio::test]
async fn wrong_shape_is_a_decode_failure() {
	let router = Router::new().route("/api/v1/version/", get(|| async { Json(json!({"title": 7})) }));
	let gateway = gateway(serve(router).await, 2_000);
	let err = gateway.version().await.unwrap_err();

	assert!(matches!(err, GatewayError::Decode { .. }), "unexpected error: {err}");
	assert_eq!(err.kind(), FailureKind::Decode);
}

#[tokio::test]
async fn slow_server_hits_timeout() {
	let router = Router::new().route(
		"/api/v1/version/",
		get(|| async {
			tokio::time::sleep(Duration::from_secs(5)).await;
			Json(json!({"title": "rfhub2", "version": "late"}))
		}),
	);
	let gateway = gateway(serve(router).await, 100);
	let err = gateway.version().await.unwrap_err();

	assert!(matches!(err, GatewayError::Timeout { .. }), "unexpected error: {err}");
}

#[tokio::test]
async fn refused_connection_is_a_network_failure() {
	let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
	let addr = listener.local_addr().unwrap();
	drop(listener);

	let gateway = gateway(format!("http://{addr}"), 2_000);
	let err = gateway.version().await.unwrap_err();
	assert!(matches!(err, GatewayError::Network { .. }), "unexpected error: {err}");
}
