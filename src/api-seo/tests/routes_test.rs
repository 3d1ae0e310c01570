//! Integration tests for the discovery routes
//!
//! Drives the router in-process against an in-memory content source:
//! - GET /sitemap.xml - XML sitemap of discoverable pages
//! - GET /llms.txt - Markdown page digest
//! - GET /robots.txt - configured passthrough
//! - GET /health

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tower::ServiceExt;
use uuid::Uuid;

use api_seo::{routes::router, state::AppState};
use core_seo::{
    ContentRecord, DiscoveryOptions, DiscoveryProvider, FieldValue, InMemoryContentSource, MemoryTagCache,
    StoredRecord, SystemFields,
};

/// Serializes tests that mutate process environment (robots tests).
static ENV_MUTEX: Mutex<()> = Mutex::const_new(());

fn stored(id: i32, url_path: &str, fields: &[(&str, FieldValue)]) -> StoredRecord {
    StoredRecord {
        schema: "SeoFields".to_string(),
        channel: "main".to_string(),
        language: "en".to_string(),
        content_type: "Article".to_string(),
        record: ContentRecord {
            system: SystemFields {
                id,
                global_id: Uuid::nil(),
                name: format!("page-{}", id),
                order: id,
                tree_path: url_path.to_string(),
                url_path: url_path.to_string(),
                language_id: 1,
                version_status: "Published".to_string(),
                content_type_id: 10,
                is_secured: false,
            },
            fields: fields.iter().map(|(k, v)| (k.to_string(), v.clone())).collect(),
        },
    }
}

/// Three records, one hidden by its visibility flag.
fn fixture_records() -> Vec<StoredRecord> {
    vec![
        stored(
            1,
            "/Home",
            &[
                ("ShowInSitemap", FieldValue::Flag(true)),
                ("SeoTitle", FieldValue::Text("Home".to_string())),
                ("SeoDescription", FieldValue::Text("The *front* page".to_string())),
            ],
        ),
        stored(2, "/secret", &[("ShowInSitemap", FieldValue::Flag(false))]),
        stored(
            3,
            "/news",
            &[
                ("ShowInSitemap", FieldValue::Flag(true)),
                ("SeoTitle", FieldValue::Text("News".to_string())),
            ],
        ),
    ]
}

fn test_app(records: Vec<StoredRecord>) -> axum::Router {
    let options = Arc::new(
        DiscoveryOptions::builder()
            .schema_name("SeoFields")
            .default_language("en")
            .title_field("SeoTitle")
            .description_field("SeoDescription")
            .visibility_field("ShowInSitemap")
            .content_types(["Article", "Page"])
            .build()
            .unwrap(),
    );
    let provider = DiscoveryProvider::new(
        options,
        "main",
        Arc::new(InMemoryContentSource::new(records)),
        Arc::new(MemoryTagCache::new()),
        Duration::from_secs(60),
    )
    .unwrap();
    router().with_state(AppState::new(Arc::new(provider)))
}

async fn body_string(body: Body) -> String {
    let bytes = body.collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header(header::HOST, "example.com")
        .body(Body::empty())
        .unwrap()
}

//
// GET /sitemap.xml tests
//

#[tokio::test]
async fn test_sitemap_lists_visible_pages_only() {
    let app = test_app(fixture_records());

    let response = app.oneshot(get("/sitemap.xml")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/xml"
    );

    let xml = body_string(response.into_body()).await;
    assert_eq!(xml.matches("<url>").count(), 2);
    assert!(xml.contains("<loc>http://example.com/home</loc>"));
    assert!(xml.contains("<loc>http://example.com/news</loc>"));
    assert!(!xml.contains("secret"));
    assert!(xml.contains("<changefreq>weekly</changefreq>"));
}

#[tokio::test]
async fn test_sitemap_honors_forwarded_proto() {
    let app = test_app(fixture_records());

    let request = Request::builder()
        .uri("/sitemap.xml")
        .header(header::HOST, "example.com")
        .header("x-forwarded-proto", "https")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let xml = body_string(response.into_body()).await;
    assert!(xml.contains("<loc>https://example.com/home</loc>"));
}

#[tokio::test]
async fn test_sitemap_empty_store() {
    let app = test_app(Vec::new());

    let response = app.oneshot(get("/sitemap.xml")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let xml = body_string(response.into_body()).await;
    assert!(!xml.contains("<url>"));
}

//
// GET /llms.txt tests
//

#[tokio::test]
async fn test_llms_txt_digest() {
    let app = test_app(fixture_records());

    let response = app.oneshot(get("/llms.txt")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/plain; charset=utf-8"
    );

    let digest = body_string(response.into_body()).await;
    assert!(digest.starts_with("# main\n\n## Pages\n\n"));

    // Same two visible pages as the sitemap, in query order, sanitized.
    let home = digest
        .find("- [Home](http://example.com/home): The \\*front\\* page")
        .unwrap();
    let news = digest.find("- [News](http://example.com/news)").unwrap();
    assert!(home < news);
    assert!(!digest.contains("secret"));
}

//
// GET /robots.txt tests
//

#[tokio::test]
async fn test_robots_normalizes_configured_content() {
    let _guard = ENV_MUTEX.lock().await;
    unsafe { std::env::set_var("ROBOTS_CONTENT", "  User-agent: *\n  Disallow:\n\n") };

    let app = test_app(Vec::new());
    let response = app.oneshot(get("/robots.txt")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response.into_body()).await;
    assert_eq!(body, "User-agent: *\nDisallow:");

    unsafe { std::env::remove_var("ROBOTS_CONTENT") };
}

#[tokio::test]
async fn test_robots_absent_content_is_empty_not_error() {
    let _guard = ENV_MUTEX.lock().await;
    unsafe { std::env::remove_var("ROBOTS_CONTENT") };

    let app = test_app(Vec::new());
    let response = app.oneshot(get("/robots.txt")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response.into_body()).await;
    assert_eq!(body, "");
}

//
// GET /health tests
//

#[tokio::test]
async fn test_health() {
    let app = test_app(Vec::new());
    let response = app.oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response.into_body()).await, "healthy");
}
