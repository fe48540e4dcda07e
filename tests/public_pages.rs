use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
    response::Response,
};
use http_body_util::BodyExt;
use pdr_portal::{
    application::{
        article::ArticleService,
        chrome::ChromeService,
        engagement::{RandomViewCounter, ReadingRegistry},
        listing::ListingService,
    },
    config::SiteSettings,
    domain::posts::{PostCatalog, PostId},
    infra::http::{HttpState, build_router},
};
use tower::ServiceExt;

fn app() -> (Router, ReadingRegistry) {
    let site = SiteSettings::default();
    let catalog = PostCatalog::builtin();
    let reading = ReadingRegistry::new();
    let state = HttpState {
        articles: Arc::new(ArticleService::new(
            catalog,
            Arc::new(RandomViewCounter::seeded(7)),
            &site,
        )),
        listing: Arc::new(ListingService::new(catalog)),
        chrome: Arc::new(ChromeService::new(site)),
        reading: reading.clone(),
    };
    (build_router(state), reading)
}

async fn send(app: &Router, method: Method, uri: &str, body: Body) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .expect("request should build");
    app.clone()
        .oneshot(request)
        .await
        .expect("router should respond")
}

async fn get_html(app: &Router, uri: &str) -> (StatusCode, String) {
    let response = send(app, Method::GET, uri, Body::empty()).await;
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    (status, String::from_utf8(bytes.to_vec()).expect("utf-8 body"))
}

#[tokio::test]
async fn post_page_renders_article_and_head_metadata() {
    let (app, _) = app();
    let post = PostCatalog::builtin()
        .find_by_id(PostId(3))
        .expect("post 3 exists");

    let (status, html) = get_html(&app, "/posts/3").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(&format!("<title>{} | PDR Portal</title>", post.title)));
    assert!(html.contains(r#"<meta property="og:type" content="article">"#));
    assert!(html.contains(r#"<meta name="twitter:card" content="summary_large_image">"#));
    assert!(html.contains(r#"<meta property="article:section" content="aile">"#));
    assert!(html.contains(r#"<link rel="canonical" href="http://localhost:3000/posts/3">"#));
    assert!(html.contains(" dk okuma"));
    assert!(html.contains(" görüntülenme"));
    assert!(html.contains(" sayfa"));
    assert!(html.contains("Geri Dön"));
    assert!(html.contains(r#"href="/?category=aile""#));
    assert!(html.contains("/posts/3/engagement/scroll"));
}

#[tokio::test]
async fn canonical_and_share_urls_keep_the_query_string() {
    let (app, _) = app();
    let (status, html) = get_html(&app, "/posts/3?ref=newsletter").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(
        r#"<link rel="canonical" href="http://localhost:3000/posts/3?ref=newsletter">"#
    ));
    assert!(html.contains(
        r#"<meta property="og:url" content="http://localhost:3000/posts/3?ref=newsletter">"#
    ));
    assert!(html.contains("posts%2F3%3Fref%3Dnewsletter"));
}

#[tokio::test]
async fn post_page_lists_related_posts_in_catalog_order() {
    let (app, _) = app();
    let (_, html) = get_html(&app, "/posts/3").await;

    let related = html
        .split("İlgili yazılar")
        .nth(1)
        .expect("related section rendered");
    let first = related.find(r#"href="/posts/1""#).expect("post 1 related");
    let second = related.find(r#"href="/posts/4""#).expect("post 4 related");
    let third = related.find(r#"href="/posts/5""#).expect("post 5 related");
    assert!(first < second && second < third);
    assert!(!related.contains(r#"href="/posts/8""#));
    assert!(!related.contains(r#"href="/posts/3""#));
}

#[tokio::test]
async fn unknown_post_renders_empty_state_without_redirect() {
    let (app, _) = app();

    for uri in ["/posts/999", "/posts/abc", "/posts/3.5"] {
        let response = send(&app, Method::GET, uri, Body::empty()).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert!(response.headers().get(header::LOCATION).is_none());

        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("body should collect")
            .to_bytes();
        let html = String::from_utf8(bytes.to_vec()).expect("utf-8 body");
        assert!(html.contains("Blog yazısı bulunamadı."));
        assert!(!html.contains(r#"content="article""#));
    }
}

#[tokio::test]
async fn listing_filters_by_selected_category() {
    let (app, _) = app();
    let (status, html) = get_html(&app, "/?category=okul").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Okul yazıları"));
    assert!(html.contains(r#"data-category="okul" aria-current="page""#));
    assert!(html.contains(r#"href="/posts/2""#));
    assert!(!html.contains(r#"href="/posts/1""#));
}

#[tokio::test]
async fn listing_ignores_unknown_categories() {
    let (app, _) = app();
    let (status, html) = get_html(&app, "/?category=bilinmeyen").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Tüm yazılar"));
    for id in 1..=8 {
        assert!(html.contains(&format!(r#"href="/posts/{id}""#)));
    }
}

#[tokio::test]
async fn unknown_routes_render_not_found_page() {
    let (app, _) = app();
    let (status, html) = get_html(&app, "/does/not/exist").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Sayfa bulunamadı"));
    assert!(html.contains("Ana sayfaya dön"));
}

#[tokio::test]
async fn health_and_static_assets_are_served() {
    let (app, _) = app();

    let health = send(&app, Method::GET, "/_health", Body::empty()).await;
    assert_eq!(health.status(), StatusCode::NO_CONTENT);

    let css = send(&app, Method::GET, "/static/public/app.css", Body::empty()).await;
    assert_eq!(css.status(), StatusCode::OK);
    assert_eq!(
        css.headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("text/css")
    );
}

#[tokio::test]
async fn scroll_reports_require_a_live_session() {
    let (app, _) = app();

    let stale = r#"{"visit":"00000000-0000-0000-0000-000000000000","scrollY":10,"documentHeight":2000,"viewportHeight":800}"#;
    let response = send(
        &app,
        Method::POST,
        "/posts/3/engagement/scroll",
        Body::from(stale),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = send(
        &app,
        Method::POST,
        "/posts/3/engagement/scroll",
        Body::from("not json"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(
        &app,
        Method::POST,
        "/posts/999/engagement/scroll",
        Body::from(stale),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

async fn next_event(body: &mut Body) -> String {
    let frame = body
        .frame()
        .await
        .expect("stream should yield a frame")
        .expect("frame should be readable");
    let data = frame.into_data().expect("data frame");
    String::from_utf8(data.to_vec()).expect("utf-8 event")
}

fn visit_from_event(event: &str) -> String {
    const KEY: &str = r#""visit":""#;
    let start = event.find(KEY).expect("visit signal present") + KEY.len();
    event[start..start + 36].to_string()
}

#[tokio::test]
async fn reading_progress_streams_scroll_reports() {
    let (app, reading) = app();

    let response = send(&app, Method::GET, "/posts/3/engagement", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
        Some("text/event-stream")
    );

    let mut body = response.into_body();
    let opened = next_event(&mut body).await;
    assert!(opened.contains("datastar-patch-signals"));
    assert_eq!(reading.active_sessions(), 1);
    let visit = visit_from_event(&opened);

    let report = format!(
        r#"{{"visit":"{visit}","readingProgress":0,"scrollY":500,"documentHeight":2000,"viewportHeight":1000}}"#
    );
    let accepted = send(
        &app,
        Method::POST,
        "/posts/3/engagement/scroll",
        Body::from(report.clone()),
    )
    .await;
    assert_eq!(accepted.status(), StatusCode::NO_CONTENT);

    let update = next_event(&mut body).await;
    assert!(update.contains(r#""readingProgress":50.0"#), "{update}");

    let mismatched = send(
        &app,
        Method::POST,
        "/posts/4/engagement/scroll",
        Body::from(report),
    )
    .await;
    assert_eq!(mismatched.status(), StatusCode::NOT_FOUND);

    drop(body);
    assert_eq!(reading.active_sessions(), 0);
}

#[tokio::test]
async fn reading_progress_for_unknown_post_is_not_found() {
    let (app, reading) = app();
    let response = send(&app, Method::GET, "/posts/999/engagement", Body::empty()).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(reading.active_sessions(), 0);
}
