use std::sync::Arc;

use axum::{
    Router,
    body::{Body, Bytes},
    extract::{Path, Query, State},
    http::{Request, StatusCode, Uri},
    middleware,
    response::{
        IntoResponse, Response,
        sse::{KeepAlive, Sse},
    },
    routing::{get, post},
};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::{
    application::{
        article::ArticleService,
        chrome::ChromeService,
        engagement::{ReadingRegistry, ScrollMetrics},
        error::HttpError,
        listing::ListingService,
        stream::reading_progress_stream,
    },
    domain::{posts::PostId, types::Category},
    presentation::views::{
        ErrorPageView, IndexTemplate, LayoutContext, PostTemplate, render_not_found_response,
        render_template_response,
    },
};

use super::middleware::{log_responses, set_request_context};

#[derive(Clone)]
pub struct HttpState {
    pub articles: Arc<ArticleService>,
    pub listing: Arc<ListingService>,
    pub chrome: Arc<ChromeService>,
    pub reading: ReadingRegistry,
}

pub fn build_router(state: HttpState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/posts/{id}", get(post_detail))
        .route("/posts/{id}/engagement", get(reading_progress))
        .route("/posts/{id}/engagement/scroll", post(scroll_report))
        .route("/_health", get(health))
        .route(
            "/static/public/{*path}",
            get(crate::infra::assets::serve_public),
        )
        .fallback(fallback)
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ListingQuery {
    category: Option<String>,
}

/// Scroll report posted by the page: the visit id plus the viewport readings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ScrollReport {
    visit: Uuid,
    #[serde(flatten)]
    metrics: ScrollMetrics,
}

async fn index(State(state): State<HttpState>, Query(query): Query<ListingQuery>) -> Response {
    let selected = Category::parse_selection(query.category.as_deref());
    let chrome = state.chrome.load(selected);
    let content = state.listing.index_context(selected);

    let canonical = state.chrome.canonical_url("/");
    let view = LayoutContext::new(chrome.with_canonical(canonical), content);
    render_template_response(IndexTemplate { view }, StatusCode::OK)
}

async fn post_detail(State(state): State<HttpState>, Path(id): Path<String>, uri: Uri) -> Response {
    let chrome = state.chrome.load(None);

    let Some(post) = state.articles.resolve(&id) else {
        return render_not_found_response(chrome, ErrorPageView::post_not_found());
    };

    let requested = uri
        .path_and_query()
        .map(|target| target.as_str())
        .unwrap_or_else(|| uri.path());
    let canonical = state.chrome.canonical_url(requested);
    let content = state.articles.post_detail(post, &canonical);
    let meta = state.articles.post_meta(&chrome, post, canonical);
    let view = LayoutContext::new(chrome.with_meta(meta), content);
    render_template_response(PostTemplate { view }, StatusCode::OK)
}

async fn reading_progress(
    State(state): State<HttpState>,
    Path(id): Path<String>,
) -> Result<Response, HttpError> {
    let post = state.articles.require(&id)?;
    let subscription = state.reading.subscribe(PostId(post.id));

    Ok(Sse::new(reading_progress_stream(subscription))
        .keep_alive(KeepAlive::default())
        .into_response())
}

async fn scroll_report(
    State(state): State<HttpState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<StatusCode, HttpError> {
    const SOURCE: &str = "infra::http::public::scroll_report";

    let post = state.articles.require(&id)?;
    let report: ScrollReport = serde_json::from_slice(&body).map_err(|err| {
        HttpError::from_error(SOURCE, StatusCode::BAD_REQUEST, "Invalid scroll report", &err)
    })?;

    let progress = state
        .reading
        .report(report.visit, PostId(post.id), report.metrics)?;
    debug!(
        target = "pdr_portal::http::scroll",
        visit = %report.visit,
        post_id = post.id,
        progress,
        "scroll report accepted"
    );

    Ok(StatusCode::NO_CONTENT)
}

async fn health() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn fallback(State(state): State<HttpState>, request: Request<Body>) -> Response {
    debug!(
        target = "pdr_portal::http::fallback",
        path = %request.uri().path(),
        "no route matched"
    );
    render_not_found_response(state.chrome.load(None), ErrorPageView::page_not_found())
}
