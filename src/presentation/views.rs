use crate::application::error::{ErrorReport, HttpError};
use askama::{Error as AskamaError, Template};
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
#[error("{public_message}")]
pub struct TemplateRenderError {
    pub(crate) source: &'static str,
    pub(crate) public_message: &'static str,
    #[source]
    pub(crate) error: AskamaError,
}

impl TemplateRenderError {
    pub fn new(source: &'static str, public_message: &'static str, error: AskamaError) -> Self {
        Self {
            source,
            public_message,
            error,
        }
    }
}

impl From<TemplateRenderError> for HttpError {
    fn from(err: TemplateRenderError) -> Self {
        let TemplateRenderError {
            source,
            public_message,
            error,
        } = err;

        HttpError::from_error(
            source,
            StatusCode::INTERNAL_SERVER_ERROR,
            public_message,
            &error,
        )
    }
}

pub fn render_template<T: Template>(template: T) -> Result<Html<String>, HttpError> {
    template.render().map(Html).map_err(|err| {
        TemplateRenderError::new(
            "presentation::views::render_template",
            "Template rendering failed",
            err,
        )
        .into()
    })
}

pub fn render_template_response<T: Template>(template: T, status: StatusCode) -> Response {
    match render_template(template) {
        Ok(html) => (status, html).into_response(),
        Err(err) => err.into_response(),
    }
}

/// Render an empty state inside the regular layout with a 404 status.
pub fn render_not_found_response(chrome: LayoutChrome, content: ErrorPageView) -> Response {
    let detail = content.title.clone();
    let view = LayoutContext::new(chrome, content);
    let mut response = render_template_response(ErrorTemplate { view }, StatusCode::NOT_FOUND);
    ErrorReport::from_message(
        "presentation::views::render_not_found_response",
        StatusCode::NOT_FOUND,
        detail,
    )
    .attach(&mut response);
    response
}

#[derive(Clone)]
pub struct FooterView {
    pub copy: String,
}

#[derive(Clone)]
pub struct BrandView {
    pub title: String,
    pub href: String,
}

#[derive(Clone)]
pub struct CategoryLinkView {
    pub value: String,
    pub label: String,
    pub href: String,
    pub is_active: bool,
}

/// Category navigation of the layout shell. Each link hands the selection to the listing.
#[derive(Clone)]
pub struct CategoryNavView {
    pub all_href: String,
    pub all_active: bool,
    pub entries: Vec<CategoryLinkView>,
}

#[derive(Clone)]
pub struct LayoutChrome {
    pub brand: BrandView,
    pub navigation: CategoryNavView,
    pub footer: FooterView,
    pub meta: PageMetaView,
}

impl LayoutChrome {
    pub fn with_canonical(self, canonical: String) -> Self {
        Self {
            meta: self.meta.with_canonical(canonical),
            ..self
        }
    }

    pub fn with_meta(self, meta: PageMetaView) -> Self {
        Self { meta, ..self }
    }
}

#[derive(Clone)]
pub struct LayoutContext<T> {
    pub brand: BrandView,
    pub navigation: CategoryNavView,
    pub footer: FooterView,
    pub meta: PageMetaView,
    pub content: T,
}

impl<T> LayoutContext<T> {
    pub fn new(chrome: LayoutChrome, content: T) -> Self {
        Self {
            brand: chrome.brand,
            navigation: chrome.navigation,
            footer: chrome.footer,
            meta: chrome.meta,
            content,
        }
    }
}

#[derive(Clone)]
pub struct CategoryTagView {
    pub value: String,
    pub label: String,
    pub style_class: String,
    pub href: String,
}

#[derive(Clone)]
pub struct PostCard {
    pub id: u32,
    pub href: String,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub iso_date: String,
    pub published: String,
    pub category: CategoryTagView,
}

pub struct IndexContext {
    pub heading: String,
    pub posts: Vec<PostCard>,
    pub has_results: bool,
}

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub view: LayoutContext<IndexContext>,
}

#[derive(Clone)]
pub struct AuthorView {
    pub name: String,
    pub title: String,
}

#[derive(Clone)]
pub struct ShareLinkView {
    pub network: &'static str,
    pub label: &'static str,
    pub href: String,
}

#[derive(Clone)]
pub struct ShareView {
    pub url: String,
    pub title: String,
    pub links: Vec<ShareLinkView>,
}

#[derive(Clone)]
pub struct ReadingProgressView {
    pub percent: u8,
    pub stream_url: String,
    pub report_url: String,
}

pub struct PostDetailContext {
    pub id: u32,
    pub title: String,
    pub excerpt: String,
    pub image: String,
    pub iso_date: String,
    pub published: String,
    pub reading_minutes: usize,
    pub view_count: u32,
    pub page_count: usize,
    pub author: AuthorView,
    pub category: CategoryTagView,
    pub paragraphs: Vec<String>,
    pub share: ShareView,
    pub progress: ReadingProgressView,
    pub related: Vec<PostCard>,
}

#[derive(Template)]
#[template(path = "post.html")]
pub struct PostTemplate {
    pub view: LayoutContext<PostDetailContext>,
}

pub struct ErrorPageView {
    pub title: String,
    pub message: String,
    pub primary_action: Option<ErrorAction>,
}

impl ErrorPageView {
    pub fn post_not_found() -> Self {
        Self {
            title: "Yazı bulunamadı".to_string(),
            message: "Blog yazısı bulunamadı.".to_string(),
            primary_action: None,
        }
    }

    pub fn page_not_found() -> Self {
        Self {
            title: "Sayfa bulunamadı".to_string(),
            message: "Aradığınız sayfa mevcut değil.".to_string(),
            primary_action: Some(ErrorAction::home()),
        }
    }
}

pub struct ErrorAction {
    pub href: String,
    pub label: String,
}

impl ErrorAction {
    pub fn home() -> Self {
        Self {
            href: "/".to_string(),
            label: "Ana sayfaya dön".to_string(),
        }
    }
}

#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub view: LayoutContext<ErrorPageView>,
}

/// Open Graph and Twitter card fields for an article.
#[derive(Clone)]
pub struct ArticleMetaView {
    pub title: String,
    pub description: String,
    pub image: String,
    pub published_time: String,
    pub author: String,
    pub section: String,
}

#[derive(Clone)]
pub struct PageMetaView {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub article: Option<ArticleMetaView>,
}

impl PageMetaView {
    pub fn with_canonical(self, canonical: String) -> Self {
        Self { canonical, ..self }
    }
}
