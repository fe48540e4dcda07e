//! Article page assembly: resolution, related posts and the detail view model.

use std::sync::Arc;

use metrics::counter;

use crate::{
    application::{
        engagement::{EngagementError, ViewCounter},
        listing::{category_tag, post_card, post_href},
        share::share_view,
    },
    config::SiteSettings,
    domain::posts::{
        Post, PostCatalog, PostId, RELATED_LIMIT, format_human_date, format_iso_date,
        page_count, paragraphs, reading_time_minutes,
    },
    infra::telemetry::{POST_NOT_FOUND_TOTAL, POST_VIEWS_TOTAL},
    presentation::views::{
        ArticleMetaView, AuthorView, LayoutChrome, PageMetaView, PostDetailContext,
        ReadingProgressView,
    },
};

#[derive(Clone)]
pub struct ArticleService {
    catalog: PostCatalog,
    views: Arc<dyn ViewCounter>,
    author: AuthorView,
}

impl ArticleService {
    pub fn new(catalog: PostCatalog, views: Arc<dyn ViewCounter>, site: &SiteSettings) -> Self {
        Self {
            catalog,
            views,
            author: AuthorView {
                name: site.author_name.clone(),
                title: site.author_title.clone(),
            },
        }
    }

    /// Resolve a raw route segment to a post.
    pub fn resolve(&self, raw_id: &str) -> Option<&'static Post> {
        let resolved = PostId::from_route(raw_id).and_then(|id| self.catalog.find_by_id(id));
        if resolved.is_none() {
            counter!(POST_NOT_FOUND_TOTAL).increment(1);
        }
        resolved
    }

    /// Like [`Self::resolve`], for callers that treat an unknown post as an error.
    pub fn require(&self, raw_id: &str) -> Result<&'static Post, EngagementError> {
        PostId::from_route(raw_id)
            .and_then(|id| self.catalog.find_by_id(id))
            .ok_or_else(|| EngagementError::UnknownPost(raw_id.to_string()))
    }

    pub fn related(&self, post: &Post) -> Vec<&'static Post> {
        self.catalog.related_to(post, RELATED_LIMIT)
    }

    /// Build the detail view for one render of `post`. Every call draws a fresh view count.
    pub fn post_detail(&self, post: &Post, page_url: &str) -> PostDetailContext {
        counter!(POST_VIEWS_TOTAL).increment(1);

        let base = post_href(post);
        PostDetailContext {
            id: post.id,
            title: post.title.to_string(),
            excerpt: post.excerpt.to_string(),
            image: post.image.to_string(),
            iso_date: format_iso_date(post.date),
            published: format_human_date(post.date),
            reading_minutes: reading_time_minutes(post.content),
            view_count: self.views.draw(),
            page_count: page_count(post.content),
            author: self.author.clone(),
            category: category_tag(post.category),
            paragraphs: paragraphs(post.content),
            share: share_view(page_url, post.title),
            progress: ReadingProgressView {
                percent: 0,
                stream_url: format!("{base}/engagement"),
                report_url: format!("{base}/engagement/scroll"),
            },
            related: self.related(post).into_iter().map(post_card).collect(),
        }
    }

    /// Head metadata for the article, layered over the site defaults in `chrome`.
    pub fn post_meta(&self, chrome: &LayoutChrome, post: &Post, canonical: String) -> PageMetaView {
        PageMetaView {
            title: format!("{} | {}", post.title, chrome.brand.title),
            description: post.excerpt.to_string(),
            canonical,
            article: Some(ArticleMetaView {
                title: post.title.to_string(),
                description: post.excerpt.to_string(),
                image: post.image.to_string(),
                published_time: format_iso_date(post.date),
                author: self.author.name.clone(),
                section: post.category.as_str().to_string(),
            }),
        }
    }
}
