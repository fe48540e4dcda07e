//! The listing root and the category hand-off that leads to it.

use crate::domain::posts::{Post, PostCatalog, format_human_date, format_iso_date};
use crate::domain::types::Category;
use crate::presentation::views::{CategoryTagView, IndexContext, PostCard};

/// Route of the listing root that receives category selections.
pub const LISTING_ROOT: &str = "/";

/// Hand-off from an article's category tag to the listing root: selects the category
/// and navigates to `/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryHandoff {
    pub selected: Category,
}

impl CategoryHandoff {
    pub fn new(selected: Category) -> Self {
        Self { selected }
    }

    pub fn target(&self) -> &'static str {
        LISTING_ROOT
    }

    pub fn href(&self) -> String {
        format!("{}?category={}", self.target(), self.selected.as_str())
    }
}

/// Listing URL with `category` selected, or the unfiltered root.
pub fn category_href(category: Option<Category>) -> String {
    match category {
        Some(category) => CategoryHandoff::new(category).href(),
        None => LISTING_ROOT.to_string(),
    }
}

pub fn category_tag(category: Category) -> CategoryTagView {
    CategoryTagView {
        value: category.as_str().to_string(),
        label: category.label().to_string(),
        style_class: category.style_class().to_string(),
        href: CategoryHandoff::new(category).href(),
    }
}

pub fn post_href(post: &Post) -> String {
    format!("/posts/{}", post.id)
}

pub fn post_card(post: &Post) -> PostCard {
    PostCard {
        id: post.id,
        href: post_href(post),
        title: post.title.to_string(),
        excerpt: post.excerpt.to_string(),
        image: post.image.to_string(),
        iso_date: format_iso_date(post.date),
        published: format_human_date(post.date),
        category: category_tag(post.category),
    }
}

#[derive(Clone, Default)]
pub struct ListingService {
    catalog: PostCatalog,
}

impl ListingService {
    pub fn new(catalog: PostCatalog) -> Self {
        Self { catalog }
    }

    pub fn index_context(&self, selected: Option<Category>) -> IndexContext {
        let posts: Vec<PostCard> = self
            .catalog
            .in_category(selected)
            .into_iter()
            .map(post_card)
            .collect();

        let heading = match selected {
            Some(category) => format!("{} yazıları", category.label()),
            None => "Tüm yazılar".to_string(),
        };

        IndexContext {
            heading,
            has_results: !posts.is_empty(),
            posts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handoff_selects_category_and_targets_root() {
        let handoff = CategoryHandoff::new(Category::Aile);
        assert_eq!(handoff.selected, Category::Aile);
        assert_eq!(handoff.target(), "/");
        assert_eq!(handoff.href(), "/?category=aile");
    }

    #[test]
    fn unfiltered_listing_links_to_root() {
        assert_eq!(category_href(None), "/");
    }

    #[test]
    fn index_filters_by_selected_category() {
        let listing = ListingService::default();
        let context = listing.index_context(Some(Category::Okul));
        assert!(context.has_results);
        assert!(context.posts.iter().all(|card| card.category.value == "okul"));
        assert_eq!(context.heading, "Okul yazıları");

        let all = listing.index_context(None);
        assert_eq!(all.posts.len(), PostCatalog::builtin().all().len());
    }

    #[test]
    fn cards_link_to_article_pages() {
        let post = &PostCatalog::builtin().all()[0];
        let card = post_card(post);
        assert_eq!(card.href, format!("/posts/{}", post.id));
        assert_eq!(card.category.href, category_href(Some(post.category)));
    }
}
