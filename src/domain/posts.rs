mod data;

use time::{Date, Month, format_description::FormatItem, macros::format_description};

use super::types::Category;

pub use data::POSTS;

pub const ISO_DATE_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month padding:zero]-[day padding:zero]");

/// Words read per minute when estimating reading time.
pub const WORDS_PER_MINUTE: usize = 200;
/// Characters counted as one printed page.
pub const CHARS_PER_PAGE: usize = 1000;
/// Maximum number of related posts shown under an article.
pub const RELATED_LIMIT: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: u32,
    pub title: &'static str,
    pub excerpt: &'static str,
    pub content: &'static str,
    pub image: &'static str,
    pub category: Category,
    pub date: Date,
}

/// Numeric post key recovered from a route segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PostId(pub u32);

impl PostId {
    /// Accepts decimal spellings only: surrounding whitespace and integral decimals
    /// (`"3.0"`) are fine. Radix prefixes (`0x3`), fractions, negatives and anything
    /// non-numeric are not post ids.
    pub fn from_route(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Ok(id) = trimmed.parse::<u32>() {
            return Some(Self(id));
        }

        let value = trimmed.parse::<f64>().ok()?;
        if value.is_finite() && value.fract() == 0.0 && value >= 0.0 && value <= u32::MAX as f64 {
            Some(Self(value as u32))
        } else {
            None
        }
    }
}

/// Read-only view over an immutable post collection.
#[derive(Debug, Clone, Copy)]
pub struct PostCatalog {
    posts: &'static [Post],
}

impl PostCatalog {
    pub fn new(posts: &'static [Post]) -> Self {
        Self { posts }
    }

    /// The collection compiled into the binary.
    pub fn builtin() -> Self {
        Self::new(&POSTS)
    }

    pub fn all(&self) -> &'static [Post] {
        self.posts
    }

    pub fn find_by_id(&self, id: PostId) -> Option<&'static Post> {
        self.posts.iter().find(|post| post.id == id.0)
    }

    /// Other posts in the same category, in collection order, capped at `limit`.
    pub fn related_to(&self, post: &Post, limit: usize) -> Vec<&'static Post> {
        self.posts
            .iter()
            .filter(|candidate| candidate.id != post.id && candidate.category == post.category)
            .take(limit)
            .collect()
    }

    pub fn in_category(&self, category: Option<Category>) -> Vec<&'static Post> {
        self.posts
            .iter()
            .filter(|post| category.is_none_or(|selected| post.category == selected))
            .collect()
    }
}

impl Default for PostCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

pub fn reading_time_minutes(content: &str) -> usize {
    let words = content.split_whitespace().count();
    words.div_ceil(WORDS_PER_MINUTE).max(1)
}

pub fn page_count(content: &str) -> usize {
    content.chars().count().div_ceil(CHARS_PER_PAGE)
}

pub fn format_iso_date(date: Date) -> String {
    date.format(ISO_DATE_FORMAT).expect("valid calendar date")
}

/// Long-form date in the fixed Turkish display locale, e.g. `15 Mart 2024`.
pub fn format_human_date(date: Date) -> String {
    format!("{} {} {}", date.day(), turkish_month(date.month()), date.year())
}

fn turkish_month(month: Month) -> &'static str {
    match month {
        Month::January => "Ocak",
        Month::February => "Şubat",
        Month::March => "Mart",
        Month::April => "Nisan",
        Month::May => "Mayıs",
        Month::June => "Haziran",
        Month::July => "Temmuz",
        Month::August => "Ağustos",
        Month::September => "Eylül",
        Month::October => "Ekim",
        Month::November => "Kasım",
        Month::December => "Aralık",
    }
}

/// Splits body text into paragraphs on blank lines, collapsing inner line breaks.
pub fn paragraphs(content: &str) -> Vec<String> {
    content
        .split("\n\n")
        .map(|block| block.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|block| !block.is_empty())
        .collect()
}
