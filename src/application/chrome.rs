use crate::application::listing::category_href;
use crate::config::SiteSettings;
use crate::domain::types::Category;
use crate::presentation::views::{
    BrandView, CategoryLinkView, CategoryNavView, FooterView, LayoutChrome, PageMetaView,
};

const SITE_DESCRIPTION: &str =
    "Psikolojik danışmanlık ve rehberlik üzerine aileler, öğrenciler ve bireyler için yazılar.";

/// Builds the layout shell shared by every public page.
#[derive(Clone)]
pub struct ChromeService {
    site: SiteSettings,
}

impl ChromeService {
    pub fn new(site: SiteSettings) -> Self {
        Self { site }
    }

    /// Layout for a page where `selected` is the currently chosen category, if any.
    pub fn load(&self, selected: Option<Category>) -> LayoutChrome {
        let entries = Category::ALL
            .into_iter()
            .map(|category| CategoryLinkView {
                value: category.as_str().to_string(),
                label: category.label().to_string(),
                href: category_href(Some(category)),
                is_active: selected == Some(category),
            })
            .collect();

        LayoutChrome {
            brand: BrandView {
                title: self.site.brand_title.clone(),
                href: "/".to_string(),
            },
            navigation: CategoryNavView {
                all_href: category_href(None),
                all_active: selected.is_none(),
                entries,
            },
            footer: FooterView {
                copy: self.site.footer_copy.clone(),
            },
            meta: PageMetaView {
                title: self.site.brand_title.clone(),
                description: SITE_DESCRIPTION.to_string(),
                canonical: self.site.public_url.to_string(),
                article: None,
            },
        }
    }

    /// Absolute URL of `target` (a path with optional query) on the public site.
    pub fn canonical_url(&self, target: &str) -> String {
        canonical_url(self.site.public_url.as_str(), target)
    }
}

pub(crate) fn canonical_url(base: &str, path: &str) -> String {
    let root = normalize_public_site_url(base);
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        root
    } else {
        format!("{root}{trimmed}")
    }
}

fn normalize_public_site_url(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    format!("{trimmed}/")
}
