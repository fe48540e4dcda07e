//! Shared domain enumerations.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::error::DomainError;

/// Topical tag every post belongs to. The set is closed; listing filters and the
/// category hand-off only ever carry one of these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Bireysel,
    Aile,
    Okul,
    Kariyer,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Bireysel,
        Category::Aile,
        Category::Okul,
        Category::Kariyer,
    ];

    /// Value used in URLs and `article:section`.
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Bireysel => "bireysel",
            Category::Aile => "aile",
            Category::Okul => "okul",
            Category::Kariyer => "kariyer",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Bireysel => "Bireysel",
            Category::Aile => "Aile",
            Category::Okul => "Okul",
            Category::Kariyer => "Kariyer",
        }
    }

    /// Stylesheet modifier carrying the per-category tag colours.
    pub fn style_class(self) -> &'static str {
        match self {
            Category::Bireysel => "category-tag--blue",
            Category::Aile => "category-tag--green",
            Category::Okul => "category-tag--purple",
            Category::Kariyer => "category-tag--orange",
        }
    }

    /// Lenient parse for query parameters; unknown values mean "no selection".
    pub fn parse_selection(value: Option<&str>) -> Option<Category> {
        value.and_then(|raw| raw.trim().parse().ok())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.as_str() == value)
            .ok_or_else(|| DomainError::validation(format!("unknown category `{value}`")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_categories() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn rejects_unknown_category() {
        let err = "spor".parse::<Category>().unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }

    #[test]
    fn selection_ignores_unknown_and_empty_values() {
        assert_eq!(Category::parse_selection(Some(" aile ")), Some(Category::Aile));
        assert_eq!(Category::parse_selection(Some("")), None);
        assert_eq!(Category::parse_selection(Some("Aile")), None);
        assert_eq!(Category::parse_selection(None), None);
    }
}
