use std::fmt;

use serde::Deserialize;

/// Position of an element kind in the canonical order. Lower ranks come first;
/// kinds may share a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(u8);

impl Rank {
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical category of a pre-content element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ElementKind {
    ShortDescription,
    TitleModifier,
    Hatnote,
    FeaturedArticle,
    FeaturedList,
    GoodArticle,
    DeletionProtectionTag,
    MaintenanceTag,
    EnglishVariety,
    DateFormat,
    Infobox,
    LanguageMaintenance,
    /// Not a template, but the lead image takes part in the ordering.
    Image,
    NavigationHeader,
}

impl ElementKind {
    pub const ALL: [ElementKind; 14] = [
        ElementKind::ShortDescription,
        ElementKind::TitleModifier,
        ElementKind::Hatnote,
        ElementKind::FeaturedArticle,
        ElementKind::FeaturedList,
        ElementKind::GoodArticle,
        ElementKind::DeletionProtectionTag,
        ElementKind::MaintenanceTag,
        ElementKind::EnglishVariety,
        ElementKind::DateFormat,
        ElementKind::Infobox,
        ElementKind::LanguageMaintenance,
        ElementKind::Image,
        ElementKind::NavigationHeader,
    ];

    pub const fn rank(self) -> Rank {
        Rank(match self {
            ElementKind::ShortDescription => 1,
            ElementKind::TitleModifier => 2,
            ElementKind::Hatnote => 3,
            ElementKind::FeaturedArticle | ElementKind::FeaturedList | ElementKind::GoodArticle => 4,
            ElementKind::DeletionProtectionTag => 5,
            ElementKind::MaintenanceTag => 6,
            ElementKind::EnglishVariety | ElementKind::DateFormat => 7,
            ElementKind::Infobox => 8,
            ElementKind::LanguageMaintenance => 9,
            ElementKind::Image => 10,
            ElementKind::NavigationHeader => 11,
        })
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ElementKind::ShortDescription => "short-description",
            ElementKind::TitleModifier => "title-modifier",
            ElementKind::Hatnote => "hatnote",
            ElementKind::FeaturedArticle => "featured-article",
            ElementKind::FeaturedList => "featured-list",
            ElementKind::GoodArticle => "good-article",
            ElementKind::DeletionProtectionTag => "deletion-protection-tag",
            ElementKind::MaintenanceTag => "maintenance-tag",
            ElementKind::EnglishVariety => "english-variety",
            ElementKind::DateFormat => "date-format",
            ElementKind::Infobox => "infobox",
            ElementKind::LanguageMaintenance => "language-maintenance",
            ElementKind::Image => "image",
            ElementKind::NavigationHeader => "navigation-header",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
