//! The ordered rule table mapping template names to element kinds.

use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use thiserror::Error;

use super::kind::ElementKind;
use crate::repository::Repository;
use crate::wikitext::normalize_name;

#[derive(Debug, Error)]
pub enum RuleError {
    #[error("invalid rule pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },
}

enum StaticMatcher {
    Literal(&'static str),
    Pattern(&'static str),
}

use StaticMatcher::{Literal, Pattern};

/// Built-in rules. Order is precedence.
const STATIC_RULES: &[(StaticMatcher, ElementKind)] = &[
    (Literal("short description"), ElementKind::ShortDescription),
    (Literal("shortdescription"), ElementKind::ShortDescription),
    (Pattern("displaytitle:"), ElementKind::TitleModifier),
    (Literal("italic title"), ElementKind::TitleModifier),
    (Literal("lowercase title"), ElementKind::TitleModifier),
    (Literal("lowercase"), ElementKind::TitleModifier),
    (Literal("correct title"), ElementKind::TitleModifier),
    (Literal("featured article"), ElementKind::FeaturedArticle),
    (Literal("featured list"), ElementKind::FeaturedList),
    (Literal("good article"), ElementKind::GoodArticle),
    (Pattern(r"pp(-|$)"), ElementKind::DeletionProtectionTag),
    (Pattern(r"db-"), ElementKind::DeletionProtectionTag),
    (Literal("article for deletion/dated"), ElementKind::DeletionProtectionTag),
    (Literal("proposed deletion/dated"), ElementKind::DeletionProtectionTag),
    (Literal("multiple issues"), ElementKind::MaintenanceTag),
    (Literal("cleanup"), ElementKind::MaintenanceTag),
    (Literal("more citations needed"), ElementKind::MaintenanceTag),
    (Literal("unreferenced"), ElementKind::MaintenanceTag),
    (Literal("one source"), ElementKind::MaintenanceTag),
    (Literal("primary sources"), ElementKind::MaintenanceTag),
    (Literal("notability"), ElementKind::MaintenanceTag),
    (Literal("orphan"), ElementKind::MaintenanceTag),
    (Literal("advert"), ElementKind::MaintenanceTag),
    (Literal("pov"), ElementKind::MaintenanceTag),
    (Literal("update"), ElementKind::MaintenanceTag),
    (Literal("copy edit"), ElementKind::MaintenanceTag),
    (Pattern(r"use (mdy|dmy|ymd) dates"), ElementKind::DateFormat),
    (Pattern(r"use [a-z ]+ english"), ElementKind::EnglishVariety),
    (Literal("use oxford spelling"), ElementKind::EnglishVariety),
    (Pattern(r"engvar"), ElementKind::EnglishVariety),
    (Pattern(r"infobox\b"), ElementKind::Infobox),
    (Literal("foreign character warning box"), ElementKind::LanguageMaintenance),
    (Pattern(r"contains (special characters|.+ text)"), ElementKind::LanguageMaintenance),
    (Pattern(r"(.+ )?sidebar\b"), ElementKind::NavigationHeader),
];

/// How a rule recognises a name.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// Exact match against the normalized name.
    Literal(String),
    /// Regex anchored at the start of the normalized (lowercased) name.
    Pattern(Regex),
}

impl Matcher {
    pub fn literal(name: &str) -> Self {
        Matcher::Literal(normalize_name(name))
    }

    pub fn pattern(pattern: &str) -> Result<Self, RuleError> {
        RegexBuilder::new(&format!("^(?:{})", pattern))
            .case_insensitive(true)
            .build()
            .map(Matcher::Pattern)
            .map_err(|source| RuleError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })
    }

    /// `name` must already be normalized.
    pub fn matches(&self, name: &str) -> bool {
        match self {
            Matcher::Literal(literal) => literal == name,
            Matcher::Pattern(regex) => regex.is_match(name),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ClassificationRule {
    matcher: Matcher,
    kind: ElementKind,
}

impl ClassificationRule {
    pub fn new(matcher: Matcher, kind: ElementKind) -> Self {
        Self { matcher, kind }
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }
}

/// A user-supplied rule, as written in the config file:
///
/// ```toml
/// [[rules]]
/// kind = "hatnote"
/// literal = "About-distinguish"
///
/// [[rules]]
/// kind = "navigation-header"
/// pattern = "campaignbox"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RuleSpec {
    Literal { kind: ElementKind, literal: String },
    Pattern { kind: ElementKind, pattern: String },
}

impl RuleSpec {
    fn to_rule(&self) -> Result<ClassificationRule, RuleError> {
        Ok(match self {
            RuleSpec::Literal { kind, literal } => {
                ClassificationRule::new(Matcher::literal(literal), *kind)
            }
            RuleSpec::Pattern { kind, pattern } => {
                ClassificationRule::new(Matcher::pattern(pattern)?, *kind)
            }
        })
    }
}

/// Rules in precedence order. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct RuleTable {
    rules: Vec<ClassificationRule>,
}

impl RuleTable {
    pub fn builder() -> RuleTableBuilder {
        RuleTableBuilder::new()
    }

    /// The kind of the first rule matching `name`, if any.
    pub fn classify_name(&self, name: &str) -> Option<ElementKind> {
        let name = normalize_name(name);
        self.rules
            .iter()
            .find(|rule| rule.matcher.matches(&name))
            .map(|rule| rule.kind)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ClassificationRule> {
        self.rules.iter()
    }
}

/// Builds a [`RuleTable`]. Rules are checked in the order they are added,
/// so static rules go first and discovered rules last.
#[derive(Debug, Default)]
pub struct RuleTableBuilder {
    rules: Vec<ClassificationRule>,
}

impl RuleTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_static_rules(mut self) -> Result<Self, RuleError> {
        for (matcher, kind) in STATIC_RULES {
            self = match matcher {
                Literal(name) => self.literal(name, *kind),
                Pattern(pattern) => self.pattern(pattern, *kind)?,
            };
        }
        Ok(self)
    }

    pub fn literal(mut self, name: &str, kind: ElementKind) -> Self {
        self.rules
            .push(ClassificationRule::new(Matcher::literal(name), kind));
        self
    }

    pub fn pattern(mut self, pattern: &str, kind: ElementKind) -> Result<Self, RuleError> {
        self.rules
            .push(ClassificationRule::new(Matcher::pattern(pattern)?, kind));
        Ok(self)
    }

    pub fn rules<'s>(
        mut self,
        specs: impl IntoIterator<Item = &'s RuleSpec>,
    ) -> Result<Self, RuleError> {
        for spec in specs {
            self.rules.push(spec.to_rule()?);
        }
        Ok(self)
    }

    /// Append one literal rule per member of `category`, mapped to `kind`.
    ///
    /// Members already classified by an earlier rule are skipped. Lookup
    /// failures are logged and end discovery; whatever was collected before
    /// the failure is kept.
    pub fn discover<R: Repository + ?Sized>(
        mut self,
        repository: &R,
        category: &str,
        kind: ElementKind,
    ) -> Self {
        let members = match repository.category_members(category) {
            Ok(members) => members,
            Err(e) => {
                log::warn!("Could not list members of {}: {}", category, e);
                return self;
            }
        };

        let mut added = 0;
        for member in members {
            let page = match member {
                Ok(page) => page,
                Err(e) => {
                    log::warn!("Listing {} failed after {} member(s): {}", category, added, e);
                    break;
                }
            };

            let name = page.short_title();
            let normalized = normalize_name(name);
            if let Some(rule) = self.rules.iter().find(|rule| rule.matcher.matches(&normalized)) {
                log::debug!(
                    "Skipping {} from {}: already classified as {}",
                    name,
                    category,
                    rule.kind
                );
                continue;
            }

            self.rules
                .push(ClassificationRule::new(Matcher::Literal(normalized), kind));
            added += 1;
        }

        log::debug!("Discovered {} {} rule(s) from {}", added, kind, category);
        self
    }

    pub fn build(self) -> RuleTable {
        RuleTable { rules: self.rules }
    }
}
