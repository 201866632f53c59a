use super::kind::ElementKind;
use super::rules::{RuleError, RuleTable, RuleTableBuilder};
use super::scanner::{Scan, scan};
use crate::config::Config;
use crate::document::Document;
use crate::repository::Repository;
use crate::wikitext::{Node, has_namespace};

/// Maps nodes to element kinds.
///
/// Template names are resolved through the repository first, so a redirect
/// such as `{{Short desc}}` classifies like its target.
#[derive(Debug)]
pub struct Classifier<R> {
    repository: R,
    rules: RuleTable,
}

impl<R: Repository> Classifier<R> {
    pub fn new(repository: R, rules: RuleTable) -> Self {
        Self { repository, rules }
    }

    /// Static rules, then the configured rules, then (unless disabled) the
    /// members of the configured hatnote category.
    pub fn from_config(repository: R, config: &Config) -> Result<Self, RuleError> {
        let mut builder = RuleTableBuilder::new()
            .with_static_rules()?
            .rules(&config.rules)?;
        if config.discover_hatnotes {
            builder = builder.discover(&repository, &config.hatnote_category, ElementKind::Hatnote);
        }
        Ok(Self::new(repository, builder.build()))
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// File links are always images; templates go through the rule table;
    /// everything else is unclassified.
    pub fn classify(&self, node: &Node) -> Option<ElementKind> {
        match node {
            Node::Link(link) if link.is_file() => Some(ElementKind::Image),
            Node::Template(template) => self.classify_template_name(&template.name),
            Node::Text(_) | Node::Link(_) | Node::Heading(_) | Node::Comment(_) => None,
        }
    }

    pub fn classify_template_name(&self, name: &str) -> Option<ElementKind> {
        let effective = self.resolve_effective_name(name);
        let kind = self.rules.classify_name(&effective);
        match kind {
            Some(kind) => log::debug!("{{{{{}}}}} classified as {}", name, kind),
            None => log::debug!("{{{{{}}}}} is unclassified", name),
        }
        kind
    }

    /// The name a template is known by once redirects are followed.
    ///
    /// Lookup failures are not errors here: the name is used as written.
    pub fn resolve_effective_name(&self, name: &str) -> String {
        let name = name.trim();
        let title = if has_namespace(name) {
            name.to_string()
        } else {
            format!("Template:{}", name)
        };

        match self.repository.page(&title) {
            Ok(page) => {
                let page = page.redirect_target().unwrap_or(page);
                let resolved = page.short_title();
                if resolved != name {
                    log::debug!("Resolved {} to {}", name, resolved);
                }
                resolved.to_string()
            }
            Err(e) => {
                log::debug!("Could not resolve {}: {}", title, e);
                name.to_string()
            }
        }
    }

    /// Lazily report ordering violations in `document`'s pre-content run.
    pub fn scan<'a>(&'a self, document: &'a Document) -> Scan<'a, R> {
        scan(self, document)
    }
}
