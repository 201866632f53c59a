//! Offline repositories.
//!
//! A site snapshot is a TOML file listing the pages and categories the linter
//! should know about:
//!
//! ```toml
//! [[pages]]
//! title = "Template:Short desc"
//! redirect = "Template:Short description"
//!
//! [categories]
//! "Category:Hatnote templates" = ["Template:About", "Template:For"]
//! ```

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{Members, Page, Repository, RepositoryError};
use crate::wikitext::normalize_title;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct SnapshotFile {
    pages: Vec<PageEntry>,
    categories: BTreeMap<String, Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct PageEntry {
    title: String,
    #[serde(default)]
    redirect: Option<String>,
}

/// An in-memory repository. Titles are matched case-insensitively with
/// underscores and spaces treated alike.
#[derive(Debug, Clone, Default)]
pub struct SnapshotRepository {
    pages: HashMap<String, Page>,
    categories: HashMap<String, Vec<String>>,
}

impl SnapshotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a page. A page that was only known implicitly (as a category
    /// member or redirect target) is replaced.
    pub fn add_page(&mut self, page: Page) {
        if let Some(target) = page.redirect_target() {
            self.add_implicit_page(target.title());
        }
        self.pages.insert(normalize_title(page.title()), page);
    }

    pub fn with_page(mut self, page: Page) -> Self {
        self.add_page(page);
        self
    }

    /// Add a category with its members, in order. Members become known pages.
    pub fn add_category<I, S>(&mut self, category: &str, members: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let members: Vec<String> = members.into_iter().map(Into::into).collect();
        for member in &members {
            self.add_implicit_page(member);
        }
        self.categories.insert(normalize_title(category), members);
    }

    pub fn with_category<I, S>(mut self, category: &str, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.add_category(category, members);
        self
    }

    fn add_implicit_page(&mut self, title: &str) {
        self.pages
            .entry(normalize_title(title))
            .or_insert_with(|| Page::new(title));
    }

    pub fn from_toml_str(s: &str) -> Result<Self, RepositoryError> {
        let file: SnapshotFile =
            toml::from_str(s).map_err(|e| RepositoryError::Snapshot(e.to_string()))?;

        let mut repository = Self::new();
        for (category, members) in file.categories {
            repository.add_category(&category, members);
        }
        for entry in file.pages {
            let page = match entry.redirect {
                Some(target) => Page::redirect(entry.title, target),
                None => Page::new(entry.title),
            };
            repository.add_page(page);
        }

        log::debug!(
            "Site snapshot holds {} page(s) and {} category(ies)",
            repository.pages.len(),
            repository.categories.len()
        );
        Ok(repository)
    }

    pub fn load(path: &Path) -> Result<Self, RepositoryError> {
        log::debug!("Reading site snapshot from: {}", path.display());
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s).map_err(|e| match e {
            RepositoryError::Snapshot(message) => {
                RepositoryError::Snapshot(format!("{}: {}", path.display(), message))
            }
            other => other,
        })
    }
}

impl Repository for SnapshotRepository {
    fn page(&self, title: &str) -> Result<Page, RepositoryError> {
        self.pages
            .get(&normalize_title(title))
            .cloned()
            .ok_or_else(|| RepositoryError::PageNotFound(title.to_string()))
    }

    fn category_members(&self, category: &str) -> Result<Members<'_>, RepositoryError> {
        let members = self
            .categories
            .get(&normalize_title(category))
            .ok_or_else(|| RepositoryError::CategoryNotFound(category.to_string()))?;
        Ok(Box::new(members.iter().map(|member| self.page(member))))
    }
}

/// A repository that knows nothing. Every lookup fails, so classification
/// falls back to the unresolved names and the static rules.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineRepository;

impl Repository for OfflineRepository {
    fn page(&self, title: &str) -> Result<Page, RepositoryError> {
        Err(RepositoryError::PageNotFound(title.to_string()))
    }

    fn category_members(&self, category: &str) -> Result<Members<'_>, RepositoryError> {
        Err(RepositoryError::CategoryNotFound(category.to_string()))
    }
}
