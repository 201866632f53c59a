//! Access to the wiki the article lives on: page lookup (for redirects) and
//! category membership (for discovering template synonyms).

use std::io;

use thiserror::Error;

use crate::wikitext::strip_namespace;

mod snapshot;

pub use snapshot::{OfflineRepository, SnapshotRepository};

/// Errors raised by repository lookups.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("page not found: {0}")]
    PageNotFound(String),

    #[error("category not found: {0}")]
    CategoryNotFound(String),

    #[error("invalid site snapshot: {0}")]
    Snapshot(String),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// A page as seen by the repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    title: String,
    redirect: Option<String>,
}

impl Page {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            redirect: None,
        }
    }

    /// A page that redirects to `target`.
    pub fn redirect(title: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            redirect: Some(target.into()),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// The title without its namespace prefix.
    pub fn short_title(&self) -> &str {
        strip_namespace(&self.title)
    }

    pub fn is_redirect(&self) -> bool {
        self.redirect.is_some()
    }

    pub fn redirect_target(&self) -> Option<Page> {
        self.redirect.as_ref().map(Page::new)
    }
}

/// One pass over the members of a category. A member may fail to load, in
/// which case the error is yielded in its place.
pub type Members<'a> = Box<dyn Iterator<Item = Result<Page, RepositoryError>> + 'a>;

/// The lookups the linter needs from a wiki.
pub trait Repository {
    fn page(&self, title: &str) -> Result<Page, RepositoryError>;

    fn category_members(&self, category: &str) -> Result<Members<'_>, RepositoryError>;
}

impl<R: Repository + ?Sized> Repository for &R {
    fn page(&self, title: &str) -> Result<Page, RepositoryError> {
        (**self).page(title)
    }

    fn category_members(&self, category: &str) -> Result<Members<'_>, RepositoryError> {
        (**self).category_members(category)
    }
}

impl<R: Repository + ?Sized> Repository for Box<R> {
    fn page(&self, title: &str) -> Result<Page, RepositoryError> {
        (**self).page(title)
    }

    fn category_members(&self, category: &str) -> Result<Members<'_>, RepositoryError> {
        (**self).category_members(category)
    }
}
