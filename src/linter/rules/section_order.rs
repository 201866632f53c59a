use crate::document::Document;
use crate::front_matter::Classifier;
use crate::linter::diagnostics::{Diagnostic, Location, Severity};
use crate::linter::rules::Rule;
use crate::repository::Repository;

/// Reports lead-section elements (hatnotes, maintenance tags, infoboxes, ...)
/// that appear before something they should precede.
pub struct SectionOrderRule<R> {
    classifier: Classifier<R>,
    severity: Severity,
}

impl<R: Repository> SectionOrderRule<R> {
    pub fn new(classifier: Classifier<R>) -> Self {
        Self {
            classifier,
            severity: Severity::default(),
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl<R: Repository> Rule for SectionOrderRule<R> {
    fn name(&self) -> &str {
        "section-order"
    }

    fn check(&self, document: &Document) -> Vec<Diagnostic> {
        self.classifier
            .scan(document)
            .map(|nit| {
                let location = Location::from_node(nit.node(), document.text());
                let message = match nit.kind() {
                    Some(kind) => format!("{}: {} after {}", nit.message(), kind, nit.preceded_by()),
                    None => nit.message().to_string(),
                };
                match self.severity {
                    Severity::Error => Diagnostic::error(location, "section-order", message),
                    Severity::Warning => Diagnostic::warning(location, "section-order", message),
                }
            })
            .collect()
    }
}
