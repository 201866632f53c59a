pub mod diagnostics;
pub mod rules;
pub mod runner;

pub use diagnostics::{Diagnostic, Location, Severity};
pub use rules::{Rule, RuleRegistry};
pub use runner::LintRunner;

use crate::config::Config;
use crate::document::Document;
use crate::front_matter::Classifier;
use crate::repository::Repository;

/// Lint a document with the built-in rules.
pub fn lint<R: Repository + 'static>(
    document: &Document,
    classifier: Classifier<R>,
    config: &Config,
) -> Vec<Diagnostic> {
    let registry = default_registry(classifier, config);
    let runner = LintRunner::new(registry);
    runner.run(document)
}

/// Create the default rule registry with all built-in rules.
pub fn default_registry<R: Repository + 'static>(
    classifier: Classifier<R>,
    config: &Config,
) -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    registry.register(Box::new(
        rules::section_order::SectionOrderRule::new(classifier).with_severity(config.severity),
    ));
    registry
}
