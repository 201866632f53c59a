use crate::document::Document;
use crate::linter::diagnostics::Diagnostic;
use crate::linter::rules::RuleRegistry;

pub struct LintRunner {
    registry: RuleRegistry,
}

impl LintRunner {
    pub fn new(registry: RuleRegistry) -> Self {
        Self { registry }
    }

    pub fn run(&self, document: &Document) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for rule in self.registry.rules() {
            log::debug!("Running lint rule: {}", rule.name());
            let rule_diagnostics = rule.check(document);
            log::debug!(
                "Rule {} found {} diagnostic(s)",
                rule.name(),
                rule_diagnostics.len()
            );
            diagnostics.extend(rule_diagnostics);
        }

        diagnostics.sort_by_key(|d| (d.location.line, d.location.column));
        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::diagnostics::Location;
    use crate::linter::rules::Rule;
    use crate::wikitext::Node;

    /// Flags every heading, to check ordering across rules.
    struct HeadingRule;

    impl Rule for HeadingRule {
        fn name(&self) -> &str {
            "heading"
        }

        fn check(&self, document: &Document) -> Vec<Diagnostic> {
            document
                .nodes()
                .iter()
                .filter(|node| matches!(node, Node::Heading(_)))
                .map(|node| {
                    Diagnostic::warning(
                        Location::from_node(node, document.text()),
                        "heading",
                        "heading",
                    )
                })
                .collect()
        }
    }

    /// Flags every template.
    struct TemplateRule;

    impl Rule for TemplateRule {
        fn name(&self) -> &str {
            "template"
        }

        fn check(&self, document: &Document) -> Vec<Diagnostic> {
            document
                .nodes()
                .iter()
                .filter_map(Node::as_template)
                .map(|template| {
                    Diagnostic::warning(
                        Location::from_range(template.range, document.text()),
                        "template",
                        template.name.clone(),
                    )
                })
                .collect()
        }
    }

    #[test]
    fn test_empty_registry() {
        let runner = LintRunner::new(RuleRegistry::default());
        assert!(runner.run(&Document::new("{{Infobox}}")).is_empty());
    }

    #[test]
    fn test_diagnostics_sorted_by_position() {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(HeadingRule));
        registry.register(Box::new(TemplateRule));
        let runner = LintRunner::new(registry);

        let document = Document::new("{{A}}\n== Early life ==\n{{B}}");
        let codes: Vec<_> = runner
            .run(&document)
            .into_iter()
            .map(|d| (d.location.line, d.code))
            .collect();

        assert_eq!(
            codes,
            vec![
                (1, "template".to_string()),
                (2, "heading".to_string()),
                (3, "template".to_string()),
            ]
        );
    }
}
