pub mod config;
pub mod document;
pub mod front_matter;
pub mod linter;
pub mod repository;
pub mod wikitext;

pub use config::Config;
pub use config::ConfigBuilder;
pub use document::Document;
pub use front_matter::{Classifier, ElementKind, Nit};
pub use repository::{OfflineRepository, Repository, SnapshotRepository};

/// Parses a wikitext article into a [`Document`].
///
/// A leading byte order mark is dropped and line endings are normalized to
/// `\n` first, so node ranges index into [`Document::text`] rather than the
/// raw input.
///
/// # Examples
///
/// ```rust
/// use wikilint::parse;
///
/// let document = parse("{{Short description|Aviator}}\n{{Infobox aviator}}\n");
/// println!("{:#?}", document.nodes());
/// ```
pub fn parse(input: &str) -> Document {
    let input = input.strip_prefix('\u{feff}').unwrap_or(input);
    Document::new(input.replace("\r\n", "\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_line_endings() {
        let document = parse("{{Use dmy dates}}\r\n{{Infobox aviator}}\r\n");
        assert_eq!(document.text(), "{{Use dmy dates}}\n{{Infobox aviator}}\n");
        assert_eq!(document.nodes().len(), 4);
    }

    #[test]
    fn test_parse_strips_byte_order_mark() {
        let document = parse("\u{feff}{{Infobox aviator}}\n{{Short description}}");
        assert_eq!(document.text(), "{{Infobox aviator}}\n{{Short description}}");
        assert!(matches!(document.nodes().first(), Some(wikitext::Node::Template(_))));

        let classifier = Classifier::from_config(OfflineRepository, &Config::default()).unwrap();
        let nits: Vec<_> = classifier.scan(&document).collect();
        assert_eq!(nits.len(), 1);
        assert_eq!(nits[0].kind(), Some(ElementKind::ShortDescription));
    }
}
