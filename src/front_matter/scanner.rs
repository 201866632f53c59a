use std::collections::HashMap;

use super::classifier::Classifier;
use super::kind::ElementKind;
use crate::document::{Cursor, Document};
use crate::repository::Repository;
use crate::wikitext::Node;

pub const OUT_OF_ORDER: &str = "pre-content element out of order";

/// A node together with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeInfo<'a> {
    node: &'a Node,
    kind: Option<ElementKind>,
}

impl<'a> NodeInfo<'a> {
    pub fn new(node: &'a Node, kind: Option<ElementKind>) -> Self {
        Self { node, kind }
    }

    pub fn node(&self) -> &'a Node {
        self.node
    }

    pub fn kind(&self) -> Option<ElementKind> {
        self.kind
    }
}

/// One ordering violation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nit<'a> {
    info: NodeInfo<'a>,
    message: String,
    preceded_by: ElementKind,
}

impl<'a> Nit<'a> {
    pub fn new(info: NodeInfo<'a>, message: impl Into<String>, preceded_by: ElementKind) -> Self {
        Self {
            info,
            message: message.into(),
            preceded_by,
        }
    }

    pub fn info(&self) -> NodeInfo<'a> {
        self.info
    }

    pub fn node(&self) -> &'a Node {
        self.info.node
    }

    pub fn kind(&self) -> Option<ElementKind> {
        self.info.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// The highest-ranked kind seen before the offending node.
    pub fn preceded_by(&self) -> ElementKind {
        self.preceded_by
    }
}

/// The run of templates and file links at the start of a document.
///
/// Whitespace-only text is skipped; any other node ends the run and is left
/// unconsumed.
#[derive(Debug, Clone)]
pub struct PreContent<'a> {
    cursor: Cursor<'a>,
    done: bool,
}

pub fn pre_content(document: &Document) -> PreContent<'_> {
    PreContent {
        cursor: document.cursor(),
        done: false,
    }
}

impl<'a> Iterator for PreContent<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let Some(node) = self.cursor.peek() else {
                self.done = true;
                break;
            };

            match node {
                Node::Text(text) if text.is_blank() => self.cursor.advance(),
                Node::Template(_) => {
                    self.cursor.advance();
                    return Some(node);
                }
                Node::Link(link) if link.is_file() => {
                    self.cursor.advance();
                    return Some(node);
                }
                Node::Text(_) | Node::Link(_) | Node::Heading(_) | Node::Comment(_) => {
                    log::debug!("Pre-content ends at node {}", self.cursor.position());
                    self.done = true;
                }
            }
        }
        None
    }
}

/// Lazily yields a [`Nit`] for every pre-content element ranked below the
/// highest rank seen before it. Unclassified elements are passed over: they
/// are never reported and do not raise the high-water mark.
pub struct Scan<'a, R> {
    classifier: &'a Classifier<R>,
    nodes: PreContent<'a>,
    highest: Option<ElementKind>,
    memo: HashMap<String, Option<ElementKind>>,
}

pub fn scan<'a, R: Repository>(classifier: &'a Classifier<R>, document: &'a Document) -> Scan<'a, R> {
    Scan {
        classifier,
        nodes: pre_content(document),
        highest: None,
        memo: HashMap::new(),
    }
}

impl<R: Repository> Scan<'_, R> {
    fn classify(&mut self, node: &Node) -> Option<ElementKind> {
        let Node::Template(template) = node else {
            return self.classifier.classify(node);
        };

        if let Some(kind) = self.memo.get(&template.name) {
            return *kind;
        }
        let kind = self.classifier.classify(node);
        self.memo.insert(template.name.clone(), kind);
        kind
    }
}

impl<'a, R: Repository> Iterator for Scan<'a, R> {
    type Item = Nit<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(node) = self.nodes.next() {
            let Some(kind) = self.classify(node) else {
                continue;
            };

            match self.highest {
                Some(highest) if kind.rank() < highest.rank() => {
                    log::debug!("{} found after {}", kind, highest);
                    return Some(Nit::new(
                        NodeInfo::new(node, Some(kind)),
                        OUT_OF_ORDER,
                        highest,
                    ));
                }
                _ => self.highest = Some(kind),
            }
        }
        None
    }
}
