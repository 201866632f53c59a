//! Parsed articles and forward-only cursors over their nodes.

use crate::wikitext::{self, Node};

/// An article's source text together with its top-level nodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    nodes: Vec<Node>,
}

impl Document {
    /// Parse `text` with the built-in wikitext front-end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let nodes = wikitext::parse(&text);
        Self { text, nodes }
    }

    /// Wrap nodes produced by another parser.
    pub fn from_nodes(text: impl Into<String>, nodes: Vec<Node>) -> Self {
        Self {
            text: text.into(),
            nodes,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// A fresh cursor positioned at the first node.
    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.nodes)
    }

    /// The source text a node was parsed from, or `""` if the node's range
    /// does not lie within this document.
    pub fn source(&self, node: &Node) -> &str {
        let range = node.range();
        self.text
            .get(usize::from(range.start())..usize::from(range.end()))
            .unwrap_or_default()
    }

}

/// A forward-only cursor with one node of lookahead.
///
/// `peek` never moves the cursor; `advance` always does, even past the end.
/// Out-of-range positions simply yield `None`.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    nodes: &'a [Node],
    index: usize,
}

impl<'a> Cursor<'a> {
    pub fn new(nodes: &'a [Node]) -> Self {
        Self { nodes, index: 0 }
    }

    pub fn peek(&self) -> Option<&'a Node> {
        self.nodes.get(self.index)
    }

    pub fn advance(&mut self) {
        self.index = self.index.saturating_add(1);
    }

    pub fn position(&self) -> usize {
        self.index
    }
}

impl<'a> Iterator for Cursor<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.peek()?;
        self.advance();
        Some(node)
    }
}
