//! A deliberately small wikitext front-end.
//!
//! Only the top level of an article is split into nodes: templates, wikilinks,
//! headings, comments and the text between them. Nested markup stays inside
//! the node that encloses it.

mod names;
mod nodes;
mod parser;

pub use names::{has_namespace, normalize_name, normalize_title, strip_namespace};
pub use nodes::{Comment, Heading, Link, Node, Parameter, Template, Text};
pub use parser::parse;
