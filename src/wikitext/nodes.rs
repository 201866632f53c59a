use rowan::TextRange;

use super::names::strip_namespace;

/// A top-level node of a wikitext document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(Text),
    Template(Template),
    Link(Link),
    Heading(Heading),
    Comment(Comment),
}

impl Node {
    /// Byte range of the node in the source text.
    pub fn range(&self) -> TextRange {
        match self {
            Node::Text(text) => text.range,
            Node::Template(template) => template.range,
            Node::Link(link) => link.range,
            Node::Heading(heading) => heading.range,
            Node::Comment(comment) => comment.range,
        }
    }

    /// True for text nodes that hold nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Text(text) if text.is_blank())
    }

    pub fn as_template(&self) -> Option<&Template> {
        match self {
            Node::Template(template) => Some(template),
            _ => None,
        }
    }

    pub fn as_link(&self) -> Option<&Link> {
        match self {
            Node::Link(link) => Some(link),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    pub range: TextRange,
    pub value: String,
}

impl Text {
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// A `{{name|param|key=value}}` transclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub range: TextRange,
    pub name: String,
    pub params: Vec<Parameter>,
}

/// A template argument. Positional arguments are named `1`, `2`, ... and
/// have `showkey` unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub value: String,
    pub showkey: bool,
}

/// A `[[target|text]]` wikilink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub range: TextRange,
    pub target: String,
    pub text: Option<String>,
}

impl Link {
    /// Whether the link embeds a file (an image). `[[:File:x.png]]` links to
    /// the file page instead and does not count.
    pub fn is_file(&self) -> bool {
        let target = self.target.trim();
        if target.starts_with(':') {
            return false;
        }
        match target.split_once(':') {
            Some((prefix, _)) => {
                let prefix = prefix.trim();
                prefix.eq_ignore_ascii_case("file") || prefix.eq_ignore_ascii_case("image")
            }
            None => false,
        }
    }

    /// The target with any namespace prefix removed.
    pub fn title(&self) -> &str {
        strip_namespace(&self.target)
    }
}

/// A `== Title ==` section heading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub range: TextRange,
    pub level: usize,
    pub title: String,
}

/// A `<!-- ... -->` comment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub range: TextRange,
    pub contents: String,
}
