use rowan::{TextRange, TextSize};

use super::nodes::{Comment, Heading, Link, Node, Parameter, Template, Text};

/// Split wikitext into its top-level nodes. Never fails: anything that does
/// not form a complete construct is kept as text.
pub fn parse(input: &str) -> Vec<Node> {
    Parser::new(input).parse()
}

fn text_range(start: usize, end: usize) -> TextRange {
    TextRange::new(TextSize::from(start as u32), TextSize::from(end as u32))
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
    text_start: usize,
    nodes: Vec<Node>,
}

impl<'a> Parser<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            text_start: 0,
            nodes: Vec::new(),
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn at_line_start(&self) -> bool {
        self.pos == 0 || self.input.as_bytes()[self.pos - 1] == b'\n'
    }

    fn parse(mut self) -> Vec<Node> {
        while self.pos < self.input.len() {
            let start = self.pos;
            let parsed = self
                .try_parse_heading()
                .or_else(|| self.try_parse_comment())
                .or_else(|| self.try_parse_template())
                .or_else(|| self.try_parse_link());

            match parsed {
                Some((node, end)) => {
                    self.flush_text(start);
                    log::trace!("Parsed node at {}..{}", start, end);
                    self.nodes.push(node);
                    self.pos = end;
                    self.text_start = end;
                }
                // A `{{{param}}}` argument outside a template stays text.
                None if self.rest().starts_with("{{{") => {
                    self.pos = find_closing(self.input, start).unwrap_or(start + 3);
                }
                None => {
                    self.pos += self.rest().chars().next().map_or(1, char::len_utf8);
                }
            }
        }

        self.flush_text(self.input.len());
        self.nodes
    }

    fn flush_text(&mut self, end: usize) {
        if self.text_start < end {
            self.nodes.push(Node::Text(Text {
                range: text_range(self.text_start, end),
                value: self.input[self.text_start..end].to_string(),
            }));
        }
        self.text_start = end;
    }

    fn try_parse_heading(&self) -> Option<(Node, usize)> {
        if !self.at_line_start() {
            return None;
        }

        let rest = self.rest();
        let line = rest.split('\n').next().unwrap_or(rest);
        let trimmed = line.trim_end();

        let leading = trimmed.bytes().take_while(|&b| b == b'=').count();
        let trailing = trimmed.bytes().rev().take_while(|&b| b == b'=').count();
        let level = leading.min(trailing).min(6);
        if level == 0 || trimmed.len() <= 2 * level {
            return None;
        }

        let title = trimmed[level..trimmed.len() - level].trim().to_string();
        let end = self.pos + line.len();
        Some((
            Node::Heading(Heading {
                range: text_range(self.pos, end),
                level,
                title,
            }),
            end,
        ))
    }

    fn try_parse_comment(&self) -> Option<(Node, usize)> {
        let rest = self.rest();
        if !rest.starts_with("<!--") {
            return None;
        }

        let (contents, len) = match rest[4..].find("-->") {
            Some(offset) => (&rest[4..4 + offset], 4 + offset + 3),
            None => (&rest[4..], rest.len()),
        };
        let end = self.pos + len;
        Some((
            Node::Comment(Comment {
                range: text_range(self.pos, end),
                contents: contents.to_string(),
            }),
            end,
        ))
    }

    fn try_parse_template(&self) -> Option<(Node, usize)> {
        if !self.rest().starts_with("{{") || self.rest().starts_with("{{{") {
            return None;
        }

        let end = find_closing(self.input, self.pos)?;
        let inner = &self.input[self.pos + 2..end - 2];
        let mut parts = split_top_level(inner, b'|').into_iter();

        let name = strip_comments(parts.next().unwrap_or_default());
        let name = name.trim();
        if name.is_empty() {
            return None;
        }

        let mut params = Vec::new();
        let mut position = 0;
        for part in parts {
            let pieces = split_top_level(part, b'=');
            if pieces.len() > 1 {
                let key = pieces[0];
                params.push(Parameter {
                    name: key.trim().to_string(),
                    value: part[key.len() + 1..].trim().to_string(),
                    showkey: true,
                });
            } else {
                position += 1;
                params.push(Parameter {
                    name: position.to_string(),
                    value: part.trim().to_string(),
                    showkey: false,
                });
            }
        }

        Some((
            Node::Template(Template {
                range: text_range(self.pos, end),
                name: name.to_string(),
                params,
            }),
            end,
        ))
    }

    fn try_parse_link(&self) -> Option<(Node, usize)> {
        if !self.rest().starts_with("[[") {
            return None;
        }

        let end = find_closing(self.input, self.pos)?;
        let inner = &self.input[self.pos + 2..end - 2];
        let parts = split_top_level(inner, b'|');

        let target = parts[0].trim();
        if target.is_empty() {
            return None;
        }
        let text = (parts.len() > 1).then(|| inner[parts[0].len() + 1..].to_string());

        Some((
            Node::Link(Link {
                range: text_range(self.pos, end),
                target: target.to_string(),
                text,
            }),
            end,
        ))
    }
}

/// The closer for a bracket opening at the start of `rest`. Three braces open
/// a template argument (`{{{1|default}}}`), which closes with three braces.
fn opener(rest: &[u8]) -> Option<(usize, &'static [u8])> {
    if rest.starts_with(b"{{{") {
        Some((3, b"}}}"))
    } else if rest.starts_with(b"{{") {
        Some((2, b"}}"))
    } else if rest.starts_with(b"[[") {
        Some((2, b"]]"))
    } else {
        None
    }
}

/// Find the end (exclusive) of the bracketed construct opening at `start`,
/// honouring nested `{{ }}`, `{{{ }}}` and `[[ ]]` pairs and skipping comments.
fn find_closing(input: &str, start: usize) -> Option<usize> {
    let bytes = input.as_bytes();
    let mut stack: Vec<&[u8]> = Vec::new();
    let mut i = start;

    while i < bytes.len() {
        let rest = &bytes[i..];
        if rest.starts_with(b"<!--") {
            let offset = input[i + 4..].find("-->")?;
            i += 4 + offset + 3;
        } else if let Some(close) = stack.last().copied().filter(|close| rest.starts_with(close)) {
            stack.pop();
            i += close.len();
            if stack.is_empty() {
                return Some(i);
            }
        } else if let Some((len, close)) = opener(rest) {
            stack.push(close);
            i += len;
        } else {
            i += 1;
        }
    }

    None
}

/// Split on `sep` where it is not nested inside brackets or a comment.
fn split_top_level(inner: &str, sep: u8) -> Vec<&str> {
    let bytes = inner.as_bytes();
    let mut parts = Vec::new();
    let mut stack: Vec<&[u8]> = Vec::new();
    let mut last = 0;
    let mut i = 0;

    while i < bytes.len() {
        let rest = &bytes[i..];
        if rest.starts_with(b"<!--") {
            match inner[i + 4..].find("-->") {
                Some(offset) => {
                    i += 4 + offset + 3;
                    continue;
                }
                None => break,
            }
        }
        if let Some(close) = stack.last().copied().filter(|close| rest.starts_with(close)) {
            stack.pop();
            i += close.len();
            continue;
        }
        if let Some((len, close)) = opener(rest) {
            stack.push(close);
            i += len;
            continue;
        }
        if stack.is_empty() && bytes[i] == sep {
            parts.push(&inner[last..i]);
            last = i + 1;
        }
        i += 1;
    }

    parts.push(&inner[last..]);
    parts
}

fn strip_comments(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("<!--") {
        out.push_str(&rest[..start]);
        match rest[start + 4..].find("-->") {
            Some(offset) => rest = &rest[start + 4 + offset + 3..],
            None => return out,
        }
    }
    out.push_str(rest);
    out
}
