//! Page-title and template-name normalization.

/// Namespaces recognised when splitting a title. `Image` is the legacy alias
/// of `File`.
const NAMESPACES: &[&str] = &[
    "Template",
    "File",
    "Image",
    "Category",
    "Wikipedia",
    "Help",
    "Module",
    "Portal",
    "Draft",
    "User",
    "Talk",
    "MediaWiki",
    "Special",
];

/// Normalize a page title for equality: underscores become spaces, runs of
/// whitespace collapse to one space and case is folded.
pub fn normalize_title(title: &str) -> String {
    title
        .replace('_', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Normalize a template name for rule matching. Same as [`normalize_title`]
/// except that an explicit `Template:` prefix is dropped, so `{{Template:Foo}}`
/// and `{{foo}}` compare equal.
pub fn normalize_name(name: &str) -> String {
    let title = normalize_title(name);
    match title.strip_prefix("template:") {
        Some(rest) => rest.trim_start().to_string(),
        None => title,
    }
}

fn split(title: &str) -> Option<(&str, &str)> {
    let (prefix, rest) = title.trim().split_once(':')?;
    let prefix = prefix.trim();
    let key = prefix.replace('_', " ");
    NAMESPACES
        .iter()
        .any(|ns| ns.eq_ignore_ascii_case(&key))
        .then_some((prefix, rest))
}

/// Whether the title starts with a known namespace prefix.
pub fn has_namespace(title: &str) -> bool {
    split(title).is_some()
}

/// Strip a known namespace prefix: `Template:About` becomes `About`. Titles
/// without a recognised namespace are returned trimmed.
pub fn strip_namespace(title: &str) -> &str {
    match split(title) {
        Some((_, rest)) => rest.trim(),
        None => title.trim(),
    }
}
