//! Classification and ordering of the elements that precede an article's lead.
//!
//! The canonical order follows the Manual of Style's "order of article
//! elements": short description, title modifiers, hatnotes, status badges,
//! deletion/protection tags, maintenance tags, English-variety and
//! date-format markers, infobox, language-maintenance boxes, lead image and
//! navigation headers.

mod classifier;
mod kind;
mod rules;
mod scanner;

pub use classifier::Classifier;
pub use kind::{ElementKind, Rank};
pub use rules::{ClassificationRule, Matcher, RuleError, RuleSpec, RuleTable, RuleTableBuilder};
pub use scanner::{NodeInfo, Nit, OUT_OF_ORDER, PreContent, Scan, pre_content, scan};
