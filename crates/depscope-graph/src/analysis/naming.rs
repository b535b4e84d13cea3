//! Community naming from declaration and file names.
//!
//! A community is named after the most frequent meaningful word in the
//! exported declaration names of its members, or in their file names when no
//! member exports anything.

use crate::model::{last_segment, Graph};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Name given to communities with no usable words.
pub const GENERAL_COMMUNITY: &str = "General Community";

/// Words too generic to describe a community.
const STOP_WORDS: [&str; 19] = [
    "get", "set", "is", "has", "use", "make", "create", "init", "handle", "on", "to", "from",
    "with", "for", "of", "the", "and", "or", "not",
];

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[._-]").expect("separator pattern is valid"));
static LOWER_UPPER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z])([A-Z])").expect("camel pattern is valid"));
static ACRONYM_WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([A-Z])([A-Z][a-z])").expect("acronym pattern is valid"));
static SCRIPT_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.(ts|tsx|js|jsx)$").expect("extension pattern is valid"));

/// Split an identifier into lower-cased words.
///
/// Splits on `.`, `_`, `-`, whitespace and camelCase/PascalCase boundaries,
/// then drops one-character tokens and stop words.
pub fn extract_words(name: &str) -> Vec<String> {
    let spaced = SEPARATORS.replace_all(name, " ");
    let spaced = LOWER_UPPER.replace_all(&spaced, "${1} ${2}");
    let spaced = ACRONYM_WORD.replace_all(&spaced, "${1} ${2}");

    spaced
        .split_whitespace()
        .map(str::to_lowercase)
        .filter(|word| word.chars().count() > 1)
        .filter(|word| !STOP_WORDS.contains(&word.as_str()))
        .collect()
}

/// Word counts that remember first-encounter order for tie breaking.
#[derive(Default)]
struct WordTally {
    order: Vec<String>,
    counts: HashMap<String, usize>,
}

impl WordTally {
    fn add_all(&mut self, words: Vec<String>) {
        for word in words {
            match self.counts.get_mut(&word) {
                Some(count) => *count += 1,
                None => {
                    self.counts.insert(word.clone(), 1);
                    self.order.push(word);
                }
            }
        }
    }

    fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    fn most_frequent(&self) -> Option<&str> {
        let mut best: Option<(&str, usize)> = None;
        for word in &self.order {
            let count = self.counts[word];
            if best.is_none_or(|(_, max)| count > max) {
                best = Some((word, count));
            }
        }
        best.map(|(word, _)| word)
    }
}

/// Generate the display name of a community.
///
/// Returns `"<Word> Community"` for the most frequent word, or
/// [`GENERAL_COMMUNITY`] when no member yields any word.
pub fn community_name(members: &[&str], graph: &Graph) -> String {
    let mut tally = WordTally::default();

    for &member in members {
        let Some(node) = graph.node(member) else {
            continue;
        };
        for declaration in node.exported_declarations() {
            tally.add_all(extract_words(&declaration.name));
        }
    }

    if tally.is_empty() {
        for &member in members {
            let file_name = SCRIPT_EXTENSION.replace(last_segment(member), "");
            tally.add_all(extract_words(&file_name));
        }
    }

    match tally.most_frequent() {
        Some(word) => format!("{} Community", capitalize(word)),
        None => GENERAL_COMMUNITY.to_string(),
    }
}

/// Turn a display name into an id: lower case, whitespace runs become `-`.
pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
