//! Rule-based action item extraction
//!
//! Two stages, never combined in one call:
//!
//! 1. **Line rules.** A non-blank line is an action line when it starts with a
//!    bullet (`-`, `*`, `•`) or a numbered marker (`1.`), starts with `todo:`,
//!    `action:` or `next:`, or contains a `[ ]` / `[todo]` checkbox. Prefixes
//!    are stripped from matching lines.
//! 2. **Imperative fallback.** Only when no line matched: the text is split
//!    into sentences and those whose first word is a known imperative verb are
//!    kept as written.
//!
//! Candidates are deduplicated case-insensitively, keeping the first spelling.

use crate::error::ExtractorError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tasknote_domain::traits::ActionItemExtractor;
use tracing::debug;

static BULLET_PREFIX_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([-*•]|\d+\.)\s+").expect("valid bullet regex"));
static SENTENCE_BOUNDARY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("valid sentence boundary regex"));
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z']+").expect("valid word regex"));

const KEYWORD_PREFIXES: [&str; 3] = ["todo:", "action:", "next:"];
const CHECKBOX_MARKERS: [&str; 2] = ["[ ]", "[todo]"];

/// First words that mark a sentence as a task in the fallback stage
pub const IMPERATIVE_STARTERS: [&str; 12] = [
    "add",
    "create",
    "implement",
    "fix",
    "update",
    "write",
    "check",
    "verify",
    "refactor",
    "document",
    "design",
    "investigate",
];

/// Heuristic extractor: line patterns first, imperative sentences as fallback
///
/// Deterministic and stateless; never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicExtractor;

impl HeuristicExtractor {
    /// Create a new heuristic extractor
    pub fn new() -> Self {
        Self
    }
}

impl ActionItemExtractor for HeuristicExtractor {
    type Error = ExtractorError;

    fn extract(&self, text: &str) -> Result<Vec<String>, Self::Error> {
        Ok(extract_action_items(text))
    }
}

/// Extract action items from note text
///
/// # Examples
///
/// ```
/// use tasknote_extractor::extract_action_items;
///
/// let text = "- [ ] Set up database\n* implement API extract endpoint\n1. Write tests\nSome narrative sentence.";
/// assert_eq!(
///     extract_action_items(text),
///     vec!["Set up database", "implement API extract endpoint", "Write tests"],
/// );
///
/// // No line matched, so imperative sentences are used instead
/// assert_eq!(
///     extract_action_items("Fix the login bug. The weather is nice."),
///     vec!["Fix the login bug."],
/// );
/// ```
pub fn extract_action_items(text: &str) -> Vec<String> {
    let action_lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| is_action_line(line))
        .collect();

    // A matched line that cleans to nothing still disables the fallback
    let candidates: Vec<String> = if !action_lines.is_empty() {
        action_lines
            .into_iter()
            .map(clean_line)
            .filter(|cleaned| !cleaned.is_empty())
            .collect()
    } else {
        let sentences: Vec<String> = split_sentences(text)
            .into_iter()
            .filter(|sentence| looks_imperative(sentence))
            .map(str::to_string)
            .collect();
        if !sentences.is_empty() {
            debug!("No action lines; {} imperative sentences matched", sentences.len());
        }
        sentences
    };

    dedup_case_insensitive(candidates)
}

/// Whether a trimmed line matches any of the line rules
fn is_action_line(line: &str) -> bool {
    if line.is_empty() {
        return false;
    }
    let lowered = line.to_lowercase();
    BULLET_PREFIX_RE.is_match(&lowered)
        || KEYWORD_PREFIXES.iter().any(|prefix| lowered.starts_with(prefix))
        || CHECKBOX_MARKERS.iter().any(|marker| lowered.contains(marker))
}

/// Strip the bullet prefix, then any leading checkbox and keyword markers
fn clean_line(line: &str) -> String {
    let without_bullet = BULLET_PREFIX_RE.replace(line, "");
    let mut cleaned = without_bullet.trim();

    // "todo: [ ] x" and "[ ] todo: x" both reduce to "x"
    while let Some(rest) = CHECKBOX_MARKERS
        .iter()
        .chain(KEYWORD_PREFIXES.iter())
        .find_map(|prefix| strip_prefix_ignore_case(cleaned, prefix))
    {
        cleaned = rest.trim();
    }

    cleaned.to_string()
}

/// ASCII case-insensitive `strip_prefix`
fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix).then(|| &s[prefix.len()..])
}

/// Split text at `.`, `!` or `?` followed by whitespace
///
/// Punctuation stays with its sentence; a trailing unterminated fragment is
/// returned as the last sentence.
fn split_sentences(text: &str) -> Vec<&str> {
    let text = text.trim();
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in SENTENCE_BOUNDARY_RE.find_iter(text) {
        // the punctuation mark is a single ASCII byte
        sentences.push(&text[start..boundary.start() + 1]);
        start = boundary.end();
    }
    if start < text.len() {
        sentences.push(&text[start..]);
    }

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Whether the first word of a sentence is a known imperative verb
fn looks_imperative(sentence: &str) -> bool {
    WORD_RE
        .find(sentence)
        .map(|word| {
            let word = word.as_str().to_lowercase();
            IMPERATIVE_STARTERS.contains(&word.as_str())
        })
        .unwrap_or(false)
}

fn dedup_case_insensitive(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.to_lowercase()))
        .collect()
}
