//! Keyword and pattern extraction.
//!
//! Scans problem text for three independent families of matches:
//! - **Actions**: work verbs such as `build` or `deploy`
//! - **Entities**: technical terms and capitalized words
//! - **Constraints**: explicit constraints plus time, budget and team-size patterns
//!
//! Every list is lowercased, deduplicated and sorted so that component ids and
//! descriptions are reproducible across runs.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

static ACTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(build|create|implement|develop|design|setup|configure|install|deploy|integrate|test|validate|optimize|refactor|migrate|add|remove|update|modify|fix|enhance|improve|analyze|evaluate|assess|review|audit|investigate)\b",
    )
    .expect("action pattern is valid")
});

static TECH_ENTITY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(api|mcp|server|database|worker|service|function|component|module|system|cache|storage|queue|d1|r2|kv|cloudflare)\b",
    )
    .expect("entity pattern is valid")
});

static CAPITALIZED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-zA-Z]+\b").expect("capitalized pattern is valid"));

/// Time, budget and team-size patterns, in that order.
static CONSTRAINT_RES: Lazy<[Regex; 3]> = Lazy::new(|| {
    [
        Regex::new(r"(?i)\b\d+\s+(day|week|month|hour|minute)s?\b").expect("time pattern is valid"),
        Regex::new(r"(?i)\$\d+|\bzero budget\b|no budget").expect("budget pattern is valid"),
        Regex::new(r"(?i)\b(solo|alone|\d+\s+engineers?|\d+\s+person)\b")
            .expect("team pattern is valid"),
    ]
});

/// Capitalized words that never count as entities.
const SKIP_WORDS: &[&str] = &["The", "A", "An", "In", "On", "For", "With", "To", "From", "By"];

/// Raw matches from a problem description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    /// Action verbs, sorted
    pub actions: Vec<String>,

    /// Entities, sorted
    pub entities: Vec<String>,

    /// Constraints, sorted
    pub constraints: Vec<String>,
}

impl Extraction {
    /// Check if nothing was extracted.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty() && self.entities.is_empty() && self.constraints.is_empty()
    }
}

/// Run all extraction rules over `text`.
pub fn extract(text: &str, explicit_constraints: &[String]) -> Extraction {
    Extraction {
        actions: extract_actions(text),
        entities: extract_entities(text),
        constraints: extract_constraints(text, explicit_constraints),
    }
}

/// Extract work verbs.
pub fn extract_actions(text: &str) -> Vec<String> {
    ACTION_RE
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Extract technical terms and capitalized words.
pub fn extract_entities(text: &str) -> Vec<String> {
    let mut entities: BTreeSet<String> =
        TECH_ENTITY_RE.find_iter(text).map(|m| m.as_str().to_lowercase()).collect();

    entities.extend(
        CAPITALIZED_RE
            .find_iter(text)
            .map(|m| m.as_str())
            .filter(|word| !SKIP_WORDS.contains(word))
            .map(str::to_lowercase),
    );

    entities.into_iter().collect()
}

/// Extract explicit and pattern-matched constraints.
pub fn extract_constraints(text: &str, explicit: &[String]) -> Vec<String> {
    let mut constraints: BTreeSet<String> = explicit
        .iter()
        .map(|c| c.trim().to_lowercase())
        .filter(|c| !c.is_empty())
        .collect();

    for re in CONSTRAINT_RES.iter() {
        constraints.extend(re.find_iter(text).map(|m| m.as_str().to_lowercase()));
    }

    constraints.into_iter().collect()
}
