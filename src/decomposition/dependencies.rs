//! Dependency inference from sentence co-mentions.

use once_cell::sync::Lazy;
use regex::Regex;

use super::component::{Component, ComponentId, ComponentKind};

static SENTENCE_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]+").expect("sentence pattern is valid"));

/// Canonical order in which actions usually happen.
const ACTION_SEQUENCE: &[&str] = &["setup", "build", "configure", "test", "deploy", "integrate"];

/// Split text into trimmed, non-empty sentences.
pub fn split_sentences(text: &str) -> Vec<String> {
    SENTENCE_SPLIT_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
        .collect()
}

fn sequence_index(description: &str) -> Option<usize> {
    ACTION_SEQUENCE.iter().position(|step| description.contains(step))
}

/// Check whether `action` naturally comes after `other`.
///
/// Both descriptions must contain a keyword from the canonical sequence, and
/// `other`'s keyword must come strictly earlier.
pub fn is_sequential(action: &str, other: &str) -> bool {
    match (sequence_index(action), sequence_index(other)) {
        (Some(this), Some(that)) => that < this,
        _ => false,
    }
}

/// Fill in `dependencies` on every component.
///
/// Actions depend on entities and earlier actions mentioned in the same sentence,
/// and every non-constraint component depends on every constraint. The resulting
/// lists are never deduplicated.
pub fn infer_dependencies(components: &mut [Component], problem_text: &str) {
    let sentences = split_sentences(problem_text);
    let descriptions: Vec<String> =
        components.iter().map(|c| c.description.to_lowercase()).collect();
    let kinds: Vec<(ComponentId, ComponentKind)> =
        components.iter().map(|c| (c.id, c.kind)).collect();
    let constraints: Vec<ComponentId> =
        components.iter().filter(|c| c.is_constraint()).map(|c| c.id).collect();

    for (i, component) in components.iter_mut().enumerate() {
        let relevant: Vec<&String> =
            sentences.iter().filter(|s| s.contains(descriptions[i].as_str())).collect();

        if !relevant.is_empty() && component.kind == ComponentKind::Action {
            for (j, &(other_id, other_kind)) in kinds.iter().enumerate() {
                if i == j {
                    continue;
                }

                let co_mentioned = relevant.iter().any(|s| s.contains(descriptions[j].as_str()));
                if !co_mentioned {
                    continue;
                }

                match other_kind {
                    ComponentKind::Entity => component.dependencies.push(other_id),
                    ComponentKind::Action if is_sequential(&descriptions[i], &descriptions[j]) => {
                        component.dependencies.push(other_id);
                    }
                    _ => {}
                }
            }
        }

        if !component.is_constraint() {
            component.dependencies.extend(constraints.iter().copied());
        }
    }
}
