//! Noise classification for the whole input.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::component::Component;
use crate::core::AnalysisSettings;

/// Words that signal uncertain or probabilistic requirements.
const VAGUE_TERMS: &[&str] = &["maybe", "possibly", "might", "could", "approximately"];

/// Kind of ambiguity detected in a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoiseKind {
    /// Not enough information
    Epistemic,
    /// Uncertain or probabilistic language
    Aleatory,
    /// Low extraction confidence
    Human,
}

impl NoiseKind {
    /// Get the lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Epistemic => "epistemic",
            Self::Aleatory => "aleatory",
            Self::Human => "human",
        }
    }

    /// Standard description for this kind.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Epistemic => "Problem description lacks detail and context",
            Self::Aleatory => "Problem contains uncertain or probabilistic elements",
            Self::Human => "High uncertainty in component extraction",
        }
    }
}

impl fmt::Display for NoiseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detected noise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Noise {
    /// Noise kind
    #[serde(rename = "type")]
    pub kind: NoiseKind,

    /// Explanation
    pub description: String,
}

impl Noise {
    /// Create noise of a kind with its standard description.
    pub fn new(kind: NoiseKind) -> Self {
        Self { kind, description: kind.description().to_string() }
    }
}

/// Classify the input, first match wins: epistemic, aleatory, then human.
pub fn detect_noise(
    problem_text: &str,
    components: &[Component],
    settings: &AnalysisSettings,
) -> Option<Noise> {
    if problem_text.chars().count() < settings.min_detail_length {
        return Some(Noise::new(NoiseKind::Epistemic));
    }

    let lower = problem_text.to_lowercase();
    if VAGUE_TERMS.iter().any(|term| lower.contains(term)) {
        return Some(Noise::new(NoiseKind::Aleatory));
    }

    let low_confidence = components
        .iter()
        .filter(|c| c.metadata.confidence < settings.low_confidence_threshold)
        .count();
    if low_confidence as f64 > components.len() as f64 * settings.low_confidence_ratio {
        return Some(Noise::new(NoiseKind::Human));
    }

    None
}
