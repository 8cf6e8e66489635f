//! Problem decomposition pipeline.
//!
//! Breaks a free-text problem description into actions, entities and constraints,
//! links them into a dependency graph and analyzes that graph.
//!
//! ## Passes
//!
//! 1. Extract actions, entities and constraints (`extractor`)
//! 2. Build typed components (`builder`)
//! 3. Infer dependencies from sentence co-mentions (`dependencies`)
//! 4. Score coupling and criticality (`scoring`)
//! 5. Derive depth, critical path, parallel groups, complexity and noise (`graph`, `noise`)
//!
//! Every pass writes to a per-run [`Trace`], so runs never share state.

mod builder;
mod component;
mod dependencies;
mod error;
mod extractor;
mod graph;
mod noise;
mod result;
mod scoring;
mod trace;

use std::collections::BTreeMap;
use std::time::Instant;

pub use builder::{build_components, find_related_entity};
pub use component::{Component, ComponentId, ComponentKind, ComponentMetadata, Score};
pub use dependencies::{infer_dependencies, is_sequential, split_sentences};
pub use error::{DecompositionError, Result};
pub use extractor::{extract, extract_actions, extract_constraints, extract_entities, Extraction};
pub use graph::{
    critical_path, estimate_complexity, max_depth, most_critical, overall_confidence,
    parallel_groups, Complexity, DependencyGraph,
};
pub use noise::{detect_noise, Noise, NoiseKind};
pub use result::{DecompositionResult, ResultMetadata};
pub use scoring::{incoming_counts, score_components};
pub use trace::{Decision, Reasoning, Trace};

use crate::core::AnalysisSettings;

/// Free-form context supplied alongside a problem.
pub type Context = BTreeMap<String, serde_json::Value>;

/// Runs the decomposition pipeline with a fixed set of thresholds.
#[derive(Debug, Clone, Default)]
pub struct Decomposer {
    settings: AnalysisSettings,
}

impl Decomposer {
    /// Create a decomposer with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a decomposer with custom thresholds.
    pub fn with_settings(settings: AnalysisSettings) -> Self {
        Self { settings }
    }

    /// Get the thresholds in use.
    pub fn settings(&self) -> &AnalysisSettings {
        &self.settings
    }

    /// Decompose a problem description.
    ///
    /// `context` is accepted for callers that carry extra metadata but does not
    /// influence any rule. `constraints` are merged with the constraints found in
    /// the text.
    pub fn decompose(
        &self,
        problem_text: &str,
        context: Option<&Context>,
        constraints: Option<&[String]>,
    ) -> Result<DecompositionResult> {
        let start = Instant::now();
        let mut trace = Trace::new();

        if let Some(context) = context {
            tracing::debug!(keys = ?context.keys().collect::<Vec<_>>(), "Ignoring context");
        }

        let extraction = extract(problem_text, constraints.unwrap_or_default());
        trace.step(format!("Pass 1: Identified {} potential actions", extraction.actions.len()));
        trace.step(format!("Pass 2: Identified {} entities", extraction.entities.len()));
        trace.step(format!("Pass 3: Identified {} constraints", extraction.constraints.len()));

        let mut components = build_components(&extraction, &mut trace);
        trace.step(format!("Pass 4: Generated {} components", components.len()));

        infer_dependencies(&mut components, problem_text);
        trace.step("Pass 5: Mapped dependencies");

        score_components(&mut components, &self.settings, &mut trace);
        trace.step("Pass 6: Calculated coupling scores");

        let critical_path = critical_path(&components)?;
        trace.step("Pass 7: Identified critical path");

        let parallelizable = parallel_groups(&components);
        trace.step(format!("Pass 8: Found {} parallelizable groups", parallelizable.len()));

        let max_depth = max_depth(&components)?;
        let estimated_complexity = estimate_complexity(&components, max_depth);
        let confidence = overall_confidence(&components);

        let elapsed = start.elapsed().as_secs_f64() * 1000.0;
        trace.step(format!("Decomposition completed in {elapsed:.2}ms"));

        let noise = detect_noise(problem_text, &components, &self.settings);
        if let Some(ref noise) = noise {
            trace.warn(format!("Detected {} noise: {}", noise.kind, noise.description));
        }

        tracing::debug!(
            components = components.len(),
            max_depth,
            complexity = %estimated_complexity,
            "Decomposition finished"
        );

        let (reasoning, warnings) = trace.finish();
        Ok(DecompositionResult {
            metadata: ResultMetadata {
                total_components: components.len(),
                max_depth,
                estimated_complexity,
                confidence,
                noise_detected: noise,
            },
            components,
            critical_path,
            parallelizable,
            reasoning,
            warnings,
        })
    }
}

/// Decompose a problem description with default thresholds.
///
/// ```
/// use decomposer::decompose;
///
/// let constraints = vec!["2 weeks".to_string(), "solo".to_string()];
/// let result =
///     decompose("Build the MCP server and deploy it", None, Some(constraints.as_slice())).unwrap();
///
/// assert_eq!(result.metadata.total_components, result.components.len());
/// ```
pub fn decompose(
    problem_text: &str,
    context: Option<&Context>,
    constraints: Option<&[String]>,
) -> Result<DecompositionResult> {
    Decomposer::new().decompose(problem_text, context, constraints)
}
