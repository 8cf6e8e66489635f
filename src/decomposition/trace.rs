//! Per-run accumulator for reasoning steps, decisions and warnings.

use serde::{Deserialize, Serialize};

/// A recorded decision and why it was made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// What was decided
    pub point: String,

    /// Why
    pub rationale: String,
}

/// Reasoning trace attached to a result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reasoning {
    /// Ordered description of each pass
    pub steps: Vec<String>,

    /// Decisions taken along the way
    pub decisions: Vec<Decision>,
}

/// Accumulator threaded through the pipeline stages of a single run.
#[derive(Debug, Default)]
pub struct Trace {
    reasoning: Reasoning,
    warnings: Vec<String>,
}

impl Trace {
    /// Create an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a pipeline step.
    pub fn step(&mut self, step: impl Into<String>) {
        let step = step.into();
        tracing::debug!("{step}");
        self.reasoning.steps.push(step);
    }

    /// Record a decision.
    pub fn decide(&mut self, point: impl Into<String>, rationale: impl Into<String>) {
        self.reasoning.decisions.push(Decision { point: point.into(), rationale: rationale.into() });
    }

    /// Record a warning.
    pub fn warn(&mut self, warning: impl Into<String>) {
        let warning = warning.into();
        tracing::warn!("{warning}");
        self.warnings.push(warning);
    }

    /// Recorded steps so far.
    pub fn steps(&self) -> &[String] {
        &self.reasoning.steps
    }

    /// Recorded decisions so far.
    pub fn decisions(&self) -> &[Decision] {
        &self.reasoning.decisions
    }

    /// Recorded warnings so far.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Consume the trace.
    pub fn finish(self) -> (Reasoning, Vec<String>) {
        (self.reasoning, self.warnings)
    }
}
