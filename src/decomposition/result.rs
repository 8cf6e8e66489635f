//! Decomposition result and report rendering.

use serde::{Deserialize, Serialize};

use super::component::{Component, ComponentId};
use super::graph::Complexity;
use super::noise::Noise;
use super::trace::Reasoning;
use crate::core::OutputConfig;

/// Aggregate figures for a decomposition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultMetadata {
    /// Number of components
    pub total_components: usize,

    /// Longest dependency chain
    pub max_depth: usize,

    /// Complexity label
    pub estimated_complexity: Complexity,

    /// Mean component confidence
    pub confidence: f64,

    /// Ambiguity found in the input, if any
    pub noise_detected: Option<Noise>,
}

/// Output of a decomposition run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecompositionResult {
    /// Components in id order
    pub components: Vec<Component>,

    /// Execution ordering rooted at the most critical component
    pub critical_path: Vec<ComponentId>,

    /// Groups of components with no direct edges between members
    pub parallelizable: Vec<Vec<ComponentId>>,

    /// Steps and decisions taken
    pub reasoning: Reasoning,

    /// Aggregate figures
    pub metadata: ResultMetadata,

    /// Warnings raised during the run
    pub warnings: Vec<String>,
}

impl DecompositionResult {
    /// Find a component by id.
    pub fn component(&self, id: ComponentId) -> Option<&Component> {
        self.components.iter().find(|c| c.id == id)
    }

    fn describe(&self, id: ComponentId) -> &str {
        self.component(id).map_or("<unknown>", |c| c.description.as_str())
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Render a human-readable report.
    pub fn to_text(&self, output: &OutputConfig) -> String {
        let rule = "=".repeat(70);
        let mut out = String::new();

        out.push_str(&format!("Total Components: {}\n", self.metadata.total_components));
        out.push_str(&format!("Complexity: {}\n", self.metadata.estimated_complexity));
        out.push_str(&format!("Confidence: {:.2}\n", self.metadata.confidence));
        out.push_str(&format!("Max Depth: {}\n", self.metadata.max_depth));
        if let Some(ref noise) = self.metadata.noise_detected {
            out.push_str(&format!("Noise: {} - {}\n", noise.kind, noise.description));
        }

        out.push_str(&format!("\nCOMPONENTS IDENTIFIED:\n{rule}\n"));
        for (i, c) in self.components.iter().enumerate() {
            out.push_str(&format!("\n{}. {}\n", i + 1, c.description));
            out.push_str(&format!("   Type: {}\n", c.kind));
            out.push_str(&format!(
                "   Criticality: {:.2} - {}\n",
                c.criticality.score, c.criticality.reason
            ));
            out.push_str(&format!("   Coupling: {:.2} - {}\n", c.coupling.score, c.coupling.reason));
            if !c.dependencies.is_empty() {
                let deps: Vec<String> = c.dependencies.iter().map(ToString::to_string).collect();
                out.push_str(&format!("   Dependencies: {}\n", deps.join(", ")));
            }
        }

        out.push_str(&format!("\n{rule}\nCRITICAL PATH (execution order):\n{rule}\n"));
        for (i, id) in self.critical_path.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, self.describe(*id)));
        }

        if !self.parallelizable.is_empty() {
            out.push_str(&format!("\n{rule}\nPARALLELIZABLE WORK (can do simultaneously):\n{rule}\n"));
            for (i, group) in self.parallelizable.iter().enumerate() {
                out.push_str(&format!("\nGroup {}:\n", i + 1));
                for id in group {
                    out.push_str(&format!("  - {}\n", self.describe(*id)));
                }
            }
        }

        if output.show_reasoning {
            out.push_str(&format!("\n{rule}\nREASONING TRACE:\n{rule}\n"));
            for step in &self.reasoning.steps {
                out.push_str(&format!("  * {step}\n"));
            }
            for decision in &self.reasoning.decisions {
                out.push_str(&format!("  > {}: {}\n", decision.point, decision.rationale));
            }
        }

        if output.show_warnings && !self.warnings.is_empty() {
            out.push_str(&format!("\n{rule}\nWARNINGS:\n{rule}\n"));
            for warning in &self.warnings {
                out.push_str(&format!("  ! {warning}\n"));
            }
        }

        out
    }
}
