//! Coupling and criticality scoring.

use std::collections::HashMap;

use super::component::{Component, ComponentId, Score};
use super::trace::Trace;
use crate::core::AnalysisSettings;

/// Count how often each component appears in other components' dependency lists.
pub fn incoming_counts(components: &[Component]) -> HashMap<ComponentId, usize> {
    let mut counts = HashMap::with_capacity(components.len());
    for component in components {
        for &dep in &component.dependencies {
            *counts.entry(dep).or_insert(0) += 1;
        }
    }
    counts
}

/// Recompute coupling and criticality for every component.
///
/// Must run once all dependencies are known. Components whose coupling exceeds
/// `settings.coupling_warning_threshold` produce a warning.
pub fn score_components(
    components: &mut [Component],
    settings: &AnalysisSettings,
    trace: &mut Trace,
) {
    let incoming = incoming_counts(components);
    let max_possible = (components.len().saturating_sub(1) * 2).max(1) as f64;

    for component in components.iter_mut() {
        let dependents = incoming.get(&component.id).copied().unwrap_or(0);
        let dependencies = component.dependencies.len();

        let coupling = ((dependencies + dependents) as f64 / max_possible).min(1.0);
        component.coupling =
            Score::new(coupling, format!("{dependencies} dependencies, {dependents} dependents"));

        if coupling > settings.coupling_warning_threshold {
            trace.warn(format!(
                "Component '{}' is highly coupled ({:.2})",
                component.description, coupling
            ));
        }

        component.criticality = if component.is_constraint() {
            Score::new(0.95, "Constraint affects all work")
        } else {
            let score = (0.3 + 0.15 * dependents as f64).min(1.0);
            Score::new(score, format!("{dependents} components depend on this"))
        };
    }
}
