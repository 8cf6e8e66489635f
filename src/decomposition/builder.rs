//! Turns extracted matches into typed components.

use super::component::{Component, ComponentId};
use super::extractor::Extraction;
use super::trace::Trace;

/// Entity substrings each action prefers to pair with, most preferred first.
const ACTION_PAIRINGS: &[(&str, &[&str])] = &[
    ("build", &["server", "api", "system", "component"]),
    ("deploy", &["worker", "service", "function"]),
    ("integrate", &["database", "d1", "api", "service"]),
    ("configure", &["server", "worker", "cache"]),
    ("test", &["function", "api", "component"]),
];

/// Pick the entity an action most likely applies to.
///
/// Walks the action's preferred substrings in order and returns the first entity
/// containing one. Falls back to the first entity, or `None` if there are none.
pub fn find_related_entity<'a>(action: &str, entities: &'a [String]) -> Option<&'a str> {
    let preferred = ACTION_PAIRINGS
        .iter()
        .find(|(name, _)| *name == action)
        .map(|(_, prefs)| *prefs)
        .unwrap_or_default();

    preferred
        .iter()
        .find_map(|pref| entities.iter().find(|e| e.contains(pref)))
        .or_else(|| entities.first())
        .map(String::as_str)
}

/// Build the component list: actions, then unpaired entities, then constraints.
pub fn build_components(extraction: &Extraction, trace: &mut Trace) -> Vec<Component> {
    let mut components = Vec::with_capacity(
        extraction.actions.len() + extraction.entities.len() + extraction.constraints.len(),
    );

    for action in &extraction.actions {
        let id = ComponentId(components.len());
        let entity = find_related_entity(action, &extraction.entities);
        components.push(Component::action(id, action, entity));
    }

    let paired: Vec<String> = components
        .iter()
        .filter_map(|c| c.description.split_once(' ').map(|(_, rest)| rest.to_string()))
        .collect();

    for entity in extraction.entities.iter().filter(|e| !paired.contains(e)) {
        let id = ComponentId(components.len());
        components.push(Component::entity(id, entity));
    }

    for constraint in &extraction.constraints {
        let id = ComponentId(components.len());
        components.push(Component::constraint(id, constraint));
    }

    trace.decide(
        "Component generation",
        format!(
            "Generated {} components from {} actions, {} entities, {} constraints",
            components.len(),
            extraction.actions.len(),
            extraction.entities.len(),
            extraction.constraints.len()
        ),
    );

    components
}
