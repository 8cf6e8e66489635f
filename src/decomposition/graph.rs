//! Graph analysis over scored components.
//!
//! Everything here treats `dependencies` as directed edges from a component to the
//! components it depends on. Traversals track an in-progress set separately from the
//! finished set so a cycle surfaces as [`DecompositionError::CyclicDependency`]
//! instead of unbounded recursion.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use super::component::{Component, ComponentId};
use super::error::{DecompositionError, Result};

/// Overall complexity label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Complexity {
    #[serde(rename = "low")]
    Low,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "high")]
    High,
    #[serde(rename = "very high")]
    VeryHigh,
}

impl Complexity {
    /// Get the label as shown to users.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::VeryHigh => "very high",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Id-indexed view over a component slice.
pub struct DependencyGraph<'a> {
    components: &'a [Component],
    positions: HashMap<ComponentId, usize>,
}

impl<'a> DependencyGraph<'a> {
    /// Index components by id.
    pub fn new(components: &'a [Component]) -> Self {
        let positions = components.iter().enumerate().map(|(i, c)| (c.id, i)).collect();
        Self { components, positions }
    }

    /// Look up a component, failing on a dangling id.
    pub fn get(&self, id: ComponentId) -> Result<&'a Component> {
        self.positions
            .get(&id)
            .map(|&i| &self.components[i])
            .ok_or(DecompositionError::UnknownComponent(id))
    }

    /// Check every dependency refers to a known component.
    pub fn validate(&self) -> Result<()> {
        for component in self.components {
            for &dep in &component.dependencies {
                self.get(dep)?;
            }
        }
        Ok(())
    }

    fn depth(
        &self,
        id: ComponentId,
        depths: &mut HashMap<ComponentId, usize>,
        in_progress: &mut HashSet<ComponentId>,
    ) -> Result<usize> {
        if let Some(&depth) = depths.get(&id) {
            return Ok(depth);
        }
        if !in_progress.insert(id) {
            return Err(DecompositionError::CyclicDependency { id });
        }

        let mut depth = 1;
        for &dep in &self.get(id)?.dependencies {
            depth = depth.max(self.depth(dep, depths, in_progress)? + 1);
        }

        in_progress.remove(&id);
        depths.insert(id, depth);
        Ok(depth)
    }

    fn walk(
        &self,
        id: ComponentId,
        visited: &mut HashSet<ComponentId>,
        in_progress: &mut HashSet<ComponentId>,
        path: &mut Vec<ComponentId>,
    ) -> Result<()> {
        if in_progress.contains(&id) {
            return Err(DecompositionError::CyclicDependency { id });
        }
        if !visited.insert(id) {
            return Ok(());
        }

        in_progress.insert(id);
        for &dep in &self.get(id)?.dependencies {
            self.walk(dep, visited, in_progress, path)?;
        }
        in_progress.remove(&id);

        path.push(id);
        Ok(())
    }
}

/// Length of the longest dependency chain, counting nodes.
///
/// A component without dependencies has depth 1. An empty graph reports 1.
pub fn max_depth(components: &[Component]) -> Result<usize> {
    let graph = DependencyGraph::new(components);
    let mut depths = HashMap::with_capacity(components.len());
    let mut in_progress = HashSet::new();

    let mut max = 1;
    for component in components {
        max = max.max(graph.depth(component.id, &mut depths, &mut in_progress)?);
    }
    Ok(max)
}

/// The first component with the highest criticality score.
pub fn most_critical(components: &[Component]) -> Option<&Component> {
    components.iter().fold(None, |best: Option<&Component>, c| match best {
        Some(b) if b.criticality.score >= c.criticality.score => Some(b),
        _ => Some(c),
    })
}

/// One execution ordering reachable from the most critical component.
///
/// Walks dependencies depth-first from the root, records nodes post-order and
/// reverses the result. Components the root cannot reach are not included.
pub fn critical_path(components: &[Component]) -> Result<Vec<ComponentId>> {
    let Some(root) = most_critical(components) else {
        return Ok(Vec::new());
    };

    let graph = DependencyGraph::new(components);
    let mut visited = HashSet::new();
    let mut in_progress = HashSet::new();
    let mut path = Vec::new();
    graph.walk(root.id, &mut visited, &mut in_progress, &mut path)?;

    path.reverse();
    Ok(path)
}

fn directly_linked(a: &Component, b: &Component) -> bool {
    a.has_dependency(b.id) || b.has_dependency(a.id)
}

/// Greedily group components that share no direct dependency edge.
///
/// Each unprocessed component seeds a group; later components join if they are
/// unlinked to every member so far. Only groups of two or more are returned.
pub fn parallel_groups(components: &[Component]) -> Vec<Vec<ComponentId>> {
    let mut processed = HashSet::with_capacity(components.len());
    let mut groups = Vec::new();

    for component in components {
        if !processed.insert(component.id) {
            continue;
        }

        let mut group = vec![component];
        for other in components {
            if processed.contains(&other.id) {
                continue;
            }
            if group.iter().all(|member| !directly_linked(member, other)) {
                processed.insert(other.id);
                group.push(other);
            }
        }

        if group.len() > 1 {
            groups.push(group.iter().map(|c| c.id).collect());
        }
    }

    groups
}

/// Classify the overall complexity from size, average coupling and depth.
pub fn estimate_complexity(components: &[Component], max_depth: usize) -> Complexity {
    let count = components.len();
    let avg_coupling =
        components.iter().map(|c| c.coupling.score).sum::<f64>() / count.max(1) as f64;

    if count <= 3 && avg_coupling < 0.4 && max_depth <= 2 {
        Complexity::Low
    } else if count <= 7 && avg_coupling < 0.6 && max_depth <= 4 {
        Complexity::Medium
    } else if count <= 12 && avg_coupling < 0.8 && max_depth <= 6 {
        Complexity::High
    } else {
        Complexity::VeryHigh
    }
}

/// Mean extraction confidence, or 0.0 for no components.
pub fn overall_confidence(components: &[Component]) -> f64 {
    if components.is_empty() {
        return 0.0;
    }
    components.iter().map(|c| c.metadata.confidence).sum::<f64>() / components.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decomposition::component::Score;

    fn entity(id: usize) -> Component {
        Component::entity(ComponentId(id), &format!("e{id}"))
    }

    fn chain() -> Vec<Component> {
        // 2 -> 1 -> 0
        vec![
            entity(0),
            entity(1).depends_on(ComponentId(0)),
            entity(2).depends_on(ComponentId(1)),
        ]
    }

    #[test]
    fn test_max_depth_of_chain() {
        assert_eq!(max_depth(&chain()).unwrap(), 3);
    }

    #[test]
    fn test_max_depth_of_independent_components() {
        assert_eq!(max_depth(&[entity(0), entity(1)]).unwrap(), 1);
        assert_eq!(max_depth(&[]).unwrap(), 1);
    }

    #[test]
    fn test_max_depth_detects_cycle() {
        let components =
            vec![entity(0).depends_on(ComponentId(1)), entity(1).depends_on(ComponentId(0))];
        assert!(matches!(
            max_depth(&components),
            Err(DecompositionError::CyclicDependency { .. })
        ));
    }

    #[test]
    fn test_self_dependency_is_a_cycle() {
        let components = vec![entity(0).depends_on(ComponentId(0))];
        assert_eq!(
            max_depth(&components),
            Err(DecompositionError::CyclicDependency { id: ComponentId(0) })
        );
        assert_eq!(
            critical_path(&components),
            Err(DecompositionError::CyclicDependency { id: ComponentId(0) })
        );
    }

    #[test]
    fn test_dangling_id_fails_loudly() {
        let components = vec![entity(0).depends_on(ComponentId(9))];
        assert_eq!(max_depth(&components), Err(DecompositionError::UnknownComponent(ComponentId(9))));
        assert!(DependencyGraph::new(&components).validate().is_err());
    }

    #[test]
    fn test_diamond_is_not_a_cycle() {
        let components = vec![
            entity(0),
            entity(1).depends_on(ComponentId(0)),
            entity(2).depends_on(ComponentId(0)),
            entity(3).depends_on(ComponentId(1)).depends_on(ComponentId(2)),
        ];
        assert_eq!(max_depth(&components).unwrap(), 3);

        let mut scored = components;
        scored[3].criticality = Score::new(0.9, "root");
        let path = critical_path(&scored).unwrap();
        assert_eq!(path, vec![ComponentId(3), ComponentId(2), ComponentId(1), ComponentId(0)]);
    }

    #[test]
    fn test_critical_path_from_most_critical() {
        let mut components = chain();
        components[2].criticality = Score::new(0.8, "root");
        let path = critical_path(&components).unwrap();
        assert_eq!(path, vec![ComponentId(2), ComponentId(1), ComponentId(0)]);
    }

    #[test]
    fn test_critical_path_excludes_unreachable() {
        let mut components = chain();
        components.push(entity(3));
        components[1].criticality = Score::new(0.9, "root");
        let path = critical_path(&components).unwrap();
        assert_eq!(path, vec![ComponentId(1), ComponentId(0)]);
    }

    #[test]
    fn test_most_critical_ties_pick_first() {
        let components = vec![entity(0), entity(1), entity(2)];
        assert_eq!(most_critical(&components).map(|c| c.id), Some(ComponentId(0)));
        assert!(critical_path(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_parallel_groups_have_no_internal_edges() {
        let components = vec![
            entity(0),
            entity(1),
            entity(2).depends_on(ComponentId(0)),
            entity(3).depends_on(ComponentId(1)),
        ];
        let groups = parallel_groups(&components);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0], vec![ComponentId(0), ComponentId(1)]);
        assert_eq!(groups[1], vec![ComponentId(2), ComponentId(3)]);
    }

    #[test]
    fn test_parallel_groups_check_every_member() {
        // 1 and 2 are both free of 0, but 2 depends on 1.
        let components = vec![entity(0), entity(1), entity(2).depends_on(ComponentId(1))];
        let groups = parallel_groups(&components);
        assert_eq!(groups, vec![vec![ComponentId(0), ComponentId(1)]]);
    }

    #[test]
    fn test_parallel_groups_only_consider_direct_edges() {
        // 2 reaches 0 only through 1
        assert_eq!(parallel_groups(&chain()), vec![vec![ComponentId(0), ComponentId(2)]]);
    }

    #[test]
    fn test_parallel_groups_drop_singletons() {
        let linked = vec![entity(0), entity(1).depends_on(ComponentId(0))];
        assert!(parallel_groups(&linked).is_empty());
        assert!(parallel_groups(&[]).is_empty());
    }

    #[test]
    fn test_complexity_thresholds() {
        assert_eq!(estimate_complexity(&[entity(0)], 1), Complexity::Low);
        assert_eq!(estimate_complexity(&[entity(0)], 3), Complexity::Medium);
        assert_eq!(estimate_complexity(&[entity(0)], 6), Complexity::High);
        assert_eq!(estimate_complexity(&[entity(0)], 7), Complexity::VeryHigh);

        let many: Vec<_> = (0..8).map(entity).collect();
        assert_eq!(estimate_complexity(&many, 1), Complexity::High);
        let lots: Vec<_> = (0..13).map(entity).collect();
        assert_eq!(estimate_complexity(&lots, 1), Complexity::VeryHigh);
    }

    #[test]
    fn test_complexity_uses_average_coupling() {
        let mut components = vec![entity(0), entity(1)];
        for c in &mut components {
            c.coupling = Score::new(0.5, "test");
        }
        assert_eq!(estimate_complexity(&components, 1), Complexity::Medium);
    }

    #[test]
    fn test_overall_confidence() {
        assert!(overall_confidence(&[]).abs() < f64::EPSILON);
        let components = vec![
            Component::action(ComponentId(0), "build", None),
            Component::constraint(ComponentId(1), "solo"),
        ];
        assert!((overall_confidence(&components) - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_complexity_labels() {
        assert_eq!(Complexity::VeryHigh.to_string(), "very high");
        assert_eq!(serde_json::to_string(&Complexity::VeryHigh).unwrap(), "\"very high\"");
    }
}
