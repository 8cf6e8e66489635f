//! Component types for the decomposition graph.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier of a component within a single decomposition.
///
/// Assigned sequentially from 0 in construction order and rendered as `comp_<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentId(pub usize);

impl ComponentId {
    /// Prefix used in the rendered form.
    pub const PREFIX: &'static str = "comp_";

    /// Get the raw counter value.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.0)
    }
}

impl FromStr for ComponentId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix(Self::PREFIX)
            .and_then(|n| n.parse().ok())
            .map(Self)
            .ok_or_else(|| format!("invalid component id: {s}"))
    }
}

impl Serialize for ComponentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ComponentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// What a component represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentKind {
    /// Work to be done (a verb, optionally paired with an entity)
    Action,
    /// A technical term or proper noun
    Entity,
    /// A limit the work must respect (time, budget, team, explicit)
    Constraint,
    /// Reserved. Extraction never produces this kind.
    Relationship,
}

impl ComponentKind {
    /// Get the lowercase name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Action => "action",
            Self::Entity => "entity",
            Self::Constraint => "constraint",
            Self::Relationship => "relationship",
        }
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A score in `[0, 1]` with the reason it was given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Score {
    /// Value in `[0, 1]`
    pub score: f64,

    /// Human-readable justification
    pub reason: String,
}

impl Score {
    /// Create a new score, clamped to `[0, 1]`.
    pub fn new(score: f64, reason: impl Into<String>) -> Self {
        Self { score: score.clamp(0.0, 1.0), reason: reason.into() }
    }

    /// The placeholder score every action starts with.
    pub fn initial() -> Self {
        Self::new(0.5, "Initial estimate")
    }
}

/// Provenance of a component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentMetadata {
    /// Which extraction rule produced this component (e.g. `action: build`)
    pub extracted_from: String,

    /// Extraction confidence (0.0 - 1.0), fixed per kind
    pub confidence: f64,
}

/// A node in the decomposition graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Unique identifier
    pub id: ComponentId,

    /// Human-readable description
    pub description: String,

    /// Component kind
    #[serde(rename = "type")]
    pub kind: ComponentKind,

    /// Components this one depends on, in insertion order (duplicates preserved)
    pub dependencies: Vec<ComponentId>,

    /// How connected this component is
    pub coupling: Score,

    /// How much other work hinges on this component
    pub criticality: Score,

    /// Provenance
    pub metadata: ComponentMetadata,
}

impl Component {
    /// Confidence assigned to action components.
    pub const ACTION_CONFIDENCE: f64 = 0.7;
    /// Confidence assigned to entity components.
    pub const ENTITY_CONFIDENCE: f64 = 0.6;
    /// Confidence assigned to constraint components.
    pub const CONSTRAINT_CONFIDENCE: f64 = 0.8;

    /// Create an action component, optionally paired with an entity.
    pub fn action(id: ComponentId, action: &str, entity: Option<&str>) -> Self {
        let description = match entity {
            Some(entity) => format!("{action} {entity}"),
            None => action.to_string(),
        };

        Self {
            id,
            description,
            kind: ComponentKind::Action,
            dependencies: Vec::new(),
            coupling: Score::initial(),
            criticality: Score::initial(),
            metadata: ComponentMetadata {
                extracted_from: format!("action: {action}"),
                confidence: Self::ACTION_CONFIDENCE,
            },
        }
    }

    /// Create a standalone entity component.
    pub fn entity(id: ComponentId, entity: &str) -> Self {
        Self {
            id,
            description: entity.to_string(),
            kind: ComponentKind::Entity,
            dependencies: Vec::new(),
            coupling: Score::new(0.3, "Entity component"),
            criticality: Score::new(0.3, "Supporting entity"),
            metadata: ComponentMetadata {
                extracted_from: format!("entity: {entity}"),
                confidence: Self::ENTITY_CONFIDENCE,
            },
        }
    }

    /// Create a constraint component.
    pub fn constraint(id: ComponentId, constraint: &str) -> Self {
        Self {
            id,
            description: format!("respect constraint: {constraint}"),
            kind: ComponentKind::Constraint,
            dependencies: Vec::new(),
            coupling: Score::new(0.8, "Constraint impacts all components"),
            criticality: Score::new(0.9, "Constraint violation = failure"),
            metadata: ComponentMetadata {
                extracted_from: format!("constraint: {constraint}"),
                confidence: Self::CONSTRAINT_CONFIDENCE,
            },
        }
    }

    /// Add a dependency on another component.
    pub fn depends_on(mut self, id: ComponentId) -> Self {
        self.dependencies.push(id);
        self
    }

    /// Check whether this component directly depends on `id`.
    pub fn has_dependency(&self, id: ComponentId) -> bool {
        self.dependencies.contains(&id)
    }

    /// Count how many times `id` appears in this component's dependencies.
    pub fn dependency_count(&self, id: ComponentId) -> usize {
        self.dependencies.iter().filter(|&&d| d == id).count()
    }

    /// Check if this is a constraint component.
    pub fn is_constraint(&self) -> bool {
        self.kind == ComponentKind::Constraint
    }
}
