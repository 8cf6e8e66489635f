#![allow(clippy::cast_precision_loss)]
#![allow(clippy::format_push_string)]

//! # Decomposer
//!
//! Heuristic problem decomposition for project planning.
//!
//! Decomposer reads a short free-text description of a project and breaks it into
//! typed components (actions, entities, constraints), infers the dependencies between
//! them, scores how coupled and how critical each one is, and derives a critical path
//! and groups of work that can proceed in parallel.
//!
//! ## Features
//!
//! - **Pattern Extraction**: Work verbs, technical terms and time/budget/team constraints
//! - **Dependency Inference**: Sentence co-mentions plus a canonical action order
//! - **Graph Analysis**: Depth, critical path, parallel groups and a complexity label
//! - **Traceable Reasoning**: Every pass records what it did
//!
//! ## Quick Start
//!
//! ```
//! use decomposer::decompose;
//!
//! let result = decompose("Build system in 2 weeks with zero budget and solo engineer", None, None)
//!     .unwrap();
//!
//! for component in &result.components {
//!     println!("{} ({})", component.description, component.kind);
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
// Allow common patterns that are intentional in this codebase
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::option_if_let_else)]
#![allow(clippy::map_unwrap_or)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod core;
pub mod decomposition;

// Re-export commonly used types
pub use core::{AnalysisSettings, Config, OutputConfig, OutputFormat};
pub use decomposition::{
    decompose, Component, ComponentId, ComponentKind, Complexity, Context, DecompositionError,
    DecompositionResult, Decomposer, Noise, NoiseKind,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "decomposer";
