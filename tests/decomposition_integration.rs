//! End-to-end decomposition scenarios.
//!
//! These tests run the full pipeline through the public API and check the shape
//! of the results for realistic project descriptions.

use decomposer::{decompose, ComponentKind, Complexity, DecompositionResult, NoiseKind};

fn run(text: &str) -> DecompositionResult {
    decompose(text, None, None).expect("pipeline never sees a cycle")
}

fn of_kind(result: &DecompositionResult, kind: ComponentKind) -> usize {
    result.components.iter().filter(|c| c.kind == kind).count()
}

mod scenarios {
    use super::*;

    #[test]
    fn test_simple_problem() {
        let result = run("Build a web server and deploy it");

        assert!(of_kind(&result, ComponentKind::Action) >= 1);
        assert_eq!(result.metadata.total_components, result.components.len());
        assert!((0.0..=1.0).contains(&result.metadata.confidence));
        assert!(matches!(
            result.metadata.estimated_complexity,
            Complexity::Low | Complexity::Medium | Complexity::High | Complexity::VeryHigh
        ));
    }

    #[test]
    fn test_mcp_server_project() {
        let problem = "
            Build HUMMBL Core MCP server with DE, IN, CO transformations,
            deploy to Cloudflare Workers, integrate with D1 for logging
        ";
        let constraints = vec!["zero budget".to_string(), "production-ready".to_string()];
        let result = decompose(problem, None, Some(constraints.as_slice())).unwrap();

        assert_eq!(of_kind(&result, ComponentKind::Action), 3);
        assert_eq!(of_kind(&result, ComponentKind::Constraint), 2);
        assert!(!result.critical_path.is_empty());
        assert!(result.components.iter().any(|c| !c.dependencies.is_empty()));

        let descriptions: Vec<_> =
            result.components.iter().map(|c| c.description.as_str()).collect();
        assert!(descriptions.contains(&"build server"));
        assert!(descriptions.contains(&"deploy workers"));
        assert!(descriptions.contains(&"integrate d1"));
        assert!(descriptions.contains(&"respect constraint: production-ready"));
    }

    #[test]
    fn test_constraint_extraction() {
        let result = run("Build system in 2 weeks with zero budget and solo engineer");

        let constraints: Vec<_> =
            result.components.iter().filter(|c| c.kind == ComponentKind::Constraint).collect();
        assert!(constraints.len() >= 3);
        for c in constraints {
            assert!(c.criticality.score >= 0.8, "{} is not critical enough", c.description);
        }
    }

    #[test]
    fn test_constraints_lead_the_critical_path() {
        let result = run("Build system in 2 weeks with zero budget and solo engineer");

        let first = result.component(result.critical_path[0]).unwrap();
        assert_eq!(first.kind, ComponentKind::Constraint);
    }

    #[test]
    fn test_simple_problem_is_low_complexity() {
        let result = run("Write a function");
        assert_eq!(result.metadata.estimated_complexity, Complexity::Low);
    }

    #[test]
    fn test_large_system_is_high_complexity() {
        let problem = "
            Build a distributed microservices architecture with API gateway,
            service mesh, database sharding, caching layer, message queue,
            monitoring system, logging aggregation, CI/CD pipeline,
            authentication service, authorization service, user management,
            payment processing, email notifications, and admin dashboard
        ";
        let result = run(problem);
        assert!(matches!(
            result.metadata.estimated_complexity,
            Complexity::High | Complexity::VeryHigh
        ));
    }

    #[test]
    fn test_empty_input() {
        let result = run("");

        assert!(result.components.is_empty());
        assert!(result.critical_path.is_empty());
        assert!(result.parallelizable.is_empty());
        assert_eq!(result.metadata.total_components, 0);
        assert!(result.metadata.confidence.abs() < f64::EPSILON);
        let noise = result.metadata.noise_detected.expect("empty input is noisy");
        assert_eq!(noise.kind, NoiseKind::Epistemic);
    }

    #[test]
    fn test_sequential_work_forms_a_path() {
        let problem = "
            Setup development environment,
            then build the application,
            then test it,
            then deploy to production
        ";
        let result = run(problem);

        assert!(!result.critical_path.is_empty());
        for id in &result.critical_path {
            assert!(result.component(*id).is_some());
        }
    }

    #[test]
    fn test_independent_tasks_parallelize() {
        let result = run("Create API documentation, write unit tests, and design UI mockups");

        assert!(!result.parallelizable.is_empty());
        assert!(result.parallelizable.iter().all(|group| group.len() > 1));
    }
}

mod noise {
    use super::*;

    #[test]
    fn test_vague_short_problem_is_epistemic() {
        let result = run("Do something");
        assert_eq!(
            result.metadata.noise_detected.map(|n| n.kind),
            Some(NoiseKind::Epistemic)
        );
    }

    #[test]
    fn test_uncertain_language_is_aleatory() {
        let result = run("Maybe build a system that might need authentication possibly");
        assert_eq!(result.metadata.noise_detected.map(|n| n.kind), Some(NoiseKind::Aleatory));
        assert!(result.warnings.iter().any(|w| w.starts_with("Detected aleatory noise")));
    }

    #[test]
    fn test_clear_problem_has_no_noise() {
        let result = run("Build the billing API and deploy the worker service within 3 weeks");
        assert!(result.metadata.noise_detected.is_none());
    }
}

mod reasoning {
    use super::*;

    #[test]
    fn test_reasoning_is_traceable() {
        let result = run("Build and test application");

        assert!(!result.reasoning.steps.is_empty());
        assert!(!result.reasoning.decisions.is_empty());
        assert_eq!(result.reasoning.decisions[0].point, "Component generation");
    }

    #[test]
    fn test_warnings_are_per_run() {
        let noisy = run("Do it");
        let clear = run("Build the billing API and deploy the worker service within 3 weeks");

        assert!(!noisy.warnings.is_empty());
        assert!(clear.warnings.iter().all(|w| !w.contains("noise")));
    }

    #[test]
    fn test_runs_are_deterministic() {
        let text = "Integrate the D1 database, configure the cache and deploy the API in 10 days";
        let mut first = run(text);
        let mut second = run(text);

        // The timing step differs between runs
        first.reasoning.steps.pop();
        second.reasoning.steps.pop();
        assert_eq!(first, second);
    }

    #[test]
    fn test_json_round_trip() {
        let result = run("Build the billing API and deploy the worker service within 3 weeks");
        let json = result.to_json().unwrap();
        let back: DecompositionResult = serde_json::from_str(&json).unwrap();
        assert_eq!(back.components.len(), result.components.len());
        for (a, b) in back.components.iter().zip(&result.components) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.kind, b.kind);
            assert_eq!(a.description, b.description);
            assert_eq!(a.dependencies, b.dependencies);
            assert!((a.coupling.score - b.coupling.score).abs() < 1e-9);
        }
        assert_eq!(back.critical_path, result.critical_path);
        assert_eq!(back.parallelizable, result.parallelizable);
    }
}
