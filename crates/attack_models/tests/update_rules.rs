//! Integration tests for the update rules behind `ModelParams`.

use attack_models::models::StepGrid;
use attack_models::{ModelError, ModelKind, ModelParams};
use proptest::prelude::*;

fn run(params: &ModelParams, n_steps: usize, u: f64) -> f64 {
    let grid = StepGrid::new(n_steps);
    let mut state = params.initial_state();
    for _ in 0..n_steps {
        state = params.evolve_step(state, u, &grid);
    }
    params.observe(state, &grid)
}

#[test]
fn every_kind_has_a_params_variant() {
    let all = [
        ModelParams::bernoulli(0.5).unwrap(),
        ModelParams::random_walk(0.5, false).unwrap(),
        ModelParams::poisson(1.0).unwrap(),
        ModelParams::diffusion(0.5).unwrap(),
    ];
    let kinds: Vec<ModelKind> = all.iter().map(ModelParams::kind).collect();
    assert_eq!(kinds, ModelKind::ALL.to_vec());
}

#[test]
fn kind_names_parse_back() {
    for kind in ModelKind::ALL {
        assert_eq!(kind.name().parse::<ModelKind>().unwrap(), kind);
        assert_eq!(kind.to_string(), kind.name());
    }
    assert!("brownian".parse::<ModelKind>().is_err());
}

#[test]
fn draw_at_threshold_fails() {
    // u == p is not a success
    assert_eq!(run(&ModelParams::bernoulli(0.5).unwrap(), 3, 0.5), 0.0);
    assert_eq!(run(&ModelParams::random_walk(0.5, false).unwrap(), 3, 0.5), -3.0);
    // rate * dt = 0.25
    assert_eq!(run(&ModelParams::poisson(1.0).unwrap(), 4, 0.25), 0.0);
}

#[test]
fn parameter_errors() {
    assert!(matches!(
        ModelParams::bernoulli(1.01),
        Err(ModelError::ProbabilityOutOfRange { .. })
    ));
    assert!(matches!(
        ModelParams::diffusion(f64::NAN),
        Err(ModelError::NonFinite { .. })
    ));
    assert!(matches!(
        ModelParams::poisson(-0.1),
        Err(ModelError::NegativeRate(_))
    ));
}

#[cfg(feature = "serde")]
#[test]
fn json_record_deserialises() {
    let params: ModelParams = serde_json::from_str(
        r#"{ "model": "symmetric_random_walk", "success_probability": 0.25 }"#,
    )
    .unwrap();
    assert_eq!(params, ModelParams::random_walk(0.25, false).unwrap());
}

proptest! {
    #[test]
    fn prop_certain_success_counts_steps(n_steps in 1usize..500) {
        let n = n_steps as f64;
        prop_assert_eq!(run(&ModelParams::bernoulli(1.0).unwrap(), n_steps, 0.0), n);
        prop_assert_eq!(run(&ModelParams::random_walk(1.0, false).unwrap(), n_steps, 0.0), n);
        prop_assert_eq!(run(&ModelParams::random_walk(1.0, true).unwrap(), n_steps, 0.0), 1.0);
    }

    #[test]
    fn prop_diffusion_reaches_sqrt_n(n_steps in 1usize..500) {
        let top = run(&ModelParams::diffusion(1.0).unwrap(), n_steps, 0.0);
        prop_assert!((top - (n_steps as f64).sqrt()).abs() < 1e-9);
    }
}
