//! End-to-end integration tests for resolute-kit.

use resolute_core::is_satisfiable;
use resolute_kit::{
    evaluate, sample, CnfEnumerator, Literal, Outcome, PolicyKind, Prover, ProverConfig,
    RunReport, SearchConfig, XorShift64,
};
use std::time::Duration;

fn config(policy: PolicyKind) -> ProverConfig {
    ProverConfig {
        search: SearchConfig::with_timeout(Duration::from_secs(30)),
        policy,
        seed: 1,
    }
}

/// Every CNF over one atom agrees with the model checker under every policy.
#[test]
fn test_exhaustive_one_atom_soundness() {
    for premises in CnfEnumerator::new(1).unwrap() {
        let satisfiable = is_satisfiable(&premises);
        for kind in PolicyKind::ALL {
            let prover = Prover::from_premises(premises.clone(), config(kind));
            let result = prover.prove().unwrap();
            assert_eq!(
                result.outcome.as_bool(),
                Some(!satisfiable),
                "{premises} with {kind}"
            );
        }
    }
}

/// Sampled two-atom problems agree with the model checker.
#[test]
fn test_sampled_two_atom_soundness() {
    let mut rng = XorShift64::new(2024);
    for _ in 0..20 {
        let premises = sample(2, &mut rng).unwrap();
        let satisfiable = is_satisfiable(&premises);
        for kind in [PolicyKind::First, PolicyKind::Smallest, PolicyKind::Complementary] {
            let result = Prover::from_premises(premises.clone(), config(kind))
                .prove()
                .unwrap();
            assert_eq!(result.outcome.as_bool(), Some(!satisfiable), "{premises} with {kind}");
            if let Some(proof) = result.proof() {
                assert!(proof.verify());
            }
        }
    }
}

#[test]
fn test_three_way_disjunction() {
    let mut prover = Prover::with_config(config(PolicyKind::Smallest));
    prover.add_clause([Literal::positive("p"), Literal::positive("q"), Literal::positive("r")]);
    prover.add_clause([Literal::negative("p")]);
    prover.add_clause([Literal::negative("q")]);
    assert_eq!(prover.prove().unwrap().outcome, Outcome::Disproved);

    prover.add_clause([Literal::negative("r")]);
    assert_eq!(prover.prove().unwrap().outcome, Outcome::Proved);
}

#[test]
fn test_report_round_trip_through_json() {
    let mut prover = Prover::new();
    prover.add_clause([Literal::negative("p"), Literal::positive("q")]);
    prover.add_clause([Literal::positive("p")]);
    prover.add_clause([Literal::negative("q")]);
    let result = prover.prove().unwrap();

    let report = RunReport::new(prover.premises(), "first", &result)
        .with_proof(&result)
        .with_check(prover.check());
    assert!(report.is_sound());

    let json: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();
    assert_eq!(json["outcome"], "proved");
    assert_eq!(json["satisfiable"], false);
    assert!(json["proof"].as_array().is_some_and(|lines| lines.len() >= 5));
}

#[test]
fn test_evaluation_harness_is_consistent() {
    let report = evaluate(
        2,
        10,
        PolicyKind::Smallest,
        PolicyKind::First,
        &config(PolicyKind::First),
    )
    .unwrap();
    assert!(report.is_consistent());
    assert_eq!(report.disagreements, 0);
    assert_eq!(report.samples.len(), 10);
}
