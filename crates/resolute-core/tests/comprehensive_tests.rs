//! Comprehensive tests for resolute-core.

use resolute_base::{Clause, Error, Literal, PremiseSet};
use resolute_core::{
    is_satisfiable, resolve, run, ComplementaryRank, FirstPair, History, Outcome, PolicyKind,
    RandomPair, SearchConfig, SelectionPolicy, SmallestPair, StateView, StopReason,
};
use std::time::Duration;

fn lit(s: &str) -> Literal {
    match s.strip_prefix('~') {
        Some(atom) => Literal::negative(atom),
        None => Literal::positive(s),
    }
}

fn clause(lits: &[&str]) -> Clause {
    lits.iter().map(|s| lit(s)).collect()
}

fn cnf(clauses: &[&[&str]]) -> PremiseSet {
    clauses.iter().map(|c| clause(c)).collect()
}

fn solve(premises: &PremiseSet, policy: &mut dyn SelectionPolicy) -> Outcome {
    run(premises, policy, &SearchConfig::with_timeout(Duration::from_secs(10)))
        .unwrap()
        .outcome
}

// =============================================================================
// Literal & Clause Tests
// =============================================================================

#[test]
fn test_negation_involution() {
    for l in [lit("p"), lit("~p"), lit("x7")] {
        assert_eq!(!!l.clone(), l);
        assert!(l.is_complementary(&!l.clone()));
    }
}

#[test]
fn test_clause_set_semantics() {
    assert_eq!(clause(&["p", "q"]), clause(&["q", "p", "q"]));
    assert_eq!(clause(&["p", "q"]).len(), 2);
    assert!(clause(&[]).is_empty());
}

// =============================================================================
// Resolution Rule Tests
// =============================================================================

#[test]
fn test_resolvent_correctness() {
    let p = clause(&["a", "~b", "c"]);
    let q = clause(&["b", "~c", "d"]);
    let resolvents: Vec<Clause> = resolve(&p, &q).collect();
    assert_eq!(resolvents.len(), 2);
    for r in &resolvents {
        let on_b = p.without(&lit("~b")).union(&q.without(&lit("b")));
        let on_c = p.without(&lit("c")).union(&q.without(&lit("~c")));
        assert!(*r == on_b || *r == on_c);
    }
}

#[test]
fn test_units_resolve_to_bottom() {
    let r: Vec<Clause> = resolve(&clause(&["p"]), &clause(&["~p"])).collect();
    assert_eq!(r, vec![Clause::empty()]);
}

// =============================================================================
// Search Outcome Tests
// =============================================================================

#[test]
fn test_complementary_units_prove_in_one_step() {
    let result = run(&cnf(&[&["p"], &["~p"]]), &mut FirstPair, &SearchConfig::default()).unwrap();
    assert_eq!(result.outcome, Outcome::Proved);
    assert_eq!(result.history.len(), 2);
}

#[test]
fn test_unrelated_units_disprove_immediately() {
    let result = run(&cnf(&[&["p"], &["q"]]), &mut FirstPair, &SearchConfig::default()).unwrap();
    assert_eq!(result.outcome, Outcome::Disproved);
    assert_eq!(result.stats.steps, 1);
    assert_eq!(result.final_state().clauses().len(), 2);
}

#[test]
fn test_three_way_disjunction() {
    let refuted = cnf(&[&["p", "q", "r"], &["~p"], &["~q"], &["~r"]]);
    let open = cnf(&[&["p", "q", "r"], &["~p"], &["~q"]]);
    for kind in PolicyKind::ALL {
        assert_eq!(solve(&refuted, kind.build(3).as_mut()), Outcome::Proved, "{kind}");
        assert_eq!(solve(&open, kind.build(3).as_mut()), Outcome::Disproved, "{kind}");
    }
}

#[test]
fn test_modus_ponens() {
    let premises = cnf(&[&["~p", "q"], &["p"], &["~q"]]);
    let result = run(&premises, &mut SmallestPair, &SearchConfig::default()).unwrap();
    assert_eq!(result.outcome, Outcome::Proved);
    let proof = result.proof().unwrap();
    assert!(proof.verify());
}

#[test]
fn test_tautologies_are_processed() {
    let premises = cnf(&[&["p", "~p"], &["q"]]);
    assert_eq!(solve(&premises, &mut FirstPair), Outcome::Disproved);
    let premises = cnf(&[&["p", "~p"], &["q"], &["~q"]]);
    assert_eq!(solve(&premises, &mut FirstPair), Outcome::Proved);
}

#[test]
fn test_proved_is_policy_independent() {
    let premises = cnf(&[
        &["a", "b"],
        &["~a", "b"],
        &["a", "~b"],
        &["~a", "~b"],
    ]);
    assert_eq!(solve(&premises, &mut FirstPair), Outcome::Proved);
    assert_eq!(solve(&premises, &mut SmallestPair), Outcome::Proved);
    assert_eq!(solve(&premises, &mut ComplementaryRank), Outcome::Proved);
    assert_eq!(solve(&premises, &mut RandomPair::new(11)), Outcome::Proved);
}

#[test]
fn test_refutation_agrees_with_model_checker() {
    let problems = [
        cnf(&[&["a", "b"], &["~a"], &["~b"]]),
        cnf(&[&["a", "b"], &["~a", "c"], &["~b", "c"], &["~c"]]),
        cnf(&[&["a", "b"], &["~a", "c"], &["~b", "c"]]),
        cnf(&[&["a", "~b"], &["b", "~c"], &["c", "~a"]]),
        cnf(&[&["a"], &["~a", "b"], &["~b", "c"], &["~c", "~a"]]),
    ];
    for premises in &problems {
        let expected = !is_satisfiable(premises);
        for kind in PolicyKind::ALL {
            let outcome = solve(premises, kind.build(5).as_mut());
            assert_eq!(outcome.as_bool(), Some(expected), "{premises} with {kind}");
        }
    }
}

// =============================================================================
// State Transition Tests
// =============================================================================

#[test]
fn test_monotonic_growth() {
    let mut history = History::new(&cnf(&[&["p", "q"], &["~p", "r"], &["~q"], &["~r"]]));
    while !history.current_state().pairs().is_empty()
        && !history.current_state().has_contradiction()
    {
        let before = history.current_state().clauses().clone();
        history.step(0).unwrap();
        let after = history.current_state();
        assert!(before.iter().all(|c| after.contains(c)));
        assert!(after.clauses().len() >= before.len());
    }
    assert!(history.current_state().has_contradiction());
}

#[test]
fn test_rediscovery_is_idempotent() {
    // both pairs resolve to q
    let premises = cnf(&[&["p", "q"], &["~p", "q"], &["r", "q"], &["~r", "q"]]);
    let mut history = History::new(&premises);
    let pairs = history.current_state().pairs().clone();
    let first = pairs.iter().position(|p| p.complementary_count() == 1).unwrap();
    history.step(first).unwrap();
    let clauses_after_first = history.current_state().clauses().len();
    let pairs_after_first = history.current_state().pairs().len();

    let q = clause(&["q"]);
    let second = history
        .current_state()
        .pairs()
        .iter()
        .position(|p| p.complementary_count() == 1 && !p.left.contains(&lit("p")))
        .unwrap();
    history.step(second).unwrap();

    let state = history.current_state();
    assert_eq!(state.clauses().len(), clauses_after_first);
    assert_eq!(state.pairs().len(), pairs_after_first - 1);
    assert_eq!(state.derivations(&q).map(|d| d.len()), Some(2));
    assert_eq!(state.last_step().rediscovered, 1);
}

#[test]
fn test_out_of_range_index_is_fatal() {
    fn too_far(view: &StateView<'_>) -> usize {
        view.pairs().len() + 3
    }
    let mut policy = too_far;
    let err = run(&cnf(&[&["p"], &["q"]]), &mut policy, &SearchConfig::default()).unwrap_err();
    assert!(matches!(err, Error::SelectionOutOfRange { index: 4, len: 1 }));
}

#[test]
fn test_policy_sees_parent_chain() {
    fn deepest_first(view: &StateView<'_>) -> usize {
        assert_eq!(view.ancestors().count(), view.step_count() + 1);
        if let Some(parent) = view.parent() {
            assert_eq!(parent.step_count() + 1, view.step_count());
            assert!(view.consumed_pair().is_some());
        }
        view.pairs().len() - 1
    }
    let mut policy = deepest_first;
    let premises = cnf(&[&["p", "q"], &["~p", "q"], &["p", "~q"], &["~p", "~q"]]);
    let result = run(&premises, &mut policy, &SearchConfig::default()).unwrap();
    assert_eq!(result.outcome, Outcome::Proved);
    assert_eq!(result.history.pair_history().len(), result.stats.steps);
}

#[test]
fn test_timeout_fires_mid_search() {
    fn slow_first(_view: &StateView<'_>) -> usize {
        std::thread::sleep(Duration::from_millis(100));
        0
    }
    let premises = cnf(&[&["p", "q"], &["~p", "q"], &["p", "~q"], &["~p", "~q"]]);
    let mut policy = slow_first;
    let config = SearchConfig::with_timeout(Duration::from_millis(50));
    let result = run(&premises, &mut policy, &config).unwrap();

    assert_eq!(result.outcome, Outcome::Unknown);
    assert_eq!(result.reason, StopReason::Timeout);
    assert_eq!(result.stats.steps, 1);
    assert!(result.stats.policy_time >= Duration::from_millis(100));
    assert!(!result.final_state().has_contradiction());
}

#[test]
fn test_step_limit() {
    let premises = cnf(&[&["p", "q"], &["~p", "q"], &["p", "~q"], &["~p", "~q"]]);
    let config = SearchConfig::default().max_steps(0);
    let result = run(&premises, &mut FirstPair, &config).unwrap();
    assert_eq!(result.outcome, Outcome::Unknown);
    assert_eq!(result.reason, StopReason::StepLimit);
    assert_eq!(result.history.len(), 1);
}
