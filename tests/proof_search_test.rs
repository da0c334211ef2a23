// Equilog - Equivalence Prover for Propositional Logic
//
// Searches for minimum-length chains of named Boolean algebra rewrites
// connecting two propositional formulas.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// tests/proof_search_test.rs
// End-to-end proof search: the concrete scenarios, reflexivity, BFS
// optimality, determinism, and step-by-step soundness

use equilog::{parse, EquivalenceEngine, Expr, LogicLaw, ProofSearch};

fn must_parse(text: &str) -> Expr {
    parse(text).unwrap()
}

#[test]
fn test_double_negation_proof() {
    let mut searcher = ProofSearch::new();
    let proof = searcher.find_proof(&must_parse("!!p"), &must_parse("p"));

    assert!(proof.found_target);
    assert_eq!(proof.total_steps, 1);
    assert_eq!(proof.steps[0].law, LogicLaw::DoubleNegation);
    assert_eq!(proof.steps[0].expression, must_parse("p"));
}

#[test]
fn test_de_morgan_proof() {
    let mut searcher = ProofSearch::new();
    let proof = searcher.find_proof(&must_parse("!(p & q)"), &must_parse("!p | !q"));

    assert!(proof.found_target);
    assert_eq!(proof.total_steps, 1);
    assert_eq!(proof.steps[0].law, LogicLaw::DeMorganAnd);
}

#[test]
fn test_implication_elimination_proof() {
    let mut searcher = ProofSearch::new();
    let proof = searcher.find_proof(&must_parse("p -> q"), &must_parse("!p | q"));

    assert!(proof.found_target);
    assert_eq!(proof.total_steps, 1);
    assert_eq!(proof.steps[0].law, LogicLaw::ImplicationElimination);
}

#[test]
fn test_biconditional_elimination_proof() {
    let mut searcher = ProofSearch::new();
    let proof = searcher.find_proof(
        &must_parse("p <-> q"),
        &must_parse("(p -> q) & (q -> p)"),
    );

    assert!(proof.found_target);
    assert_eq!(proof.total_steps, 1);
    assert_eq!(proof.steps[0].law, LogicLaw::BiconditionalElimination);
}

#[test]
fn test_nested_double_negation_in_antecedent() {
    let mut searcher = ProofSearch::new();
    let proof = searcher.find_proof(
        &must_parse("!!(p & q) -> r"),
        &must_parse("(p & q) -> r"),
    );

    assert!(proof.found_target);
    assert!(proof.total_steps >= 1);
    assert!(proof
        .steps
        .iter()
        .any(|step| step.law == LogicLaw::DoubleNegation));
}

#[test]
fn test_inequivalent_formulas_find_no_proof() {
    let mut searcher = ProofSearch::new();
    let proof = searcher.find_proof(&must_parse("p & q"), &must_parse("p | q"));

    assert!(!proof.found_target);
    assert!(proof.steps.is_empty());
    assert_eq!(proof.total_steps, 0);
}

#[test]
fn test_reflexivity() {
    let mut searcher = ProofSearch::new();
    let expr = must_parse("(p & q) -> !r");
    let proof = searcher.find_proof(&expr, &expr);

    assert!(proof.found_target);
    assert_eq!(proof.total_steps, 0);
}

#[test]
fn test_commuted_target_counts_as_reached() {
    // The target test uses commutative-tolerant equality, so no rewrite is
    // needed to match a swapped conjunction.
    let mut searcher = ProofSearch::new();
    let proof = searcher.find_proof(&must_parse("p & q"), &must_parse("q & p"));

    assert!(proof.found_target);
    assert_eq!(proof.total_steps, 0);
}

#[test]
fn test_multi_step_proof_is_justified_step_by_step() {
    let mut searcher = ProofSearch::new();
    let start = must_parse("!!p & T");
    let target = must_parse("p");
    let proof = searcher.find_proof(&start, &target);

    assert!(proof.found_target);
    assert_eq!(proof.total_steps, 2);

    // Replaying each step's law on its predecessor must reproduce the
    // step's expression.
    let engine = EquivalenceEngine::new();
    let mut current = start;
    for step in &proof.steps {
        let reachable = engine.apply_law_recursively(&current, step.law);
        assert!(
            reachable.iter().any(|t| t.result.equiv(&step.expression)),
            "step {} ({}) is not justified from {}",
            step.step_number,
            step.law.name(),
            current
        );
        current = step.expression.clone();
    }
    assert!(current.equiv(&target));
}

#[test]
fn test_step_numbers_run_from_one() {
    let mut searcher = ProofSearch::new();
    let proof = searcher.find_proof(&must_parse("!!p & T"), &must_parse("p"));

    assert!(proof.found_target);
    for (index, step) in proof.steps.iter().enumerate() {
        assert_eq!(step.step_number, index + 1);
    }
}

#[test]
fn test_bfs_optimality_depth_cap() {
    // The one-step proof disappears when the depth bound drops below one.
    let mut searcher = ProofSearch::new();
    let start = must_parse("p -> q");
    let target = must_parse("!p | q");

    let proof = searcher.find_proof(&start, &target);
    assert!(proof.found_target);
    assert_eq!(proof.total_steps, 1);

    searcher.set_max_depth(0);
    let capped = searcher.find_proof(&start, &target);
    assert!(!capped.found_target);
}

#[test]
fn test_transformation_limit_halts_the_search() {
    let mut searcher = ProofSearch::new();
    searcher.set_max_transformations(1);
    let proof = searcher.find_proof(&must_parse("p -> q"), &must_parse("!p | q"));

    assert!(!proof.found_target);
}

#[test]
fn test_repeated_searches_give_identical_proofs() {
    let start = must_parse("!(p & q) -> r");
    let target = must_parse("!!(p & q) | r");

    let mut searcher = ProofSearch::new();
    let first = searcher.find_proof(&start, &target);
    let second = searcher.find_proof(&start, &target);
    assert_eq!(first, second);

    // A fresh search instance agrees too
    let third = ProofSearch::new().find_proof(&start, &target);
    assert_eq!(first, third);
}

#[test]
fn test_generate_equivalent_forms_starts_with_the_source() {
    let mut searcher = ProofSearch::new();
    let expr = must_parse("!(p & q)");
    let forms = searcher.generate_equivalent_forms(&expr, 3);

    assert_eq!(forms.first(), Some(&expr));
    assert!(forms.contains(&must_parse("!p | !q")));
}

#[test]
fn test_generate_equivalent_forms_respects_the_depth_bound() {
    let mut searcher = ProofSearch::new();
    let expr = must_parse("p & (q | r)");
    let forms = searcher.generate_equivalent_forms(&expr, 0);

    assert_eq!(forms, vec![expr]);
}

#[test]
fn test_generate_equivalent_forms_is_capped_at_fifty() {
    let mut searcher = ProofSearch::new();
    let expr = must_parse("(p <-> q) & (r <-> s)");
    let forms = searcher.generate_equivalent_forms(&expr, 5);

    assert!(forms.len() <= 50);
}

#[test]
fn test_generate_equivalent_forms_has_no_duplicates() {
    let mut searcher = ProofSearch::new();
    let forms = searcher.generate_equivalent_forms(&must_parse("!(p & q)"), 2);

    let mut printed: Vec<String> = forms.iter().map(|form| form.to_string()).collect();
    printed.sort();
    let before = printed.len();
    printed.dedup();
    assert_eq!(printed.len(), before);
}
