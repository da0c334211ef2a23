// Equilog - Equivalence Prover for Propositional Logic
//
// Searches for minimum-length chains of named Boolean algebra rewrites
// connecting two propositional formulas.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// tests/common/mod.rs
// Truth-table oracle shared by the integration tests. The library itself
// contains no semantic decision procedure; this lives in the tests only.

#![allow(dead_code)]

use equilog::Expr;
use std::collections::HashMap;

/// Evaluate a formula under an assignment of its variables. Unassigned
/// variables read as false.
pub fn eval(expr: &Expr, assignment: &HashMap<String, bool>) -> bool {
    match expr {
        Expr::Var(name) => *assignment.get(name).unwrap_or(&false),
        Expr::Const(value) => *value,
        Expr::Not(operand) => !eval(operand, assignment),
        Expr::And(l, r) => eval(l, assignment) && eval(r, assignment),
        Expr::Or(l, r) => eval(l, assignment) || eval(r, assignment),
        Expr::Implies(l, r) => !eval(l, assignment) || eval(r, assignment),
        Expr::Iff(l, r) => eval(l, assignment) == eval(r, assignment),
    }
}

/// True when the two formulas agree on all 2^n assignments of the union of
/// their variables.
pub fn same_truth_table(a: &Expr, b: &Expr) -> bool {
    let mut names: Vec<String> = a.variables().into_iter().collect();
    for name in b.variables() {
        if !names.contains(&name) {
            names.push(name);
        }
    }

    for bits in 0..(1u32 << names.len()) {
        let assignment: HashMap<String, bool> = names
            .iter()
            .enumerate()
            .map(|(index, name)| (name.clone(), bits & (1 << index) != 0))
            .collect();
        if eval(a, &assignment) != eval(b, &assignment) {
            return false;
        }
    }

    true
}
