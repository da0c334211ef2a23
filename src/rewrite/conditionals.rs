// Equilog - Equivalence Prover for Propositional Logic
//
// Searches for minimum-length chains of named Boolean algebra rewrites
// connecting two propositional formulas.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/rewrite/conditionals.rs
// Elimination rules for implication and biconditional

use crate::ast::Expr;

/// x -> y → !x | y
pub fn apply_implication_elimination(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::Implies(l, r) => Some(Expr::or(Expr::not((**l).clone()), (**r).clone())),
        _ => None,
    }
}

/// x <-> y → (x -> y) & (y -> x)
pub fn apply_biconditional_elimination(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::Iff(l, r) => Some(Expr::and(
            Expr::implies((**l).clone(), (**r).clone()),
            Expr::implies((**r).clone(), (**l).clone()),
        )),
        _ => None,
    }
}
