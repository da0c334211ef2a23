// Equilog - Equivalence Prover for Propositional Logic
//
// Searches for minimum-length chains of named Boolean algebra rewrites
// connecting two propositional formulas.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/rewrite/negation.rs
// Negation rules: double negation, De Morgan

use crate::ast::Expr;

/// !!x → x
pub fn apply_double_negation(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::Not(operand) => match operand.as_ref() {
            Expr::Not(inner) => Some((**inner).clone()),
            _ => None,
        },
        _ => None,
    }
}

/// !(x & y) → !x | !y
pub fn apply_de_morgan_and(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::Not(operand) => match operand.as_ref() {
            Expr::And(l, r) => Some(Expr::or(
                Expr::not((**l).clone()),
                Expr::not((**r).clone()),
            )),
            _ => None,
        },
        _ => None,
    }
}

/// !(x | y) → !x & !y
pub fn apply_de_morgan_or(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::Not(operand) => match operand.as_ref() {
            Expr::Or(l, r) => Some(Expr::and(
                Expr::not((**l).clone()),
                Expr::not((**r).clone()),
            )),
            _ => None,
        },
        _ => None,
    }
}
