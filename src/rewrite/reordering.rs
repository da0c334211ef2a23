// Equilog - Equivalence Prover for Propositional Logic
//
// Searches for minimum-length chains of named Boolean algebra rewrites
// connecting two propositional formulas.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/rewrite/reordering.rs
// Commutative and associative rules

use crate::ast::Expr;

/// x & y → y & x
pub fn apply_commutative_and(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::And(l, r) => Some(Expr::and((**r).clone(), (**l).clone())),
        _ => None,
    }
}

/// x | y → y | x
pub fn apply_commutative_or(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::Or(l, r) => Some(Expr::or((**r).clone(), (**l).clone())),
        _ => None,
    }
}

/// (x & y) & z → x & (y & z); x & (y & z) → (x & y) & z
pub fn apply_associative_and(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::And(l, r) => {
            if let Expr::And(x, y) = l.as_ref() {
                return Some(Expr::and(
                    (**x).clone(),
                    Expr::and((**y).clone(), (**r).clone()),
                ));
            }
            if let Expr::And(y, z) = r.as_ref() {
                return Some(Expr::and(
                    Expr::and((**l).clone(), (**y).clone()),
                    (**z).clone(),
                ));
            }
            None
        }
        _ => None,
    }
}

/// (x | y) | z → x | (y | z); x | (y | z) → (x | y) | z
pub fn apply_associative_or(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::Or(l, r) => {
            if let Expr::Or(x, y) = l.as_ref() {
                return Some(Expr::or(
                    (**x).clone(),
                    Expr::or((**y).clone(), (**r).clone()),
                ));
            }
            if let Expr::Or(y, z) = r.as_ref() {
                return Some(Expr::or(
                    Expr::or((**l).clone(), (**y).clone()),
                    (**z).clone(),
                ));
            }
            None
        }
        _ => None,
    }
}
