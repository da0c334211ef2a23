// Equilog - Equivalence Prover for Propositional Logic
//
// Searches for minimum-length chains of named Boolean algebra rewrites
// connecting two propositional formulas.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/rewrite/distribution.rs
// Distributive and absorption rules

use crate::ast::Expr;

// Where a pattern matches in both orientations, the orientation listed first
// in the law wins; COMMUTATIVE exposes the other one.

/// x & (y | z) → (x & y) | (x & z); (y | z) & x → (y & x) | (z & x)
pub fn apply_distributive_and_over_or(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::And(l, r) => {
            if let Expr::Or(y, z) = r.as_ref() {
                return Some(Expr::or(
                    Expr::and((**l).clone(), (**y).clone()),
                    Expr::and((**l).clone(), (**z).clone()),
                ));
            }
            if let Expr::Or(y, z) = l.as_ref() {
                return Some(Expr::or(
                    Expr::and((**y).clone(), (**r).clone()),
                    Expr::and((**z).clone(), (**r).clone()),
                ));
            }
            None
        }
        _ => None,
    }
}

/// x | (y & z) → (x | y) & (x | z); (y & z) | x → (y | x) & (z | x)
pub fn apply_distributive_or_over_and(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::Or(l, r) => {
            if let Expr::And(y, z) = r.as_ref() {
                return Some(Expr::and(
                    Expr::or((**l).clone(), (**y).clone()),
                    Expr::or((**l).clone(), (**z).clone()),
                ));
            }
            if let Expr::And(y, z) = l.as_ref() {
                return Some(Expr::and(
                    Expr::or((**y).clone(), (**r).clone()),
                    Expr::or((**z).clone(), (**r).clone()),
                ));
            }
            None
        }
        _ => None,
    }
}

/// x & (x | y) → x, in either orientation of either connective
pub fn apply_absorption_and(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::And(l, r) => {
            if let Expr::Or(a, b) = r.as_ref() {
                if l.equiv(a) || l.equiv(b) {
                    return Some((**l).clone());
                }
            }
            if let Expr::Or(a, b) = l.as_ref() {
                if r.equiv(a) || r.equiv(b) {
                    return Some((**r).clone());
                }
            }
            None
        }
        _ => None,
    }
}

/// x | (x & y) → x, in either orientation of either connective
pub fn apply_absorption_or(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::Or(l, r) => {
            if let Expr::And(a, b) = r.as_ref() {
                if l.equiv(a) || l.equiv(b) {
                    return Some((**l).clone());
                }
            }
            if let Expr::And(a, b) = l.as_ref() {
                if r.equiv(a) || r.equiv(b) {
                    return Some((**r).clone());
                }
            }
            None
        }
        _ => None,
    }
}
