// Equilog - Equivalence Prover for Propositional Logic
//
// Searches for minimum-length chains of named Boolean algebra rewrites
// connecting two propositional formulas.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/rewrite/simplification.rs
// Identity, annihilation, complement, and idempotent rules

use crate::ast::Expr;

/// T & x → x; x & T → x
pub fn apply_identity_and(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::And(l, r) => {
            if l.is_const_true() {
                return Some((**r).clone());
            }
            if r.is_const_true() {
                return Some((**l).clone());
            }
            None
        }
        _ => None,
    }
}

/// F | x → x; x | F → x
pub fn apply_identity_or(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::Or(l, r) => {
            if l.is_const_false() {
                return Some((**r).clone());
            }
            if r.is_const_false() {
                return Some((**l).clone());
            }
            None
        }
        _ => None,
    }
}

/// F & x → F; x & F → F
pub fn apply_annihilation_and(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::And(l, r) if l.is_const_false() || r.is_const_false() => Some(Expr::Const(false)),
        _ => None,
    }
}

/// T | x → T; x | T → T
pub fn apply_annihilation_or(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::Or(l, r) if l.is_const_true() || r.is_const_true() => Some(Expr::Const(true)),
        _ => None,
    }
}

/// x & !x → F; !x & x → F
pub fn apply_complement_and(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::And(l, r) => {
            if let Expr::Not(inner) = l.as_ref() {
                if inner.equiv(r) {
                    return Some(Expr::Const(false));
                }
            }
            if let Expr::Not(inner) = r.as_ref() {
                if inner.equiv(l) {
                    return Some(Expr::Const(false));
                }
            }
            None
        }
        _ => None,
    }
}

/// x | !x → T; !x | x → T
pub fn apply_complement_or(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::Or(l, r) => {
            if let Expr::Not(inner) = l.as_ref() {
                if inner.equiv(r) {
                    return Some(Expr::Const(true));
                }
            }
            if let Expr::Not(inner) = r.as_ref() {
                if inner.equiv(l) {
                    return Some(Expr::Const(true));
                }
            }
            None
        }
        _ => None,
    }
}

/// x & x → x
pub fn apply_idempotent_and(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::And(l, r) if l.equiv(r) => Some((**l).clone()),
        _ => None,
    }
}

/// x | x → x
pub fn apply_idempotent_or(expr: &Expr) -> Option<Expr> {
    match expr {
        Expr::Or(l, r) if l.equiv(r) => Some((**l).clone()),
        _ => None,
    }
}
