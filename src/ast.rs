// Equilog - Equivalence Prover for Propositional Logic
//
// Searches for minimum-length chains of named Boolean algebra rewrites
// connecting two propositional formulas.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/ast.rs
// Core AST for propositional formulas

use std::collections::BTreeSet;

// ============================================================================
// Core Types
// ============================================================================

/// A propositional formula.
///
/// Variables are non-empty identifiers (`[A-Za-z_][A-Za-z0-9_]*`); the
/// single-letter names `T` and `F` are reserved for the constants and never
/// appear as `Var`. Trees are finite, acyclic, and immutable once built;
/// every rewrite produces a fresh tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    Var(String),
    Const(bool),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Implies(Box<Expr>, Box<Expr>),
    Iff(Box<Expr>, Box<Expr>),
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl Expr {
    pub fn var(name: impl Into<String>) -> Self {
        Expr::Var(name.into())
    }

    pub fn truth(value: bool) -> Self {
        Expr::Const(value)
    }

    pub fn not(operand: Expr) -> Self {
        Expr::Not(Box::new(operand))
    }

    pub fn and(left: Expr, right: Expr) -> Self {
        Expr::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Expr, right: Expr) -> Self {
        Expr::Or(Box::new(left), Box::new(right))
    }

    pub fn implies(left: Expr, right: Expr) -> Self {
        Expr::Implies(Box::new(left), Box::new(right))
    }

    pub fn iff(left: Expr, right: Expr) -> Self {
        Expr::Iff(Box::new(left), Box::new(right))
    }
}

// ============================================================================
// Helper Methods
// ============================================================================

impl Expr {
    pub fn is_const_true(&self) -> bool {
        matches!(self, Expr::Const(true))
    }

    pub fn is_const_false(&self) -> bool {
        matches!(self, Expr::Const(false))
    }

    pub fn is_negation(&self) -> bool {
        matches!(self, Expr::Not(_))
    }

    /// The set of variable names occurring in the formula.
    pub fn variables(&self) -> BTreeSet<String> {
        let mut vars = BTreeSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    fn collect_variables(&self, vars: &mut BTreeSet<String>) {
        match self {
            Expr::Var(name) => {
                vars.insert(name.clone());
            }
            Expr::Const(_) => {}
            Expr::Not(operand) => operand.collect_variables(vars),
            Expr::And(l, r)
            | Expr::Or(l, r)
            | Expr::Implies(l, r)
            | Expr::Iff(l, r) => {
                l.collect_variables(vars);
                r.collect_variables(vars);
            }
        }
    }

    /// Equality up to commuting the children of And/Or.
    ///
    /// Two formulas are `equiv` iff their roots agree and their children are
    /// pairwise `equiv`, except that at an And or Or root the children may
    /// additionally match after swapping. This is not recursive commutative
    /// closure: each matching commutative root tolerates a single swap.
    ///
    /// This is the engine's notion of "same expression"; the derived
    /// `PartialEq` stays strictly structural.
    pub fn equiv(&self, other: &Expr) -> bool {
        match (self, other) {
            (Expr::Var(a), Expr::Var(b)) => a == b,
            (Expr::Const(a), Expr::Const(b)) => a == b,
            (Expr::Not(a), Expr::Not(b)) => a.equiv(b),
            (Expr::And(al, ar), Expr::And(bl, br))
            | (Expr::Or(al, ar), Expr::Or(bl, br)) => {
                (al.equiv(bl) && ar.equiv(br)) || (al.equiv(br) && ar.equiv(bl))
            }
            (Expr::Implies(al, ar), Expr::Implies(bl, br))
            | (Expr::Iff(al, ar), Expr::Iff(bl, br)) => al.equiv(bl) && ar.equiv(br),
            _ => false,
        }
    }
}
