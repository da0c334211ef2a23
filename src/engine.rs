// Equilog - Equivalence Prover for Propositional Logic
//
// Searches for minimum-length chains of named Boolean algebra rewrites
// connecting two propositional formulas.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/engine.rs
// Contextual rewriter: every law at every position

use crate::ast::Expr;
use crate::rewrite::{self, LogicLaw};

/// One rewrite of a whole expression: the law used, a human-readable
/// description of where it fired, and the rewritten tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Transformation {
    pub law: LogicLaw,
    pub description: String,
    pub result: Expr,
}

/// Enumerates the expressions reachable from a formula by applying exactly
/// one rule at exactly one position in the tree.
#[derive(Debug, Clone, Copy, Default)]
pub struct EquivalenceEngine;

impl EquivalenceEngine {
    pub fn new() -> Self {
        EquivalenceEngine
    }

    /// Every single-step rewrite of `expr`, one law at a time in catalogue
    /// order, root-first within each law. Output may contain duplicates
    /// (two (law, position) pairs can yield the same tree); deduplication is
    /// the caller's responsibility.
    pub fn generate_all_transformations(&self, expr: &Expr) -> Vec<Transformation> {
        let mut transformations = Vec::new();
        for law in LogicLaw::ALL {
            transformations.extend(self.apply_law_recursively(expr, law));
        }
        transformations
    }

    /// Applications of one law at the root of `expr` and at every nested
    /// position, each wrapped back into the surrounding tree.
    pub fn apply_law_recursively(&self, expr: &Expr, law: LogicLaw) -> Vec<Transformation> {
        let mut transformations = Vec::new();

        if let Some(result) = rewrite::apply(law, expr) {
            transformations.push(Transformation {
                law,
                description: law.name().to_string(),
                result,
            });
        }

        transformations.extend(self.apply_law_to_subexpressions(expr, law));
        transformations
    }

    /// Structural equality with commutative adjustment at And/Or. This is a
    /// syntactic check, not a proof search.
    pub fn are_equivalent(&self, a: &Expr, b: &Expr) -> bool {
        a.equiv(b)
    }

    fn apply_law_to_subexpressions(&self, expr: &Expr, law: LogicLaw) -> Vec<Transformation> {
        match expr {
            Expr::Var(_) | Expr::Const(_) => Vec::new(),
            Expr::Not(operand) => self
                .apply_law_recursively(operand, law)
                .into_iter()
                .map(|t| Transformation {
                    law: t.law,
                    description: t.description,
                    result: Expr::not(t.result),
                })
                .collect(),
            Expr::And(l, r) => self.rewrite_children(l, r, law, Expr::and),
            Expr::Or(l, r) => self.rewrite_children(l, r, law, Expr::or),
            Expr::Implies(l, r) => self.rewrite_children(l, r, law, Expr::implies),
            Expr::Iff(l, r) => self.rewrite_children(l, r, law, Expr::iff),
        }
    }

    // Both child lists are collected by value before the combined pass, so
    // the cross-product pairs every left rewrite with every right rewrite.
    fn rewrite_children(
        &self,
        left: &Expr,
        right: &Expr,
        law: LogicLaw,
        rebuild: fn(Expr, Expr) -> Expr,
    ) -> Vec<Transformation> {
        let left_transformations = self.apply_law_recursively(left, law);
        let right_transformations = self.apply_law_recursively(right, law);
        let mut transformations = Vec::new();

        for t in &left_transformations {
            transformations.push(Transformation {
                law: t.law,
                description: t.description.clone(),
                result: rebuild(t.result.clone(), right.clone()),
            });
        }

        for t in &right_transformations {
            transformations.push(Transformation {
                law: t.law,
                description: t.description.clone(),
                result: rebuild(left.clone(), t.result.clone()),
            });
        }

        // Parallel rewrite at two sibling positions, one search edge.
        for lt in &left_transformations {
            for rt in &right_transformations {
                transformations.push(Transformation {
                    law: lt.law,
                    description: format!("{} and {}", lt.description, rt.description),
                    result: rebuild(lt.result.clone(), rt.result.clone()),
                });
            }
        }

        transformations
    }
}
