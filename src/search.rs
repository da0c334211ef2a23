// Equilog - Equivalence Prover for Propositional Logic
//
// Searches for minimum-length chains of named Boolean algebra rewrites
// connecting two propositional formulas.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/search.rs
// Breadth-first proof search over the rewrite graph

use std::collections::{HashSet, VecDeque};

use log::debug;

use crate::ast::Expr;
use crate::engine::EquivalenceEngine;
use crate::proof::{Proof, ProofStep};
use crate::rewrite::LogicLaw;

pub const DEFAULT_MAX_DEPTH: usize = 10;
pub const DEFAULT_MAX_TRANSFORMATIONS: usize = 10_000;

// Printed forms longer than this are runaway distributive/associative
// expansions; expanding them further never yields a short proof.
const PRINTED_LENGTH_LIMIT: usize = 200;
const EQUIVALENT_FORMS_LIMIT: usize = 50;

struct SearchNode {
    expression: Expr,
    depth: usize,
    path: Vec<ProofStep>,
}

/// Breadth-first search for a law-justified rewrite chain.
///
/// Every rewrite is one edge and nodes are dequeued in non-decreasing depth
/// order, so the first path to reach the target has the minimum number of
/// rule applications. Ties within a depth are broken by the engine's
/// deterministic enumeration order; equal inputs give byte-identical proofs.
pub struct ProofSearch {
    engine: EquivalenceEngine,
    visited: HashSet<String>,
    max_depth: usize,
    max_transformations: usize,
}

impl Default for ProofSearch {
    fn default() -> Self {
        Self::new()
    }
}

impl ProofSearch {
    pub fn new() -> Self {
        Self::with_limits(DEFAULT_MAX_DEPTH, DEFAULT_MAX_TRANSFORMATIONS)
    }

    pub fn with_limits(max_depth: usize, max_transformations: usize) -> Self {
        ProofSearch {
            engine: EquivalenceEngine::new(),
            visited: HashSet::new(),
            max_depth,
            max_transformations,
        }
    }

    pub fn set_max_depth(&mut self, depth: usize) {
        self.max_depth = depth;
    }

    pub fn set_max_transformations(&mut self, transformations: usize) {
        self.max_transformations = transformations;
    }

    /// Search for a minimum-length rewrite chain from `start` to `target`.
    ///
    /// Returns an unfound proof when the queue empties or the exploration
    /// counter exceeds the transformation limit; the two cases are not
    /// distinguished externally. `find_proof(e, e)` succeeds with zero steps.
    pub fn find_proof(&mut self, start: &Expr, target: &Expr) -> Proof {
        self.visited.clear();

        let mut queue = VecDeque::new();
        queue.push_back(SearchNode {
            expression: start.clone(),
            depth: 0,
            path: Vec::new(),
        });
        self.mark_visited(start);

        let mut explored = 0usize;

        while explored < self.max_transformations {
            let current = match queue.pop_front() {
                Some(node) => node,
                None => break,
            };

            if current.depth > self.max_depth {
                continue;
            }

            if self.engine.are_equivalent(&current.expression, target) {
                debug!(
                    "target reached at depth {} after exploring {} transformations",
                    current.depth, explored
                );
                return Proof::from_path(current.path, true);
            }

            if self.should_prune(&current) {
                continue;
            }

            let children = self.expand(&current);
            explored += children.len();

            for child in children {
                if !self.is_visited(&child.expression) {
                    self.mark_visited(&child.expression);
                    queue.push_back(child);
                }
            }
        }

        debug!(
            "search halted after exploring {} transformations without reaching the target",
            explored
        );
        Proof::not_found()
    }

    /// Every distinct expression reachable within `max_steps` rewrites, in
    /// BFS discovery order. The source expression is always first; the list
    /// is capped at 50 entries and by the transformation limit.
    pub fn generate_equivalent_forms(&mut self, expression: &Expr, max_steps: usize) -> Vec<Expr> {
        self.visited.clear();

        let mut forms = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(SearchNode {
            expression: expression.clone(),
            depth: 0,
            path: Vec::new(),
        });
        self.mark_visited(expression);

        let mut explored = 0usize;

        while explored < self.max_transformations && forms.len() < EQUIVALENT_FORMS_LIMIT {
            let current = match queue.pop_front() {
                Some(node) => node,
                None => break,
            };

            if current.depth > max_steps {
                continue;
            }

            forms.push(current.expression.clone());

            let children = self.expand(&current);
            explored += children.len();

            for child in children {
                if !self.is_visited(&child.expression) {
                    self.mark_visited(&child.expression);
                    queue.push_back(child);
                }
            }
        }

        forms
    }

    // The visited set keys on the canonical printed form. Commutative
    // variants print differently and may both be expanded; the equivalence
    // test still catches either one reaching the target.
    fn is_visited(&self, expression: &Expr) -> bool {
        self.visited.contains(&expression.to_string())
    }

    fn mark_visited(&mut self, expression: &Expr) {
        self.visited.insert(expression.to_string());
    }

    fn should_prune(&self, node: &SearchNode) -> bool {
        node.depth >= self.max_depth
            || node.expression.to_string().len() > PRINTED_LENGTH_LIMIT
    }

    /// One BFS layer: every one-step rewrite of the whole expression, plus
    /// every rewrite of an immediate child wrapped back into the parent.
    fn expand(&self, node: &SearchNode) -> Vec<SearchNode> {
        let mut expanded = Vec::new();

        for t in self.engine.generate_all_transformations(&node.expression) {
            expanded.push(self.extend(node, t.result, t.law, t.description));
        }

        match &node.expression {
            Expr::Not(operand) => {
                for t in self.engine.generate_all_transformations(operand) {
                    expanded.push(self.extend(node, Expr::not(t.result), t.law, t.description));
                }
            }
            Expr::And(l, r) => self.expand_children(node, l, r, Expr::and, &mut expanded),
            Expr::Or(l, r) => self.expand_children(node, l, r, Expr::or, &mut expanded),
            Expr::Implies(l, r) => self.expand_children(node, l, r, Expr::implies, &mut expanded),
            Expr::Iff(l, r) => self.expand_children(node, l, r, Expr::iff, &mut expanded),
            Expr::Var(_) | Expr::Const(_) => {}
        }

        expanded
    }

    fn expand_children(
        &self,
        node: &SearchNode,
        left: &Expr,
        right: &Expr,
        rebuild: fn(Expr, Expr) -> Expr,
        expanded: &mut Vec<SearchNode>,
    ) {
        for t in self.engine.generate_all_transformations(left) {
            expanded.push(self.extend(
                node,
                rebuild(t.result, right.clone()),
                t.law,
                t.description,
            ));
        }
        for t in self.engine.generate_all_transformations(right) {
            expanded.push(self.extend(
                node,
                rebuild(left.clone(), t.result),
                t.law,
                t.description,
            ));
        }
    }

    fn extend(
        &self,
        node: &SearchNode,
        expression: Expr,
        law: LogicLaw,
        description: String,
    ) -> SearchNode {
        let mut path = node.path.clone();
        path.push(ProofStep {
            expression: expression.clone(),
            law,
            description,
            step_number: node.depth + 1,
        });
        SearchNode {
            expression,
            depth: node.depth + 1,
            path,
        }
    }
}
