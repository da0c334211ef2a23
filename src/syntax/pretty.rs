// Equilog - Equivalence Prover for Propositional Logic
//
// Searches for minimum-length chains of named Boolean algebra rewrites
// connecting two propositional formulas.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/syntax/pretty.rs
// Canonical printer for propositional formulas

use crate::ast::Expr;
use std::fmt;

// ============================================================================
// Canonical Form
// ============================================================================

/// The canonical textual form: variables and constants as-is, `!operand`,
/// and every binary operation fully parenthesised as `(left op right)`.
///
/// The search keys its visited set on this string, so the printer is part of
/// the deduplication contract, not just presentation.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Var(name) => write!(f, "{}", name),
            Expr::Const(true) => write!(f, "T"),
            Expr::Const(false) => write!(f, "F"),
            Expr::Not(operand) => write!(f, "!{}", operand),
            Expr::And(l, r) => write!(f, "({} & {})", l, r),
            Expr::Or(l, r) => write!(f, "({} | {})", l, r),
            Expr::Implies(l, r) => write!(f, "({} -> {})", l, r),
            Expr::Iff(l, r) => write!(f, "({} <-> {})", l, r),
        }
    }
}

// ============================================================================
// Tree Dump
// ============================================================================

impl Expr {
    /// Indented one-node-per-line rendering, used by the interactive `parse`
    /// command to show the shape of a formula.
    pub fn to_tree_string(&self) -> String {
        let mut out = String::new();
        self.write_tree(&mut out, 0);
        out
    }

    fn write_tree(&self, out: &mut String, indent: usize) {
        let pad = "  ".repeat(indent);
        match self {
            Expr::Var(name) => {
                out.push_str(&format!("{}{}\n", pad, name));
            }
            Expr::Const(value) => {
                out.push_str(&format!("{}{}\n", pad, if *value { "T" } else { "F" }));
            }
            Expr::Not(operand) => {
                out.push_str(&format!("{}!\n", pad));
                operand.write_tree(out, indent + 1);
            }
            Expr::And(l, r) => {
                out.push_str(&format!("{}&\n", pad));
                l.write_tree(out, indent + 1);
                r.write_tree(out, indent + 1);
            }
            Expr::Or(l, r) => {
                out.push_str(&format!("{}|\n", pad));
                l.write_tree(out, indent + 1);
                r.write_tree(out, indent + 1);
            }
            Expr::Implies(l, r) => {
                out.push_str(&format!("{}->\n", pad));
                l.write_tree(out, indent + 1);
                r.write_tree(out, indent + 1);
            }
            Expr::Iff(l, r) => {
                out.push_str(&format!("{}<->\n", pad));
                l.write_tree(out, indent + 1);
                r.write_tree(out, indent + 1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_form_is_fully_parenthesised() {
        let e = Expr::implies(
            Expr::not(Expr::and(Expr::var("p"), Expr::var("q"))),
            Expr::or(Expr::truth(true), Expr::var("r")),
        );
        assert_eq!(e.to_string(), "(!(p & q) -> (T | r))");
    }

    #[test]
    fn negation_binds_without_parens() {
        let e = Expr::not(Expr::not(Expr::var("p")));
        assert_eq!(e.to_string(), "!!p");
    }
}
