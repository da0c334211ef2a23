// Equilog - Equivalence Prover for Propositional Logic
//
// Searches for minimum-length chains of named Boolean algebra rewrites
// connecting two propositional formulas.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/proof.rs
// Proof records: ordered, law-justified rewrite chains

use crate::ast::Expr;
use crate::rewrite::LogicLaw;
use std::fmt;

/// One justified rewrite: the expression after the step, the law that
/// produced it, and where it fired.
#[derive(Debug, Clone, PartialEq)]
pub struct ProofStep {
    pub expression: Expr,
    pub law: LogicLaw,
    pub description: String,
    /// 1-based position in the finished proof.
    pub step_number: usize,
}

/// An ordered chain of rewrite steps from a start expression to a target.
///
/// `found_target = false` means the search halted (exhausted or
/// limit-reached) without reaching the target; the step list is then empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Proof {
    pub steps: Vec<ProofStep>,
    pub found_target: bool,
    pub total_steps: usize,
}

impl Proof {
    /// Assemble a proof from a search path, renumbering the steps 1..N
    /// regardless of the depth values attached during expansion.
    pub fn from_path(path: Vec<ProofStep>, found_target: bool) -> Self {
        let mut steps = path;
        for (index, step) in steps.iter_mut().enumerate() {
            step.step_number = index + 1;
        }
        let total_steps = steps.len();
        Proof {
            steps,
            found_target,
            total_steps,
        }
    }

    pub fn not_found() -> Self {
        Proof::from_path(Vec::new(), false)
    }

    /// Summary block printed by the CLI after a search.
    pub fn statistics(&self) -> String {
        let mut out = String::new();
        out.push_str("Proof Statistics:\n");
        out.push_str(&format!("  Total steps: {}\n", self.total_steps));
        out.push_str(&format!(
            "  Proof found: {}\n",
            if self.found_target { "Yes" } else { "No" }
        ));
        if let (Some(first), Some(last)) = (self.steps.first(), self.steps.last()) {
            out.push_str(&format!("  Initial expression: {}\n", first.expression));
            out.push_str(&format!("  Final expression: {}\n", last.expression));
        }
        out
    }
}

impl fmt::Display for ProofStep {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Step {}: {}", self.step_number, self.expression)?;
        writeln!(f, "  Using: {}", self.law.name())?;
        writeln!(f, "  {}", self.description)?;
        writeln!(f)
    }
}

impl fmt::Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if !self.found_target {
            return writeln!(f, "No proof found within the search limits.");
        }

        writeln!(f, "Proof found in {} steps:", self.total_steps)?;
        writeln!(f)?;
        for step in &self.steps {
            write!(f, "{}", step)?;
        }
        Ok(())
    }
}
