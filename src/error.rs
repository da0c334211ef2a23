// Equilog - Equivalence Prover for Propositional Logic
//
// Searches for minimum-length chains of named Boolean algebra rewrites
// connecting two propositional formulas.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/error.rs
// Error types surfaced at the parser boundary

use thiserror::Error;

/// A parse failure with the zero-based byte position of the offending input.
///
/// This is the only error the crate surfaces; rule inapplicability is
/// `Option::None` and search exhaustion is `found_target = false` on the
/// returned proof.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message} at position {position}")]
pub struct ParseError {
    pub message: String,
    pub position: usize,
}

impl ParseError {
    pub fn new(message: impl Into<String>, position: usize) -> Self {
        ParseError {
            message: message.into(),
            position,
        }
    }
}
