// Equilog - Equivalence Prover for Propositional Logic
//
// Searches for minimum-length chains of named Boolean algebra rewrites
// connecting two propositional formulas.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/syntax/parser.rs
// Parser for propositional formulas using nom

use crate::ast::Expr;
use crate::error::ParseError;
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{alpha1, alphanumeric1, char, multispace0},
    combinator::{map, recognize},
    error::{context, VerboseError, VerboseErrorKind},
    multi::many0,
    sequence::{delimited, pair, preceded},
    IResult,
};

type ParseResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

// ============================================================================
// Lexer
// ============================================================================

fn ws<'a, F, O>(inner: F) -> impl FnMut(&'a str) -> ParseResult<'a, O>
where
    F: FnMut(&'a str) -> ParseResult<'a, O>,
{
    delimited(multispace0, inner, multispace0)
}

fn identifier(input: &str) -> ParseResult<String> {
    context(
        "identifier",
        map(
            recognize(pair(
                alt((alpha1, tag("_"))),
                many0(alt((alphanumeric1, tag("_")))),
            )),
            |s: &str| s.to_string(),
        ),
    )(input)
}

// Alternative operator spellings are normalised here; the core only ever
// sees the abstract connectives.

fn not_op(input: &str) -> ParseResult<&str> {
    alt((tag("!"), tag("~"), tag("¬")))(input)
}

fn and_op(input: &str) -> ParseResult<&str> {
    alt((tag("&&"), tag("&"), tag("∧")))(input)
}

fn or_op(input: &str) -> ParseResult<&str> {
    alt((tag("||"), tag("|"), tag("∨")))(input)
}

fn implies_op(input: &str) -> ParseResult<&str> {
    alt((tag("->"), tag("→")))(input)
}

fn iff_op(input: &str) -> ParseResult<&str> {
    alt((tag("<->"), tag("↔")))(input)
}

// ============================================================================
// Grammar
// ============================================================================
//
// Precedence, loosest to tightest:
//   biconditional (left) → implication (right) → disjunction (left)
//   → conjunction (left) → negation → atom

fn expression(input: &str) -> ParseResult<Expr> {
    context("expression", biconditional)(input)
}

fn biconditional(input: &str) -> ParseResult<Expr> {
    let (input, first) = implication(input)?;
    let (input, rest) = many0(preceded(ws(iff_op), implication))(input)?;

    Ok((input, rest.into_iter().fold(first, Expr::iff)))
}

fn implication(input: &str) -> ParseResult<Expr> {
    let (input, left) = disjunction(input)?;

    // Right-associative: a -> b -> c parses as a -> (b -> c)
    match ws(implies_op)(input) {
        Ok((input, _)) => {
            let (input, right) = implication(input)?;
            Ok((input, Expr::implies(left, right)))
        }
        Err(_) => Ok((input, left)),
    }
}

fn disjunction(input: &str) -> ParseResult<Expr> {
    let (input, first) = conjunction(input)?;
    let (input, rest) = many0(preceded(ws(or_op), conjunction))(input)?;

    Ok((input, rest.into_iter().fold(first, Expr::or)))
}

fn conjunction(input: &str) -> ParseResult<Expr> {
    let (input, first) = negation(input)?;
    let (input, rest) = many0(preceded(ws(and_op), negation))(input)?;

    Ok((input, rest.into_iter().fold(first, Expr::and)))
}

fn negation(input: &str) -> ParseResult<Expr> {
    context(
        "negation",
        alt((map(preceded(ws(not_op), negation), Expr::not), atom)),
    )(input)
}

fn atom(input: &str) -> ParseResult<Expr> {
    context(
        "atom",
        alt((
            delimited(ws(char('(')), expression, ws(char(')'))),
            map(ws(identifier), |name: String| match name.as_str() {
                // Only the bare single letters are reserved; identifiers such
                // as "True" stay ordinary variables.
                "T" => Expr::Const(true),
                "F" => Expr::Const(false),
                _ => Expr::Var(name),
            }),
        )),
    )(input)
}

// ============================================================================
// Public API
// ============================================================================

/// Parse a formula from its concrete syntax.
///
/// On failure the error carries the zero-based byte offset of the point in
/// `input` where parsing stopped.
pub fn parse(input: &str) -> Result<Expr, ParseError> {
    match expression(input) {
        Ok((remaining, result)) if remaining.is_empty() => Ok(result),
        Ok((remaining, _)) => Err(ParseError::new(
            "unexpected input after expression",
            input.len() - remaining.len(),
        )),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(describe_error(input, &e)),
        Err(nom::Err::Incomplete(_)) => Err(ParseError::new("incomplete expression", input.len())),
    }
}

fn describe_error(input: &str, error: &VerboseError<&str>) -> ParseError {
    let position = error
        .errors
        .first()
        .map(|(remaining, _)| input.len() - remaining.len())
        .unwrap_or(0);

    let message = error
        .errors
        .iter()
        .find_map(|(_, kind)| match kind {
            VerboseErrorKind::Context(what) => Some(format!("expected {}", what)),
            _ => None,
        })
        .unwrap_or_else(|| "malformed expression".to_string());

    ParseError::new(message, position)
}
