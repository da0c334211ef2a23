// Equilog - Equivalence Prover for Propositional Logic
//
// Searches for minimum-length chains of named Boolean algebra rewrites
// connecting two propositional formulas.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// tests/parser_test.rs
// Tests the concrete grammar: precedence, spellings, reserved constants,
// error positions, and the printer round-trip

use equilog::{parse, Expr};

#[test]
fn test_variable() {
    assert_eq!(parse("p").unwrap(), Expr::var("p"));
    assert_eq!(parse("long_name_2").unwrap(), Expr::var("long_name_2"));
    assert_eq!(parse("_x").unwrap(), Expr::var("_x"));
}

#[test]
fn test_constants_are_reserved_single_letters() {
    assert_eq!(parse("T").unwrap(), Expr::truth(true));
    assert_eq!(parse("F").unwrap(), Expr::truth(false));
    // Longer identifiers beginning with T or F are ordinary variables
    assert_eq!(parse("True").unwrap(), Expr::var("True"));
    assert_eq!(parse("Far").unwrap(), Expr::var("Far"));
}

#[test]
fn test_and_binds_tighter_than_or() {
    // a & b | c parses as (a & b) | c
    let expr = parse("a & b | c").unwrap();
    assert_eq!(
        expr,
        Expr::or(Expr::and(Expr::var("a"), Expr::var("b")), Expr::var("c"))
    );
}

#[test]
fn test_or_binds_tighter_than_implies() {
    // a | b -> c parses as (a | b) -> c
    let expr = parse("a | b -> c").unwrap();
    assert_eq!(
        expr,
        Expr::implies(Expr::or(Expr::var("a"), Expr::var("b")), Expr::var("c"))
    );
}

#[test]
fn test_implication_is_right_associative() {
    // a -> b -> c parses as a -> (b -> c)
    let expr = parse("a -> b -> c").unwrap();
    assert_eq!(
        expr,
        Expr::implies(
            Expr::var("a"),
            Expr::implies(Expr::var("b"), Expr::var("c"))
        )
    );
}

#[test]
fn test_biconditional_is_left_associative() {
    // a <-> b <-> c parses as (a <-> b) <-> c
    let expr = parse("a <-> b <-> c").unwrap();
    assert_eq!(
        expr,
        Expr::iff(Expr::iff(Expr::var("a"), Expr::var("b")), Expr::var("c"))
    );
}

#[test]
fn test_negation_binds_tightest() {
    // !a & b parses as (!a) & b
    let expr = parse("!a & b").unwrap();
    assert_eq!(
        expr,
        Expr::and(Expr::not(Expr::var("a")), Expr::var("b"))
    );
}

#[test]
fn test_nested_negation() {
    assert_eq!(
        parse("!!p").unwrap(),
        Expr::not(Expr::not(Expr::var("p")))
    );
}

#[test]
fn test_parentheses_override_precedence() {
    let expr = parse("a & (b | c)").unwrap();
    assert_eq!(
        expr,
        Expr::and(Expr::var("a"), Expr::or(Expr::var("b"), Expr::var("c")))
    );
}

#[test]
fn test_alternative_spellings() {
    let reference = parse("!a & b | c -> d <-> e").unwrap();
    assert_eq!(parse("~a && b || c → d ↔ e").unwrap(), reference);
    assert_eq!(parse("¬a ∧ b ∨ c -> d <-> e").unwrap(), reference);
}

#[test]
fn test_whitespace_is_insignificant() {
    assert_eq!(parse("  a&b  ").unwrap(), parse("a & b").unwrap());
}

#[test]
fn test_empty_input_is_an_error() {
    assert!(parse("").is_err());
    assert!(parse("   ").is_err());
}

#[test]
fn test_trailing_input_position() {
    let err = parse("a b").unwrap_err();
    assert_eq!(err.position, 2);
}

#[test]
fn test_dangling_operator_is_an_error() {
    assert!(parse("a &").is_err());
    assert!(parse("-> b").is_err());
}

#[test]
fn test_unclosed_paren_is_an_error() {
    assert!(parse("(a | b").is_err());
}

#[test]
fn test_canonical_form_round_trips() {
    for text in [
        "!!p",
        "!(p & q)",
        "(p -> q) & (q -> p)",
        "((a | b) & !c) <-> (T | F)",
    ] {
        let expr = parse(text).unwrap();
        let reparsed = parse(&expr.to_string()).unwrap();
        assert_eq!(reparsed, expr, "round trip failed for {}", text);
    }
}
