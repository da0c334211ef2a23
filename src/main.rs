// Equilog - Equivalence Prover for Propositional Logic
//
// Searches for minimum-length chains of named Boolean algebra rewrites
// connecting two propositional formulas.
//
// Licensed under Creative Commons Attribution 4.0 International License
// https://creativecommons.org/licenses/by/4.0/

// src/main.rs
// Command-line interface: prove, generate, interactive

use std::io;
use std::io::{BufRead, Write};
use std::process::ExitCode;

use clap::Parser;

use equilog::{parse, ProofSearch, DEFAULT_MAX_DEPTH, DEFAULT_MAX_TRANSFORMATIONS};

/// Equivalence prover for propositional logic.
///
/// Operators: ! ~ ¬ (NOT), & && ∧ (AND), | || ∨ (OR), -> → (IMPLIES),
/// <-> ↔ (BICONDITIONAL); constants T and F.
#[derive(Parser)]
#[command(name = "equilog", version, about)]
struct Cli {
    /// Prove equivalence between two expressions
    #[arg(short = 'p', long = "prove", num_args = 2, value_names = ["START", "TARGET"])]
    prove: Option<Vec<String>>,

    /// Generate equivalent forms of an expression
    #[arg(short = 'g', long = "generate", value_name = "EXPR")]
    generate: Option<String>,

    /// Run in interactive mode (the default when no mode is given)
    #[arg(short = 'i', long = "interactive")]
    interactive: bool,

    /// Maximum rewrite depth explored by the search
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,

    /// Maximum number of transformations explored before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_TRANSFORMATIONS)]
    max_transformations: usize,
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let mut searcher = ProofSearch::with_limits(cli.max_depth, cli.max_transformations);

    if let Some(expressions) = &cli.prove {
        return run_prove(&mut searcher, &expressions[0], &expressions[1]);
    }

    if let Some(expression) = &cli.generate {
        return run_generate(&mut searcher, expression);
    }

    run_interactive(&mut searcher);
    ExitCode::SUCCESS
}

fn run_prove(searcher: &mut ProofSearch, start_text: &str, target_text: &str) -> ExitCode {
    let (start, target) = match (parse(start_text), parse(target_text)) {
        (Ok(start), Ok(target)) => (start, target),
        (Err(e), _) | (_, Err(e)) => {
            eprintln!("Parse error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let proof = searcher.find_proof(&start, &target);
    print!("{}", proof);
    println!();
    print!("{}", proof.statistics());

    if proof.found_target {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn run_generate(searcher: &mut ProofSearch, text: &str) -> ExitCode {
    let expression = match parse(text) {
        Ok(expression) => expression,
        Err(e) => {
            eprintln!("Parse error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let forms = searcher.generate_equivalent_forms(&expression, 3);

    println!("Equivalent forms of: {}", expression);
    println!();
    for (index, form) in forms.iter().take(20).enumerate() {
        println!("{:2}. {}", index + 1, form);
    }
    if forms.len() > 20 {
        println!("... and {} more forms", forms.len() - 20);
    }

    ExitCode::SUCCESS
}

fn run_interactive(searcher: &mut ProofSearch) {
    println!("Equilog Interactive Mode");
    println!("Enter 'help' for commands, 'quit' to exit");
    println!();

    let stdin = io::stdin();
    let mut reader = stdin.lock();

    loop {
        print!("equilog> ");
        let _ = io::stdout().flush();

        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                println!("\nGoodbye!");
                break;
            }
            Err(e) => {
                println!("Error reading input: {}", e);
                break;
            }
            Ok(_) => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if input == "quit" || input == "exit" {
            println!("Goodbye!");
            break;
        }

        if input == "help" {
            print_repl_help();
            continue;
        }

        if let Some(rest) = input.strip_prefix("prove ") {
            match rest.split_once(' ') {
                Some((start, target)) => repl_prove(searcher, start.trim(), target.trim()),
                None => println!("Usage: prove <expr1> <expr2>"),
            }
        } else if let Some(rest) = input.strip_prefix("generate ") {
            repl_generate(searcher, rest.trim());
        } else if let Some(rest) = input.strip_prefix("parse ") {
            repl_parse(rest.trim());
        } else {
            println!("Unknown command. Type 'help' for available commands.");
        }

        println!();
    }
}

fn print_repl_help() {
    println!("Commands:");
    println!("  prove <expr1> <expr2>  - Prove equivalence between expressions");
    println!("  generate <expr>        - Generate equivalent forms");
    println!("  parse <expr>           - Parse and display expression tree");
    println!("  quit                   - Exit program");
    println!();
}

fn repl_prove(searcher: &mut ProofSearch, start_text: &str, target_text: &str) {
    let (start, target) = match (parse(start_text), parse(target_text)) {
        (Ok(start), Ok(target)) => (start, target),
        (Err(e), _) | (_, Err(e)) => {
            println!("Parse error: {}", e);
            return;
        }
    };

    println!("Searching for proof from:");
    println!("  {}", start);
    println!("to:");
    println!("  {}", target);
    println!();

    let proof = searcher.find_proof(&start, &target);
    print!("{}", proof);
    println!();
    print!("{}", proof.statistics());
}

fn repl_generate(searcher: &mut ProofSearch, text: &str) {
    let expression = match parse(text) {
        Ok(expression) => expression,
        Err(e) => {
            println!("Parse error: {}", e);
            return;
        }
    };

    println!("Generating equivalent forms of: {}", expression);
    println!();

    let forms = searcher.generate_equivalent_forms(&expression, 3);

    println!("Found {} equivalent forms:", forms.len());
    for (index, form) in forms.iter().take(20).enumerate() {
        println!("{:2}. {}", index + 1, form);
    }
    if forms.len() > 20 {
        println!("... and {} more forms", forms.len() - 20);
    }
}

fn repl_parse(text: &str) {
    match parse(text) {
        Ok(expression) => {
            println!("Parsed expression: {}", expression);
            print!("{}", expression.to_tree_string());
        }
        Err(e) => println!("Parse error: {}", e),
    }
}
