//! Command-line driver for the Fox front end.
//!
//! Usage:
//!   foxc `<path>` [--tokens] [--ast] [--timings]
//!
//! Tokenizes and parses one source file, printing every diagnostic. The exit
//! status is 1 when the file cannot be read or any diagnostic was reported.

use std::{fs::read_to_string, path::Path, process, time::Instant};

use clap::{Arg, ArgAction, Command};
use foxc::{errors::errors::Error, lexer::lexer::tokenize, parser::parser::parse, render_error};

fn main() {
    let matches = Command::new("foxc")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Tokenizes and parses Fox source files")
        .arg(
            Arg::new("path")
                .help("Path to the Fox source file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("tokens")
                .long("tokens")
                .help("Print the token stream")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("ast")
                .long("ast")
                .help("Print the syntax tree")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("timings")
                .long("timings")
                .help("Print how long each stage took")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let Some(path) = matches.get_one::<String>("path") else {
        unreachable!("`path` is a required argument");
    };
    let show_tokens = matches.get_flag("tokens");
    let show_ast = matches.get_flag("ast");
    let show_timings = matches.get_flag("timings");

    let source = read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading {}: {}", path, e);
        process::exit(1);
    });

    let file_name = Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.clone());

    let start = Instant::now();
    let (tokens, mut errors) = tokenize(source.clone(), Some(file_name));

    if show_timings {
        println!("Tokenized in {:?}", start.elapsed());
    }

    if show_tokens {
        for token in &tokens {
            println!("{}", token);
        }
    }

    let parse_start = Instant::now();
    let (file, parse_errors) = parse(tokens);
    errors.extend(parse_errors);

    if show_timings {
        println!("Parsed in {:?}", parse_start.elapsed());
        println!("Total time: {:?}", start.elapsed());
    }

    if show_ast {
        print!("{}", file);
    }

    if !errors.is_empty() {
        display_errors(&errors, &source);
        process::exit(1);
    }
}

fn display_errors(errors: &[Error], source: &str) {
    for error in errors {
        eprintln!("{}", error);
        eprint!("{}", render_error(error, source));
    }

    eprintln!(
        "{} error{} found",
        errors.len(),
        if errors.len() == 1 { "" } else { "s" }
    );
}
