//! Example: Print the token stream for a bracket sequence as JSON
//!
//! Usage: cargo run --example tokenize '<brackets>'

use delimatch::Scanner;
use std::env;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo run --example tokenize '<brackets>'");
        process::exit(1);
    }

    let mut scanner = Scanner::new(&args[1]);
    match scanner.scan_tokens() {
        Ok(tokens) => {
            let json = serde_json::to_string_pretty(&tokens).expect("tokens serialize to JSON");
            println!("{}", json);
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    }
}
