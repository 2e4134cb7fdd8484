//! Example: Classify bracket sequences read from a file
//!
//! Usage: cargo run --example classify_file <input.txt>

use delimatch::classify;
use std::env;
use std::fs;
use std::process;

fn main() {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: cargo run --example classify_file <input.txt>");
        process::exit(1);
    }

    let file_path = &args[1];

    let input = match fs::read_to_string(file_path) {
        Ok(contents) => contents,
        Err(err) => {
            eprintln!("Error reading file '{}': {}", file_path, err);
            process::exit(1);
        }
    };

    // A trailing newline would itself be an unrecognized glyph
    match classify(input.trim_end()) {
        Ok(verdict) => println!("{}: {}", file_path, verdict),
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    }
}
