//! CLI tool for pivot-header - lays out a column header and outputs JSON
//!
//! Usage:
//!   header_layout_cli <input.json>              # Output layout JSON to stdout
//!   header_layout_cli <input.json> -o out.json  # Output layout JSON to file
//!
//! The input is a `ColHeaderInput` document: nodes with measured text widths,
//! the header config, and optional theme and options.

#![allow(clippy::exit)]
#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::indexing_slicing)]

use pivot_header::ColHeaderInput;
use std::env;
use std::fs;
use std::io::{self, Write};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: header_layout_cli <input.json> [-o output.json]");
        std::process::exit(1);
    }

    let input_path = &args[1];
    let output_path = if args.len() > 3 && args[2] == "-o" {
        Some(&args[3])
    } else {
        None
    };

    let data = match fs::read_to_string(input_path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Error reading {}: {}", input_path, e);
            std::process::exit(1);
        }
    };

    let input = match ColHeaderInput::from_json(&data) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Error parsing header input: {}", e);
            std::process::exit(1);
        }
    };

    let layout = input.layout();
    eprintln!(
        "{} cells, {} resize areas",
        layout.cells.len(),
        layout.resize_areas.len()
    );

    let json = match serde_json::to_string_pretty(&layout) {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Error serializing JSON: {}", e);
            std::process::exit(1);
        }
    };

    match output_path {
        Some(path) => {
            if let Err(e) = fs::write(path, &json) {
                eprintln!("Error writing {}: {}", path, e);
                std::process::exit(1);
            }
            eprintln!("Written: {}", path);
        }
        None => {
            io::stdout().write_all(json.as_bytes()).unwrap();
            println!();
        }
    }
}
