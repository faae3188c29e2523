//! Write the formula reference generated from the equation registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-equations            # writes calc_core/EQUATIONS.md
//! cargo run --bin gen-equations -- out.md  # explicit destination
//! ```

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use calc_core::equations::{generate_equations_markdown, ALL_EQUATIONS};

const DEFAULT_OUTPUT: &str = "calc_core/EQUATIONS.md";

fn main() -> ExitCode {
    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let markdown = generate_equations_markdown();

    match fs::write(&output_path, &markdown) {
        Ok(()) => {
            println!(
                "Wrote {} equations ({} bytes) to {}",
                ALL_EQUATIONS.len(),
                markdown.len(),
                output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error writing {}: {}", output_path.display(), e);
            ExitCode::FAILURE
        }
    }
}
