//! Button Panel
//!
//! This example plays the role of the presentation layer: it turns button
//! labels given on the command line into actions, dispatches them through a
//! `Calculator` session and prints the two display lines.
//!
//! Key concepts:
//! - Literal-to-action mapping is the only logic outside the core
//! - Transitions are logged with `tracing` (set RUST_LOG=debug to see them)
//! - Unknown labels are reported without changing the state
//!
//! Run with: cargo run --example button_panel -- 1 2 3 4 . 5 × 2 =

use tally::Calculator;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Button Panel Example ===\n");

    let labels: Vec<String> = std::env::args().skip(1).collect();
    let labels = if labels.is_empty() {
        ["9", "9", "9", "9", "+", "1", "=", "÷", "0", "="]
            .map(String::from)
            .to_vec()
    } else {
        labels
    };

    let mut calc = Calculator::new();
    for label in &labels {
        match calc.press(label) {
            Ok(_) => println!("[{label}]\n{}\n", calc.screen()),
            Err(err) => println!("[{label}] {err}\n"),
        }
    }

    println!("=== Example Complete ===");
}
