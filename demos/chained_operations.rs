//! Chained Operations
//!
//! This example walks through eager left-to-right chaining with the pure
//! reducer, printing the display after every key.
//!
//! Key concepts:
//! - Pure transitions: each step consumes a state and returns the next
//! - No precedence: 2 + 3 × 4 evaluates as (2 + 3) × 4
//! - Display formatting is a read-only projection of the state
//!
//! Run with: cargo run --example chained_operations

use tally::core::{reduce, Action, CalculatorState};
use tally::display::{DisplayFormat, Screen};

fn main() {
    println!("=== Chained Operations Example ===\n");

    let format = DisplayFormat::default();
    let keys = ["2", "+", "3", "×", "4", "="];

    let mut state = CalculatorState::default();
    for key in keys {
        let action: Action = match key.parse() {
            Ok(action) => action,
            Err(err) => {
                eprintln!("{err}");
                return;
            }
        };
        state = reduce(state, action);

        let screen = Screen::render(&state, &format);
        println!(
            "key {key:>2}  | {:>10} | {:>10} | phase: {}",
            screen.pending.unwrap_or_default(),
            screen.current,
            state.phase().name()
        );
    }

    println!("\nResult: {}", state.current_value());
    assert_eq!(state.current_value(), "20");

    println!("\n=== Example Complete ===");
}
