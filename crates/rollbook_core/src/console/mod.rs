//! Console arithmetic exercise.
//!
//! # Responsibility
//! - Read integers from a token stream, recovering from malformed tokens.
//! - Drive the add-until-sentinel session.
//! - Demonstrate static overload selection for division.
//!
//! # Invariants
//! - A malformed token is discarded exactly once and the same field is
//!   prompted again; it never ends the session.
//! - End of input ends the session without an error.

pub mod maths;
mod reader;
mod session;

pub use reader::{read_int, TokenReader};
pub use session::{run_sum_session, SessionEnd, SessionSummary};

/// Prompt shown before each operand.
pub const VALUE_PROMPT: &str = "Enter the value : ";
/// Message shown after a malformed operand is discarded.
pub const INVALID_INPUT_MESSAGE: &str = "Enter only integer value.";
/// Prompt shown after each sum.
pub const EXIT_PROMPT: &str = "Enter 1 to exit";
/// Value that ends the session at the exit prompt.
pub const EXIT_SENTINEL: i32 = 1;
