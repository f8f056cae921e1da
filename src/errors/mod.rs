//! Error types and error handling for the translator.
//!
//! Scanning and parsing share one error type, reported to users as a
//! `SyntaxError`. It includes:
//!
//! - The cause of the error as a structured value
//! - The 1-based line and column it was detected at
//! - Optional suggestions for fixing it

pub mod errors;
