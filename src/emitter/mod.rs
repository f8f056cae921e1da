//! Code generation module for the translator.
//!
//! This module walks the AST and produces Python source text. It handles:
//!
//! - Indentation-aware emission of statements and blocks
//! - Expression rendering with explicit grouping
//! - Type annotations for function parameters
//! - Renaming of builtins such as `imprimir`

pub mod emitter;
pub mod expr;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;
