//! Lexical analysis module for the translator.
//!
//! This module contains the scanner that converts source code into a stream
//! of tokens for parsing. It handles:
//!
//! - Tokenization using an ordered table of regex patterns (first match wins)
//! - Recognition of reserved words, type names, literals and operators
//! - Line/column tracking for error reporting
//! - Skipping comments and whitespace

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
