//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the recursive-descent parser that transforms the
//! token sequence into a `Program`. It handles:
//!
//! - Statement dispatch on the leading token (`lookups.rs`)
//! - Statement parsing (declarations, assignments, calls, control flow, functions)
//! - Expression parsing with a single, left-associative precedence level
//! - Return legality against the nearest enclosing function body
//!
//! There is no backtracking and no error recovery.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
