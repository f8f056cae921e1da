//! Main emitter module.
//!
//! This module contains the Emitter structure that walks a `Program` and
//! produces Python source text. Emission is read-only over the tree and
//! cannot fail: every tree the parser accepts has a rendering.

use tracing::debug;

use crate::ast::statements::{Program, Stmt};

use super::stmt::gen_statement;

/// Options controlling the shape of the emitted text.
#[derive(Debug, Clone, PartialEq)]
pub struct EmitterConfig {
    /// Text written once per nesting level
    pub indent: String,
    /// Only parenthesize binary expressions the source parenthesized.
    ///
    /// Off by default: nested binary operands are always wrapped so the
    /// left-to-right, single-precedence evaluation order survives in the
    /// target language.
    pub source_parens_only: bool,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        EmitterConfig {
            indent: String::from("\t"),
            source_parens_only: false,
        }
    }
}

/// Holds the output buffer and the current nesting depth.
pub struct Emitter<'a> {
    pub config: &'a EmitterConfig,
    indent: usize,
    output: String,
}

impl<'a> Emitter<'a> {
    pub fn new(config: &'a EmitterConfig) -> Self {
        Emitter {
            config,
            indent: 0,
            output: String::new(),
        }
    }

    /// Writes one line at the current indentation.
    pub fn line(&mut self, text: &str) {
        for _ in 0..self.indent {
            self.output.push_str(&self.config.indent);
        }
        self.output.push_str(text);
        self.output.push('\n');
    }

    /// Writes a block body one level deeper. Empty bodies become `pass`.
    pub fn block(&mut self, body: &[Stmt]) {
        self.indent += 1;
        if body.is_empty() {
            self.line("pass");
        }
        for statement in body {
            gen_statement(self, statement);
        }
        self.indent -= 1;
    }

    pub fn finish(self) -> String {
        self.output
    }
}

/// Emits a program with the default configuration.
pub fn emit(program: &Program) -> String {
    emit_with(program, &EmitterConfig::default())
}

pub fn emit_with(program: &Program, config: &EmitterConfig) -> String {
    let mut emitter = Emitter::new(config);

    for statement in program.iter() {
        gen_statement(&mut emitter, statement);
    }

    let output = emitter.finish();
    debug!(lines = output.lines().count(), "emitted program");
    output
}
