/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - expressions: Definitions for the expression variants
/// - statements: Definitions for the statement variants and the program root
pub mod expressions;
pub mod statements;
