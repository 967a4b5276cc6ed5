/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - expressions: The closed set of expression nodes
/// - statements: Prototypes, functions and the top-level items the driver receives
pub mod expressions;
pub mod statements;
