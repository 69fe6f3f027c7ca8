/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - nodes: the closed set of parse node variants and their dispatch entry
/// - visitor: the visitor contract consumers implement
pub mod nodes;
pub mod visitor;
