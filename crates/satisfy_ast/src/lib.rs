//! satisfy_ast: Syntax tree of the module-level declarations the lint rule
//! inspects.
//!
//! The tree keeps what a type-aware lint pass needs from a TypeScript module:
//! top-level statements, declaration names, binding shapes, export modifiers
//! and source ranges. Expressions and type annotations are not modeled; the
//! type oracle answers questions about them by `NodeId`.

pub mod builder;
pub mod node;
pub mod program;
pub mod syntax_kind;
pub mod types;

// Re-export key types
pub use builder::{AstBuilder, Declarator, SourceFileBuilder};
pub use node::*;
pub use program::{Program, TypeDeclaration};
pub use syntax_kind::SyntaxKind;
pub use types::*;
