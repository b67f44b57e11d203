//! Kinds of the syntax nodes kept in the tree.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxKind {
    SourceFile,
    Identifier,

    // Bindings
    ObjectBindingPattern,
    ArrayBindingPattern,
    BindingElement,

    // Statements
    VariableStatement,
    VariableDeclarationList,
    VariableDeclaration,
    FunctionDeclaration,
    ClassDeclaration,
    InterfaceDeclaration,
    TypeAliasDeclaration,
    EnumDeclaration,
    ModuleDeclaration,
    ExportDeclaration,
    ExportSpecifier,
    ExportAssignment,
    EmptyStatement,
}

impl SyntaxKind {
    /// Whether nodes of this kind introduce a named type.
    pub fn is_type_declaration(self) -> bool {
        matches!(
            self,
            SyntaxKind::InterfaceDeclaration | SyntaxKind::TypeAliasDeclaration
        )
    }
}

impl fmt::Display for SyntaxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
