//! Syntax node definitions.
//!
//! Nodes are allocated in a bump arena and reference their children by
//! arena slices. Every node carries a `NodeData` with its kind, source range,
//! flags and a program-unique `NodeId` that the type oracle is keyed by.

use crate::syntax_kind::SyntaxKind;
use crate::types::*;
use satisfy_core::intern::InternedString;
use satisfy_core::text::{LineAndColumn, LineMap, TextPos, TextRange};

// ============================================================================
// Core Node Wrapper
// ============================================================================

/// Common data shared by all syntax nodes.
#[derive(Debug, Clone)]
pub struct NodeData {
    pub kind: SyntaxKind,
    pub range: TextRange,
    pub flags: NodeFlags,
    pub modifier_flags: ModifierFlags,
    pub id: NodeId,
}

impl NodeData {
    pub fn new(kind: SyntaxKind, pos: TextPos, end: TextPos, id: NodeId) -> Self {
        Self {
            kind,
            range: TextRange::new(pos, end),
            flags: NodeFlags::NONE,
            modifier_flags: ModifierFlags::NONE,
            id,
        }
    }

    pub fn with_flags(mut self, flags: NodeFlags) -> Self {
        self.flags = flags;
        self
    }

    pub fn with_modifiers(mut self, modifier_flags: ModifierFlags) -> Self {
        self.modifier_flags = modifier_flags;
        self
    }
}

/// A list of nodes, allocated in the arena.
pub type NodeList<'a, T> = &'a [T];

// ============================================================================
// Source File
// ============================================================================

#[derive(Debug)]
pub struct SourceFile<'a> {
    pub data: NodeData,
    pub statements: NodeList<'a, Statement<'a>>,
    pub file_name: String,
    pub text: String,
    pub line_map: LineMap,
}

impl<'a> SourceFile<'a> {
    pub fn line_and_column_of(&self, pos: TextPos) -> LineAndColumn {
        self.line_map.line_and_column_of(pos)
    }

    /// Statements carrying an `export` modifier, in source order.
    ///
    /// `export default` declarations are excluded; they are not named exports.
    pub fn exported_declarations(&self) -> impl Iterator<Item = &Statement<'a>> + '_ {
        self.statements.iter().filter(|s| s.is_named_export())
    }
}

// ============================================================================
// Identifier
// ============================================================================

#[derive(Debug, Clone)]
pub struct Identifier {
    pub data: NodeData,
    /// The interned text of this identifier.
    pub text: InternedString,
    /// The text of this identifier as a plain string.
    pub text_name: String,
}

// ============================================================================
// Binding Patterns
// ============================================================================

#[derive(Debug)]
pub enum BindingName<'a> {
    Identifier(Identifier),
    ObjectBindingPattern(&'a ObjectBindingPattern<'a>),
    ArrayBindingPattern(&'a ArrayBindingPattern<'a>),
}

impl<'a> BindingName<'a> {
    /// The bound identifier, if the binding is not a pattern.
    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            BindingName::Identifier(id) => Some(id),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub struct ObjectBindingPattern<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, BindingElement<'a>>,
}

#[derive(Debug)]
pub struct ArrayBindingPattern<'a> {
    pub data: NodeData,
    pub elements: NodeList<'a, BindingElement<'a>>,
}

#[derive(Debug)]
pub struct BindingElement<'a> {
    pub data: NodeData,
    pub property_name: Option<Identifier>,
    pub name: BindingName<'a>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug)]
pub enum Statement<'a> {
    VariableStatement(VariableStatement<'a>),
    FunctionDeclaration(FunctionDeclaration),
    ClassDeclaration(ClassDeclaration),
    InterfaceDeclaration(InterfaceDeclaration),
    TypeAliasDeclaration(TypeAliasDeclaration),
    EnumDeclaration(EnumDeclaration),
    ModuleDeclaration(ModuleDeclaration<'a>),
    ExportDeclaration(ExportDeclaration<'a>),
    ExportAssignment(ExportAssignment),
    EmptyStatement(NodeData),
}

impl<'a> Statement<'a> {
    pub fn data(&self) -> &NodeData {
        match self {
            Statement::VariableStatement(n) => &n.data,
            Statement::FunctionDeclaration(n) => &n.data,
            Statement::ClassDeclaration(n) => &n.data,
            Statement::InterfaceDeclaration(n) => &n.data,
            Statement::TypeAliasDeclaration(n) => &n.data,
            Statement::EnumDeclaration(n) => &n.data,
            Statement::ModuleDeclaration(n) => &n.data,
            Statement::ExportDeclaration(n) => &n.data,
            Statement::ExportAssignment(n) => &n.data,
            Statement::EmptyStatement(data) => data,
        }
    }

    pub fn kind(&self) -> SyntaxKind {
        self.data().kind
    }

    pub fn modifier_flags(&self) -> ModifierFlags {
        self.data().modifier_flags
    }

    /// A declaration written as `export <declaration>`, excluding `export default`.
    pub fn is_named_export(&self) -> bool {
        let flags = self.modifier_flags();
        flags.contains(ModifierFlags::EXPORT) && !flags.contains(ModifierFlags::DEFAULT)
    }
}

#[derive(Debug)]
pub struct VariableStatement<'a> {
    pub data: NodeData,
    pub declaration_list: VariableDeclarationList<'a>,
}

#[derive(Debug)]
pub struct VariableDeclarationList<'a> {
    pub data: NodeData,
    pub declarations: NodeList<'a, VariableDeclaration<'a>>,
}

#[derive(Debug)]
pub struct VariableDeclaration<'a> {
    pub data: NodeData,
    pub name: BindingName<'a>,
}

// ============================================================================
// Declarations
// ============================================================================

#[derive(Debug)]
pub struct FunctionDeclaration {
    pub data: NodeData,
    pub name: Option<Identifier>,
}

#[derive(Debug)]
pub struct ClassDeclaration {
    pub data: NodeData,
    pub name: Option<Identifier>,
}

#[derive(Debug)]
pub struct InterfaceDeclaration {
    pub data: NodeData,
    pub name: Identifier,
}

#[derive(Debug)]
pub struct TypeAliasDeclaration {
    pub data: NodeData,
    pub name: Identifier,
}

#[derive(Debug)]
pub struct EnumDeclaration {
    pub data: NodeData,
    pub name: Identifier,
}

/// `namespace N { ... }` / `module N { ... }`.
#[derive(Debug)]
pub struct ModuleDeclaration<'a> {
    pub data: NodeData,
    pub name: Identifier,
    pub statements: NodeList<'a, Statement<'a>>,
}

// ============================================================================
// Export forms without an inline declaration
// ============================================================================

/// `export { a, b as c }`, `export { a } from "m"`, `export * from "m"`.
#[derive(Debug)]
pub struct ExportDeclaration<'a> {
    pub data: NodeData,
    pub is_type_only: bool,
    /// `None` for `export * from "m"`.
    pub export_clause: Option<NodeList<'a, ExportSpecifier>>,
    pub module_specifier: Option<String>,
}

#[derive(Debug)]
pub struct ExportSpecifier {
    pub data: NodeData,
    pub property_name: Option<Identifier>,
    pub name: Identifier,
}

/// `export default <expr>` or `export = <expr>`.
#[derive(Debug)]
pub struct ExportAssignment {
    pub data: NodeData,
    pub is_export_equals: bool,
}
