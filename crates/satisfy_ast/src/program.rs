//! The whole-program view: every source file of one compilation.

use crate::node::{Identifier, SourceFile, Statement};
use crate::syntax_kind::SyntaxKind;
use crate::types::NodeId;
use satisfy_core::intern::StringInterner;

/// An immutable snapshot of the source files in one analysis run.
///
/// Files keep the order they were added in, which is the order type
/// declarations are searched in.
#[derive(Debug)]
pub struct Program<'a> {
    interner: StringInterner,
    files: Vec<&'a SourceFile<'a>>,
}

/// A top-level type alias or interface found somewhere in the program.
#[derive(Debug, Clone, Copy)]
pub struct TypeDeclaration<'a> {
    pub file: &'a SourceFile<'a>,
    pub name: &'a Identifier,
    pub node: NodeId,
    pub kind: SyntaxKind,
}

impl<'a> Program<'a> {
    /// Programs are built through [`AstBuilder::program`](crate::AstBuilder::program)
    /// so identifier keys and the program's interner always agree.
    pub(crate) fn new(interner: StringInterner, files: Vec<&'a SourceFile<'a>>) -> Self {
        Self { interner, files }
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn source_files(&self) -> &[&'a SourceFile<'a>] {
        &self.files
    }

    pub fn source_file(&self, file_name: &str) -> Option<&'a SourceFile<'a>> {
        self.files.iter().copied().find(|f| f.file_name == file_name)
    }

    /// Top-level type aliases and interfaces of every file, in program order.
    ///
    /// Declarations nested in namespaces are not included.
    pub fn type_declarations(&self) -> impl Iterator<Item = TypeDeclaration<'a>> + '_ {
        self.files.iter().flat_map(|&file| {
            file.statements.iter().filter_map(move |statement| match statement {
                Statement::TypeAliasDeclaration(n) => Some(TypeDeclaration {
                    file,
                    name: &n.name,
                    node: n.data.id,
                    kind: n.data.kind,
                }),
                Statement::InterfaceDeclaration(n) => Some(TypeDeclaration {
                    file,
                    name: &n.name,
                    node: n.data.id,
                    kind: n.data.kind,
                }),
                _ => None,
            })
        })
    }
}
