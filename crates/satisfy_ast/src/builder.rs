//! Construction of syntax trees for hosts and tests.
//!
//! `SourceFileBuilder` appends one declaration at a time, writes the
//! declaration's TypeScript text as it goes, and records the range of every
//! node it creates, so the resulting tree always agrees with `SourceFile::text`.
//!
//! ```
//! use bumpalo::Bump;
//! use satisfy_ast::{AstBuilder, Declarator, ModifierFlags, NodeFlags};
//! use satisfy_core::StringInterner;
//!
//! let arena = Bump::new();
//! let builder = AstBuilder::new(&arena, StringInterner::new());
//! let mut file = builder.source_file("mod.ts");
//! file.type_alias(ModifierFlags::EXPORT, "ID", "string | number");
//! file.variable_statement(
//!     ModifierFlags::EXPORT,
//!     NodeFlags::CONST,
//!     &[Declarator::identifier("id").typed("ID").init("1")],
//! );
//! let sf = file.finish();
//! assert_eq!(sf.text, "export type ID = string | number;\nexport const id: ID = 1;\n");
//! ```

use crate::node::*;
use crate::program::Program;
use crate::syntax_kind::SyntaxKind;
use crate::types::*;
use bumpalo::Bump;
use satisfy_core::intern::StringInterner;
use satisfy_core::text::{LineMap, TextPos};
use std::cell::Cell;

/// Move a Vec into the arena as a slice.
fn alloc_vec_in<T>(arena: &Bump, vec: Vec<T>) -> &[T] {
    if vec.is_empty() {
        return &[];
    }
    arena.alloc_slice_fill_iter(vec)
}

/// Allocates nodes for every file of one program.
///
/// Node ids are handed out from a single counter so they stay unique across
/// files.
pub struct AstBuilder<'a> {
    arena: &'a Bump,
    interner: StringInterner,
    next_node_id: Cell<u32>,
}

impl<'a> AstBuilder<'a> {
    pub fn new(arena: &'a Bump, interner: StringInterner) -> Self {
        Self {
            arena,
            interner,
            next_node_id: Cell::new(0),
        }
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn source_file(&self, file_name: impl Into<String>) -> SourceFileBuilder<'a, '_> {
        SourceFileBuilder {
            builder: self,
            file_name: file_name.into(),
            text: String::new(),
            statements: Vec::new(),
        }
    }

    /// Snapshot `files`, in order, as one program sharing this builder's interner.
    pub fn program(&self, files: Vec<&'a SourceFile<'a>>) -> Program<'a> {
        Program::new(self.interner.clone(), files)
    }

    fn next_id(&self) -> NodeId {
        let id = self.next_node_id.get();
        self.next_node_id.set(id + 1);
        NodeId(id)
    }
}

/// One variable declarator: the binding and its optional annotation and initializer.
#[derive(Debug, Clone)]
pub struct Declarator<'s> {
    binding: DeclaratorBinding<'s>,
    type_annotation: Option<&'s str>,
    initializer: Option<&'s str>,
}

#[derive(Debug, Clone)]
enum DeclaratorBinding<'s> {
    Identifier(&'s str),
    Object(&'s [&'s str]),
    Array(&'s [&'s str]),
}

impl<'s> Declarator<'s> {
    /// `name`
    pub fn identifier(name: &'s str) -> Self {
        Self::with_binding(DeclaratorBinding::Identifier(name))
    }

    /// `{ a, b }`
    pub fn object_pattern(names: &'s [&'s str]) -> Self {
        Self::with_binding(DeclaratorBinding::Object(names))
    }

    /// `[a, b]`
    pub fn array_pattern(names: &'s [&'s str]) -> Self {
        Self::with_binding(DeclaratorBinding::Array(names))
    }

    fn with_binding(binding: DeclaratorBinding<'s>) -> Self {
        Self {
            binding,
            type_annotation: None,
            initializer: None,
        }
    }

    pub fn typed(mut self, type_text: &'s str) -> Self {
        self.type_annotation = Some(type_text);
        self
    }

    pub fn init(mut self, initializer: &'s str) -> Self {
        self.initializer = Some(initializer);
        self
    }
}

/// Builds one source file. Call [`SourceFileBuilder::finish`] to get the tree.
pub struct SourceFileBuilder<'a, 'b> {
    builder: &'b AstBuilder<'a>,
    file_name: String,
    text: String,
    statements: Vec<Statement<'a>>,
}

impl<'a, 'b> SourceFileBuilder<'a, 'b> {
    // ========================================================================
    // Declarations
    // ========================================================================

    /// `type Name = <type_text>;`
    pub fn type_alias(&mut self, modifiers: ModifierFlags, name: &str, type_text: &str) -> NodeId {
        let pos = self.pos();
        let id = self.builder.next_id();
        self.write_modifiers(modifiers);
        self.write("type ");
        let name = self.identifier(name);
        self.write(" = ");
        self.write(type_text);
        self.write(";");
        let data = self.node_data(SyntaxKind::TypeAliasDeclaration, pos, id).with_modifiers(modifiers);
        self.push(Statement::TypeAliasDeclaration(TypeAliasDeclaration { data, name }));
        id
    }

    /// `interface Name { a: A; b: B; }`
    pub fn interface(&mut self, modifiers: ModifierFlags, name: &str, members: &[(&str, &str)]) -> NodeId {
        let pos = self.pos();
        let id = self.builder.next_id();
        self.write_modifiers(modifiers);
        self.write("interface ");
        let name = self.identifier(name);
        self.write(" {");
        for (member, member_type) in members {
            self.write(" ");
            self.write(member);
            self.write(": ");
            self.write(member_type);
            self.write(";");
        }
        self.write(" }");
        let data = self.node_data(SyntaxKind::InterfaceDeclaration, pos, id).with_modifiers(modifiers);
        self.push(Statement::InterfaceDeclaration(InterfaceDeclaration { data, name }));
        id
    }

    /// `const a = 1, b = 2;` Returns the id of each declarator, in order.
    ///
    /// `flags` selects the keyword: `CONST`, `LET`, or neither for `var`.
    pub fn variable_statement(
        &mut self,
        modifiers: ModifierFlags,
        flags: NodeFlags,
        declarators: &[Declarator<'_>],
    ) -> Vec<NodeId> {
        let pos = self.pos();
        let id = self.builder.next_id();
        self.write_modifiers(modifiers);

        let list_pos = self.pos();
        let list_id = self.builder.next_id();
        if flags.contains(NodeFlags::CONST) {
            self.write("const ");
        } else if flags.contains(NodeFlags::LET) {
            self.write("let ");
        } else {
            self.write("var ");
        }

        let mut declarations = Vec::with_capacity(declarators.len());
        for (i, declarator) in declarators.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            declarations.push(self.variable_declaration(declarator));
        }
        let ids = declarations.iter().map(|d: &VariableDeclaration<'a>| d.data.id).collect();

        let declaration_list = VariableDeclarationList {
            data: self.node_data(SyntaxKind::VariableDeclarationList, list_pos, list_id).with_flags(flags),
            declarations: alloc_vec_in(self.builder.arena, declarations),
        };
        self.write(";");
        let data = self.node_data(SyntaxKind::VariableStatement, pos, id).with_modifiers(modifiers);
        self.push(Statement::VariableStatement(VariableStatement { data, declaration_list }));
        ids
    }

    /// `function name(a: A): R {}`
    pub fn function(
        &mut self,
        modifiers: ModifierFlags,
        name: Option<&str>,
        parameters: &[(&str, &str)],
        return_type: Option<&str>,
    ) -> NodeId {
        let pos = self.pos();
        let id = self.builder.next_id();
        self.write_modifiers(modifiers);
        self.write("function");
        let name = name.map(|name| {
            self.write(" ");
            self.identifier(name)
        });
        self.write("(");
        for (i, (param, param_type)) in parameters.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.write(param);
            self.write(": ");
            self.write(param_type);
        }
        self.write(")");
        if let Some(return_type) = return_type {
            self.write(": ");
            self.write(return_type);
        }
        self.write(" {}");
        let data = self.node_data(SyntaxKind::FunctionDeclaration, pos, id).with_modifiers(modifiers);
        self.push(Statement::FunctionDeclaration(FunctionDeclaration { data, name }));
        id
    }

    /// `class Name {}`
    pub fn class(&mut self, modifiers: ModifierFlags, name: Option<&str>) -> NodeId {
        let pos = self.pos();
        let id = self.builder.next_id();
        self.write_modifiers(modifiers);
        self.write("class");
        let name = name.map(|name| {
            self.write(" ");
            self.identifier(name)
        });
        self.write(" {}");
        let data = self.node_data(SyntaxKind::ClassDeclaration, pos, id).with_modifiers(modifiers);
        self.push(Statement::ClassDeclaration(ClassDeclaration { data, name }));
        id
    }

    /// `enum Name { A, B }`
    pub fn enum_declaration(&mut self, modifiers: ModifierFlags, name: &str, members: &[&str]) -> NodeId {
        let pos = self.pos();
        let id = self.builder.next_id();
        self.write_modifiers(modifiers);
        self.write("enum ");
        let name = self.identifier(name);
        self.write(" { ");
        self.write(&members.join(", "));
        self.write(" }");
        let data = self.node_data(SyntaxKind::EnumDeclaration, pos, id).with_modifiers(modifiers);
        self.push(Statement::EnumDeclaration(EnumDeclaration { data, name }));
        id
    }

    /// `namespace Name { ... }` with the statements added by `body`.
    pub fn namespace(
        &mut self,
        modifiers: ModifierFlags,
        name: &str,
        body: impl FnOnce(&mut Self),
    ) -> NodeId {
        let pos = self.pos();
        let id = self.builder.next_id();
        self.write_modifiers(modifiers);
        self.write("namespace ");
        let name = self.identifier(name);
        self.write(" {\n");

        let outer = std::mem::take(&mut self.statements);
        body(self);
        let inner = std::mem::replace(&mut self.statements, outer);

        self.write("}");
        let data = self
            .node_data(SyntaxKind::ModuleDeclaration, pos, id)
            .with_flags(NodeFlags::NAMESPACE)
            .with_modifiers(modifiers);
        let statements = alloc_vec_in(self.builder.arena, inner);
        self.push(Statement::ModuleDeclaration(ModuleDeclaration { data, name, statements }));
        id
    }

    // ========================================================================
    // Export forms without an inline declaration
    // ========================================================================

    /// `export { a, b } [from "m"];`
    pub fn export_declaration(
        &mut self,
        is_type_only: bool,
        names: &[&str],
        module_specifier: Option<&str>,
    ) -> NodeId {
        let pos = self.pos();
        let id = self.builder.next_id();
        self.write("export ");
        if is_type_only {
            self.write("type ");
        }
        self.write("{ ");
        let mut specifiers = Vec::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            let spec_pos = self.pos();
            let spec_id = self.builder.next_id();
            let name = self.identifier(name);
            specifiers.push(ExportSpecifier {
                data: self.node_data(SyntaxKind::ExportSpecifier, spec_pos, spec_id),
                property_name: None,
                name,
            });
        }
        self.write(" }");
        self.write_module_specifier(module_specifier);
        self.write(";");
        let data = self.node_data(SyntaxKind::ExportDeclaration, pos, id);
        self.push(Statement::ExportDeclaration(ExportDeclaration {
            data,
            is_type_only,
            export_clause: Some(alloc_vec_in(self.builder.arena, specifiers)),
            module_specifier: module_specifier.map(str::to_string),
        }));
        id
    }

    /// `export * from "m";`
    pub fn export_all(&mut self, module_specifier: &str) -> NodeId {
        let pos = self.pos();
        let id = self.builder.next_id();
        self.write("export *");
        self.write_module_specifier(Some(module_specifier));
        self.write(";");
        let data = self.node_data(SyntaxKind::ExportDeclaration, pos, id);
        self.push(Statement::ExportDeclaration(ExportDeclaration {
            data,
            is_type_only: false,
            export_clause: None,
            module_specifier: Some(module_specifier.to_string()),
        }));
        id
    }

    /// `export default <expression>;` or `export = <expression>;`
    pub fn export_assignment(&mut self, is_export_equals: bool, expression: &str) -> NodeId {
        let pos = self.pos();
        let id = self.builder.next_id();
        self.write(if is_export_equals { "export = " } else { "export default " });
        self.write(expression);
        self.write(";");
        let data = self.node_data(SyntaxKind::ExportAssignment, pos, id);
        self.push(Statement::ExportAssignment(ExportAssignment { data, is_export_equals }));
        id
    }

    pub fn empty_statement(&mut self) -> NodeId {
        let pos = self.pos();
        let id = self.builder.next_id();
        self.write(";");
        let data = self.node_data(SyntaxKind::EmptyStatement, pos, id);
        self.push(Statement::EmptyStatement(data));
        id
    }

    /// Allocate the finished file in the arena.
    pub fn finish(self) -> &'a SourceFile<'a> {
        let arena = self.builder.arena;
        let id = self.builder.next_id();
        let data = NodeData::new(SyntaxKind::SourceFile, 0, self.text.len() as TextPos, id);
        let line_map = LineMap::new(&self.text);
        arena.alloc(SourceFile {
            data,
            statements: alloc_vec_in(arena, self.statements),
            file_name: self.file_name,
            text: self.text,
            line_map,
        })
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn variable_declaration(&mut self, declarator: &Declarator<'_>) -> VariableDeclaration<'a> {
        let pos = self.pos();
        let id = self.builder.next_id();
        let name = match declarator.binding {
            DeclaratorBinding::Identifier(name) => BindingName::Identifier(self.identifier(name)),
            DeclaratorBinding::Object(names) => {
                let (data, elements) = self.binding_pattern(SyntaxKind::ObjectBindingPattern, "{ ", " }", names);
                BindingName::ObjectBindingPattern(self.builder.arena.alloc(ObjectBindingPattern { data, elements }))
            }
            DeclaratorBinding::Array(names) => {
                let (data, elements) = self.binding_pattern(SyntaxKind::ArrayBindingPattern, "[", "]", names);
                BindingName::ArrayBindingPattern(self.builder.arena.alloc(ArrayBindingPattern { data, elements }))
            }
        };
        if let Some(type_text) = declarator.type_annotation {
            self.write(": ");
            self.write(type_text);
        }
        if let Some(initializer) = declarator.initializer {
            self.write(" = ");
            self.write(initializer);
        }
        VariableDeclaration {
            data: self.node_data(SyntaxKind::VariableDeclaration, pos, id),
            name,
        }
    }

    fn binding_pattern(
        &mut self,
        kind: SyntaxKind,
        open: &str,
        close: &str,
        names: &[&str],
    ) -> (NodeData, NodeList<'a, BindingElement<'a>>) {
        let pos = self.pos();
        let id = self.builder.next_id();
        self.write(open);
        let mut elements = Vec::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            let element_pos = self.pos();
            let element_id = self.builder.next_id();
            let name = self.identifier(name);
            elements.push(BindingElement {
                data: self.node_data(SyntaxKind::BindingElement, element_pos, element_id),
                property_name: None,
                name: BindingName::Identifier(name),
            });
        }
        self.write(close);
        (self.node_data(kind, pos, id), alloc_vec_in(self.builder.arena, elements))
    }

    fn identifier(&mut self, name: &str) -> Identifier {
        let pos = self.pos();
        let id = self.builder.next_id();
        self.write(name);
        Identifier {
            data: self.node_data(SyntaxKind::Identifier, pos, id),
            text: self.builder.interner.intern(name),
            text_name: name.to_string(),
        }
    }

    fn write_modifiers(&mut self, modifiers: ModifierFlags) {
        if modifiers.contains(ModifierFlags::EXPORT) {
            self.write("export ");
        }
        if modifiers.contains(ModifierFlags::DEFAULT) {
            self.write("default ");
        }
        if modifiers.contains(ModifierFlags::AMBIENT) {
            self.write("declare ");
        }
        if modifiers.contains(ModifierFlags::ABSTRACT) {
            self.write("abstract ");
        }
        if modifiers.contains(ModifierFlags::ASYNC) {
            self.write("async ");
        }
    }

    fn write_module_specifier(&mut self, module_specifier: Option<&str>) {
        if let Some(specifier) = module_specifier {
            self.write(" from \"");
            self.write(specifier);
            self.write("\"");
        }
    }

    /// Node data spanning from `pos` to the current end of text.
    fn node_data(&self, kind: SyntaxKind, pos: TextPos, id: NodeId) -> NodeData {
        NodeData::new(kind, pos, self.pos(), id)
    }

    fn push(&mut self, statement: Statement<'a>) {
        self.statements.push(statement);
        self.write("\n");
    }

    fn pos(&self) -> TextPos {
        self.text.len() as TextPos
    }

    fn write(&mut self, s: &str) {
        self.text.push_str(s);
    }
}
