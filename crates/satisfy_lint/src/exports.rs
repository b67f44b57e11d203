//! The entities an export statement introduces.

use satisfy_ast::node::{BindingName, Identifier, Statement};
use satisfy_ast::types::NodeId;

/// One exported binding, classified by declaration shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportedEntity<'a> {
    /// A variable declarator bound to a plain identifier. `node` is the declarator.
    Variable { name: &'a str, node: NodeId },
    Function { name: &'a str, node: NodeId },
    Class { name: &'a str, node: NodeId },
    /// A binding the rule does not check: a destructuring pattern, or an
    /// anonymous function or class.
    Unsupported { node: NodeId },
}

impl<'a> ExportedEntity<'a> {
    fn named(identifier: &'a Identifier) -> &'a str {
        identifier.text_name.as_str()
    }

    /// The export name and the node whose type is checked, unless unsupported.
    pub fn name_and_node(&self) -> Option<(&'a str, NodeId)> {
        match *self {
            ExportedEntity::Variable { name, node }
            | ExportedEntity::Function { name, node }
            | ExportedEntity::Class { name, node } => Some((name, node)),
            ExportedEntity::Unsupported { .. } => None,
        }
    }
}

/// Classify what a statement declares.
///
/// Only variable statements, function declarations and class declarations
/// produce entities; every other statement produces none. A variable
/// statement produces one entity per declarator, in source order.
pub fn exported_entities<'a>(statement: &'a Statement<'a>) -> Vec<ExportedEntity<'a>> {
    match statement {
        Statement::VariableStatement(n) => n
            .declaration_list
            .declarations
            .iter()
            .map(|declaration| match &declaration.name {
                BindingName::Identifier(id) => ExportedEntity::Variable {
                    name: ExportedEntity::named(id),
                    node: declaration.data.id,
                },
                BindingName::ObjectBindingPattern(_) | BindingName::ArrayBindingPattern(_) => {
                    ExportedEntity::Unsupported {
                        node: declaration.data.id,
                    }
                }
            })
            .collect(),
        Statement::FunctionDeclaration(n) => vec![match &n.name {
            Some(id) => ExportedEntity::Function {
                name: ExportedEntity::named(id),
                node: n.data.id,
            },
            None => ExportedEntity::Unsupported { node: n.data.id },
        }],
        Statement::ClassDeclaration(n) => vec![match &n.name {
            Some(id) => ExportedEntity::Class {
                name: ExportedEntity::named(id),
                node: n.data.id,
            },
            None => ExportedEntity::Unsupported { node: n.data.id },
        }],
        Statement::InterfaceDeclaration(_)
        | Statement::TypeAliasDeclaration(_)
        | Statement::EnumDeclaration(_)
        | Statement::ModuleDeclaration(_)
        | Statement::ExportDeclaration(_)
        | Statement::ExportAssignment(_)
        | Statement::EmptyStatement(_) => Vec::new(),
    }
}
