//! Resolution of configured type names to oracle types.

use crate::oracle::{PrimitiveKind, TypeOracle};
use satisfy_ast::program::Program;
use satisfy_ast::types::{NodeId, TypeId};
use tracing::trace;

/// A configured type name resolved against the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedType {
    /// `number`, `string` or `boolean`.
    Primitive { kind: PrimitiveKind, type_id: TypeId },
    /// A top-level type alias or interface.
    Declared { declaration: NodeId, type_id: TypeId },
}

impl ResolvedType {
    pub fn type_id(&self) -> TypeId {
        match *self {
            ResolvedType::Primitive { type_id, .. } => type_id,
            ResolvedType::Declared { type_id, .. } => type_id,
        }
    }
}

/// Resolves type names over one immutable program snapshot.
///
/// Nothing is cached; each call rescans the program, so two calls with the
/// same name always agree.
pub struct TypeResolver<'p, 'a, O: ?Sized> {
    program: &'p Program<'a>,
    oracle: &'p O,
}

impl<'p, 'a, O: TypeOracle + ?Sized> TypeResolver<'p, 'a, O> {
    pub fn new(program: &'p Program<'a>, oracle: &'p O) -> Self {
        Self { program, oracle }
    }

    /// Resolve `type_name`, or `None` if nothing by that name exists.
    ///
    /// The three primitive keywords resolve without looking at declarations,
    /// so a user type that shadows one of them is never picked. Any other name
    /// matches the first top-level type alias or interface with exactly that
    /// identifier, searching files in program order.
    pub fn resolve(&self, type_name: &str) -> Option<ResolvedType> {
        if let Some(kind) = PrimitiveKind::from_keyword(type_name) {
            return Some(ResolvedType::Primitive {
                kind,
                type_id: self.oracle.keyword_type(kind),
            });
        }

        // A name that was never interned cannot belong to any declaration.
        let Some(key) = self.program.interner().get(type_name) else {
            trace!(type_name, "no identifier with this name in the program");
            return None;
        };

        // Keys from another builder's interner can collide, so the text must match too.
        let found = self
            .program
            .type_declarations()
            .find(|d| d.name.text == key && d.name.text_name == type_name);
        match found {
            Some(declaration) => {
                trace!(
                    type_name,
                    file = %declaration.file.file_name,
                    kind = %declaration.kind,
                    "resolved declared type"
                );
                Some(ResolvedType::Declared {
                    declaration: declaration.node,
                    type_id: self.oracle.declared_type_of(declaration.node),
                })
            }
            None => {
                trace!(type_name, "no type alias or interface declares this name");
                None
            }
        }
    }
}
