//! The type-checker capabilities the rule relies on.

use satisfy_ast::types::{NodeId, TypeId};
use std::fmt;

/// The built-in types a configuration may name directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveKind {
    Number,
    String,
    Boolean,
}

impl PrimitiveKind {
    /// Map a keyword to its primitive. Only exact lowercase keywords match.
    pub fn from_keyword(name: &str) -> Option<Self> {
        match name {
            "number" => Some(PrimitiveKind::Number),
            "string" => Some(PrimitiveKind::String),
            "boolean" => Some(PrimitiveKind::Boolean),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            PrimitiveKind::Number => "number",
            PrimitiveKind::String => "string",
            PrimitiveKind::Boolean => "boolean",
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A read-only view of a type checker for one program.
///
/// The rule never mutates the oracle. Implementations that memoize do so
/// behind interior mutability.
pub trait TypeOracle {
    /// The type a primitive keyword denotes.
    fn keyword_type(&self, kind: PrimitiveKind) -> TypeId;

    /// The type introduced by a type alias or interface declaration.
    fn declared_type_of(&self, declaration: NodeId) -> TypeId;

    /// The inferred type of a value declaration (variable declarator,
    /// function or class).
    fn type_at_location(&self, node: NodeId) -> TypeId;

    fn is_type_assignable_to(&self, source: TypeId, target: TypeId) -> bool;

    /// Whether `ty` is the checker's "could not be resolved" sentinel.
    fn is_error_type(&self, ty: TypeId) -> bool;

    /// The alias name a type was reached through, if any.
    fn alias_name(&self, ty: TypeId) -> Option<String>;
}

impl<T: TypeOracle + ?Sized> TypeOracle for &T {
    fn keyword_type(&self, kind: PrimitiveKind) -> TypeId {
        (**self).keyword_type(kind)
    }

    fn declared_type_of(&self, declaration: NodeId) -> TypeId {
        (**self).declared_type_of(declaration)
    }

    fn type_at_location(&self, node: NodeId) -> TypeId {
        (**self).type_at_location(node)
    }

    fn is_type_assignable_to(&self, source: TypeId, target: TypeId) -> bool {
        (**self).is_type_assignable_to(source, target)
    }

    fn is_error_type(&self, ty: TypeId) -> bool {
        (**self).is_error_type(ty)
    }

    fn alias_name(&self, ty: TypeId) -> Option<String> {
        (**self).alias_name(ty)
    }
}
