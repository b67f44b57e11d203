//! Type representation for the fake checker.
//!
//! Types are stored in a TypeTable and referenced by TypeId.

use indexmap::IndexMap;
use satisfy_ast::types::{TypeFlags, TypeId};

#[derive(Debug, Clone)]
pub struct Type {
    pub id: TypeId,
    pub flags: TypeFlags,
    /// Set when the type was reached through a type alias.
    pub alias_name: Option<String>,
    pub kind: TypeKind,
}

#[derive(Debug, Clone)]
pub enum TypeKind {
    /// any, unknown, string, number, boolean, void, undefined, null, never, error
    Intrinsic { name: &'static str },
    StringLiteral { value: String },
    NumberLiteral { value: f64 },
    BooleanLiteral { value: bool },
    /// Object, function or class type.
    ObjectType {
        members: IndexMap<String, TypeId>,
        call_signatures: Vec<Signature>,
    },
    Union { types: Vec<TypeId> },
}

#[derive(Debug, Clone)]
pub struct Signature {
    pub parameters: Vec<SignatureParameter>,
    pub return_type: TypeId,
    pub min_argument_count: usize,
}

#[derive(Debug, Clone)]
pub struct SignatureParameter {
    pub name: String,
    pub type_id: TypeId,
    pub optional: bool,
}

/// Storage for every type the fake checker knows about.
#[derive(Debug)]
pub struct TypeTable {
    types: Vec<Type>,
    pub any_type: TypeId,
    pub unknown_type: TypeId,
    pub string_type: TypeId,
    pub number_type: TypeId,
    pub boolean_type: TypeId,
    pub void_type: TypeId,
    pub undefined_type: TypeId,
    pub null_type: TypeId,
    pub never_type: TypeId,
    /// The "could not be resolved" sentinel. Flagged as `any`, like a real
    /// checker's error type, so it is assignable to everything.
    pub error_type: TypeId,
}

impl TypeTable {
    pub fn new() -> Self {
        let mut table = Self {
            types: Vec::with_capacity(64),
            any_type: TypeId(0),
            unknown_type: TypeId(1),
            string_type: TypeId(2),
            number_type: TypeId(3),
            boolean_type: TypeId(4),
            void_type: TypeId(5),
            undefined_type: TypeId(6),
            null_type: TypeId(7),
            never_type: TypeId(8),
            error_type: TypeId(9),
        };

        table.create_intrinsic(TypeFlags::ANY, "any");
        table.create_intrinsic(TypeFlags::UNKNOWN, "unknown");
        table.create_intrinsic(TypeFlags::STRING, "string");
        table.create_intrinsic(TypeFlags::NUMBER, "number");
        table.create_intrinsic(TypeFlags::BOOLEAN, "boolean");
        table.create_intrinsic(TypeFlags::VOID, "void");
        table.create_intrinsic(TypeFlags::UNDEFINED, "undefined");
        table.create_intrinsic(TypeFlags::NULL, "null");
        table.create_intrinsic(TypeFlags::NEVER, "never");
        table.create_intrinsic(TypeFlags::ANY, "error");

        table
    }

    fn create_intrinsic(&mut self, flags: TypeFlags, name: &'static str) -> TypeId {
        self.add_type(flags, TypeKind::Intrinsic { name })
    }

    pub fn add_type(&mut self, flags: TypeFlags, kind: TypeKind) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(Type {
            id,
            flags,
            alias_name: None,
            kind,
        });
        id
    }

    /// Copy `target` under a new id carrying `alias_name`.
    pub fn add_alias(&mut self, alias_name: &str, target: TypeId) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        let mut aliased = self.get(target).clone();
        aliased.id = id;
        aliased.alias_name = Some(alias_name.to_string());
        self.types.push(aliased);
        id
    }

    pub fn get(&self, id: TypeId) -> &Type {
        &self.types[id.index()]
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::new()
    }
}
