//! Flag sets and handle types shared by the tree and the type oracle.

use std::fmt;

bitflags::bitflags! {
    /// Flags for syntax nodes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u32 {
        const NONE         = 0;
        const LET          = 1 << 0;
        const CONST        = 1 << 1;
        const USING        = 1 << 2;
        const AWAIT_USING  = 1 << 3;
        const NAMESPACE    = 1 << 4;

        const BLOCK_SCOPED = Self::LET.bits() | Self::CONST.bits() | Self::USING.bits() | Self::AWAIT_USING.bits();
    }
}

bitflags::bitflags! {
    /// Modifiers written on a declaration.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ModifierFlags: u32 {
        const NONE     = 0;
        const EXPORT   = 1 << 0;
        const AMBIENT  = 1 << 1;
        const DEFAULT  = 1 << 2;
        const ABSTRACT = 1 << 3;
        const ASYNC    = 1 << 4;
        const CONST    = 1 << 5;

        const EXPORT_DEFAULT = Self::EXPORT.bits() | Self::DEFAULT.bits();
    }
}

bitflags::bitflags! {
    /// Flags describing what kind of type a `TypeId` refers to.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TypeFlags: u32 {
        const NONE            = 0;
        const ANY             = 1 << 0;
        const UNKNOWN         = 1 << 1;
        const STRING          = 1 << 2;
        const NUMBER          = 1 << 3;
        const BOOLEAN         = 1 << 4;
        const STRING_LITERAL  = 1 << 5;
        const NUMBER_LITERAL  = 1 << 6;
        const BOOLEAN_LITERAL = 1 << 7;
        const VOID            = 1 << 8;
        const UNDEFINED       = 1 << 9;
        const NULL            = 1 << 10;
        const NEVER           = 1 << 11;
        const OBJECT          = 1 << 12;
        const UNION           = 1 << 13;

        const STRING_LIKE  = Self::STRING.bits() | Self::STRING_LITERAL.bits();
        const NUMBER_LIKE  = Self::NUMBER.bits() | Self::NUMBER_LITERAL.bits();
        const BOOLEAN_LIKE = Self::BOOLEAN.bits() | Self::BOOLEAN_LITERAL.bits();
        const NULLABLE     = Self::NULL.bits() | Self::UNDEFINED.bits();
    }
}

/// Handle to a type owned by the type oracle.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct TypeId(pub u32);

impl TypeId {
    pub const INVALID: TypeId = TypeId(u32::MAX);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeId({})", self.0)
    }
}

/// Handle to a syntax node, unique across a program.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct NodeId(pub u32);

impl NodeId {
    pub const INVALID: NodeId = NodeId(u32::MAX);

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}
