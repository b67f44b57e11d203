//! satisfy_testing: A table-driven type oracle for tests and benchmarks.
//!
//! `FakeChecker` stands in for a real type checker. Tests declare the types
//! they need, bind them to syntax nodes, and hand the checker to the rule.
//! Assignability follows TypeScript's structural rules closely enough for
//! primitives, literals, unions, object members and call signatures.

mod checker;
mod types;

pub use checker::FakeChecker;
pub use types::{Signature, SignatureParameter, Type, TypeKind, TypeTable};
