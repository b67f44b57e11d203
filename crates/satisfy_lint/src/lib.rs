//! satisfy_lint: The `exports-satisfy` lint rule.
//!
//! The rule checks every named export of a module against an expected type
//! chosen by export name (or the `*` wildcard) and reports exports whose
//! inferred type is not assignable to it. Type inference and assignability
//! come from an injected [`TypeOracle`]; the rule only resolves type names
//! and decides which diagnostic to raise.

mod context;
mod exports;
mod options;
mod oracle;
mod resolver;
mod rule;

pub use context::RuleContext;
pub use exports::{exported_entities, ExportedEntity};
pub use options::{ExportTypeMap, OptionsError, WILDCARD};
pub use oracle::{PrimitiveKind, TypeOracle};
pub use resolver::{ResolvedType, TypeResolver};
pub use rule::{ExportsSatisfy, RuleKind, RuleMeta, ERROR_TYPE_PLACEHOLDER};
