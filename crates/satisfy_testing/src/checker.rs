//! The fake checker: a type table plus node bindings.

use crate::types::{Signature, SignatureParameter, TypeKind, TypeTable};
use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use satisfy_ast::types::{NodeId, TypeFlags, TypeId};
use satisfy_lint::{PrimitiveKind, TypeOracle};
use std::cell::RefCell;

/// A type oracle whose answers are declared up front by the test.
///
/// Nodes that were never bound report the error type, the way a checker
/// reports a declaration it could not type.
#[derive(Debug)]
pub struct FakeChecker {
    pub type_table: TypeTable,
    node_types: FxHashMap<NodeId, TypeId>,
    strict_null_checks: bool,
    /// Memoized assignability results. Also breaks cycles through
    /// recursive object types.
    assignability_cache: RefCell<FxHashMap<(TypeId, TypeId), bool>>,
}

impl FakeChecker {
    /// A checker with `strictNullChecks` off.
    pub fn new() -> Self {
        Self {
            type_table: TypeTable::new(),
            node_types: FxHashMap::default(),
            strict_null_checks: false,
            assignability_cache: RefCell::new(FxHashMap::default()),
        }
    }

    pub fn with_strict_null_checks(mut self, strict_null_checks: bool) -> Self {
        self.strict_null_checks = strict_null_checks;
        self
    }

    // ========================================================================
    // Type construction
    // ========================================================================

    pub fn string_type(&self) -> TypeId {
        self.type_table.string_type
    }

    pub fn number_type(&self) -> TypeId {
        self.type_table.number_type
    }

    pub fn boolean_type(&self) -> TypeId {
        self.type_table.boolean_type
    }

    pub fn void_type(&self) -> TypeId {
        self.type_table.void_type
    }

    pub fn null_type(&self) -> TypeId {
        self.type_table.null_type
    }

    pub fn undefined_type(&self) -> TypeId {
        self.type_table.undefined_type
    }

    pub fn any_type(&self) -> TypeId {
        self.type_table.any_type
    }

    pub fn never_type(&self) -> TypeId {
        self.type_table.never_type
    }

    pub fn error_type(&self) -> TypeId {
        self.type_table.error_type
    }

    pub fn string_literal(&mut self, value: &str) -> TypeId {
        self.type_table.add_type(
            TypeFlags::STRING_LITERAL,
            TypeKind::StringLiteral {
                value: value.to_string(),
            },
        )
    }

    pub fn number_literal(&mut self, value: f64) -> TypeId {
        self.type_table
            .add_type(TypeFlags::NUMBER_LITERAL, TypeKind::NumberLiteral { value })
    }

    pub fn boolean_literal(&mut self, value: bool) -> TypeId {
        self.type_table
            .add_type(TypeFlags::BOOLEAN_LITERAL, TypeKind::BooleanLiteral { value })
    }

    /// `{ a: A; b: B }`
    pub fn object_type(&mut self, members: &[(&str, TypeId)]) -> TypeId {
        let members: IndexMap<String, TypeId> = members
            .iter()
            .map(|(name, type_id)| (name.to_string(), *type_id))
            .collect();
        self.type_table.add_type(
            TypeFlags::OBJECT,
            TypeKind::ObjectType {
                members,
                call_signatures: vec![],
            },
        )
    }

    /// `(a: A, b: B) => R`, every parameter required.
    pub fn function_type(&mut self, parameters: &[(&str, TypeId)], return_type: TypeId) -> TypeId {
        let parameters: Vec<SignatureParameter> = parameters
            .iter()
            .map(|(name, type_id)| SignatureParameter {
                name: name.to_string(),
                type_id: *type_id,
                optional: false,
            })
            .collect();
        let signature = Signature {
            min_argument_count: parameters.len(),
            parameters,
            return_type,
        };
        self.type_table.add_type(
            TypeFlags::OBJECT,
            TypeKind::ObjectType {
                members: IndexMap::new(),
                call_signatures: vec![signature],
            },
        )
    }

    /// `A | B`. A single constituent is returned as is.
    pub fn union_type(&mut self, types: &[TypeId]) -> TypeId {
        if let [single] = types {
            return *single;
        }
        self.type_table.add_type(
            TypeFlags::UNION,
            TypeKind::Union {
                types: types.to_vec(),
            },
        )
    }

    /// `type Name = <target>`
    pub fn alias(&mut self, name: &str, target: TypeId) -> TypeId {
        self.type_table.add_alias(name, target)
    }

    /// An error type reached through an alias named `name`.
    pub fn error_alias(&mut self, name: &str) -> TypeId {
        let error_type = self.type_table.error_type;
        self.type_table.add_alias(name, error_type)
    }

    // ========================================================================
    // Node bindings
    // ========================================================================

    /// Record the type a node has: the declared type for a type alias or
    /// interface, the inferred type for a value declaration.
    pub fn bind(&mut self, node: NodeId, type_id: TypeId) {
        self.node_types.insert(node, type_id);
    }

    fn type_of_node(&self, node: NodeId) -> TypeId {
        self.node_types
            .get(&node)
            .copied()
            .unwrap_or(self.type_table.error_type)
    }

    // ========================================================================
    // Type relationship checking
    // ========================================================================

    fn assignable(&self, source: TypeId, target: TypeId) -> bool {
        if source == target {
            return true;
        }

        let cached = self.assignability_cache.borrow().get(&(source, target)).copied();
        if let Some(result) = cached {
            return result;
        }

        // Optimistic entry before recursing: a cycle back to this pair
        // assumes assignable.
        self.assignability_cache
            .borrow_mut()
            .insert((source, target), true);
        let result = self.assignable_worker(source, target);
        self.assignability_cache
            .borrow_mut()
            .insert((source, target), result);
        result
    }

    fn assignable_worker(&self, source: TypeId, target: TypeId) -> bool {
        let source_type = self.type_table.get(source);
        let target_type = self.type_table.get(target);
        let source_flags = source_type.flags;
        let target_flags = target_type.flags;

        if target_flags.intersects(TypeFlags::ANY | TypeFlags::UNKNOWN) {
            return true;
        }
        if source_flags.intersects(TypeFlags::ANY | TypeFlags::NEVER) {
            return true;
        }

        if source_flags.intersects(TypeFlags::NULLABLE) {
            if !self.strict_null_checks {
                return true;
            }
            if source_flags.contains(TypeFlags::UNDEFINED) && target_flags.contains(TypeFlags::VOID) {
                return true;
            }
        }

        // Union source: every constituent assignable to the target. Checked
        // before a union target so `A | B` fits a distinct `A | B`.
        if let TypeKind::Union { types } = &source_type.kind {
            return types.iter().all(|&t| self.assignable(t, target));
        }

        // Union target: assignable to at least one constituent.
        if let TypeKind::Union { types } = &target_type.kind {
            return types.iter().any(|&t| self.assignable(source, t));
        }

        match (&source_type.kind, &target_type.kind) {
            (TypeKind::StringLiteral { value: a }, TypeKind::StringLiteral { value: b }) => return a == b,
            (TypeKind::NumberLiteral { value: a }, TypeKind::NumberLiteral { value: b }) => return a == b,
            (TypeKind::BooleanLiteral { value: a }, TypeKind::BooleanLiteral { value: b }) => return a == b,
            _ => {}
        }

        if target_flags.contains(TypeFlags::STRING) && source_flags.intersects(TypeFlags::STRING_LIKE) {
            return true;
        }
        if target_flags.contains(TypeFlags::NUMBER) && source_flags.intersects(TypeFlags::NUMBER_LIKE) {
            return true;
        }
        if target_flags.contains(TypeFlags::BOOLEAN) && source_flags.intersects(TypeFlags::BOOLEAN_LIKE) {
            return true;
        }
        if target_flags.contains(TypeFlags::VOID) && source_flags.contains(TypeFlags::VOID) {
            return true;
        }

        match (&source_type.kind, &target_type.kind) {
            (
                TypeKind::ObjectType {
                    members: source_members,
                    call_signatures: source_signatures,
                },
                TypeKind::ObjectType {
                    members: target_members,
                    call_signatures: target_signatures,
                },
            ) => {
                let members_ok = target_members.iter().all(|(name, &target_prop)| {
                    source_members
                        .get(name)
                        .is_some_and(|&source_prop| self.assignable(source_prop, target_prop))
                });
                members_ok
                    && target_signatures.iter().all(|target_sig| {
                        source_signatures
                            .iter()
                            .any(|source_sig| self.signature_assignable(source_sig, target_sig))
                    })
            }
            _ => false,
        }
    }

    /// A source signature fits a target signature when it needs no more
    /// arguments than the target supplies, each target parameter is
    /// assignable to the matching source parameter, and its return type fits
    /// (anything fits a `void` return).
    fn signature_assignable(&self, source: &Signature, target: &Signature) -> bool {
        if source.min_argument_count > target.parameters.len() {
            return false;
        }
        let params_ok = source
            .parameters
            .iter()
            .zip(&target.parameters)
            .all(|(s, t)| self.assignable(t.type_id, s.type_id));
        if !params_ok {
            return false;
        }
        let target_return = self.type_table.get(target.return_type);
        target_return.flags.contains(TypeFlags::VOID)
            || self.assignable(source.return_type, target.return_type)
    }
}

impl Default for FakeChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeOracle for FakeChecker {
    fn keyword_type(&self, kind: PrimitiveKind) -> TypeId {
        match kind {
            PrimitiveKind::Number => self.type_table.number_type,
            PrimitiveKind::String => self.type_table.string_type,
            PrimitiveKind::Boolean => self.type_table.boolean_type,
        }
    }

    fn declared_type_of(&self, declaration: NodeId) -> TypeId {
        self.type_of_node(declaration)
    }

    fn type_at_location(&self, node: NodeId) -> TypeId {
        self.type_of_node(node)
    }

    fn is_type_assignable_to(&self, source: TypeId, target: TypeId) -> bool {
        self.assignable(source, target)
    }

    fn is_error_type(&self, ty: TypeId) -> bool {
        matches!(self.type_table.get(ty).kind, TypeKind::Intrinsic { name: "error" })
    }

    fn alias_name(&self, ty: TypeId) -> Option<String> {
        self.type_table.get(ty).alias_name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_assignability() {
        let mut checker = FakeChecker::new();
        let hello = checker.string_literal("hello");
        assert!(checker.is_type_assignable_to(hello, checker.string_type()));
        assert!(!checker.is_type_assignable_to(checker.string_type(), hello));
        assert!(!checker.is_type_assignable_to(checker.number_type(), checker.string_type()));
        let t = checker.boolean_literal(true);
        assert!(checker.is_type_assignable_to(t, checker.boolean_type()));
    }

    #[test]
    fn test_null_depends_on_strictness() {
        let mut loose = FakeChecker::new();
        let shape = loose.object_type(&[("name", loose.string_type())]);
        assert!(loose.is_type_assignable_to(loose.null_type(), shape));

        let mut strict = FakeChecker::new().with_strict_null_checks(true);
        let shape = strict.object_type(&[("name", strict.string_type())]);
        assert!(!strict.is_type_assignable_to(strict.null_type(), shape));
        let nullable = strict.union_type(&[shape, strict.null_type()]);
        assert!(strict.is_type_assignable_to(strict.null_type(), nullable));
        assert!(strict.is_type_assignable_to(strict.undefined_type(), strict.void_type()));
    }

    #[test]
    fn test_object_members() {
        let mut checker = FakeChecker::new();
        let s = checker.string_type();
        let n = checker.number_type();
        let target = checker.object_type(&[("name", s)]);
        let wider = checker.object_type(&[("name", s), ("age", n)]);
        let wrong = checker.object_type(&[("name", n)]);
        assert!(checker.is_type_assignable_to(wider, target));
        assert!(!checker.is_type_assignable_to(target, wider));
        assert!(!checker.is_type_assignable_to(wrong, target));
        assert!(!checker.is_type_assignable_to(s, target));
    }

    #[test]
    fn test_function_signatures() {
        let mut checker = FakeChecker::new();
        let s = checker.string_type();
        let n = checker.number_type();
        let v = checker.void_type();
        let start_fn = checker.function_type(&[("name", s)], v);
        let same = checker.function_type(&[("name", s)], v);
        let fewer = checker.function_type(&[], n);
        let wrong_param = checker.function_type(&[("num", n)], v);
        let more = checker.function_type(&[("a", s), ("b", s)], v);
        let empty = checker.object_type(&[]);

        assert!(checker.is_type_assignable_to(same, start_fn));
        assert!(checker.is_type_assignable_to(fewer, start_fn));
        assert!(!checker.is_type_assignable_to(wrong_param, start_fn));
        assert!(!checker.is_type_assignable_to(more, start_fn));
        assert!(!checker.is_type_assignable_to(empty, start_fn));
    }

    #[test]
    fn test_error_type_and_aliases() {
        let mut checker = FakeChecker::new();
        let missing = checker.error_alias("StartFn");
        assert!(checker.is_error_type(checker.error_type()));
        assert!(checker.is_error_type(missing));
        assert_eq!(checker.alias_name(missing).as_deref(), Some("StartFn"));
        assert_eq!(checker.alias_name(checker.error_type()), None);

        let s = checker.string_type();
        let id = checker.alias("Id", s);
        assert!(!checker.is_error_type(id));
        assert!(checker.is_type_assignable_to(s, id));
    }

    #[test]
    fn test_unbound_nodes_are_error_typed() {
        let mut checker = FakeChecker::new();
        checker.bind(NodeId(1), checker.number_type());
        assert_eq!(checker.type_at_location(NodeId(1)), checker.number_type());
        assert!(checker.is_error_type(checker.type_at_location(NodeId(2))));
        assert!(checker.is_error_type(checker.declared_type_of(NodeId(3))));
    }

    #[test]
    fn test_union_assignable_to_equal_union() {
        let mut checker = FakeChecker::new();
        let s = checker.string_type();
        let n = checker.number_type();
        let b = checker.boolean_type();
        let union = checker.union_type(&[s, n]);
        let id = checker.alias("Id", union);
        let fresh = checker.union_type(&[n, s]);
        let wider = checker.union_type(&[s, n, b]);

        assert!(checker.is_type_assignable_to(union, id));
        assert!(checker.is_type_assignable_to(fresh, union));
        assert!(checker.is_type_assignable_to(union, wider));
        assert!(!checker.is_type_assignable_to(wider, union));
        assert!(checker.is_type_assignable_to(s, id));
    }
}
