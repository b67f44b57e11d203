//! Type name resolution tests.

use bumpalo::Bump;
use satisfy_ast::{AstBuilder, Declarator, ModifierFlags, NodeFlags};
use satisfy_core::StringInterner;
use satisfy_lint::{PrimitiveKind, ResolvedType, TypeOracle, TypeResolver};
use satisfy_testing::FakeChecker;

#[test]
fn test_primitives_resolve_without_declarations() {
    let arena = Bump::new();
    let builder = AstBuilder::new(&arena, StringInterner::new());
    let file = builder.source_file("empty.ts").finish();
    let program = builder.program(vec![file]);
    let checker = FakeChecker::new();
    let resolver = TypeResolver::new(&program, &checker);

    for (name, kind, expected) in [
        ("number", PrimitiveKind::Number, checker.number_type()),
        ("string", PrimitiveKind::String, checker.string_type()),
        ("boolean", PrimitiveKind::Boolean, checker.boolean_type()),
    ] {
        assert_eq!(
            resolver.resolve(name),
            Some(ResolvedType::Primitive { kind, type_id: expected }),
            "resolving {}",
            name
        );
    }
}

#[test]
fn test_primitive_wins_over_declaration_with_same_name() {
    let arena = Bump::new();
    let builder = AstBuilder::new(&arena, StringInterner::new());
    let mut file = builder.source_file("shadow.ts");
    let shadow = file.interface(ModifierFlags::NONE, "number", &[("fake", "true")]);
    let file = file.finish();

    let mut checker = FakeChecker::new();
    let t = checker.boolean_type();
    let fake = checker.object_type(&[("fake", t)]);
    checker.bind(shadow, fake);

    let program = builder.program(vec![file]);
    let resolver = TypeResolver::new(&program, &checker);
    assert_eq!(
        resolver.resolve("number").map(|r| r.type_id()),
        Some(checker.number_type())
    );
}

#[test]
fn test_alias_and_interface_resolve() {
    let arena = Bump::new();
    let builder = AstBuilder::new(&arena, StringInterner::new());
    let mut file = builder.source_file("types.ts");
    let alias = file.type_alias(ModifierFlags::EXPORT, "StartFn", "(name: string) => void");
    let shape = file.interface(ModifierFlags::NONE, "Shape", &[("area", "number")]);
    let file = file.finish();

    let mut checker = FakeChecker::new();
    let s = checker.string_type();
    let v = checker.void_type();
    let n = checker.number_type();
    let start_fn = checker.function_type(&[("name", s)], v);
    let area = checker.object_type(&[("area", n)]);
    checker.bind(alias, start_fn);
    checker.bind(shape, area);

    let program = builder.program(vec![file]);
    let resolver = TypeResolver::new(&program, &checker);
    assert_eq!(
        resolver.resolve("StartFn"),
        Some(ResolvedType::Declared { declaration: alias, type_id: start_fn })
    );
    assert_eq!(
        resolver.resolve("Shape"),
        Some(ResolvedType::Declared { declaration: shape, type_id: area })
    );
}

#[test]
fn test_unknown_names_do_not_resolve() {
    let arena = Bump::new();
    let builder = AstBuilder::new(&arena, StringInterner::new());
    let mut file = builder.source_file("values.ts");
    // `MyType` exists, but only as a value.
    file.variable_statement(
        ModifierFlags::EXPORT,
        NodeFlags::CONST,
        &[Declarator::identifier("MyType").init("1")],
    );
    file.namespace(ModifierFlags::NONE, "Inner", |ns| {
        ns.type_alias(ModifierFlags::EXPORT, "Hidden", "string");
    });
    let file = file.finish();

    let checker = FakeChecker::new();
    let program = builder.program(vec![file]);
    let resolver = TypeResolver::new(&program, &checker);
    assert_eq!(resolver.resolve("UndefinedType"), None);
    assert_eq!(resolver.resolve("MyType"), None);
    assert_eq!(resolver.resolve("Hidden"), None);
    assert_eq!(resolver.resolve("Number"), None);
    assert_eq!(resolver.resolve(""), None);
}

#[test]
fn test_declarations_in_other_files_resolve_first_match_wins() {
    let arena = Bump::new();
    let builder = AstBuilder::new(&arena, StringInterner::new());

    let mut main = builder.source_file("main.ts");
    main.variable_statement(
        ModifierFlags::EXPORT,
        NodeFlags::CONST,
        &[Declarator::identifier("config").typed("Config").init("{}")],
    );
    let main = main.finish();

    let mut first = builder.source_file("types/a.ts");
    let first_config = first.interface(ModifierFlags::EXPORT, "Config", &[("debug", "boolean")]);
    let first = first.finish();

    let mut second = builder.source_file("types/b.ts");
    let second_config = second.type_alias(ModifierFlags::EXPORT, "Config", "{ verbose: boolean }");
    let second = second.finish();

    let mut checker = FakeChecker::new();
    let b = checker.boolean_type();
    let debug = checker.object_type(&[("debug", b)]);
    let verbose = checker.object_type(&[("verbose", b)]);
    checker.bind(first_config, debug);
    checker.bind(second_config, verbose);

    let program = builder.program(vec![main, first, second]);
    let resolver = TypeResolver::new(&program, &checker);
    let resolved = resolver.resolve("Config");
    assert_eq!(
        resolved,
        Some(ResolvedType::Declared { declaration: first_config, type_id: debug })
    );
    // Same snapshot, same answer.
    assert_eq!(resolver.resolve("Config"), resolved);
    assert!(!checker.is_error_type(debug));
}

#[test]
fn test_declarations_from_another_builder_never_match_a_different_name() {
    let arena = Bump::new();

    // Both builders hand out their first key to different names.
    let foreign = AstBuilder::new(&arena, StringInterner::new());
    let mut file = foreign.source_file("foreign.ts");
    let foo = file.type_alias(ModifierFlags::EXPORT, "Foo", "string");
    let foreign_file = file.finish();

    let builder = AstBuilder::new(&arena, StringInterner::new());
    let mut file = builder.source_file("local.ts");
    file.variable_statement(
        ModifierFlags::EXPORT,
        NodeFlags::CONST,
        &[Declarator::identifier("Bar").init("1")],
    );
    let local_file = file.finish();

    let mut checker = FakeChecker::new();
    let s = checker.string_type();
    checker.bind(foo, s);

    let program = builder.program(vec![foreign_file, local_file]);
    let resolver = TypeResolver::new(&program, &checker);
    assert_eq!(resolver.resolve("Bar"), None);
}
