use bumpalo::Bump;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use satisfy_ast::{AstBuilder, Declarator, ModifierFlags, NodeFlags};
use satisfy_core::StringInterner;
use satisfy_lint::ExportsSatisfy;
use satisfy_testing::FakeChecker;
use serde_json::json;

const EXPORT_COUNT: usize = 200;

fn bench_check_program(c: &mut Criterion) {
    let arena = Bump::new();
    let builder = AstBuilder::new(&arena, StringInterner::new());
    let mut checker = FakeChecker::new();

    let s = checker.string_type();
    let v = checker.void_type();
    let handler = checker.function_type(&[("name", s)], v);
    let handler = checker.alias("Handler", handler);

    let mut types = builder.source_file("types.ts");
    let node = types.type_alias(ModifierFlags::EXPORT, "Handler", "(name: string) => void");
    checker.bind(node, handler);
    let types = types.finish();

    let mut handlers = builder.source_file("handlers.ts");
    let names: Vec<String> = (0..EXPORT_COUNT).map(|i| format!("handler{}", i)).collect();
    for (i, name) in names.iter().enumerate() {
        let ids = handlers.variable_statement(
            ModifierFlags::EXPORT,
            NodeFlags::CONST,
            &[Declarator::identifier(name).init("(name: string) => {}")],
        );
        // Every tenth export is a string and fails the check.
        checker.bind(ids[0], if i % 10 == 0 { s } else { handler });
    }
    let handlers = handlers.finish();

    let program = builder.program(vec![types, handlers]);
    let rule = ExportsSatisfy::from_options(&json!({ "handler0": "string", "*": "Handler" })).unwrap();

    c.bench_function("check_program_200_exports", |b| {
        b.iter(|| {
            let diagnostics = rule.check_program(black_box(&program), &checker);
            black_box(diagnostics);
        });
    });
}

criterion_group!(benches, bench_check_program);
criterion_main!(benches);
