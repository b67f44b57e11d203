//! The `exports-satisfy` rule.

use crate::context::RuleContext;
use crate::exports::exported_entities;
use crate::options::{ExportTypeMap, OptionsError};
use crate::oracle::TypeOracle;
use crate::resolver::TypeResolver;
use satisfy_ast::node::{NodeData, SourceFile};
use satisfy_ast::program::Program;
use satisfy_ast::types::NodeId;
use satisfy_diagnostics::{messages, DiagnosticCollection, DiagnosticData, DiagnosticMessage};
use serde_json::{json, Value};
use tracing::debug;

/// Name reported for an export whose own type is the checker's error type
/// and carries no alias name.
pub const ERROR_TYPE_PLACEHOLDER: &str = "<error>";

/// What kind of issue a rule reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    /// Code that is likely wrong.
    Problem,
}

/// Static description of a rule for lint hosts.
#[derive(Debug, Clone)]
pub struct RuleMeta {
    pub name: &'static str,
    pub kind: RuleKind,
    pub description: &'static str,
    pub messages: &'static [DiagnosticMessage],
}

/// Checks that every named export is assignable to the type configured for it.
#[derive(Debug, Clone, Default)]
pub struct ExportsSatisfy {
    type_map: ExportTypeMap,
}

impl ExportsSatisfy {
    pub const META: RuleMeta = RuleMeta {
        name: messages::EXPORTS_SATISFY,
        kind: RuleKind::Problem,
        description: "Ensure all exports satisfy certain types",
        messages: &[messages::INVALID_EXPORT_TYPE, messages::UNRESOLVED_TYPE],
    };

    pub fn new(type_map: ExportTypeMap) -> Self {
        Self { type_map }
    }

    /// Build the rule from host-supplied JSON options.
    pub fn from_options(options: &Value) -> Result<Self, OptionsError> {
        ExportTypeMap::from_value(options).map(Self::new)
    }

    /// JSON schema of the rule options.
    pub fn options_schema() -> Value {
        json!([
            {
                "type": "object",
                "additionalProperties": { "type": "string" }
            }
        ])
    }

    pub fn type_map(&self) -> &ExportTypeMap {
        &self.type_map
    }

    /// Check every file of the program, in program order.
    pub fn check_program<O: TypeOracle + ?Sized>(
        &self,
        program: &Program<'_>,
        oracle: &O,
    ) -> DiagnosticCollection {
        let mut diagnostics = DiagnosticCollection::new();
        for file in program.source_files() {
            diagnostics.extend(self.check_source_file(program, oracle, file));
        }
        diagnostics
    }

    /// Check the named exports of one file.
    ///
    /// Every export is checked on its own; an export that cannot be resolved
    /// is reported and checking moves on to the next one.
    pub fn check_source_file<O: TypeOracle + ?Sized>(
        &self,
        program: &Program<'_>,
        oracle: &O,
        file: &SourceFile<'_>,
    ) -> DiagnosticCollection {
        let resolver = TypeResolver::new(program, oracle);
        let mut ctx = RuleContext::new(file);

        for statement in file.exported_declarations() {
            for entity in exported_entities(statement) {
                match entity.name_and_node() {
                    Some((name, node)) => {
                        self.check_export(&mut ctx, &resolver, oracle, statement.data(), name, node)
                    }
                    None => {
                        debug!(
                            file = %file.file_name,
                            kind = %statement.kind(),
                            "skipping export without a plain identifier name"
                        );
                    }
                }
            }
        }

        ctx.into_diagnostics()
    }

    fn check_export<O: TypeOracle + ?Sized>(
        &self,
        ctx: &mut RuleContext<'_, '_>,
        resolver: &TypeResolver<'_, '_, O>,
        oracle: &O,
        statement: &NodeData,
        export_name: &str,
        node: NodeId,
    ) {
        let Some(type_name) = self.type_map.expected_type_for(export_name) else {
            debug!(export_name, "no expected type configured");
            return;
        };

        let Some(expected) = resolver.resolve(type_name) else {
            debug!(export_name, type_name, "expected type could not be resolved");
            ctx.report(
                statement,
                &messages::UNRESOLVED_TYPE,
                DiagnosticData::new(export_name, type_name),
            );
            return;
        };

        let actual = oracle.type_at_location(node);
        if oracle.is_error_type(actual) {
            let display_name = oracle
                .alias_name(actual)
                .unwrap_or_else(|| ERROR_TYPE_PLACEHOLDER.to_string());
            debug!(export_name, type_name = %display_name, "export type could not be resolved");
            ctx.report(
                statement,
                &messages::UNRESOLVED_TYPE,
                DiagnosticData::new(export_name, display_name),
            );
            return;
        }

        if !oracle.is_type_assignable_to(actual, expected.type_id()) {
            debug!(export_name, type_name, "export does not satisfy expected type");
            ctx.report(
                statement,
                &messages::INVALID_EXPORT_TYPE,
                DiagnosticData::new(export_name, type_name),
            );
        }
    }
}
