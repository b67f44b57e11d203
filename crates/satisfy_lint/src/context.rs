//! Per-file reporting sink.

use satisfy_ast::node::{NodeData, SourceFile};
use satisfy_diagnostics::{Diagnostic, DiagnosticCollection, DiagnosticData, DiagnosticMessage};

/// Collects the diagnostics raised while checking one source file.
pub struct RuleContext<'f, 'a> {
    file: &'f SourceFile<'a>,
    diagnostics: DiagnosticCollection,
}

impl<'f, 'a> RuleContext<'f, 'a> {
    pub fn new(file: &'f SourceFile<'a>) -> Self {
        Self {
            file,
            diagnostics: DiagnosticCollection::new(),
        }
    }

    /// Report `message` anchored to `node`'s range.
    pub fn report(&mut self, node: &NodeData, message: &DiagnosticMessage, data: DiagnosticData) {
        let span = node.range.to_span();
        let start = self.file.line_and_column_of(span.start);
        self.diagnostics.add(Diagnostic::with_location(
            self.file.file_name.clone(),
            span,
            start,
            message,
            data,
        ));
    }

    pub fn into_diagnostics(self) -> DiagnosticCollection {
        self.diagnostics
    }
}
