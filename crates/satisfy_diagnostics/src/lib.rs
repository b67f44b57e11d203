//! satisfy_diagnostics: Lint diagnostics and their message templates.
//!
//! A diagnostic pairs a message template with a structured payload. The
//! payload keeps the export and type names as data so hosts can match on
//! them; the rendered text is derived from the template by substituting
//! `{{ key }}` placeholders.

use satisfy_core::text::{LineAndColumn, TextSpan};
use std::fmt;

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticCategory {
    Warning,
    Error,
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosticCategory::Warning => write!(f, "warning"),
            DiagnosticCategory::Error => write!(f, "error"),
        }
    }
}

/// Identifies which message a diagnostic was raised with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    /// Both types resolved but the export is not assignable to the expected one.
    InvalidExportType,
    /// The expected type, or the export's own type, could not be resolved.
    UnresolvedType,
}

impl MessageId {
    /// The identifier lint hosts use for this message.
    pub fn as_str(self) -> &'static str {
        match self {
            MessageId::InvalidExportType => "invalidExportType",
            MessageId::UnresolvedType => "unresolvedType",
        }
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A message template with its id and category.
#[derive(Debug, Clone)]
pub struct DiagnosticMessage {
    /// The rule that owns this message.
    pub rule: &'static str,
    pub id: MessageId,
    pub category: DiagnosticCategory,
    /// Template text with `{{ key }}` placeholders.
    pub message: &'static str,
}

/// Structured payload attached to a diagnostic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct DiagnosticData {
    pub export_name: Option<String>,
    pub type_name: String,
}

impl DiagnosticData {
    pub fn new(export_name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            export_name: Some(export_name.into()),
            type_name: type_name.into(),
        }
    }

    /// Payload carrying only a type name.
    pub fn type_only(type_name: impl Into<String>) -> Self {
        Self {
            export_name: None,
            type_name: type_name.into(),
        }
    }

    /// Look up a placeholder value by its template key.
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "exportName" => self.export_name.as_deref(),
            "typeName" => Some(self.type_name.as_str()),
            _ => None,
        }
    }
}

/// A reported diagnostic with its location and rendered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub file: String,
    pub span: TextSpan,
    /// 1-based position of `span.start`.
    pub start: LineAndColumn,
    pub rule: &'static str,
    pub message_id: MessageId,
    pub category: DiagnosticCategory,
    pub message_text: String,
    pub data: DiagnosticData,
}

impl Diagnostic {
    pub fn with_location(
        file: impl Into<String>,
        span: TextSpan,
        start: LineAndColumn,
        message: &DiagnosticMessage,
        data: DiagnosticData,
    ) -> Self {
        Self {
            file: file.into(),
            span,
            start,
            rule: message.rule,
            message_id: message.id,
            category: message.category,
            message_text: format_message(message.message, &data),
            data,
        }
    }

    pub fn is_error(&self) -> bool {
        self.category == DiagnosticCategory::Error
    }

    /// Build a `miette` report that renders the diagnostic against its source.
    pub fn to_report(&self, source_text: &str) -> miette::Report {
        let severity = match self.category {
            DiagnosticCategory::Error => miette::Severity::Error,
            DiagnosticCategory::Warning => miette::Severity::Warning,
        };
        let label = match &self.data.export_name {
            Some(name) => format!("export `{}`", name),
            None => "export".to_string(),
        };
        let diagnostic = miette::MietteDiagnostic::new(self.message_text.clone())
            .with_code(format!("{}({})", self.rule, self.message_id))
            .with_severity(severity)
            .with_label(miette::LabeledSpan::at(self.span.to_range(), label));
        miette::Report::new(diagnostic).with_source_code(miette::NamedSource::new(
            self.file.clone(),
            source_text.to_string(),
        ))
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}): {} {}({}): {}",
            self.file, self.start, self.category, self.rule, self.message_id, self.message_text
        )
    }
}

/// Fill `{{ key }}` placeholders from the payload.
///
/// Whitespace inside the braces is ignored. Placeholders without a value are
/// left as written.
pub fn format_message(template: &str, data: &DiagnosticData) -> String {
    let mut result = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find("{{") {
        let after_open = &rest[open + 2..];
        let Some(close) = after_open.find("}}") else {
            break;
        };
        result.push_str(&rest[..open]);
        let key = after_open[..close].trim();
        match data.get(key) {
            Some(value) => result.push_str(value),
            None => result.push_str(&rest[open..open + 2 + close + 2]),
        }
        rest = &after_open[close + 2..];
    }
    result.push_str(rest);
    result
}

/// Diagnostics accumulated over a lint run.
#[derive(Debug, Clone, Default)]
pub struct DiagnosticCollection {
    diagnostics: Vec<Diagnostic>,
}

impl DiagnosticCollection {
    pub fn new() -> Self {
        Self {
            diagnostics: Vec::new(),
        }
    }

    pub fn add(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn into_diagnostics(self) -> Vec<Diagnostic> {
        self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn extend(&mut self, other: DiagnosticCollection) {
        self.diagnostics.extend(other.diagnostics);
    }

    /// Sort by file, then by position within the file.
    pub fn sort(&mut self) {
        self.diagnostics
            .sort_by(|a, b| a.file.cmp(&b.file).then(a.span.start.cmp(&b.span.start)));
    }
}

// ============================================================================
// Messages
// ============================================================================

pub mod messages {
    use super::{DiagnosticCategory, DiagnosticMessage, MessageId};

    pub const EXPORTS_SATISFY: &str = "exports-satisfy";

    pub const INVALID_EXPORT_TYPE: DiagnosticMessage = DiagnosticMessage {
        rule: EXPORTS_SATISFY,
        id: MessageId::InvalidExportType,
        category: DiagnosticCategory::Error,
        message: "Exported member \"{{ exportName }}\" does not satisfy the type \"{{ typeName }}\"",
    };

    pub const UNRESOLVED_TYPE: DiagnosticMessage = DiagnosticMessage {
        rule: EXPORTS_SATISFY,
        id: MessageId::UnresolvedType,
        category: DiagnosticCategory::Error,
        message: "The type \"{{ typeName }}\" could not be resolved",
    };
}
