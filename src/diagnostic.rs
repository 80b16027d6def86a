//! Diagnostic types for the tamalint linter.
//!
//! Uses `CompactString` for efficient small string storage.

use compact_str::CompactString;
use oxc_diagnostics::OxcDiagnostic;
use oxc_span::Span;
use serde::Serialize;

/// Lint diagnostic severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Stable message identifiers, one per convention the rules enforce.
///
/// These match the codes the editor tooling keys on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MessageId {
    InvalidOrder,
    EnforcesShorthand,
    EnforcesNoShorthand,
}

impl MessageId {
    /// The camelCase code string used in JSON output
    pub fn as_str(self) -> &'static str {
        match self {
            MessageId::InvalidOrder => "invalidOrder",
            MessageId::EnforcesShorthand => "enforcesShorthand",
            MessageId::EnforcesNoShorthand => "enforcesNoShorthand",
        }
    }
}

/// A text edit for auto-fixing a diagnostic.
///
/// Represents a single text replacement in the source code.
#[derive(Debug, Clone, Serialize)]
pub struct TextEdit {
    /// Start byte offset
    pub start: u32,
    /// End byte offset
    pub end: u32,
    /// Replacement text
    pub new_text: String,
}

impl TextEdit {
    /// Create a new text edit
    #[inline]
    pub fn new(start: u32, end: u32, new_text: impl Into<String>) -> Self {
        Self {
            start,
            end,
            new_text: new_text.into(),
        }
    }

    /// Create a replacement edit covering `span`
    #[inline]
    pub fn replace(span: Span, text: impl Into<String>) -> Self {
        Self::new(span.start, span.end, text)
    }
}

/// A fix for a diagnostic, containing one or more text edits.
///
/// The ordering rule produces one edit per attribute position; the shorthand
/// rule produces a single edit. Either way, edits are applied in descending
/// span-start order so an applied edit never shifts the span of one that has
/// not been applied yet.
#[derive(Debug, Clone, Serialize)]
pub struct Fix {
    /// Description of the fix
    pub message: String,
    /// Text edits to apply
    pub edits: Vec<TextEdit>,
}

impl Fix {
    /// Create a new fix with a single edit
    #[inline]
    pub fn new(message: impl Into<String>, edit: TextEdit) -> Self {
        Self {
            message: message.into(),
            edits: vec![edit],
        }
    }

    /// Create a new fix with multiple edits
    #[inline]
    pub fn with_edits(message: impl Into<String>, edits: Vec<TextEdit>) -> Self {
        Self {
            message: message.into(),
            edits,
        }
    }

    /// Apply the fix to a source string
    pub fn apply(&self, source: &str) -> String {
        let mut result = source.to_string();
        let mut edits = self.edits.clone();
        edits.sort_by(|a, b| b.start.cmp(&a.start));

        for edit in edits {
            let start = edit.start as usize;
            let end = edit.end as usize;
            if start <= end && end <= result.len() {
                result.replace_range(start..end, &edit.new_text);
            }
        }
        result
    }
}

/// A lint diagnostic with rich information for display.
///
/// Uses `CompactString` for message storage - strings up to 24 bytes
/// are stored inline without heap allocation.
#[derive(Debug, Clone)]
pub struct LintDiagnostic {
    /// Rule that triggered this diagnostic
    pub rule_name: &'static str,
    /// Stable message code
    pub message_id: MessageId,
    /// Severity level
    pub severity: Severity,
    /// Primary message (CompactString for efficiency)
    pub message: CompactString,
    /// Start byte offset in source
    pub start: u32,
    /// End byte offset in source
    pub end: u32,
    /// Help message for fixing (optional, CompactString)
    pub help: Option<CompactString>,
    /// Related diagnostic information
    pub labels: Vec<Label>,
    /// Auto-fix for this diagnostic (optional)
    pub fix: Option<Fix>,
}

/// Additional label for a diagnostic
#[derive(Debug, Clone)]
pub struct Label {
    /// Message for this label (CompactString for efficiency)
    pub message: CompactString,
    /// Start byte offset
    pub start: u32,
    /// End byte offset
    pub end: u32,
}

impl LintDiagnostic {
    /// Create a new error diagnostic
    #[inline]
    pub fn error(
        rule_name: &'static str,
        message_id: MessageId,
        message: impl Into<CompactString>,
        span: Span,
    ) -> Self {
        Self {
            rule_name,
            message_id,
            severity: Severity::Error,
            message: message.into(),
            start: span.start,
            end: span.end,
            help: None,
            labels: Vec::new(),
            fix: None,
        }
    }

    /// Create a new warning diagnostic
    #[inline]
    pub fn warn(
        rule_name: &'static str,
        message_id: MessageId,
        message: impl Into<CompactString>,
        span: Span,
    ) -> Self {
        Self {
            rule_name,
            message_id,
            severity: Severity::Warning,
            message: message.into(),
            start: span.start,
            end: span.end,
            help: None,
            labels: Vec::new(),
            fix: None,
        }
    }

    /// Add a help message
    #[inline]
    pub fn with_help(mut self, help: impl Into<CompactString>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Add a related label
    #[inline]
    pub fn with_label(mut self, message: impl Into<CompactString>, span: Span) -> Self {
        self.labels.push(Label {
            message: message.into(),
            start: span.start,
            end: span.end,
        });
        self
    }

    /// Add a fix for this diagnostic
    #[inline]
    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }

    /// Check if this diagnostic has a fix
    #[inline]
    pub fn has_fix(&self) -> bool {
        self.fix.is_some()
    }

    /// Convert to OxcDiagnostic for rich rendering
    pub fn into_oxc_diagnostic(self) -> OxcDiagnostic {
        let mut diag = match self.severity {
            Severity::Error => OxcDiagnostic::error(self.message.to_string()),
            Severity::Warning => OxcDiagnostic::warn(self.message.to_string()),
        };

        diag = diag.with_label(Span::new(self.start, self.end));

        if let Some(help) = self.help {
            diag = diag.with_help(help.to_string());
        }

        for label in self.labels {
            diag =
                diag.and_label(Span::new(label.start, label.end).label(label.message.to_string()));
        }

        diag
    }
}

/// Summary of lint results
#[derive(Debug, Clone, Default, Serialize)]
pub struct LintSummary {
    pub error_count: usize,
    pub warning_count: usize,
    pub file_count: usize,
}

impl LintSummary {
    #[inline]
    pub fn add(&mut self, diagnostic: &LintDiagnostic) {
        match diagnostic.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
        }
    }

    #[inline]
    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_applies_in_reverse_span_order() {
        // Two edits that change text length; applying front-first would
        // invalidate the second span.
        let source = "<Box aa bb />";
        let fix = Fix::with_edits(
            "swap",
            vec![
                TextEdit::new(5, 7, "bbbb"),
                TextEdit::new(8, 10, "a"),
            ],
        );
        assert_eq!(fix.apply(source), "<Box bbbb a />");
    }

    #[test]
    fn test_fix_single_edit() {
        let source = "margin=\"$2\"";
        let fix = Fix::new("shorten", TextEdit::new(0, 6, "m"));
        assert_eq!(fix.apply(source), "m=\"$2\"");
    }

    #[test]
    fn test_message_id_codes() {
        assert_eq!(MessageId::InvalidOrder.as_str(), "invalidOrder");
        assert_eq!(MessageId::EnforcesShorthand.as_str(), "enforcesShorthand");
        assert_eq!(
            MessageId::EnforcesNoShorthand.as_str(),
            "enforcesNoShorthand"
        );
    }
}
