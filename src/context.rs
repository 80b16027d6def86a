//! Lint context for rule execution.

use oxc_span::Span;

use crate::config::LibraryConfig;
use crate::diagnostic::{LintDiagnostic, Severity};
use crate::oracle::MembershipOracle;

/// Context rules receive while the visitor walks one file.
///
/// Carries the source text, the immutable configuration snapshot for the
/// session and the diagnostic sink. Rules never touch global state; all
/// configuration arrives through here.
pub struct LintContext<'a> {
    /// Source code being linted
    pub source: &'a str,
    /// Filename for diagnostics
    pub filename: &'a str,
    /// Library configuration snapshot (module names, shorthand dictionary)
    config: &'a LibraryConfig,
    /// Import-derived membership oracle for this file
    oracle: &'a MembershipOracle,
    /// Collected diagnostics (pre-allocated capacity)
    diagnostics: Vec<LintDiagnostic>,
    /// Cached error count for fast access
    error_count: usize,
    /// Cached warning count for fast access
    warning_count: usize,
}

impl<'a> LintContext<'a> {
    /// Initial capacity for diagnostics vector
    const INITIAL_DIAGNOSTICS_CAPACITY: usize = 16;

    #[inline]
    pub fn new(
        source: &'a str,
        filename: &'a str,
        config: &'a LibraryConfig,
        oracle: &'a MembershipOracle,
    ) -> Self {
        Self {
            source,
            filename,
            config,
            oracle,
            diagnostics: Vec::with_capacity(Self::INITIAL_DIAGNOSTICS_CAPACITY),
            error_count: 0,
            warning_count: 0,
        }
    }

    /// The session configuration snapshot
    #[inline]
    pub fn config(&self) -> &'a LibraryConfig {
        self.config
    }

    /// The membership oracle for this file
    #[inline]
    pub fn oracle(&self) -> &'a MembershipOracle {
        self.oracle
    }

    /// Verbatim source text covered by a span
    #[inline]
    pub fn span_text(&self, span: Span) -> &'a str {
        &self.source[span.start as usize..span.end as usize]
    }

    /// Report a lint diagnostic
    #[inline]
    pub fn report(&mut self, diagnostic: LintDiagnostic) {
        match diagnostic.severity {
            Severity::Error => self.error_count += 1,
            Severity::Warning => self.warning_count += 1,
        }
        self.diagnostics.push(diagnostic);
    }

    /// Get collected diagnostics
    #[inline]
    pub fn into_diagnostics(self) -> Vec<LintDiagnostic> {
        self.diagnostics
    }

    /// Get reference to collected diagnostics
    #[inline]
    pub fn diagnostics(&self) -> &[LintDiagnostic] {
        &self.diagnostics
    }

    /// Get the error count (cached, O(1))
    #[inline]
    pub fn error_count(&self) -> usize {
        self.error_count
    }

    /// Get the warning count (cached, O(1))
    #[inline]
    pub fn warning_count(&self) -> usize {
        self.warning_count
    }
}
