//! Linter entry point.
//!
//! Owns the parse step and drives the registered rules over the AST. Each
//! file gets a fresh allocator, membership oracle and context.

use oxc_allocator::Allocator;
use oxc_parser::Parser;
use oxc_span::SourceType;

use crate::config::{ConfigError, LibraryConfig};
use crate::context::LintContext;
use crate::diagnostic::{LintDiagnostic, LintSummary, TextEdit};
use crate::oracle::MembershipOracle;
use crate::rule::RuleRegistry;
use crate::visitor::LintVisitor;

/// Result of linting a single file
#[derive(Debug)]
pub struct LintResult {
    pub filename: String,
    pub diagnostics: Vec<LintDiagnostic>,
    pub error_count: usize,
    pub warning_count: usize,
}

impl LintResult {
    #[inline]
    pub fn has_issues(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// The linter, configured with a rule registry and a library configuration
pub struct Linter {
    registry: RuleRegistry,
    config: LibraryConfig,
}

impl Linter {
    /// Linter with the recommended rule set and compiled-in defaults
    pub fn new() -> Self {
        Self {
            registry: RuleRegistry::with_recommended(),
            config: LibraryConfig::default(),
        }
    }

    /// Linter with a custom rule registry
    pub fn with_registry(registry: RuleRegistry) -> Self {
        Self {
            registry,
            config: LibraryConfig::default(),
        }
    }

    /// Linter reading module names and shorthands from a project config
    pub fn from_config_file(path: impl AsRef<std::path::Path>) -> Result<Self, ConfigError> {
        Ok(Self {
            registry: RuleRegistry::with_recommended(),
            config: LibraryConfig::load(path)?,
        })
    }

    /// Replace the library configuration
    pub fn set_config(&mut self, config: LibraryConfig) {
        self.config = config;
    }

    #[inline]
    pub fn config(&self) -> &LibraryConfig {
        &self.config
    }

    /// Lint a single source file
    pub fn lint_source(&self, source: &str, filename: &str) -> LintResult {
        let allocator = Allocator::default();
        let source_type =
            SourceType::from_path(filename).unwrap_or_else(|_| SourceType::tsx());
        let ret = Parser::new(&allocator, source, source_type).parse();

        if ret.panicked {
            return LintResult {
                filename: filename.to_string(),
                diagnostics: Vec::new(),
                error_count: 0,
                warning_count: 0,
            };
        }

        let oracle = MembershipOracle::from_program(&ret.program, &self.config);
        let mut ctx = LintContext::new(source, filename, &self.config, &oracle);

        LintVisitor::new(&mut ctx, self.registry.rules()).run(&ret.program);

        let error_count = ctx.error_count();
        let warning_count = ctx.warning_count();
        LintResult {
            filename: filename.to_string(),
            diagnostics: ctx.into_diagnostics(),
            error_count,
            warning_count,
        }
    }

    /// Lint a batch of `(filename, source)` pairs
    pub fn lint_files(&self, files: &[(&str, &str)]) -> (Vec<LintResult>, LintSummary) {
        let mut summary = LintSummary::default();
        let mut results = Vec::with_capacity(files.len());

        for (filename, source) in files {
            let result = self.lint_source(source, filename);
            for diagnostic in &result.diagnostics {
                summary.add(diagnostic);
            }
            summary.file_count += 1;
            results.push(result);
        }

        (results, summary)
    }
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

/// Apply every fix in `diagnostics` to `source`.
///
/// Edits from all fixes are merged and applied back to front so earlier
/// replacements never shift a later span. When two rules touch the same
/// span the first edit wins and the conflicting one is skipped; a second
/// lint pass over the result converges.
pub fn apply_fixes(source: &str, diagnostics: &[LintDiagnostic]) -> String {
    let mut edits: Vec<TextEdit> = diagnostics
        .iter()
        .filter_map(|d| d.fix.as_ref())
        .flat_map(|f| f.edits.iter().cloned())
        .collect();
    edits.sort_by(|a, b| b.start.cmp(&a.start));

    let mut result = source.to_string();
    let mut applied_start = u32::MAX;
    for edit in edits {
        if edit.end > applied_start {
            continue;
        }
        let start = edit.start as usize;
        let end = edit.end as usize;
        if start <= end && end <= result.len() {
            result.replace_range(start..end, &edit.new_text);
            applied_start = edit.start;
        }
    }
    result
}
