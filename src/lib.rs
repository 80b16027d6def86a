//! # tamalint
//!
//! Linter for Tamagui component usage in TSX sources.
//!
//! Enforces the conventions the Tamagui tooling expects: props appear in a
//! canonical order on library components and in `styled()` style objects,
//! and style props use the configured shorthand (or longhand) spelling.
//! Both rules ship auto-fixes.
//!
//! Which elements count as "library components" is decided from the file's
//! import declarations, optionally widened by a `.tamagui/tamagui.config.json`
//! build artifact that also supplies the project's shorthand table.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tamalint::{format_results, Linter, OutputFormat};
//!
//! let linter = Linter::new();
//! let source = r#"import { Stack } from 'tamagui';
//! export const Row = () => <Stack margin="$2" key="row" />;"#;
//! let result = linter.lint_source(source, "row.tsx");
//!
//! if result.has_issues() {
//!     let sources = vec![("row.tsx".to_string(), source.to_string())];
//!     println!("{}", format_results(&[result], &sources, OutputFormat::Text));
//! }
//! ```
//!
//! ## Rules
//!
//! - `tamagui/props-order` - Enforce a canonical order of component props
//! - `tamagui/props-prefer-shorthand` - Prefer shorthand (or longhand) style
//!   prop names

mod config;
mod context;
mod diagnostic;
mod linter;
mod oracle;
pub mod output;
mod priority;
mod rule;
pub mod rules;
mod shorthand;
mod sort;
mod visitor;

pub use config::{ConfigError, LibraryConfig, DEFAULT_CONFIG_PATH, DEFAULT_MODULE_NAMES};
pub use context::LintContext;
pub use diagnostic::{Fix, LintDiagnostic, LintSummary, MessageId, Severity, TextEdit};
pub use linter::{apply_fixes, LintResult, Linter};
pub use oracle::MembershipOracle;
pub use output::{format_results, format_summary, OutputFormat};
pub use priority::{PriorityConfig, PropPriority};
pub use rule::{Rule, RuleCategory, RuleMeta, RuleRegistry};
pub use shorthand::ShorthandDictionary;

/// Lint a TSX source with the recommended rules and default configuration.
///
/// This is a convenience function for simple use cases.
/// For more control, use `Linter::new()` directly.
pub fn lint(source: &str, filename: &str) -> LintResult {
    Linter::new().lint_source(source, filename)
}
