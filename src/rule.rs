//! Rule trait and registry for lint rules.

use oxc_ast::ast::{CallExpression, JSXOpeningElement};

use crate::context::LintContext;
use crate::diagnostic::Severity;

/// Rule category for organization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleCategory {
    /// Recommended rules - keep component code consistent
    Recommended,
    /// Stylistic rules - purely cosmetic preferences
    Stylistic,
}

/// Rule metadata
pub struct RuleMeta {
    /// Rule name (e.g., "tamagui/props-order")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Rule category
    pub category: RuleCategory,
    /// Whether rule is auto-fixable
    pub fixable: bool,
    /// Default severity
    pub default_severity: Severity,
}

/// Rule trait for implementing lint rules
///
/// Rules implement visitor-like methods that are called during AST traversal.
/// Each method receives a mutable reference to LintContext for reporting
/// diagnostics.
pub trait Rule: Send + Sync {
    /// Get rule metadata
    fn meta(&self) -> &'static RuleMeta;

    /// Called for each JSX opening element, in document order
    #[allow(unused_variables)]
    fn check_jsx_opening_element<'a>(
        &self,
        ctx: &mut LintContext<'a>,
        element: &JSXOpeningElement<'a>,
    ) {
    }

    /// Called for each call expression, in document order
    #[allow(unused_variables)]
    fn check_call_expression<'a>(&self, ctx: &mut LintContext<'a>, call: &CallExpression<'a>) {}
}

/// Registry holding all enabled lint rules
pub struct RuleRegistry {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Register a rule
    pub fn register(&mut self, rule: Box<dyn Rule>) {
        self.rules.push(rule);
    }

    /// Get all registered rules
    pub fn rules(&self) -> &[Box<dyn Rule>] {
        &self.rules
    }

    /// Create registry with both built-in rules at their defaults
    pub fn with_recommended() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(crate::rules::PropsOrder::default()));
        registry.register(Box::new(crate::rules::PropsPreferShorthand::default()));
        registry
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_recommended()
    }
}
