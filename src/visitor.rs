//! AST visitor for lint rule execution.
//!
//! Walks the full program with `oxc_ast_visit` so JSX nested anywhere in
//! expressions is reached, and dispatches every opening element and call
//! expression to every registered rule in document order.

use oxc_ast::ast::{CallExpression, JSXOpeningElement, Program};
use oxc_ast_visit::{walk, Visit};

use crate::context::LintContext;
use crate::rule::Rule;

/// Visit the AST and run all rules
pub struct LintVisitor<'a, 'ctx, 'rules> {
    ctx: &'ctx mut LintContext<'a>,
    rules: &'rules [Box<dyn Rule>],
}

impl<'a, 'ctx, 'rules> LintVisitor<'a, 'ctx, 'rules> {
    #[inline]
    pub fn new(ctx: &'ctx mut LintContext<'a>, rules: &'rules [Box<dyn Rule>]) -> Self {
        Self { ctx, rules }
    }

    /// Walk the whole program
    #[inline]
    pub fn run(&mut self, program: &Program<'a>) {
        self.visit_program(program);
    }
}

impl<'a> Visit<'a> for LintVisitor<'a, '_, '_> {
    fn visit_jsx_opening_element(&mut self, element: &JSXOpeningElement<'a>) {
        for rule in self.rules.iter() {
            rule.check_jsx_opening_element(self.ctx, element);
        }
        walk::walk_jsx_opening_element(self, element);
    }

    fn visit_call_expression(&mut self, call: &CallExpression<'a>) {
        for rule in self.rules.iter() {
            rule.check_call_expression(self.ctx, call);
        }
        walk::walk_call_expression(self, call);
    }
}
