//! tamagui/props-prefer-shorthand
//!
//! Prefer the Tamagui shorthand spelling of a style prop (or the longhand,
//! with `no_shorthand`). Each attribute is checked on its own and rewritten
//! in place, value text untouched.
//!
//! ## Examples
//!
//! ### Invalid
//! ```tsx
//! import { Stack } from '@tamagui/core';
//! <Stack marginTop="$2" />
//! ```
//!
//! ### Valid
//! ```tsx
//! import { Stack } from '@tamagui/core';
//! <Stack mt="$2" />
//! ```

use oxc_ast::ast::{JSXAttributeItem, JSXOpeningElement};
use oxc_span::GetSpan;

use crate::context::LintContext;
use crate::diagnostic::{Fix, LintDiagnostic, MessageId, Severity, TextEdit};
use crate::rule::{Rule, RuleCategory, RuleMeta};

static META: RuleMeta = RuleMeta {
    name: "tamagui/props-prefer-shorthand",
    description: "Prefer the shorthand spelling of Tamagui style props",
    category: RuleCategory::Stylistic,
    fixable: true,
    default_severity: Severity::Warning,
};

/// Shorthand preference rule
#[derive(Default)]
pub struct PropsPreferShorthand {
    /// Invert the preference: flag shorthands, rewrite to longhands
    pub no_shorthand: bool,
    /// Check every JSX element instead of only library components
    pub apply_to_all_components: bool,
}

impl Rule for PropsPreferShorthand {
    fn meta(&self) -> &'static RuleMeta {
        &META
    }

    fn check_jsx_opening_element<'a>(
        &self,
        ctx: &mut LintContext<'a>,
        element: &JSXOpeningElement<'a>,
    ) {
        if !self.apply_to_all_components && !ctx.oracle().is_library_element(element) {
            return;
        }

        let dictionary = &ctx.config().shorthands;
        let mut diagnostics = Vec::new();

        for item in &element.attributes {
            let JSXAttributeItem::Attribute(attr) = item else {
                continue;
            };
            let name = ctx.span_text(attr.name.span());

            let (replacement, message_id) = if self.no_shorthand {
                (dictionary.longhand_of(name), MessageId::EnforcesNoShorthand)
            } else {
                (dictionary.shorthand_of(name), MessageId::EnforcesShorthand)
            };
            let Some(replacement) = replacement else {
                continue;
            };

            let message = match message_id {
                MessageId::EnforcesShorthand => {
                    format!("Prop '{name}' could be replaced by the '{replacement}' shorthand.")
                }
                _ => format!("Shorthand prop '{name}' could be replaced by the '{replacement}'."),
            };

            // The value text, braces and quotes included, is carried verbatim
            let new_text = match &attr.value {
                Some(value) => format!("{replacement}={}", ctx.span_text(value.span())),
                None => replacement.to_string(),
            };

            diagnostics.push(
                LintDiagnostic::warn(META.name, message_id, message, attr.span)
                    .with_fix(Fix::new(
                        format!("Replace '{name}' with '{replacement}'"),
                        TextEdit::replace(attr.span, new_text),
                    )),
            );
        }

        for diagnostic in diagnostics {
            ctx.report(diagnostic);
        }
    }
}
