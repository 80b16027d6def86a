//! tamagui/props-order
//!
//! Enforce a canonical order of Tamagui component props.
//!
//! Props sort by semantic priority group (`key`/`ref` first, then system,
//! layout, spacing, typography, visual and event props, with unrecognized
//! props alphabetical at the end). Spread attributes never move, and nothing
//! is reordered across them. The same ordering applies to the style object
//! passed to `styled()`.
//!
//! ## Examples
//!
//! ### Invalid
//! ```tsx
//! import { Stack } from '@tamagui/core';
//! <Stack px="$2" m="$1" key={key} />
//! ```
//!
//! ### Valid
//! ```tsx
//! import { Stack } from '@tamagui/core';
//! <Stack key={key} m="$1" px="$2" />
//! ```

use compact_str::CompactString;
use oxc_ast::ast::{
    Argument, CallExpression, JSXAttributeItem, JSXOpeningElement, ObjectExpression,
    ObjectPropertyKind, PropertyKey,
};
use oxc_span::{GetSpan, Span};

use crate::context::LintContext;
use crate::diagnostic::{Fix, LintDiagnostic, MessageId, Severity};
use crate::priority::PriorityConfig;
use crate::rule::{Rule, RuleCategory, RuleMeta};
use crate::sort::{first_mismatch, reorder_edits, sort_entries, PropEntry};

static META: RuleMeta = RuleMeta {
    name: "tamagui/props-order",
    description: "Enforce a canonical order of Tamagui component props",
    category: RuleCategory::Recommended,
    fixable: true,
    default_severity: Severity::Warning,
};

/// Props order rule
pub struct PropsOrder {
    /// Names forced to the front, in this order
    pub first_props: Vec<CompactString>,
    /// Names forced to the end, in this order
    pub last_props: Vec<CompactString>,
    /// Check every JSX element instead of only library components
    pub apply_to_all_components: bool,
}

impl Default for PropsOrder {
    fn default() -> Self {
        Self {
            first_props: PriorityConfig::DEFAULT_FIRST_PROPS
                .iter()
                .map(|s| CompactString::from(*s))
                .collect(),
            last_props: Vec::new(),
            apply_to_all_components: false,
        }
    }
}

impl PropsOrder {
    fn priority_config(&self) -> PriorityConfig {
        PriorityConfig::new(self.first_props.clone(), self.last_props.clone())
    }

    /// Diff `original` against its sorted permutation and report a single
    /// aggregate violation whose fix rewrites every position.
    fn check_entries(&self, ctx: &mut LintContext<'_>, entries: &[PropEntry], anchor: Span) {
        let config = self.priority_config();
        let sorted = sort_entries(entries, &config);

        if first_mismatch(entries, &sorted).is_none() {
            return;
        }

        let edits = reorder_edits(entries, &sorted, ctx.source);
        ctx.report(
            LintDiagnostic::warn(
                META.name,
                MessageId::InvalidOrder,
                "Invalid Tamagui props order.",
                anchor,
            )
            .with_help("Sort props by their priority group")
            .with_fix(Fix::with_edits("Reorder props", edits)),
        );
    }
}

impl Rule for PropsOrder {
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
        if element.attributes.len() < 2 {
            return;
        }

        let entries = collect_jsx_entries(ctx, element);
        self.check_entries(ctx, &entries, element.span);
    }

    fn check_call_expression<'a>(&self, ctx: &mut LintContext<'a>, call: &CallExpression<'a>) {
        if !ctx.oracle().is_library_styled(call) {
            return;
        }
        // styled(Component, { ...styles })
        let Some(Argument::ObjectExpression(object)) = call.arguments.get(1) else {
            return;
        };
        if object.properties.len() < 2 {
            return;
        }

        let entries = collect_object_entries(object);
        self.check_entries(ctx, &entries, call.span);
    }
}

/// Lower JSX attributes to the shared entry shape
fn collect_jsx_entries<'a>(
    ctx: &LintContext<'a>,
    element: &JSXOpeningElement<'a>,
) -> Vec<PropEntry<'a>> {
    element
        .attributes
        .iter()
        .map(|item| match item {
            JSXAttributeItem::Attribute(attr) => PropEntry::Named {
                name: ctx.span_text(attr.name.span()),
                span: attr.span,
            },
            JSXAttributeItem::SpreadAttribute(spread) => PropEntry::Spread { span: spread.span },
        })
        .collect()
}

/// Lower object literal members to the shared entry shape.
///
/// Spreads and members without a static key (computed keys, getters with
/// odd shapes) are opaque barriers.
fn collect_object_entries<'a>(object: &ObjectExpression<'a>) -> Vec<PropEntry<'a>> {
    object
        .properties
        .iter()
        .map(|prop| match prop {
            ObjectPropertyKind::ObjectProperty(p) if !p.computed => match &p.key {
                PropertyKey::StaticIdentifier(ident) => PropEntry::Named {
                    name: ident.name.as_str(),
                    span: p.span,
                },
                PropertyKey::StringLiteral(lit) => PropEntry::Named {
                    name: lit.value.as_str(),
                    span: p.span,
                },
                _ => PropEntry::Spread { span: p.span },
            },
            _ => PropEntry::Spread { span: prop.span() },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linter::{apply_fixes, Linter};
    use crate::rule::RuleRegistry;

    fn create_linter(rule: PropsOrder) -> Linter {
        let mut registry = RuleRegistry::new();
        registry.register(Box::new(rule));
        Linter::with_registry(registry)
    }

    fn lint_and_fix(rule: PropsOrder, source: &str) -> (usize, String) {
        let linter = create_linter(rule);
        let result = linter.lint_source(source, "test.tsx");
        let fixed = apply_fixes(source, &result.diagnostics);
        (result.warning_count, fixed)
    }

    #[test]
    fn test_sorted_props_are_valid() {
        let source = r#"
        import { Stack } from '@tamagui/core';
        <Stack key={key} m="$1" px="$2" py="$4" fontSize="md" onPress={onPress} />;
        "#;
        let (warnings, fixed) = lint_and_fix(PropsOrder::default(), source);
        assert_eq!(warnings, 0);
        assert_eq!(fixed, source);
    }

    #[test]
    fn test_sorted_styled_props_are_valid() {
        let source = r#"
        import { styled, Stack } from '@tamagui/core';
        const StyledStack = styled(Stack, {
          m: '$1',
          px: '$2',
          py: '$4',
          fontSize: 'md',
        });
        "#;
        let (warnings, _) = lint_and_fix(PropsOrder::default(), source);
        assert_eq!(warnings, 0);
    }

    #[test]
    fn test_non_library_element_is_ignored() {
        let source = r#"
        import { NotTamagui } from "@mui/material";
        <NotTamagui m="$2" fontSize="md" px="$2" py={2}><H1>Hello</H1></NotTamagui>;
        "#;
        let (warnings, _) = lint_and_fix(PropsOrder::default(), source);
        assert_eq!(warnings, 0);
    }

    #[test]
    fn test_non_library_styled_is_ignored() {
        let source = r#"
        import { styled, Stack } from '@mui/material';
        const StyledStack = styled(Stack, {
          fontSize: 'md',
          m: 1,
          px: 2,
          py: 4,
        });
        "#;
        let (warnings, _) = lint_and_fix(PropsOrder::default(), source);
        assert_eq!(warnings, 0);
    }

    #[test]
    fn test_apply_to_all_components() {
        let source = r#"
        import { NotTamagui } from "@mui/material";
        <NotTamagui fontSize="md" m="$2" />;
        "#;
        let rule = PropsOrder {
            apply_to_all_components: true,
            ..PropsOrder::default()
        };
        let (warnings, fixed) = lint_and_fix(rule, source);
        assert_eq!(warnings, 1);
        assert!(fixed.contains(r#"<NotTamagui m="$2" fontSize="md" />"#));
    }

    #[test]
    fn test_spread_sections_sort_independently() {
        let source = r#"
        import { HStack, H1 } from "@tamagui/core";
        <HStack py="2" {...props} component="div"><H1>Hello</H1></HStack>;
        "#;
        let (warnings, _) = lint_and_fix(PropsOrder::default(), source);
        // Nothing may cross the spread; each section is already sorted
        assert_eq!(warnings, 0);
    }

    #[test]
    fn test_unsorted_props_fix_respects_spread() {
        let source = r#"
        import { Stack } from '@tamagui/core';
        <Stack px="$2" component="div" onPress={onPress} m="$1" key={key} {...props} fontSize="md" py={2} />;
        "#;
        let (warnings, fixed) = lint_and_fix(PropsOrder::default(), source);
        assert_eq!(warnings, 1);
        assert!(fixed.contains(
            r#"<Stack key={key} component="div" m="$1" px="$2" onPress={onPress} {...props} py={2} fontSize="md" />"#
        ));
    }

    #[test]
    fn test_unsorted_styled_props_are_fixed() {
        let source = r#"
        import { styled, Stack } from '@tamagui/core';
        const StyledStack = styled(Stack, {
          px: '$2',
          py: '$4',
          m: '$1',
          ...rest,
          border: '1px solid red',
          flexWrap: 'wrap',
        });
        "#;
        let (warnings, fixed) = lint_and_fix(PropsOrder::default(), source);
        assert_eq!(warnings, 1);
        let expected = r#"
        import { styled, Stack } from '@tamagui/core';
        const StyledStack = styled(Stack, {
          m: '$1',
          px: '$2',
          py: '$4',
          ...rest,
          flexWrap: 'wrap',
          border: '1px solid red',
        });
        "#;
        assert_eq!(fixed, expected);
    }

    #[test]
    fn test_multiline_fix_preserves_lines() {
        let source = r#"
        import { XStack, H1 } from "@tamagui/core";
        <XStack
          px="$2"
          component="div"
          fontSize="md"
          py={2}
        >
          <H1>Hello</H1>
        </XStack>;
        "#;
        let (warnings, fixed) = lint_and_fix(PropsOrder::default(), source);
        assert_eq!(warnings, 1);
        let expected = r#"
        import { XStack, H1 } from "@tamagui/core";
        <XStack
          component="div"
          px="$2"
          py={2}
          fontSize="md"
        >
          <H1>Hello</H1>
        </XStack>;
        "#;
        assert_eq!(fixed, expected);
    }

    #[test]
    fn test_other_props_sort_alphabetically() {
        let source = r#"
        import { HStack, H1 } from "@tamagui/core";
        <HStack onPress={onPress} testID="data-test-id" data-weird-prop="prop" data-index={1}><H1>Hello</H1></HStack>;
        "#;
        let (warnings, fixed) = lint_and_fix(PropsOrder::default(), source);
        assert_eq!(warnings, 1);
        assert!(fixed.contains(
            r#"<HStack testID="data-test-id" onPress={onPress} data-index={1} data-weird-prop="prop">"#
        ));
    }

    #[test]
    fn test_same_group_sorts_in_table_order() {
        let source = r#"
        import { HStack, H1 } from "@tamagui/core";
        <HStack sx={sx} textStyle={textStyle} layerStyle={layerStyle} as={as}><H1>Hello</H1></HStack>;
        "#;
        let (warnings, fixed) = lint_and_fix(PropsOrder::default(), source);
        assert_eq!(warnings, 1);
        assert!(fixed
            .contains(r#"<HStack as={as} sx={sx} layerStyle={layerStyle} textStyle={textStyle}>"#));
    }

    #[test]
    fn test_trailing_style_group_keeps_table_order() {
        let source = r#"
        import { HStack } from "@tamagui/core";
        <HStack
          animation="animation"
          appearance="appearance"
          transform="transform"
          visibility="visibility"
          resize="resize"
          whiteSpace="whiteSpace"
          pointerEvents="pointerEvents"
          wordBreak="wordBreak"
          overflowWrap="overflowWrap"
          textOverflow="textOverflow"
          boxSizing="boxSizing"
          transformOrigin="transformOrigin"
          cursor="cursor"
          transition="transition"
          objectFit="objectFit"
          userSelect="userSelect"
          objectPosition="objectPosition"
          float="float"
          outline="outline"
        >
          Same priority should be sorted in defined order
        </HStack>;
        "#;
        let (warnings, fixed) = lint_and_fix(PropsOrder::default(), source);
        assert_eq!(warnings, 1);
        let expected = r#"
        import { HStack } from "@tamagui/core";
        <HStack
          animation="animation"
          appearance="appearance"
          transform="transform"
          transformOrigin="transformOrigin"
          visibility="visibility"
          whiteSpace="whiteSpace"
          userSelect="userSelect"
          pointerEvents="pointerEvents"
          wordBreak="wordBreak"
          overflowWrap="overflowWrap"
          textOverflow="textOverflow"
          boxSizing="boxSizing"
          cursor="cursor"
          resize="resize"
          transition="transition"
          objectFit="objectFit"
          objectPosition="objectPosition"
          float="float"
          outline="outline"
        >
          Same priority should be sorted in defined order
        </HStack>;
        "#;
        assert_eq!(fixed, expected);
    }

    #[test]
    fn test_groups_sort_by_priority() {
        let source = r#"
        import { HStack, H1 } from "@tamagui/core";
        <HStack
          as={as}
          _hover={_hover}
          position={position}
          shadow={shadow}
          animation={animation}
          m={m}
          data-test-id={dataTestId}
          flex={flex}
          color={color}
          fontFamily={fontFamily}
          bg={bg}
          w={w}
          h={h}
          display={display}
          borderRadius={borderRadius}
          p={p}
          gridGap={gridGap}
        >
          <H1>Hello</H1>
        </HStack>;
        "#;
        let (warnings, fixed) = lint_and_fix(PropsOrder::default(), source);
        assert_eq!(warnings, 1);
        let expected = r#"
        import { HStack, H1 } from "@tamagui/core";
        <HStack
          as={as}
          position={position}
          flex={flex}
          gridGap={gridGap}
          display={display}
          w={w}
          h={h}
          m={m}
          p={p}
          color={color}
          fontFamily={fontFamily}
          bg={bg}
          borderRadius={borderRadius}
          shadow={shadow}
          _hover={_hover}
          animation={animation}
          data-test-id={dataTestId}
        >
          <H1>Hello</H1>
        </HStack>;
        "#;
        assert_eq!(fixed, expected);
    }

    #[test]
    fn test_last_table_key_sorts_before_unknown_props() {
        let source = r#"
        import { HStack, H1 } from "@tamagui/core";
        <HStack outline='outline' aaaa><H1>Hello</H1></HStack>;
        "#;
        let (warnings, _) = lint_and_fix(PropsOrder::default(), source);
        assert_eq!(warnings, 0);
    }

    #[test]
    fn test_first_props_sort_before_unrecognized_names() {
        // The historical fixture for this case encoded the buggy
        // self-comparing comparator; with the corrected comparator,
        // first_props win over unrecognized names.
        let source = r#"
        import { HStack, H1 } from "@tamagui/core";
        <HStack
          key={key}
          className={className}
          dangerouslySetInnerHtml={dangerouslySetInnerHtml}
          ref={ref}
        >
          <H1>Hello</H1>
        </HStack>;
        "#;
        let (warnings, fixed) = lint_and_fix(PropsOrder::default(), source);
        assert_eq!(warnings, 1);
        let expected = r#"
        import { HStack, H1 } from "@tamagui/core";
        <HStack
          key={key}
          ref={ref}
          className={className}
          dangerouslySetInnerHtml={dangerouslySetInnerHtml}
        >
          <H1>Hello</H1>
        </HStack>;
        "#;
        assert_eq!(fixed, expected);
    }

    #[test]
    fn test_empty_first_props_leaves_all_as_other() {
        let source = r#"
        import { HStack, H1 } from "@tamagui/core";
        <HStack
          className={className}
          key={key}
          ref={ref}
          aria-label="aria-label"
        >
          <H1>Hello</H1>
        </HStack>;
        "#;
        let rule = PropsOrder {
            first_props: Vec::new(),
            ..PropsOrder::default()
        };
        let (warnings, fixed) = lint_and_fix(rule, source);
        assert_eq!(warnings, 1);
        let expected = r#"
        import { HStack, H1 } from "@tamagui/core";
        <HStack
          aria-label="aria-label"
          className={className}
          key={key}
          ref={ref}
        >
          <H1>Hello</H1>
        </HStack>;
        "#;
        assert_eq!(fixed, expected);
    }

    #[test]
    fn test_last_props_sort_to_the_end() {
        let source = r#"
        import { HStack, H1 } from "@tamagui/core";
        <HStack
          className={className}
          onPress={onPress}
          bg={bg}
          aria-label="aria-label"
        >
          onPress should be the last
        </HStack>;
        "#;
        let rule = PropsOrder {
            last_props: vec!["onPress".into(), "aria-label".into()],
            ..PropsOrder::default()
        };
        let (warnings, fixed) = lint_and_fix(rule, source);
        assert_eq!(warnings, 1);
        let expected = r#"
        import { HStack, H1 } from "@tamagui/core";
        <HStack
          bg={bg}
          className={className}
          onPress={onPress}
          aria-label="aria-label"
        >
          onPress should be the last
        </HStack>;
        "#;
        assert_eq!(fixed, expected);
    }

    #[test]
    fn test_first_props_win_conflicts_with_last_props() {
        let source = r#"
        import { HStack, H1 } from "@tamagui/core";
        <HStack
          bg={bg}
          onPress={onPress}
          aria-label="aria-label"
        >
          conflict keeps first_props only
        </HStack>;
        "#;
        let rule = PropsOrder {
            first_props: vec!["onPress".into(), "aria-label".into()],
            last_props: vec!["onPress".into(), "aria-label".into()],
            ..PropsOrder::default()
        };
        let (warnings, fixed) = lint_and_fix(rule, source);
        assert_eq!(warnings, 1);
        let expected = r#"
        import { HStack, H1 } from "@tamagui/core";
        <HStack
          onPress={onPress}
          aria-label="aria-label"
          bg={bg}
        >
          conflict keeps first_props only
        </HStack>;
        "#;
        assert_eq!(fixed, expected);
    }

    #[test]
    fn test_single_violation_for_many_misplacements() {
        let source = r#"
        import { Stack } from '@tamagui/core';
        <Stack onPress={onPress} fontSize="md" py="$4" px="$2" m="$1" />;
        "#;
        let linter = create_linter(PropsOrder::default());
        let result = linter.lint_source(source, "test.tsx");
        assert_eq!(result.diagnostics.len(), 1);
        let fix = result.diagnostics[0].fix.as_ref().unwrap();
        // One replacement per position, all five of them
        assert_eq!(fix.edits.len(), 5);
    }

    #[test]
    fn test_fix_is_idempotent() {
        let source = r#"
        import { Stack } from '@tamagui/core';
        <Stack px="$2" m="$1" key={key} />;
        "#;
        let linter = create_linter(PropsOrder::default());
        let result = linter.lint_source(source, "test.tsx");
        assert_eq!(result.warning_count, 1);
        let fixed = apply_fixes(source, &result.diagnostics);
        let second = linter.lint_source(&fixed, "test.tsx");
        assert_eq!(second.warning_count, 0);
        assert_eq!(apply_fixes(&fixed, &second.diagnostics), fixed);
    }
}
