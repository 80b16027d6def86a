//! Library membership checks.
//!
//! The rules only fire on components that actually come from the configured
//! library. Instead of coupling to a type checker, membership is answered
//! from the module's own `import` declarations: every local binding
//! introduced by an import is recorded together with its module specifier,
//! and a JSX element or `styled` callee is "ours" when its root identifier
//! resolves to a specifier in the configured module list.

use compact_str::CompactString;
use oxc_ast::ast::{
    CallExpression, Expression, ImportDeclarationSpecifier, JSXElementName,
    JSXMemberExpressionObject, JSXOpeningElement, Program, Statement,
};
use rustc_hash::FxHashMap;

use crate::config::LibraryConfig;

/// Import-derived membership oracle, built once per file.
#[derive(Debug, Default)]
pub struct MembershipOracle {
    /// local binding name -> module specifier it was imported from
    bindings: FxHashMap<CompactString, CompactString>,
    /// module specifiers that count as the library
    library_modules: Vec<CompactString>,
}

impl MembershipOracle {
    /// Scan the program's import declarations
    pub fn from_program(program: &Program<'_>, config: &LibraryConfig) -> Self {
        let mut bindings = FxHashMap::default();

        for stmt in &program.body {
            let Statement::ImportDeclaration(decl) = stmt else {
                continue;
            };
            if decl.import_kind.is_type() {
                continue;
            }
            let Some(specifiers) = &decl.specifiers else {
                continue;
            };
            let module = CompactString::from(decl.source.value.as_str());
            for spec in specifiers {
                let local = match spec {
                    ImportDeclarationSpecifier::ImportSpecifier(s) => {
                        if s.import_kind.is_type() {
                            continue;
                        }
                        s.local.name.as_str()
                    }
                    ImportDeclarationSpecifier::ImportDefaultSpecifier(s) => s.local.name.as_str(),
                    ImportDeclarationSpecifier::ImportNamespaceSpecifier(s) => s.local.name.as_str(),
                };
                bindings.insert(CompactString::from(local), module.clone());
            }
        }

        Self {
            bindings,
            library_modules: config
                .module_names
                .iter()
                .map(|m| CompactString::from(m.as_str()))
                .collect(),
        }
    }

    /// Module specifier a local binding was imported from, if any
    #[inline]
    pub fn module_of(&self, local_name: &str) -> Option<&str> {
        self.bindings.get(local_name).map(CompactString::as_str)
    }

    /// Whether a local binding was imported from one of the library modules
    #[inline]
    pub fn is_library_binding(&self, local_name: &str) -> bool {
        match self.module_of(local_name) {
            Some(module) => self.library_modules.iter().any(|m| m == module),
            None => false,
        }
    }

    /// Whether a JSX opening element denotes a library component.
    ///
    /// Intrinsic tags (`<div>`) are plain string tags with no binding and
    /// never match. Member expressions (`<UI.Stack>`) resolve through their
    /// leftmost identifier.
    pub fn is_library_element(&self, element: &JSXOpeningElement<'_>) -> bool {
        match root_reference(&element.name) {
            Some(name) => self.is_library_binding(name),
            None => false,
        }
    }

    /// Whether a call expression is `styled(...)` with the `styled` binding
    /// imported from the library.
    pub fn is_library_styled(&self, call: &CallExpression<'_>) -> bool {
        let Expression::Identifier(ident) = &call.callee else {
            return false;
        };
        if ident.name != "styled" {
            return false;
        }
        self.is_library_binding(ident.name.as_str())
    }
}

/// Leftmost identifier reference of a JSX element name
fn root_reference<'a>(name: &JSXElementName<'a>) -> Option<&'a str> {
    match name {
        JSXElementName::IdentifierReference(ident) => Some(ident.name.as_str()),
        JSXElementName::MemberExpression(member) => {
            let mut object = &member.object;
            loop {
                match object {
                    JSXMemberExpressionObject::IdentifierReference(ident) => {
                        return Some(ident.name.as_str());
                    }
                    JSXMemberExpressionObject::MemberExpression(inner) => {
                        object = &inner.object;
                    }
                    JSXMemberExpressionObject::ThisExpression(_) => return None,
                }
            }
        }
        // Intrinsic tags, namespaced names, `this`
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxc_allocator::Allocator;
    use oxc_parser::Parser;
    use oxc_span::SourceType;

    fn with_oracle(source: &str, check: impl FnOnce(&MembershipOracle)) {
        let allocator = Allocator::default();
        let parsed = Parser::new(&allocator, source, SourceType::tsx()).parse();
        let oracle = MembershipOracle::from_program(&parsed.program, &LibraryConfig::default());
        check(&oracle);
    }

    #[test]
    fn test_named_import_from_library() {
        with_oracle("import { Stack } from '@tamagui/core';", |oracle| {
            assert!(oracle.is_library_binding("Stack"));
            assert_eq!(oracle.module_of("Stack"), Some("@tamagui/core"));
        });
    }

    #[test]
    fn test_import_from_other_module() {
        with_oracle("import { Box } from '@mui/material';", |oracle| {
            assert!(!oracle.is_library_binding("Box"));
        });
    }

    #[test]
    fn test_aliased_import_tracks_local_name() {
        with_oracle("import { Stack as VStack } from 'tamagui';", |oracle| {
            assert!(oracle.is_library_binding("VStack"));
            assert!(!oracle.is_library_binding("Stack"));
        });
    }

    #[test]
    fn test_type_only_imports_ignored() {
        with_oracle("import type { StackProps } from 'tamagui';", |oracle| {
            assert!(!oracle.is_library_binding("StackProps"));
        });
    }

    #[test]
    fn test_unimported_name_is_not_library() {
        with_oracle("const x = 1;", |oracle| {
            assert!(!oracle.is_library_binding("Stack"));
        });
    }
}
