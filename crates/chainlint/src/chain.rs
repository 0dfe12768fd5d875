//! Modifier chain data model
//!
//! A [`ModifierChain`] is the unit of analysis: one ordered sequence of
//! modifier calls applied to a single UI element. Chains are extracted from
//! `syn` expressions by walking the receiver spine of a method-call tree down
//! to a configured root identifier (`Modifier` by default).

use proc_macro2::Span;
use quote::ToTokens;
use std::fmt;

use crate::frontend::SourceLocation;

/// A single modifier application within a chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierCall {
    /// Method name as written in the source
    pub name: String,

    /// Argument source text, one entry per argument
    pub args: Vec<String>,

    /// Where the call appears (for diagnostics)
    pub location: Option<SourceLocation>,
}

impl fmt::Display for ModifierCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name, self.args.join(", "))
    }
}

/// An ordered sequence of modifier calls rooted at one builder expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModifierChain {
    /// The root identifier the chain is built on (e.g. `Modifier`)
    pub root: String,

    /// Calls in application order, left to right
    pub calls: Vec<ModifierCall>,

    /// Where the chain begins (for diagnostics)
    pub location: Option<SourceLocation>,
}

impl ModifierChain {
    /// Extract a chain from an expression, if it is one.
    ///
    /// The expression must be a method-call spine whose base is a bare path
    /// matching one of `roots`. `then(...)` calls whose single argument is
    /// itself a chain on the same roots are flattened into the outer chain in
    /// application order; `then` arguments that are not statically known
    /// chains (variables, conditionals) are skipped.
    ///
    /// Returns `None` for expressions that are not modifier chains, including
    /// a bare root with no calls.
    pub fn from_expr(expr: &syn::Expr, roots: &[String], origin: &str) -> Option<ModifierChain> {
        let mut spine: Vec<&syn::ExprMethodCall> = Vec::new();
        let mut cursor = expr;

        loop {
            match cursor {
                syn::Expr::MethodCall(call) => {
                    spine.push(call);
                    cursor = &call.receiver;
                }
                // Parentheses and groups are transparent
                syn::Expr::Paren(inner) => cursor = &inner.expr,
                syn::Expr::Group(inner) => cursor = &inner.expr,
                syn::Expr::Path(path) => {
                    let ident = path.path.get_ident()?;
                    let root = ident.to_string();
                    if !roots.iter().any(|r| *r == root) {
                        return None;
                    }

                    let mut calls = Vec::new();
                    for call in spine.into_iter().rev() {
                        push_call(call, roots, origin, &mut calls);
                    }
                    if calls.is_empty() {
                        return None;
                    }

                    let location = Some(span_location(ident.span(), origin));
                    return Some(ModifierChain {
                        root,
                        calls,
                        location,
                    });
                }
                _ => return None,
            }
        }
    }

    /// Number of calls in the chain.
    pub fn len(&self) -> usize {
        self.calls.len()
    }

    /// Whether the chain has no calls.
    pub fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}

impl fmt::Display for ModifierChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.root)?;
        for call in &self.calls {
            write!(f, ".{}", call)?;
        }
        Ok(())
    }
}

/// Append one method call to the flattened call list.
fn push_call(
    call: &syn::ExprMethodCall,
    roots: &[String],
    origin: &str,
    out: &mut Vec<ModifierCall>,
) {
    let name = call.method.to_string();

    if name == "then" && call.args.len() == 1 {
        if let Some(inner) = ModifierChain::from_expr(&call.args[0], roots, origin) {
            out.extend(inner.calls);
        }
        // Opaque composition: contents are not statically known
        return;
    }

    let args = call
        .args
        .iter()
        .map(|arg| arg.to_token_stream().to_string())
        .collect();

    out.push(ModifierCall {
        name,
        args,
        location: Some(span_location(call.method.span(), origin)),
    });
}

/// Convert a proc-macro2 span into a 1-indexed source location.
pub(crate) fn span_location(span: Span, origin: &str) -> SourceLocation {
    let start = span.start();
    SourceLocation::new(origin, start.line, start.column + 1)
}
