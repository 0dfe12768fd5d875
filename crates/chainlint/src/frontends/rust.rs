//! Rust source frontend
//!
//! Parses Rust source with `syn` and collects every modifier chain in it,
//! wherever the chain appears: statements, arguments, closures, nested
//! builder calls.

use syn::visit::Visit;

use crate::chain::{span_location, ModifierChain};
use crate::diagnostics::Diagnostic;
use crate::frontend::{ChainFrontend, ParseError};

/// Rust source frontend.
///
/// # Example
///
/// ```
/// use chainlint::frontends::RustFrontend;
/// use chainlint::ChainFrontend;
///
/// let frontend = RustFrontend::new();
/// let roots = vec!["Modifier".to_string()];
/// let chain = frontend
///     .parse_chain("Modifier.padding(8).background(color)", &roots)
///     .unwrap();
/// assert_eq!(chain.len(), 2);
/// assert_eq!(frontend.name(), "Rust");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RustFrontend;

impl RustFrontend {
    /// Create a new Rust frontend.
    pub fn new() -> Self {
        Self
    }

    /// Parse a single chain expression, naming the input `origin` in
    /// locations.
    fn parse_chain_at(
        &self,
        source: &str,
        roots: &[String],
        origin: &str,
    ) -> Result<ModifierChain, ParseError> {
        let expr: syn::Expr = syn::parse_str(source)
            .map_err(|e| ParseError::new(format!("Rust syntax error: {}", e)))?;

        ModifierChain::from_expr(&expr, roots, origin).ok_or_else(|| {
            ParseError::new(format!(
                "not a modifier chain rooted at {}",
                roots.join(" or ")
            ))
            .with_snippet(source)
        })
    }
}

impl ChainFrontend for RustFrontend {
    fn parse_source(
        &self,
        source: &str,
        origin: &str,
        roots: &[String],
    ) -> Result<Vec<ModifierChain>, ParseError> {
        // Try parsing as a full file first
        let file = match syn::parse_file(source) {
            Ok(file) => file,
            Err(_) => {
                // A bare chain expression is accepted as a degenerate file
                if let Ok(chain) = self.parse_chain_at(source, roots, origin) {
                    return Ok(vec![chain]);
                }
                match syn::parse_file(source) {
                    Ok(_) => unreachable!(),
                    Err(e) => {
                        return Err(ParseError::new(format!("Rust syntax error: {}", e))
                            .with_location(span_location(e.span(), origin)))
                    }
                }
            }
        };

        let mut collector = ChainCollector {
            roots,
            origin,
            chains: Vec::new(),
        };
        collector.visit_file(&file);
        Ok(collector.chains)
    }

    fn parse_chain(&self, source: &str, roots: &[String]) -> Result<ModifierChain, ParseError> {
        self.parse_chain_at(source, roots, "<expr>")
    }

    fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String {
        match &diagnostic.location {
            Some(loc) => format!(
                "{}[{}]: {}\n  --> {}",
                diagnostic.severity, diagnostic.rule, diagnostic.message, loc
            ),
            None => format!(
                "{}[{}]: {}",
                diagnostic.severity, diagnostic.rule, diagnostic.message
            ),
        }
    }

    fn name(&self) -> &str {
        "Rust"
    }

    fn file_extension(&self) -> &str {
        "rs"
    }
}

/// AST visitor collecting every modifier chain in a file.
struct ChainCollector<'a> {
    roots: &'a [String],
    origin: &'a str,
    chains: Vec<ModifierChain>,
}

impl<'a, 'ast> Visit<'ast> for ChainCollector<'a> {
    fn visit_expr_method_call(&mut self, node: &'ast syn::ExprMethodCall) {
        let expr = syn::Expr::MethodCall(node.clone());
        if let Some(chain) = ModifierChain::from_expr(&expr, self.roots, self.origin) {
            self.chains.push(chain);
            self.visit_spine_args(node);
            return;
        }
        syn::visit::visit_expr_method_call(self, node);
    }
}

impl<'a> ChainCollector<'a> {
    /// Visit the argument subtrees of every call on an extracted chain's
    /// spine, so chains nested in arguments (e.g. content closures) are still
    /// found. A flattened `then(...)` argument is not re-extracted as its own
    /// chain (its calls already belong to the outer chain), but its spine
    /// arguments are still walked for nested chains.
    fn visit_spine_args<'ast>(&mut self, outermost: &'ast syn::ExprMethodCall) {
        let mut cursor = outermost;
        loop {
            let flattened_then = cursor.method == "then"
                && cursor.args.len() == 1
                && ModifierChain::from_expr(&cursor.args[0], self.roots, self.origin).is_some();

            if flattened_then {
                if let syn::Expr::MethodCall(inner) = unwrap_groups(&cursor.args[0]) {
                    self.visit_spine_args(inner);
                }
            } else {
                for arg in &cursor.args {
                    self.visit_expr(arg);
                }
            }

            match unwrap_groups(&cursor.receiver) {
                syn::Expr::MethodCall(inner) => cursor = inner,
                _ => break,
            }
        }
    }
}

/// Strip parentheses and groups.
fn unwrap_groups(expr: &syn::Expr) -> &syn::Expr {
    let mut cursor = expr;
    loop {
        match cursor {
            syn::Expr::Paren(inner) => cursor = &inner.expr,
            syn::Expr::Group(inner) => cursor = &inner.expr,
            other => return other,
        }
    }
}
