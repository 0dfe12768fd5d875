//! Touch target rule

use crate::category::Category;
use crate::chain::ModifierChain;
use crate::diagnostics::{Diagnostic, Severity};
use crate::registry::ModifierRegistry;

use super::Rule;

/// Hints when padding precedes an interaction modifier.
///
/// Padding applied before `clickable` is outside the hit area; applying the
/// interaction first and padding after enlarges the touch target. This cuts
/// against the canonical category order on purpose, so it is a hint, not a
/// warning, and it fires at most once per chain.
pub struct TouchTargetRule;

impl Rule for TouchTargetRule {
    fn name(&self) -> &'static str {
        "touch-target"
    }

    fn default_severity(&self) -> Severity {
        Severity::Hint
    }

    fn check(&self, chain: &ModifierChain, registry: &ModifierRegistry) -> Vec<Diagnostic> {
        let mut padding_seen: Option<&str> = None;

        for call in &chain.calls {
            let Some(info) = registry.lookup(&call.name) else {
                continue;
            };

            match info.category {
                Category::Padding => {
                    padding_seen.get_or_insert(call.name.as_str());
                }
                Category::Interaction => {
                    if let Some(padding) = padding_seen {
                        let mut diag = Diagnostic::new(
                            self.name(),
                            self.default_severity(),
                            format!(
                                "`{}` before `{}` is excluded from the touch target; \
                                 apply `{}` first to enlarge the hit area",
                                padding, call.name, call.name
                            ),
                        );
                        if let Some(loc) = &call.location {
                            diag = diag.with_location(loc.clone());
                        }
                        return vec![diag];
                    }
                }
                _ => {}
            }
        }

        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontends::RustFrontend;
    use crate::ChainFrontend;

    fn check(src: &str) -> Vec<Diagnostic> {
        let chain = RustFrontend::new()
            .parse_chain(src, &["Modifier".to_string()])
            .unwrap();
        TouchTargetRule.check(&chain, &ModifierRegistry::standard())
    }

    #[test]
    fn test_padding_then_clickable_hints() {
        let diags = check("Modifier.padding(8).clickable(f)");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Hint);
        assert!(diags[0].message.contains("touch target"));
    }

    #[test]
    fn test_clickable_then_padding_is_fine() {
        let diags = check("Modifier.clickable(f).padding(8)");
        assert!(diags.is_empty());
    }

    #[test]
    fn test_no_interaction_no_hint() {
        let diags = check("Modifier.padding(8).background(c)");
        assert!(diags.is_empty());
    }

    #[test]
    fn test_fires_at_most_once() {
        let diags = check("Modifier.padding(8).clickable(f).pointer_input(h)");
        assert_eq!(diags.len(), 1);
    }
}
