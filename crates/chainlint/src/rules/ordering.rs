//! Canonical ordering rule

use crate::chain::ModifierChain;
use crate::diagnostics::{Diagnostic, Severity};
use crate::registry::ModifierRegistry;

use super::Rule;

/// Checks that known modifiers appear in non-decreasing category order.
///
/// Unknown modifiers are ignored: a name the registry cannot classify must
/// never produce ordering noise. Equal categories are always fine, so a run
/// of consecutive layout calls is not a violation.
pub struct OrderingRule;

impl Rule for OrderingRule {
    fn name(&self) -> &'static str {
        "ordering"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, chain: &ModifierChain, registry: &ModifierRegistry) -> Vec<Diagnostic> {
        let mut out = Vec::new();

        // The latest (highest-category) call seen so far
        let mut watermark: Option<(&crate::chain::ModifierCall, crate::Category)> = None;

        for call in &chain.calls {
            let Some(info) = registry.lookup(&call.name) else {
                continue;
            };

            match watermark {
                Some((earlier, mark)) if info.category < mark => {
                    let mut diag = Diagnostic::new(
                        self.name(),
                        self.default_severity(),
                        format!(
                            "`{}` ({}) should come before `{}` ({})",
                            call.name,
                            info.category,
                            earlier.name,
                            mark
                        ),
                    );
                    if let Some(loc) = &call.location {
                        diag = diag.with_location(loc.clone());
                    }
                    out.push(diag);
                    // Watermark stays: every later inversion against the same
                    // call is still reported
                }
                Some((_, mark)) if info.category == mark => {}
                _ => watermark = Some((call, info.category)),
            }
        }

        out
    }
}
