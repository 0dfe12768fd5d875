//! Conflicting size constraint rule

use crate::chain::ModifierChain;
use crate::diagnostics::{Diagnostic, Severity};
use crate::registry::{normalize, ModifierRegistry};

use super::Rule;

/// Which axes a size constraint pins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Width,
    Height,
    Both,
}

impl Axis {
    fn overlaps(self, other: Axis) -> bool {
        self == Axis::Both || other == Axis::Both || self == other
    }
}

/// Axis pinned by a size constraint, by normalized name.
fn constraint_axis(normalized: &str) -> Option<Axis> {
    match normalized {
        "size" | "fillmaxsize" | "requiredsize" | "wrapcontentsize" => Some(Axis::Both),
        "width" | "fillmaxwidth" => Some(Axis::Width),
        "height" | "fillmaxheight" => Some(Axis::Height),
        _ => None,
    }
}

/// Checks that no size constraint is shadowed by an earlier one.
///
/// In the modelled framework the first constraint on an axis wins, so
/// `Modifier.fill_max_width().width(40)` leaves `width` without effect.
/// Repeats of the *same* constraint are left to the `duplicate` rule.
pub struct ConflictRule;

impl Rule for ConflictRule {
    fn name(&self) -> &'static str {
        "conflict"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, chain: &ModifierChain, registry: &ModifierRegistry) -> Vec<Diagnostic> {
        let mut out = Vec::new();

        // (normalized name, source spelling, axis) of earlier constraints
        let mut pinned: Vec<(String, &str, Axis)> = Vec::new();

        for call in &chain.calls {
            if registry.lookup(&call.name).is_none() {
                continue;
            }

            let key = normalize(&call.name);
            let Some(axis) = constraint_axis(&key) else {
                continue;
            };

            let shadowed_by = pinned
                .iter()
                .find(|(earlier_key, _, earlier_axis)| {
                    *earlier_key != key && earlier_axis.overlaps(axis)
                })
                .map(|(_, spelling, _)| *spelling);

            if let Some(earlier) = shadowed_by {
                let mut diag = Diagnostic::new(
                    self.name(),
                    self.default_severity(),
                    format!(
                        "`{}` has no effect after `{}`; the first size constraint wins",
                        call.name, earlier
                    ),
                );
                if let Some(loc) = &call.location {
                    diag = diag.with_location(loc.clone());
                }
                out.push(diag);
            }

            pinned.push((key, call.name.as_str(), axis));
        }

        out
    }
}
