//! Duplicate one-shot modifier rule

use std::collections::HashMap;

use crate::chain::ModifierChain;
use crate::diagnostics::{Diagnostic, Severity};
use crate::registry::{normalize, ModifierRegistry};

use super::Rule;

/// Checks that one-shot modifiers appear at most once per chain.
///
/// Repeatable modifiers (`padding`, `offset`, `background`) may appear any
/// number of times; for one-shot modifiers like `size` the first application
/// wins and later ones are dead weight.
pub struct DuplicateRule;

impl Rule for DuplicateRule {
    fn name(&self) -> &'static str {
        "duplicate"
    }

    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    fn check(&self, chain: &ModifierChain, registry: &ModifierRegistry) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        let mut seen: HashMap<String, &str> = HashMap::new();

        for call in &chain.calls {
            let Some(info) = registry.lookup(&call.name) else {
                continue;
            };

            let key = normalize(&call.name);
            match seen.get(&key) {
                Some(first) if !info.repeatable => {
                    let mut diag = Diagnostic::new(
                        self.name(),
                        self.default_severity(),
                        format!(
                            "duplicate `{}`; the first `{}` wins and this one has no effect",
                            call.name, first
                        ),
                    );
                    if let Some(loc) = &call.location {
                        diag = diag.with_location(loc.clone());
                    }
                    out.push(diag);
                }
                Some(_) => {}
                None => {
                    seen.insert(key, call.name.as_str());
                }
            }
        }

        out
    }
}
