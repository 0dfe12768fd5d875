//! Unknown modifier rule

use crate::chain::ModifierChain;
use crate::diagnostics::{Diagnostic, Severity};
use crate::registry::ModifierRegistry;

use super::Rule;

/// Surfaces modifier names the registry cannot classify.
///
/// Unknown names are skipped by every other rule, so without this hint a
/// misspelled modifier would silently escape all checking.
pub struct UnknownModifierRule;

impl Rule for UnknownModifierRule {
    fn name(&self) -> &'static str {
        "unknown-modifier"
    }

    fn default_severity(&self) -> Severity {
        Severity::Hint
    }

    fn check(&self, chain: &ModifierChain, registry: &ModifierRegistry) -> Vec<Diagnostic> {
        let mut out = Vec::new();

        for call in &chain.calls {
            if registry.lookup(&call.name).is_some() {
                continue;
            }

            let mut diag = Diagnostic::new(
                self.name(),
                self.default_severity(),
                format!(
                    "unknown modifier `{}`; not checked for ordering",
                    call.name
                ),
            );
            if let Some(loc) = &call.location {
                diag = diag.with_location(loc.clone());
            }
            out.push(diag);
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontends::RustFrontend;
    use crate::registry::ModifierInfo;
    use crate::category::Category;
    use crate::ChainFrontend;

    fn check(src: &str, registry: &ModifierRegistry) -> Vec<Diagnostic> {
        let chain = RustFrontend::new()
            .parse_chain(src, &["Modifier".to_string()])
            .unwrap();
        UnknownModifierRule.check(&chain, registry)
    }

    #[test]
    fn test_known_modifiers_are_clean() {
        let registry = ModifierRegistry::standard();
        let diags = check("Modifier.padding(8).background(c)", &registry);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_unknown_modifier_is_hinted() {
        let registry = ModifierRegistry::standard();
        let diags = check("Modifier.paddding(8)", &registry);
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("unknown modifier `paddding`"));
    }

    #[test]
    fn test_registered_extension_is_known() {
        let registry = ModifierRegistry::standard();
        registry.register("blur", ModifierInfo::new(Category::Transform));
        let diags = check("Modifier.blur(4)", &registry);
        assert!(diags.is_empty());
    }
}
