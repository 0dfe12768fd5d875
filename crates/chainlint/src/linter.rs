//! Lint run orchestration
//!
//! [`Linter`] ties the pieces together: a frontend turns source into chains,
//! every enabled rule checks every chain, and configured severity overrides
//! are applied to the findings.

use tracing::debug;

use crate::chain::ModifierChain;
use crate::config::LintConfig;
use crate::context::LintContext;
use crate::diagnostics::{Diagnostic, Report};
use crate::error::Result;
use crate::frontend::ChainFrontend;
use crate::frontends::RustFrontend;
use crate::registry::ModifierRegistry;
use crate::rules::{default_rules, Rule};

/// A configured lint run driver.
///
/// # Example
///
/// ```
/// use chainlint::Linter;
///
/// let linter = Linter::new();
/// let report = linter.lint_expr("Modifier.padding(8).background(color)").unwrap();
/// assert!(report.has_warnings());
/// ```
pub struct Linter {
    registry: ModifierRegistry,
    rules: Vec<Box<dyn Rule>>,
    ctx: LintContext,
    roots: Vec<String>,
    frontend: Box<dyn ChainFrontend>,
}

impl Default for Linter {
    fn default() -> Self {
        Self::new()
    }
}

impl Linter {
    /// Create a linter with the standard registry, the shipped rule set, and
    /// the Rust frontend.
    pub fn new() -> Self {
        Self {
            registry: ModifierRegistry::standard(),
            rules: default_rules(),
            ctx: LintContext::new(),
            roots: vec!["Modifier".to_string()],
            frontend: Box::new(RustFrontend::new()),
        }
    }

    /// Create a linter from a configuration.
    pub fn from_config(config: &LintConfig) -> Self {
        let registry = ModifierRegistry::standard();
        for (name, info) in &config.modifiers {
            registry.register(name, *info);
        }

        Self {
            registry,
            rules: default_rules(),
            ctx: LintContext::from_config(config),
            roots: config.effective_roots(),
            frontend: Box::new(RustFrontend::new()),
        }
    }

    /// Replace the frontend.
    pub fn with_frontend(mut self, frontend: Box<dyn ChainFrontend>) -> Self {
        self.frontend = frontend;
        self
    }

    /// Add a custom rule after the shipped ones.
    pub fn with_rule(mut self, rule: Box<dyn Rule>) -> Self {
        self.rules.push(rule);
        self
    }

    /// The modifier registry in use (extensible at runtime).
    pub fn registry(&self) -> &ModifierRegistry {
        &self.registry
    }

    /// The frontend in use.
    pub fn frontend(&self) -> &dyn ChainFrontend {
        self.frontend.as_ref()
    }

    /// Names of the rules that will run (disabled ones excluded).
    pub fn active_rules(&self) -> Vec<&'static str> {
        self.rules
            .iter()
            .map(|r| r.name())
            .filter(|name| !self.ctx.is_disabled(name))
            .collect()
    }

    /// Lint a complete source file.
    ///
    /// # Errors
    ///
    /// Returns `LintError::Parse` if the source cannot be parsed.
    pub fn lint_source(&self, source: &str, origin: &str) -> Result<Report> {
        let chains = self.frontend.parse_source(source, origin, &self.roots)?;
        debug!(origin, chains = chains.len(), "parsed source");
        Ok(self.lint_chains(&chains))
    }

    /// Lint a single chain expression.
    ///
    /// # Errors
    ///
    /// Returns `LintError::Parse` if the input is not a modifier chain.
    pub fn lint_expr(&self, source: &str) -> Result<Report> {
        let chain = self.frontend.parse_chain(source, &self.roots)?;
        Ok(self.lint_chains(std::slice::from_ref(&chain)))
    }

    /// Lint pre-built chains.
    pub fn lint_chains(&self, chains: &[ModifierChain]) -> Report {
        let mut report = Report::new();
        report.chains = chains.len();

        for (index, chain) in chains.iter().enumerate() {
            report
                .diagnostics
                .extend(self.check_chain(chain, index));
        }

        report
    }

    /// Lint one chain, returning its findings.
    pub fn lint_chain(&self, chain: &ModifierChain) -> Vec<Diagnostic> {
        self.check_chain(chain, 0)
    }

    fn check_chain(&self, chain: &ModifierChain, index: usize) -> Vec<Diagnostic> {
        let mut out = Vec::new();

        for rule in &self.rules {
            if self.ctx.is_disabled(rule.name()) {
                continue;
            }

            let severity = self.ctx.severity_for(rule.name(), rule.default_severity());
            for mut diag in rule.check(chain, &self.registry) {
                diag.severity = severity;
                diag.chain = index;
                out.push(diag);
            }
        }

        if self.ctx.trace {
            debug!(chain = %chain, findings = out.len(), "checked chain");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::Severity;

    #[test]
    fn test_clean_chain() {
        let linter = Linter::new();
        let report = linter
            .lint_expr("Modifier.size(40).background(c).padding(8)")
            .unwrap();
        assert!(report.is_clean());
        assert_eq!(report.chains, 1);
    }

    #[test]
    fn test_disabled_rule_does_not_run() {
        let config = LintConfig::from_json(r#"{ "disabled_rules": ["ordering"] }"#).unwrap();
        let linter = Linter::from_config(&config);
        let report = linter.lint_expr("Modifier.padding(8).background(c)").unwrap();
        assert!(report.diagnostics.iter().all(|d| d.rule != "ordering"));
    }

    #[test]
    fn test_severity_override_applies() {
        let config =
            LintConfig::from_json(r#"{ "severity": { "ordering": "error" } }"#).unwrap();
        let linter = Linter::from_config(&config);
        let report = linter.lint_expr("Modifier.padding(8).background(c)").unwrap();
        assert!(report.has_errors());
    }

    #[test]
    fn test_config_modifiers_extend_registry() {
        let config = LintConfig::from_json(
            r#"{ "modifiers": { "blur": { "category": "transform" } } }"#,
        )
        .unwrap();
        let linter = Linter::from_config(&config);
        let report = linter.lint_expr("Modifier.blur(4).padding(8)").unwrap();
        assert!(report.is_clean());
    }

    #[test]
    fn test_custom_roots() {
        let config = LintConfig::from_json(r#"{ "roots": ["Style"] }"#).unwrap();
        let linter = Linter::from_config(&config);
        let report = linter.lint_expr("Style.padding(8).background(c)").unwrap();
        assert_eq!(report.count(Severity::Warning), 1);
        assert!(linter.lint_expr("Modifier.padding(8)").is_err());
    }

    #[test]
    fn test_active_rules_excludes_disabled() {
        let config = LintConfig::from_json(r#"{ "disabled_rules": ["conflict"] }"#).unwrap();
        let linter = Linter::from_config(&config);
        let active = linter.active_rules();
        assert!(active.contains(&"ordering"));
        assert!(!active.contains(&"conflict"));
    }

    #[test]
    fn test_chain_indices_in_source_lint() {
        let linter = Linter::new();
        let source = r#"
            fn f() {
                let a = Modifier.padding(8).background(c);
                let b = Modifier.clickable(f).size(40);
            }
        "#;
        let report = linter.lint_source(source, "f.rs").unwrap();
        assert_eq!(report.chains, 2);
        assert!(report.diagnostics.iter().any(|d| d.chain == 0));
        assert!(report.diagnostics.iter().any(|d| d.chain == 1));
    }
}
