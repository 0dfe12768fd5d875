//! Lint run context

use std::collections::{HashMap, HashSet};

use crate::config::LintConfig;
use crate::diagnostics::Severity;

/// Runtime knobs for a lint run.
///
/// This is derived from a [`LintConfig`] once and then consulted on every
/// diagnostic, so lookups stay cheap during the run.
#[derive(Debug, Clone, Default)]
pub struct LintContext {
    /// Rules that should not run
    pub disabled_rules: HashSet<String>,

    /// Per-rule severity overrides
    pub severity_overrides: HashMap<String, Severity>,

    /// Whether to emit trace-level events while linting
    pub trace: bool,
}

impl LintContext {
    /// Create a context with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive a context from a configuration.
    pub fn from_config(config: &LintConfig) -> Self {
        Self {
            disabled_rules: config.disabled_rules.iter().cloned().collect(),
            severity_overrides: config.severity.clone(),
            trace: false,
        }
    }

    /// Whether a rule is disabled.
    pub fn is_disabled(&self, rule: &str) -> bool {
        self.disabled_rules.contains(rule)
    }

    /// The effective severity for a rule, given its default.
    pub fn severity_for(&self, rule: &str, default: Severity) -> Severity {
        self.severity_overrides
            .get(rule)
            .copied()
            .unwrap_or(default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_context() {
        let ctx = LintContext::new();
        assert!(!ctx.is_disabled("ordering"));
        assert_eq!(
            ctx.severity_for("ordering", Severity::Warning),
            Severity::Warning
        );
    }

    #[test]
    fn test_from_config() {
        let config = LintConfig::from_json(
            r#"{
                "disabled_rules": ["unknown-modifier"],
                "severity": { "ordering": "error" }
            }"#,
        )
        .unwrap();
        let ctx = LintContext::from_config(&config);

        assert!(ctx.is_disabled("unknown-modifier"));
        assert!(!ctx.is_disabled("ordering"));
        assert_eq!(
            ctx.severity_for("ordering", Severity::Warning),
            Severity::Error
        );
        assert_eq!(
            ctx.severity_for("duplicate", Severity::Warning),
            Severity::Warning
        );
    }
}
