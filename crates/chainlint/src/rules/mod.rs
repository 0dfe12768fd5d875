//! Lint rules
//!
//! Each rule inspects one [`ModifierChain`] against the registry and reports
//! findings as [`Diagnostic`]s. Rules are independent: disabling one never
//! changes what another reports.

pub mod conflict;
pub mod duplicate;
pub mod ordering;
pub mod touch_target;
pub mod unknown;

use crate::chain::ModifierChain;
use crate::diagnostics::{Diagnostic, Severity};
use crate::registry::ModifierRegistry;

/// Trait for lint rules.
///
/// Implementations produce diagnostics carrying their [`name`](Rule::name)
/// and [`default_severity`](Rule::default_severity); the linter applies any
/// configured severity override afterwards.
pub trait Rule: Send + Sync {
    /// Stable rule name, used in configuration and diagnostics.
    fn name(&self) -> &'static str;

    /// Severity when no override is configured.
    fn default_severity(&self) -> Severity;

    /// Check one chain, returning findings in call order.
    fn check(&self, chain: &ModifierChain, registry: &ModifierRegistry) -> Vec<Diagnostic>;
}

/// The shipped rule set, in registration order.
pub fn default_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ordering::OrderingRule),
        Box::new(duplicate::DuplicateRule),
        Box::new(conflict::ConflictRule),
        Box::new(touch_target::TouchTargetRule),
        Box::new(unknown::UnknownModifierRule),
    ]
}

// Re-export the rule types
pub use conflict::ConflictRule;
pub use duplicate::DuplicateRule;
pub use ordering::OrderingRule;
pub use touch_target::TouchTargetRule;
pub use unknown::UnknownModifierRule;
