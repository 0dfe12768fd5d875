//! Diagnostics produced by lint rules

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::frontend::SourceLocation;

/// How serious a diagnostic is.
///
/// Variants are ordered by increasing severity, so `Error > Warning > Hint`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    /// Stylistic advice; never affects exit status
    Hint,

    /// Convention violation; fails under `--deny-warnings`
    Warning,

    /// Violation promoted to an error by configuration
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Severity::Hint => "hint",
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        f.write_str(name)
    }
}

/// One finding from one rule about one chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// Name of the rule that produced this finding
    pub rule: String,

    /// Severity after any configured override
    pub severity: Severity,

    /// Human-readable description of the finding
    pub message: String,

    /// Where in the source the finding applies
    pub location: Option<SourceLocation>,

    /// Index of the chain within the lint run (0-based)
    pub chain: usize,
}

impl Diagnostic {
    /// Create a new diagnostic.
    pub fn new(rule: impl Into<String>, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            severity,
            message: message.into(),
            location: None,
            chain: 0,
        }
    }

    /// Add location information.
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Set the chain index.
    pub fn with_chain(mut self, chain: usize) -> Self {
        self.chain = chain;
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{}]: {}", self.severity, self.rule, self.message)?;
        if let Some(loc) = &self.location {
            write!(f, "\n  --> {}", loc)?;
        }
        Ok(())
    }
}

/// The outcome of one lint run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    /// All findings, in deterministic order
    /// (chain order, then rule registration order, then call order)
    pub diagnostics: Vec<Diagnostic>,

    /// Number of chains examined
    pub chains: usize,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count findings at a given severity.
    pub fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// Whether any finding is an error.
    pub fn has_errors(&self) -> bool {
        self.count(Severity::Error) > 0
    }

    /// Whether any finding is a warning.
    pub fn has_warnings(&self) -> bool {
        self.count(Severity::Warning) > 0
    }

    /// Whether the run produced no findings at all.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Absorb another report, preserving order.
    pub fn merge(&mut self, other: Report) {
        let offset = self.chains;
        for mut diag in other.diagnostics {
            diag.chain += offset;
            self.diagnostics.push(diag);
        }
        self.chains += other.chains;
    }

    /// Serialize the report as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns a `serde_json` error if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for diag in &self.diagnostics {
            writeln!(f, "{}", diag)?;
        }
        write!(
            f,
            "{} chain{} checked: {} error{}, {} warning{}, {} hint{}",
            self.chains,
            if self.chains == 1 { "" } else { "s" },
            self.count(Severity::Error),
            if self.count(Severity::Error) == 1 { "" } else { "s" },
            self.count(Severity::Warning),
            if self.count(Severity::Warning) == 1 { "" } else { "s" },
            self.count(Severity::Hint),
            if self.count(Severity::Hint) == 1 { "" } else { "s" },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Error > Severity::Warning);
        assert!(Severity::Warning > Severity::Hint);
    }

    #[test]
    fn test_diagnostic_display() {
        let diag = Diagnostic::new("ordering", Severity::Warning, "out of order")
            .with_location(SourceLocation::new("button.rs", 3, 14));
        let display = diag.to_string();
        assert!(display.contains("warning[ordering]"));
        assert!(display.contains("button.rs:3:14"));
    }

    #[test]
    fn test_report_counts() {
        let mut report = Report::new();
        report.chains = 2;
        report
            .diagnostics
            .push(Diagnostic::new("ordering", Severity::Warning, "a"));
        report
            .diagnostics
            .push(Diagnostic::new("duplicate", Severity::Hint, "b"));

        assert_eq!(report.count(Severity::Warning), 1);
        assert_eq!(report.count(Severity::Hint), 1);
        assert!(report.has_warnings());
        assert!(!report.has_errors());
        assert!(!report.is_clean());
    }

    #[test]
    fn test_report_merge_offsets_chains() {
        let mut left = Report::new();
        left.chains = 2;

        let mut right = Report::new();
        right.chains = 1;
        right
            .diagnostics
            .push(Diagnostic::new("ordering", Severity::Warning, "a").with_chain(0));

        left.merge(right);
        assert_eq!(left.chains, 3);
        assert_eq!(left.diagnostics[0].chain, 2);
    }

    #[test]
    fn test_report_json() {
        let mut report = Report::new();
        report.chains = 1;
        report
            .diagnostics
            .push(Diagnostic::new("ordering", Severity::Warning, "out of order"));
        let json = report.to_json().unwrap();
        assert!(json.contains("\"rule\": \"ordering\""));
        assert!(json.contains("\"severity\": \"warning\""));
    }

    #[test]
    fn test_empty_report_display() {
        let report = Report::new();
        assert_eq!(
            report.to_string(),
            "0 chains checked: 0 errors, 0 warnings, 0 hints"
        );
    }
}
