//! Source frontend trait for chainlint
//!
//! This module defines the [`ChainFrontend`] trait that separates
//! language-specific parsing and presentation from the language-agnostic
//! rule engine. Any syntax that can be read into [`ModifierChain`]s can
//! implement this trait and reuse the full rule set.
//!
//! ```text
//! Source text -> [Frontend] -> ModifierChain list -> [Rules] -> Report
//! ```
//!
//! Frontends are responsible for:
//! - Parsing source text into modifier chains
//! - Styling diagnostics for their audience
//!
//! The rule engine is responsible for:
//! - Checking chains against the registry and rule set
//! - Producing structured diagnostics

use serde::Serialize;
use std::fmt;

use crate::chain::ModifierChain;
use crate::diagnostics::Diagnostic;

// ═══════════════════════════════════════════════════════════════════════
// ERROR TYPES
// ═══════════════════════════════════════════════════════════════════════

/// Error that occurred during parsing.
#[derive(Debug, Clone)]
pub struct ParseError {
    /// Human-readable error message
    pub message: String,

    /// Optional source location
    pub location: Option<SourceLocation>,

    /// Optional source snippet for context
    pub snippet: Option<String>,
}

impl ParseError {
    /// Create a new parse error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            location: None,
            snippet: None,
        }
    }

    /// Add location information to the error.
    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    /// Add a source snippet for context.
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error: {}", self.message)?;
        if let Some(loc) = &self.location {
            write!(f, " at {}", loc)?;
        }
        if let Some(snippet) = &self.snippet {
            write!(f, "\n{}", snippet)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Source code location for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceLocation {
    /// File name or origin identifier (e.g. `<expr>` for ad-hoc input)
    pub file: String,

    /// Line number (1-indexed)
    pub line: usize,

    /// Column number (1-indexed)
    pub column: usize,
}

impl SourceLocation {
    /// Create a new source location.
    pub fn new(file: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// CHAIN FRONTEND TRAIT
// ═══════════════════════════════════════════════════════════════════════

/// Source frontend interface for chainlint.
///
/// The frontend owns everything syntax-specific: how source text becomes
/// [`ModifierChain`]s and how a [`Diagnostic`] is styled for display. The
/// rule engine never sees source text.
pub trait ChainFrontend: Send + Sync {
    /// Parse a complete source file, collecting every modifier chain in it.
    ///
    /// `origin` names the input for locations (usually the file path).
    /// `roots` are the identifiers chains may be built on.
    ///
    /// An input containing no chains is not an error; it yields an empty
    /// list.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the source cannot be parsed at all.
    fn parse_source(
        &self,
        source: &str,
        origin: &str,
        roots: &[String],
    ) -> Result<Vec<ModifierChain>, ParseError>;

    /// Parse a single chain expression.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the input is not a chain on one of `roots`.
    fn parse_chain(&self, source: &str, roots: &[String]) -> Result<ModifierChain, ParseError>;

    /// Format a diagnostic in a style appropriate for this frontend.
    fn format_diagnostic(&self, diagnostic: &Diagnostic) -> String;

    /// Return the name of this frontend.
    ///
    /// Examples: "Rust"
    fn name(&self) -> &str;

    /// Return the file extension this frontend reads.
    ///
    /// Examples: "rs"
    fn file_extension(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_creation() {
        let err = ParseError::new("unexpected token");
        assert_eq!(err.message, "unexpected token");
        assert!(err.location.is_none());
        assert!(err.snippet.is_none());
    }

    #[test]
    fn test_parse_error_with_location() {
        let err = ParseError::new("unexpected token")
            .with_location(SourceLocation::new("button.rs", 10, 5));
        assert_eq!(err.location.unwrap().line, 10);
    }

    #[test]
    fn test_parse_error_with_snippet() {
        let err = ParseError::new("unexpected token").with_snippet("Modifier.padding(");
        assert_eq!(err.snippet.unwrap(), "Modifier.padding(");
    }

    #[test]
    fn test_parse_error_display() {
        let err = ParseError::new("unexpected token")
            .with_location(SourceLocation::new("button.rs", 10, 5));
        let display = format!("{}", err);
        assert!(display.contains("Parse error"));
        assert!(display.contains("unexpected token"));
        assert!(display.contains("button.rs:10:5"));
    }

    #[test]
    fn test_source_location_display() {
        let loc = SourceLocation::new("card.rs", 42, 10);
        assert_eq!(loc.to_string(), "card.rs:42:10");
    }
}
