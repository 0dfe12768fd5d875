//! Lint configuration
//!
//! Configuration is plain JSON, deserialized with serde. Everything is
//! optional; an empty object is a valid configuration that lints with the
//! defaults.
//!
//! ```json
//! {
//!     "roots": ["Modifier", "Style"],
//!     "disabled_rules": ["touch-target"],
//!     "severity": { "ordering": "error" },
//!     "modifiers": {
//!         "blur": { "category": "transform" },
//!         "badge": { "category": "semantics", "repeatable": false }
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::diagnostics::Severity;
use crate::error::{LintError, Result};
use crate::registry::ModifierInfo;

/// Deserialized lint configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    /// Identifiers chains may be rooted at (defaults to `Modifier`)
    pub roots: Vec<String>,

    /// Rule names to skip entirely
    pub disabled_rules: Vec<String>,

    /// Per-rule severity overrides
    pub severity: HashMap<String, Severity>,

    /// Extra modifiers to register (or standard entries to override)
    pub modifiers: HashMap<String, ModifierInfo>,
}

impl LintConfig {
    /// Parse a configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns `LintError::Config` if the JSON is malformed or contains
    /// unknown fields.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| LintError::Config(e.to_string()))
    }

    /// Load a configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `LintError::Io` if the file cannot be read and
    /// `LintError::Config` if its contents are malformed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LintError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Root identifiers, falling back to `Modifier` when none are configured.
    pub fn effective_roots(&self) -> Vec<String> {
        if self.roots.is_empty() {
            vec!["Modifier".to_string()]
        } else {
            self.roots.clone()
        }
    }
}
