//! # chainlint
//!
//! An ordering lint for declarative UI modifier chains.
//!
//! In the modelled framework a UI element is decorated by a chain of
//! composable modifiers, and the order of the chain changes both the visual
//! result and the interactive behavior. chainlint parses source code,
//! extracts every modifier chain, and checks it against a canonical ordering
//! convention plus a small set of semantic rules.
//!
//! ## Architecture
//!
//! - **Frontend**: parse source text into [`ModifierChain`]s
//! - **Registry**: classify modifier names into canonical [`Category`]s
//! - **Rules**: check each chain and report [`Diagnostic`]s
//! - **Linter**: drive a run and assemble a [`Report`]
//!
//! ## Example
//!
//! ```
//! use chainlint::Linter;
//!
//! let linter = Linter::new();
//! let report = linter
//!     .lint_expr("Modifier.padding(8).background(color)")
//!     .unwrap();
//!
//! // background draws under the padding it follows; the convention puts
//! // background before padding
//! assert!(report.has_warnings());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod category;
pub mod chain;
pub mod config;
pub mod context;
pub mod diagnostics;
pub mod error;
pub mod frontend;
pub mod frontends;
pub mod linter;
pub mod registry;
pub mod rules;

// Re-export main types
pub use category::Category;
pub use chain::{ModifierCall, ModifierChain};
pub use config::LintConfig;
pub use context::LintContext;
pub use diagnostics::{Diagnostic, Report, Severity};
pub use error::{LintError, Result};
pub use frontend::{ChainFrontend, ParseError, SourceLocation};
pub use linter::Linter;
pub use registry::{ModifierInfo, ModifierRegistry};
pub use rules::Rule;

/// chainlint version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
