//! # chainlint Design Documentation
//!
//! This crate contains design documentation for the chainlint project.
//!
//! ## Documentation Location
//!
//! All design documents are located in the `docs/` directory at the root
//! of this crate.
//!
//! Key documents:
//! - `ordering.md` - The canonical modifier ordering and rule rationale

// This is a documentation-only crate
#![no_std]
