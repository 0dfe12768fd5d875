//! Source frontends for chainlint
//!
//! Frontends implement [`ChainFrontend`](crate::frontend::ChainFrontend) for
//! a concrete syntax. The Rust frontend is the reference implementation; any
//! syntax that can be read into modifier chains can be added here.

pub mod rust;

pub use rust::RustFrontend;
