//! Path-to-URL redirect routing for axum/tower HTTP servers.
//!
//! Builds a request handler that answers mapped paths with a `302 Found`
//! redirect and hands everything else to a caller-supplied fallback service.
//! The mapping comes either from an in-memory map or from a YAML document of
//! `path`/`url` records.

pub mod document;
pub mod routing;

pub use document::{LoadError, PathEntry};
pub use routing::RedirectService;
