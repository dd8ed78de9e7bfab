//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming Request (path)
//!     → resolver.rs (exact map lookup)
//!     → hit:  302 Found + Location header
//!     → miss: request delegated to the fallback service
//! ```
//!
//! # Design Decisions
//! - Mapping built once at startup, immutable at runtime
//! - Exact path matching only (no prefix trees, no regex)
//! - Deterministic: same path always resolves the same way
//! - Fallback owns the entire response on a miss

pub mod resolver;

pub use resolver::RedirectService;
