//! Document loading subsystem.
//!
//! # Data Flow
//! ```text
//! YAML document (file or string)
//!     → loader.rs (read & deserialize into PathEntry records)
//!     → fold into path → URL map (document order, last duplicate wins)
//!     → routing::RedirectService (frozen, immutable)
//! ```
//!
//! # Design Decisions
//! - Parsing is structural only; URL values are never validated
//! - Errors carry the underlying I/O or parse failure unchanged
//! - No partial result: a malformed document yields an error and no handler

pub mod loader;
pub mod schema;

pub use loader::{
    json_str_service, load_yaml, parse_yaml, path_map, yaml_service, yaml_str_service, LoadError,
};
pub use schema::PathEntry;
