//! Document record definitions.

use serde::Deserialize;

/// One path-to-URL record as it appears in the source document:
///
/// ```text
/// - path: /some-path
///   url: https://www.some-url.com/demo
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PathEntry {
    /// Request path to match, used verbatim as the lookup key.
    pub path: String,

    /// Redirect target, passed through to the Location header unvalidated.
    pub url: String,
}
