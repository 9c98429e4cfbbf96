//! Tree builder configuration.

use serde::Deserialize;

/// Configuration controlling how raw trees are lowered.
///
/// # Defaults
///
/// - `max_depth`: 512
/// - `reject_syntax_errors`: `true`
///
/// Missing fields take their default when the configuration is
/// deserialized, so hosts can embed a partial table in their own files.
///
/// # Example
///
/// ```
/// use javelin_syntax::BuildConfig;
///
/// let config = BuildConfig::default();
/// assert_eq!(config.max_depth(), 512);
/// assert!(config.reject_syntax_errors());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BuildConfig {
    /// Maximum nesting of raw nodes the builder will descend into.
    max_depth: usize,
    /// Whether raw trees containing ERROR or MISSING nodes are refused.
    reject_syntax_errors: bool,
}

impl BuildConfig {
    /// Creates a configuration with explicit values.
    #[must_use]
    pub const fn new(max_depth: usize, reject_syntax_errors: bool) -> Self {
        Self {
            max_depth,
            reject_syntax_errors,
        }
    }

    /// Returns the maximum nesting depth.
    #[must_use]
    pub const fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Returns whether syntax errors abort the build.
    #[must_use]
    pub const fn reject_syntax_errors(&self) -> bool {
        self.reject_syntax_errors
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            max_depth: 512,
            reject_syntax_errors: true,
        }
    }
}
