//! Resolver configuration.

use std::env;

/// Default ceiling on hashes looked up by one resolution.
pub const DEFAULT_MAX_VISITED: usize = 100_000;

/// Configuration for [`crate::AncestryResolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AncestryConfig {
    /// Maximum number of hash lookups per resolution call.
    pub max_visited: usize,
}

impl Default for AncestryConfig {
    fn default() -> Self {
        Self {
            max_visited: DEFAULT_MAX_VISITED,
        }
    }
}

impl AncestryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `FC_ANCESTRY_MAX_VISITED`: lookup ceiling (default: 100000)
    pub fn from_env() -> Self {
        Self {
            max_visited: env::var("FC_ANCESTRY_MAX_VISITED")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|limit: &usize| *limit > 0)
                .unwrap_or(DEFAULT_MAX_VISITED),
        }
    }

    pub fn with_max_visited(max_visited: usize) -> Self {
        Self { max_visited }
    }
}
