//! Route lookup and dispatch.
//!
//! # Responsibilities
//! - Store the fixed set of (prefix, handler) entries
//! - Select the entry whose prefix is the longest match for a request path
//! - Strip the matched prefix before the handler sees the path

use std::sync::Arc;
use thiserror::Error;

use crate::handlers::RequestHandler;

/// Error type for route registration.
#[derive(Debug, Error)]
pub enum RouterError {
    #[error("duplicate route prefix '{0}'")]
    DuplicatePrefix(String),
}

/// A registered (prefix, handler) pair.
pub struct RouteEntry {
    /// Path prefix this entry matches.
    pub prefix: String,
    /// Handler invoked for matching requests.
    pub handler: Arc<dyn RequestHandler>,
}

/// Longest-prefix-match dispatch table.
///
/// Built once at startup and immutable afterwards, so lookups need no
/// synchronization.
#[derive(Default)]
pub struct PrefixRouter {
    entries: Vec<RouteEntry>,
}

impl PrefixRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under a path prefix.
    ///
    /// Two entries with the identical prefix would make longest-prefix match
    /// ambiguous, so re-registration is a startup error.
    pub fn register(
        &mut self,
        prefix: impl Into<String>,
        handler: Arc<dyn RequestHandler>,
    ) -> Result<(), RouterError> {
        let prefix = prefix.into();
        if self.entries.iter().any(|e| e.prefix == prefix) {
            return Err(RouterError::DuplicatePrefix(prefix));
        }
        self.entries.push(RouteEntry { prefix, handler });
        Ok(())
    }

    /// Find the entry with the longest prefix matching `path`.
    ///
    /// Returns the entry and the remainder of the path after the matched
    /// prefix. Returns `None` when no registered prefix matches.
    pub fn match_path<'a>(&self, path: &'a str) -> Option<(&RouteEntry, &'a str)> {
        self.entries
            .iter()
            .filter(|entry| path.starts_with(&entry.prefix))
            .max_by_key(|entry| entry.prefix.len())
            .map(|entry| (entry, &path[entry.prefix.len()..]))
    }
}
