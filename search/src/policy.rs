//! Search policy types.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::SearchError;

/// Search budget configuration.
///
/// The default policy is unbounded: the engine runs until it pops a goal or
/// exhausts the frontier. Budgets turn the run into a bounded one that may end
/// in [`crate::search::SearchOutcome::Cutoff`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchPolicy {
    /// Hard cap on node expansions. `None` means unlimited.
    pub max_expansions: Option<u64>,
    /// Depth cutoff: children deeper than this are never generated.
    pub max_depth: Option<u32>,
}

impl SearchPolicy {
    /// The unbounded policy used by the named entry points.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            max_expansions: None,
            max_depth: None,
        }
    }

    /// A policy that stops after `max_expansions` expansions.
    #[must_use]
    pub const fn with_max_expansions(mut self, max_expansions: u64) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    /// A policy that never generates children deeper than `max_depth`.
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Whether either budget is set.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.max_expansions.is_some() || self.max_depth.is_some()
    }

    /// Validate that this policy describes a runnable search.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] if `max_expansions` is zero,
    /// which would stop every search before its root is expanded.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }
}

/// Cooperative cancellation flag shared between a search and its host.
///
/// The engine checks the flag once per frontier pop. Cloning the token shares
/// the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that every search observing this token stop.
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Release);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Acquire)
    }
}
