//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Runtime terminations
//! (goal found, frontier exhausted, budget cutoff, cancellation) are expressed
//! via [`crate::search::SearchOutcome`] and always come with the reached map.

/// Typed failure for pre-flight search validation.
///
/// These errors are returned before search execution begins. No reached map
/// is produced because no search steps were taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The search policy cannot describe a meaningful run.
    InvalidPolicy { detail: String },
}

impl std::fmt::Display for SearchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPolicy { detail } => {
                write!(f, "invalid search policy: {detail}")
            }
        }
    }
}

impl std::error::Error for SearchError {}
