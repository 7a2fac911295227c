//! StudyMatch Engine - study group recommendations for StudyMatch
//!
//! This library scores OPEN study groups against a user's study profile and
//! returns a ranked, explainable shortlist. Scoring is a pure function of
//! the profile and the candidate groups; storage is reached only through the
//! [`GroupSource`] and [`ProfileSource`] traits.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use core::{GroupSource, MatchResult, Matcher, ProfileSource, MAX_RECOMMENDATIONS};
pub use error::{Error, Result};
pub use models::{MatchReason, ScoreResult, ScoringWeights, StudyGroup, UserProfile};
pub use services::SnapshotStore;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        let matcher = Matcher::default();
        assert_eq!(*matcher.weights(), ScoringWeights::default());
        assert_eq!(MAX_RECOMMENDATIONS, 20);
    }
}
