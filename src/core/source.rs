//! Read-only data capabilities injected into the matcher.
//!
//! The matcher never talks to storage directly. Callers hand it something
//! that can list the currently OPEN groups and look up a profile, which
//! keeps scoring a pure function of its inputs.

use crate::models::{StudyGroup, UserProfile};

/// Supplies the candidate groups for one recommendation call
///
/// Implementations should return a consistent snapshot per call.
///
/// # Examples
///
/// ```rust
/// use studymatch_engine::core::GroupSource;
/// use studymatch_engine::models::StudyGroup;
///
/// let source = || -> Vec<StudyGroup> { Vec::new() };
/// assert!(source.fetch_open_groups().is_empty());
/// ```
pub trait GroupSource {
    /// Return every group whose status is OPEN, in a stable order
    fn fetch_open_groups(&self) -> Vec<StudyGroup>;
}

impl<F> GroupSource for F
where
    F: Fn() -> Vec<StudyGroup>,
{
    fn fetch_open_groups(&self) -> Vec<StudyGroup> {
        self()
    }
}

/// Looks up study profiles by user id
pub trait ProfileSource {
    /// Return the user's profile, or `None` if they never created one
    fn profile(&self, user_id: i64) -> Option<UserProfile>;
}
