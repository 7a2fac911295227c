use crate::models::StudyGroup;

/// Check if a group may be recommended at all
///
/// Only OPEN groups are eligible. Sources are expected to pre-filter, but
/// the matcher applies this again so a stale or unfiltered source never
/// leaks closed groups.
#[inline]
pub fn is_eligible(group: &StudyGroup) -> bool {
    group.is_open()
}
