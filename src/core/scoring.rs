use std::collections::HashSet;

use crate::core::similarity::jaccard;
use crate::models::{AvailabilitySlot, DayOfWeek, GroupMode, MatchReason, ScoringWeights, SkillLevel, StudyGroup, UserProfile};

/// Friction applied when an online-only user looks at an in-person group
pub const ONLINE_ONLY_PENALTY: f64 = 0.3;

/// Level compatibility reported when either side's level is unknown
pub const NEUTRAL_LEVEL_SCORE: f64 = 0.5;

/// Score a study group (0.0-0.85 with default weights) for a user profile
///
/// Scoring formula:
/// score = (
///     topic_fit * 0.30 +             # Jaccard of interests vs {topic}
///     time_overlap * 0.30 +          # Share of group days the user is free
///     level_gap * 0.15 +             # Ordinal closeness of levels
///     (1 - mode_distance) * 0.10     # Inverted online-only friction
/// )
///
/// The score is rounded to 4 decimal places and each reason component to 3.
/// Groups carry no required level yet, so `level_gap` takes its neutral
/// fallback.
pub fn calculate_match_score(
    profile: &UserProfile,
    group: &StudyGroup,
    weights: &ScoringWeights,
) -> (f64, MatchReason) {
    let topic_fit = jaccard(&profile.interests, [group.topic.as_str()]);
    let time_overlap = time_overlap(&profile.availability, &group.days_of_week);
    let level_gap = level_compatibility(profile.skill_level(), None);
    let mode_distance = mode_distance(profile.is_online_only, group.mode);

    let score = topic_fit * weights.topic
        + time_overlap * weights.time
        + level_gap * weights.level
        + (1.0 - mode_distance) * weights.mode;

    let reason = MatchReason {
        topic_fit: round_to(topic_fit, 3),
        time_overlap: round_to(time_overlap, 3),
        level_gap: round_to(level_gap, 3),
        mode_distance: round_to(mode_distance, 3),
    };

    (round_to(score, 4), reason)
}

/// Fraction of the group's meeting days the user is available on (0-1)
///
/// Asymmetric: the denominator is the group's distinct day count, not the
/// union. Time-of-day fields on the slots are ignored.
pub fn time_overlap(availability: &[AvailabilitySlot], group_days: &[DayOfWeek]) -> f64 {
    if availability.is_empty() || group_days.is_empty() {
        return 0.0;
    }

    let user_days: HashSet<DayOfWeek> = availability.iter().map(|slot| slot.day).collect();
    let group_days: HashSet<DayOfWeek> = group_days.iter().copied().collect();

    let shared = user_days.intersection(&group_days).count();

    shared as f64 / group_days.len().max(1) as f64
}

/// Closeness of two skill levels on the BEGINNER/INTERMEDIATE/ADVANCED scale
///
/// Same level = 1.0, adjacent = 0.5, two apart = 0.0. A missing or
/// unrecognised level on either side gives the neutral 0.5.
pub fn level_gap(user_level: Option<&str>, required_level: Option<&str>) -> f64 {
    level_compatibility(
        user_level.and_then(SkillLevel::parse),
        required_level.and_then(SkillLevel::parse),
    )
}

/// [`level_gap`] over already-parsed levels
pub fn level_compatibility(user_level: Option<SkillLevel>, required_level: Option<SkillLevel>) -> f64 {
    let (Some(user), Some(required)) = (user_level, required_level) else {
        return NEUTRAL_LEVEL_SCORE;
    };

    let diff = (user.rank() as f64 - required.rank() as f64).abs();

    1.0 - (diff / 2.0).min(1.0)
}

/// Delivery-mode friction: 0.3 for an online-only user and an OFFLINE or
/// HYBRID group, 0.0 otherwise
#[inline]
pub fn mode_distance(is_online_only: bool, mode: GroupMode) -> f64 {
    match mode {
        GroupMode::Online => 0.0,
        GroupMode::Offline | GroupMode::Hybrid if is_online_only => ONLINE_ONLY_PENALTY,
        GroupMode::Offline | GroupMode::Hybrid => 0.0,
    }
}

/// Round to `places` decimals, half-to-even on the exact binary value
///
/// Scaling by a power of ten first would round an already-inexact product,
/// so ties like 0.0625 -> 0.062 go through decimal formatting instead.
fn round_to(value: f64, places: usize) -> f64 {
    format!("{:.*}", places, value).parse().unwrap_or(value)
}
