use crate::models::{ScoreResult, ScoringWeights, StudyGroup, UserProfile};
use crate::core::{
    filters::is_eligible,
    scoring::calculate_match_score,
    source::{GroupSource, ProfileSource},
};

/// Maximum number of recommendations returned per call
pub const MAX_RECOMMENDATIONS: usize = 20;

/// Result of the matching process
#[derive(Debug, Clone, Default)]
pub struct MatchResult {
    pub matches: Vec<ScoreResult>,
    pub total_candidates: usize,
}

/// Recommendation orchestrator for study groups
///
/// # Pipeline Stages
/// 1. Eligibility filter (OPEN groups only)
/// 2. Per-group factor scoring
/// 3. Stable ranking by score, descending
/// 4. Truncation to [`MAX_RECOMMENDATIONS`]
///
/// A `Matcher` holds no per-call state and can be shared between threads.
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Rank candidate groups for a user
    ///
    /// # Arguments
    /// * `profile` - The user's study profile, if they have one
    /// * `candidates` - Groups fetched from the group store
    ///
    /// # Returns
    /// MatchResult with at most [`MAX_RECOMMENDATIONS`] entries. Without a
    /// profile the result is empty. Groups with equal scores keep their
    /// input order.
    pub fn recommend(&self, profile: Option<&UserProfile>, candidates: Vec<StudyGroup>) -> MatchResult {
        let Some(profile) = profile else {
            tracing::debug!("No profile supplied, skipping recommendation");
            return MatchResult::default();
        };

        let total_candidates = candidates.len();

        let mut scored: Vec<ScoreResult> = candidates
            .iter()
            // Stage 1: OPEN groups only
            .filter(|group| is_eligible(group))
            // Stage 2: Factor scoring
            .map(|group| {
                let (score, reason) = calculate_match_score(profile, group, &self.weights);
                tracing::trace!(group_id = group.id, score, ?reason, "Scored group");
                ScoreResult {
                    group_id: group.id,
                    score,
                    reason,
                }
            })
            .collect();

        // Stage 3: sort_by is stable, so ties keep fetch order
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        // Stage 4: Fixed cap
        scored.truncate(MAX_RECOMMENDATIONS);

        tracing::debug!(
            user_id = profile.user_id,
            returned = scored.len(),
            total_candidates,
            "Ranked study groups"
        );

        MatchResult {
            matches: scored,
            total_candidates,
        }
    }

    /// Rank groups from `groups` for an already-loaded profile
    ///
    /// The group source is not queried when the profile is absent.
    pub fn recommend_from<G>(&self, profile: Option<&UserProfile>, groups: &G) -> MatchResult
    where
        G: GroupSource + ?Sized,
    {
        match profile {
            Some(profile) => self.recommend(Some(profile), groups.fetch_open_groups()),
            None => MatchResult::default(),
        }
    }

    /// Look up a user's profile and rank groups for them
    pub fn recommend_for_user<P, G>(&self, user_id: i64, profiles: &P, groups: &G) -> MatchResult
    where
        P: ProfileSource + ?Sized,
        G: GroupSource + ?Sized,
    {
        let profile = profiles.profile(user_id);
        if profile.is_none() {
            tracing::debug!(user_id, "User has no profile");
        }
        self.recommend_from(profile.as_ref(), groups)
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
