use serde::{Deserialize, Serialize};

/// Per-factor breakdown of a recommendation score
///
/// `mode_distance` is the raw friction value; the composite score uses its
/// complement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchReason {
    #[serde(rename = "topicFit")]
    pub topic_fit: f64,
    #[serde(rename = "timeOverlap")]
    pub time_overlap: f64,
    #[serde(rename = "levelGap")]
    pub level_gap: f64,
    #[serde(rename = "modeDistance")]
    pub mode_distance: f64,
}

/// Scored recommendation for one study group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub group_id: i64,
    pub score: f64,
    pub reason: MatchReason,
}
