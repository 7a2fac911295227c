// Model exports
pub mod domain;
pub mod responses;

pub use domain::{AvailabilitySlot, DayOfWeek, GroupMode, GroupStatus, ScoringWeights, SkillLevel, StudyGroup, UserProfile};
pub use responses::{MatchReason, ScoreResult};
