// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod similarity;
pub mod source;

pub use filters::is_eligible;
pub use matcher::{MatchResult, Matcher, MAX_RECOMMENDATIONS};
pub use scoring::{calculate_match_score, level_gap, mode_distance, time_overlap};
pub use similarity::jaccard;
pub use source::{GroupSource, ProfileSource};
