use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Day of the week, stored uppercase ("MON".."SUN")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DayOfWeek {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Mon,
        DayOfWeek::Tue,
        DayOfWeek::Wed,
        DayOfWeek::Thu,
        DayOfWeek::Fri,
        DayOfWeek::Sat,
        DayOfWeek::Sun,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Mon => "MON",
            DayOfWeek::Tue => "TUE",
            DayOfWeek::Wed => "WED",
            DayOfWeek::Thu => "THU",
            DayOfWeek::Fri => "FRI",
            DayOfWeek::Sat => "SAT",
            DayOfWeek::Sun => "SUN",
        }
    }

    /// Parse the comma-separated storage form (e.g. "MON,WED")
    ///
    /// Blank entries and unrecognised day codes are skipped.
    pub fn parse_list(raw: &str) -> Vec<DayOfWeek> {
        raw.split(',')
            .filter_map(|part| part.trim().parse().ok())
            .collect()
    }
}

impl FromStr for DayOfWeek {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MON" => Ok(DayOfWeek::Mon),
            "TUE" => Ok(DayOfWeek::Tue),
            "WED" => Ok(DayOfWeek::Wed),
            "THU" => Ok(DayOfWeek::Thu),
            "FRI" => Ok(DayOfWeek::Fri),
            "SAT" => Ok(DayOfWeek::Sat),
            "SUN" => Ok(DayOfWeek::Sun),
            other => Err(format!("unknown day of week: {}", other)),
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordinal skill level: BEGINNER < INTERMEDIATE < ADVANCED
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    /// Ordinal rank used for distance computation
    pub fn rank(&self) -> u8 {
        match self {
            SkillLevel::Beginner => 0,
            SkillLevel::Intermediate => 1,
            SkillLevel::Advanced => 2,
        }
    }

    /// Parse a stored level string. Matching is exact; anything else is unknown.
    pub fn parse(raw: &str) -> Option<SkillLevel> {
        match raw {
            "BEGINNER" => Some(SkillLevel::Beginner),
            "INTERMEDIATE" => Some(SkillLevel::Intermediate),
            "ADVANCED" => Some(SkillLevel::Advanced),
            _ => None,
        }
    }
}

/// How a study group meets
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GroupMode {
    #[default]
    Online,
    Offline,
    Hybrid,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GroupStatus {
    #[default]
    Open,
    Closed,
}

/// One entry of a user's weekly availability
///
/// Only `day` takes part in matching; the time window is carried through
/// for callers that display it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilitySlot {
    pub day: DayOfWeek,
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

impl AvailabilitySlot {
    pub fn on(day: DayOfWeek) -> Self {
        Self {
            day,
            start: None,
            end: None,
        }
    }
}

/// Study profile of a user, as read from the profile store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: i64,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub interests: Vec<String>,
    /// Slots without a recognised day are dropped
    #[serde(default, deserialize_with = "deserialize_availability")]
    pub availability: Vec<AvailabilitySlot>,
    /// Raw stored level; unrecognised values are treated as unknown
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub is_online_only: bool,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub goal: Option<String>,
    #[serde(default)]
    pub desired_duration_weeks: Option<u16>,
}

impl UserProfile {
    /// Helper to get the parsed skill level, if recognised
    pub fn skill_level(&self) -> Option<SkillLevel> {
        self.level.as_deref().and_then(SkillLevel::parse)
    }
}

/// A study group that may be recommended
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyGroup {
    pub id: i64,
    #[serde(default)]
    pub owner_id: Option<i64>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: Option<String>,
    pub topic: String,
    #[serde(default)]
    pub mode: GroupMode,
    #[serde(default)]
    pub location: Option<String>,
    /// Accepts a JSON list or the stored "MON,WED" form
    #[serde(default, deserialize_with = "deserialize_days")]
    pub days_of_week: Vec<DayOfWeek>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub capacity: Option<u16>,
    #[serde(default)]
    pub status: GroupStatus,
}

impl StudyGroup {
    pub fn is_open(&self) -> bool {
        self.status == GroupStatus::Open
    }
}

/// Treat JSON `null` like a missing key
fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
struct StoredSlot {
    #[serde(default)]
    day: Option<String>,
    #[serde(default)]
    start: Option<String>,
    #[serde(default)]
    end: Option<String>,
}

fn deserialize_availability<'de, D>(deserializer: D) -> Result<Vec<AvailabilitySlot>, D::Error>
where
    D: Deserializer<'de>,
{
    let stored = Option::<Vec<StoredSlot>>::deserialize(deserializer)?.unwrap_or_default();

    Ok(stored
        .into_iter()
        .filter_map(|slot| {
            let day = slot.day?.parse().ok()?;
            Some(AvailabilitySlot {
                day,
                start: slot.start,
                end: slot.end,
            })
        })
        .collect())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DaysRepr {
    List(Vec<DayOfWeek>),
    Csv(String),
}

fn deserialize_days<'de, D>(deserializer: D) -> Result<Vec<DayOfWeek>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<DaysRepr>::deserialize(deserializer)? {
        Some(DaysRepr::List(days)) => days,
        Some(DaysRepr::Csv(raw)) => DayOfWeek::parse_list(&raw),
        None => Vec::new(),
    })
}

/// Scoring weights
///
/// The defaults sum to 0.85 rather than 1.0, so composite scores top out
/// at 0.85. Downstream thresholds rely on that scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub topic: f64,
    pub time: f64,
    pub level: f64,
    pub mode: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            topic: 0.30,
            time: 0.30,
            level: 0.15,
            mode: 0.10,
        }
    }
}
