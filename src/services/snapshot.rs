use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

use crate::core::{GroupSource, ProfileSource};
use crate::models::{StudyGroup, UserProfile};

/// Errors that can occur while loading a snapshot
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid snapshot JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// On-disk layout of a snapshot document
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SnapshotDocument {
    #[serde(default)]
    pub profiles: Vec<UserProfile>,
    #[serde(default)]
    pub groups: Vec<StudyGroup>,
}

/// Read-only, in-memory view of profiles and study groups
///
/// Groups keep their document order, which is the tie-break order used by
/// the matcher.
#[derive(Debug, Clone, Default)]
pub struct SnapshotStore {
    profiles: HashMap<i64, UserProfile>,
    groups: Vec<StudyGroup>,
}

impl SnapshotStore {
    pub fn new(profiles: Vec<UserProfile>, groups: Vec<StudyGroup>) -> Self {
        let profiles = profiles
            .into_iter()
            .map(|profile| (profile.user_id, profile))
            .collect();

        Self { profiles, groups }
    }

    /// Parse a snapshot from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let document: SnapshotDocument = serde_json::from_str(json)?;
        Ok(Self::from(document))
    }

    /// Load a snapshot from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let store = Self::from_json(&raw)?;

        tracing::debug!(
            "Loaded snapshot from {}: {} profiles, {} groups",
            path.display(),
            store.profiles.len(),
            store.groups.len()
        );

        Ok(store)
    }

    pub fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}

impl From<SnapshotDocument> for SnapshotStore {
    fn from(document: SnapshotDocument) -> Self {
        Self::new(document.profiles, document.groups)
    }
}

impl GroupSource for SnapshotStore {
    fn fetch_open_groups(&self) -> Vec<StudyGroup> {
        self.groups.iter().filter(|group| group.is_open()).cloned().collect()
    }
}

impl ProfileSource for SnapshotStore {
    fn profile(&self, user_id: i64) -> Option<UserProfile> {
        self.profiles.get(&user_id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SNAPSHOT: &str = r#"{
        "profiles": [
            {"user_id": 1, "interests": ["Rust"], "availability": [{"day": "TUE", "start": "19:00", "end": "21:00"}], "level": "INTERMEDIATE"}
        ],
        "groups": [
            {"id": 10, "title": "Rust Night", "topic": "rust", "mode": "ONLINE", "days_of_week": ["TUE"], "status": "OPEN"},
            {"id": 11, "title": "Closed", "topic": "rust", "mode": "OFFLINE", "days_of_week": ["TUE"], "status": "CLOSED"},
            {"id": 12, "title": "Go", "topic": "go", "mode": "HYBRID", "status": "OPEN"}
        ]
    }"#;

    #[test]
    fn test_from_json() {
        let store = SnapshotStore::from_json(SNAPSHOT).unwrap();

        assert_eq!(store.profile_count(), 1);
        assert_eq!(store.group_count(), 3);
    }

    #[test]
    fn test_fetch_open_groups_keeps_order() {
        let store = SnapshotStore::from_json(SNAPSHOT).unwrap();

        let ids: Vec<i64> = store.fetch_open_groups().iter().map(|g| g.id).collect();
        assert_eq!(ids, vec![10, 12]);
    }

    #[test]
    fn test_profile_lookup() {
        let store = SnapshotStore::from_json(SNAPSHOT).unwrap();

        assert!(store.profile(1).is_some());
        assert!(store.profile(2).is_none());
    }

    #[test]
    fn test_null_profile_collections_still_rank() {
        let store = SnapshotStore::from_json(
            r#"{
                "profiles": [
                    {"user_id": 1, "interests": null, "availability": null, "level": null},
                    {"user_id": 2, "interests": ["rust"], "availability": [{"day": "FUNDAY"}, {"day": "TUE"}]}
                ],
                "groups": [
                    {"id": 10, "topic": "rust", "mode": "ONLINE", "days_of_week": ["TUE"], "status": "OPEN"}
                ]
            }"#,
        )
        .unwrap();
        let matcher = crate::core::Matcher::default();

        let sparse = matcher.recommend_for_user(1, &store, &store);
        assert_eq!(sparse.matches.len(), 1);
        assert_eq!(sparse.matches[0].score, 0.175);

        let partial = matcher.recommend_for_user(2, &store, &store);
        assert_eq!(partial.matches[0].reason.time_overlap, 1.0);
        assert_eq!(partial.matches[0].score, 0.775);
    }

    #[test]
    fn test_invalid_json() {
        let err = SnapshotStore::from_json("{not json").unwrap_err();
        assert!(matches!(err, SnapshotError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = SnapshotStore::load("/nonexistent/snapshot.json").unwrap_err();
        assert!(matches!(err, SnapshotError::Io(_)));
    }
}
