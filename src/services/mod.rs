// Service exports
pub mod snapshot;

pub use snapshot::{SnapshotDocument, SnapshotError, SnapshotStore};
