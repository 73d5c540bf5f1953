//! In-memory activity catalog.
//!
//! The directory is built once at startup and shared with every handler
//! through an `Arc`. A single directory-wide lock serializes mutations, so the
//! membership check and the append/remove that follows it happen atomically.

use indexmap::IndexMap;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

use crate::models::Activity;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    #[error("Activity not found")]
    ActivityNotFound,
    #[error("Student is already signed up")]
    ParticipantAlreadyEnrolled,
    #[error("Participant not found in this activity")]
    ParticipantNotEnrolled,
}

pub type DirectoryResult<T> = Result<T, DirectoryError>;

#[derive(Debug, Default)]
pub struct ActivityDirectory {
    activities: RwLock<IndexMap<String, Activity>>,
}

impl ActivityDirectory {
    pub fn new(activities: IndexMap<String, Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    /// Directory populated with the school's built-in catalog.
    pub fn seeded() -> Self {
        Self::new(seed_activities())
    }

    pub(crate) fn read(&self) -> RwLockReadGuard<'_, IndexMap<String, Activity>> {
        self.activities.read()
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, IndexMap<String, Activity>> {
        self.activities.write()
    }
}

pub fn seed_activities() -> IndexMap<String, Activity> {
    let mut activities = IndexMap::new();
    activities.insert(
        "Chess Club".to_string(),
        Activity::new(
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )
        .with_participants(["michael@mergington.edu", "daniel@mergington.edu"]),
    );
    activities.insert(
        "Programming Class".to_string(),
        Activity::new(
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
        )
        .with_participants(["emma@mergington.edu", "sophia@mergington.edu"]),
    );
    activities.insert(
        "Gym Class".to_string(),
        Activity::new(
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
        )
        .with_participants(["john@mergington.edu", "olivia@mergington.edu"]),
    );
    activities
}
