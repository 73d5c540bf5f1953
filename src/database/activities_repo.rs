use indexmap::IndexMap;

use crate::database::activity_directory::{ActivityDirectory, DirectoryError, DirectoryResult};
use crate::models::Activity;

pub fn list_activities(directory: &ActivityDirectory) -> IndexMap<String, Activity> {
    directory.read().clone()
}

pub fn find_activity(directory: &ActivityDirectory, name: &str) -> Option<Activity> {
    directory.read().get(name).cloned()
}

/// Appends `email` to the roster. Capacity is not checked.
pub fn insert_participant(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> DirectoryResult<usize> {
    let mut activities = directory.write();
    let activity = activities
        .get_mut(activity_name)
        .ok_or(DirectoryError::ActivityNotFound)?;

    if activity.has_participant(email) {
        return Err(DirectoryError::ParticipantAlreadyEnrolled);
    }

    activity.participants.push(email.to_string());
    Ok(activity.participants.len())
}

pub fn delete_participant(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> DirectoryResult<usize> {
    let mut activities = directory.write();
    let activity = activities
        .get_mut(activity_name)
        .ok_or(DirectoryError::ActivityNotFound)?;

    let Some(idx) = activity.participants.iter().position(|p| p == email) else {
        return Err(DirectoryError::ParticipantNotEnrolled);
    };

    activity.participants.remove(idx);
    Ok(activity.participants.len())
}
