use indexmap::IndexMap;
use tracing::{debug, info, warn};

use crate::database::{activities_repo, ActivityDirectory, DirectoryResult};
use crate::models::Activity;

pub fn list_activities(directory: &ActivityDirectory) -> IndexMap<String, Activity> {
    let activities = activities_repo::list_activities(directory);
    debug!("Listing {} activities", activities.len());
    activities
}

pub fn signup(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> DirectoryResult<String> {
    match activities_repo::insert_participant(directory, activity_name, email) {
        Ok(count) => {
            info!(activity = activity_name, email, count, "Participant signed up");
            // Capacity is advisory; the signup stands either way.
            if activities_repo::find_activity(directory, activity_name)
                .is_some_and(|a| a.is_over_capacity())
            {
                warn!(
                    activity = activity_name,
                    count, "Activity is over its participant limit"
                );
            }
            Ok(format!("Signed up {} for {}", email, activity_name))
        }
        Err(e) => {
            warn!("Signup of {} for {} failed: {}", email, activity_name, e);
            Err(e)
        }
    }
}

pub fn unregister(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: &str,
) -> DirectoryResult<String> {
    match activities_repo::delete_participant(directory, activity_name, email) {
        Ok(count) => {
            info!(activity = activity_name, email, count, "Participant removed");
            Ok(format!("Unregistered {} from {}", email, activity_name))
        }
        Err(e) => {
            warn!("Removal of {} from {} failed: {}", email, activity_name, e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::DirectoryError;

    #[test]
    fn test_signup_message_names_email_and_activity() {
        let directory = ActivityDirectory::seeded();
        let message = signup(&directory, "Chess Club", "newstudent@mergington.edu").unwrap();
        assert_eq!(
            message,
            "Signed up newstudent@mergington.edu for Chess Club"
        );
    }

    #[test]
    fn test_unregister_message_names_email_and_activity() {
        let directory = ActivityDirectory::seeded();
        let message = unregister(&directory, "Gym Class", "john@mergington.edu").unwrap();
        assert_eq!(message, "Unregistered john@mergington.edu from Gym Class");
    }

    #[test]
    fn test_signup_past_capacity_still_succeeds() {
        let mut activities = IndexMap::new();
        activities.insert("Tiny".to_string(), Activity::new("Small", "Sundays", 1));
        let directory = ActivityDirectory::new(activities);

        signup(&directory, "Tiny", "a@b.com").unwrap();
        let message = signup(&directory, "Tiny", "c@d.com").unwrap();

        assert_eq!(message, "Signed up c@d.com for Tiny");
        let tiny = activities_repo::find_activity(&directory, "Tiny").unwrap();
        assert!(tiny.is_over_capacity());
    }

    #[test]
    fn test_errors_pass_through() {
        let directory = ActivityDirectory::seeded();
        assert_eq!(
            signup(&directory, "Chess Club", "daniel@mergington.edu"),
            Err(DirectoryError::ParticipantAlreadyEnrolled)
        );
        assert_eq!(
            unregister(&directory, "Chess Club", "nobody@test.com"),
            Err(DirectoryError::ParticipantNotEnrolled)
        );
    }
}
