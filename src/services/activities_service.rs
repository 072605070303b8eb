use tracing::{info, warn};

use crate::database::ActivityDirectory;
use crate::error::SignupError;
use crate::models::ActivityListing;

pub fn list_activities(directory: &ActivityDirectory) -> ActivityListing {
    directory.list()
}

pub fn sign_up(
    directory: &ActivityDirectory,
    activity: &str,
    email: &str,
) -> Result<String, SignupError> {
    if email.trim().is_empty() {
        warn!(activity = %activity, "signup rejected: blank email");
        return Err(SignupError::BlankEmail);
    }

    match directory.sign_up(activity, email) {
        Ok(()) => {
            info!(activity = %activity, email = %email, "participant signed up");
            Ok(format!("Signed up {} for {}", email, activity))
        }
        Err(e) => {
            warn!(activity = %activity, email = %email, "signup rejected: {}", e);
            Err(e)
        }
    }
}

pub fn unregister(
    directory: &ActivityDirectory,
    activity: &str,
    email: &str,
) -> Result<String, SignupError> {
    if email.trim().is_empty() {
        warn!(activity = %activity, "unregister rejected: blank email");
        return Err(SignupError::BlankEmail);
    }

    match directory.unregister(activity, email) {
        Ok(()) => {
            info!(activity = %activity, email = %email, "participant unregistered");
            Ok(format!("Unregistered {} from {}", email, activity))
        }
        Err(e) => {
            warn!(activity = %activity, email = %email, "unregister rejected: {}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed;

    fn directory() -> ActivityDirectory {
        ActivityDirectory::from_seeds(seed::default_roster()).unwrap()
    }

    #[test]
    fn sign_up_message_names_email_and_activity() {
        let dir = directory();
        let msg = sign_up(&dir, "Chess Club", "pytest-temp@example.com").unwrap();
        assert_eq!(msg, "Signed up pytest-temp@example.com for Chess Club");
    }

    #[test]
    fn unregister_message_names_email_and_activity() {
        let dir = directory();
        let msg = unregister(&dir, "Chess Club", "michael@mergington.edu").unwrap();
        assert_eq!(msg, "Unregistered michael@mergington.edu from Chess Club");
        assert!(!list_activities(&dir)
            .get("Chess Club")
            .unwrap()
            .participants
            .contains(&"michael@mergington.edu".to_string()));
    }

    #[test]
    fn blank_email_is_rejected_without_touching_roster() {
        let dir = directory();
        let before = dir.get("Gym Class").unwrap();
        assert_eq!(sign_up(&dir, "Gym Class", "   "), Err(SignupError::BlankEmail));
        assert_eq!(unregister(&dir, "Gym Class", ""), Err(SignupError::BlankEmail));
        assert_eq!(dir.get("Gym Class").unwrap(), before);
    }

    #[test]
    fn listing_contains_every_roster_activity() {
        let dir = directory();
        let listing = list_activities(&dir);
        for activity in seed::default_roster() {
            assert!(listing.get(&activity.name).is_some());
        }
        assert_eq!(listing.len(), dir.len());
    }
}
