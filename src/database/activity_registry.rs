//! In-memory activity registry.
//!
//! The key set is fixed at construction. Participant lists change only
//! through [`ActivityRegistry::signup`] and [`ActivityRegistry::unregister`],
//! each of which holds the write lock across its check and its mutation, so
//! an email can never be admitted twice into one activity.

use parking_lot::RwLock;

use crate::error::RegistryError;
use crate::models::{Activity, ActivityListing};

use super::seed;

#[derive(Debug, Default)]
pub struct ActivityRegistry {
    activities: RwLock<Vec<(String, Activity)>>,
}

impl ActivityRegistry {
    /// Builds a registry from `entries`, keeping their order. A repeated
    /// activity name keeps its first entry; repeated emails inside one
    /// participant list are collapsed to their first occurrence.
    pub fn new(entries: Vec<(String, Activity)>) -> Self {
        let mut activities: Vec<(String, Activity)> = Vec::with_capacity(entries.len());
        for (name, mut activity) in entries {
            if activities.iter().any(|(n, _)| *n == name) {
                continue;
            }
            let mut unique: Vec<String> = Vec::with_capacity(activity.participants.len());
            for email in activity.participants.drain(..) {
                if !unique.contains(&email) {
                    unique.push(email);
                }
            }
            activity.participants = unique;
            activities.push((name, activity));
        }
        Self {
            activities: RwLock::new(activities),
        }
    }

    /// Registry holding the nine seed activities.
    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }

    pub fn list_activities(&self) -> ActivityListing {
        ActivityListing::new(self.activities.read().clone())
    }

    pub fn get_activity(&self, name: &str) -> Option<Activity> {
        self.activities
            .read()
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, activity)| activity.clone())
    }

    pub fn activity_names(&self) -> Vec<String> {
        self.activities
            .read()
            .iter()
            .map(|(n, _)| n.clone())
            .collect()
    }

    /// Appends `email` to the activity's participants.
    pub fn signup(&self, activity_name: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.activities.write();
        let activity = find_mut(&mut activities, activity_name)?;
        if activity.has_participant(email) {
            return Err(RegistryError::AlreadySignedUp);
        }
        activity.participants.push(email.to_string());
        Ok(())
    }

    /// Removes `email` from the activity's participants.
    pub fn unregister(&self, activity_name: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.activities.write();
        let activity = find_mut(&mut activities, activity_name)?;
        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(RegistryError::NotSignedUp);
        };
        activity.participants.remove(pos);
        Ok(())
    }
}

fn find_mut<'a>(
    activities: &'a mut [(String, Activity)],
    name: &str,
) -> Result<&'a mut Activity, RegistryError> {
    activities
        .iter_mut()
        .find(|(n, _)| n == name)
        .map(|(_, activity)| activity)
        .ok_or(RegistryError::ActivityNotFound)
}
