use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::{ConfigError, SignupError};
use crate::models::{ActivityListing, ActivitySeed, ActivityView};

struct ActivityEntry {
    name: String,
    description: String,
    schedule: String,
    max_participants: u32,
    participants: Mutex<Vec<String>>,
}

impl ActivityEntry {
    // Every mutation leaves the list consistent, so a poisoned lock is safe to reuse.
    fn participants(&self) -> MutexGuard<'_, Vec<String>> {
        self.participants
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn view(&self) -> ActivityView {
        ActivityView {
            description: self.description.clone(),
            schedule: self.schedule.clone(),
            max_participants: self.max_participants,
            participants: self.participants().clone(),
        }
    }
}

/// In-memory roster of activities and their participants.
///
/// The set of activities is fixed at construction. Each activity's participant
/// list has its own lock, and membership check plus mutation happen under a
/// single acquisition.
pub struct ActivityDirectory {
    entries: Vec<ActivityEntry>,
    index: HashMap<String, usize>,
}

impl ActivityDirectory {
    pub fn from_seeds(seeds: Vec<ActivitySeed>) -> Result<Self, ConfigError> {
        let mut entries = Vec::with_capacity(seeds.len());
        let mut index = HashMap::with_capacity(seeds.len());

        for seed in seeds {
            if index.contains_key(&seed.name) {
                return Err(ConfigError::DuplicateActivity(seed.name));
            }
            let mut seen = HashSet::new();
            for email in &seed.participants {
                if !seen.insert(email.as_str()) {
                    return Err(ConfigError::DuplicateParticipant {
                        activity: seed.name.clone(),
                        email: email.clone(),
                    });
                }
            }
            index.insert(seed.name.clone(), entries.len());
            entries.push(ActivityEntry {
                name: seed.name,
                description: seed.description,
                schedule: seed.schedule,
                max_participants: seed.max_participants,
                participants: Mutex::new(seed.participants),
            });
        }

        Ok(Self { entries, index })
    }

    fn entry(&self, activity: &str) -> Result<&ActivityEntry, SignupError> {
        self.index
            .get(activity)
            .map(|&i| &self.entries[i])
            .ok_or_else(|| SignupError::ActivityNotFound {
                activity: activity.to_string(),
            })
    }

    pub fn list(&self) -> ActivityListing {
        ActivityListing(
            self.entries
                .iter()
                .map(|e| (e.name.clone(), e.view()))
                .collect(),
        )
    }

    pub fn get(&self, activity: &str) -> Option<ActivityView> {
        self.entry(activity).ok().map(ActivityEntry::view)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Capacity is informational only; a full activity still accepts signups.
    pub fn sign_up(&self, activity: &str, email: &str) -> Result<(), SignupError> {
        let entry = self.entry(activity)?;
        let mut participants = entry.participants();
        if participants.iter().any(|p| p == email) {
            return Err(SignupError::AlreadyRegistered {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }
        participants.push(email.to_string());
        Ok(())
    }

    pub fn unregister(&self, activity: &str, email: &str) -> Result<(), SignupError> {
        let entry = self.entry(activity)?;
        let mut participants = entry.participants();
        let Some(pos) = participants.iter().position(|p| p == email) else {
            return Err(SignupError::NotRegistered {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        };
        participants.remove(pos);
        Ok(())
    }
}
