use std::path::Path;

use crate::error::ConfigError;
use crate::models::ActivitySeed;

// (name, description, schedule, max_participants, participants)
const DEFAULT_ROSTER: &[(&str, &str, &str, u32, &[&str])] = &[
    (
        "Chess Club",
        "Learn strategies and compete in chess tournaments",
        "Fridays, 3:30 PM - 5:00 PM",
        12,
        &["michael@mergington.edu", "daniel@mergington.edu"],
    ),
    (
        "Programming Class",
        "Learn programming fundamentals and build software projects",
        "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        20,
        &["emma@mergington.edu", "sophia@mergington.edu"],
    ),
    (
        "Gym Class",
        "Physical education and sports activities",
        "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        30,
        &["john@mergington.edu", "olivia@mergington.edu"],
    ),
    (
        "Soccer Team",
        "Train together and play matches against other schools",
        "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        22,
        &["liam@mergington.edu", "noah@mergington.edu"],
    ),
    (
        "Basketball Team",
        "Practice drills and compete in the regional league",
        "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        15,
        &["ava@mergington.edu", "mia@mergington.edu"],
    ),
    (
        "Art Club",
        "Explore painting, drawing and sculpture",
        "Thursdays, 3:30 PM - 5:00 PM",
        15,
        &["amelia@mergington.edu", "harper@mergington.edu"],
    ),
    (
        "Drama Club",
        "Act, direct and stage the school plays",
        "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        20,
        &["ella@mergington.edu", "scarlett@mergington.edu"],
    ),
    (
        "Math Club",
        "Solve challenging problems and prepare for competitions",
        "Tuesdays, 3:30 PM - 4:30 PM",
        10,
        &["james@mergington.edu", "benjamin@mergington.edu"],
    ),
    (
        "Debate Team",
        "Sharpen public speaking and argumentation skills",
        "Fridays, 4:00 PM - 5:30 PM",
        12,
        &["charlotte@mergington.edu", "henry@mergington.edu"],
    ),
];

pub fn default_roster() -> Vec<ActivitySeed> {
    DEFAULT_ROSTER
        .iter()
        .map(
            |(name, description, schedule, max_participants, participants)| ActivitySeed {
                name: name.to_string(),
                description: description.to_string(),
                schedule: schedule.to_string(),
                max_participants: *max_participants,
                participants: participants.iter().map(|p| p.to_string()).collect(),
            },
        )
        .collect()
}

/// Reads a JSON array of activities, replacing the built-in roster.
pub fn load_roster_file(path: &Path) -> Result<Vec<ActivitySeed>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadSeed {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| ConfigError::ParseSeed {
        path: path.to_path_buf(),
        source,
    })
}
