use serde::{Deserialize, Serialize, Serializer};

/// One activity as exposed by `GET /activities`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityView {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

/// Roster entry used to build the directory at startup.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivitySeed {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

// Serialized as a JSON object keyed by activity name, in roster order.
#[derive(Debug, Clone, Default)]
pub struct ActivityListing(pub Vec<(String, ActivityView)>);

impl ActivityListing {
    pub fn get(&self, name: &str) -> Option<&ActivityView> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, v)| v)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(n, _)| n.as_str())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for ActivityListing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.0.iter().map(|(name, view)| (name, view)))
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
