use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// One extracurricular offering. The activity name is the registry key and
/// is not repeated inside the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Displayed only; signups are never rejected for capacity.
    pub max_participants: u32,
    /// Student emails in signup order.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

/// Point-in-time copy of the registry, in seed order.
///
/// Serializes as a JSON object keyed by activity name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityListing {
    entries: Vec<(String, Activity)>,
}

impl ActivityListing {
    pub fn new(entries: Vec<(String, Activity)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, activity)| activity)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ActivityListing {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, activity) in &self.entries {
            map.serialize_entry(name, activity)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess() -> Activity {
        Activity {
            description: "Learn strategies and compete in chess tournaments".to_string(),
            schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: 12,
            participants: vec!["michael@mergington.edu".to_string()],
        }
    }

    #[test]
    fn listing_serializes_as_object_in_entry_order() {
        let listing = ActivityListing::new(vec![
            ("Zebra Club".to_string(), chess()),
            ("Chess Club".to_string(), chess()),
        ]);
        let json = serde_json::to_string(&listing).unwrap();
        let zebra = json.find("Zebra Club").unwrap();
        let chess_pos = json.find("Chess Club").unwrap();
        assert!(zebra < chess_pos, "entry order lost: {json}");

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let record = &value["Chess Club"];
        assert_eq!(record["max_participants"], 12);
        assert_eq!(record["participants"][0], "michael@mergington.edu");
        assert!(record.get("name").is_none());
    }

    #[test]
    fn participant_lookup_is_exact() {
        let activity = chess();
        assert!(activity.has_participant("michael@mergington.edu"));
        assert!(!activity.has_participant("Michael@mergington.edu"));
        assert!(!activity.has_participant(" michael@mergington.edu"));
    }
}
