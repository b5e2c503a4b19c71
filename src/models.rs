//! Data Model
//!
//! Activities as served by the backend, and the small response bodies of
//! the mutating endpoints.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Per-activity payload, keyed by activity name on the wire
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

/// A signup-able activity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    /// Unique key
    pub name: String,
    pub details: ActivityDetails,
}

impl Activity {
    pub fn new(name: impl Into<String>, details: ActivityDetails) -> Self {
        Self {
            name: name.into(),
            details,
        }
    }

    /// Remaining capacity. Negative when the activity is over-enrolled.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.details.max_participants) - self.details.participants.len() as i64
    }
}

/// The full activity collection in server order
///
/// Decodes from the `name -> details` JSON object returned by
/// `GET /activities`, keeping the key order of the response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Activities(Vec<Activity>);

impl Activities {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self(activities)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Activity> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.0.iter().find(|a| a.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|a| a.name.as_str())
    }
}

impl<'a> IntoIterator for &'a Activities {
    type Item = &'a Activity;
    type IntoIter = std::slice::Iter<'a, Activity>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<Activity> for Activities {
    fn from_iter<I: IntoIterator<Item = Activity>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for Activities {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for activity in &self.0 {
            map.serialize_entry(&activity.name, &activity.details)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Activities {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ActivitiesVisitor;

        impl<'de> Visitor<'de> for ActivitiesVisitor {
            type Value = Activities;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity details")
            }

            fn visit_map<M: MapAccess<'de>>(self, mut access: M) -> Result<Self::Value, M::Error> {
                let mut activities = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, details)) = access.next_entry::<String, ActivityDetails>()? {
                    // Duplicate keys: last one wins, like a JS object
                    activities.retain(|a: &Activity| a.name != name);
                    activities.push(Activity { name, details });
                }
                Ok(Activities(activities))
            }
        }

        deserializer.deserialize_map(ActivitiesVisitor)
    }
}

// ============ Response Bodies ============

/// Success body of the mutating endpoints
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub message: String,
}

/// Failure body of the mutating endpoints
///
/// `detail` is usually a string, but validation failures carry a list of
/// objects instead; only string details are shown to the user.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetailBody {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl DetailBody {
    pub fn text(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}
