use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::{
    DEFAULT_REPORTER_NAME, MAX_REVIEW_RATING, MIN_REVIEW_RATING, NOTE_REVIEW_SUBMITTED,
    NOTE_STATUS_UPDATED,
};

/// Urgency tier derived once at submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::Low => write!(f, "low"),
            Priority::Medium => write!(f, "medium"),
            Priority::High => write!(f, "high"),
        }
    }
}

/// Reported location; clients may send numbers, which are kept as text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Coords {
    #[serde(default, deserialize_with = "string_or_number")]
    pub lat: String,
    #[serde(default, deserialize_with = "string_or_number")]
    pub lng: String,
}

/// Contact details as submitted; scalars such as a numeric phone are kept as text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Reporter {
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub phone: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
}

impl Default for Reporter {
    fn default() -> Self {
        Self {
            name: DEFAULT_REPORTER_NAME.to_string(),
            phone: String::new(),
            email: String::new(),
        }
    }
}

/// Citizen feedback on how a report was handled
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Review {
    /// Always within 1..=5
    pub rating: f64,
    pub comment: String,
    pub at: DateTime<Utc>,
}

/// One line of a report's audit trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpdateEntry {
    pub at: DateTime<Utc>,
    /// Status as of this entry
    pub status: String,
    pub note: String,
}

/// A citizen-submitted issue record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub category: String,
    pub description: String,
    pub coords: Coords,
    pub address: String,
    pub status: String,
    pub priority: Priority,
    pub department: String,
    /// Public path of the stored photo, if any
    pub photo: Option<String>,
    pub updates: Vec<UpdateEntry>,
    pub reporter: Reporter,
    pub review: Option<Review>,
}

impl Report {
    /// Replace the status and log the change
    pub fn set_status(&mut self, status: String) {
        self.status = status;
        self.log(Utc::now(), NOTE_STATUS_UPDATED.to_string());
    }

    /// Route the report to another department and log the reassignment
    pub fn reassign(&mut self, department: String) {
        let note = format!("Reassigned to {}", department);
        self.department = department;
        self.log(Utc::now(), note);
    }

    /// Attach (or overwrite) the citizen review, clamping the rating to 1..=5
    pub fn attach_review(&mut self, rating: f64, comment: String) {
        let at = Utc::now();
        self.review = Some(Review {
            rating: rating.clamp(MIN_REVIEW_RATING, MAX_REVIEW_RATING),
            comment,
            at,
        });
        self.log(at, NOTE_REVIEW_SUBMITTED.to_string());
    }

    fn log(&mut self, at: DateTime<Utc>, note: String) {
        self.updates.push(UpdateEntry {
            at,
            status: self.status.clone(),
            note,
        });
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number coordinate, got {}",
            other
        ))),
    }
}

/// Any JSON value as text: `null` is empty, strings are taken as is and
/// everything else keeps its JSON rendering
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => s,
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    })
}
