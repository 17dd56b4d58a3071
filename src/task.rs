//! Task data model and wire representation.
//!
//! The in-memory [`Task`] uses closed enums for priority and color; the
//! remote table speaks snake_case string columns. [`TaskRecord`] is the wire
//! shape, and the conversions between the two are the mapping layer.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Task priority. Stored on the wire as a lowercase string.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Parse a wire value, falling back to `Medium` for anything unrecognized.
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        match value {
            "low" => Priority::Low,
            "high" => Priority::High,
            "medium" => Priority::Medium,
            _ => Priority::default(),
        }
    }

    /// Next value in the low → medium → high cycle, for the form selector.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }

    #[must_use]
    pub fn prev(self) -> Self {
        match self {
            Priority::Low => Priority::High,
            Priority::Medium => Priority::Low,
            Priority::High => Priority::Medium,
        }
    }
}

/// Card color tag, a fixed six-value palette. Purely presentational.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    #[default]
    Blue,
    Green,
    Amber,
    Rose,
    Indigo,
    Purple,
}

impl CardColor {
    pub const ALL: [CardColor; 6] = [
        CardColor::Blue,
        CardColor::Green,
        CardColor::Amber,
        CardColor::Rose,
        CardColor::Indigo,
        CardColor::Purple,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CardColor::Blue => "blue",
            CardColor::Green => "green",
            CardColor::Amber => "amber",
            CardColor::Rose => "rose",
            CardColor::Indigo => "indigo",
            CardColor::Purple => "purple",
        }
    }

    /// Parse a wire value, falling back to `Blue` for anything unrecognized.
    #[must_use]
    pub fn parse_or_default(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == value)
            .unwrap_or_default()
    }

    /// Next palette entry, wrapping, for the form selector.
    #[must_use]
    pub fn next(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    #[must_use]
    pub fn prev(self) -> Self {
        let idx = Self::ALL.iter().position(|c| *c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// A task card. The id is client-generated before any persistence call and
/// never changes; `created_at` (epoch milliseconds) is write-once.
#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub color: CardColor,
    pub created_at: i64,
    pub order_index: i32,
}

impl Task {
    /// Create a fresh task with a new id and the current timestamp.
    #[must_use]
    pub fn new(
        title: String,
        description: String,
        priority: Priority,
        color: CardColor,
        order_index: i32,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            priority,
            color,
            created_at: chrono::Utc::now().timestamp_millis(),
            order_index,
        }
    }
}

/// Wire representation of a task row in the remote table.
///
/// The creation timestamp is coerced defensively: some store configurations
/// return the column as a JSON number, others as a numeric string.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub color: String,
    pub priority: String,
    #[serde(deserialize_with = "de_epoch_ms")]
    pub created_at: i64,
    pub order_index: i32,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum EpochMs {
    Number(i64),
    Text(String),
}

fn de_epoch_ms<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match EpochMs::deserialize(deserializer)? {
        EpochMs::Number(ms) => Ok(ms),
        EpochMs::Text(text) => text.trim().parse::<i64>().map_err(serde::de::Error::custom),
    }
}

impl From<&Task> for TaskRecord {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            title: task.title.clone(),
            description: task.description.clone(),
            color: task.color.as_str().to_string(),
            priority: task.priority.as_str().to_string(),
            created_at: task.created_at,
            order_index: task.order_index,
        }
    }
}

impl From<TaskRecord> for Task {
    fn from(record: TaskRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            priority: Priority::parse_or_default(&record.priority),
            color: CardColor::parse_or_default(&record.color),
            created_at: record.created_at,
            order_index: record.order_index,
        }
    }
}
