// src/entity/note.rs
use chrono::{Local, NaiveDateTime, SubsecRound};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Category;

/// Format used for note timestamps, both on disk and in exports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Nil when the stored record had no id; the store fills it in on load.
    #[serde(default)]
    pub id: Uuid,
    pub body: String,
    #[serde(default)]
    pub category: Category,
    #[serde(with = "timestamp")]
    pub timestamp: NaiveDateTime,
}

impl Note {
    /// Create a note stamped with the current local time, truncated to whole
    /// seconds so it survives a save/load cycle unchanged.
    pub fn new(body: String, category: Category) -> Self {
        Self::with_timestamp(body, category, Local::now().naive_local().trunc_subsecs(0))
    }

    pub fn with_timestamp(body: String, category: Category, timestamp: NaiveDateTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            body,
            category,
            timestamp,
        }
    }

    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format(TIMESTAMP_FORMAT).to_string()
    }

    /// First seven characters of the id, as shown in listings.
    pub fn short_id(&self) -> String {
        self.id.to_string()[..7].to_string()
    }

    /// First line of the body, used for one-line listings.
    pub fn headline(&self) -> &str {
        self.body.lines().next().unwrap_or("")
    }

    /// Render the note as an export block: `[timestamp] (category)\nbody\n\n`.
    pub fn export_block(&self) -> String {
        format!(
            "[{}] ({})\n{}\n\n",
            self.formatted_timestamp(),
            self.category,
            self.body
        )
    }
}

mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIMESTAMP_FORMAT;

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom)
    }
}
