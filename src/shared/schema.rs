/**
 * Record Schemas
 *
 * Typed shapes for the records of each collection. The relay stores records
 * as raw JSON either way; these types are only used when the server runs with
 * strict validation, to reject records that the UI screens could not render.
 *
 * Field names follow the camelCase JSON produced by the browser client.
 * Unknown extra fields are accepted and kept.
 */
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::shared::collection::CollectionName;
use crate::shared::error::ProtocolError;
use crate::shared::record::Record;

/// Record id as it appears in JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaId {
    Text(String),
    Number(serde_json::Number),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subtask {
    pub id: SchemaId,
    pub title: String,
    pub completed: bool,
}

/// Task board entry (`tasks`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: SchemaId,
    #[serde(default)]
    pub user_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub subject: String,
    pub priority: Priority,
    pub status: TaskStatus,
    #[serde(default)]
    pub due_date: Option<i64>,
    #[serde(default)]
    pub estimated_minutes: Option<u32>,
    #[serde(default)]
    pub is_shared: bool,
    #[serde(default)]
    pub subtasks: Option<Vec<Subtask>>,
}

/// Scheduler block (`blocks`); times are `HH:MM`, date is `YYYY-MM-DD`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleBlock {
    pub id: SchemaId,
    #[serde(default)]
    pub user_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub subject: String,
    pub start_time: String,
    pub end_time: String,
    pub date: String,
    #[serde(default)]
    pub is_shared: Option<bool>,
    #[serde(default)]
    pub completed: bool,
}

/// Study note (`notes`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: SchemaId,
    #[serde(default)]
    pub user_id: Option<String>,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub folder: String,
    #[serde(default)]
    pub is_shared: Option<bool>,
    #[serde(default)]
    pub updated_at: Option<i64>,
    #[serde(default)]
    pub is_pinned: Option<bool>,
}

/// Chat message (`chat`); `text` is ciphertext produced by the browser
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: SchemaId,
    pub sender_id: String,
    pub text: String,
    pub timestamp: i64,
    #[serde(default)]
    pub reactions: Option<HashMap<String, Vec<String>>>,
}

/// Habit tracker row (`habits`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    pub id: SchemaId,
    pub name: String,
    #[serde(default)]
    pub streak: u32,
    #[serde(default)]
    pub completed_today: bool,
    #[serde(default)]
    pub history: HashMap<String, bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarEventKind {
    Test,
    Event,
    Deadline,
}

/// Shared calendar event (`calendar`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub id: SchemaId,
    pub title: String,
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(rename = "type")]
    pub kind: CalendarEventKind,
    #[serde(default)]
    pub description: Option<String>,
}

/// Journal entry (`journal`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: SchemaId,
    pub date: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub mood: Option<String>,
}

/// Study pact (`pact`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPact {
    pub id: SchemaId,
    pub goal: String,
    pub min_hours_per_day: f64,
    pub weekly_target: f64,
    #[serde(default)]
    pub penalty: String,
    pub start_date: i64,
    pub active: bool,
}

/// Study resource (`resources`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: SchemaId,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub starred: bool,
}

fn check<'de, T: Deserialize<'de>>(
    collection: CollectionName,
    value: &'de serde_json::Value,
) -> Result<(), ProtocolError> {
    T::deserialize(value)
        .map(|_| ())
        .map_err(|e| ProtocolError::invalid_record(collection, e.to_string()))
}

/// Check that `record` has the shape expected in `collection`
pub fn validate_record(collection: CollectionName, record: &Record) -> Result<(), ProtocolError> {
    let value = record.as_value();
    match collection {
        CollectionName::Chat => check::<ChatMessage>(collection, value),
        CollectionName::Tasks => check::<Task>(collection, value),
        CollectionName::Notes => check::<Note>(collection, value),
        CollectionName::Habits => check::<Habit>(collection, value),
        CollectionName::Blocks => check::<ScheduleBlock>(collection, value),
        CollectionName::Calendar => check::<CalendarEvent>(collection, value),
        CollectionName::Journal => check::<JournalEntry>(collection, value),
        CollectionName::Pact => check::<StudyPact>(collection, value),
        CollectionName::Resources => check::<Resource>(collection, value),
    }
}
