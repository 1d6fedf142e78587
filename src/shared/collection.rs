/**
 * Collection Names
 *
 * The relay keeps one record sequence per feature area. The set of areas is
 * closed: a sync message naming anything else is discarded by the server.
 *
 * Wire names are the lowercase keys used in `init_all` snapshots and in the
 * `collection` field of `sync` messages.
 */
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::error::ProtocolError;

/// One of the known feature-area collections
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectionName {
    /// Chat messages between the two users
    Chat,
    /// Task board entries
    Tasks,
    /// Study notes
    Notes,
    /// Habit tracker rows
    Habits,
    /// Scheduler time blocks
    Blocks,
    /// Shared calendar events
    Calendar,
    /// Journal entries
    Journal,
    /// The study pact
    Pact,
    /// Study resources (files, links)
    Resources,
}

impl CollectionName {
    /// Every known collection, in snapshot order
    pub const ALL: [CollectionName; 9] = [
        CollectionName::Chat,
        CollectionName::Tasks,
        CollectionName::Notes,
        CollectionName::Habits,
        CollectionName::Blocks,
        CollectionName::Calendar,
        CollectionName::Journal,
        CollectionName::Pact,
        CollectionName::Resources,
    ];

    /// Wire name of this collection
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectionName::Chat => "chat",
            CollectionName::Tasks => "tasks",
            CollectionName::Notes => "notes",
            CollectionName::Habits => "habits",
            CollectionName::Blocks => "blocks",
            CollectionName::Calendar => "calendar",
            CollectionName::Journal => "journal",
            CollectionName::Pact => "pact",
            CollectionName::Resources => "resources",
        }
    }
}

impl fmt::Display for CollectionName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CollectionName {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CollectionName::ALL
            .iter()
            .copied()
            .find(|name| name.as_str() == s)
            .ok_or_else(|| ProtocolError::UnknownCollection(s.to_string()))
    }
}
