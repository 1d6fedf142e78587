/**
 * Sync Wire Protocol
 *
 * JSON text frames exchanged over the WebSocket between the relay and its
 * clients.
 *
 * # Frames
 *
 * Server to client, once, right after the connection opens:
 *
 * ```json
 * {"type": "init_all", "data": {"tasks": [...], "notes": [...], ...}}
 * ```
 *
 * Client to server, to propose a change (`data` is an array for a wholesale
 * replace, or a single record for an upsert by `id`):
 *
 * ```json
 * {"type": "sync", "collection": "tasks", "data": {"id": "7", "status": "done"}}
 * ```
 *
 * Server to every client, after each accepted change:
 *
 * ```json
 * {"type": "sync", "collection": "tasks", "data": [...]}
 * ```
 */
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::shared::collection::CollectionName;
use crate::shared::error::ProtocolError;
use crate::shared::record::Record;

/// Full state of every collection, keyed by wire name
pub type Snapshot = BTreeMap<String, Vec<Record>>;

/// Frames sent by the relay
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// Full-state hydration, sent once per connection
    InitAll {
        /// Every collection's current records
        data: Snapshot,
    },
    /// Post-mutation value of one collection
    Sync {
        /// Collection that changed
        collection: CollectionName,
        /// Its complete new contents
        data: Vec<Record>,
    },
}

impl ServerMessage {
    /// Collection an incremental sync refers to (`None` for hydration)
    pub fn collection(&self) -> Option<CollectionName> {
        match self {
            ServerMessage::InitAll { .. } => None,
            ServerMessage::Sync { collection, .. } => Some(*collection),
        }
    }

    /// Serialize to a JSON text frame
    ///
    /// Failing here is a bug on the sending side, not bad input, so the
    /// error stays a `serde_json::Error`.
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a JSON text frame received from the relay
    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        Ok(serde_json::from_str(text)?)
    }
}

/// Payload of a client sync proposal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SyncData {
    /// Replace the whole collection with these records
    Replace(Vec<Record>),
    /// Replace the record with the same `id` in place, or append it
    Upsert(Record),
}

/// Frames sent by a client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Propose a change to one collection
    Sync {
        /// Target collection
        collection: CollectionName,
        /// Replacement or single record
        data: SyncData,
    },
}

impl ClientMessage {
    /// Proposal replacing `collection` wholesale
    pub fn replace(collection: CollectionName, records: Vec<Record>) -> Self {
        ClientMessage::Sync {
            collection,
            data: SyncData::Replace(records),
        }
    }

    /// Proposal upserting one record into `collection`
    pub fn upsert(collection: CollectionName, record: Record) -> Self {
        ClientMessage::Sync {
            collection,
            data: SyncData::Upsert(record),
        }
    }

    /// Target collection of this proposal
    pub fn collection(&self) -> CollectionName {
        match self {
            ClientMessage::Sync { collection, .. } => *collection,
        }
    }

    /// Serialize to a JSON text frame
    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Parse a JSON text frame received from a client
    ///
    /// Decoding is staged so the error names the first thing that was wrong:
    /// JSON syntax, then the `type` tag, then the collection, then `data`.
    pub fn decode(text: &str) -> Result<Self, ProtocolError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        let mut fields = match value {
            serde_json::Value::Object(fields) => fields,
            _ => return Err(ProtocolError::MissingField("type")),
        };

        let kind = fields
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or(ProtocolError::MissingField("type"))?;
        if kind != "sync" {
            return Err(ProtocolError::unknown_type(kind));
        }

        let collection = fields
            .get("collection")
            .and_then(serde_json::Value::as_str)
            .ok_or(ProtocolError::MissingField("collection"))?
            .parse::<CollectionName>()?;

        let data = match fields.remove("data") {
            Some(serde_json::Value::Array(items)) => {
                SyncData::Replace(items.into_iter().map(Record::new).collect())
            }
            Some(single) => SyncData::Upsert(Record::new(single)),
            None => return Err(ProtocolError::MissingField("data")),
        };

        Ok(ClientMessage::Sync { collection, data })
    }
}
