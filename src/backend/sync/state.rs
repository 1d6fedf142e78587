use crate::backend::server::config::ValidationMode;
use crate::shared::schema::validate_record;
use crate::shared::{ClientMessage, CollectionName, ProtocolError, Record, Snapshot, SyncData};
use std::collections::BTreeMap;

/// How a proposal changed its collection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The collection was replaced wholesale
    Replaced,
    /// An existing record was overwritten at this position
    Updated(usize),
    /// The record was appended at this position
    Appended(usize),
}

/// Result of an accepted proposal
#[derive(Debug, Clone, PartialEq)]
pub struct Applied {
    pub collection: CollectionName,
    pub outcome: ApplyOutcome,
    /// Complete post-mutation value of the collection
    pub records: Vec<Record>,
}

/// Authoritative in-memory record sequences, one per known collection
///
/// Every known collection is always present; they start empty and live only as
/// long as the process.
#[derive(Clone, Debug)]
pub struct CollectionStore {
    collections: BTreeMap<CollectionName, Vec<Record>>,
    validation: ValidationMode,
}

impl CollectionStore {
    pub fn new() -> Self {
        Self::with_validation(ValidationMode::default())
    }

    pub fn with_validation(validation: ValidationMode) -> Self {
        let collections = CollectionName::ALL
            .iter()
            .map(|name| (*name, Vec::new()))
            .collect();
        Self { collections, validation }
    }

    pub fn validation(&self) -> ValidationMode {
        self.validation
    }

    pub fn get(&self, collection: CollectionName) -> &[Record] {
        self.collections
            .get(&collection)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Every collection keyed by wire name
    pub fn snapshot(&self) -> Snapshot {
        self.collections
            .iter()
            .map(|(name, records)| (name.as_str().to_string(), records.clone()))
            .collect()
    }

    /// Apply a client proposal
    ///
    /// Validation runs before any mutation, so a rejected proposal leaves the
    /// collection untouched.
    pub fn apply(&mut self, message: ClientMessage) -> Result<Applied, ProtocolError> {
        let ClientMessage::Sync { collection, data } = message;
        let outcome = match data {
            SyncData::Replace(records) => {
                self.replace(collection, records)?;
                ApplyOutcome::Replaced
            }
            SyncData::Upsert(record) => self.upsert(collection, record)?,
        };
        Ok(Applied {
            collection,
            outcome,
            records: self.get(collection).to_vec(),
        })
    }

    /// Replace `collection` with `records` verbatim
    pub fn replace(
        &mut self,
        collection: CollectionName,
        records: Vec<Record>,
    ) -> Result<(), ProtocolError> {
        if self.validation == ValidationMode::Strict {
            for record in &records {
                validate_record(collection, record)?;
            }
        }
        self.collections.insert(collection, records);
        Ok(())
    }

    /// Overwrite the first record with the same id in place, or append
    ///
    /// Lenient mode matches on the raw `id` (see [`Record::same_id`]), so a
    /// record without an id lands on the first other record without one.
    /// Strict mode requires a string or numeric id. A bare `null` is never a
    /// record.
    pub fn upsert(
        &mut self,
        collection: CollectionName,
        record: Record,
    ) -> Result<ApplyOutcome, ProtocolError> {
        if record.as_value().is_null() {
            return Err(ProtocolError::MissingId(collection));
        }
        if self.validation == ValidationMode::Strict {
            record.id().ok_or(ProtocolError::MissingId(collection))?;
            validate_record(collection, &record)?;
        }

        let records = self.collections.entry(collection).or_default();
        match records.iter().position(|existing| existing.same_id(&record)) {
            Some(index) => {
                records[index] = record;
                Ok(ApplyOutcome::Updated(index))
            }
            None => {
                records.push(record);
                Ok(ApplyOutcome::Appended(records.len() - 1))
            }
        }
    }
}

impl Default for CollectionStore {
    fn default() -> Self {
        Self::new()
    }
}
