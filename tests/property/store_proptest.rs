//! Property-based tests for the collection store

#![cfg(feature = "server")]

use proptest::prelude::*;
use serde_json::json;

use warroom::backend::sync::CollectionStore;
use warroom::shared::{ClientMessage, CollectionName, Record};

fn record(id: u8, value: u32) -> Record {
    Record::new(json!({"id": format!("r{}", id), "value": value}))
}

fn records() -> impl Strategy<Value = Vec<Record>> {
    prop::collection::vec((0u8..20, any::<u32>()), 0..12)
        .prop_map(|pairs| pairs.into_iter().map(|(id, value)| record(id, value)).collect())
}

fn collection() -> impl Strategy<Value = CollectionName> {
    prop::sample::select(CollectionName::ALL.to_vec())
}

proptest! {
    #[test]
    fn test_replace_stores_records_verbatim(name in collection(), items in records()) {
        let mut store = CollectionStore::new();
        let applied = store.apply(ClientMessage::replace(name, items.clone())).unwrap();

        prop_assert_eq!(&applied.records, &items);
        prop_assert_eq!(store.get(name), items.as_slice());
        for other in CollectionName::ALL.into_iter().filter(|c| *c != name) {
            prop_assert!(store.get(other).is_empty());
        }
    }

    #[test]
    fn test_upsert_of_existing_id_preserves_length_and_position(
        ids in prop::collection::btree_set(0u8..50, 1..10),
        pick in any::<prop::sample::Index>(),
        value in any::<u32>(),
    ) {
        let ids: Vec<u8> = ids.into_iter().collect();
        let initial: Vec<Record> = ids.iter().map(|id| record(*id, 0)).collect();
        let mut store = CollectionStore::new();
        store.replace(CollectionName::Tasks, initial.clone()).unwrap();

        let index = pick.index(ids.len());
        store.upsert(CollectionName::Tasks, record(ids[index], value)).unwrap();

        let after = store.get(CollectionName::Tasks);
        prop_assert_eq!(after.len(), initial.len());
        prop_assert_eq!(&after[index], &record(ids[index], value));
        for (i, original) in initial.iter().enumerate().filter(|(i, _)| *i != index) {
            prop_assert_eq!(&after[i], original);
        }
    }

    #[test]
    fn test_upsert_of_new_id_appends(items in records(), value in any::<u32>()) {
        let mut store = CollectionStore::new();
        store.replace(CollectionName::Notes, items.clone()).unwrap();

        // Ids in `records()` never exceed r19.
        let fresh = Record::new(json!({"id": "fresh", "value": value}));
        store.upsert(CollectionName::Notes, fresh.clone()).unwrap();

        let after = store.get(CollectionName::Notes);
        prop_assert_eq!(after.len(), items.len() + 1);
        prop_assert_eq!(after.last(), Some(&fresh));
    }

    #[test]
    fn test_repeated_message_is_idempotent(name in collection(), id in 0u8..20, value in any::<u32>()) {
        let mut store = CollectionStore::new();
        let message = ClientMessage::upsert(name, record(id, value));

        let first = store.apply(message.clone()).unwrap().records;
        let second = store.apply(message).unwrap().records;
        prop_assert_eq!(first, second);
    }

    #[test]
    fn test_last_replace_wins(batches in prop::collection::vec(records(), 1..6)) {
        let mut store = CollectionStore::new();
        for batch in &batches {
            store.apply(ClientMessage::replace(CollectionName::Resources, batch.clone())).unwrap();
        }
        let last = batches.last().unwrap();
        prop_assert_eq!(store.get(CollectionName::Resources), last.as_slice());
    }
}
