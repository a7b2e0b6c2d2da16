//! Property-Based Tests for the note store
//!
//! - list stays sorted by timestamp after any sequence of operations
//! - add grows the list by one with trimmed content
//! - update never moves a note's timestamp
//! - share payloads decode to the list they were made from

use std::rc::Rc;

use chrono_note_core::{
    ManualClock, MemoryStorage, NoteError, NoteId, NoteStore, SequentialIds, StoreConfig,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Add(String, i64),
    Update(usize, String),
    Delete(usize),
}

fn arb_content() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z ]{0,12}",
        "\\PC{1,20}",
        Just("   ".to_string()),
    ]
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (arb_content(), -5_000i64..5_000).prop_map(|(c, t)| Op::Add(c, t)),
        (0usize..8, arb_content()).prop_map(|(i, c)| Op::Update(i, c)),
        (0usize..8).prop_map(Op::Delete),
    ]
}

type TestStore = NoteStore<MemoryStorage, Rc<ManualClock>, SequentialIds>;

fn new_store(clock: Rc<ManualClock>) -> TestStore {
    NoteStore::new(MemoryStorage::new(), clock, SequentialIds::new(), StoreConfig::default())
}

fn id_at(store: &TestStore, index: usize) -> NoteId {
    store
        .notes()
        .as_slice()
        .get(index)
        .map(|n| n.id.clone())
        .unwrap_or_else(|| NoteId::new("absent"))
}

proptest! {
    #[test]
    fn prop_list_always_sorted(ops in prop::collection::vec(arb_op(), 0..40)) {
        let clock = Rc::new(ManualClock::new(0));
        let mut store = new_store(clock.clone());
        for op in ops {
            match op {
                Op::Add(content, at) => {
                    clock.set(at);
                    store.add(&content).unwrap();
                }
                Op::Update(index, content) => {
                    let id = id_at(&store, index);
                    store.update(&id, &content).unwrap();
                }
                Op::Delete(index) => {
                    let id = id_at(&store, index);
                    store.delete(&id).unwrap();
                }
            }
            let notes = store.notes().as_slice();
            prop_assert!(notes.windows(2).all(|w| w[0].timestamp <= w[1].timestamp));
            prop_assert!(notes.iter().all(|n| !n.content.trim().is_empty()));
        }
    }

    #[test]
    fn prop_add_grows_by_one(content in "\\PC*[a-z]\\PC*") {
        let mut store = new_store(Rc::new(ManualClock::new(42)));
        store.add("existing").unwrap();
        let before = store.notes().len();
        store.add(&content).unwrap();
        prop_assert_eq!(store.notes().len(), before + 1);
        prop_assert!(store.notes().iter().any(|n| n.content == content.trim()));
    }

    #[test]
    fn prop_update_keeps_timestamp(original in "[a-z]{1,10}", edit in "[a-z]{1,10}", at in any::<i32>()) {
        let clock = Rc::new(ManualClock::new(at as i64));
        let mut store = new_store(clock.clone());
        store.add(&original).unwrap();
        let id = id_at(&store, 0);
        clock.advance(123_456);
        store.update(&id, &edit).unwrap();
        let note = store.notes().get(&id).unwrap();
        prop_assert_eq!(note.timestamp, at as i64);
        prop_assert_eq!(&note.content, &edit);
    }

    #[test]
    fn prop_blank_update_equals_delete(count in 1usize..6, target in 0usize..6, blank in "[ \t\n]{0,4}") {
        let clock = Rc::new(ManualClock::new(0));
        let mut a = new_store(clock.clone());
        let mut b = new_store(clock.clone());
        for i in 0..count {
            clock.set(i as i64 * 10);
            a.add(&format!("note {}", i)).unwrap();
            b.add(&format!("note {}", i)).unwrap();
        }
        let id = id_at(&a, target);
        a.update(&id, &blank).unwrap();
        b.delete(&id).unwrap();
        prop_assert_eq!(a.notes(), b.notes());
    }

    #[test]
    fn prop_share_roundtrip(entries in prop::collection::vec(("[a-zA-Z0-9 ]{0,8}[a-z]", any::<i64>()), 1..12)) {
        let clock = Rc::new(ManualClock::new(0));
        let mut store = new_store(clock.clone());
        for (content, at) in &entries {
            clock.set(*at);
            store.add(content).unwrap();
        }
        let payload = store.serialize_for_share().unwrap();
        let mut other = new_store(Rc::new(ManualClock::new(0)));
        other.replace_from_share(&payload).unwrap();
        prop_assert_eq!(other.notes(), store.notes());
    }

    #[test]
    fn prop_truncated_payload_rejected(cut in 1usize..20) {
        let mut store = new_store(Rc::new(ManualClock::new(5)));
        store.add("A").unwrap();
        store.add("B").unwrap();
        let payload = store.serialize_for_share().unwrap();
        let keep = payload.len().saturating_sub(cut);
        let before = store.notes().clone();
        let result = store.replace_from_share(&payload[..keep]);
        prop_assert!(matches!(result, Err(NoteError::SharePayloadInvalid(_))));
        prop_assert_eq!(store.notes(), &before);
    }
}
