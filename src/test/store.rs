use crate::container::{AssociativeStore, KeyValueEntry};
use crate::error::StoreError;
use pretty_assertions::assert_eq;

fn pairs(store: &AssociativeStore<String, i32>) -> Vec<(String, i32)> {
    store
        .iter()
        .map(|entry| (entry.key().clone(), *entry.value()))
        .collect()
}

fn store_of(keys: &[&str]) -> AssociativeStore<String, i32> {
    let mut store = AssociativeStore::new();
    for (i, key) in keys.iter().enumerate() {
        store.set(key.to_string(), i as i32).unwrap();
    }
    store
}

#[test]
fn set_then_get() {
    let mut store = AssociativeStore::new();
    assert_eq!(store.set("a".to_string(), 1).unwrap(), None);
    assert_eq!(store.set("b".to_string(), 2).unwrap(), None);
    assert_eq!(store.get("a"), Ok(&1));
    assert_eq!(store.get("b"), Ok(&2));
    assert_eq!(store.size(), 2);
}

#[test]
fn set_existing_key_overwrites_in_place() {
    let mut store = store_of(&["a", "b", "c"]);
    assert_eq!(store.set("a".to_string(), 10).unwrap(), Some(0));
    assert_eq!(store.size(), 3);
    assert_eq!(
        pairs(&store),
        vec![
            ("a".to_string(), 10),
            ("b".to_string(), 1),
            ("c".to_string(), 2)
        ]
    );
}

#[test]
fn size_counts_distinct_keys_and_keeps_latest_value() {
    let mut store = AssociativeStore::new();
    let ops = [("x", 1), ("y", 2), ("x", 3), ("z", 4), ("y", 5), ("x", 6)];
    for (key, value) in ops {
        store.set(key.to_string(), value).unwrap();
    }
    assert_eq!(store.size(), 3);
    assert_eq!(store.get("x"), Ok(&6));
    assert_eq!(store.get("y"), Ok(&5));
    assert_eq!(store.get("z"), Ok(&4));
}

#[test]
fn empty_key_is_rejected() {
    let mut store = AssociativeStore::<String, i32>::new();
    assert_eq!(store.set(String::new(), 1), Err(StoreError::InvalidKey));
    assert!(store.is_empty());
    assert_eq!(store.get(""), Err(StoreError::KeyNotFound));
    assert!(!store.has_key(""));
}

#[test]
fn none_key_is_rejected() {
    let mut store = AssociativeStore::<Option<u32>, &str>::new();
    assert_eq!(store.set(None, "nothing"), Err(StoreError::InvalidKey));
    store.set(Some(7), "seven").unwrap();
    assert_eq!(store.get(&Some(7)), Ok(&"seven"));
    assert_eq!(store.get(&None), Err(StoreError::KeyNotFound));
}

#[test]
fn missing_key_is_not_found() {
    let store = store_of(&["a"]);
    assert_eq!(store.get("b"), Err(StoreError::KeyNotFound));
    assert!(!store.has_key("b"));
    assert_eq!(store.find("b"), Err(StoreError::KeyNotFound));
}

#[test]
fn growth_doubles_capacity_and_keeps_everything() {
    let mut store = AssociativeStore::with_capacity(2);
    for i in 0..3u32 {
        store.set(i, i * 10).unwrap();
    }
    assert_eq!(store.capacity(), 4);
    for i in 0..3u32 {
        assert_eq!(store.get(&i), Ok(&(i * 10)));
    }
}

#[test]
fn growth_past_default_capacity() {
    let mut store = AssociativeStore::new();
    let n = AssociativeStore::<usize, usize>::DEFAULT_CAPACITY + 1;
    for i in 0..n {
        store.set(i, i + 100).unwrap();
    }
    assert_eq!(store.size(), n);
    assert_eq!(store.capacity(), 32);
    for i in 0..n {
        assert_eq!(store.get(&i), Ok(&(i + 100)));
    }
}

#[test]
fn zero_capacity_still_grows() {
    let mut store = AssociativeStore::with_capacity(0);
    store.set(1u32, 'a').unwrap();
    store.set(2u32, 'b').unwrap();
    assert_eq!(store.size(), 2);
    assert_eq!(store.get(&2), Ok(&'b'));
}

#[test]
fn remove_moves_last_entry_into_the_gap() {
    let mut store = store_of(&["a", "b", "c", "d"]);
    assert_eq!(store.remove("b"), Some(1));
    assert!(!store.has_key("b"));
    assert_eq!(store.size(), 3);
    assert_eq!(
        pairs(&store),
        vec![
            ("a".to_string(), 0),
            ("d".to_string(), 3),
            ("c".to_string(), 2)
        ]
    );
    assert_eq!(store.find("d"), Ok(1));
}

#[test]
fn remove_last_and_only_entries() {
    let mut store = store_of(&["a", "b"]);
    assert_eq!(store.remove("b"), Some(1));
    assert_eq!(store.remove("a"), Some(0));
    assert!(store.is_empty());
    assert_eq!(store.iter().count(), 0);
    store.set("c".to_string(), 5).unwrap();
    assert_eq!(pairs(&store), vec![("c".to_string(), 5)]);
}

#[test]
fn remove_absent_key_is_a_no_op() {
    let mut store = store_of(&["a", "b"]);
    assert_eq!(store.remove("zz"), None);
    assert_eq!(store.remove(""), None);
    assert_eq!(pairs(&store), vec![("a".to_string(), 0), ("b".to_string(), 1)]);
}

#[test]
fn removal_keeps_other_keys_reachable() {
    let keys: Vec<String> = (0..40).map(|i| format!("k{i}")).collect();
    let mut store = AssociativeStore::new();
    for (i, key) in keys.iter().enumerate() {
        store.set(key.clone(), i).unwrap();
    }
    for key in keys.iter().step_by(3) {
        store.remove(key.as_str());
    }
    for (i, key) in keys.iter().enumerate() {
        if i % 3 == 0 {
            assert!(!store.has_key(key.as_str()), "{key} should be gone");
        } else {
            assert_eq!(store.get(key.as_str()), Ok(&i));
        }
    }
}

#[test]
fn get_mut_updates_value() {
    let mut store = store_of(&["a"]);
    *store.get_mut("a").unwrap() += 41;
    assert_eq!(store.get("a"), Ok(&41));
}

#[test]
fn clone_is_independent() {
    let mut original = store_of(&["a", "b"]);
    let copy = original.clone();
    original.set("a".to_string(), 99).unwrap();
    original.remove("b");
    assert_eq!(copy.get("a"), Ok(&0));
    assert_eq!(copy.get("b"), Ok(&1));
    assert_eq!(copy.size(), 2);
}

#[test]
fn clone_of_large_store() {
    let mut store = AssociativeStore::new();
    for i in 0..50usize {
        store.set(i, i).unwrap();
    }
    let copy = store.clone();
    assert_eq!(copy.size(), 50);
    assert_eq!(copy.capacity(), 64);
    assert!(copy.iter().eq(store.iter()));
}

#[test]
fn iteration_is_restartable() {
    let store = store_of(&["a", "b", "c"]);
    let first: Vec<&String> = store.keys().collect();
    let second: Vec<&String> = (&store).into_iter().map(KeyValueEntry::key).collect();
    assert_eq!(first, second);
    assert_eq!(store.values().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
}

#[test]
fn display_renders_store_order() {
    let empty = AssociativeStore::<String, i32>::new();
    assert_eq!(empty.to_string(), "{}");
    let store = store_of(&["a", "b"]);
    assert_eq!(store.to_string(), "{ a: 0, b: 1 }");
    let entry = store.iter().next().unwrap();
    assert_eq!(entry.to_string(), "{ a : 0 }");
}
