use statedeck::state::{EntryList, SequentialIdGenerator};
use std::collections::HashSet;

#[test]
fn test_new_list_is_empty() {
    let list = EntryList::new();
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);
    assert!(list.entries().is_empty());
}

#[test]
fn test_appends_grow_list_with_distinct_ids() {
    let mut list = EntryList::new();
    for i in 0..200 {
        let entries = list.append(format!("todo {}", i));
        assert_eq!(entries.len(), i + 1);
    }

    let ids: HashSet<&str> = list.entries().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids.len(), 200);
}

#[test]
fn test_append_preserves_existing_order() {
    let mut list = EntryList::new();
    list.append("one");
    list.append("two");
    let before: Vec<_> = list.entries().to_vec();

    list.append("three");

    assert_eq!(&list.entries()[..2], &before[..]);
    assert_eq!(list.entries()[2].text, "three");
}

#[test]
fn test_append_accepts_empty_text() {
    let mut list = EntryList::new();
    list.append("");
    assert_eq!(list.len(), 1);
    assert_eq!(list.entries()[0].text, "");
}

#[test]
fn test_remove_twice_is_idempotent() {
    let mut list = EntryList::new();
    list.append("a");
    list.append("b");
    let id = list.entries()[0].id.clone();

    list.remove(&id);
    let after_first: Vec<_> = list.entries().to_vec();
    list.remove(&id);

    assert_eq!(list.entries(), &after_first[..]);
    assert_eq!(list.len(), 1);
}

#[test]
fn test_remove_unknown_id_leaves_list_unchanged() {
    let mut list = EntryList::new();
    list.append("a");
    list.append("b");
    list.append("c");
    let before: Vec<_> = list.entries().to_vec();

    let entries = list.remove("_doesnotexist");

    assert_eq!(entries, &before[..]);
}

#[test]
fn test_remove_keeps_relative_order() {
    let mut list = EntryList::with_generator(SequentialIdGenerator::new());
    list.append("a");
    list.append("b");
    list.append("c");
    list.append("d");

    let id = list.entries()[1].id.clone();
    list.remove(&id);

    let texts: Vec<&str> = list.entries().iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["a", "c", "d"]);
    assert!(!list.contains(&id));
}

#[test]
fn test_buy_milk_walk_dog_scenario() {
    let mut list = EntryList::new();
    assert!(list.is_empty());

    list.append("buy milk");
    assert_eq!(list.len(), 1);
    assert_eq!(list.entries()[0].text, "buy milk");

    list.append("walk dog");
    let texts: Vec<&str> = list.entries().iter().map(|e| e.text.as_str()).collect();
    assert_eq!(texts, vec!["buy milk", "walk dog"]);

    let milk_id = list.entries()[0].id.clone();
    list.remove(&milk_id);

    assert_eq!(list.len(), 1);
    assert_eq!(list.entries()[0].text, "walk dog");
}

#[test]
fn test_lookup_helpers() {
    let mut list = EntryList::with_generator(SequentialIdGenerator::new());
    list.append("first");
    list.append("second");

    assert_eq!(list.position("_000000002"), Some(1));
    assert_eq!(list.get("_000000001").map(|e| e.text.as_str()), Some("first"));
    assert_eq!(list.get("_missing"), None);
}

#[test]
fn test_default_sequential_list_starts_at_one() {
    let mut list = EntryList::<SequentialIdGenerator>::default();
    list.append("first");
    assert_eq!(list.entries()[0].id, "_000000001");
}
