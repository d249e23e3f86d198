use super::*;

fn memory_store() -> (TokenStore, MemoryStorage) {
    let storage = MemoryStorage::new();
    (TokenStore::new(storage.clone()), storage)
}

#[test]
fn empty_store_has_no_tokens() {
    let (store, _) = memory_store();
    assert_eq!(store.access(), None);
    assert_eq!(store.refresh(), None);
}

#[test]
fn set_writes_both_named_keys() {
    let (store, storage) = memory_store();
    store.set("a.b.c", Some("r1"));
    assert_eq!(store.access().as_deref(), Some("a.b.c"));
    assert_eq!(store.refresh().as_deref(), Some("r1"));
    assert_eq!(storage.get_item("access_token").as_deref(), Some("a.b.c"));
    assert_eq!(storage.get_item("refresh_token").as_deref(), Some("r1"));
}

#[test]
fn set_overwrites_previous_values() {
    let (store, _) = memory_store();
    store.set("first", Some("r1"));
    store.set("second", Some("r2"));
    assert_eq!(store.access().as_deref(), Some("second"));
    assert_eq!(store.refresh().as_deref(), Some("r2"));
}

#[test]
fn set_without_refresh_drops_stale_refresh() {
    let (store, _) = memory_store();
    store.set("first", Some("r1"));
    store.set("second", None);
    assert_eq!(store.access().as_deref(), Some("second"));
    assert_eq!(store.refresh(), None);
}

#[test]
fn set_does_not_validate_format() {
    let (store, _) = memory_store();
    store.set("not a jwt", Some(""));
    assert_eq!(store.access().as_deref(), Some("not a jwt"));
    assert_eq!(store.refresh().as_deref(), Some(""));
}

#[test]
fn clear_removes_both_values() {
    let (store, storage) = memory_store();
    store.set("a.b.c", Some("r1"));
    store.clear();
    assert_eq!(store.access(), None);
    assert_eq!(store.refresh(), None);
    assert!(storage.is_empty());
}

#[test]
fn clear_twice_matches_clear_once() {
    let (store, storage) = memory_store();
    store.set("a.b.c", Some("r1"));
    store.clear();
    let after_once = (store.access(), store.refresh(), storage.len());
    store.clear();
    assert_eq!((store.access(), store.refresh(), storage.len()), after_once);
}

#[test]
fn clear_leaves_unrelated_keys() {
    let (store, storage) = memory_store();
    storage.set_item("theme", "dark");
    store.set("a.b.c", None);
    store.clear();
    assert_eq!(storage.get_item("theme").as_deref(), Some("dark"));
}

#[test]
fn clones_share_the_backend() {
    let (store, _) = memory_store();
    let other = store.clone();
    store.set("shared", None);
    assert_eq!(other.access().as_deref(), Some("shared"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_store_is_empty_without_a_browser() {
    let store = TokenStore::browser();
    store.set("a.b.c", Some("r"));
    assert_eq!(store.access(), None);
}
