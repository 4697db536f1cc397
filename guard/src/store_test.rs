use super::*;

#[test]
fn memory_store_set_get_clear() {
    let store = MemoryStore::new();
    assert!(store.is_empty());
    store.set("lockoutLevel", "2").unwrap();
    assert_eq!(store.get("lockoutLevel").as_deref(), Some("2"));
    store.clear("lockoutLevel").unwrap();
    assert_eq!(store.get("lockoutLevel"), None);
}

#[test]
fn clearing_missing_key_succeeds() {
    let store = MemoryStore::new();
    assert!(store.clear("loginAttempts").is_ok());
}

#[test]
fn clones_share_entries() {
    let tab_a = MemoryStore::new();
    let tab_b = tab_a.clone();
    tab_a.set("loginAttempts", "1").unwrap();
    assert_eq!(tab_b.get("loginAttempts").as_deref(), Some("1"));
    assert_eq!(tab_b.len(), 1);
}

#[test]
fn read_only_handle_rejects_writes_but_reads() {
    let store = MemoryStore::new();
    store.set("lockoutTime", "100").unwrap();
    let frozen = store.read_only();
    assert_eq!(frozen.get("lockoutTime").as_deref(), Some("100"));
    assert!(matches!(frozen.set("lockoutTime", "5"), Err(StoreError::WriteRejected { .. })));
    assert!(matches!(frozen.clear("lockoutTime"), Err(StoreError::WriteRejected { .. })));
    assert_eq!(store.get("lockoutTime").as_deref(), Some("100"));
}
