// tests/credentials_roundtrip.rs
//
// The persistence contract: what goes into the store comes back out
// byte-for-byte, across process-like reopen, and masking never touches the
// storage path.

use channel_analyzer::credentials::{
    mask, CredentialStore, FileCredentialStore, MemoryCredentialStore, API_KEY_NAME,
};

#[test]
fn file_store_round_trip_is_identity() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("credentials.json");

    let key = "AIzaSy_Example-Key.0123456789";
    {
        let store = FileCredentialStore::open(&path);
        store.set(API_KEY_NAME, key);
    }

    let reopened = FileCredentialStore::open(&path);
    assert_eq!(reopened.get(API_KEY_NAME).as_deref(), Some(key));
}

#[test]
fn overwrite_replaces_wholesale() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("credentials.json");
    let store = FileCredentialStore::open(&path);

    store.set(API_KEY_NAME, "first-key-value");
    store.set(API_KEY_NAME, "second-key-value");
    assert_eq!(store.get(API_KEY_NAME).as_deref(), Some("second-key-value"));
}

#[test]
fn clear_transitions_back_to_absent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("credentials.json");
    let store = FileCredentialStore::open(&path);

    store.set(API_KEY_NAME, "AIzaSyExampleKey01");
    store.remove(API_KEY_NAME);
    assert_eq!(store.get(API_KEY_NAME), None);

    // Absence survives reopen too.
    let reopened = FileCredentialStore::open(&path);
    assert_eq!(reopened.get(API_KEY_NAME), None);
}

#[test]
fn masking_is_display_only() {
    let store = MemoryCredentialStore::new();
    let key = "AIzaSyABCDEFGHIJKL";

    store.set(API_KEY_NAME, key);
    let stored = store.get(API_KEY_NAME).unwrap();

    assert_eq!(stored, key, "storage path must not transform the value");
    assert_ne!(mask(&stored), stored, "display path must redact");
    assert_eq!(mask(&stored).chars().count(), key.chars().count());
}
