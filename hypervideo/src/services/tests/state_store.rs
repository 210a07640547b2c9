//! Tests for the global state store

use serde_json::json;

use crate::services::{StateChange, StateStore};
use crate::traits::GlobalState;

#[test]
fn test_change_and_get_state() {
    let store = StateStore::new();
    assert_eq!(store.get_state("editMode"), None);

    store.change_state("editMode", json!("preview"));
    store.change_state("editMode", json!(false));
    assert_eq!(store.get_state("editMode"), Some(json!(false)));
    assert_eq!(store.snapshot().len(), 1);
}

#[tokio::test]
async fn test_subscribers_see_changes_in_order() {
    let store = StateStore::new();
    let mut changes = store.subscribe();

    store.change_state("unsavedChanges", json!(true));
    store.change_state("unsavedChanges", json!(false));

    assert_eq!(
        changes.recv().await.unwrap(),
        StateChange {
            key: "unsavedChanges".to_string(),
            value: json!(true)
        }
    );
    assert_eq!(changes.recv().await.unwrap().value, json!(false));
}
