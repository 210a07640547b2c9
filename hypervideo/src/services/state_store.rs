//! Key-value global state with change notifications

use serde_json::Value;
use std::collections::HashMap;
use std::sync::RwLock;
use tokio::sync::broadcast;

use crate::traits::GlobalState;

const CHANNEL_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub struct StateChange {
    pub key: String,
    pub value: Value,
}

pub struct StateStore {
    values: RwLock<HashMap<String, Value>>,
    changes: broadcast::Sender<StateChange>,
}

impl Default for StateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore {
    pub fn new() -> Self {
        let (changes, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self {
            values: RwLock::new(HashMap::new()),
            changes,
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> {
        self.changes.subscribe()
    }

    pub fn snapshot(&self) -> HashMap<String, Value> {
        self.values.read().unwrap_or_else(|poisoned| poisoned.into_inner()).clone()
    }
}

impl GlobalState for StateStore {
    fn change_state(&self, key: &str, value: Value) {
        self.values
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .insert(key.to_string(), value.clone());
        // No subscribers is fine
        let _ = self.changes.send(StateChange {
            key: key.to_string(),
            value,
        });
    }

    fn get_state(&self, key: &str) -> Option<Value> {
        self.values
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .get(key)
            .cloned()
    }
}
