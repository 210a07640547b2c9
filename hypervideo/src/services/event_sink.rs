//! Audit trail that traces every user action and rebroadcasts it

use tokio::sync::broadcast;
use tracing::info;

use shared::UserAction;

use crate::traits::EventSink;

const CHANNEL_CAPACITY: usize = 128;

#[derive(Debug, Clone, PartialEq)]
pub struct AuditEvent {
    pub kind: String,
    pub payload: UserAction,
}

pub struct BroadcastEventSink {
    sender: broadcast::Sender<AuditEvent>,
}

impl Default for BroadcastEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl BroadcastEventSink {
    pub fn new() -> Self {
        let (sender, _) = broadcast::channel(CHANNEL_CAPACITY);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<AuditEvent> {
        self.sender.subscribe()
    }
}

impl EventSink for BroadcastEventSink {
    fn trigger_event(&self, kind: &str, payload: &UserAction) {
        info!(event = kind, action = payload.name(), "📣 User action");
        let _ = self.sender.send(AuditEvent {
            kind: kind.to_string(),
            payload: payload.clone(),
        });
    }
}
