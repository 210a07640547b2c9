//! Service implementations
//!
//! Real implementations of the collaborator traits used by the CLI.

pub mod authenticator;
pub mod backend;
pub mod event_sink;
pub mod file_database;
pub mod http_database;
pub mod state_store;
pub mod terminal_view;

#[cfg(test)]
mod tests;

pub use authenticator::ConfiguredAuthenticator;
pub use backend::AnyDatabase;
pub use event_sink::{AuditEvent, BroadcastEventSink};
pub use file_database::FileDatabase;
pub use http_database::HttpDatabase;
pub use state_store::{StateChange, StateStore};
pub use terminal_view::TerminalView;
