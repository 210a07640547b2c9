//! Test helpers and builder pattern for editor tests

use hypervideo::core::HypervideoModel;
use hypervideo::services::{AuditEvent, BroadcastEventSink, StateStore};
use hypervideo::traits::{MockAuthenticator, MockDatabase, MockEditorView};
use hypervideo::{AuthOutcome, Category, Editor, EditorOptions, GlobalState, LeaveChoice, UserIdentity};
use serde_json::Value;
use shared::{DatabaseSnapshot, UserAction};
use tokio::sync::broadcast;

use super::fixtures::TestFixtures;

pub type TestEditor = Editor<MockDatabase, MockAuthenticator, BroadcastEventSink, StateStore, MockEditorView>;

/// Builder for editors over mock persistence, authentication and view
/// collaborators and real state and audit collaborators
pub struct EditorBuilder {
    snapshot: DatabaseSnapshot,
    database: MockDatabase,
    auth_outcome: AuthOutcome,
    expect_logout: bool,
    leave_choice: Option<LeaveChoice>,
    embedded: bool,
}

impl Default for EditorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorBuilder {
    pub fn new() -> Self {
        Self {
            snapshot: TestFixtures::snapshot(),
            database: MockDatabase::new(),
            auth_outcome: AuthOutcome::Authenticated,
            expect_logout: false,
            leave_choice: None,
            embedded: false,
        }
    }

    pub fn with_snapshot(mut self, snapshot: DatabaseSnapshot) -> Self {
        self.snapshot = snapshot;
        self
    }

    /// Configure the persistence mock; without expectations any backend
    /// call fails the test
    pub fn with_database<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut MockDatabase),
    {
        setup(&mut self.database);
        self
    }

    pub fn with_auth_outcome(mut self, outcome: AuthOutcome) -> Self {
        self.auth_outcome = outcome;
        self
    }

    pub fn expecting_logout(mut self) -> Self {
        self.expect_logout = true;
        self
    }

    /// Answer given when the editor asks whether to save before leaving;
    /// without one the question must not be asked
    pub fn answering(mut self, choice: LeaveChoice) -> Self {
        self.leave_choice = Some(choice);
        self
    }

    pub fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    pub fn build(self) -> TestEditor {
        let mut auth = MockAuthenticator::new();
        let outcome = self.auth_outcome;
        auth.expect_ensure_authenticated().returning(move || outcome).times(0..);
        auth.expect_identity()
            .returning(|| UserIdentity {
                name: TestFixtures::USER_NAME.to_string(),
                id: TestFixtures::USER_ID.to_string(),
            })
            .times(0..);
        auth.expect_logout().return_const(()).times(usize::from(self.expect_logout));

        let mut view = MockEditorView::new();
        match self.leave_choice {
            Some(choice) => {
                view.expect_confirm_leave().returning(move || choice).times(1);
            }
            None => {
                view.expect_confirm_leave().times(0);
            }
        }
        view.expect_collapse_fullscreen().return_const(()).times(usize::from(self.embedded));

        let model = HypervideoModel::from_snapshot(TestFixtures::hypervideo_id(), self.snapshot)
            .expect("fixture snapshot builds a model");

        Editor::new(
            model,
            EditorOptions { embedded: self.embedded },
            self.database,
            auth,
            BroadcastEventSink::new(),
            StateStore::new(),
            view,
        )
    }
}

pub struct TestHelpers;

impl TestHelpers {
    /// Editor in edit mode with overlays already marked unsaved
    pub fn dirty_editor(builder: EditorBuilder) -> TestEditor {
        let mut editor = builder.build();
        editor.enter_edit_mode();
        editor.mark_dirty(Category::Overlays);
        editor
    }

    /// Every action received so far
    pub fn drain_actions(events: &mut broadcast::Receiver<AuditEvent>) -> Vec<UserAction> {
        let mut actions = Vec::new();
        while let Ok(event) = events.try_recv() {
            actions.push(event.payload);
        }
        actions
    }

    pub fn action_names(events: &mut broadcast::Receiver<AuditEvent>) -> Vec<&'static str> {
        Self::drain_actions(events).iter().map(UserAction::name).collect()
    }

    pub fn state_value(editor: &TestEditor, key: &str) -> Option<Value> {
        editor.state().get_state(key)
    }

    /// The global indicator must always equal the OR of all flags when only
    /// typed categories are marked
    pub fn assert_indicator_consistent(editor: &TestEditor) {
        assert_eq!(editor.has_unsaved_changes(), editor.dirty().any_flag());
    }
}
