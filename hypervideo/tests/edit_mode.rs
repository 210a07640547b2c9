//! Integration tests for leaving edit mode and reloading

use serde_json::json;

use hypervideo::{
    AuthOutcome, Category, EditPhase, LeaveChoice, LeaveOutcome, ModelError, ReloadOutcome, SaveStatus,
};
use shared::{NewAnnotation, SaveOutcome, TextAnnotation};

mod common;
use common::{EditorBuilder, TestFixtures, TestHelpers};

fn text_annotation(name: &str) -> NewAnnotation {
    NewAnnotation::Text(TextAnnotation {
        name: name.to_string(),
        start: 10.0,
        end: 12.0,
        attributes: json!({}),
    })
}

#[tokio::test]
async fn test_clean_session_leaves_without_asking() {
    let mut editor = EditorBuilder::new().build();
    let mut events = editor.events().subscribe();
    editor.enter_edit_mode();
    assert_eq!(editor.edit_phase(), EditPhase::EditingClean);
    assert_eq!(TestHelpers::state_value(&editor, "editMode"), Some(json!("preview")));

    let outcome = editor.leave_edit_mode(false).await.unwrap();

    assert_eq!(outcome, LeaveOutcome::Left);
    assert_eq!(editor.edit_phase(), EditPhase::Left);
    assert_eq!(TestHelpers::state_value(&editor, "editMode"), Some(json!(false)));
    assert_eq!(TestHelpers::action_names(&mut events), vec!["EditEnd"]);
}

#[tokio::test]
async fn test_save_then_leave() {
    let mut editor = TestHelpers::dirty_editor(
        EditorBuilder::new()
            .answering(LeaveChoice::Save)
            .with_database(|db| {
                db.expect_save_hypervideo()
                    .returning(|_, _| SaveOutcome::success())
                    .times(1);
            }),
    );
    assert_eq!(editor.edit_phase(), EditPhase::EditingDirty);
    let mut events = editor.events().subscribe();

    let outcome = editor.leave_edit_mode(false).await.unwrap();

    assert_eq!(outcome, LeaveOutcome::SavedAndLeft);
    assert!(!editor.has_unsaved_changes());
    assert_eq!(editor.edit_phase(), EditPhase::Left);
    assert_eq!(TestHelpers::action_names(&mut events), vec!["EditSave", "EditEnd"]);
}

#[tokio::test]
async fn test_failed_save_keeps_editing() {
    let mut editor = TestHelpers::dirty_editor(
        EditorBuilder::new()
            .answering(LeaveChoice::Save)
            .with_database(|db| {
                db.expect_save_hypervideo()
                    .returning(|_, _| SaveOutcome::failure("server unavailable"));
            }),
    );
    let mut events = editor.events().subscribe();

    let result = editor.leave_edit_mode(false).await;

    assert!(matches!(result, Err(ModelError::SaveFailed { .. })));
    assert_eq!(editor.edit_phase(), EditPhase::EditingDirty);
    assert!(editor.dirty().is_dirty(Category::Overlays));
    assert_eq!(TestHelpers::state_value(&editor, "editMode"), Some(json!("preview")));
    assert!(TestHelpers::action_names(&mut events).is_empty());
}

#[tokio::test]
async fn test_cancelled_login_during_save_stays() {
    let mut editor = TestHelpers::dirty_editor(
        EditorBuilder::new()
            .answering(LeaveChoice::Save)
            .with_auth_outcome(AuthOutcome::Cancelled),
    );

    assert_eq!(editor.leave_edit_mode(false).await.unwrap(), LeaveOutcome::Stayed);
    assert!(editor.has_unsaved_changes());
    assert_eq!(editor.edit_phase(), EditPhase::EditingDirty);
}

#[tokio::test]
async fn test_cancel_stays_in_edit_mode() {
    let mut editor = TestHelpers::dirty_editor(EditorBuilder::new().answering(LeaveChoice::Cancel));
    let mut events = editor.events().subscribe();

    let outcome = editor.leave_edit_mode(true).await.unwrap();

    assert_eq!(outcome, LeaveOutcome::Stayed);
    assert_eq!(editor.edit_phase(), EditPhase::EditingDirty);
    assert!(editor.has_unsaved_changes());
    assert!(TestHelpers::action_names(&mut events).is_empty());
}

#[tokio::test]
async fn test_discard_reloads_from_backend() {
    let mut editor = EditorBuilder::new()
        .answering(LeaveChoice::Discard)
        .with_database(|db| {
            db.expect_load_hypervideo()
                .withf(|id| id.as_str() == TestFixtures::HYPERVIDEO_ID)
                .returning(|_| Ok(TestFixtures::snapshot()))
                .times(1);
            db.expect_save_annotations().times(0);
        })
        .build();
    editor.enter_edit_mode();
    editor.new_annotation(text_annotation("Scratch")).unwrap();
    assert_eq!(editor.model().annotations().len(), 3);
    let mut events = editor.events().subscribe();

    let outcome = editor.leave_edit_mode(false).await.unwrap();

    assert_eq!(outcome, LeaveOutcome::DiscardedAndLeft);
    assert!(!editor.has_unsaved_changes());
    assert!(editor.dirty().dirty_categories().is_empty());
    assert_eq!(editor.model().annotations().len(), 2);
    assert_eq!(editor.edit_phase(), EditPhase::Left);
    assert_eq!(TestHelpers::state_value(&editor, "unsavedChanges"), Some(json!(false)));
    assert_eq!(TestHelpers::state_value(&editor, "viewMode"), Some(json!("video")));
    assert_eq!(TestHelpers::action_names(&mut events), vec!["EditEnd"]);
}

#[tokio::test]
async fn test_discard_with_cancelled_login_still_leaves() {
    let mut snapshot = TestFixtures::snapshot();
    snapshot.config.always_force_login = true;
    let mut editor = EditorBuilder::new()
        .answering(LeaveChoice::Discard)
        .with_auth_outcome(AuthOutcome::Cancelled)
        .with_database(move |db| {
            db.expect_load_hypervideo()
                .returning(move |_| Ok(snapshot.clone()))
                .times(1);
        })
        .build();
    editor.enter_edit_mode();
    editor.new_annotation(text_annotation("Scratch")).unwrap();

    let outcome = editor.leave_edit_mode(false).await.unwrap();

    assert_eq!(outcome, LeaveOutcome::DiscardedAndLeft);
    assert_eq!(editor.edit_phase(), EditPhase::Left);
    assert!(!editor.has_unsaved_changes());
    assert_eq!(editor.model().annotations().len(), 3);
}

#[tokio::test]
async fn test_logout_and_fullscreen_collapse_after_leaving() {
    let mut editor = EditorBuilder::new().embedded().expecting_logout().build();
    editor.enter_edit_mode();

    assert_eq!(editor.leave_edit_mode(true).await.unwrap(), LeaveOutcome::Left);
}

#[tokio::test]
async fn test_reload_requiring_login_can_be_cancelled() {
    let mut snapshot = TestFixtures::snapshot();
    snapshot.config.always_force_login = true;
    snapshot.bundle.hypervideo.name = "Other video".to_string();
    let mut editor = EditorBuilder::new()
        .with_auth_outcome(AuthOutcome::Cancelled)
        .with_database(move |db| {
            db.expect_load_hypervideo().returning(move |_| Ok(snapshot.clone()));
        })
        .build();

    let outcome = editor
        .update_hypervideo(shared::HypervideoId::new("other").unwrap(), false)
        .await
        .unwrap();

    assert_eq!(outcome, ReloadOutcome::Cancelled);
    assert_eq!(editor.model().name(), "Campus tour");
    assert_eq!(editor.hypervideo_id().as_str(), TestFixtures::HYPERVIDEO_ID);
}

#[tokio::test]
async fn test_reload_with_restart_enters_preview() {
    let mut snapshot = TestFixtures::snapshot();
    snapshot.bundle.hypervideo.name = "Other video".to_string();
    let mut editor = EditorBuilder::new()
        .with_database(move |db| {
            db.expect_load_hypervideo().returning(move |_| Ok(snapshot.clone()));
        })
        .build();
    editor.mark_dirty(Category::Events);

    let outcome = editor
        .update_hypervideo(shared::HypervideoId::new("other").unwrap(), true)
        .await
        .unwrap();

    assert_eq!(outcome, ReloadOutcome::Reloaded);
    assert_eq!(editor.model().name(), "Other video");
    assert_eq!(editor.hypervideo_id().as_str(), "other");
    assert!(!editor.has_unsaved_changes());
    assert_eq!(editor.edit_phase(), EditPhase::EditingClean);
    assert_eq!(TestHelpers::state_value(&editor, "editMode"), Some(json!("preview")));
}

#[tokio::test]
async fn test_reload_without_restart_cleans_dirty_session() {
    let mut editor = TestHelpers::dirty_editor(EditorBuilder::new().with_database(|db| {
        db.expect_load_hypervideo()
            .returning(|_| Ok(TestFixtures::snapshot()))
            .times(1);
    }));
    assert_eq!(editor.edit_phase(), EditPhase::EditingDirty);

    let outcome = editor
        .update_hypervideo(TestFixtures::hypervideo_id(), false)
        .await
        .unwrap();

    assert_eq!(outcome, ReloadOutcome::Reloaded);
    assert!(!editor.has_unsaved_changes());
    assert_eq!(editor.edit_phase(), EditPhase::EditingClean);
    TestHelpers::assert_indicator_consistent(&editor);

    // Nothing left to confirm
    assert_eq!(editor.leave_edit_mode(false).await.unwrap(), LeaveOutcome::Left);
}

#[tokio::test]
async fn test_reload_failure_propagates() {
    let mut editor = EditorBuilder::new()
        .with_database(|db| {
            db.expect_load_hypervideo()
                .returning(|id| Err(ModelError::load(id, "gone")));
        })
        .build();

    let result = editor.update_hypervideo(TestFixtures::hypervideo_id(), false).await;
    assert!(matches!(result, Err(ModelError::LoadFailed { .. })));
}

#[tokio::test]
async fn test_unload_warning_follows_indicator() {
    let mut editor = EditorBuilder::new()
        .with_database(|db| {
            db.expect_save_annotations().returning(|_, _| SaveOutcome::success());
        })
        .build();
    assert_eq!(editor.unload_warning(), None);

    editor.new_annotation(text_annotation("Draft")).unwrap();
    assert!(editor.unload_warning().unwrap().contains("not saved your changes"));

    assert_eq!(editor.save().await.unwrap(), SaveStatus::Saved);
    assert_eq!(editor.unload_warning(), None);
}
