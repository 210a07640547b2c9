//! Editor coordinator
//!
//! Owns the model, the unsaved-change tracker and the edit-mode state, and
//! drives them against the injected collaborators. Mutations always run in
//! the same order: model and buffer first, then the dirty flag, then the
//! audit event.

use futures_util::future::join_all;
use serde_json::{json, Map, Value};

use shared::{
    hv_debug, hv_error, hv_info, hv_warn, Authorship, EntityId, HypervideoId, NewAnnotation, NewCodeSnippet, NewOverlay,
    UserAction, USER_ACTION_EVENT,
};

use crate::core::{
    Annotation, Category, CodeSnippet, DirtyTracker, EditMode, EditPhase, HypervideoModel, LeaveOutcome, LeaveStep,
    Overlay, SavePlan, SaveTarget,
};
use crate::error::{ModelError, ModelResult};
use crate::traits::{AuthOutcome, Authenticator, Database, EditorView, EventSink, GlobalState, LeaveChoice};

/// Global state key of the unsaved indicator
pub const UNSAVED_CHANGES_KEY: &str = "unsavedChanges";
pub const EDIT_MODE_KEY: &str = "editMode";
pub const VIEW_MODE_KEY: &str = "viewMode";
/// Prefix under which hypervideo config entries are published
pub const CONFIG_STATE_PREFIX: &str = "hv_config_";

pub const UNLOAD_WARNING: &str = "You have not saved your changes. Are you sure you want to leave the page?";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditorOptions {
    /// Running inside an iframe; leaving edit mode collapses fullscreen
    pub embedded: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveStatus {
    Saved,
    /// The authentication gate was abandoned before anything was sent
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadOutcome {
    Reloaded,
    Cancelled,
}

pub struct Editor<D, A, E, S, V>
where
    D: Database,
    A: Authenticator,
    E: EventSink,
    S: GlobalState,
    V: EditorView,
{
    options: EditorOptions,
    model: HypervideoModel,
    tracker: DirtyTracker,
    edit_mode: EditMode,

    database: D,
    auth: A,
    events: E,
    state: S,
    view: V,
}

impl<D, A, E, S, V> Editor<D, A, E, S, V>
where
    D: Database,
    A: Authenticator,
    E: EventSink,
    S: GlobalState,
    V: EditorView,
{
    /// Wrap an already built model
    pub fn new(model: HypervideoModel, options: EditorOptions, database: D, auth: A, events: E, state: S, view: V) -> Self {
        let editor = Self {
            options,
            model,
            tracker: DirtyTracker::new(),
            edit_mode: EditMode::new(),
            database,
            auth,
            events,
            state,
            view,
        };
        editor.publish_model_state();
        editor
    }

    /// Load a hypervideo from the backend and build its model
    pub async fn open(
        hypervideo_id: HypervideoId,
        options: EditorOptions,
        database: D,
        auth: A,
        events: E,
        state: S,
        view: V,
    ) -> ModelResult<Self> {
        hv_info!(hypervideo_id, "📂 Opening hypervideo");
        let snapshot = database.load_hypervideo(&hypervideo_id).await?;
        let model = HypervideoModel::from_snapshot(hypervideo_id, snapshot)?;
        Ok(Self::new(model, options, database, auth, events, state, view))
    }

    pub fn hypervideo_id(&self) -> &HypervideoId {
        self.model.hypervideo_id()
    }

    pub fn model(&self) -> &HypervideoModel {
        &self.model
    }

    /// Direct model access for the plain setters that do not flag anything
    pub fn model_mut(&mut self) -> &mut HypervideoModel {
        &mut self.model
    }

    pub fn dirty(&self) -> &DirtyTracker {
        &self.tracker
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.tracker.has_unsaved_changes()
    }

    pub fn edit_phase(&self) -> EditPhase {
        self.edit_mode.phase()
    }

    pub fn database(&self) -> &D {
        &self.database
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn events(&self) -> &E {
        &self.events
    }

    /// Message shown when the page is closed with unsaved changes
    pub fn unload_warning(&self) -> Option<&'static str> {
        self.has_unsaved_changes().then_some(UNLOAD_WARNING)
    }

    pub fn mark_dirty(&mut self, category: Category) {
        self.tracker.mark(category);
        self.raise_unsaved_indicator();
        hv_debug!(self.hypervideo_id(), "Marked {} as unsaved", category);
    }

    /// Mark a category by its view-layer name; unknown names only raise the
    /// global indicator
    pub fn mark_dirty_named(&mut self, name: &str) -> Option<Category> {
        let category = self.tracker.mark_named(name);
        if category.is_none() {
            hv_warn!(self.hypervideo_id(), "Unknown change category '{}'", name);
        }
        self.raise_unsaved_indicator();
        category
    }

    pub fn enter_edit_mode(&mut self) {
        self.edit_mode.enter(self.tracker.has_unsaved_changes());
        self.state.change_state(EDIT_MODE_KEY, json!("preview"));
        hv_info!(self.hypervideo_id(), "✏️ Entered edit mode");
    }

    pub fn new_overlay(&mut self, proto: NewOverlay) -> ModelResult<Overlay> {
        let data = self.model.build_overlay(proto, &self.stamp())?;
        let overlay = self.model.add_overlay(data);
        self.mark_dirty(Category::Overlays);
        self.audit(UserAction::OverlayAdd {
            overlay: overlay.data.clone(),
        });
        Ok(overlay)
    }

    pub fn remove_overlay(&mut self, overlay_id: EntityId) -> ModelResult<Overlay> {
        let overlay = self.model.remove_overlay(overlay_id)?;
        self.mark_dirty(Category::Overlays);
        self.audit(UserAction::OverlayDelete {
            overlay: overlay.data.clone(),
        });
        Ok(overlay)
    }

    pub fn new_code_snippet(&mut self, proto: NewCodeSnippet) -> CodeSnippet {
        let data = self.model.build_code_snippet(proto, &self.stamp());
        let snippet = self.model.add_code_snippet(data);
        self.mark_dirty(Category::CodeSnippets);
        self.audit(UserAction::CodeSnippetAdd {
            codesnippet: snippet.data.clone(),
        });
        snippet
    }

    pub fn remove_code_snippet(&mut self, snippet_id: EntityId) -> ModelResult<CodeSnippet> {
        let snippet = self.model.remove_code_snippet(snippet_id)?;
        self.mark_dirty(Category::CodeSnippets);
        self.audit(UserAction::CodeSnippetDelete {
            codesnippet: snippet.data.clone(),
        });
        Ok(snippet)
    }

    pub fn new_annotation(&mut self, proto: NewAnnotation) -> ModelResult<Annotation> {
        let data = self.model.build_annotation(proto, &self.stamp())?;
        let annotation = self.model.add_annotation(data);
        self.mark_dirty(Category::Annotations);
        self.audit(UserAction::AnnotationAdd {
            annotation: annotation.data.clone(),
        });
        Ok(annotation)
    }

    pub fn remove_annotation(&mut self, annotation_id: EntityId) -> ModelResult<Annotation> {
        let annotation = self.model.remove_annotation(annotation_id)?;
        self.mark_dirty(Category::Annotations);
        self.audit(UserAction::AnnotationDelete {
            annotation: annotation.data.clone(),
        });
        Ok(annotation)
    }

    pub fn set_events(&mut self, events: Map<String, Value>) {
        self.model.replace_events(events);
        self.mark_dirty(Category::Events);
    }

    pub fn set_custom_css(&mut self, css: impl Into<String>) {
        self.model.replace_custom_css(css);
        self.mark_dirty(Category::CustomCss);
    }

    pub fn update_settings(&mut self, name: impl Into<String>, description: impl Into<String>, hidden: bool) {
        self.model.apply_settings(name, description, hidden);
        self.mark_dirty(Category::Settings);
    }

    pub fn update_layout(&mut self, layout: Value) {
        self.model.set_layout(layout);
        self.mark_dirty(Category::Layout);
    }

    pub fn update_config(&mut self, key: &str, value: Value) -> ModelResult<()> {
        self.model.set_config_value(key, value)?;
        self.mark_dirty(Category::Config);
        Ok(())
    }

    pub fn set_global_css(&mut self, css: impl Into<String>) {
        self.model.set_global_css(css);
        self.mark_dirty(Category::GlobalCss);
    }

    /// Persist every dirty category.
    ///
    /// All planned requests are issued together and joined. The first failed
    /// outcome aborts the commit and every flag stays as it was. When all
    /// succeed the flags are cleared in one step and `EditSave` is emitted.
    pub async fn save(&mut self) -> ModelResult<SaveStatus> {
        if self.auth.ensure_authenticated().await == AuthOutcome::Cancelled {
            hv_info!(self.hypervideo_id(), "Save cancelled at login");
            return Ok(SaveStatus::Cancelled);
        }

        let plan = SavePlan::from_flags(&self.tracker);
        let id = self.model.hypervideo_id().clone();
        hv_info!(id, "💾 Saving {} request(s)", plan.requests.len());

        if plan.submit_settings {
            let outcome = self.database.submit_settings(&id, &self.model.buffer().hypervideo).await;
            if outcome.is_failed() {
                hv_warn!(id, "Settings submission failed: {}", outcome.message());
            }
        }

        let buffer = self.model.buffer();
        let bundle = buffer.hypervideo_bundle();
        let annotations = buffer.annotation_documents();
        let pending: Vec<_> = plan
            .requests
            .iter()
            .map(|target| match target {
                SaveTarget::Hypervideo => self.database.save_hypervideo(&id, &bundle),
                SaveTarget::Annotations => self.database.save_annotations(&id, &annotations),
                SaveTarget::Config => self.database.save_config(&buffer.config),
                SaveTarget::GlobalCss => self.database.save_global_css(&buffer.global_css),
            })
            .collect();
        let outcomes = join_all(pending).await;

        if let Some((target, outcome)) = plan.requests.iter().zip(&outcomes).find(|(_, outcome)| outcome.is_failed()) {
            let error = ModelError::SaveFailed {
                target: *target,
                message: outcome.message().to_string(),
            };
            hv_error!(id, "❌ {} save failed: {}", target, error);
            return Err(error);
        }

        self.tracker.clear();
        self.state.change_state(UNSAVED_CHANGES_KEY, Value::Bool(false));
        self.edit_mode.sync(false);
        self.audit(UserAction::EditSave);
        shared::logging::log_success(&id, "Changes have been saved");
        Ok(SaveStatus::Saved)
    }

    /// End edit mode, asking what to do with unsaved changes first
    pub async fn leave_edit_mode(&mut self, logout_after: bool) -> ModelResult<LeaveOutcome> {
        match self.edit_mode.begin_leave(self.tracker.has_unsaved_changes()) {
            LeaveStep::Leave => {
                self.finish_leave(logout_after);
                Ok(LeaveOutcome::Left)
            }
            LeaveStep::Confirm => match self.view.confirm_leave().await {
                LeaveChoice::Save => match self.save().await {
                    Ok(SaveStatus::Saved) => {
                        self.finish_leave(logout_after);
                        Ok(LeaveOutcome::SavedAndLeft)
                    }
                    Ok(SaveStatus::Cancelled) => {
                        self.edit_mode.stay(true);
                        Ok(LeaveOutcome::Stayed)
                    }
                    Err(e) => {
                        self.edit_mode.stay(true);
                        Err(e)
                    }
                },
                LeaveChoice::Discard => {
                    self.tracker.clear();
                    self.state.change_state(UNSAVED_CHANGES_KEY, Value::Bool(false));
                    self.finish_leave(logout_after);
                    hv_info!(self.hypervideo_id(), "Discarding changes, reloading from backend");
                    let id = self.hypervideo_id().clone();
                    self.update_hypervideo(id, false).await?;
                    Ok(LeaveOutcome::DiscardedAndLeft)
                }
                LeaveChoice::Cancel => {
                    self.edit_mode.stay(true);
                    Ok(LeaveOutcome::Stayed)
                }
            },
        }
    }

    /// Replace the model with a fresh load of `hypervideo_id`
    pub async fn update_hypervideo(
        &mut self,
        hypervideo_id: HypervideoId,
        restart_edit_mode: bool,
    ) -> ModelResult<ReloadOutcome> {
        hv_info!(hypervideo_id, "🔄 Loading hypervideo");
        self.state.change_state(VIEW_MODE_KEY, json!("video"));

        let snapshot = self.database.load_hypervideo(&hypervideo_id).await?;
        if snapshot.config.always_force_login && self.auth.ensure_authenticated().await == AuthOutcome::Cancelled {
            hv_info!(hypervideo_id, "Reload cancelled at login");
            return Ok(ReloadOutcome::Cancelled);
        }

        self.model = HypervideoModel::from_snapshot(hypervideo_id, snapshot)?;
        self.tracker.clear();
        self.edit_mode.sync(false);
        self.publish_model_state();

        if restart_edit_mode {
            self.enter_edit_mode();
        }
        Ok(ReloadOutcome::Reloaded)
    }

    fn publish_model_state(&self) {
        for (key, value) in self.model.config_entries() {
            self.state.change_state(&format!("{CONFIG_STATE_PREFIX}{key}"), value);
        }
        self.state.change_state(UNSAVED_CHANGES_KEY, Value::Bool(false));
    }

    fn finish_leave(&mut self, logout_after: bool) {
        if self.options.embedded {
            self.view.collapse_fullscreen();
        }
        self.edit_mode.finish();
        self.state.change_state(EDIT_MODE_KEY, Value::Bool(false));
        self.audit(UserAction::EditEnd);
        hv_info!(self.hypervideo_id(), "Left edit mode");

        if logout_after {
            self.auth.logout();
        }
    }

    fn raise_unsaved_indicator(&mut self) {
        self.state.change_state(UNSAVED_CHANGES_KEY, Value::Bool(true));
        self.edit_mode.sync(true);
    }

    fn stamp(&self) -> Authorship {
        let user = self.auth.identity();
        Authorship::now(user.name, user.id)
    }

    fn audit(&self, action: UserAction) {
        self.events.trigger_event(USER_ACTION_EVENT, &action);
    }
}
