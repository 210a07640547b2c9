//! Command line front end for the hypervideo editor
//!
//! Opens one hypervideo against the configured backend, applies a single
//! edit and leaves edit mode again, asking on the terminal when changes
//! are still unsaved.

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;

use hypervideo::services::{AnyDatabase, BroadcastEventSink, ConfiguredAuthenticator, StateStore, TerminalView};
use hypervideo::{ConfigOverrides, Editor, EditorConfig, LeaveOutcome};
use shared::{hv_info, logging, EntityId, HypervideoId, NewAnnotation, NewCodeSnippet, TextAnnotation};

type CliEditor = Editor<AnyDatabase, ConfiguredAuthenticator, BroadcastEventSink, StateStore, TerminalView>;

/// Inspect and edit a hypervideo
#[derive(Parser)]
#[command(name = "hypervideo")]
#[command(about = "Edit hypervideo annotations, code snippets and styles")]
pub struct Args {
    /// Hypervideo to open
    pub hypervideo_id: String,

    /// Data directory of the file backend
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Server base URL; selects the HTTP backend
    #[arg(long)]
    pub server_url: Option<String>,

    /// Name of the editing user
    #[arg(long)]
    pub user: Option<String>,

    /// Id of the editing user
    #[arg(long)]
    pub user_id: Option<String>,

    /// Editor runs embedded in another page
    #[arg(long)]
    pub embedded: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log out once edit mode is left
    #[arg(long)]
    pub logout: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print metadata, source and entity counts
    Summary,
    /// Add a text annotation
    Annotate {
        #[arg(long)]
        name: String,
        #[arg(long)]
        start: f64,
        #[arg(long)]
        end: f64,
        /// Annotation body
        #[arg(long, default_value = "")]
        text: String,
    },
    /// Add a code snippet triggered at `start`
    AddSnippet {
        #[arg(long)]
        name: String,
        #[arg(long)]
        start: f64,
        #[arg(long)]
        snippet: String,
    },
    /// Remove the annotation at `index` in start-time order
    RemoveAnnotation { index: usize },
    /// Replace the custom CSS of the hypervideo
    SetCss { css: String },
}

impl Args {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            data_dir: self.data_dir.clone(),
            server_url: self.server_url.clone(),
            user_name: self.user.clone(),
            user_id: self.user_id.clone(),
            embedded: self.embedded,
            log_level: self.log_level.clone(),
        }
    }
}

fn print_summary(editor: &CliEditor) {
    let model = editor.model();
    println!("{} ({})", model.name(), editor.hypervideo_id());
    if !model.description().is_empty() {
        println!("  {}", model.description());
    }
    println!("  creator:      {} [{}]", model.creator(), model.creator_id());
    println!("  source:       {} {}", model.video_type(), model.source_path());
    println!("  duration:     {:.2}s", model.duration());
    println!("  overlays:     {}", model.overlays().len());
    println!("  snippets:     {}", model.code_snippets().len());
    println!("  annotations:  {}", model.annotations().len());
    for (index, annotation) in model.annotations().iter().enumerate() {
        println!(
            "    [{index}] {:>7.2} - {:<7.2} {}",
            annotation.data.start, annotation.data.end, annotation.data.name
        );
    }
    if let Some(language) = model.selected_language() {
        println!("  subtitles:    {} ({} cues)", language, model.subtitles().len());
    }
}

fn annotation_at(editor: &CliEditor, index: usize) -> anyhow::Result<EntityId> {
    editor
        .model()
        .annotations()
        .get(index)
        .map(|annotation| annotation.id)
        .with_context(|| format!("No annotation at index {index}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let config = EditorConfig::from_env()?.with_overrides(args.overrides());
    logging::init_tracing(Some(&config.log_level));
    logging::log_startup(&format!("hypervideo editor for {}", args.hypervideo_id));

    let hypervideo_id = HypervideoId::new(&args.hypervideo_id)?;
    let database = AnyDatabase::from_config(&config)?;
    let mut editor: CliEditor = Editor::open(
        hypervideo_id.clone(),
        config.editor_options(),
        database,
        ConfiguredAuthenticator::new(config.user.clone()),
        BroadcastEventSink::new(),
        StateStore::new(),
        TerminalView::stdin(),
    )
    .await
    .with_context(|| format!("Failed to open hypervideo {hypervideo_id}"))?;

    match args.command {
        Command::Summary => {
            print_summary(&editor);
            return Ok(());
        }
        Command::Annotate { name, start, end, text } => {
            editor.enter_edit_mode();
            let annotation = editor.new_annotation(NewAnnotation::Text(TextAnnotation {
                name,
                start,
                end,
                attributes: json!({ "text": text }),
            }))?;
            hv_info!(hypervideo_id, "Added annotation {}", annotation.id);
        }
        Command::AddSnippet { name, start, snippet } => {
            editor.enter_edit_mode();
            let snippet = editor.new_code_snippet(NewCodeSnippet { name, snippet, start });
            hv_info!(hypervideo_id, "Added code snippet {}", snippet.id);
        }
        Command::RemoveAnnotation { index } => {
            editor.enter_edit_mode();
            let id = annotation_at(&editor, index)?;
            let removed = editor.remove_annotation(id)?;
            hv_info!(hypervideo_id, "Removed annotation '{}'", removed.data.name);
        }
        Command::SetCss { css } => {
            editor.enter_edit_mode();
            editor.set_custom_css(css);
        }
    }

    match editor.leave_edit_mode(args.logout).await {
        Ok(LeaveOutcome::Stayed) => println!("Changes kept unsaved"),
        Ok(outcome) => hv_info!(hypervideo_id, "Edit session finished: {:?}", outcome),
        Err(e) => {
            logging::log_error(&hypervideo_id, "saving changes", &e);
            return Err(e.into());
        }
    }
    Ok(())
}
