//! JSON file persistence backend
//!
//! Layout under the data directory:
//! - `hypervideos/<id>/hypervideo.json`: metadata, sequence, overlays, code snippets
//! - `hypervideos/<id>/annotations.json`
//! - `hypervideos/<id>/subtitles/<language>.json`
//! - `resources.json`, `config.json`, `custom.css`

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;

use shared::{
    hv_debug, AnnotationData, AppConfig, DatabaseSnapshot, HypervideoBundle, HypervideoData, HypervideoId,
    SaveOutcome, SubtitleCue,
};

use crate::error::{ModelError, ModelResult};
use crate::traits::Database;

pub struct FileDatabase {
    root: PathBuf,
}

impl FileDatabase {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn hypervideo_dir(&self, id: &HypervideoId) -> PathBuf {
        self.root.join("hypervideos").join(id.as_str())
    }

    fn bundle_path(&self, id: &HypervideoId) -> PathBuf {
        self.hypervideo_dir(id).join("hypervideo.json")
    }

    fn annotations_path(&self, id: &HypervideoId) -> PathBuf {
        self.hypervideo_dir(id).join("annotations.json")
    }

    fn subtitles_dir(&self, id: &HypervideoId) -> PathBuf {
        self.hypervideo_dir(id).join("subtitles")
    }

    fn resources_path(&self) -> PathBuf {
        self.root.join("resources.json")
    }

    fn config_path(&self) -> PathBuf {
        self.root.join("config.json")
    }

    fn global_css_path(&self) -> PathBuf {
        self.root.join("custom.css")
    }

    /// Write a JSON document next to its destination, then move it in place
    async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> ModelResult<()> {
        let content = serde_json::to_string_pretty(value)?;
        Self::write_atomic(path, content.as_bytes()).await
    }

    async fn write_atomic(path: &Path, content: &[u8]) -> ModelResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, content).await?;
        fs::rename(&tmp, path).await?;
        Ok(())
    }

    /// Read a JSON document; a missing file yields the default value
    async fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> ModelResult<T> {
        match fs::read_to_string(path).await {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(T::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn read_subtitles(&self, id: &HypervideoId) -> ModelResult<BTreeMap<String, Vec<SubtitleCue>>> {
        let mut subtitles = BTreeMap::new();
        let mut entries = match fs::read_dir(self.subtitles_dir(id)).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(subtitles),
            Err(e) => return Err(e.into()),
        };

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some("json") {
                continue;
            }
            let Some(language) = path.file_stem().and_then(|stem| stem.to_str()) else {
                continue;
            };
            let cues: Vec<SubtitleCue> = serde_json::from_str(&fs::read_to_string(&path).await?)?;
            subtitles.insert(language.to_string(), cues);
        }
        Ok(subtitles)
    }

    async fn write_bundle(&self, id: &HypervideoId, bundle: &HypervideoBundle) -> ModelResult<()> {
        let mut bundle = bundle.clone();
        bundle.hypervideo.lastchanged = chrono::Utc::now().timestamp_millis();
        Self::write_json(&self.bundle_path(id), &bundle).await
    }

    async fn write_settings(&self, id: &HypervideoId, hypervideo: &HypervideoData) -> ModelResult<()> {
        let path = self.bundle_path(id);
        let mut bundle: HypervideoBundle = Self::read_json_or_default(&path).await?;
        bundle.hypervideo.name = hypervideo.name.clone();
        bundle.hypervideo.description = hypervideo.description.clone();
        bundle.hypervideo.hidden = hypervideo.hidden;
        bundle.hypervideo.subtitles = hypervideo.subtitles.clone();
        bundle.hypervideo.lastchanged = chrono::Utc::now().timestamp_millis();
        Self::write_json(&path, &bundle).await
    }

    /// Store one hypervideo snapshot on disk, creating the layout
    pub async fn store_snapshot(&self, id: &HypervideoId, snapshot: &DatabaseSnapshot) -> ModelResult<()> {
        Self::write_json(&self.bundle_path(id), &snapshot.bundle).await?;
        Self::write_json(&self.annotations_path(id), &snapshot.annotations).await?;
        for (language, cues) in &snapshot.subtitles {
            Self::write_json(&self.subtitles_dir(id).join(format!("{language}.json")), cues).await?;
        }
        Self::write_json(&self.resources_path(), &snapshot.resources).await?;
        Self::write_json(&self.config_path(), &snapshot.config).await?;
        Self::write_atomic(&self.global_css_path(), snapshot.global_css.as_bytes()).await
    }
}

fn outcome(result: ModelResult<()>) -> SaveOutcome {
    match result {
        Ok(()) => SaveOutcome::success(),
        Err(e) => SaveOutcome::failure(e.to_string()),
    }
}

#[async_trait]
impl Database for FileDatabase {
    async fn load_hypervideo(&self, id: &HypervideoId) -> ModelResult<DatabaseSnapshot> {
        let bundle_path = self.bundle_path(id);
        let content = fs::read_to_string(&bundle_path)
            .await
            .map_err(|e| ModelError::load(id, format!("{}: {e}", bundle_path.display())))?;
        let bundle: HypervideoBundle =
            serde_json::from_str(&content).map_err(|e| ModelError::load(id, e.to_string()))?;

        let global_css = match fs::read_to_string(self.global_css_path()).await {
            Ok(css) => css,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(e.into()),
        };

        let snapshot = DatabaseSnapshot {
            bundle,
            annotations: Self::read_json_or_default(&self.annotations_path(id)).await?,
            subtitles: self.read_subtitles(id).await?,
            resources: Self::read_json_or_default(&self.resources_path()).await?,
            config: Self::read_json_or_default(&self.config_path()).await?,
            global_css,
        };
        hv_debug!(id, "📁 Loaded from {}", self.root.display());
        Ok(snapshot)
    }

    async fn save_hypervideo(&self, id: &HypervideoId, bundle: &HypervideoBundle) -> SaveOutcome {
        outcome(self.write_bundle(id, bundle).await)
    }

    async fn submit_settings(&self, id: &HypervideoId, hypervideo: &HypervideoData) -> SaveOutcome {
        outcome(self.write_settings(id, hypervideo).await)
    }

    async fn save_annotations(&self, id: &HypervideoId, annotations: &[AnnotationData]) -> SaveOutcome {
        outcome(Self::write_json(&self.annotations_path(id), annotations).await)
    }

    async fn save_config(&self, config: &AppConfig) -> SaveOutcome {
        outcome(Self::write_json(&self.config_path(), config).await)
    }

    async fn save_global_css(&self, css: &str) -> SaveOutcome {
        outcome(Self::write_atomic(&self.global_css_path(), css.as_bytes()).await)
    }
}
