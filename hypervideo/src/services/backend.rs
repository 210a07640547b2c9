//! Runtime selection between the file and HTTP backends

use async_trait::async_trait;

use shared::{AnnotationData, AppConfig, DatabaseSnapshot, HypervideoBundle, HypervideoData, HypervideoId, SaveOutcome};

use super::{FileDatabase, HttpDatabase};
use crate::config::EditorConfig;
use crate::error::ModelResult;
use crate::traits::Database;

pub enum AnyDatabase {
    File(FileDatabase),
    Http(HttpDatabase),
}

impl AnyDatabase {
    /// HTTP backend when a server URL is configured, files otherwise
    pub fn from_config(config: &EditorConfig) -> ModelResult<Self> {
        match &config.server_url {
            Some(url) => Ok(AnyDatabase::Http(HttpDatabase::new(url)?)),
            None => Ok(AnyDatabase::File(FileDatabase::new(config.data_dir.clone()))),
        }
    }

    fn inner(&self) -> &dyn Database {
        match self {
            AnyDatabase::File(database) => database,
            AnyDatabase::Http(database) => database,
        }
    }
}

#[async_trait]
impl Database for AnyDatabase {
    async fn load_hypervideo(&self, id: &HypervideoId) -> ModelResult<DatabaseSnapshot> {
        self.inner().load_hypervideo(id).await
    }

    async fn save_hypervideo(&self, id: &HypervideoId, bundle: &HypervideoBundle) -> SaveOutcome {
        self.inner().save_hypervideo(id, bundle).await
    }

    async fn submit_settings(&self, id: &HypervideoId, hypervideo: &HypervideoData) -> SaveOutcome {
        self.inner().submit_settings(id, hypervideo).await
    }

    async fn save_annotations(&self, id: &HypervideoId, annotations: &[AnnotationData]) -> SaveOutcome {
        self.inner().save_annotations(id, annotations).await
    }

    async fn save_config(&self, config: &AppConfig) -> SaveOutcome {
        self.inner().save_config(config).await
    }

    async fn save_global_css(&self, css: &str) -> SaveOutcome {
        self.inner().save_global_css(css).await
    }
}
