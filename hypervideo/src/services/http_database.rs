//! HTTP persistence backend
//!
//! Talks JSON to the hypervideo server. Saves answer with a
//! `{"failed": bool, "error": string}` body; transport and status errors are
//! folded into a failed outcome.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::time::Duration;
use url::Url;

use shared::{AnnotationData, AppConfig, DatabaseSnapshot, HypervideoBundle, HypervideoData, HypervideoId, SaveOutcome};

use crate::error::{ModelError, ModelResult};
use crate::traits::Database;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct HttpDatabase {
    client: Client,
    base_url: Url,
}

impl HttpDatabase {
    pub fn new(base_url: &str) -> ModelResult<Self> {
        // Without a trailing slash `join` would replace the last path segment
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: Url::parse(&normalized)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> ModelResult<Url> {
        Ok(self.base_url.join(path)?)
    }

    async fn post<T: Serialize + ?Sized + Sync>(&self, path: &str, body: &T) -> SaveOutcome {
        match self.try_post(path, body).await {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!(endpoint = path, "Save request failed: {}", e);
                SaveOutcome::failure(e.to_string())
            }
        }
    }

    async fn try_post<T: Serialize + ?Sized + Sync>(&self, path: &str, body: &T) -> ModelResult<SaveOutcome> {
        let response = self
            .client
            .post(self.endpoint(path)?)
            .json(body)
            .send()
            .await?
            .error_for_status()?;

        let text = response.text().await?;
        if text.trim().is_empty() {
            return Ok(SaveOutcome::success());
        }
        Ok(serde_json::from_str(&text)?)
    }
}

#[async_trait]
impl Database for HttpDatabase {
    async fn load_hypervideo(&self, id: &HypervideoId) -> ModelResult<DatabaseSnapshot> {
        let url = self.endpoint(&format!("hypervideos/{id}"))?;
        let response = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()
            .map_err(|e| ModelError::load(id, e.to_string()))?;
        Ok(response.json().await?)
    }

    async fn save_hypervideo(&self, id: &HypervideoId, bundle: &HypervideoBundle) -> SaveOutcome {
        self.post(&format!("hypervideos/{id}"), bundle).await
    }

    async fn submit_settings(&self, id: &HypervideoId, hypervideo: &HypervideoData) -> SaveOutcome {
        self.post(&format!("hypervideos/{id}/settings"), hypervideo).await
    }

    async fn save_annotations(&self, id: &HypervideoId, annotations: &[AnnotationData]) -> SaveOutcome {
        self.post(&format!("hypervideos/{id}/annotations"), annotations).await
    }

    async fn save_config(&self, config: &AppConfig) -> SaveOutcome {
        self.post("config", config).await
    }

    async fn save_global_css(&self, css: &str) -> SaveOutcome {
        self.post("css", &serde_json::json!({ "css": css })).await
    }
}
