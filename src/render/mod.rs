//! Client for the third-party document rendering service.
//!
//! A document is produced in two round trips:
//! 1. `POST {base_url}/render` with the template id and data payload returns
//!    the id of the rendered document.
//! 2. `GET {base_url}/render/{id}/download` returns the document bytes.
//!
//! Both requests carry the bearer token. Nothing is retried and every
//! failure surfaces as a [`RenderError`].

pub(crate) mod client;


use reqwest::blocking::Client;
use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::RenderConfig;
use crate::validation::validate_id;
use client::{create_http_client, endpoint, failed_status, read_with_limit};

/// Largest accepted body for the render response, which only carries an id.
pub const MAX_RENDER_RESPONSE_BYTES: u64 = 64 * 1024; // 64KB

/// Any failure while producing a document.
///
/// Variants only refine the message. Callers should treat them alike.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("render service is not configured: set render.base_url in config.toml")]
    NotConfigured,

    #[error("missing render credential: environment variable {0} is not set")]
    MissingCredential(String),

    #[error("failed to create HTTP client")]
    Client(#[source] reqwest::Error),

    #[error("render request failed")]
    Request(#[source] reqwest::Error),

    #[error("render failed: HTTP {status} - {reason}")]
    RenderStatus { status: u16, reason: String },

    #[error("render response did not include a usable document id")]
    MissingRenderId,

    #[error("render response exceeds maximum allowed size of {limit} bytes")]
    ResponseTooLarge { limit: u64 },

    #[error("document download failed")]
    Download(#[source] reqwest::Error),

    #[error("document download failed: HTTP {status} - {reason}")]
    DownloadStatus { status: u16, reason: String },

    #[error("failed to read response body")]
    Body(#[source] std::io::Error),

    #[error("document exceeds maximum allowed size of {limit} bytes")]
    TooLarge { limit: u64 },
}

#[derive(Serialize)]
struct RenderRequest<'a, T: Serialize> {
    template_id: &'a str,
    data: &'a T,
}

/// A document fetched from the render service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    pub id: String,
    pub bytes: Vec<u8>,
}

impl RenderedDocument {
    pub fn sha256(&self) -> String {
        hex::encode(Sha256::digest(&self.bytes))
    }

    pub fn save(&self, path: &Path) -> std::io::Result<()> {
        fs::write(path, &self.bytes)
    }
}

pub struct RenderClient {
    http: Client,
    base_url: String,
    token: String,
    max_document_bytes: u64,
}

impl RenderClient {
    /// Build a client from configuration, reading the token from the
    /// environment.
    pub fn from_config(config: &RenderConfig) -> Result<Self, RenderError> {
        let base_url = config
            .base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .ok_or(RenderError::NotConfigured)?;
        let token = config
            .token()
            .ok_or_else(|| RenderError::MissingCredential(config.token_env.clone()))?;

        Self::new(config, base_url, token)
    }

    /// Build a client with an explicit endpoint and token. Timeouts and the
    /// size limit still come from `config`.
    pub fn new(
        config: &RenderConfig,
        base_url: &str,
        token: String,
    ) -> Result<Self, RenderError> {
        if token.trim().is_empty() {
            return Err(RenderError::MissingCredential(config.token_env.clone()));
        }

        Ok(Self {
            http: create_http_client(config)?,
            base_url: base_url.to_string(),
            token,
            max_document_bytes: config.max_document_bytes,
        })
    }

    /// Render `data` with `template_id` and download the result.
    pub fn render<T: Serialize>(
        &self,
        template_id: &str,
        data: &T,
    ) -> Result<RenderedDocument, RenderError> {
        let id = self.request_render(template_id, data)?;
        let bytes = self.download(&id)?;
        info!(template = template_id, document = %id, size = bytes.len(), "document rendered");
        Ok(RenderedDocument { id, bytes })
    }

    fn request_render<T: Serialize>(
        &self,
        template_id: &str,
        data: &T,
    ) -> Result<String, RenderError> {
        let url = endpoint(&self.base_url, "render");
        debug!(%url, template = template_id, "requesting render");

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(&RenderRequest { template_id, data })
            .send()
            .map_err(RenderError::Request)?;

        if let Some((status, reason)) = failed_status(&response) {
            return Err(RenderError::RenderStatus { status, reason });
        }

        let body = read_with_limit(response, MAX_RENDER_RESPONSE_BYTES).map_err(|err| match err {
            RenderError::TooLarge { limit } => RenderError::ResponseTooLarge { limit },
            other => other,
        })?;
        parse_render_id(&body).ok_or(RenderError::MissingRenderId)
    }

    fn download(&self, id: &str) -> Result<Vec<u8>, RenderError> {
        let url = endpoint(&self.base_url, &format!("render/{id}/download"));
        debug!(%url, "downloading document");

        let response = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .map_err(RenderError::Download)?;

        if let Some((status, reason)) = failed_status(&response) {
            return Err(RenderError::DownloadStatus { status, reason });
        }

        read_with_limit(response, self.max_document_bytes)
    }
}

/// Extract the document id from a render response body.
///
/// The id is later embedded in a URL path, so it must pass id validation.
fn parse_render_id(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    let id = value.get("id")?.as_str()?;
    validate_id(id).ok()?;
    Some(id.to_string())
}
