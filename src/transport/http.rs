//! HTTP transport over reqwest.
//!
//! Requires the `http` feature.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response, Url};

use super::CandidateTransport;
use crate::candidate::{Candidate, CandidatePatch, CandidateUpdate, NewCandidate};
use crate::config::Config;
use crate::error::StoreError;

/// REST client for `{api_url}/candidates`.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Url,
}

impl HttpTransport {
    /// Build a transport from configuration.
    ///
    /// A request timeout is only applied when the configuration sets one.
    pub fn new(config: &Config) -> Result<Self, StoreError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| StoreError::Transport(format!("failed to create HTTP client: {}", e)))?;

        Self::with_client(client, config)
    }

    /// Use an existing reqwest client.
    pub fn with_client(client: Client, config: &Config) -> Result<Self, StoreError> {
        let collection = config.collection_url();
        let base_url = Url::parse(&collection)
            .map_err(|e| StoreError::Transport(format!("invalid API URL {}: {}", collection, e)))?;
        Ok(Self { client, base_url })
    }

    /// The collection endpoint this transport talks to.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// `{base}/{id}` with `id` percent-encoded as a single path segment.
    fn item_url(&self, id: &str) -> Result<Url, StoreError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| StoreError::Transport(format!("{} cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .push(id);
        Ok(url)
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, StoreError> {
        let response = request
            .send()
            .await
            .map_err(|e| StoreError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), %body, "candidate API error");
        Err(StoreError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

fn multipart_form(payload: &NewCandidate) -> Result<Form, StoreError> {
    let mut form = Form::new()
        .text("name", payload.name.clone())
        .text("surname", payload.surname.clone());

    if let Some(file) = &payload.file {
        let mut part = Part::bytes(file.bytes.clone()).file_name(file.file_name.clone());
        if let Some(content_type) = &file.content_type {
            part = part.mime_str(content_type).map_err(|e| {
                StoreError::Transport(format!("invalid content type {}: {}", content_type, e))
            })?;
        }
        form = form.part("file", part);
    }

    Ok(form)
}

#[async_trait]
impl CandidateTransport for HttpTransport {
    async fn list(&self) -> Result<Vec<Candidate>, StoreError> {
        tracing::debug!(url = %self.base_url, "GET candidates");
        let response = self.send(self.client.get(self.base_url.clone())).await?;
        Ok(response.json().await?)
    }

    async fn get(&self, id: &str) -> Result<Candidate, StoreError> {
        let url = self.item_url(id)?;
        tracing::debug!(%url, "GET candidate");
        let response = self.send(self.client.get(url)).await?;
        Ok(response.json().await?)
    }

    async fn create(&self, payload: &NewCandidate) -> Result<Candidate, StoreError> {
        tracing::debug!(
            url = %self.base_url,
            has_file = payload.file.is_some(),
            "POST candidate"
        );
        let form = multipart_form(payload)?;
        let response = self
            .send(self.client.post(self.base_url.clone()).multipart(form))
            .await?;
        Ok(response.json().await?)
    }

    async fn update(
        &self,
        id: &str,
        payload: &CandidateUpdate,
    ) -> Result<CandidatePatch, StoreError> {
        let url = self.item_url(id)?;
        tracing::debug!(%url, "PATCH candidate");
        let response = self.send(self.client.patch(url).json(payload)).await?;
        Ok(response.json().await?)
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let url = self.item_url(id)?;
        tracing::debug!(%url, "DELETE candidate");
        self.send(self.client.delete(url)).await?;
        Ok(())
    }
}
