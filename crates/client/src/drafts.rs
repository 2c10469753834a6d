//! REST client for the sales-order draft endpoints.
//!
//! Wraps `/sales/drafts` using [`reqwest`]. A 404 is an expected answer
//! here (no draft yet, or not the caller's), so it comes back as `None` /
//! `false` rather than an error.

use erp_core::draft::{DraftPayload, SalesOrderDraft};
use erp_core::types::DbId;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::Deserialize;

use crate::config::ClientConfig;
use crate::error::{ensure_success, ClientError};

#[derive(Debug, Deserialize)]
struct DraftEnvelope {
    draft: SalesOrderDraft,
}

#[derive(Debug, Deserialize)]
struct CreatedBody {
    id: DbId,
}

/// HTTP client for the draft endpoints of one API server.
pub struct DraftApi {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl DraftApi {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Reuse an existing [`reqwest::Client`] for connection pooling.
    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: config.base_url.clone(),
            token: config.token.clone(),
        }
    }

    /// The caller's most recently updated draft.
    pub async fn latest(&self) -> Result<Option<SalesOrderDraft>, ClientError> {
        let response = self.send(self.client.get(self.url("latest"))).await?;
        Self::parse_draft(response).await
    }

    pub async fn get(&self, id: DbId) -> Result<Option<SalesOrderDraft>, ClientError> {
        let response = self
            .send(self.client.get(self.url(&id.to_string())))
            .await?;
        Self::parse_draft(response).await
    }

    /// Create a draft and return its id.
    pub async fn create(&self, payload: &DraftPayload) -> Result<DbId, ClientError> {
        let response = self
            .send(self.client.post(self.collection_url()).json(payload))
            .await?;
        let body: CreatedBody = ensure_success(response).await?.json().await?;
        Ok(body.id)
    }

    /// Overwrite a draft. Returns `false` if no such draft belongs to the caller.
    pub async fn update(&self, id: DbId, payload: &DraftPayload) -> Result<bool, ClientError> {
        let response = self
            .send(self.client.put(self.url(&id.to_string())).json(payload))
            .await?;
        Self::acknowledge(response).await
    }

    /// Delete a draft. Returns `false` if no such draft belongs to the caller.
    pub async fn delete(&self, id: DbId) -> Result<bool, ClientError> {
        let response = self
            .send(self.client.delete(self.url(&id.to_string())))
            .await?;
        Self::acknowledge(response).await
    }

    // ---- private helpers ----

    fn collection_url(&self) -> String {
        format!("{}/sales/drafts", self.base_url)
    }

    fn url(&self, segment: &str) -> String {
        format!("{}/{segment}", self.collection_url())
    }

    async fn send(&self, request: RequestBuilder) -> Result<Response, ClientError> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        Ok(request.send().await?)
    }

    async fn parse_draft(response: Response) -> Result<Option<SalesOrderDraft>, ClientError> {
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let envelope: DraftEnvelope = ensure_success(response).await?.json().await?;
        Ok(Some(envelope.draft))
    }

    async fn acknowledge(response: Response) -> Result<bool, ClientError> {
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        ensure_success(response).await?;
        Ok(true)
    }
}
