//! Table data sources.
//!
//! A [`DataSource`] yields rows for a named resource (e.g. `"sales/orders"`).
//! [`RemoteSource`] fetches them from the REST API; [`FixtureSource`] serves
//! them from a JSON file or an in-memory map. [`build_data_source`] picks one
//! from a [`ClientConfig`].

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use erp_core::table::{DataTable, Row, TableView};
use serde_json::Value;

use crate::config::{ClientConfig, DataSourceKind};
use crate::error::{ensure_success, ClientError};

/// Something that can produce table rows for a resource.
#[async_trait]
pub trait DataSource: Send + Sync {
    async fn fetch_rows(&self, resource: &str) -> Result<Vec<Row>, ClientError>;
}

// ---------------------------------------------------------------------------
// Remote
// ---------------------------------------------------------------------------

/// Rows fetched with `GET {base_url}/{resource}`.
///
/// Accepts either a bare JSON array or a `{ "data": [...] }` envelope.
pub struct RemoteSource {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl RemoteSource {
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
}

#[async_trait]
impl DataSource for RemoteSource {
    async fn fetch_rows(&self, resource: &str) -> Result<Vec<Row>, ClientError> {
        let url = format!("{}/{}", self.base_url, resource.trim_start_matches('/'));
        let mut request = self.client.get(&url);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = ensure_success(request.send().await?).await?;
        let payload: Value = response.json().await?;
        let rows = match payload {
            Value::Object(mut envelope) => envelope
                .remove("data")
                .ok_or_else(|| ClientError::Payload(format!("{resource}: missing 'data'")))?,
            other => other,
        };
        tracing::debug!(resource, "Fetched remote rows");
        into_rows(resource, rows)
    }
}

// ---------------------------------------------------------------------------
// Fixture
// ---------------------------------------------------------------------------

/// Rows served from memory, keyed by resource name.
///
/// Unknown resources yield no rows.
#[derive(Debug, Default, Clone)]
pub struct FixtureSource {
    resources: HashMap<String, Vec<Row>>,
}

impl FixtureSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(mut self, resource: impl Into<String>, rows: Vec<Row>) -> Self {
        self.resources.insert(resource.into(), rows);
        self
    }

    /// Load a fixture file shaped `{ "<resource>": [ {row}, ... ], ... }`.
    pub async fn from_path(path: &Path) -> Result<Self, ClientError> {
        let text = tokio::fs::read_to_string(path).await?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ClientError> {
        let value: Value = serde_json::from_str(text)
            .map_err(|e| ClientError::Payload(format!("fixture is not JSON: {e}")))?;
        let Value::Object(map) = value else {
            return Err(ClientError::Payload(
                "fixture must be an object of resource arrays".into(),
            ));
        };

        let mut resources = HashMap::with_capacity(map.len());
        for (resource, rows) in map {
            let rows = into_rows(&resource, rows)?;
            resources.insert(resource, rows);
        }
        Ok(Self { resources })
    }
}

#[async_trait]
impl DataSource for FixtureSource {
    async fn fetch_rows(&self, resource: &str) -> Result<Vec<Row>, ClientError> {
        Ok(self.resources.get(resource).cloned().unwrap_or_default())
    }
}

fn into_rows(resource: &str, value: Value) -> Result<Vec<Row>, ClientError> {
    let Value::Array(items) = value else {
        return Err(ClientError::Payload(format!(
            "{resource}: expected an array of rows"
        )));
    };
    items
        .into_iter()
        .map(|item| match item {
            Value::Object(row) => Ok(row),
            other => Err(ClientError::Payload(format!(
                "{resource}: row is not an object: {other}"
            ))),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Selection and loading
// ---------------------------------------------------------------------------

/// Build the data source named by `config.data_source`.
pub async fn build_data_source(config: &ClientConfig) -> Result<Box<dyn DataSource>, ClientError> {
    match config.data_source {
        DataSourceKind::Remote => Ok(Box::new(RemoteSource::new(config))),
        DataSourceKind::Fixture => {
            let path = config.fixture_path.as_deref().ok_or_else(|| {
                ClientError::Config("fixture data source requires a fixture path".into())
            })?;
            Ok(Box::new(FixtureSource::from_path(path).await?))
        }
    }
}

/// Rows as fetched plus the view rendered from them.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub rows: Vec<Row>,
    pub view: TableView,
}

/// Fetch `resource` and render it through `table`.
///
/// A failed fetch renders the table's error state with no rows.
pub async fn load_table(table: &DataTable, source: &dyn DataSource, resource: &str) -> LoadedTable {
    match source.fetch_rows(resource).await {
        Ok(rows) => {
            let view = table.render(&rows, false, None);
            LoadedTable { rows, view }
        }
        Err(err) => {
            tracing::warn!(resource, error = %err, "Failed to load table data");
            let message = err.to_string();
            LoadedTable {
                rows: Vec::new(),
                view: table.render(&[], false, Some(message.as_str())),
            }
        }
    }
}
