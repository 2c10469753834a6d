use std::path::PathBuf;
use std::str::FromStr;

use crate::error::ClientError;

/// Default API base URL, matching the server's default bind and `/api/v1` mount.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000/api/v1";

/// Which [`DataSource`](crate::source::DataSource) implementation to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSourceKind {
    Remote,
    Fixture,
}

impl FromStr for DataSourceKind {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remote" => Ok(Self::Remote),
            "fixture" => Ok(Self::Fixture),
            other => Err(ClientError::Config(format!(
                "unknown data source '{other}', expected 'remote' or 'fixture'"
            ))),
        }
    }
}

/// Explicit client context: where the API lives, who is calling, and where
/// table data comes from.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL without a trailing slash.
    pub base_url: String,
    /// Bearer token sent with every request, if any.
    pub token: Option<String>,
    pub data_source: DataSourceKind,
    /// JSON fixture file, required when `data_source` is `Fixture`.
    pub fixture_path: Option<PathBuf>,
}

impl ClientConfig {
    /// A remote-backed config for `base_url`.
    pub fn remote(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: trim_base_url(base_url.into()),
            token,
            data_source: DataSourceKind::Remote,
            fixture_path: None,
        }
    }

    /// A fixture-backed config reading rows from `path`.
    pub fn fixture(path: impl Into<PathBuf>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            data_source: DataSourceKind::Fixture,
            fixture_path: Some(path.into()),
        }
    }

    /// Load configuration from environment variables.
    ///
    /// | Env Var            | Default                        |
    /// |--------------------|--------------------------------|
    /// | `ERP_API_URL`      | `http://localhost:3000/api/v1` |
    /// | `ERP_API_TOKEN`    | none                           |
    /// | `ERP_DATA_SOURCE`  | `remote`                       |
    /// | `ERP_FIXTURE_PATH` | none                           |
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ClientError> {
        let base_url = trim_base_url(
            lookup("ERP_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        );
        let token = lookup("ERP_API_TOKEN").filter(|t| !t.is_empty());
        let data_source = match lookup("ERP_DATA_SOURCE") {
            Some(raw) => raw.parse()?,
            None => DataSourceKind::Remote,
        };
        let fixture_path = lookup("ERP_FIXTURE_PATH").map(PathBuf::from);

        if data_source == DataSourceKind::Fixture && fixture_path.is_none() {
            return Err(ClientError::Config(
                "ERP_FIXTURE_PATH must be set when ERP_DATA_SOURCE=fixture".into(),
            ));
        }

        Ok(Self {
            base_url,
            token,
            data_source,
            fixture_path,
        })
    }
}

fn trim_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
