/// Errors from the client data layer.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A fixture file could not be read.
    #[error("Failed to read fixture: {0}")]
    Io(#[from] std::io::Error),

    /// A response or fixture did not have the expected shape.
    #[error("Unexpected payload: {0}")]
    Payload(String),

    /// Client configuration is missing or invalid.
    #[error("Invalid client configuration: {0}")]
    Config(String),
}

/// Pass a 2xx response through, or turn it into [`ClientError::Api`]
/// carrying the status and body text.
pub(crate) async fn ensure_success(
    response: reqwest::Response,
) -> Result<reqwest::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "<unreadable body>".to_string());
    Err(ClientError::Api {
        status: status.as_u16(),
        body,
    })
}
