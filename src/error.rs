//! Failures of a single search run.
//!
//! Messages are printed to the user as they are, so they read as full sentences.

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Error: TAVILY_API_KEY not found in environment variables.")]
    MissingApiKey,

    #[error("Error creating request: invalid search endpoint: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("Error creating request: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Error sending request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Error from search API: {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Error reading response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("Error parsing JSON response: {0}")]
    Decode(#[from] serde_json::Error),
}
