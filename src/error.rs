use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("failed to read $GITHUB_EVENT_PATH ({})", path.display())]
    ReadError {
        path: PathBuf,
        #[source]
        cause: io::Error,
    },
    #[error("failed to decode $GITHUB_EVENT_PATH ({})", path.display())]
    DecodeError {
        path: PathBuf,
        #[source]
        cause: serde_json::Error,
    },
    #[error("failed to create dispatch request")]
    RequestBuildError {
        #[source]
        cause: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("failed to complete dispatch request")]
    TransportError {
        #[source]
        cause: reqwest::Error,
    },
    #[error("unexpected response from dispatch request:\n{dump}")]
    UnexpectedStatusError { dump: String },
}
