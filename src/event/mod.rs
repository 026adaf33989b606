mod release;

pub use release::Release;
#[cfg(test)]
pub use release::Asset;

use crate::{config::PayloadFormat, error::Error};
use serde::Deserialize;
use std::path::Path;

/// The release event GitHub Actions writes to `$GITHUB_EVENT_PATH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub repository: Repository,
    pub release: Release,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Repository {
    pub full_name: String,
}

#[derive(Deserialize)]
struct RawEvent {
    repository: Repository,
    release: release::RawRelease,
}

pub async fn read(path: &Path, format: PayloadFormat) -> Result<Event, Error> {
    log::debug!("reading event from {}", path.display());
    let content = tokio::fs::read(path).await.map_err(|cause| Error::ReadError {
        path: path.to_owned(),
        cause,
    })?;

    decode(&content, format).map_err(|cause| Error::DecodeError {
        path: path.to_owned(),
        cause,
    })
}

fn decode(content: &[u8], format: PayloadFormat) -> Result<Event, serde_json::Error> {
    let raw = serde_json::from_slice::<RawEvent>(content)?;

    Ok(Event {
        repository: raw.repository,
        release: raw.release.select(format)?,
    })
}
