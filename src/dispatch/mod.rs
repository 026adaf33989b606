mod client;
pub mod payload;
mod verify;

pub use client::DispatchClient;
pub use payload::DispatchPayload;
pub use verify::verify;

use crate::{config::DispatchConfig, error::Error, event};
use std::path::Path;

/// Reads the event at `event_path` and relays it as a repository dispatch.
pub async fn run(config: &DispatchConfig, event_path: &Path) -> Result<(), Error> {
    let event = event::read(event_path, config.payload).await?;

    println!("Repository: {}", event.repository.full_name);
    println!("Release: {}", event.release);

    let payload = DispatchPayload::from(&event);
    log::debug!("built {:?}", payload.client_payload);

    log::info!("sending dispatch to {}", config.repo);
    let response = DispatchClient::new(config)?.send(&payload).await?;

    verify(&response)
}
