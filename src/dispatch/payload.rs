use crate::event::{Event, Release};
use serde::Serialize;

pub const DISPATCH_EVENT_TYPE: &str = "update-buildpack-toml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchPayload {
    pub event_type: String,
    pub client_payload: ClientPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ClientPayload {
    Release { repo: String, release: String },
    Source { source: String, uri: String },
}

impl DispatchPayload {
    pub fn new(client_payload: ClientPayload) -> Self {
        DispatchPayload {
            event_type: DISPATCH_EVENT_TYPE.to_owned(),
            client_payload,
        }
    }
}

impl From<&Event> for DispatchPayload {
    fn from(event: &Event) -> Self {
        let full_name = &event.repository.full_name;

        let client_payload = match &event.release {
            Release::Named { name } => ClientPayload::Release {
                repo: full_name.to_owned(),
                release: name.to_owned(),
            },
            Release::Tagged { tag_name, assets } => ClientPayload::Source {
                source: tarball_url(full_name, tag_name),
                // the reader rejects tagged releases without assets
                uri: assets
                    .first()
                    .map(|asset| asset.browser_download_url.to_owned())
                    .unwrap_or_default(),
            },
        };

        DispatchPayload::new(client_payload)
    }
}

fn tarball_url(full_name: &str, tag_name: &str) -> String {
    format!(
        "https://github.com/{}/archive/{}.tar.gz",
        full_name, tag_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{Asset, Repository};
    use serde_json::json;

    fn event(release: Release) -> Event {
        Event {
            repository: Repository {
                full_name: "acme/widget".to_owned(),
            },
            release,
        }
    }

    #[test]
    fn should_map_a_named_release() {
        let payload = DispatchPayload::from(&event(Release::Named {
            name: "v1.0".to_owned(),
        }));

        assert_eq!(
            serde_json::to_value(&payload).expect("serializes"),
            json!({
                "event_type": "update-buildpack-toml",
                "client_payload": { "repo": "acme/widget", "release": "v1.0" }
            })
        );
    }

    #[test]
    fn should_map_a_tagged_release_to_the_first_asset() {
        let payload = DispatchPayload::from(&event(Release::Tagged {
            tag_name: "v2.3.4".to_owned(),
            assets: vec![
                Asset {
                    browser_download_url: "https://example.com/widget-v2.3.4.tgz".to_owned(),
                },
                Asset {
                    browser_download_url: "https://example.com/widget-v2.3.4.sha256".to_owned(),
                },
            ],
        }));

        assert_eq!(
            payload.client_payload,
            ClientPayload::Source {
                source: "https://github.com/acme/widget/archive/v2.3.4.tar.gz".to_owned(),
                uri: "https://example.com/widget-v2.3.4.tgz".to_owned(),
            }
        );
        assert_eq!(payload.event_type, DISPATCH_EVENT_TYPE);
    }

    #[test]
    fn should_be_deterministic() {
        let event = event(Release::Named {
            name: "Release v1.2.3".to_owned(),
        });

        assert_eq!(DispatchPayload::from(&event), DispatchPayload::from(&event));
    }
}
