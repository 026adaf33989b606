use clap::{Parser, ValueEnum};
use log::LevelFilter;

pub const DEFAULT_ENDPOINT: &str = "https://api.github.com";

pub const EVENT_PATH_VAR: &str = "GITHUB_EVENT_PATH";

#[derive(Debug, Parser)]
#[command(name = "release-dispatch", version, about = "Sends a repository_dispatch for a release event")]
pub struct Cli {
    /// Specifies endpoint for sending dispatch request
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,
    /// Specifies repo for sending dispatch request
    #[arg(long)]
    pub repo: String,
    /// Github Authorization Token
    #[arg(long)]
    pub token: String,
    /// Which release fields the client payload is built from
    #[arg(long, value_enum, default_value_t = PayloadFormat::Name)]
    pub payload: PayloadFormat,
    #[arg(long, default_value_t = LevelFilter::Info)]
    pub log_level: LevelFilter,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PayloadFormat {
    /// `tag_name` + `assets` when the release has assets, `name` otherwise
    Auto,
    /// `{repo, release}` from `release.name`
    #[default]
    Name,
    /// `{source, uri}` from `release.tag_name` and the first asset
    Asset,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchConfig {
    pub endpoint: String,
    pub repo: String,
    pub token: String,
    pub payload: PayloadFormat,
}

impl DispatchConfig {
    pub fn new(
        endpoint: impl Into<String>,
        repo: impl Into<String>,
        token: impl Into<String>,
        payload: PayloadFormat,
    ) -> Self {
        DispatchConfig {
            endpoint: endpoint.into(),
            repo: repo.into(),
            token: token.into(),
            payload,
        }
    }

    pub fn dispatch_url(&self) -> String {
        format!("{}/repos/{}/dispatches", self.endpoint, self.repo)
    }
}

impl From<Cli> for DispatchConfig {
    fn from(cli: Cli) -> Self {
        DispatchConfig::new(cli.endpoint, cli.repo, cli.token, cli.payload)
    }
}
