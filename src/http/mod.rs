mod redirect;
mod response;

use redirect::MAX_REDIRECTS;
pub use response::Response;

use reqwest::{
    header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT},
    Client, RequestBuilder,
};
use std::ops::Deref;

const USER_AGENT_VALUE: &str = "release-dispatch";

pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .redirect(redirect::policy(MAX_REDIRECTS))
            .build()?;

        Ok(HttpClient { client })
    }
}

impl Deref for HttpClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

pub trait Headers {
    fn dispatch_headers(self, token: &str) -> RequestBuilder;
}

impl Headers for RequestBuilder {
    fn dispatch_headers(self, token: &str) -> RequestBuilder {
        self.header(AUTHORIZATION, format!("token {}", token))
            .header(ACCEPT, "application/vnd.github+json")
            .header("X-GitHub-Api-Version", "2022-11-28")
            .header(USER_AGENT, USER_AGENT_VALUE)
            .header(CONTENT_TYPE, "application/json")
    }
}

/// Renders a request the way it goes on the wire, minus the credential.
pub fn dump_request(request: &reqwest::Request) -> String {
    let mut dump = format!("{} {}\n", request.method(), request.url());

    for (name, value) in request.headers() {
        let value = if *name == AUTHORIZATION {
            "<redacted>"
        } else {
            value.to_str().unwrap_or("<binary>")
        };
        dump.push_str(&format!("{}: {}\n", name, value));
    }

    if let Some(body) = request.body().and_then(|body| body.as_bytes()) {
        dump.push('\n');
        dump.push_str(&String::from_utf8_lossy(body));
    }

    dump
}
