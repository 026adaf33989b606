use reqwest::{header::HeaderMap, StatusCode, Version};
use std::fmt::{self, Display};

/// A fully read response, kept around so it can be dumped on failure.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub version: Version,
    pub headers: HeaderMap,
    pub body: String,
}

impl Response {
    pub async fn read(response: reqwest::Response) -> Result<Self, reqwest::Error> {
        let status = response.status();
        let version = response.version();
        let headers = response.headers().to_owned();
        let body = response.text().await?;

        Ok(Response {
            status,
            version,
            headers,
            body,
        })
    }
}

impl Display for Response {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{:?} {}", self.version, self.status)?;

        for (name, value) in &self.headers {
            writeln!(f, "{}: {}", name, value.to_str().unwrap_or("<binary>"))?;
        }

        if !self.body.is_empty() {
            write!(f, "\n{}", self.body)?;
        }

        Ok(())
    }
}
