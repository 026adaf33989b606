use super::payload::DispatchPayload;
use crate::{
    config::DispatchConfig,
    error::Error,
    http::{dump_request, Headers, HttpClient, Response},
};
use url::Url;

pub struct DispatchClient<'a> {
    config: &'a DispatchConfig,
    http: HttpClient,
}

impl<'a> DispatchClient<'a> {
    pub fn new(config: &'a DispatchConfig) -> Result<Self, Error> {
        let http = HttpClient::new().map_err(|cause| Error::TransportError { cause })?;

        Ok(DispatchClient { config, http })
    }

    /// Posts the payload to `<endpoint>/repos/<repo>/dispatches` and reads the
    /// whole response, whatever its status.
    pub async fn send(&self, payload: &DispatchPayload) -> Result<Response, Error> {
        let url = Url::parse(&self.config.dispatch_url())
            .map_err(|cause| Error::RequestBuildError {
                cause: cause.into(),
            })?;

        let request = self
            .http
            .post(url)
            .dispatch_headers(&self.config.token)
            .json(payload)
            .build()
            .map_err(|cause| Error::RequestBuildError {
                cause: cause.into(),
            })?;

        log::debug!("request ->\n{}", dump_request(&request));

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|cause| Error::TransportError { cause })?;

        let response = Response::read(response)
            .await
            .map_err(|cause| Error::TransportError { cause })?;

        log::debug!("response ->\n{}", response);

        Ok(response)
    }
}
