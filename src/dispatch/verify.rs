use crate::{error::Error, http::Response};
use reqwest::StatusCode;

/// A dispatch is accepted only with `204 No Content`.
pub fn verify(response: &Response) -> Result<(), Error> {
    if response.status != StatusCode::NO_CONTENT {
        return Err(Error::UnexpectedStatusError {
            dump: response.to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::{header::HeaderMap, Version};

    fn response(status: StatusCode, body: &str) -> Response {
        Response {
            status,
            version: Version::HTTP_11,
            headers: HeaderMap::new(),
            body: body.to_owned(),
        }
    }

    #[test]
    fn should_accept_no_content() {
        assert!(verify(&response(StatusCode::NO_CONTENT, "")).is_ok());
    }

    #[test]
    fn should_reject_other_success_codes() {
        let err = verify(&response(StatusCode::OK, "{}")).unwrap_err();

        assert!(matches!(err, Error::UnexpectedStatusError { .. }));
    }

    #[test]
    fn should_carry_the_response_dump() {
        let err = verify(&response(
            StatusCode::INTERNAL_SERVER_ERROR,
            r#"{"error": "server-error"}"#,
        ))
        .unwrap_err();

        let message = err.to_string();
        assert!(message.starts_with("unexpected response from dispatch request"));
        assert!(message.contains("500 Internal Server Error"));
        assert!(message.contains(r#"{"error": "server-error"}"#));
    }
}
