use reqwest::redirect::Policy;
use thiserror::Error;

pub const MAX_REDIRECTS: usize = 10;

#[derive(Debug, Error)]
#[error("stopped after {0} redirects")]
pub struct TooManyRedirects(pub usize);

/// Follows at most `max` redirects, then fails with [`TooManyRedirects`].
pub fn policy(max: usize) -> Policy {
    Policy::custom(move |attempt| {
        if attempt.previous().len() > max {
            attempt.error(TooManyRedirects(max))
        } else {
            attempt.follow()
        }
    })
}
