use reqwest::StatusCode;
use thiserror::Error;

/// Failure modes a provider can signal. The resilient wrapper reacts to
/// all of them the same way, but the status and body are kept around so
/// upstream problems can be diagnosed from the logs.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request never produced a response (DNS, TLS, connection reset...).
    #[error("{provider}: request failed: {source}")]
    Transport {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    /// The vendor answered with a non-success status.
    #[error("{provider} error {status}: {body}")]
    Upstream {
        provider: &'static str,
        status: StatusCode,
        body: String,
    },

    /// Success status but no usable text in the expected field.
    #[error("{provider} returned an empty response")]
    Empty { provider: &'static str },
}
