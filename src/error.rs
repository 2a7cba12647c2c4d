use thiserror::Error;

/// Failure taxonomy for one relayed order. Every variant collapses to the
/// same generic wire reply; the variants keep the server-side log specific.
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("malformed order body: {0}")]
    MalformedInput(#[source] serde_json::Error),
    #[error("order engine unreachable: {0}")]
    UpstreamUnreachable(#[source] reqwest::Error),
    #[error("order engine sent an unreadable reply: {0}")]
    UpstreamBadResponse(#[source] reqwest::Error),
}
