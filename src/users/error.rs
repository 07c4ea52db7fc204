use thiserror::Error;

/// Errors returned by [`super::UserClient`].
///
/// `FetchUsers` and `FetchUser` are the only failures the read operations
/// produce. They carry no source: the transport, status or decoding error is
/// logged and then dropped.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to fetch users")]
    FetchUsers,
    #[error("Failed to fetch user with id {0}")]
    FetchUser(i64),
    #[error("invalid base url: {0}")]
    BaseUrl(#[from] url::ParseError),
    #[error("unsupported base url scheme: {0}")]
    Scheme(String),
    #[error("base url must not carry a query or fragment: {0}")]
    QueryOrFragment(String),
    #[error("failed to build http client")]
    Client(#[source] reqwest::Error),
}
