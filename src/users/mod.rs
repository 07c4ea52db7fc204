//! Users resource of the jsonplaceholder API.
//!
//! Every call is one GET against `{base}/users` or `{base}/users/{id}`. There
//! is no retry, no caching and no validation of ids: whatever integer the
//! caller passes is rendered into the path as-is.

mod error;
mod types;

pub use self::error::Error;
pub use self::types::User;

use crate::APP_USER_AGENT;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, error, instrument};
use url::Url;

/// Root of the public API the client talks to by default.
pub const BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Clone)]
pub struct UserClient {
    client: Client,
    base_url: String,
}

impl UserClient {
    /// Create a client rooted at `base_url`.
    ///
    /// # Errors
    /// Returns an error if `base_url` cannot be parsed, is not http(s), carries
    /// a query or fragment, or the HTTP client cannot be built.
    pub fn new(base_url: impl AsRef<str>) -> Result<Self, Error> {
        let raw = base_url.as_ref().trim();

        let url = Url::parse(raw)?;

        match url.scheme() {
            "http" | "https" => {}
            scheme => return Err(Error::Scheme(scheme.to_string())),
        }

        // Endpoints are appended to the base as text, so anything after the path
        // would swallow them.
        if url.query().is_some() || url.fragment().is_some() {
            return Err(Error::QueryOrFragment(raw.to_string()));
        }

        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .build()
            .map_err(Error::Client)?;

        Ok(Self {
            client,
            base_url: raw.trim_end_matches('/').to_string(),
        })
    }

    /// Client for [`BASE_URL`].
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn jsonplaceholder() -> Result<Self, Error> {
        Self::new(BASE_URL)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint_url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// GET `url` and decode the body, failing on transport errors, non-2xx
    /// statuses and bodies that do not decode into `T`.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, reqwest::Error> {
        let response = self.client.get(url).send().await?;

        debug!("GET {} - {}", url, response.status());

        response.error_for_status()?.json::<T>().await
    }

    /// Fetch every user.
    ///
    /// # Errors
    /// Returns [`Error::FetchUsers`] on any failure.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn get_users(&self) -> Result<Vec<User>, Error> {
        let url = self.endpoint_url("/users");

        self.get_json(&url).await.map_err(|e| {
            error!("Error fetching users from {}: {}", url, e);

            Error::FetchUsers
        })
    }

    /// Fetch the user with `id`.
    ///
    /// # Errors
    /// Returns [`Error::FetchUser`] with the requested id on any failure.
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    pub async fn get_user_by_id(&self, id: i64) -> Result<User, Error> {
        let url = self.endpoint_url(&format!("/users/{id}"));

        self.get_json(&url).await.map_err(|e| {
            error!("Error fetching user {} from {}: {}", id, url, e);

            Error::FetchUser(id)
        })
    }
}
