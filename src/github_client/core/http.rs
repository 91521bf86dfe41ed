use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::github_client::helpers::USER_AGENT;
use crate::types::PollerError;

/// Authenticated JSON client for the GitHub REST API.
#[derive(Clone)]
pub struct HttpClient {
    http: Client,
    base_url: String,
}

impl HttpClient {
    pub fn new(base_url: &str, token: &str, timeout: Duration) -> Result<Self, PollerError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|err| PollerError::Config(format!("Invalid token: {err}")))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub async fn get_json<T>(&self, path: &str) -> Result<T, PollerError>
    where
        T: DeserializeOwned,
    {
        self.get_json_with_query(path, &()).await
    }

    pub async fn get_json_with_query<T, Q>(&self, path: &str, query: &Q) -> Result<T, PollerError>
    where
        T: DeserializeOwned,
        Q: Serialize + ?Sized,
    {
        let url = format!("{}/{}", self.base_url, path.trim_start_matches('/'));
        let response = self.http.get(url).query(query).send().await?;

        if !response.status().is_success() {
            return Err(PollerError::GitHub(format!(
                "{} returned {}",
                path,
                response.status()
            )));
        }

        Ok(response.json::<T>().await?)
    }
}
