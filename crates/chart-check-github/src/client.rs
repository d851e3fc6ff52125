use std::time::Duration;

use chart_check_core::{ChangedFileRecord, RepositorySlug};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Deserialize;
use tracing::debug;
use url::Url;

use crate::{GitHubError, Result};

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const API_VERSION_HEADER: &str = "x-github-api-version";
const API_VERSION: &str = "2022-11-28";
const MEDIA_TYPE: &str = "application/vnd.github+json";

/// Minimal GitHub REST client for reading pull request metadata.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    api_url: Url,
    authorization: HeaderValue,
}

pub struct ClientBuilder {
    token: String,
    api_url: String,
    timeout: Option<Duration>,
    user_agent: String,
}

impl ClientBuilder {
    #[must_use]
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// # Errors
    ///
    /// Returns [`GitHubError::EmptyToken`] for a blank token,
    /// [`GitHubError::InvalidToken`] if it cannot be sent as a header,
    /// [`GitHubError::InvalidUrl`] if the API URL does not parse, and
    /// [`GitHubError::ClientBuild`] if the HTTP client cannot be constructed.
    pub fn build(self) -> Result<Client> {
        let token = self.token.trim();
        if token.is_empty() {
            return Err(GitHubError::EmptyToken);
        }
        let mut authorization = HeaderValue::from_str(&format!("Bearer {token}"))
            .map_err(|_| GitHubError::InvalidToken)?;
        authorization.set_sensitive(true);

        let trimmed = self.api_url.trim().trim_end_matches('/');
        let api_url = Url::parse(trimmed).map_err(|source| GitHubError::InvalidUrl {
            url: self.api_url.clone(),
            source,
        })?;

        let mut builder = reqwest::Client::builder().user_agent(self.user_agent);
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(GitHubError::ClientBuild)?;

        Ok(Client {
            http,
            api_url,
            authorization,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: Option<String>,
}

impl Client {
    #[must_use]
    pub fn builder(token: impl Into<String>) -> ClientBuilder {
        ClientBuilder {
            token: token.into(),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: None,
            user_agent: concat!("chart-check/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    fn pull_request_files_url(&self, repository: &RepositorySlug, pull_number: u64) -> String {
        format!(
            "{}/repos/{}/{}/pulls/{pull_number}/files",
            self.api_url.as_str().trim_end_matches('/'),
            repository.owner(),
            repository.name(),
        )
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(MEDIA_TYPE));
        headers.insert(API_VERSION_HEADER, HeaderValue::from_static(API_VERSION));
        headers.insert(AUTHORIZATION, self.authorization.clone());
        headers
    }

    /// Fetches one page of the files changed by a pull request.
    ///
    /// An empty page means the listing is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`GitHubError::Request`] on transport failure,
    /// [`GitHubError::Status`] for a non-success response, and
    /// [`GitHubError::Decode`] if the body is not a file listing.
    pub async fn list_pull_request_files_page(
        &self,
        repository: &RepositorySlug,
        pull_number: u64,
        per_page: u32,
        page: u32,
    ) -> Result<Vec<ChangedFileRecord>> {
        let url = self.pull_request_files_url(repository, pull_number);

        let response = self
            .http
            .get(&url)
            .headers(self.headers())
            .query(&[("per_page", per_page), ("page", page)])
            .send()
            .await
            .map_err(|source| GitHubError::Request {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ApiErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message);
            return Err(GitHubError::Status {
                url,
                status: status.as_u16(),
                message,
            });
        }

        let records = response
            .json::<Vec<ChangedFileRecord>>()
            .await
            .map_err(|source| GitHubError::Decode {
                url: url.clone(),
                source,
            })?;

        debug!(%url, page, count = records.len(), "received pull request files page");
        Ok(records)
    }
}
