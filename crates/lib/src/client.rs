//! # Wikipedia Client
//!
//! Issues the single GET against the random summary endpoint and hands the
//! body to [`Page::from_body`]. No retries and no timeout beyond the HTTP
//! client's defaults.

use crate::constants::{API_URL_TEMPLATE, LANGUAGE_PLACEHOLDER, USER_AGENT};
use crate::errors::FetchError;
use crate::page::Page;
use reqwest::Client as ReqwestClient;
use tracing::{debug, info, warn};

/// Builds the request URL for `language`. The code is inserted verbatim.
pub fn random_summary_url(template: &str, language: &str) -> String {
    template.replace(LANGUAGE_PLACEHOLDER, language)
}

/// A client bound to one endpoint template.
#[derive(Clone, Debug)]
pub struct WikipediaClient {
    client: ReqwestClient,
    url_template: String,
}

impl WikipediaClient {
    /// Creates a client for the public Wikipedia REST API.
    pub fn new() -> Result<Self, FetchError> {
        Self::with_url_template(API_URL_TEMPLATE)
    }

    /// Creates a client for a custom endpoint. The template should contain
    /// `{language}`; without it every language maps to the same URL.
    pub fn with_url_template(url_template: impl Into<String>) -> Result<Self, FetchError> {
        let client = ReqwestClient::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            url_template: url_template.into(),
        })
    }

    pub fn url_template(&self) -> &str {
        &self.url_template
    }

    /// Fetches the summary of a random article from the `language` edition.
    pub async fn fetch_random_page(&self, language: &str) -> Result<Page, FetchError> {
        let url = random_summary_url(&self.url_template, language);
        info!("Fetching random page summary from {url}");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Request to {url} failed: {e}");
            FetchError::from(e)
        })?;
        debug!("Received {} from {url}", response.status());

        let response = response.error_for_status().map_err(|e| {
            warn!("Upstream rejected the request: {e}");
            FetchError::from(e)
        })?;
        let body = response.text().await?;

        Page::from_body(&body).inspect_err(|e| warn!("Discarding response from {url}: {e}"))
    }
}

/// Fetches a random page with a default [`WikipediaClient`].
pub async fn fetch_random_page(language: &str) -> Result<Page, FetchError> {
    WikipediaClient::new()?.fetch_random_page(language).await
}
