use std::time::Duration;

use crate::decode::decode_results;
use crate::{FailureKind, SearchError, SearchResults};

#[derive(Debug, Clone)]
pub struct SearchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn search(&self, url: &str) -> Result<SearchResults, SearchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    settings: SearchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: SearchSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, SearchError> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| SearchError::new(FailureKind::Network, err.to_string()))
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn search(&self, url: &str) -> Result<SearchResults, SearchError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| SearchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = self.build_client()?;

        let response = client.get(parsed).send().await.map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SearchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        decode_results(&body).map_err(|err| SearchError::new(FailureKind::Decode, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SearchError {
    if err.is_timeout() {
        return SearchError::new(FailureKind::Timeout, err.to_string());
    }
    SearchError::new(FailureKind::Network, err.to_string())
}
