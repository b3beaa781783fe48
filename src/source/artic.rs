//! Art Institute of Chicago API クライアント

use super::PageSource;
use crate::config::Config;
use crate::error::FetchError;
use artwork_browser_common::{parse_artwork_response, Artwork, PageData, ARTWORK_FIELDS};
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, instrument, warn};

pub struct ArticClient {
    base_url: String,
    client: reqwest::Client,
}

impl ArticClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration, user_agent: &str) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self::with_client(base_url, client))
    }

    /// 共有のHTTPクライアントで作成
    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, client }
    }

    pub fn from_config(config: &Config) -> Result<Self, FetchError> {
        Self::new(
            config.api_base_url(),
            Duration::from_secs(config.timeout_seconds),
            &config.user_agent,
        )
    }

    pub fn artworks_url(&self) -> String {
        format!("{}/artworks", self.base_url)
    }
}

#[async_trait]
impl PageSource for ArticClient {
    #[instrument(skip(self))]
    async fn fetch_page(&self, page: u32, page_size: u32) -> Result<PageData<Artwork>, FetchError> {
        if page == 0 || page_size == 0 {
            return Err(FetchError::InvalidRequest { page, page_size });
        }

        let page_param = page.to_string();
        let limit_param = page_size.to_string();
        let response = self
            .client
            .get(self.artworks_url())
            .query(&[
                ("page", page_param.as_str()),
                ("limit", limit_param.as_str()),
                ("fields", ARTWORK_FIELDS),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "artworks request failed");
            return Err(FetchError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let data = parse_artwork_response(&body)?;
        debug!(rows = data.items.len(), total = data.pagination.total, "artworks page fetched");
        Ok(data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artworks_url_trims_trailing_slash() {
        let client = ArticClient::with_client("https://api.artic.edu/api/v1/", reqwest::Client::new());
        assert_eq!(client.artworks_url(), "https://api.artic.edu/api/v1/artworks");
    }

    #[tokio::test]
    async fn test_rejects_page_zero_without_request() {
        let client = ArticClient::with_client("http://127.0.0.1:9", reqwest::Client::new());
        let result = client.fetch_page(0, 12).await;
        assert!(matches!(result, Err(FetchError::InvalidRequest { page: 0, page_size: 12 })));
    }
}
