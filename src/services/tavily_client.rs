use reqwest::Client;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{configuration::SearchSettings, error::SearchError};

pub struct TavilyClient {
    client: Client,
    api_key: String,
    url: Url,
    max_results: u32,
}

#[derive(Serialize)]
struct SearchRequest<'a> {
    query: &'a str,
    max_results: u32,
}

#[derive(Deserialize, Debug, Default)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResultRecord>,
}

#[derive(Deserialize, Debug)]
pub struct SearchResultRecord {
    pub url: Option<String>,
}

impl SearchResponse {
    pub fn urls(&self) -> impl Iterator<Item = &str> {
        self.results.iter().filter_map(|result| result.url.as_deref())
    }
}

impl TavilyClient {
    pub fn new(api_key: String, settings: &SearchSettings) -> Result<Self, SearchError> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(SearchError::Client)?;

        Ok(TavilyClient {
            client,
            api_key,
            url: settings.endpoint()?,
            max_results: settings.max_results,
        })
    }

    pub async fn search(&self, query: &str) -> Result<SearchResponse, SearchError> {
        log::info!("Posting search query to {}", self.url);

        let res = self
            .client
            .post(self.url.clone())
            .bearer_auth(&self.api_key)
            .json(&SearchRequest {
                query,
                max_results: self.max_results,
            })
            .send()
            .await
            .map_err(SearchError::Request)?;

        let status = res.status();
        let body = res.text().await.map_err(SearchError::Body)?;

        if !status.is_success() {
            log::error!("Search API responded with {}", status);
            return Err(SearchError::Status { status, body });
        }

        let response: SearchResponse = serde_json::from_str(&body)?;
        log::info!("Search API returned {} results", response.results.len());

        Ok(response)
    }
}
