use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use url::Url;

use aniview_model::{AnimeDetail, DetailResponse, SearchRequest, SearchResponse};

/// Failure at the transport boundary.
///
/// Rate limiting is its own variant so callers can branch on it without
/// ever inspecting response prose.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("rate limited by the API")]
    RateLimited,

    #[error("request failed with status {0}")]
    Status(StatusCode),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),
}

/// HTTP client for the Jikan API.
#[derive(Debug, Clone)]
pub struct JikanClient {
    client: Client,
    base_url: String,
}

impl JikanClient {
    pub fn new(base_url: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to create HTTP client");

        Self { client, base_url }
    }

    /// Build the search URL for a request.
    ///
    /// Split out from [`search`](Self::search) so the exact serialization,
    /// percent-encoding included, can be asserted without a network.
    pub fn search_url(&self, request: &SearchRequest) -> Result<Url, ApiError> {
        let mut url = Url::parse(&format!("{}/anime", self.base_url))?;
        url.query_pairs_mut().extend_pairs(request.to_params());
        Ok(url)
    }

    /// `GET /anime` with the request's criteria and page.
    pub async fn search(
        &self,
        request: &SearchRequest,
    ) -> Result<SearchResponse, ApiError> {
        let url = self.search_url(request)?;
        log::debug!("GET {url}");
        let response = check_status(self.client.get(url).send().await?)?;
        Ok(response.json().await?)
    }

    /// `GET /anime/{id}/full` for the detail screen.
    pub async fn detail(&self, id: u32) -> Result<AnimeDetail, ApiError> {
        let url = Url::parse(&format!("{}/anime/{id}/full", self.base_url))?;
        log::debug!("GET {url}");
        let response = check_status(self.client.get(url).send().await?)?;
        let envelope: DetailResponse = response.json().await?;
        Ok(envelope.data)
    }

    /// GET raw bytes from an absolute URL (poster images).
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response = check_status(self.client.get(url).send().await?)?;
        Ok(response.bytes().await?.to_vec())
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    match status_error(response.status()) {
        None => Ok(response),
        Some(error) => Err(error),
    }
}

/// Classify a response status. This is the only place a rate-limit
/// condition is detected.
fn status_error(status: StatusCode) -> Option<ApiError> {
    if status.is_success() {
        None
    } else if status == StatusCode::TOO_MANY_REQUESTS {
        Some(ApiError::RateLimited)
    } else {
        Some(ApiError::Status(status))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aniview_model::{SearchCriteria, SearchRequest};

    fn client() -> JikanClient {
        JikanClient::new("https://api.jikan.moe/v4".to_string())
    }

    #[test]
    fn search_url_percent_encodes_free_text() {
        let criteria = SearchCriteria {
            text: "cowboy bebop & co".to_string(),
            ..SearchCriteria::default()
        };
        let url = client()
            .search_url(&SearchRequest::new(criteria, 1))
            .unwrap();
        let query = url.query().unwrap();
        assert!(query.contains("q=cowboy+bebop+%26+co"), "query: {query}");
        assert!(query.contains("limit=20"));
    }

    #[test]
    fn search_url_is_deterministic() {
        let request = SearchRequest::new(SearchCriteria::default(), 2);
        assert_eq!(
            client().search_url(&request).unwrap(),
            client().search_url(&request).unwrap()
        );
    }

    #[test]
    fn status_classification() {
        assert!(status_error(StatusCode::OK).is_none());
        assert!(matches!(
            status_error(StatusCode::TOO_MANY_REQUESTS),
            Some(ApiError::RateLimited)
        ));
        assert!(matches!(
            status_error(StatusCode::INTERNAL_SERVER_ERROR),
            Some(ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR))
        ));
        assert!(matches!(
            status_error(StatusCode::NOT_FOUND),
            Some(ApiError::Status(StatusCode::NOT_FOUND))
        ));
    }
}
