use crate::error::ScanError;
use log::debug;
use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use url::Url;

/// Status code and decoded body of one GET request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Value,
}

impl ApiResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// True when the body carries a non-empty `items` array.
    pub fn has_items(&self) -> bool {
        self.body["items"]
            .as_array()
            .map(|items| !items.is_empty())
            .unwrap_or(false)
    }
}

#[rocket::async_trait]
pub trait ApiTransport: Send + Sync {
    async fn get(&self, url: &str, params: &[(&str, String)]) -> Result<ApiResponse, ScanError>;
}

pub struct ReqwestTransport {
    client: Client,
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReqwestTransport {
    pub fn new() -> Self {
        ReqwestTransport {
            client: Client::new(),
        }
    }
}

#[rocket::async_trait]
impl ApiTransport for ReqwestTransport {
    async fn get(&self, url: &str, params: &[(&str, String)]) -> Result<ApiResponse, ScanError> {
        let request_url = Url::parse_with_params(url, params.iter().map(|(k, v)| (*k, v.as_str())))
            .map_err(|source| ScanError::Url {
                url: url.to_string(),
                source,
            })?;

        // the key is a query parameter, so only the bare endpoint ends up in errors
        let response = self
            .client
            .get(request_url)
            .send()
            .await
            .map_err(|source| ScanError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|source| ScanError::Transport {
                url: url.to_string(),
                source,
            })?;

        let body = match serde_json::from_str::<Value>(&text) {
            Ok(body) => body,
            // keep non-JSON error pages so the warning can quote them
            Err(_) if !status.is_success() => Value::String(text),
            Err(source) => {
                return Err(ScanError::Json {
                    url: url.to_string(),
                    source,
                })
            }
        };

        debug!("GET {url} -> {status}");
        Ok(ApiResponse {
            status: status.as_u16(),
            body,
        })
    }
}

/// YouTube Data API v3 endpoints used by the scan.
/// Documentation: https://developers.google.com/youtube/v3/docs
#[derive(Clone)]
pub struct YoutubeApi {
    transport: Arc<dyn ApiTransport>,
    api_key: String,
    base_url: String,
}

impl YoutubeApi {
    pub fn new(transport: Arc<dyn ApiTransport>, api_key: String, base_url: String) -> Self {
        YoutubeApi {
            transport,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn endpoint(&self, resource: &str) -> String {
        format!("{}/{}", self.base_url, resource)
    }

    /// Most viewed videos for `keyword` published after `published_after`.
    pub async fn search_videos(
        &self,
        keyword: &str,
        published_after: &str,
        max_results: u32,
    ) -> Result<ApiResponse, ScanError> {
        let params = [
            ("part", "snippet".to_string()),
            ("q", keyword.to_string()),
            ("type", "video".to_string()),
            ("order", "viewCount".to_string()),
            ("publishedAfter", published_after.to_string()),
            ("maxResults", max_results.to_string()),
            ("key", self.api_key.clone()),
        ];
        self.transport.get(&self.endpoint("search"), &params).await
    }

    pub async fn video_statistics(&self, video_ids: &[String]) -> Result<ApiResponse, ScanError> {
        self.statistics("videos", video_ids).await
    }

    pub async fn channel_statistics(
        &self,
        channel_ids: &[String],
    ) -> Result<ApiResponse, ScanError> {
        self.statistics("channels", channel_ids).await
    }

    async fn statistics(&self, resource: &str, ids: &[String]) -> Result<ApiResponse, ScanError> {
        let params = [
            ("part", "statistics".to_string()),
            ("id", ids.join(",")),
            ("key", self.api_key.clone()),
        ];
        self.transport.get(&self.endpoint(resource), &params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::testing::FakeYoutube;
    use serde_json::json;

    #[rocket::async_test]
    async fn search_sends_snippet_query_with_key() {
        let fake = Arc::new(FakeYoutube::default());
        let api = fake.api();

        api.search_videos("Untold Tales", "2024-03-10T12:30:45Z", 5)
            .await
            .unwrap();

        let calls = fake.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].url, "https://youtube.test/v3/search");
        assert_eq!(calls[0].param("part"), Some("snippet"));
        assert_eq!(calls[0].param("q"), Some("Untold Tales"));
        assert_eq!(calls[0].param("type"), Some("video"));
        assert_eq!(calls[0].param("order"), Some("viewCount"));
        assert_eq!(calls[0].param("publishedAfter"), Some("2024-03-10T12:30:45Z"));
        assert_eq!(calls[0].param("maxResults"), Some("5"));
        assert_eq!(calls[0].param("key"), Some("test-key"));
    }

    #[rocket::async_test]
    async fn statistics_join_ids_with_commas() {
        let fake = Arc::new(FakeYoutube::default());
        let api = fake.api();

        api.video_statistics(&["a".to_string(), "b".to_string()])
            .await
            .unwrap();
        api.channel_statistics(&["c1".to_string()]).await.unwrap();

        let calls = fake.calls();
        assert_eq!(calls[0].url, "https://youtube.test/v3/videos");
        assert_eq!(calls[0].param("part"), Some("statistics"));
        assert_eq!(calls[0].param("id"), Some("a,b"));
        assert_eq!(calls[1].url, "https://youtube.test/v3/channels");
        assert_eq!(calls[1].param("id"), Some("c1"));
        assert_eq!(calls[1].param("key"), Some("test-key"));
    }

    #[test]
    fn response_helpers() {
        let ok = ApiResponse {
            status: 200,
            body: json!({ "items": [{}] }),
        };
        assert!(ok.is_success());
        assert!(ok.has_items());

        let empty = ApiResponse {
            status: 200,
            body: json!({ "items": [] }),
        };
        assert!(!empty.has_items());

        let forbidden = ApiResponse {
            status: 403,
            body: json!({ "error": { "code": 403 } }),
        };
        assert!(!forbidden.is_success());
        assert!(!forbidden.has_items());
    }
}
