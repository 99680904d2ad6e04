//! Scripted stand-in for the YouTube Data API used by the unit and route tests.

use crate::error::ScanError;
use crate::services::youtube_api::{ApiResponse, ApiTransport, YoutubeApi};
use serde_json::{json, Value};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};

pub const TEST_BASE_URL: &str = "https://youtube.test/v3";

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub url: String,
    pub params: Vec<(String, String)>,
}

impl RecordedCall {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn resource(&self) -> &str {
        self.url.rsplit('/').next().unwrap_or_default()
    }
}

/// Search responses are scripted per keyword (unknown keywords get an empty `items` list).
/// Statistics endpoints answer only for the IDs present in `video_views` / `channel_subscribers`.
#[derive(Default)]
pub struct FakeYoutube {
    pub searches: HashMap<String, ApiResponse>,
    pub video_views: HashMap<String, Value>,
    pub channel_subscribers: HashMap<String, Value>,
    pub video_stats_override: Option<ApiResponse>,
    pub channel_stats_override: Option<ApiResponse>,
    pub malformed_keywords: HashSet<String>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl FakeYoutube {
    pub fn api(self: &Arc<Self>) -> YoutubeApi {
        YoutubeApi::new(
            self.clone(),
            "test-key".to_string(),
            TEST_BASE_URL.to_string(),
        )
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    pub fn with_search(mut self, keyword: &str, items: Vec<Value>) -> Self {
        self.searches.insert(
            keyword.to_string(),
            ApiResponse {
                status: 200,
                body: json!({ "items": items }),
            },
        );
        self
    }

    pub fn with_failed_search(mut self, keyword: &str, status: u16, body: Value) -> Self {
        self.searches
            .insert(keyword.to_string(), ApiResponse { status, body });
        self
    }

    pub fn with_views(mut self, video_id: &str, views: Value) -> Self {
        self.video_views.insert(video_id.to_string(), views);
        self
    }

    pub fn with_subscribers(mut self, channel_id: &str, subscribers: Value) -> Self {
        self.channel_subscribers
            .insert(channel_id.to_string(), subscribers);
        self
    }

    fn statistics(ids: &str, known: &HashMap<String, Value>, field: &str) -> ApiResponse {
        let items: Vec<Value> = ids
            .split(',')
            .filter_map(|id| known.get(id).map(|count| (id, count)))
            .map(|(id, count)| {
                let statistics = if count.is_null() {
                    json!({})
                } else {
                    json!({ field: count })
                };
                json!({ "kind": "youtube#statistics", "id": id, "statistics": statistics })
            })
            .collect();
        ApiResponse {
            status: 200,
            body: json!({ "items": items }),
        }
    }
}

#[rocket::async_trait]
impl ApiTransport for FakeYoutube {
    async fn get(&self, url: &str, params: &[(&str, String)]) -> Result<ApiResponse, ScanError> {
        let call = RecordedCall {
            url: url.to_string(),
            params: params
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
        };
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call.clone());
        }

        let ids = call.param("id").unwrap_or_default();
        match call.resource() {
            "search" => {
                let keyword = call.param("q").unwrap_or_default();
                if self.malformed_keywords.contains(keyword) {
                    let source = serde_json::from_str::<Value>("{\"items\": [")
                        .expect_err("truncated JSON must not parse");
                    return Err(ScanError::Json {
                        url: url.to_string(),
                        source,
                    });
                }
                Ok(self.searches.get(keyword).cloned().unwrap_or(ApiResponse {
                    status: 200,
                    body: json!({ "items": [] }),
                }))
            }
            "videos" => Ok(self
                .video_stats_override
                .clone()
                .unwrap_or_else(|| Self::statistics(ids, &self.video_views, "viewCount"))),
            "channels" => Ok(self.channel_stats_override.clone().unwrap_or_else(|| {
                Self::statistics(ids, &self.channel_subscribers, "subscriberCount")
            })),
            other => Ok(ApiResponse {
                status: 404,
                body: json!({ "error": format!("unknown resource {other}") }),
            }),
        }
    }
}

pub fn search_item(video_id: &str, channel_id: &str, title: &str, description: Option<&str>) -> Value {
    let mut snippet = json!({
        "publishedAt": "2024-03-12T08:00:00Z",
        "channelId": channel_id,
        "title": title,
        "channelTitle": format!("{channel_id} channel"),
    });
    if let Some(description) = description {
        snippet["description"] = json!(description);
    }
    json!({
        "kind": "youtube#searchResult",
        "id": { "kind": "youtube#video", "videoId": video_id },
        "snippet": snippet,
    })
}
