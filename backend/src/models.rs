use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::Responder;
use rocket::serde::{Deserialize, Serialize};
use rocket::{response, Response};
use std::io::Cursor;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LookbackBounds {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    pub keywords: Vec<String>,
    pub subscriber_threshold: u64,
    pub max_results_per_keyword: u32,
    pub lookback: LookbackBounds,
}

/// One item of the search endpoint's `items` array. Either ID may be absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub video_id: Option<String>,
    pub channel_id: Option<String>,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedEntry {
    pub title: String,
    pub description: String,
    pub url: String,
    pub views: u64,
    pub subscribers: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    SearchFailed,
    NoVideos,
    NoValidIds,
    VideoStatsUnavailable,
    ChannelStatsUnavailable,
    StatsMissing,
    IdMissing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanWarning {
    pub keyword: String,
    pub kind: WarningKind,
    pub message: String,
}

/// Result of one fetch run. `error` is set when the run was aborted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Keywords started so far, in order. The last one is where an aborted run stopped.
    pub searched: Vec<String>,
    pub entries: Vec<AggregatedEntry>,
    pub warnings: Vec<ScanWarning>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ScanResponse {
    pub days: u32,
    pub published_after: String,
    pub searched: Vec<String>,
    pub notices: Vec<Notice>,
    pub entries: Vec<AggregatedEntry>,
    pub warnings: Vec<ScanWarning>,
    pub error: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl<'r> Responder<'r, 'static> for ErrorResponse {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let json = serde_json::to_string(&self).map_err(|_| Status::InternalServerError)?;
        Response::build()
            .status(Status::BadRequest)
            .header(ContentType::JSON)
            .sized_body(json.len(), Cursor::new(json))
            .ok()
    }
}
