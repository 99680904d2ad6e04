use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LookbackBounds {
    pub min: u32,
    pub max: u32,
    pub default: u32,
}

impl Default for LookbackBounds {
    fn default() -> Self {
        Self {
            min: 1,
            max: 30,
            default: 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    pub keywords: Vec<String>,
    pub subscriber_threshold: u64,
    pub max_results_per_keyword: u32,
    pub lookback: LookbackBounds,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregatedEntry {
    pub title: String,
    pub description: String,
    pub url: String,
    pub views: u64,
    pub subscribers: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanWarning {
    pub keyword: String,
    pub kind: String,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanResponse {
    pub days: u32,
    pub published_after: String,
    #[serde(default)]
    pub searched: Vec<String>,
    pub notices: Vec<Notice>,
    pub entries: Vec<AggregatedEntry>,
    pub warnings: Vec<ScanWarning>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
