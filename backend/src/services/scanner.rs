use crate::error::ScanError;
use crate::models::{AggregatedEntry, ScanConfig, ScanReport, ScanWarning, SearchHit, WarningKind};
use crate::services::youtube_api::{ApiResponse, YoutubeApi};
use crate::utils::{
    parse_count, published_after, truncate_chars, validate_lookback, watch_url,
    DESCRIPTION_MAX_CHARS, NO_DESCRIPTION, NO_TITLE,
};
use chrono::{DateTime, Utc};
use log::{error, info, warn};
use serde_json::Value;
use std::collections::HashMap;

pub const DEFAULT_KEYWORDS: [&str; 30] = [
    "Trending Stories",
    "Interesting Stories",
    "Fictional Stories",
    "Daily Stories",
    "New Stories",
    "Unique Stories",
    "Hidden Stories",
    "Untold Tales",
    "Mysterious Stories",
    "Untold Narratives",
    "Inspirational Stories",
    "Life Stories",
    "Millionaire Stories",
    "Secrets Revealed",
    "Fascinating Stories",
    "Hidden Truths",
    "Behind the Scenes",
    "Obscure Stories",
    "Mystery Channel",
    "Human Experiences",
    "Trump Stories",
    "Trump Story",
    "Barron Trump",
    "Barron Trump Stories",
    "Shocking Courtroom Battle",
    "Shocking Revelations",
    "Entertainment Industry Scandal",
    "Late-Night TV Controversy",
    "Shocking Legal Outcomes",
    "Media Accountability",
];

/// What one keyword contributed to the run.
#[derive(Debug, Default)]
pub struct KeywordOutcome {
    pub entries: Vec<AggregatedEntry>,
    pub warnings: Vec<ScanWarning>,
}

impl KeywordOutcome {
    fn skipped(keyword: &str, kind: WarningKind, message: String) -> Self {
        KeywordOutcome {
            entries: Vec::new(),
            warnings: vec![ScanWarning {
                keyword: keyword.to_string(),
                kind,
                message,
            }],
        }
    }
}

fn non_empty_str(value: &Value) -> Option<&str> {
    value.as_str().filter(|s| !s.trim().is_empty())
}

pub fn parse_search_items(body: &Value) -> Vec<SearchHit> {
    let Some(items) = body["items"].as_array() else {
        return Vec::new();
    };

    items
        .iter()
        .map(|item| {
            let snippet = &item["snippet"];
            SearchHit {
                video_id: non_empty_str(&item["id"]["videoId"]).map(String::from),
                channel_id: non_empty_str(&snippet["channelId"]).map(String::from),
                title: non_empty_str(&snippet["title"])
                    .unwrap_or(NO_TITLE)
                    .to_string(),
                description: truncate_chars(
                    non_empty_str(&snippet["description"]).unwrap_or(NO_DESCRIPTION),
                    DESCRIPTION_MAX_CHARS,
                ),
            }
        })
        .collect()
}

/// Maps each returned `id` to `statistics.<field>`.
fn parse_statistics(body: &Value, field: &'static str) -> Result<HashMap<String, u64>, ScanError> {
    let mut counts = HashMap::new();
    if let Some(items) = body["items"].as_array() {
        for item in items {
            if let Some(id) = non_empty_str(&item["id"]) {
                counts.insert(id.to_string(), parse_count(&item["statistics"][field], field)?);
            }
        }
    }
    Ok(counts)
}

pub fn parse_video_statistics(body: &Value) -> Result<HashMap<String, u64>, ScanError> {
    parse_statistics(body, "viewCount")
}

pub fn parse_channel_statistics(body: &Value) -> Result<HashMap<String, u64>, ScanError> {
    parse_statistics(body, "subscriberCount")
}

fn error_body(response: &ApiResponse) -> String {
    match &response.body {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// search -> video statistics -> channel statistics for a single keyword.
pub async fn scan_keyword(
    api: &YoutubeApi,
    config: &ScanConfig,
    keyword: &str,
    published_after: &str,
) -> Result<KeywordOutcome, ScanError> {
    let search = api
        .search_videos(keyword, published_after, config.max_results_per_keyword)
        .await?;

    if !search.is_success() {
        return Ok(KeywordOutcome::skipped(
            keyword,
            WarningKind::SearchFailed,
            format!(
                "Failed to fetch results for {keyword}. API Error ({}): {}",
                search.status,
                error_body(&search)
            ),
        ));
    }

    if !search.has_items() {
        return Ok(KeywordOutcome::skipped(
            keyword,
            WarningKind::NoVideos,
            format!("No videos found for: {keyword}"),
        ));
    }

    let hits = parse_search_items(&search.body);
    let video_ids: Vec<String> = hits.iter().filter_map(|h| h.video_id.clone()).collect();
    let mut channel_ids: Vec<String> = Vec::new();
    for channel_id in hits.iter().filter_map(|h| h.channel_id.as_ref()) {
        if !channel_ids.contains(channel_id) {
            channel_ids.push(channel_id.clone());
        }
    }

    if video_ids.is_empty() || channel_ids.is_empty() {
        return Ok(KeywordOutcome::skipped(
            keyword,
            WarningKind::NoValidIds,
            format!("No valid video/channel data for: {keyword}"),
        ));
    }

    let video_stats = api.video_statistics(&video_ids).await?;
    if !video_stats.is_success() || !video_stats.has_items() {
        return Ok(KeywordOutcome::skipped(
            keyword,
            WarningKind::VideoStatsUnavailable,
            format!("Failed to fetch video statistics for {keyword}"),
        ));
    }
    let view_counts = parse_video_statistics(&video_stats.body)?;

    let channel_stats = api.channel_statistics(&channel_ids).await?;
    if !channel_stats.is_success() || !channel_stats.has_items() {
        return Ok(KeywordOutcome::skipped(
            keyword,
            WarningKind::ChannelStatsUnavailable,
            format!("Failed to fetch channel statistics for {keyword}"),
        ));
    }
    let subscriber_counts = parse_channel_statistics(&channel_stats.body)?;

    let mut outcome = KeywordOutcome::default();
    for hit in hits {
        let (Some(video_id), Some(channel_id)) = (hit.video_id, hit.channel_id) else {
            outcome.warnings.push(ScanWarning {
                keyword: keyword.to_string(),
                kind: WarningKind::IdMissing,
                message: format!(
                    "Search result \"{}\" has no video/channel id ({keyword})",
                    hit.title
                ),
            });
            continue;
        };

        let (Some(&views), Some(&subscribers)) =
            (view_counts.get(&video_id), subscriber_counts.get(&channel_id))
        else {
            outcome.warnings.push(ScanWarning {
                keyword: keyword.to_string(),
                kind: WarningKind::StatsMissing,
                message: format!("Statistics unavailable for video {video_id} ({keyword})"),
            });
            continue;
        };

        if subscribers < config.subscriber_threshold {
            outcome.entries.push(AggregatedEntry {
                title: hit.title,
                description: hit.description,
                url: watch_url(&video_id),
                views,
                subscribers,
            });
        }
    }

    Ok(outcome)
}

/// Runs every configured keyword in order. The first fatal error ends the run; the
/// report then keeps the warnings raised so far but no entries.
pub async fn run_scan(
    api: &YoutubeApi,
    config: &ScanConfig,
    days: u32,
    now: DateTime<Utc>,
) -> ScanReport {
    let mut report = ScanReport::default();

    if let Err(e) = validate_lookback(days, &config.lookback) {
        report.error = Some(e.to_string());
        return report;
    }
    let start = published_after(days, now);

    for keyword in &config.keywords {
        info!("Searching for: {keyword}");
        report.searched.push(keyword.clone());

        match scan_keyword(api, config, keyword, &start).await {
            Ok(outcome) => {
                for warning in &outcome.warnings {
                    warn!("{}", warning.message);
                }
                report.warnings.extend(outcome.warnings);
                report.entries.extend(outcome.entries);
            }
            Err(e) => {
                error!("Scan aborted at keyword {keyword}: {e}");
                report.entries.clear();
                report.error = Some(e.to_string());
                return report;
            }
        }
    }

    info!(
        "Scan finished: {} trending videos, {} warnings",
        report.entries.len(),
        report.warnings.len()
    );
    report
}
