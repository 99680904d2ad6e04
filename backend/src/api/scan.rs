use crate::models::{ErrorResponse, ScanReport, ScanResponse};
use crate::services::render::{markdown_report, notices};
use crate::services::scanner::run_scan;
use crate::utils::{published_after, validate_lookback};
use crate::AppState;
use log::info;
use rocket::http::ContentType;
use rocket::serde::json::Json;
use rocket::{get, State};

struct ScanRun {
    days: u32,
    published_after: String,
    report: ScanReport,
}

async fn execute(days: Option<u32>, state: &AppState) -> Result<ScanRun, ErrorResponse> {
    let config = &state.scan_config;
    let days = validate_lookback(days.unwrap_or(config.lookback.default), &config.lookback)
        .map_err(|e| ErrorResponse {
            error: "Invalid lookback".to_string(),
            message: e.to_string(),
        })?;

    let now = chrono::Utc::now();
    info!(
        "Scanning {} keywords for videos from the last {days} days",
        config.keywords.len()
    );
    let report = run_scan(&state.api, config, days, now).await;

    Ok(ScanRun {
        days,
        published_after: published_after(days, now),
        report,
    })
}

#[get("/?<days>")]
pub async fn scan(days: Option<u32>, state: &State<AppState>) -> Result<Json<ScanResponse>, ErrorResponse> {
    let run = execute(days, state).await?;
    let notices = notices(&run.report);

    Ok(Json(ScanResponse {
        days: run.days,
        published_after: run.published_after,
        searched: run.report.searched,
        notices,
        entries: run.report.entries,
        warnings: run.report.warnings,
        error: run.report.error,
    }))
}

#[get("/markdown?<days>")]
pub async fn scan_markdown(
    days: Option<u32>,
    state: &State<AppState>,
) -> Result<(ContentType, String), ErrorResponse> {
    let run = execute(days, state).await?;
    Ok((
        ContentType::new("text", "markdown"),
        markdown_report(&run.report),
    ))
}
