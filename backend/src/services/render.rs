use crate::models::{AggregatedEntry, Notice, NoticeLevel, ScanReport};
use crate::utils::format_number;

pub const NO_RESULTS_MESSAGE: &str = "No trending videos found for small channels.";
pub const ENTRY_DIVIDER: &str = "---";

/// Per-keyword warnings in the order they were raised, followed by the run summary.
pub fn notices(report: &ScanReport) -> Vec<Notice> {
    let mut notices: Vec<Notice> = report
        .warnings
        .iter()
        .map(|w| Notice {
            level: NoticeLevel::Warning,
            message: w.message.clone(),
        })
        .collect();

    let summary = match (&report.error, report.entries.len()) {
        (Some(error), _) => Notice {
            level: NoticeLevel::Error,
            message: format!("Error: {error}"),
        },
        (None, 0) => Notice {
            level: NoticeLevel::Warning,
            message: NO_RESULTS_MESSAGE.to_string(),
        },
        (None, count) => Notice {
            level: NoticeLevel::Success,
            message: format!("Found {count} trending videos!"),
        },
    };
    notices.push(summary);
    notices
}

pub fn entry_block(entry: &AggregatedEntry) -> String {
    format!(
        "**Title:** {}  \n**Description:** {}  \n**URL:** [Watch Video]({})  \n**Views:** {}  \n**Subscribers:** {}",
        entry.title,
        entry.description,
        entry.url,
        format_number(entry.views),
        format_number(entry.subscribers),
    )
}

fn notice_line(notice: &Notice) -> String {
    let label = match notice.level {
        NoticeLevel::Success => "Success",
        NoticeLevel::Warning => "Warning",
        NoticeLevel::Error => "Error",
    };
    format!("> **{label}:** {}", notice.message)
}

fn progress_lines(searched: &[String]) -> String {
    searched
        .iter()
        .map(|keyword| format!("- Searching for: **{keyword}**"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Markdown page for a whole run: searched keywords, then notices, then one block per entry.
pub fn markdown_report(report: &ScanReport) -> String {
    let mut sections: Vec<String> = Vec::new();
    if !report.searched.is_empty() {
        sections.push(progress_lines(&report.searched));
    }
    sections.extend(notices(report).iter().map(notice_line));
    if report.error.is_none() {
        for entry in &report.entries {
            sections.push(entry_block(entry));
            sections.push(ENTRY_DIVIDER.to_string());
        }
    }
    let mut page = sections.join("\n\n");
    page.push('\n');
    page
}
