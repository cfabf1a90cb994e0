use crate::loader::FileFailure;
use crate::models::{LatencyMetric, ReportRecord, THROUGHPUT_DESCRIPTION, THROUGHPUT_NAME};
use crate::pipeline::TrendReport;
use crate::utils::{format_kbps, format_ms, format_rate, truncate_label};
use super::table::{render_markdown, render_text};

const LABEL_WIDTH: usize = 40;

const TREND_HEADERS: [&str; 9] = [
    "# Samples",
    "Label",
    "Throughput",
    "Average",
    "Median",
    "90% Line",
    "95% Line",
    "99% Line",
    "File",
];

const BANDWIDTH_HEADERS: [&str; 3] = ["# Samples", "Received KB/sec", "Sent KB/sec"];

fn number(value: f64) -> String {
    format!("{:.2}", value)
}

fn trend_rows(report: &TrendReport) -> Vec<Vec<String>> {
    report
        .records
        .iter()
        .map(|r| {
            let mut row = vec![
                r.samples.to_string(),
                truncate_label(&r.label, LABEL_WIDTH),
                number(r.throughput),
            ];
            row.extend(LatencyMetric::ALL.iter().map(|m| number(m.value(r))));
            row.push(r.source_file.clone());
            row
        })
        .collect()
}

fn bandwidth_rows(report: &TrendReport) -> Vec<Vec<String>> {
    report
        .bandwidth
        .received
        .points
        .iter()
        .zip(&report.bandwidth.sent.points)
        .map(|(received, sent)| {
            vec![
                received.samples.to_string(),
                number(received.value),
                number(sent.value),
            ]
        })
        .collect()
}

/// Throughput and response times per record, in ascending load order.
pub fn format_trend_table(report: &TrendReport) -> String {
    render_text(&TREND_HEADERS, &trend_rows(report))
}

/// Bandwidth of the aggregate rows, or a note when the selection has none.
pub fn format_bandwidth_table(report: &TrendReport) -> String {
    if report.bandwidth.received.is_empty() {
        return format!("No '{}' rows: bandwidth trend unavailable.\n", report.total_label);
    }
    render_text(&BANDWIDTH_HEADERS, &bandwidth_rows(report))
}

/// Full detail of the records measured at one sample value.
pub fn format_rows_detail(samples: u64, rows: &[&ReportRecord]) -> String {
    if rows.is_empty() {
        return format!("No rows with # Samples = {}.\n", samples);
    }

    let headers = [
        "Label",
        "Throughput",
        "Average",
        "Median",
        "90% Line",
        "95% Line",
        "99% Line",
        "Received",
        "Sent",
        "File",
    ];
    let table: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.label.clone(),
                format_rate(r.throughput),
                format_ms(r.average),
                format_ms(r.median),
                format_ms(r.p90),
                format_ms(r.p95),
                format_ms(r.p99),
                format_kbps(r.received_kbps),
                format_kbps(r.sent_kbps),
                r.source_file.clone(),
            ]
        })
        .collect();

    format!("# Samples = {}\n\n{}", samples, render_text(&headers, &table))
}

pub fn format_samples_list(samples: &[u64]) -> String {
    samples
        .iter()
        .map(|s| format!("{}\n", s))
        .collect()
}

/// What each plotted metric means.
pub fn format_explanations() -> String {
    let mut out = String::from("Explanations\n");
    out.push_str(&format!("  {}: {}\n", THROUGHPUT_NAME, THROUGHPUT_DESCRIPTION));
    for metric in LatencyMetric::ALL {
        out.push_str(&format!("  {}: {}\n", metric.name(), metric.description()));
    }
    out
}

pub fn format_failures(failures: &[FileFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("  {} ({}): {}\n", f.file, f.error_type, f.error))
        .collect()
}

/// Markdown rendering of a whole trend report.
pub fn format_markdown(report: &TrendReport) -> String {
    let selection = &report.selection;
    let mut out = format!(
        "# Load Test Trends: {} ({} cache)\n\n- Files: {}\n- Records: {}\n- Load levels: {}\n\n",
        selection.variant,
        selection.cache_state,
        report.files.len(),
        report.records.len(),
        report.distinct_samples.len(),
    );

    out.push_str("## Throughput and Response Times\n\n");
    out.push_str(&render_markdown(&TREND_HEADERS, &trend_rows(report)));

    out.push_str("\n## Bandwidth\n\n");
    if report.bandwidth.received.is_empty() {
        out.push_str(&format!("No `{}` rows in this selection.\n", report.total_label));
    } else {
        out.push_str(&render_markdown(&BANDWIDTH_HEADERS, &bandwidth_rows(report)));
    }

    if !report.failures.is_empty() {
        out.push_str("\n## Skipped Files\n\n");
        for f in &report.failures {
            out.push_str(&format!("- `{}` ({}): {}\n", f.file, f.error_type, f.error));
        }
    }

    out.push_str("\n## Explanations\n\n");
    out.push_str(&format!("- **{}**: {}\n", THROUGHPUT_NAME, THROUGHPUT_DESCRIPTION));
    for metric in LatencyMetric::ALL {
        out.push_str(&format!("- **{}**: {}\n", metric.name(), metric.description()));
    }

    out
}
