use loadtrend::aggregate::{distinct_samples, filter_by_label, merge, rows_for_sample, sort_by_samples};
use loadtrend::loader::{DirectoryCatalog, FileConvention, LoadOutcome, ReportLoader};
use loadtrend::metrics::{bandwidth_series, latency_series, throughput_series};
use loadtrend::models::{CacheState, Selection, Variant};
use loadtrend::pipeline::{analyze, Analysis, AnalysisOptions};
use loadtrend::ReportSet;
use std::fs;
use tempfile::TempDir;

const HEADER: &str = "Label,# Samples,Average,Median,90% Line,95% Line,99% Line,Min,Max,Error %,Throughput,Received KB/sec,Sent KB/sec";

fn jmeter_row(label: &str, samples: u64, throughput: f64) -> String {
    format!(
        "{label},{samples},{avg},{med},{p90},{p95},{p99},1,500,0.00%,{throughput},{recv},{sent}",
        avg = samples as f64 * 0.5,
        med = samples as f64 * 0.4,
        p90 = samples as f64 * 0.9,
        p95 = samples as f64 * 0.95,
        p99 = samples as f64 * 0.99,
        recv = throughput * 4.0,
        sent = throughput * 0.5,
    )
}

fn write_report(dir: &std::path::Path, name: &str, rows: &[String]) {
    let mut content = String::from(HEADER);
    content.push('\n');
    for row in rows {
        content.push_str(row);
        content.push('\n');
    }
    fs::write(dir.join(name), content).unwrap();
}

fn create_catalog_fixture(dir: &TempDir) -> std::path::PathBuf {
    let tasks_local = dir.path().join("Tasks").join("Local");
    fs::create_dir_all(&tasks_local).unwrap();

    write_report(
        &tasks_local,
        "run_100.csv",
        &[jmeter_row("GET /tasks", 100, 80.0), jmeter_row("TOTAL", 100, 80.0)],
    );
    write_report(
        &tasks_local,
        "run_10.csv",
        &[jmeter_row("GET /tasks", 10, 20.0), jmeter_row("TOTAL", 10, 20.0)],
    );
    write_report(&tasks_local, "run_50.csv", &[jmeter_row("TOTAL", 50, 55.0)]);
    write_report(&tasks_local, "run_10_clear.csv", &[jmeter_row("TOTAL", 10, 12.0)]);
    fs::write(tasks_local.join("notes.md"), "not a report").unwrap();

    let roster_vm = dir.path().join("Roster").join("VM");
    fs::create_dir_all(&roster_vm).unwrap();
    write_report(&roster_vm, "good.csv", &[jmeter_row("TOTAL", 5, 9.0)]);
    fs::write(roster_vm.join("truncated.csv"), format!("{HEADER}\nTOTAL,5,1,1\n")).unwrap();
    fs::write(roster_vm.join("wrong_columns.csv"), "# Samples,Label\n5,TOTAL\n").unwrap();

    dir.path().to_path_buf()
}

fn ready(analysis: Analysis) -> Box<loadtrend::TrendReport> {
    match analysis {
        Analysis::Ready(report) => report,
        Analysis::Empty { .. } => panic!("expected loaded reports"),
    }
}

#[test]
fn test_directory_analysis_sorts_across_files() {
    let dir = TempDir::new().unwrap();
    let root = create_catalog_fixture(&dir);
    let catalog = DirectoryCatalog::new(root);
    let selection = Selection::new(Variant::new("Tasks", "Local"), CacheState::Default);

    let report = ready(analyze(&catalog, &selection, &AnalysisOptions::default()).unwrap());

    assert_eq!(report.files, vec!["run_10.csv", "run_100.csv", "run_50.csv"]);
    assert_eq!(report.records.len(), 5);
    let samples: Vec<u64> = report.records.iter().map(|r| r.samples).collect();
    assert_eq!(samples, vec![10, 10, 50, 100, 100]);
    assert_eq!(report.distinct_samples, vec![10, 50, 100]);
    assert!(report.failures.is_empty());

    let totals: Vec<(u64, f64)> = report
        .bandwidth
        .received
        .points
        .iter()
        .map(|p| (p.samples, p.value))
        .collect();
    assert_eq!(totals, vec![(10, 80.0), (50, 220.0), (100, 320.0)]);
}

#[test]
fn test_directory_analysis_cleared_cohort() {
    let dir = TempDir::new().unwrap();
    let root = create_catalog_fixture(&dir);
    let catalog = DirectoryCatalog::new(root);
    let selection = Selection::new(Variant::new("Tasks", "Local"), CacheState::Cleared);

    let report = ready(analyze(&catalog, &selection, &AnalysisOptions::default()).unwrap());
    assert_eq!(report.files, vec!["run_10_clear.csv"]);
    assert_eq!(report.throughput.points[0].value, 12.0);
}

#[test]
fn test_malformed_files_are_skipped_and_reported() {
    let dir = TempDir::new().unwrap();
    let root = create_catalog_fixture(&dir);
    let catalog = DirectoryCatalog::new(root);
    let selection = Selection::new(Variant::new("Roster", "VM"), CacheState::Default);

    let report = ready(analyze(&catalog, &selection, &AnalysisOptions::default()).unwrap());
    assert_eq!(report.records.len(), 1);
    assert_eq!(report.records.records()[0].source_file, "good.csv");

    let failed: Vec<(&str, &str)> = report
        .failures
        .iter()
        .map(|f| (f.file.as_str(), f.error_type))
        .collect();
    assert_eq!(failed, vec![("truncated.csv", "ParseError"), ("wrong_columns.csv", "SchemaError")]);
}

#[test]
fn test_missing_variant_directory_is_empty_result() {
    let dir = TempDir::new().unwrap();
    let root = create_catalog_fixture(&dir);
    let catalog = DirectoryCatalog::new(root);
    let selection = Selection::new(Variant::new("All", "VM"), CacheState::Default);

    match analyze(&catalog, &selection, &AnalysisOptions::default()).unwrap() {
        Analysis::Empty { files, failures, .. } => {
            assert!(files.is_empty());
            assert!(failures.is_empty());
        }
        Analysis::Ready(_) => panic!("expected no data"),
    }
}

#[test]
fn test_all_files_failing_is_empty_result() {
    let dir = TempDir::new().unwrap();
    let root = create_catalog_fixture(&dir);
    fs::remove_file(root.join("Roster").join("VM").join("good.csv")).unwrap();
    let catalog = DirectoryCatalog::new(root);
    let selection = Selection::new(Variant::new("Roster", "VM"), CacheState::Default);

    let analysis = analyze(&catalog, &selection, &AnalysisOptions::default()).unwrap();
    assert!(analysis.report().is_none());
    assert_eq!(analysis.failures().len(), 2);
}

#[test]
fn test_engine_steps_compose() {
    let dir = TempDir::new().unwrap();
    let root = create_catalog_fixture(&dir);
    let catalog = DirectoryCatalog::new(root);
    let variant = Variant::new("Tasks", "Local");
    let loader = ReportLoader::new(&catalog, FileConvention::default());

    let files = loader.select(&variant, CacheState::Default).unwrap();
    let per_file: Vec<ReportSet> = files
        .iter()
        .map(|f| ReportSet::new(loader.load(&variant, f).unwrap()).unwrap())
        .collect();
    let sizes: usize = per_file.iter().map(|s| s.len()).sum();

    let merged = merge(per_file).unwrap();
    assert_eq!(merged.len(), sizes);

    let sorted = sort_by_samples(merged);
    assert!(sorted.records().windows(2).all(|w| w[0].samples <= w[1].samples));

    let view = filter_by_label(&sorted, "TOTAL");
    assert_eq!(view.len(), 3);
    assert_eq!(bandwidth_series(&view).sent.len(), 3);
    assert_eq!(throughput_series(&sorted).len(), sorted.len());
    assert!(latency_series(&sorted).iter().all(|s| s.len() == sorted.len()));
    assert_eq!(distinct_samples(&sorted), vec![10, 50, 100]);
    assert_eq!(rows_for_sample(&sorted, 100).len(), 2);
    assert!(rows_for_sample(&sorted, 999).is_empty());

    match loader.load_all(&variant, &files).unwrap() {
        LoadOutcome::Loaded { reports, failures } => {
            assert_eq!(reports.len(), sizes);
            assert!(failures.is_empty());
        }
        LoadOutcome::Empty { .. } => panic!("expected records"),
    }
}

#[test]
fn test_report_serializes_to_json() {
    let dir = TempDir::new().unwrap();
    let root = create_catalog_fixture(&dir);
    let catalog = DirectoryCatalog::new(root);
    let selection = Selection::new(Variant::new("Tasks", "Local"), CacheState::Default);
    let report = ready(analyze(&catalog, &selection, &AnalysisOptions::default()).unwrap());

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["selection"]["cache_state"], "default");
    assert_eq!(json["records"].as_array().unwrap().len(), 5);
    assert_eq!(json["records"][0]["samples"], 10);
    assert_eq!(json["latency"][2]["name"], "90% Line");
    assert_eq!(json["bandwidth"]["sent"]["points"][0]["value"], 10.0);
}
