use std::collections::HashSet;
use crate::models::{AggregateView, ReportRecord, ReportSet};

/// Records whose label equals `label`, in input order.
pub fn filter_by_label<'a>(set: &'a ReportSet, label: &str) -> AggregateView<'a> {
    AggregateView {
        label: label.to_string(),
        records: set.iter().filter(|r| r.label == label).collect(),
    }
}

/// The aggregate rows of every run.
pub fn totals<'a>(set: &'a ReportSet, total_label: &str) -> AggregateView<'a> {
    filter_by_label(set, total_label)
}

/// Unique sample values in first-occurrence order.
pub fn distinct_samples(set: &ReportSet) -> Vec<u64> {
    let mut seen = HashSet::new();
    set.iter()
        .map(|r| r.samples)
        .filter(|s| seen.insert(*s))
        .collect()
}

/// Every record measured at exactly `samples`. No match is an empty result.
pub fn rows_for_sample(set: &ReportSet, samples: u64) -> Vec<&ReportRecord> {
    set.iter().filter(|r| r.samples == samples).collect()
}
